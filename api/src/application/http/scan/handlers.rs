pub mod get_scan_history;
pub mod scan_image;
pub mod scan_manual;
