pub mod scan_input;
pub mod scan_result;
pub mod severity;

pub use scan_input::*;
pub use scan_result::*;
pub use severity::*;
