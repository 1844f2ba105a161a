pub mod allergy_profiles;
pub mod scan_records;
