pub mod allergy_profile;
pub mod db;
pub mod llm;
pub mod scan;
