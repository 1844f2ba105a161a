pub mod allergen;
pub mod allergy_profile;
pub mod authentication;
pub mod common;
pub mod ingredient;
pub mod scan;
