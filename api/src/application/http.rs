pub mod allergen;
pub mod allergy_profile;
pub mod health;
pub mod scan;
pub mod server;
