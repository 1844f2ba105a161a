pub mod allergy_profile_repository;
