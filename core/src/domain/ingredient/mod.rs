pub mod normalizer;

pub use normalizer::normalize_ingredients;
