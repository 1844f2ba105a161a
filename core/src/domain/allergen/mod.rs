pub mod entities;
pub mod ports;
pub mod services;
pub mod taxonomy;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use taxonomy::{ALLERGEN_TAXONOMY, AllergenTaxonomy};
pub use value_objects::*;
