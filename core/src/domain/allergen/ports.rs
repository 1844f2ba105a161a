use crate::domain::{allergen::entities::AllergenEntry, common::entities::app_errors::CoreError};

/// Read-only access to the allergen taxonomy.
#[cfg_attr(test, mockall::automock)]
pub trait AllergenService: Send + Sync {
    /// Every canonical allergen, in declared order.
    fn list_allergens(&self) -> Vec<AllergenEntry>;

    /// Resolves a canonical name or synonym.
    fn get_allergen(&self, name: &str) -> Result<AllergenEntry, CoreError>;
}
