use std::collections::BTreeMap;

use crate::domain::scan::entities::Severity;

/// Full replacement of a user's allergens; nothing is merged with the stored
/// profile.
#[derive(Debug, Clone, Default)]
pub struct UpdateAllergyProfileInput {
    pub declared_allergens: Vec<String>,
    pub custom_allergens: Vec<String>,
    pub severity_overrides: BTreeMap<String, Severity>,
}
