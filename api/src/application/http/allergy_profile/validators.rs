use std::collections::BTreeMap;

use allerscan_core::domain::{
    allergy_profile::value_objects::UpdateAllergyProfileInput,
    common::entities::app_errors::CoreError, scan::entities::Severity,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateAllergyProfileValidator {
    /// Canonical allergen names or synonyms.
    #[serde(default)]
    #[validate(length(max = 50, message = "at most 50 declared allergens"))]
    pub declared_allergens: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "at most 50 custom allergens"))]
    pub custom_allergens: Vec<String>,

    /// Allergen -> `mild`, `moderate` or `severe`.
    #[serde(default)]
    #[schema(example = json!({ "peanuts": "severe" }))]
    pub severity_levels: BTreeMap<String, String>,
}

impl TryFrom<UpdateAllergyProfileValidator> for UpdateAllergyProfileInput {
    type Error = CoreError;

    fn try_from(payload: UpdateAllergyProfileValidator) -> Result<Self, Self::Error> {
        let severity_overrides = payload
            .severity_levels
            .into_iter()
            .map(|(allergen, level)| Ok((allergen, level.parse::<Severity>()?)))
            .collect::<Result<BTreeMap<_, _>, CoreError>>()?;

        Ok(Self {
            declared_allergens: payload.declared_allergens,
            custom_allergens: payload.custom_allergens,
            severity_overrides,
        })
    }
}
