use crate::{
    domain::{allergy_profile::entities::AllergyProfile, common::entities::app_errors::CoreError},
    entity::allergy_profiles,
    infrastructure::db::columns::decode_column,
};

impl TryFrom<&allergy_profiles::Model> for AllergyProfile {
    type Error = CoreError;

    fn try_from(model: &allergy_profiles::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: model.user_id,
            declared_allergens: decode_column("declared_allergens", &model.declared_allergens)?,
            custom_allergens: decode_column("custom_allergens", &model.custom_allergens)?,
            severity_overrides: decode_column("severity_overrides", &model.severity_overrides)?,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<allergy_profiles::Model> for AllergyProfile {
    type Error = CoreError;

    fn try_from(model: allergy_profiles::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::domain::scan::entities::Severity;

    #[test]
    fn maps_stored_row() {
        let now = Utc::now().fixed_offset();
        let model = allergy_profiles::Model {
            user_id: Uuid::nil(),
            declared_allergens: json!(["milk", "peanuts"]),
            custom_allergens: json!(["kiwi"]),
            severity_overrides: json!({ "peanuts": "severe" }),
            created_at: now,
            updated_at: now,
        };

        let profile = AllergyProfile::try_from(model).unwrap();

        assert!(profile.declared_allergens.contains("milk"));
        assert!(profile.custom_allergens.contains("kiwi"));
        assert_eq!(profile.severity_for("peanuts"), Severity::Severe);
        assert_eq!(profile.severity_for("milk"), Severity::Moderate);
    }

    #[test]
    fn corrupt_json_is_a_persistence_error() {
        let now = Utc::now().fixed_offset();
        let model = allergy_profiles::Model {
            user_id: Uuid::nil(),
            declared_allergens: json!({ "not": "a list" }),
            custom_allergens: json!([]),
            severity_overrides: json!({}),
            created_at: now,
            updated_at: now,
        };

        assert!(matches!(
            AllergyProfile::try_from(&model),
            Err(CoreError::Persistence(_))
        ));
    }
}
