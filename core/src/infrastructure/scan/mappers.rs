use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::entities::{ScanResult, ScanSource, Severity},
    },
    entity::scan_records,
    infrastructure::db::columns::decode_column,
};

impl TryFrom<&scan_records::Model> for ScanResult {
    type Error = CoreError;

    fn try_from(model: &scan_records::Model) -> Result<Self, Self::Error> {
        let severity: Severity = model
            .severity
            .parse()
            .map_err(|_| CoreError::Persistence(format!("corrupt severity '{}'", model.severity)))?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            product_name: model.product_name.clone(),
            ingredients: decode_column("ingredients", &model.ingredients)?,
            allergens_detected: decode_column("allergens_detected", &model.allergens_detected)?,
            per_allergen_risk: decode_column("per_allergen_risk", &model.per_allergen_risk)?,
            evidence: decode_column("evidence", &model.evidence)?,
            severity,
            safe: model.safe,
            source: ScanSource::from(model.source.as_str()),
            notes: model.notes.clone(),
            timestamp: model.timestamp.to_utc(),
        })
    }
}

impl TryFrom<scan_records::Model> for ScanResult {
    type Error = CoreError;

    fn try_from(model: scan_records::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn row(severity: &str) -> scan_records::Model {
        scan_records::Model {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            product_name: "Snack".to_string(),
            ingredients: json!(["peanut butter", "sugar"]),
            allergens_detected: json!(["peanuts"]),
            per_allergen_risk: json!({ "peanuts": "severe" }),
            evidence: json!({ "peanuts": ["peanut butter"] }),
            severity: severity.to_string(),
            safe: false,
            source: "image".to_string(),
            notes: Some("Label analysis: PRODUCT: Snack".to_string()),
            timestamp: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn maps_stored_row() {
        let scan = ScanResult::try_from(row("severe")).unwrap();

        assert_eq!(scan.severity, Severity::Severe);
        assert_eq!(scan.source, ScanSource::Image);
        assert_eq!(scan.ingredients, vec!["peanut butter", "sugar"]);
        assert_eq!(scan.per_allergen_risk["peanuts"], Severity::Severe);
        assert_eq!(scan.evidence["peanuts"], vec!["peanut butter".to_string()]);
    }

    #[test]
    fn unknown_severity_is_rejected() {
        assert!(matches!(
            ScanResult::try_from(row("catastrophic")),
            Err(CoreError::Persistence(_))
        ));
    }
}
