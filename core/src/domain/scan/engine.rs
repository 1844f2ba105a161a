//! The allergen engine: normalize, match, aggregate, build.
//!
//! Everything here is synchronous and free of shared mutable state except the
//! label read in [`evaluate_from_image`], which is delegated to a
//! [`TextExtractor`].

use crate::domain::{
    allergen::AllergenTaxonomy,
    allergy_profile::entities::AllergyProfile,
    common::entities::app_errors::CoreError,
    ingredient::normalize_ingredients,
    scan::{
        aggregator::aggregate,
        entities::{ScanInput, ScanResult, ScanSource},
        helpers::build_scan_result,
        label::{extraction_notes, parse_label_extraction},
        matcher::match_allergens,
        ports::TextExtractor,
        value_objects::MAX_IMAGE_SIZE,
    },
};

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

pub fn evaluate(
    profile: &AllergyProfile,
    input: &ScanInput,
    notes: Option<String>,
    taxonomy: &AllergenTaxonomy,
) -> ScanResult {
    let tokens = normalize_ingredients(input.ingredient_text());
    let matches = match_allergens(&tokens, profile, taxonomy);
    let verdict = aggregate(&matches.allergens(), profile);

    build_scan_result(profile.user_id, input, tokens, matches, verdict, notes)
}

pub fn evaluate_manual(
    profile: &AllergyProfile,
    product_name: &str,
    ingredient_text: &str,
    taxonomy: &AllergenTaxonomy,
) -> Result<ScanResult, CoreError> {
    let input = ScanInput::new(product_name, ingredient_text, ScanSource::Manual)?;
    Ok(evaluate(profile, &input, None, taxonomy))
}

pub fn validate_image(image_data: &[u8]) -> Result<(), CoreError> {
    if image_data.is_empty() {
        return Err(CoreError::Validation("image must not be empty".to_string()));
    }

    if image_data.len() > MAX_IMAGE_SIZE {
        return Err(CoreError::Validation(format!(
            "image too large, max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(())
}

/// Reads the label through `extractor`, then evaluates exactly like the
/// manual path. A blank `product_name` falls back to the name on the label.
pub async fn evaluate_from_image<TE: TextExtractor>(
    profile: &AllergyProfile,
    product_name: Option<&str>,
    image_data: Vec<u8>,
    extractor: &TE,
    taxonomy: &AllergenTaxonomy,
) -> Result<ScanResult, CoreError> {
    validate_image(&image_data)?;

    let raw = extractor.extract(image_data).await?;
    let label = parse_label_extraction(&raw);

    if label.ingredient_text.trim().is_empty() {
        return Err(CoreError::Extraction(
            "no ingredient text found on the label".to_string(),
        ));
    }

    let product_name = product_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or(label.product_name.as_deref())
        .unwrap_or(UNKNOWN_PRODUCT);

    let input = ScanInput::new(product_name, &label.ingredient_text, ScanSource::Image)?;

    Ok(evaluate(
        profile,
        &input,
        Some(extraction_notes(&raw)),
        taxonomy,
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        allergy_profile::entities::AllergyProfileConfig, common::fakes::StaticTextExtractor,
        scan::entities::Severity,
    };

    fn scenario_profile() -> AllergyProfile {
        AllergyProfile::new(
            AllergyProfileConfig {
                user_id: Uuid::nil(),
                declared_allergens: vec!["peanuts".into(), "milk".into()],
                custom_allergens: vec!["sesame".into()],
                severity_overrides: BTreeMap::from([
                    ("peanuts".to_string(), Severity::Severe),
                    ("milk".to_string(), Severity::Mild),
                ]),
            },
            &AllergenTaxonomy::builtin(),
        )
        .unwrap()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scenario_a_detects_declared_allergens_with_overrides() {
        let scan = evaluate_manual(
            &scenario_profile(),
            "Snack",
            "Wheat flour, Peanut butter, Sugar, Milk solids",
            &AllergenTaxonomy::builtin(),
        )
        .unwrap();

        assert_eq!(scan.allergens_detected, set(&["peanuts", "milk"]));
        assert_eq!(
            scan.per_allergen_risk,
            BTreeMap::from([
                ("peanuts".to_string(), Severity::Severe),
                ("milk".to_string(), Severity::Mild),
            ])
        );
        assert_eq!(scan.severity, Severity::Severe);
        assert!(!scan.safe);
        assert_eq!(
            scan.ingredients,
            vec!["wheat flour", "peanut butter", "sugar", "milk solids"]
        );
    }

    #[test]
    fn scenario_b_clean_list_is_safe() {
        let scan = evaluate_manual(
            &scenario_profile(),
            "Bread",
            "Wheat flour, Sugar, Water",
            &AllergenTaxonomy::builtin(),
        )
        .unwrap();

        assert!(scan.allergens_detected.is_empty());
        assert_eq!(scan.severity, Severity::Safe);
        assert!(scan.safe);
    }

    #[test]
    fn scenario_c_empty_profile_is_always_safe() {
        let profile = AllergyProfile::empty(Uuid::nil());
        for text in [
            "Peanuts, Milk, Eggs",
            "Tahini (sesame), Shrimp",
            "Wheat flour; Soy lecithin",
        ] {
            let scan =
                evaluate_manual(&profile, "Anything", text, &AllergenTaxonomy::builtin()).unwrap();
            assert!(scan.safe, "{text}");
            assert_eq!(scan.severity, Severity::Safe);
        }
    }

    #[test]
    fn scenario_d_custom_allergen_inside_parentheses() {
        let profile = AllergyProfile::new(
            AllergyProfileConfig {
                user_id: Uuid::nil(),
                custom_allergens: vec!["sesame".into()],
                ..Default::default()
            },
            &AllergenTaxonomy::builtin(),
        )
        .unwrap();

        let scan = evaluate_manual(
            &profile,
            "Hummus",
            "Tahini (sesame paste), Olive oil",
            &AllergenTaxonomy::builtin(),
        )
        .unwrap();

        assert_eq!(scan.allergens_detected, set(&["sesame"]));
        assert_eq!(scan.severity, Severity::Moderate);
        assert!(scan.evidence["sesame"].contains(&"sesame paste".to_string()));
    }

    #[test]
    fn literal_custom_allergen_matches_only_itself() {
        let profile = AllergyProfile::new(
            AllergyProfileConfig {
                user_id: Uuid::nil(),
                custom_allergens: vec!["Olive Oil".into()],
                ..Default::default()
            },
            &AllergenTaxonomy::builtin(),
        )
        .unwrap();

        let scan = evaluate_manual(
            &profile,
            "Hummus",
            "Tahini (sesame paste), Extra virgin olive oil",
            &AllergenTaxonomy::builtin(),
        )
        .unwrap();

        assert_eq!(scan.allergens_detected, set(&["Olive Oil"]));
        assert_eq!(scan.evidence["Olive Oil"], vec!["extra virgin olive oil".to_string()]);
    }

    #[test]
    fn safe_iff_nothing_detected() {
        let profile = scenario_profile();
        for text in ["Peanuts", "Water", "Milk, Salt", "Sesame seeds", "Sugar"] {
            let scan =
                evaluate_manual(&profile, "P", text, &AllergenTaxonomy::builtin()).unwrap();
            assert_eq!(scan.safe, scan.allergens_detected.is_empty(), "{text}");
        }
    }

    #[test]
    fn blank_fields_are_rejected_before_matching() {
        let profile = scenario_profile();
        assert!(matches!(
            evaluate_manual(&profile, "", "Milk", &AllergenTaxonomy::builtin()),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            evaluate_manual(&profile, "Snack", "   ", &AllergenTaxonomy::builtin()),
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn image_path_uses_extracted_label() {
        let extractor = StaticTextExtractor::returning(
            "PRODUCT: Nutty Bar\nINGREDIENTS: Oats, Peanuts (roasted), Honey",
        );

        let scan = evaluate_from_image(
            &scenario_profile(),
            None,
            vec![0xFF, 0xD8, 0xFF],
            &extractor,
            &AllergenTaxonomy::builtin(),
        )
        .await
        .unwrap();

        assert_eq!(scan.product_name, "Nutty Bar");
        assert_eq!(scan.source, ScanSource::Image);
        assert_eq!(scan.allergens_detected, set(&["peanuts"]));
        assert_eq!(scan.severity, Severity::Severe);
        assert!(scan.notes.unwrap().starts_with("Label analysis: PRODUCT: Nutty Bar"));
    }

    #[tokio::test]
    async fn caller_product_name_wins_over_label() {
        let extractor = StaticTextExtractor::returning("PRODUCT: Label Name\nINGREDIENTS: Water");

        let scan = evaluate_from_image(
            &scenario_profile(),
            Some("My Name"),
            vec![1],
            &extractor,
            &AllergenTaxonomy::builtin(),
        )
        .await
        .unwrap();
        assert_eq!(scan.product_name, "My Name");

        let scan = evaluate_from_image(
            &scenario_profile(),
            Some("  "),
            vec![1],
            &StaticTextExtractor::returning("Water"),
            &AllergenTaxonomy::builtin(),
        )
        .await
        .unwrap();
        assert_eq!(scan.product_name, UNKNOWN_PRODUCT);
    }

    #[tokio::test]
    async fn extraction_failure_is_distinct_from_safe() {
        let failing = StaticTextExtractor::failing("blurry image");
        let err = evaluate_from_image(
            &scenario_profile(),
            None,
            vec![1],
            &failing,
            &AllergenTaxonomy::builtin(),
        )
        .await
        .unwrap_err();
        assert_eq!(err, CoreError::Extraction("blurry image".to_string()));

        let blank = StaticTextExtractor::returning("PRODUCT: Mystery\nINGREDIENTS:   ");
        let err = evaluate_from_image(
            &scenario_profile(),
            None,
            vec![1],
            &blank,
            &AllergenTaxonomy::builtin(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CoreError::Extraction(_)));
    }

    #[tokio::test]
    async fn empty_image_is_a_validation_error() {
        let extractor = StaticTextExtractor::returning("Milk");
        let err = evaluate_from_image(
            &scenario_profile(),
            None,
            Vec::new(),
            &extractor,
            &AllergenTaxonomy::builtin(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(extractor.calls(), 0);
    }
}
