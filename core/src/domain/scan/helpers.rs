use uuid::Uuid;

use crate::domain::scan::{
    aggregator::Verdict,
    entities::{ScanInput, ScanResult, ScanResultConfig},
    matcher::MatchResult,
};

/// Assembles the immutable record of one evaluation. Pure apart from the
/// capture timestamp; storing it is up to the caller.
pub fn build_scan_result(
    user_id: Uuid,
    input: &ScanInput,
    tokens: Vec<String>,
    matches: MatchResult,
    verdict: Verdict,
    notes: Option<String>,
) -> ScanResult {
    let evidence = matches
        .evidence
        .into_iter()
        .map(|(allergen, hits)| (allergen, hits.into_iter().collect()))
        .collect();

    ScanResult::new(ScanResultConfig {
        user_id,
        product_name: input.product_name().to_string(),
        ingredients: tokens,
        per_allergen_risk: verdict.per_allergen_risk,
        evidence,
        severity: verdict.severity,
        source: input.source(),
        notes,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;
    use crate::domain::scan::entities::{ScanSource, Severity};

    #[test]
    fn carries_input_tokens_and_verdict() {
        let input = ScanInput::new("Cookies", "Milk, Sugar", ScanSource::Manual).unwrap();
        let matches = MatchResult {
            evidence: BTreeMap::from([(
                "milk".to_string(),
                BTreeSet::from(["milk".to_string()]),
            )]),
        };
        let verdict = Verdict {
            severity: Severity::Mild,
            per_allergen_risk: BTreeMap::from([("milk".to_string(), Severity::Mild)]),
            safe: false,
        };

        let scan = build_scan_result(
            Uuid::nil(),
            &input,
            vec!["milk".to_string(), "sugar".to_string()],
            matches,
            verdict,
            None,
        );

        assert_eq!(scan.product_name, "Cookies");
        assert_eq!(scan.ingredients, vec!["milk", "sugar"]);
        assert_eq!(scan.allergens_detected, BTreeSet::from(["milk".to_string()]));
        assert_eq!(scan.evidence["milk"], vec!["milk".to_string()]);
        assert_eq!(scan.severity, Severity::Mild);
        assert!(!scan.safe);
        assert_eq!(scan.source, ScanSource::Manual);
    }

    #[test]
    fn timestamps_do_not_go_backwards() {
        let input = ScanInput::new("Water", "Water", ScanSource::Manual).unwrap();
        let build = || {
            build_scan_result(
                Uuid::nil(),
                &input,
                vec!["water".to_string()],
                MatchResult::default(),
                Verdict {
                    severity: Severity::Safe,
                    per_allergen_risk: BTreeMap::new(),
                    safe: true,
                },
                None,
            )
        };

        let first = build();
        let second = build();
        assert!(second.timestamp >= first.timestamp);
        assert_ne!(first.id, second.id);
        assert!(first.safe);
    }
}
