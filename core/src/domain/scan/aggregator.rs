use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{allergy_profile::entities::AllergyProfile, scan::entities::Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub per_allergen_risk: BTreeMap<String, Severity>,
    pub safe: bool,
}

/// Resolves each matched allergen's severity (override, else moderate) and
/// takes the highest as the overall level. No match means `safe`.
pub fn aggregate(matched: &BTreeSet<String>, profile: &AllergyProfile) -> Verdict {
    let per_allergen_risk: BTreeMap<String, Severity> = matched
        .iter()
        .map(|allergen| (allergen.clone(), profile.severity_for(allergen)))
        .collect();

    let severity = per_allergen_risk
        .values()
        .copied()
        .max()
        .unwrap_or(Severity::Safe);

    Verdict {
        severity,
        per_allergen_risk,
        safe: severity == Severity::Safe,
    }
}
