use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergenEntry {
    pub canonical_name: String,
    pub label: String,
    /// Match keys, the canonical name's own key included.
    pub synonyms: BTreeSet<String>,
    /// Phrases that contain a synonym without revealing this allergen.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exclusions: BTreeSet<String>,
    pub risk_hint: RiskHint,
}

/// Typical reaction strength of an allergen, shown to users while they set up a
/// profile. It never feeds the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskHint {
    High,
    Medium,
    Low,
}
