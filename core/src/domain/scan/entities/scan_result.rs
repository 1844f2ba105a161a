use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    scan::entities::{ScanSource, Severity},
};

/// Outcome of evaluating one product against one profile. Never mutated once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_name: String,
    /// Normalized tokens exactly as analyzed.
    pub ingredients: Vec<String>,
    pub allergens_detected: BTreeSet<String>,
    pub per_allergen_risk: BTreeMap<String, Severity>,
    /// Allergen -> ingredient tokens that revealed it.
    pub evidence: BTreeMap<String, Vec<String>>,
    pub severity: Severity,
    pub safe: bool,
    pub source: ScanSource,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ScanResultConfig {
    pub user_id: Uuid,
    pub product_name: String,
    pub ingredients: Vec<String>,
    pub per_allergen_risk: BTreeMap<String, Severity>,
    pub evidence: BTreeMap<String, Vec<String>>,
    pub severity: Severity,
    pub source: ScanSource,
    pub notes: Option<String>,
}

impl ScanResult {
    pub fn new(config: ScanResultConfig) -> Self {
        let (now, timestamp) = generate_timestamp();
        let allergens_detected: BTreeSet<String> =
            config.per_allergen_risk.keys().cloned().collect();
        let safe = allergens_detected.is_empty() && config.severity == Severity::Safe;

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            product_name: config.product_name,
            ingredients: config.ingredients,
            allergens_detected,
            per_allergen_risk: config.per_allergen_risk,
            evidence: config.evidence,
            severity: config.severity,
            safe,
            source: config.source,
            notes: config.notes,
            timestamp: now,
        }
    }
}

/// What a scan request hands back: the verdict, and whether it reached the
/// history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanOutcome {
    pub scan: ScanResult,
    pub persisted: bool,
}
