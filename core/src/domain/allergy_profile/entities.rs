use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allergen::{AllergenRef, AllergenTaxonomy, allergen_key},
    common::{entities::app_errors::CoreError, monotonic_now},
    scan::entities::Severity,
};

const MAX_CUSTOM_ALLERGEN_LEN: usize = 100;

/// One user's declared allergies.
///
/// Invariants, enforced by [`AllergyProfile::new`]:
/// - declared names are canonical taxonomy names;
/// - no allergen is both declared and custom, and custom names are unique
///   ignoring case;
/// - every severity override names a declared or custom allergen and is
///   never `safe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergyProfile {
    pub user_id: Uuid,
    pub declared_allergens: BTreeSet<String>,
    pub custom_allergens: BTreeSet<String>,
    pub severity_overrides: BTreeMap<String, Severity>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AllergyProfileConfig {
    pub user_id: Uuid,
    pub declared_allergens: Vec<String>,
    pub custom_allergens: Vec<String>,
    pub severity_overrides: BTreeMap<String, Severity>,
}

impl AllergyProfile {
    pub fn new(config: AllergyProfileConfig, taxonomy: &AllergenTaxonomy) -> Result<Self, CoreError> {
        let mut declared_allergens = BTreeSet::new();
        for name in &config.declared_allergens {
            let entry = taxonomy
                .lookup(name)
                .ok_or_else(|| CoreError::UnknownAllergen(name.trim().to_string()))?;
            declared_allergens.insert(entry.canonical_name.clone());
        }

        let mut custom_allergens = BTreeSet::new();
        let mut custom_keys = BTreeSet::new();
        for raw in &config.custom_allergens {
            let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err(CoreError::Validation(
                    "custom allergen must not be empty".to_string(),
                ));
            }
            if name.chars().count() > MAX_CUSTOM_ALLERGEN_LEN {
                return Err(CoreError::Validation(format!(
                    "custom allergen must be at most {MAX_CUSTOM_ALLERGEN_LEN} characters"
                )));
            }

            if let Some(entry) = taxonomy.get_canonical(&name) {
                declared_allergens.insert(entry.canonical_name.clone());
                continue;
            }

            if custom_keys.insert(allergen_key(&name)) {
                custom_allergens.insert(name);
            }
        }

        let mut profile = Self::empty(config.user_id);
        profile.declared_allergens = declared_allergens;
        profile.custom_allergens = custom_allergens;

        for (name, severity) in config.severity_overrides {
            if !severity.is_assignable() {
                return Err(CoreError::InvalidSeverity(format!(
                    "'{}' cannot be assigned to '{}'",
                    severity, name
                )));
            }

            let allergen = profile.resolve_member(&name, taxonomy).ok_or_else(|| {
                CoreError::Validation(format!(
                    "severity override for undeclared allergen '{}'",
                    name.trim()
                ))
            })?;

            if profile.severity_overrides.contains_key(&allergen) {
                return Err(CoreError::Validation(format!(
                    "more than one severity override for '{}'",
                    allergen
                )));
            }
            profile.severity_overrides.insert(allergen, severity);
        }

        Ok(profile)
    }

    /// Profile with nothing declared; every scan against it is safe.
    pub fn empty(user_id: Uuid) -> Self {
        let now = monotonic_now();

        Self {
            user_id,
            declared_allergens: BTreeSet::new(),
            custom_allergens: BTreeSet::new(),
            severity_overrides: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declared_allergens.is_empty() && self.custom_allergens.is_empty()
    }

    pub fn allergens(&self) -> impl Iterator<Item = AllergenRef<'_>> {
        self.declared_allergens
            .iter()
            .map(|name| AllergenRef::Declared(name))
            .chain(
                self.custom_allergens
                    .iter()
                    .map(|name| AllergenRef::Custom(name)),
            )
    }

    pub fn contains_allergen(&self, name: &str) -> bool {
        self.declared_allergens.contains(name) || self.custom_allergens.contains(name)
    }

    pub fn severity_for(&self, allergen: &str) -> Severity {
        self.severity_overrides
            .get(allergen)
            .copied()
            .unwrap_or(Severity::DEFAULT)
    }

    /// Drops an allergen together with its severity override.
    pub fn remove_allergen(&mut self, name: &str) -> bool {
        let removed = self.declared_allergens.remove(name) | self.custom_allergens.remove(name);
        if removed {
            self.severity_overrides.remove(name);
            self.updated_at = monotonic_now();
        }
        removed
    }

    /// Maps a user-supplied name onto the stored allergen it refers to. An
    /// exact custom spelling wins over a taxonomy synonym.
    fn resolve_member(&self, name: &str, taxonomy: &AllergenTaxonomy) -> Option<String> {
        let key = allergen_key(name);

        if let Some(custom) = self
            .custom_allergens
            .iter()
            .find(|custom| allergen_key(custom) == key)
        {
            return Some(custom.clone());
        }

        taxonomy
            .lookup(name)
            .filter(|entry| self.declared_allergens.contains(&entry.canonical_name))
            .map(|entry| entry.canonical_name.clone())
    }
}
