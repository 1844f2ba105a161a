//! Registry of canonical allergens and the words that reveal them on a label.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::domain::allergen::{
    entities::{AllergenEntry, RiskHint},
    value_objects::{AllergenRef, AllergenTerms, allergen_key},
};

struct AllergenDefinition {
    canonical_name: &'static str,
    label: &'static str,
    risk_hint: RiskHint,
    synonyms: &'static [&'static str],
    /// Phrases that contain a synonym but name something else, such as
    /// `cocoa butter`.
    exclusions: &'static [&'static str],
}

/// Declared order is the order shown to users.
const REGISTRY: &[AllergenDefinition] = &[
    AllergenDefinition {
        canonical_name: "peanuts",
        label: "Peanuts",
        risk_hint: RiskHint::High,
        synonyms: &["peanut", "groundnut", "groundnuts", "arachis"],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "tree_nuts",
        label: "Tree nuts",
        risk_hint: RiskHint::High,
        synonyms: &[
            "tree nut",
            "almond",
            "almonds",
            "cashew",
            "cashews",
            "walnut",
            "walnuts",
            "pecan",
            "pecans",
            "pistachio",
            "pistachios",
            "hazelnut",
            "hazelnuts",
            "macadamia",
            "brazil nut",
            "brazil nuts",
        ],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "milk",
        label: "Milk",
        risk_hint: RiskHint::Medium,
        synonyms: &[
            "dairy",
            "cheese",
            "butter",
            "cream",
            "yogurt",
            "yoghurt",
            "whey",
            "casein",
            "caseinate",
            "lactose",
        ],
        exclusions: &[
            "cocoa butter",
            "shea butter",
            "peanut butter",
            "nut butter",
            "almond butter",
            "cashew butter",
            "apple butter",
            "coconut milk",
            "coconut cream",
            "almond milk",
            "oat milk",
            "rice milk",
            "soy milk",
            "cream of tartar",
        ],
    },
    AllergenDefinition {
        canonical_name: "eggs",
        label: "Eggs",
        risk_hint: RiskHint::Medium,
        synonyms: &["egg", "albumin", "mayonnaise"],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "soy",
        label: "Soy",
        risk_hint: RiskHint::Medium,
        synonyms: &["soya", "soybean", "soybeans", "tofu", "edamame", "tempeh"],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "wheat",
        label: "Wheat",
        risk_hint: RiskHint::Medium,
        synonyms: &["flour", "gluten", "semolina", "durum"],
        exclusions: &[
            "rice flour",
            "corn flour",
            "maize flour",
            "potato flour",
            "tapioca flour",
            "almond flour",
            "coconut flour",
            "chickpea flour",
            "soy flour",
            "oat flour",
            "buckwheat flour",
            "gluten free",
        ],
    },
    AllergenDefinition {
        canonical_name: "fish",
        label: "Fish",
        risk_hint: RiskHint::High,
        synonyms: &["salmon", "tuna", "cod", "anchovy", "anchovies"],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "shellfish",
        label: "Shellfish",
        risk_hint: RiskHint::High,
        synonyms: &[
            "shrimp", "shrimps", "crab", "lobster", "prawn", "prawns", "clam", "clams", "oyster",
            "oysters", "mussel", "mussels",
        ],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "sesame",
        label: "Sesame",
        risk_hint: RiskHint::Medium,
        synonyms: &["tahini"],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "mustard",
        label: "Mustard",
        risk_hint: RiskHint::Low,
        synonyms: &[],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "celery",
        label: "Celery",
        risk_hint: RiskHint::Low,
        synonyms: &["celeriac"],
        exclusions: &[],
    },
    AllergenDefinition {
        canonical_name: "sulfites",
        label: "Sulfites",
        risk_hint: RiskHint::Medium,
        synonyms: &[
            "sulfite",
            "sulphite",
            "sulphites",
            "sodium metabisulfite",
        ],
        exclusions: &[],
    },
];

/// Loaded once on first use and never mutated.
pub static ALLERGEN_TAXONOMY: LazyLock<AllergenTaxonomy> = LazyLock::new(AllergenTaxonomy::builtin);

#[derive(Debug, Clone)]
pub struct AllergenTaxonomy {
    entries: Vec<AllergenEntry>,
    canonical_index: HashMap<String, usize>,
    synonym_index: HashMap<String, usize>,
}

impl AllergenTaxonomy {
    pub fn builtin() -> Self {
        let entries = REGISTRY
            .iter()
            .map(|definition| {
                let mut synonyms: BTreeSet<String> = definition
                    .synonyms
                    .iter()
                    .map(|synonym| allergen_key(synonym))
                    .filter(|key| !key.is_empty())
                    .collect();
                synonyms.insert(allergen_key(definition.canonical_name));

                AllergenEntry {
                    canonical_name: definition.canonical_name.to_string(),
                    label: definition.label.to_string(),
                    synonyms,
                    exclusions: definition
                        .exclusions
                        .iter()
                        .map(|phrase| allergen_key(phrase))
                        .collect(),
                    risk_hint: definition.risk_hint,
                }
            })
            .collect();

        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<AllergenEntry>) -> Self {
        let mut canonical_index = HashMap::new();
        let mut synonym_index = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            canonical_index
                .entry(allergen_key(&entry.canonical_name))
                .or_insert(position);
        }

        // A synonym shared by two entries resolves to the one declared first.
        for (position, entry) in entries.iter().enumerate() {
            for synonym in &entry.synonyms {
                synonym_index.entry(synonym.clone()).or_insert(position);
            }
        }

        Self {
            entries,
            canonical_index,
            synonym_index,
        }
    }

    pub fn global() -> &'static AllergenTaxonomy {
        &ALLERGEN_TAXONOMY
    }

    /// Finds the entry for a canonical name or any of its synonyms.
    pub fn lookup(&self, name: &str) -> Option<&AllergenEntry> {
        let key = allergen_key(name);
        self.canonical_index
            .get(&key)
            .or_else(|| self.synonym_index.get(&key))
            .map(|&position| &self.entries[position])
    }

    /// Finds an entry by its canonical name only.
    pub fn get_canonical(&self, name: &str) -> Option<&AllergenEntry> {
        self.canonical_index
            .get(&allergen_key(name))
            .map(|&position| &self.entries[position])
    }

    pub fn synonyms_of(&self, canonical_name: &str) -> Option<&BTreeSet<String>> {
        self.get_canonical(canonical_name)
            .map(|entry| &entry.synonyms)
    }

    pub fn list_all(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.canonical_name.as_str())
            .collect()
    }

    pub fn entries(&self) -> &[AllergenEntry] {
        &self.entries
    }

    /// Terms that reveal a profile allergen. A declared canonical allergen
    /// expands to its synonym set and carries its exclusions; custom
    /// allergens, and declared names the registry does not know, match only
    /// their own text.
    pub fn terms_for(&self, allergen: AllergenRef<'_>) -> AllergenTerms {
        let (terms, exclusions) = match allergen {
            AllergenRef::Declared(name) => match self.get_canonical(name) {
                Some(entry) => (
                    entry.synonyms.iter().cloned().collect(),
                    entry.exclusions.iter().cloned().collect(),
                ),
                None => (vec![allergen_key(name)], Vec::new()),
            },
            AllergenRef::Custom(name) => (vec![allergen_key(name)], Vec::new()),
        };

        AllergenTerms {
            name: allergen.name().to_string(),
            terms: terms.into_iter().filter(|term| !term.is_empty()).collect(),
            exclusions,
        }
    }
}

impl Default for AllergenTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_all_keeps_registry_order() {
        let taxonomy = AllergenTaxonomy::builtin();
        assert_eq!(
            taxonomy.list_all(),
            vec![
                "peanuts",
                "tree_nuts",
                "milk",
                "eggs",
                "soy",
                "wheat",
                "fish",
                "shellfish",
                "sesame",
                "mustard",
                "celery",
                "sulfites",
            ]
        );
    }

    #[test]
    fn lookup_accepts_synonyms_and_separator_variants() {
        let taxonomy = AllergenTaxonomy::builtin();

        assert_eq!(
            taxonomy.lookup("Groundnut").map(|e| e.canonical_name.as_str()),
            Some("peanuts")
        );
        for variant in ["tree nuts", "tree_nuts", "Tree-Nuts", "  tree   nuts "] {
            assert_eq!(
                taxonomy.lookup(variant).map(|e| e.canonical_name.as_str()),
                Some("tree_nuts"),
                "{variant}"
            );
        }
        assert!(taxonomy.lookup("kiwi").is_none());
    }

    #[test]
    fn get_canonical_ignores_synonyms() {
        let taxonomy = AllergenTaxonomy::builtin();
        assert!(taxonomy.get_canonical("peanut").is_none());
        assert!(taxonomy.get_canonical("PEANUTS").is_some());
    }

    #[test]
    fn synonyms_include_the_canonical_name() {
        let taxonomy = AllergenTaxonomy::builtin();
        let synonyms = taxonomy.synonyms_of("peanuts").unwrap();

        assert!(synonyms.contains("peanuts"));
        assert!(synonyms.contains("groundnut"));
        assert!(synonyms.contains("arachis"));
        assert!(taxonomy.synonyms_of("tree_nuts").unwrap().contains("tree nuts"));
    }

    #[test]
    fn terms_for_expands_canonical_and_keeps_custom_literal() {
        let taxonomy = AllergenTaxonomy::builtin();

        let sesame = taxonomy.terms_for(AllergenRef::Declared("sesame"));
        assert_eq!(sesame.name, "sesame");
        assert!(sesame.terms.contains(&"tahini".to_string()));

        let custom = taxonomy.terms_for(AllergenRef::Custom("Kiwi Fruit"));
        assert_eq!(custom.name, "Kiwi Fruit");
        assert_eq!(custom.terms, vec!["kiwi fruit".to_string()]);

        let custom_canonical = taxonomy.terms_for(AllergenRef::Custom("sesame"));
        assert_eq!(custom_canonical.terms, vec!["sesame".to_string()]);
    }

    #[test]
    fn unknown_declared_name_matches_itself() {
        let taxonomy = AllergenTaxonomy::builtin();
        let terms = taxonomy.terms_for(AllergenRef::Declared("almond"));
        assert_eq!(terms.terms, vec!["almond".to_string()]);
    }

    #[test]
    fn exclusions_travel_with_declared_terms_only() {
        let taxonomy = AllergenTaxonomy::builtin();

        let milk = taxonomy.terms_for(AllergenRef::Declared("milk"));
        assert!(milk.terms.contains(&"butter".to_string()));
        assert!(milk.exclusions.contains(&"cocoa butter".to_string()));

        let wheat = taxonomy.terms_for(AllergenRef::Declared("wheat"));
        assert!(wheat.exclusions.contains(&"rice flour".to_string()));

        assert!(taxonomy.terms_for(AllergenRef::Custom("butter")).exclusions.is_empty());
    }

    #[test]
    fn first_declared_entry_wins_a_shared_synonym() {
        let entry = |name: &str, synonym: &str| AllergenEntry {
            canonical_name: name.to_string(),
            label: name.to_string(),
            synonyms: [name.to_string(), synonym.to_string()].into_iter().collect(),
            exclusions: BTreeSet::new(),
            risk_hint: RiskHint::Low,
        };
        let taxonomy = AllergenTaxonomy::from_entries(vec![
            entry("first", "shared"),
            entry("second", "shared"),
        ]);

        assert_eq!(
            taxonomy.lookup("shared").map(|e| e.canonical_name.as_str()),
            Some("first")
        );
    }
}
