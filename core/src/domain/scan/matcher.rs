//! Finds which of a profile's allergens appear in a list of ingredient tokens.
//!
//! A term hits a token only on word boundaries: `almond` is found in
//! `almond milk` but not in `almondine`. Detection is scoped to the profile;
//! an allergen the profile does not carry is never reported. A declared
//! allergen's exclusion phrases are blanked out first, so `cocoa butter` does
//! not reveal milk.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{
    allergen::{AllergenTaxonomy, allergen_key},
    allergy_profile::entities::AllergyProfile,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Allergen name -> tokens that revealed it. Only allergens with at least
    /// one token are present.
    pub evidence: BTreeMap<String, BTreeSet<String>>,
}

impl MatchResult {
    pub fn allergens(&self) -> BTreeSet<String> {
        self.evidence.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.evidence.is_empty()
    }
}

pub fn match_allergens(
    tokens: &[String],
    profile: &AllergyProfile,
    taxonomy: &AllergenTaxonomy,
) -> MatchResult {
    let token_keys: Vec<(String, &String)> = tokens
        .iter()
        .map(|token| (allergen_key(token), token))
        .collect();

    let mut evidence = BTreeMap::new();

    for allergen in profile.allergens() {
        let target = taxonomy.terms_for(allergen);

        let hits: BTreeSet<String> = token_keys
            .iter()
            .filter(|(key, _)| {
                let key = mask_phrases(key, &target.exclusions);
                target.terms.iter().any(|term| contains_term(&key, term))
            })
            .map(|(_, token)| (*token).clone())
            .collect();

        if !hits.is_empty() {
            evidence.insert(target.name, hits);
        }
    }

    MatchResult { evidence }
}

/// True when `term` occurs in `text` with no letter or digit directly before
/// or after it.
pub fn contains_term(text: &str, term: &str) -> bool {
    find_term(text, term, 0).is_some()
}

/// Blanks out every whole-word occurrence of the given phrases, so a synonym
/// inside `cocoa butter` no longer reads as `butter`.
fn mask_phrases(text: &str, phrases: &[String]) -> String {
    let mut masked = text.to_string();

    for phrase in phrases {
        let mut from = 0;
        while let Some(start) = find_term(&masked, phrase, from) {
            let end = start + phrase.len();
            masked.replace_range(start..end, "|");
            from = start + 1;
        }
    }

    masked
}

/// Byte offset of the first word-bounded occurrence of `term` at or after
/// `from`.
fn find_term(text: &str, term: &str, mut from: usize) -> Option<usize> {
    if term.is_empty() {
        return None;
    }

    while let Some(offset) = text[from..].find(term) {
        let start = from + offset;
        let end = start + term.len();

        let clear_before = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let clear_after = text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if clear_before && clear_after {
            return Some(start);
        }

        from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }

    None
}
