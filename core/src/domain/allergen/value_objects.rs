/// Normalizes an allergen name or ingredient fragment into the key used for
/// lookups and matching: lower-cased, `_` and `-` read as spaces, whitespace
/// collapsed and trimmed.
pub fn allergen_key(name: &str) -> String {
    name.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A profile allergen as the matcher sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllergenRef<'a> {
    Declared(&'a str),
    Custom(&'a str),
}

impl<'a> AllergenRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            AllergenRef::Declared(name) | AllergenRef::Custom(name) => name,
        }
    }
}

/// Everything that counts as a hit for one profile allergen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergenTerms {
    pub name: String,
    pub terms: Vec<String>,
    /// Hits that fall inside one of these phrases do not count.
    pub exclusions: Vec<String>,
}
