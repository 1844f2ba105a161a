//! Reads the `PRODUCT: ... / INGREDIENTS: ...` layout the label extractor is
//! asked to answer in.

use std::sync::LazyLock;

use regex::Regex;

const NOTES_PREVIEW_CHARS: usize = 200;

static PRODUCT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[\s*#]*product(?:\s+name)?\s*:[ \t]*(?P<name>[^\n]*)$")
        .expect("product pattern should compile")
});

static INGREDIENTS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)ingredients?\s*:\s*(?P<list>.*)$")
        .expect("ingredients pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelExtraction {
    pub product_name: Option<String>,
    pub ingredient_text: String,
}

pub fn parse_label_extraction(raw: &str) -> LabelExtraction {
    let product_name = PRODUCT_LINE
        .captures(raw)
        .and_then(|captures| captures.name("name"))
        .map(|name| {
            name.as_str()
                .trim()
                .trim_matches(|c: char| matches!(c, '[' | ']' | '"' | '*'))
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("unknown"));

    let ingredient_text = match INGREDIENTS_SECTION
        .captures(raw)
        .and_then(|captures| captures.name("list"))
    {
        Some(list) => list.as_str().trim().to_string(),
        None => PRODUCT_LINE.replace(raw, "").trim().to_string(),
    };

    LabelExtraction {
        product_name,
        ingredient_text,
    }
}

/// Short preview of the extractor's answer kept alongside the scan.
pub fn extraction_notes(raw: &str) -> String {
    let preview: String = raw.trim().chars().take(NOTES_PREVIEW_CHARS).collect();
    format!("Label analysis: {preview}")
}
