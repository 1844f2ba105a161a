//! Turns a raw ingredient statement into the ordered token list the matcher
//! scans.
//!
//! Items are separated by `,`, `;` or line breaks. Bracketed sub-lists such as
//! `Chocolate (cocoa, milk, soy lecithin)` are flattened: the outer item comes
//! first, followed by each sub-ingredient in order.

const OPENERS: [char; 3] = ['(', '[', '{'];
const CLOSERS: [char; 3] = [')', ']', '}'];

fn is_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '\n' | '\r')
}

enum Pending<'a> {
    List(&'a str),
    Item(&'a str),
}

/// Nesting depth is bounded only by input length, so the walk keeps its own
/// stack instead of recursing.
pub fn normalize_ingredients(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pending = vec![Pending::List(text)];

    while let Some(next) = pending.pop() {
        match next {
            Pending::List(list) => {
                pending.extend(split_top_level(list).into_iter().rev().map(Pending::Item));
            }
            Pending::Item(item) => {
                let (outer, groups) = extract_groups(item);

                if let Some(token) = clean_token(&outer) {
                    tokens.push(token);
                }

                pending.extend(groups.into_iter().rev().map(Pending::List));
            }
        }
    }

    tokens
}

/// Splits on separators that are not nested inside brackets.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in text.char_indices() {
        if OPENERS.contains(&c) {
            depth += 1;
        } else if CLOSERS.contains(&c) {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && is_separator(c) {
            items.push(&text[start..index]);
            start = index + c.len_utf8();
        }
    }
    items.push(&text[start..]);

    items
}

/// Separates an item's own text from its bracketed groups. An unclosed group
/// runs to the end of the item.
fn extract_groups(item: &str) -> (String, Vec<&str>) {
    let mut outer = String::with_capacity(item.len());
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut group_start = 0;

    for (index, c) in item.char_indices() {
        if OPENERS.contains(&c) {
            if depth == 0 {
                group_start = index + c.len_utf8();
                outer.push(' ');
            }
            depth += 1;
        } else if CLOSERS.contains(&c) {
            match depth {
                0 => outer.push(' '),
                1 => {
                    groups.push(&item[group_start..index]);
                    depth = 0;
                }
                _ => depth -= 1,
            }
        } else if depth == 0 {
            outer.push(c);
        }
    }

    if depth > 0 {
        groups.push(&item[group_start..]);
    }

    (outer, groups)
}

fn clean_token(raw: &str) -> Option<String> {
    let collapsed = raw
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let token = collapsed.trim_matches(|c: char| !c.is_alphanumeric());

    (!token.is_empty()).then(|| token.to_string())
}
