//! Label parsing and ingredient canonicalization.
//!
//! Labels are messy free text in mixed languages. Parsing strips
//! parentheticals and percentages, then splits on the usual separators,
//! keeping the label's own casing for display; the canonicalizer folds
//! regional spellings onto one canonical key via the synonym table, first
//! match wins in table order.

use std::sync::LazyLock;

use regex::Regex;

use crate::knowledge::Knowledgebase;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,;]").unwrap()
});

/// Parenthesized and bracketed sub-lists, e.g. "emulsifier (soy lecithin)".
static PARENTHETICALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\)|\[[^\]]*\]").unwrap()
});

/// Percentage annotations, e.g. "tomatoes 65%" or "12,5 %".
static PERCENTAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)?\s*%").unwrap()
});

/// Split a raw ingredients label into cleaned tokens, original casing
/// preserved for display.
///
/// Parentheticals and percentages are stripped from the whole label
/// before splitting; a decimal comma inside "12,5 %" must not count as a
/// separator. Empty labels and the common "ingredients not specified"
/// placeholder yield an empty list; the caller treats that as "nothing to
/// tag", not an error. Tokens of two characters or fewer are dropped as
/// noise.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.to_lowercase() == "ingredients not specified" {
        return Vec::new();
    }

    let cleaned = PARENTHETICALS.replace_all(trimmed, " ");
    let cleaned = PERCENTAGES.replace_all(&cleaned, " ");

    SEPARATORS
        .split(&cleaned)
        .map(|tok| tok.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|tok| tok.chars().count() > 2)
        .collect()
}

/// Canonicalize one parsed ingredient token.
///
/// Scan order is the synonym table's declaration order; within an entry,
/// an exact match on the key or any spelling wins, then a substring match
/// on a spelling, then a substring match on the key itself. Unmatched
/// tokens come back lowercased and trimmed, unchanged otherwise.
pub fn normalize(kb: &Knowledgebase, raw: &str) -> String {
    let ing = raw.trim().to_lowercase();

    for (key, spellings) in kb.synonym_entries() {
        if ing == *key
            || spellings
                .iter()
                .any(|s| ing == *s || ing.contains(s))
        {
            return (*key).to_string();
        }
    }
    for (key, _) in kb.synonym_entries() {
        if ing.contains(key) {
            return (*key).to_string();
        }
    }
    ing
}
