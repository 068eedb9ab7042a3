//! Keyword lists and text patterns shared by the classifiers.
//!
//! All matching is done against lowercased text.

use std::sync::LazyLock;

use regex::Regex;

/// Substrings that mark a product, or its storage text, as frozen.
pub(crate) const FROZEN_KEYWORDS: [&str; 5] = ["frozen", "freezer", "-18°", "-18 °", "ice cream"];

/// Tag substring that marks a product as frozen.
pub(crate) const FROZEN_TAG: &str = "frozen";

/// Phrases that introduce after-opening instructions.
pub(crate) const OPENING_PHRASES: [&str; 2] = ["once opened", "after opening"];

pub(crate) static FRIDGE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"refrigerat|fridge|cool|chilled|0-5\s*°|under\s*5\s*°").expect("valid regex")
});

pub(crate) static AMBIENT_STORAGE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"room temperature|dry place|ambient|store in a cool and dry|pantry")
        .expect("valid regex")
});

pub(crate) static AMBIENT_CONSERVATION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"room temperature|dry place|ambient|cool and dry|pantry").expect("valid regex")
});

pub(crate) static REFRIGERATED_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"dairy|cheese|yogurt|milk|cream|butter|fresh-meat|seafood|deli|ready-meals|prepared-salads",
    )
    .expect("valid regex")
});

pub(crate) static FROZEN_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"frozen|ice-cream|ice-creams|sorbet").expect("valid regex"));

pub(crate) static SHELF_STABLE_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"canned|biscuits|cookies|crackers|chips|crisps|snacks|cereals|pastas|rice|flour|sugar|oils|sauces|drinks|beverages|candy|chocolate",
    )
    .expect("valid regex")
});

pub(crate) static PERISHABLE_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"dairy|milk|yogurt|fresh-meat|fish|seafood|ready-meals|prepared-salads|deli|cheese",
    )
    .expect("valid regex")
});

/// Returns `true` if `lower` contains any frozen keyword.
pub(crate) fn has_frozen_keyword(lower: &str) -> bool {
    FROZEN_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Returns the part of `lower` before the first after-opening phrase, or the
/// whole text when there is none.
pub(crate) fn before_opening(lower: &str) -> &str {
    let cut = OPENING_PHRASES
        .iter()
        .filter_map(|phrase| lower.find(phrase))
        .min()
        .unwrap_or(lower.len());
    &lower[..cut]
}

/// Returns `true` if any tag matches `pattern`.
pub(crate) fn any_tag_matches(tags: &[String], pattern: &Regex) -> bool {
    tags.iter().any(|tag| pattern.is_match(tag))
}
