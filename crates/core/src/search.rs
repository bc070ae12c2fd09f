use crate::catalog::{Catalog, GameRecord};

/// Trim surrounding whitespace and ASCII-lowercase the raw input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Allow-list for search terms: ASCII letters, digits and whitespace.
///
/// Anything else is silently ignored upstream. Permissive by design; this
/// is an input filter, not a security boundary.
pub fn is_allowed(normalized: &str) -> bool {
    !normalized.is_empty()
        && normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
}

/// What the search controller should do for one raw input value.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Empty input: show the full catalog and clear any error message.
    ShowAll,
    /// Input failed the allow-list: leave the current view untouched.
    Ignored,
    /// At least one game name contains the query, in catalog order.
    Matches(Vec<&'a GameRecord>),
    /// No name matched; the normalized query is echoed in the error
    /// message.
    NotFound { query: String },
}

/// Evaluate one raw input against the catalog.
///
/// Matching is a case-insensitive substring test on the game name and
/// preserves catalog order.
pub fn evaluate<'a>(catalog: &'a Catalog, raw: &str) -> SearchOutcome<'a> {
    let query = normalize(raw);
    if query.is_empty() {
        return SearchOutcome::ShowAll;
    }
    if !is_allowed(&query) {
        return SearchOutcome::Ignored;
    }

    let matches: Vec<&GameRecord> = catalog
        .games()
        .iter()
        .filter(|game| game.name.to_ascii_lowercase().contains(&query))
        .collect();

    if matches.is_empty() {
        SearchOutcome::NotFound { query }
    } else {
        SearchOutcome::Matches(matches)
    }
}
