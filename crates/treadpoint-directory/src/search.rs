//! Substring filtering over normalized records.

use crate::types::Location;

/// Filter records by a pre-normalized query (see
/// [`crate::normalize_search_text`]).
///
/// An empty query returns every record; a non-empty query returns the
/// records whose `search_key` contains it as a substring. Relative order is
/// preserved. No ranking, no fuzzy matching.
#[must_use]
pub fn filter<'a>(locations: &'a [Location], query: &str) -> Vec<&'a Location> {
    if query.is_empty() {
        return locations.iter().collect();
    }
    locations
        .iter()
        .filter(|location| location.search_key.contains(query))
        .collect()
}
