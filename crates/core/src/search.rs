//! Free-text catalog search: exact substring pass, then fuzzy fallback.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::Fragrance;
use crate::similarity::similarity;

/// Similarity a non-exact candidate must reach to count as a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Trimmed queries shorter than this return nothing; a floor against noisy
/// single-character matches.
pub const MIN_QUERY_CHARS: usize = 2;

/// Result cap, applied after exact and fuzzy passes are merged.
pub const MAX_RESULTS: usize = 20;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Best matches first: exact matches in catalog order, then fuzzy
    /// matches in catalog order.
    pub items: Vec<Fragrance>,
    pub search_term: String,
    /// Whether the fuzzy pass found anything, so callers can label results
    /// as exact vs similar.
    pub fuzzy_matches: bool,
}

impl SearchResult {
    fn empty(query: &str) -> Self {
        Self { items: Vec::new(), search_term: query.to_string(), fuzzy_matches: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    pub fuzzy_threshold: f64,
    pub min_query_chars: usize,
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_query_chars: MIN_QUERY_CHARS,
            max_results: MAX_RESULTS,
        }
    }
}

/// Resolve a free-text query against the catalog. Pure function of
/// `(query, catalog, options)`.
pub fn search(catalog: &Catalog, query: &str, options: &SearchOptions) -> SearchResult {
    let term = query.trim().to_lowercase();
    if term.chars().count() < options.min_query_chars {
        return SearchResult::empty(query);
    }

    let mut exact: Vec<Fragrance> = Vec::new();
    let mut fuzzy: Vec<Fragrance> = Vec::new();

    for fragrance in catalog.iter() {
        let name = fragrance.name.to_lowercase();
        let brand = fragrance.brand.to_lowercase();
        let qualified = fragrance.qualified_name();

        if name.contains(&term) || brand.contains(&term) || qualified.contains(&term) {
            exact.push(fragrance.clone());
            continue;
        }

        if similarity(&term, &qualified) >= options.fuzzy_threshold {
            fuzzy.push(fragrance.clone());
        }
    }

    // The flag reflects the pre-truncation fuzzy set: fuzzy hits that fall
    // off the cap still mark the result as approximate.
    let found_fuzzy = !fuzzy.is_empty();

    let mut items = exact;
    items.append(&mut fuzzy);
    items.truncate(options.max_results);

    SearchResult { items, search_term: query.to_string(), fuzzy_matches: found_fuzzy }
}
