use serde::{Deserialize, Serialize};

use crate::domain::Fragrance;

/// A ranked candidate with its scores and a human-readable justification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationMatch {
    pub fragrance: Fragrance,
    /// Weighted final score on the 0-100 scale; the sort key.
    pub match_score: f64,
    /// Pivot notes matched in the candidate (lower-cased).
    pub common_notes: Vec<String>,
    pub reason: String,
    /// Personality alignment on the 0-100 scale.
    pub personality_alignment: f64,
    /// Olfactory compatibility on the 0-100 scale.
    pub olfactory_compatibility: f64,
}
