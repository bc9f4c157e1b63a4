//! Fragrance-to-fragrance recommendation.
//!
//! Scores every catalog item against a pivot fragrance and ranks the
//! survivors, best first, with a human-readable reason per match.

mod scoring;
mod types;

pub use scoring::{CompatibilityScorer, ScoringWeights};
pub use types::RecommendationMatch;

use crate::catalog::Catalog;
use crate::domain::Fragrance;

/// Default scoring weights and bonuses.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    olfactory: 0.60,
    personality: 0.40,
    gender_bonus: 0.10,
    occasion_bonus: 0.05,
    note_similarity_floor: 0.80,
};

/// Weighted score (0-1 scale) a candidate must exceed, strictly, to survive.
pub const MIN_MATCH_SCORE: f64 = 0.30;

/// Default number of recommendations to return.
pub const DEFAULT_LIMIT: usize = 6;

/// Rank every other catalog item against `pivot`, best first. The pivot
/// itself is excluded by id; ties keep catalog order.
pub fn rank(
    catalog: &Catalog,
    pivot: &Fragrance,
    scorer: &CompatibilityScorer,
    min_score: f64,
    limit: usize,
) -> Vec<RecommendationMatch> {
    let pivot_notes = pivot.all_notes();
    let pivot_traits = pivot.traits_lowercase();

    let mut matches: Vec<RecommendationMatch> = Vec::new();

    for candidate in catalog.iter() {
        if candidate.id == pivot.id {
            continue;
        }

        let olfactory = scorer.olfactory_compatibility(pivot, candidate);
        let personality =
            scorer.personality_alignment(&pivot_traits, &candidate.traits_lowercase());
        let final_score = scorer.final_score(olfactory, personality);

        if final_score <= min_score {
            continue;
        }

        let common_notes = scorer.common_notes(&pivot_notes, &candidate.all_notes());
        let reason = scorer.reason(olfactory, personality, &common_notes, candidate);

        matches.push(RecommendationMatch {
            fragrance: candidate.clone(),
            match_score: final_score * 100.0,
            common_notes,
            reason,
            personality_alignment: personality * 100.0,
            olfactory_compatibility: olfactory * 100.0,
        });
    }

    // Stable sort: equal scores keep catalog order.
    matches.sort_by(|a, b| {
        b.match_score.partial_cmp(&a.match_score).unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
    matches
}
