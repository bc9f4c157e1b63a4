//! Engine facade: one entry point over catalog, search, scoring, and
//! profile synthesis.

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::TuningConfig;
use crate::domain::{Fragrance, PersonalityProfile};
use crate::profile::ProfileSynthesizer;
use crate::recommend::{self, CompatibilityScorer, RecommendationMatch};
use crate::search::{self, SearchOptions, SearchResult};

/// Stateless service over an immutable catalog. Every call is a pure
/// function of its inputs; cloning the engine is cheap enough to share it
/// across threads by value.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Catalog,
    tuning: TuningConfig,
    scorer: CompatibilityScorer,
    synthesizer: ProfileSynthesizer,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_tuning(catalog, TuningConfig::default())
    }

    pub fn with_tuning(catalog: Catalog, tuning: TuningConfig) -> Self {
        let scorer = CompatibilityScorer::with_weights(tuning.scoring);
        Self { catalog, tuning, scorer, synthesizer: ProfileSynthesizer::new() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    /// Resolve a free-text query with the configured fuzzy threshold.
    pub fn search(&self, query: &str) -> SearchResult {
        self.search_with_threshold(query, self.tuning.search.fuzzy_threshold)
    }

    pub fn search_with_threshold(&self, query: &str, threshold: f64) -> SearchResult {
        let options = SearchOptions {
            fuzzy_threshold: threshold,
            min_query_chars: self.tuning.search.min_query_chars,
            max_results: self.tuning.search.max_results,
        };

        let result = search::search(&self.catalog, query, &options);
        debug!(
            query,
            matched = result.items.len(),
            fuzzy = result.fuzzy_matches,
            "resolved search query"
        );
        result
    }

    /// Rank the catalog against a pivot fragrance with the configured limit.
    pub fn recommend(&self, pivot: &Fragrance) -> Vec<RecommendationMatch> {
        self.recommend_with_limit(pivot, self.tuning.recommend.default_limit)
    }

    pub fn recommend_with_limit(
        &self,
        pivot: &Fragrance,
        limit: usize,
    ) -> Vec<RecommendationMatch> {
        let matches = recommend::rank(
            &self.catalog,
            pivot,
            &self.scorer,
            self.tuning.recommend.min_match_score,
            limit,
        );
        debug!(pivot = %pivot.id.0, returned = matches.len(), "ranked recommendations");
        matches
    }

    /// Aggregate a behavioral profile from a set of fragrances.
    pub fn synthesize_profile(&self, fragrances: &[Fragrance]) -> PersonalityProfile {
        let profile = self.synthesizer.synthesize(fragrances);
        debug!(input = fragrances.len(), "synthesized personality profile");
        profile
    }
}
