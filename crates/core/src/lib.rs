pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod profile;
pub mod recommend;
pub mod search;
pub mod similarity;

pub use catalog::Catalog;
pub use config::{ConfigError, RecommendTuning, SearchTuning, TuningConfig};
pub use domain::{
    BehavioralAnalysis, Fragrance, FragranceId, Gender, Longevity, Note, NoteFamily,
    OlfactoryPreferences, PersonalityProfile, Season, Sillage,
};
pub use engine::RecommendationEngine;
pub use errors::{CatalogError, DomainError};
pub use profile::ProfileSynthesizer;
pub use recommend::{CompatibilityScorer, RecommendationMatch, ScoringWeights};
pub use search::{SearchOptions, SearchResult};
pub use similarity::{edit_distance, similarity};
