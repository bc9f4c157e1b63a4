use serde::{Deserialize, Serialize};

/// Top-5 most frequent note names per pyramid tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OlfactoryPreferences {
    pub top_notes_preference: Vec<String>,
    pub heart_notes_preference: Vec<String>,
    pub base_notes_preference: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralAnalysis {
    pub lifestyle: String,
    pub personality: String,
    pub recommendations: Vec<String>,
}

/// Descriptive behavioral profile aggregated from a set of fragrances.
/// Regenerated on demand; never persisted by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    /// Top 4 traits by frequency, first-seen order breaking ties.
    pub dominant_traits: Vec<String>,
    /// Traits ranked 5-8.
    pub secondary_traits: Vec<String>,
    pub olfactory_preferences: OlfactoryPreferences,
    pub behavioral_analysis: BehavioralAnalysis,
    pub essence_description: String,
    pub compatibility_insights: Vec<String>,
}
