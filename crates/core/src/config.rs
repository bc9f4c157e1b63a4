//! Engine tuning: defaults, optional TOML patch file, validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::recommend::{ScoringWeights, DEFAULT_LIMIT, DEFAULT_WEIGHTS, MIN_MATCH_SCORE};
use crate::search::{DEFAULT_FUZZY_THRESHOLD, MAX_RESULTS, MIN_QUERY_CHARS};

#[derive(Clone, Debug, PartialEq)]
pub struct TuningConfig {
    pub search: SearchTuning,
    pub scoring: ScoringWeights,
    pub recommend: RecommendTuning,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchTuning {
    pub fuzzy_threshold: f64,
    pub min_query_chars: usize,
    pub max_results: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecommendTuning {
    /// Weighted score (0-1 scale) candidates must exceed, strictly.
    pub min_match_score: f64,
    pub default_limit: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read tuning file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse tuning file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("tuning validation failed: {0}")]
    Validation(String),
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            search: SearchTuning {
                fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
                min_query_chars: MIN_QUERY_CHARS,
                max_results: MAX_RESULTS,
            },
            scoring: DEFAULT_WEIGHTS,
            recommend: RecommendTuning {
                min_match_score: MIN_MATCH_SCORE,
                default_limit: DEFAULT_LIMIT,
            },
        }
    }
}

impl TuningConfig {
    /// Load tuning from a TOML file layered over the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        let patch = toml::from_str::<TuningPatch>(&raw)
            .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })?;

        let mut config = Self::default();
        config.apply_patch(patch);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: TuningPatch) {
        if let Some(search) = patch.search {
            if let Some(fuzzy_threshold) = search.fuzzy_threshold {
                self.search.fuzzy_threshold = fuzzy_threshold;
            }
            if let Some(min_query_chars) = search.min_query_chars {
                self.search.min_query_chars = min_query_chars;
            }
            if let Some(max_results) = search.max_results {
                self.search.max_results = max_results;
            }
        }

        if let Some(scoring) = patch.scoring {
            if let Some(olfactory) = scoring.olfactory {
                self.scoring.olfactory = olfactory;
            }
            if let Some(personality) = scoring.personality {
                self.scoring.personality = personality;
            }
            if let Some(gender_bonus) = scoring.gender_bonus {
                self.scoring.gender_bonus = gender_bonus;
            }
            if let Some(occasion_bonus) = scoring.occasion_bonus {
                self.scoring.occasion_bonus = occasion_bonus;
            }
            if let Some(note_similarity_floor) = scoring.note_similarity_floor {
                self.scoring.note_similarity_floor = note_similarity_floor;
            }
        }

        if let Some(recommend) = patch.recommend {
            if let Some(min_match_score) = recommend.min_match_score {
                self.recommend.min_match_score = min_match_score;
            }
            if let Some(default_limit) = recommend.default_limit {
                self.recommend.default_limit = default_limit;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.search.fuzzy_threshold) {
            return Err(ConfigError::Validation(
                "search.fuzzy_threshold must be in range 0.0..=1.0".to_string(),
            ));
        }
        if self.search.min_query_chars == 0 {
            return Err(ConfigError::Validation(
                "search.min_query_chars must be greater than zero".to_string(),
            ));
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::Validation(
                "search.max_results must be greater than zero".to_string(),
            ));
        }

        let weight_sum = self.scoring.olfactory + self.scoring.personality;
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::Validation(format!(
                "scoring.olfactory and scoring.personality must sum to 1.0 (got {weight_sum})"
            )));
        }
        if self.scoring.olfactory < 0.0 || self.scoring.personality < 0.0 {
            return Err(ConfigError::Validation(
                "scoring weights must be non-negative".to_string(),
            ));
        }
        if self.scoring.gender_bonus < 0.0 || self.scoring.occasion_bonus < 0.0 {
            return Err(ConfigError::Validation(
                "scoring bonuses must be non-negative".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.scoring.note_similarity_floor) {
            return Err(ConfigError::Validation(
                "scoring.note_similarity_floor must be in range 0.0..1.0".to_string(),
            ));
        }

        if !(0.0..1.0).contains(&self.recommend.min_match_score) {
            return Err(ConfigError::Validation(
                "recommend.min_match_score must be in range 0.0..1.0".to_string(),
            ));
        }
        if self.recommend.default_limit == 0 {
            return Err(ConfigError::Validation(
                "recommend.default_limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct TuningPatch {
    search: Option<SearchPatch>,
    scoring: Option<ScoringPatch>,
    recommend: Option<RecommendPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPatch {
    fuzzy_threshold: Option<f64>,
    min_query_chars: Option<usize>,
    max_results: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ScoringPatch {
    olfactory: Option<f64>,
    personality: Option<f64>,
    gender_bonus: Option<f64>,
    occasion_bonus: Option<f64>,
    note_similarity_floor: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RecommendPatch {
    min_match_score: Option<f64>,
    default_limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use tempfile::TempDir;

    use super::{ConfigError, TuningConfig};

    #[test]
    fn defaults_pass_validation() {
        TuningConfig::default().validate().expect("defaults are valid");
    }

    #[test]
    fn file_patch_overrides_only_named_fields() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = dir.path().join("sillage.toml");
        fs::write(
            &path,
            r#"
[search]
fuzzy_threshold = 0.5

[recommend]
default_limit = 10
"#,
        )
        .map_err(|err| err.to_string())?;

        let config =
            TuningConfig::load(&path).map_err(|err| format!("tuning load failed: {err}"))?;

        if (config.search.fuzzy_threshold - 0.5).abs() > 1e-9 {
            return Err("fuzzy threshold should come from the file".to_string());
        }
        if config.recommend.default_limit != 10 {
            return Err("default limit should come from the file".to_string());
        }
        if config.search.max_results != 20 {
            return Err("unpatched fields should keep defaults".to_string());
        }
        Ok(())
    }

    #[test]
    fn unbalanced_weights_fail_validation() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = dir.path().join("sillage.toml");
        fs::write(
            &path,
            r#"
[scoring]
olfactory = 0.9
"#,
        )
        .map_err(|err| err.to_string())?;

        match TuningConfig::load(&path) {
            Ok(_) => Err("expected validation failure".to_string()),
            Err(ConfigError::Validation(message)) if message.contains("sum to 1.0") => Ok(()),
            Err(other) => Err(format!("unexpected error: {other}")),
        }
    }

    #[test]
    fn missing_file_surfaces_read_error() {
        let error = TuningConfig::load(std::path::Path::new("/nonexistent/sillage.toml"))
            .expect_err("missing file");
        assert!(matches!(error, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn malformed_toml_surfaces_parse_error() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = dir.path().join("sillage.toml");
        fs::write(&path, "not [valid toml").map_err(|err| err.to_string())?;

        match TuningConfig::load(&path) {
            Ok(_) => Err("expected parse failure".to_string()),
            Err(ConfigError::ParseFile { .. }) => Ok(()),
            Err(other) => Err(format!("unexpected error: {other}")),
        }
    }
}
