//! Pairwise compatibility scoring between fragrances.

use crate::domain::Fragrance;
use crate::similarity::similarity;

use super::DEFAULT_WEIGHTS;

/// Weights and bonuses for compatibility scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight of olfactory compatibility in the final score (default 0.60).
    pub olfactory: f64,
    /// Weight of personality alignment in the final score (default 0.40).
    pub personality: f64,
    /// Added when both fragrances share a gender (default 0.10).
    pub gender_bonus: f64,
    /// Added when the fragrances share at least one occasion (default 0.05).
    pub occasion_bonus: f64,
    /// Similarity above which two note names count as the same note,
    /// strictly (default 0.80).
    pub note_similarity_floor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Score calculator for fragrance compatibility.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Olfactory compatibility in `[0, 1]`: shared-note ratio plus gender
    /// and occasion bonuses, clamped.
    pub fn olfactory_compatibility(&self, a: &Fragrance, b: &Fragrance) -> f64 {
        let notes_a = a.all_notes();
        let notes_b = b.all_notes();
        let denominator = notes_a.len().max(notes_b.len());

        let notes_score = if denominator == 0 {
            0.0
        } else {
            self.common_notes(&notes_a, &notes_b).len() as f64 / denominator as f64
        };

        let gender_bonus = if a.gender == b.gender { self.weights.gender_bonus } else { 0.0 };
        let occasion_bonus =
            if a.occasions.iter().any(|occasion| b.occasions.contains(occasion)) {
                self.weights.occasion_bonus
            } else {
                0.0
            };

        (notes_score + gender_bonus + occasion_bonus).clamp(0.0, 1.0)
    }

    /// Notes from `notes_a` that match some note in `notes_b`: substring in
    /// either direction, or fuzzy similarity above the floor. Permissive on
    /// purpose, to tolerate naming variance ("rosa" vs "rosa búlgara").
    pub fn common_notes(&self, notes_a: &[String], notes_b: &[String]) -> Vec<String> {
        notes_a
            .iter()
            .filter(|note| {
                notes_b.iter().any(|other| {
                    other.contains(note.as_str())
                        || note.contains(other.as_str())
                        || similarity(note, other) > self.weights.note_similarity_floor
                })
            })
            .cloned()
            .collect()
    }

    /// Personality alignment in `[0, 1]`. Traits are compared by substring
    /// in either direction; callers must lower-case them first.
    pub fn personality_alignment(&self, traits_a: &[String], traits_b: &[String]) -> f64 {
        let denominator = traits_a.len().max(traits_b.len());
        if denominator == 0 {
            return 0.0;
        }

        let common = traits_a
            .iter()
            .filter(|label| {
                traits_b
                    .iter()
                    .any(|other| other.contains(label.as_str()) || label.contains(other.as_str()))
            })
            .count();

        common as f64 / denominator as f64
    }

    /// Weighted final score on the 0-1 scale.
    pub fn final_score(&self, olfactory: f64, personality: f64) -> f64 {
        olfactory * self.weights.olfactory + personality * self.weights.personality
    }

    /// Human-readable justification. The percentage shown here is the
    /// straight average of the two component scores, not the weighted sort
    /// key; the two values differ on purpose.
    pub fn reason(
        &self,
        olfactory: f64,
        personality: f64,
        common_notes: &[String],
        candidate: &Fragrance,
    ) -> String {
        let compatibility = ((olfactory + personality) * 50.0).round();

        if olfactory > personality {
            let notes =
                common_notes.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ");
            format!(
                "{compatibility:.0}% de afinidade olfativa - Notas em comum: {notes}. \
                 Combina perfeitamente com seu estilo."
            )
        } else {
            let traits = candidate
                .personality_traits
                .iter()
                .take(2)
                .map(|label| label.to_lowercase())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{compatibility:.0}% de alinhamento comportamental - Essência similar: {traits}."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Fragrance, FragranceId, Gender, Longevity, Note, NoteFamily, Sillage};

    use super::CompatibilityScorer;

    fn fragrance(id: &str, gender: Gender, notes: &[&str], traits: &[&str]) -> Fragrance {
        let all: Vec<Note> = notes
            .iter()
            .map(|name| Note {
                name: (*name).to_string(),
                intensity: Some(5),
                family: NoteFamily::Floral,
                characteristics: None,
            })
            .collect();

        // Spread notes across the pyramid: first note on top, last at the
        // base, the rest in the heart.
        let (top, rest) = all.split_at(1.min(all.len()));
        let (heart, base) = rest.split_at(rest.len().saturating_sub(1));

        Fragrance {
            id: FragranceId(id.to_string()),
            name: format!("Fragrance {id}"),
            brand: "Natura".to_string(),
            gender,
            top_notes: top.to_vec(),
            heart_notes: heart.to_vec(),
            base_notes: base.to_vec(),
            description: String::new(),
            personality_traits: traits.iter().map(|label| (*label).to_string()).collect(),
            season: Vec::new(),
            occasions: Vec::new(),
            sillage: Sillage::Moderado,
            longevity: Longevity::Boa,
            year: None,
            price: None,
        }
    }

    #[test]
    fn scores_reference_scenario() {
        let scorer = CompatibilityScorer::new();
        let a = fragrance(
            "a",
            Gender::Feminino,
            &["Bergamota", "Jasmim", "Âmbar"],
            &["Romântica", "Elegante"],
        );
        let b = fragrance(
            "b",
            Gender::Feminino,
            &["Bergamota", "Rosa", "Âmbar"],
            &["Romântica", "Sofisticada"],
        );

        // 2 shared notes out of 3, plus the same-gender bonus.
        let olfactory = scorer.olfactory_compatibility(&a, &b);
        assert!((olfactory - (2.0 / 3.0 + 0.10)).abs() < 1e-9);

        let personality =
            scorer.personality_alignment(&a.traits_lowercase(), &b.traits_lowercase());
        assert!((personality - 0.5).abs() < 1e-9);

        let final_score = scorer.final_score(olfactory, personality);
        assert!((final_score * 100.0 - 66.0).abs() < 0.1);
    }

    #[test]
    fn olfactory_compatibility_is_clamped_to_one() {
        let scorer = CompatibilityScorer::new();
        let mut a = fragrance("a", Gender::Feminino, &["Rosa", "Jasmim"], &[]);
        let mut b = fragrance("b", Gender::Feminino, &["Rosa", "Jasmim"], &[]);
        a.occasions = vec!["jantar".to_string()];
        b.occasions = vec!["jantar".to_string()];

        // Full note overlap plus both bonuses would exceed 1.0 unclamped.
        assert_eq!(scorer.olfactory_compatibility(&a, &b), 1.0);
    }

    #[test]
    fn empty_note_sets_score_zero_instead_of_dividing_by_zero() {
        let scorer = CompatibilityScorer::new();
        let a = fragrance("a", Gender::Feminino, &[], &[]);
        let b = fragrance("b", Gender::Masculino, &[], &[]);

        assert_eq!(scorer.olfactory_compatibility(&a, &b), 0.0);
    }

    #[test]
    fn empty_trait_sets_align_to_zero() {
        let scorer = CompatibilityScorer::new();
        assert_eq!(scorer.personality_alignment(&[], &[]), 0.0);
    }

    #[test]
    fn common_notes_match_by_substring_in_either_direction() {
        let scorer = CompatibilityScorer::new();
        let ours = vec!["rosa".to_string(), "baunilha".to_string()];
        let theirs = vec!["rosa búlgara".to_string()];

        assert_eq!(scorer.common_notes(&ours, &theirs), vec!["rosa".to_string()]);
        assert_eq!(scorer.common_notes(&theirs, &ours), vec!["rosa búlgara".to_string()]);
    }

    #[test]
    fn common_notes_match_by_high_fuzzy_similarity() {
        let scorer = CompatibilityScorer::new();
        let ours = vec!["bergamota".to_string()];
        let theirs = vec!["bergamotta".to_string()];

        // similarity("bergamota", "bergamotta") = 9/10, above the 0.8 floor.
        assert_eq!(scorer.common_notes(&ours, &theirs), vec!["bergamota".to_string()]);
    }

    #[test]
    fn gender_mismatch_withholds_the_bonus() {
        let scorer = CompatibilityScorer::new();
        let pivot = fragrance("a", Gender::Feminino, &["Rosa", "Baunilha"], &[]);
        let other_gender = fragrance("b", Gender::Masculino, &["Rosa", "Cedro"], &[]);
        let same_gender = fragrance("c", Gender::Feminino, &["Rosa", "Cedro"], &[]);

        let without_bonus = scorer.olfactory_compatibility(&pivot, &other_gender);
        let with_bonus = scorer.olfactory_compatibility(&pivot, &same_gender);

        assert!((without_bonus - 0.5).abs() < 1e-9);
        assert!((with_bonus - 0.6).abs() < 1e-9);
    }

    #[test]
    fn reason_prefers_olfactory_phrasing_when_notes_dominate() {
        let scorer = CompatibilityScorer::new();
        let candidate = fragrance("b", Gender::Feminino, &["Rosa"], &["Romântica", "Elegante"]);
        let common = vec!["rosa".to_string(), "âmbar".to_string()];

        let reason = scorer.reason(0.8, 0.4, &common, &candidate);
        assert!(reason.contains("afinidade olfativa"));
        assert!(reason.contains("rosa, âmbar"));
        // Straight average of 0.8 and 0.4, not the 60/40-weighted score.
        assert!(reason.starts_with("60%"));
    }

    #[test]
    fn reason_prefers_behavioral_phrasing_when_traits_dominate() {
        let scorer = CompatibilityScorer::new();
        let candidate =
            fragrance("b", Gender::Feminino, &["Rosa"], &["Romântica", "Elegante", "Livre"]);

        let reason = scorer.reason(0.2, 0.9, &[], &candidate);
        assert!(reason.contains("alinhamento comportamental"));
        assert!(reason.contains("romântica, elegante"));
        assert!(reason.starts_with("55%"));
    }
}
