//! Behavioral profile synthesis.
//!
//! Aggregates trait, note, and occasion frequency across a set of
//! fragrances into a descriptive profile. Deterministic: frequency ties
//! resolve in first-seen order, and the same input always yields the same
//! profile.

use crate::domain::{
    BehavioralAnalysis, Fragrance, Note, OlfactoryPreferences, PersonalityProfile,
};

const DOMINANT_TRAIT_COUNT: usize = 4;
const SECONDARY_TRAIT_COUNT: usize = 4;
const NOTE_PREFERENCE_COUNT: usize = 5;
const BRAND_MENTION_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileSynthesizer;

impl ProfileSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Derive a profile from a set of fragrances (typically one). Empty
    /// input falls back to the fixed default profile.
    pub fn synthesize(&self, fragrances: &[Fragrance]) -> PersonalityProfile {
        if fragrances.is_empty() {
            return default_profile();
        }

        let all_traits: Vec<&str> = fragrances
            .iter()
            .flat_map(|fragrance| fragrance.personality_traits.iter().map(String::as_str))
            .collect();
        let ranked_traits = frequency_ranked(&all_traits);

        let dominant_traits: Vec<String> =
            ranked_traits.iter().take(DOMINANT_TRAIT_COUNT).map(|(label, _)| label.clone()).collect();
        let secondary_traits: Vec<String> = ranked_traits
            .iter()
            .skip(DOMINANT_TRAIT_COUNT)
            .take(SECONDARY_TRAIT_COUNT)
            .map(|(label, _)| label.clone())
            .collect();

        let top_preferences = note_preferences(fragrances, |fragrance| &fragrance.top_notes);
        let heart_preferences = note_preferences(fragrances, |fragrance| &fragrance.heart_notes);
        let base_preferences = note_preferences(fragrances, |fragrance| &fragrance.base_notes);

        let essence_description = essence_description(&dominant_traits, fragrances);
        let behavioral_analysis = behavioral_analysis(&dominant_traits, fragrances);
        let compatibility_insights = compatibility_insights(&dominant_traits, &top_preferences);

        PersonalityProfile {
            dominant_traits,
            secondary_traits,
            olfactory_preferences: OlfactoryPreferences {
                top_notes_preference: top_preferences,
                heart_notes_preference: heart_preferences,
                base_notes_preference: base_preferences,
            },
            behavioral_analysis,
            essence_description,
            compatibility_insights,
        }
    }
}

/// Fixed fallback for an empty input set: placeholder traits and
/// exploratory messaging instead of a failure.
pub fn default_profile() -> PersonalityProfile {
    PersonalityProfile {
        dominant_traits: vec!["Autêntica".to_string(), "Elegante".to_string()],
        secondary_traits: vec!["Sofisticada".to_string(), "Confiante".to_string()],
        olfactory_preferences: OlfactoryPreferences {
            top_notes_preference: Vec::new(),
            heart_notes_preference: Vec::new(),
            base_notes_preference: Vec::new(),
        },
        behavioral_analysis: BehavioralAnalysis {
            lifestyle: "Descobrindo seu estilo".to_string(),
            personality: "Em busca da fragrância perfeita".to_string(),
            recommendations: vec![
                "Explore diferentes famílias olfativas".to_string(),
                "Descubra sua identidade aromática".to_string(),
            ],
        },
        essence_description: "Sua jornada olfativa está começando. Explore diferentes \
                              fragrâncias para descobrir sua essência única."
            .to_string(),
        compatibility_insights: vec![
            "Mantenha-se aberta a novas experiências aromáticas".to_string()
        ],
    }
}

/// Occurrence counts in first-seen order; the stable sort by descending
/// count keeps first-seen order for ties.
fn frequency_ranked(values: &[&str]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(existing, _)| existing == value) {
            Some((_, count)) => *count += 1,
            None => counts.push(((*value).to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn note_preferences<'a>(
    fragrances: &'a [Fragrance],
    tier: impl Fn(&'a Fragrance) -> &'a [Note],
) -> Vec<String> {
    let names: Vec<&str> = fragrances
        .iter()
        .flat_map(|fragrance| tier(fragrance).iter().map(|note| note.name.as_str()))
        .collect();

    frequency_ranked(&names)
        .into_iter()
        .take(NOTE_PREFERENCE_COUNT)
        .map(|(name, _)| name)
        .collect()
}

fn distinct_brands(fragrances: &[Fragrance]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for fragrance in fragrances {
        if !brands.contains(&fragrance.brand) {
            brands.push(fragrance.brand.clone());
        }
    }
    brands
}

fn essence_description(dominant_traits: &[String], fragrances: &[Fragrance]) -> String {
    let primary = dominant_traits
        .first()
        .map(|label| label.to_lowercase())
        .unwrap_or_else(|| "única".to_string());
    let secondary = dominant_traits
        .get(1)
        .map(|label| label.to_lowercase())
        .unwrap_or_else(|| "especial".to_string());
    let brands = distinct_brands(fragrances)
        .into_iter()
        .take(BRAND_MENTION_COUNT)
        .collect::<Vec<_>>()
        .join(" e ");

    format!(
        "Sua essência revela uma personalidade {primary} e {secondary}. Com preferência por \
         fragrâncias de {brands}, você demonstra um gosto refinado e uma identidade olfativa \
         bem definida. Sua aura transmite confiança e sofisticação, atraindo pessoas que \
         apreciam autenticidade e elegância."
    )
}

fn behavioral_analysis(dominant_traits: &[String], fragrances: &[Fragrance]) -> BehavioralAnalysis {
    let traits = dominant_traits
        .iter()
        .take(2)
        .map(|label| label.to_lowercase())
        .collect::<Vec<_>>()
        .join(" e ");

    BehavioralAnalysis {
        lifestyle: lifestyle(fragrances),
        personality: format!("Personalidade {traits}, com forte senso estético"),
        recommendations: vec![
            "Explore fragrâncias com notas complementares para diferentes ocasiões".to_string(),
            "Considere perfumes com intensidade similar ao seu estilo atual".to_string(),
            "Experimente fragrâncias da mesma família olfativa para expandir seu repertório"
                .to_string(),
        ],
    }
}

/// Lifestyle text from the most frequent occasion label, `versátil` when no
/// fragrance carries occasion data.
fn lifestyle(fragrances: &[Fragrance]) -> String {
    let occasions: Vec<&str> = fragrances
        .iter()
        .flat_map(|fragrance| fragrance.occasions.iter().map(String::as_str))
        .collect();

    let top_occasion = frequency_ranked(&occasions)
        .into_iter()
        .next()
        .map(|(label, _)| label)
        .unwrap_or_else(|| "versátil".to_string());

    format!(
        "Estilo de vida {top_occasion}, com preferência por fragrâncias que complementam sua \
         rotina"
    )
}

fn compatibility_insights(dominant_traits: &[String], top_preferences: &[String]) -> Vec<String> {
    let notes = top_preferences
        .iter()
        .take(2)
        .map(|name| name.to_lowercase())
        .collect::<Vec<_>>()
        .join(" e ");
    let primary = dominant_traits
        .first()
        .map(|label| label.to_lowercase())
        .unwrap_or_else(|| "autêntico".to_string());

    vec![
        format!("Sua preferência por notas {notes} sugere uma personalidade vibrante"),
        format!("As notas de coração revelam seu lado {primary}"),
        "Sua base olfativa indica profundidade e sofisticação em suas escolhas".to_string(),
    ]
}
