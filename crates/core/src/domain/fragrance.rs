use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FragranceId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Feminino,
    Masculino,
}

/// Olfactory family of a single note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFamily {
    Citrus,
    Floral,
    Woody,
    Oriental,
    Fresh,
    Gourmand,
    Aromatic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Primavera,
    #[serde(rename = "verão")]
    Verao,
    Outono,
    Inverno,
}

/// How far the fragrance projects away from the wearer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sillage {
    Baixo,
    Moderado,
    Forte,
    MuitoForte,
}

/// How long the fragrance remains perceptible after application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Longevity {
    Fraca,
    Moderada,
    Boa,
    Excelente,
}

/// One olfactory component at one position of the top/heart/base pyramid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub name: String,
    /// Perceived strength on a 1-10 scale.
    #[serde(default)]
    pub intensity: Option<u8>,
    pub family: NoteFamily,
    #[serde(default)]
    pub characteristics: Option<String>,
}

/// A catalog entry. Loaded once, never mutated at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragrance {
    pub id: FragranceId,
    pub name: String,
    pub brand: String,
    pub gender: Gender,
    pub top_notes: Vec<Note>,
    pub heart_notes: Vec<Note>,
    pub base_notes: Vec<Note>,
    pub description: String,
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub season: Vec<Season>,
    /// Empty means no occasion data.
    #[serde(default)]
    pub occasions: Vec<String>,
    pub sillage: Sillage,
    pub longevity: Longevity,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub price: Option<String>,
}

impl Fragrance {
    /// All note names lower-cased, preserving pyramid order: top, heart, base.
    pub fn all_notes(&self) -> Vec<String> {
        self.top_notes
            .iter()
            .chain(&self.heart_notes)
            .chain(&self.base_notes)
            .map(|note| note.name.to_lowercase())
            .collect()
    }

    /// Personality traits lower-cased for alignment comparisons.
    pub fn traits_lowercase(&self) -> Vec<String> {
        self.personality_traits.iter().map(|label| label.to_lowercase()).collect()
    }

    /// `"{brand} {name}"` lower-cased, the string the fuzzy pass scores against.
    pub fn qualified_name(&self) -> String {
        format!("{} {}", self.brand.to_lowercase(), self.name.to_lowercase())
    }
}
