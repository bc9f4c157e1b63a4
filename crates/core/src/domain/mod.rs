pub mod fragrance;
pub mod profile;

pub use fragrance::{
    Fragrance, FragranceId, Gender, Longevity, Note, NoteFamily, Season, Sillage,
};
pub use profile::{BehavioralAnalysis, OlfactoryPreferences, PersonalityProfile};
