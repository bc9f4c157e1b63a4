//! Built-in seed catalog.
//!
//! A curated table of fragrances with full pyramid, trait, and occasion
//! data. Embedding callers can use it directly; the contract tests run
//! against it.

use crate::domain::{
    Fragrance, FragranceId, Gender, Longevity, Note, NoteFamily, Season, Sillage,
};

use super::Catalog;

fn note(name: &str, intensity: u8, family: NoteFamily) -> Note {
    Note { name: name.to_string(), intensity: Some(intensity), family, characteristics: None }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// The built-in catalog. Ids are unique by construction.
pub fn builtin() -> Catalog {
    let items = vec![
        Fragrance {
            id: FragranceId("luna-essencia".to_string()),
            name: "Luna Essência".to_string(),
            brand: "O Boticário".to_string(),
            gender: Gender::Feminino,
            top_notes: vec![
                note("Bergamota", 7, NoteFamily::Citrus),
                note("Mandarina", 5, NoteFamily::Citrus),
            ],
            heart_notes: vec![
                note("Jasmim", 8, NoteFamily::Floral),
                note("Rosa Búlgara", 6, NoteFamily::Floral),
            ],
            base_notes: vec![
                note("Âmbar", 7, NoteFamily::Oriental),
                note("Baunilha", 6, NoteFamily::Gourmand),
            ],
            description: "Floral oriental luminoso para noites especiais".to_string(),
            personality_traits: labels(&["Romântica", "Elegante", "Sofisticada"]),
            season: vec![Season::Outono, Season::Inverno],
            occasions: labels(&["jantar", "encontro"]),
            sillage: Sillage::Moderado,
            longevity: Longevity::Boa,
            year: Some(2019),
            price: Some("R$ 189,90".to_string()),
        },
        Fragrance {
            id: FragranceId("florescer-intenso".to_string()),
            name: "Florescer Intenso".to_string(),
            brand: "Natura".to_string(),
            gender: Gender::Feminino,
            top_notes: vec![
                note("Tangerina", 6, NoteFamily::Citrus),
                note("Bergamota", 5, NoteFamily::Citrus),
            ],
            heart_notes: vec![
                note("Flor de Laranjeira", 7, NoteFamily::Floral),
                note("Jasmim", 6, NoteFamily::Floral),
            ],
            base_notes: vec![
                note("Sândalo", 6, NoteFamily::Woody),
                note("Baunilha", 5, NoteFamily::Gourmand),
            ],
            description: "Floral frutal radiante para o dia a dia".to_string(),
            personality_traits: labels(&["Romântica", "Delicada", "Autêntica"]),
            season: vec![Season::Primavera, Season::Verao],
            occasions: labels(&["dia-a-dia", "trabalho"]),
            sillage: Sillage::Moderado,
            longevity: Longevity::Boa,
            year: Some(2021),
            price: Some("R$ 164,90".to_string()),
        },
        Fragrance {
            id: FragranceId("malbec-noir".to_string()),
            name: "Malbec Noir".to_string(),
            brand: "O Boticário".to_string(),
            gender: Gender::Masculino,
            top_notes: vec![
                note("Pimenta Rosa", 7, NoteFamily::Aromatic),
                note("Bergamota", 5, NoteFamily::Citrus),
            ],
            heart_notes: vec![
                note("Couro", 8, NoteFamily::Woody),
                note("Lavanda", 5, NoteFamily::Aromatic),
            ],
            base_notes: vec![
                note("Madeira de Âmbar", 8, NoteFamily::Woody),
                note("Vetiver", 6, NoteFamily::Woody),
            ],
            description: "Amadeirado intenso com caráter vinícola".to_string(),
            personality_traits: labels(&["Intenso", "Confiante", "Misterioso"]),
            season: vec![Season::Outono, Season::Inverno],
            occasions: labels(&["festa", "encontro"]),
            sillage: Sillage::Forte,
            longevity: Longevity::Excelente,
            year: Some(2018),
            price: Some("R$ 219,90".to_string()),
        },
        Fragrance {
            id: FragranceId("kaiak-oceano".to_string()),
            name: "Kaiak Oceano".to_string(),
            brand: "Natura".to_string(),
            gender: Gender::Masculino,
            top_notes: vec![
                note("Limão", 6, NoteFamily::Citrus),
                note("Maçã Verde", 5, NoteFamily::Fresh),
            ],
            heart_notes: vec![
                note("Gengibre", 6, NoteFamily::Aromatic),
                note("Alecrim", 5, NoteFamily::Aromatic),
            ],
            base_notes: vec![
                note("Almíscar", 5, NoteFamily::Fresh),
                note("Cedro", 6, NoteFamily::Woody),
            ],
            description: "Aquático esportivo de frescor imediato".to_string(),
            personality_traits: labels(&["Aventureiro", "Esportivo", "Livre"]),
            season: vec![Season::Primavera, Season::Verao],
            occasions: labels(&["esporte", "dia-a-dia"]),
            sillage: Sillage::Baixo,
            longevity: Longevity::Moderada,
            year: Some(2020),
            price: Some("R$ 119,90".to_string()),
        },
        Fragrance {
            id: FragranceId("essencial-unico".to_string()),
            name: "Essencial Único".to_string(),
            brand: "Natura".to_string(),
            gender: Gender::Feminino,
            top_notes: vec![
                note("Pitanga", 6, NoteFamily::Fresh),
                note("Mandarina", 5, NoteFamily::Citrus),
            ],
            heart_notes: vec![
                note("Rosa", 7, NoteFamily::Floral),
                note("Ylang-Ylang", 6, NoteFamily::Floral),
            ],
            base_notes: vec![
                note("Patchouli", 7, NoteFamily::Woody),
                note("Âmbar", 6, NoteFamily::Oriental),
            ],
            description: "Chipre floral de presença marcante".to_string(),
            personality_traits: labels(&["Sofisticada", "Confiante", "Elegante"]),
            season: vec![Season::Outono, Season::Inverno],
            occasions: labels(&["trabalho", "jantar"]),
            sillage: Sillage::Forte,
            longevity: Longevity::Excelente,
            year: Some(2017),
            price: Some("R$ 239,90".to_string()),
        },
        Fragrance {
            id: FragranceId("quasar-surf".to_string()),
            name: "Quasar Surf".to_string(),
            brand: "O Boticário".to_string(),
            gender: Gender::Masculino,
            top_notes: vec![
                note("Limão Siciliano", 6, NoteFamily::Citrus),
                note("Menta", 5, NoteFamily::Fresh),
            ],
            heart_notes: vec![
                note("Melão", 5, NoteFamily::Fresh),
                note("Alecrim", 4, NoteFamily::Aromatic),
            ],
            base_notes: vec![
                note("Almíscar", 5, NoteFamily::Fresh),
                note("Âmbar", 4, NoteFamily::Oriental),
            ],
            description: "Cítrico aquático jovem e despretensioso".to_string(),
            personality_traits: labels(&["Jovem", "Esportivo", "Descontraído"]),
            season: vec![Season::Verao],
            occasions: labels(&["esporte", "praia"]),
            sillage: Sillage::Baixo,
            longevity: Longevity::Moderada,
            year: Some(2022),
            price: Some("R$ 99,90".to_string()),
        },
        Fragrance {
            id: FragranceId("lily-absolu".to_string()),
            name: "Lily Absolu".to_string(),
            brand: "O Boticário".to_string(),
            gender: Gender::Feminino,
            top_notes: vec![
                note("Bergamota", 5, NoteFamily::Citrus),
                note("Cassis", 6, NoteFamily::Fresh),
            ],
            heart_notes: vec![
                note("Lírio", 8, NoteFamily::Floral),
                note("Jasmim", 6, NoteFamily::Floral),
            ],
            base_notes: vec![
                note("Baunilha", 6, NoteFamily::Gourmand),
                note("Almíscar", 5, NoteFamily::Fresh),
            ],
            description: "Floral branco opulento de assinatura clássica".to_string(),
            personality_traits: labels(&["Elegante", "Clássica", "Romântica"]),
            season: vec![Season::Primavera, Season::Outono],
            occasions: labels(&["jantar", "eventos"]),
            sillage: Sillage::MuitoForte,
            longevity: Longevity::Excelente,
            year: Some(2016),
            price: Some("R$ 269,90".to_string()),
        },
        Fragrance {
            id: FragranceId("humor-proprio".to_string()),
            name: "Humor Próprio".to_string(),
            brand: "Natura".to_string(),
            gender: Gender::Feminino,
            top_notes: vec![
                note("Framboesa", 6, NoteFamily::Gourmand),
                note("Tangerina", 5, NoteFamily::Citrus),
            ],
            heart_notes: vec![
                note("Flor de Lótus", 5, NoteFamily::Floral),
                note("Rosa", 4, NoteFamily::Floral),
            ],
            base_notes: vec![
                note("Caramelo", 6, NoteFamily::Gourmand),
                note("Baunilha", 5, NoteFamily::Gourmand),
            ],
            description: "Gourmand frutal divertido e acolhedor".to_string(),
            personality_traits: labels(&["Divertida", "Jovem", "Autêntica"]),
            season: vec![Season::Primavera, Season::Verao],
            occasions: labels(&["festa", "dia-a-dia"]),
            sillage: Sillage::Moderado,
            longevity: Longevity::Boa,
            year: Some(2023),
            price: Some("R$ 134,90".to_string()),
        },
    ];

    // Seed ids are unique by construction; skip the runtime check.
    Catalog { items }
}
