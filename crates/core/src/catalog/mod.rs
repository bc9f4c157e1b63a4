//! Read-only, ordered collection of fragrances.
//!
//! The catalog is fixed at construction time; every other component iterates
//! it without mutating it.

pub mod seeds;

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{Fragrance, FragranceId};
use crate::errors::{CatalogError, DomainError};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Fragrance>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate fragrance ids.
    pub fn new(items: Vec<Fragrance>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.0.as_str()) {
                return Err(DomainError::DuplicateFragrance { id: item.id.0.clone() });
            }
        }

        Ok(Self { items })
    }

    /// Parse a catalog from a JSON array of fragrances.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Fragrance> = serde_json::from_str(json)?;
        Ok(Self::new(items)?)
    }

    pub fn get(&self, id: &FragranceId) -> Option<&Fragrance> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragrance> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Fragrance] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
