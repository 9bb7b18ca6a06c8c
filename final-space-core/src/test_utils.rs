//! Test helpers
//!
//! Mock catalog source and fixture builders.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use final_space_catalog::{CatalogError, CharacterSource, Result as CatalogResult};

use crate::translation::translate_character;
use crate::types::{LocalizedCharacter, RawCharacter};

// ===== MockCharacterSource =====

pub struct MockCharacterSource {
    response: CatalogResult<Vec<RawCharacter>>,
    calls: AtomicUsize,
}

impl MockCharacterSource {
    pub fn with_characters(characters: Vec<RawCharacter>) -> Self {
        Self {
            response: Ok(characters),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CharacterSource for MockCharacterSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_characters(&self) -> CatalogResult<Vec<RawCharacter>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

// ===== Fixtures =====

pub fn unavailable() -> CatalogError {
    CatalogError::UpstreamStatus {
        catalog: "mock".to_string(),
        status: 503,
        body: None,
    }
}

pub fn raw_character(name: &str, status: &str, gender: &str, species: &str) -> RawCharacter {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    RawCharacter {
        name: Some(serde_json::Value::from(name)),
        status: non_empty(status),
        gender: non_empty(gender),
        species: non_empty(species),
        ..RawCharacter::default()
    }
}

/// A translated "Alive, Male, Human" character.
pub fn localized(name: &str) -> LocalizedCharacter {
    translate_character(raw_character(name, "Alive", "Male", "Human"))
}

pub fn named_catalog(names: &[&str]) -> Vec<LocalizedCharacter> {
    names.iter().map(|n| localized(n)).collect()
}

/// `count` characters named "Character 0", "Character 1", ...
pub fn numbered_catalog(count: usize) -> Vec<LocalizedCharacter> {
    (0..count)
        .map(|i| {
            let mut c = localized(&format!("Character {i}"));
            c.id = Some(serde_json::Value::from(i));
            c
        })
        .collect()
}
