use std::sync::Arc;

use async_trait::async_trait;
use final_space_catalog::{CatalogError, CharacterSource, RawCharacter};
use serde_json::Value;
use final_space_core::CharacterService;

/// Source that answers every fetch with the same canned result.
pub struct StaticSource {
    response: Result<Vec<RawCharacter>, CatalogError>,
}

#[async_trait]
impl CharacterSource for StaticSource {
    fn id(&self) -> &'static str {
        "static"
    }

    async fn fetch_characters(&self) -> final_space_catalog::Result<Vec<RawCharacter>> {
        self.response.clone()
    }
}

pub fn raw(name: &str, status: &str) -> RawCharacter {
    RawCharacter {
        name: Some(Value::from(name)),
        status: Some(status.to_string()),
        gender: Some("Male".to_string()),
        species: Some("Human".to_string()),
        ..RawCharacter::default()
    }
}

/// `count` records named "Character 0", "Character 1", ...
pub fn numbered(count: usize) -> Vec<RawCharacter> {
    (0..count)
        .map(|i| RawCharacter {
            id: Some(Value::from(i)),
            ..raw(&format!("Character {i}"), "Alive")
        })
        .collect()
}

pub fn service_with(characters: Vec<RawCharacter>) -> CharacterService {
    CharacterService::new(Arc::new(StaticSource {
        response: Ok(characters),
    }))
}

pub fn failing_service() -> CharacterService {
    CharacterService::new(Arc::new(StaticSource {
        response: Err(CatalogError::UpstreamStatus {
            catalog: "static".to_string(),
            status: 503,
            body: None,
        }),
    }))
}
