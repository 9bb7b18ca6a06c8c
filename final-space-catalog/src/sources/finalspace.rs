//! Final Space API source

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::CharacterSource;
use crate::types::{RawCharacter, SourceConfig};

const SOURCE_ID: &str = "finalspace";

/// Character source backed by the public Final Space API.
///
/// The client is built once and reused, so one instance can serve every
/// request of a long-running server.
#[derive(Debug)]
pub struct FinalSpaceSource {
    client: Client,
    config: SourceConfig,
}

impl FinalSpaceSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = create_http_client(&config, SOURCE_ID)?;
        Ok(Self { client, config })
    }

    /// Endpoint this source reads from.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl CharacterSource for FinalSpaceSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_characters(&self) -> Result<Vec<RawCharacter>> {
        let url = self.base_url();
        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");

        let body = HttpUtils::execute_request(request, SOURCE_ID, "GET", url).await?;
        let characters: Vec<RawCharacter> = HttpUtils::parse_json(&body, SOURCE_ID)?;

        log::debug!("[{SOURCE_ID}] Fetched {} characters", characters.len());
        Ok(characters)
    }
}
