use async_trait::async_trait;

use crate::error::Result;
use crate::types::RawCharacter;

/// A read-only source of character records.
///
/// Implementations fetch the complete catalog in one call. A failure yields no
/// records at all: there is no partial-result mode.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Source identifier, used as the log and error prefix.
    fn id(&self) -> &'static str;

    /// Fetch every character the catalog exposes.
    async fn fetch_characters(&self) -> Result<Vec<RawCharacter>>;
}
