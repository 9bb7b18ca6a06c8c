//! Character catalog service

use std::sync::Arc;

use final_space_catalog::CharacterSource;

use crate::error::CoreResult;
use crate::gallery::GalleryState;
use crate::i18n::t;
use crate::translation::translate_all;
use crate::types::LocalizedCharacter;

/// Tag prefixed to catalog load failures in the server log.
pub const LOG_TAG: &str = "[Final Space Wiki]";

/// Fetches the catalog and hands out translated characters.
pub struct CharacterService {
    source: Arc<dyn CharacterSource>,
}

impl CharacterService {
    #[must_use]
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self { source }
    }

    /// Fetch the whole catalog and translate it.
    ///
    /// One upstream call, no retry. Any failure yields no characters.
    pub async fn list_characters(&self) -> CoreResult<Vec<LocalizedCharacter>> {
        match self.source.fetch_characters().await {
            Ok(raw) => {
                let characters = translate_all(raw);
                log::debug!(
                    "[{}] Translated {} characters",
                    self.source.id(),
                    characters.len()
                );
                Ok(characters)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{LOG_TAG} Error al cargar personajes: {e}");
                } else {
                    log::error!("{LOG_TAG} Error al cargar personajes: {e}");
                }
                Err(e.into())
            }
        }
    }

    /// Drive `state` from `Idle` to `Ready` or `Error`.
    pub async fn load_into(&self, state: &mut GalleryState) -> CoreResult<()> {
        state.begin_loading()?;
        match self.list_characters().await {
            Ok(characters) => state.complete(characters),
            Err(_) => state.fail(t().status.load_failed),
        }
    }

    /// Load a fresh gallery.
    pub async fn load_gallery(&self) -> CoreResult<GalleryState> {
        let mut state = GalleryState::new();
        self.load_into(&mut state).await?;
        Ok(state)
    }
}
