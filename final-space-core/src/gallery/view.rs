//! Render-ready view models
//!
//! Serialized with camelCase keys for the browser.

use serde::Serialize;

use crate::i18n::{Translations, more_aliases, page_summary, t};
use crate::translation::NO_HAIR_PLACEHOLDER;
use serde_json::Value;

use crate::types::LocalizedCharacter;

use super::state::LoadedGallery;

/// Image used when a character has no picture.
pub const IMAGE_PLACEHOLDER: &str = "/placeholder.svg";

/// Aliases listed before the "...y N más" remainder.
pub const ALIAS_PREVIEW_LIMIT: usize = 5;

/// Color family of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusTone {
    Alive,
    Dead,
    Operational,
    Neutral,
}

impl StatusTone {
    /// Tone for a translated status value.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Vivo" => Self::Alive,
            "Muerto" | "Fallecido" => Self::Dead,
            "Operacional" => Self::Operational,
            _ => Self::Neutral,
        }
    }
}

/// One card in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCard {
    /// Position in the loaded catalog, used to open the detail view
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub image: String,
    pub status: String,
    pub status_tone: StatusTone,
    pub species: String,
    pub gender: String,
}

impl CharacterCard {
    pub fn new(index: usize, character: &LocalizedCharacter) -> Self {
        Self {
            index,
            id: character.id.clone(),
            name: character.display_name().to_string(),
            image: character.image_url().unwrap_or(IMAGE_PLACEHOLDER).to_string(),
            status: character.status.clone(),
            status_tone: StatusTone::from_status(&character.status),
            species: character.species.clone(),
            gender: character.gender.clone(),
        }
    }
}

/// First few aliases plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasPreview {
    pub shown: Vec<String>,
    pub hidden: usize,
    /// "...y N más", present only when `hidden > 0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_label: Option<String>,
}

impl AliasPreview {
    pub fn new(aliases: &[String]) -> Self {
        let shown: Vec<String> = aliases.iter().take(ALIAS_PREVIEW_LIMIT).cloned().collect();
        let hidden = aliases.len() - shown.len();
        Self {
            shown,
            hidden,
            more_label: (hidden > 0).then(|| more_aliases(hidden)),
        }
    }
}

/// Detail overlay for one character.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub card: CharacterCard,
    pub origin: String,
    /// Omitted when the character has no hair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    pub aliases: AliasPreview,
    pub abilities: Vec<String>,
}

impl CharacterDetail {
    pub fn new(index: usize, character: &LocalizedCharacter) -> Self {
        Self {
            card: CharacterCard::new(index, character),
            origin: character.origin.clone(),
            hair: (character.hair != NO_HAIR_PLACEHOLDER).then(|| character.hair.clone()),
            aliases: AliasPreview::new(&character.alias),
            abilities: character.abilities.clone(),
        }
    }
}

/// Everything needed to draw the gallery page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub cards: Vec<CharacterCard>,
    pub query: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    /// "Total de personajes: N | Página X de Y"
    pub summary: String,
    /// Set when the search matched nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub has_previous: bool,
    pub has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<CharacterDetail>,
    /// Static page text (header, search box, buttons, detail headings)
    pub labels: &'static Translations,
}

impl GalleryView {
    pub fn from_gallery(gallery: &LoadedGallery) -> Self {
        let cards: Vec<CharacterCard> = gallery
            .page_entries()
            .into_iter()
            .map(|(i, c)| CharacterCard::new(i, c))
            .collect();
        let filtered_count = gallery.filtered_count();

        Self {
            cards,
            query: gallery.search_query().to_string(),
            current_page: gallery.current_page(),
            total_pages: gallery.total_pages(),
            filtered_count,
            summary: page_summary(filtered_count, gallery.current_page(), gallery.total_pages()),
            empty_message: (filtered_count == 0).then_some(t().gallery.empty),
            has_previous: gallery.has_previous_page(),
            has_next: gallery.has_next_page(),
            detail: gallery.selected_index().and_then(|i| {
                gallery
                    .selected()
                    .map(|character| CharacterDetail::new(i, character))
            }),
            labels: t(),
        }
    }
}
