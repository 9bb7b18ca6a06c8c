//! Translation key definitions
//!
//! Every user-facing string of the gallery lives in one of these structs,
//! grouped by the part of the page it appears in. The whole table is
//! serialized (camelCase) into every gallery view so the page never hardcodes
//! text.

use serde::Serialize;

/// Root of all translated text
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    /// Page header
    pub header: HeaderTexts,
    /// Search box
    pub search: SearchTexts,
    /// Load status messages
    pub status: StatusTexts,
    /// Card grid and pagination
    pub gallery: GalleryTexts,
    /// Single card in the grid
    pub card: CardTexts,
    /// Detail overlay
    pub detail: DetailTexts,
}

// ============================================================================
// Header
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderTexts {
    pub title: &'static str,
    pub tagline: &'static str,
}

// ============================================================================
// Search
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTexts {
    pub placeholder: &'static str,
    pub clear: &'static str,
}

// ============================================================================
// Load status
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTexts {
    pub loading: &'static str,
    /// Shown when the catalog could not be loaded
    pub load_failed: &'static str,
}

// ============================================================================
// Gallery
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryTexts {
    pub heading: &'static str,
    pub hint: &'static str,
    /// Shown when the filter matches nothing
    pub empty: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub pagination: PaginationTexts,
}

/// Pieces of "Total de personajes: N | Página X de Y"
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationTexts {
    pub total_label: &'static str,
    pub page_label: &'static str,
    pub of: &'static str,
}

// ============================================================================
// Card
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTexts {
    pub more_details: &'static str,
}

// ============================================================================
// Detail overlay
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailTexts {
    pub species: &'static str,
    pub gender: &'static str,
    pub origin: &'static str,
    pub hair: &'static str,
    pub aliases: &'static str,
    pub abilities: &'static str,
    /// Prefix of the hidden-alias counter, "...y N más"
    pub more_prefix: &'static str,
    pub more_suffix: &'static str,
    pub close_hint: &'static str,
}
