//! Translation adapter
//!
//! Maps a [`RawCharacter`] to a [`LocalizedCharacter`]:
//! - `status`, `gender`, `species`: exact-match dictionary lookup, unseen values
//!   pass through; absent or empty values become [`UNKNOWN_PLACEHOLDER`]
//! - `abilities`: element-wise lookup, order and length preserved
//! - `hair`: untranslated, absent becomes [`NO_HAIR_PLACEHOLDER`]
//! - `alias` / `origin`: defaulted to `[]` / [`UNKNOWN_PLACEHOLDER`]
//!
//! Everything here is pure and total.

pub mod dictionaries;

use crate::types::{LocalizedCharacter, RawCharacter};

use dictionaries::{ABILITY, GENDER, SPECIES, STATUS};

/// Substituted for an absent status, gender, species or origin.
pub const UNKNOWN_PLACEHOLDER: &str = "Desconocido";

/// Substituted for an absent hair descriptor.
pub const NO_HAIR_PLACEHOLDER: &str = "Ninguno";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Translate a status value (`"Alive"` → `"Vivo"`).
pub fn translate_status(value: Option<&str>) -> String {
    present(value).map_or_else(
        || UNKNOWN_PLACEHOLDER.to_string(),
        |v| STATUS.lookup(v).to_string(),
    )
}

/// Translate a gender value (`"Male"` → `"Masculino"`).
pub fn translate_gender(value: Option<&str>) -> String {
    present(value).map_or_else(
        || UNKNOWN_PLACEHOLDER.to_string(),
        |v| GENDER.lookup(v).to_string(),
    )
}

/// Translate a species value (`"Human"` → `"Humano"`).
pub fn translate_species(value: Option<&str>) -> String {
    present(value).map_or_else(
        || UNKNOWN_PLACEHOLDER.to_string(),
        |v| SPECIES.lookup(v).to_string(),
    )
}

/// Translate one ability name; unknown abilities are returned verbatim.
pub fn translate_ability(ability: &str) -> String {
    ABILITY.lookup(ability).to_string()
}

/// Translate every ability, preserving order and length.
pub fn translate_abilities(abilities: &[String]) -> Vec<String> {
    abilities.iter().map(|a| translate_ability(a)).collect()
}

/// Translate a single upstream record.
pub fn translate_character(raw: RawCharacter) -> LocalizedCharacter {
    LocalizedCharacter {
        status: translate_status(raw.status.as_deref()),
        gender: translate_gender(raw.gender.as_deref()),
        species: translate_species(raw.species.as_deref()),
        hair: or_placeholder(raw.hair, NO_HAIR_PLACEHOLDER),
        abilities: raw
            .abilities
            .as_deref()
            .map(translate_abilities)
            .unwrap_or_default(),
        alias: raw.alias.unwrap_or_default(),
        origin: or_placeholder(raw.origin, UNKNOWN_PLACEHOLDER),
        id: raw.id,
        name: raw.name,
        img_url: raw.img_url,
        extra: raw.extra,
    }
}

/// Translate a whole catalog, preserving order.
pub fn translate_all(raw: Vec<RawCharacter>) -> Vec<LocalizedCharacter> {
    raw.into_iter().map(translate_character).collect()
}
