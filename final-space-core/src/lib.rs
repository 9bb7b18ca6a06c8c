//! Final Space Gallery Core Library
//!
//! Business logic of the character gallery:
//! - Translation of upstream records into Spanish (`translation`)
//! - Search, pagination, detail selection and load lifecycle (`gallery`)
//! - Gallery UI text (`i18n`)
//! - Catalog loading service (`services`)
//!
//! Nothing here renders or serves HTTP; the web crate wires it up.

pub mod error;
pub mod gallery;
pub mod i18n;
pub mod services;
pub mod translation;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use gallery::{GalleryState, GalleryView, LoadedGallery};
pub use services::CharacterService;
pub use translation::{translate_all, translate_character};
pub use types::LocalizedCharacter;
