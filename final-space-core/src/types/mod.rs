//! Type definitions module

mod character;

pub use character::LocalizedCharacter;

// Re-export library types
pub use final_space_catalog::{RawCharacter, SourceConfig};
