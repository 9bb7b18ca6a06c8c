//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use final_space_catalog::CatalogError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No character at this position in the loaded catalog
    #[error("Character not found: {0}")]
    CharacterNotFound(usize),

    /// Gallery action not allowed in the current state
    #[error("Cannot {action} while gallery is {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    /// Catalog error (converting from library)
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl CoreError {
    /// Whether the error is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CharacterNotFound(_) | Self::InvalidTransition { .. } => true,
            Self::Catalog(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
