//! # final-space-catalog
//!
//! Client for the public [Final Space API](https://finalspaceapi.com/) character
//! catalog.
//!
//! The catalog is small (about 47 records) and is always fetched in full. The
//! client performs exactly one `GET` per call: any transport failure or non-2xx
//! status is returned as a [`CatalogError`] and no records are produced.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use final_space_catalog::{CharacterSource, FinalSpaceSource, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = FinalSpaceSource::new(SourceConfig::default())?;
//!     for character in source.fetch_characters().await? {
//!         println!("{:?} ({:?})", character.name, character.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! - [`CatalogError::UpstreamStatus`]: the API answered with a non-2xx status
//! - [`CatalogError::NetworkError`] / [`CatalogError::Timeout`]: transport failure
//! - [`CatalogError::ParseError`]: the body was not a JSON array of characters

mod error;
mod http_client;
mod sources;
mod traits;
mod types;
mod utils;

pub use error::{CatalogError, Result};

pub use sources::FinalSpaceSource;

pub use traits::CharacterSource;

pub use types::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, RawCharacter, SourceConfig,
};
