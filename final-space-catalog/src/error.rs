use serde::{Deserialize, Serialize};

/// Unified error type for all catalog fetch operations.
///
/// Each variant carries a `catalog` field naming the source that produced it,
/// plus variant-specific context. Variants are serializable for structured
/// error reporting.
///
/// Every variant is terminal for the current load: the catalog client never
/// retries, and callers are expected to surface a single failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CatalogError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Source that produced the error.
        catalog: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Source that produced the error.
        catalog: String,
        /// Error details.
        detail: String,
    },

    /// The upstream answered with a non-success HTTP status.
    UpstreamStatus {
        /// Source that produced the error.
        catalog: String,
        /// HTTP status code returned by the upstream.
        status: u16,
        /// Response body, if one could be read.
        body: Option<String>,
    },

    /// Failed to parse the upstream response.
    ParseError {
        /// Source that produced the error.
        catalog: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The HTTP client could not be built from the supplied configuration.
    InvalidConfig {
        /// Source that produced the error.
        catalog: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl CatalogError {
    /// Whether the failure is an upstream-side condition rather than a local fault.
    ///
    /// `true` maps to `warn`-level logging, `false` to `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::UpstreamStatus { .. } | Self::Timeout { .. })
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { catalog, detail } => {
                write!(f, "[{catalog}] Network error: {detail}")
            }
            Self::Timeout { catalog, detail } => {
                write!(f, "[{catalog}] Request timeout: {detail}")
            }
            Self::UpstreamStatus { catalog, status, .. } => {
                write!(f, "[{catalog}] Upstream returned status {status}")
            }
            Self::ParseError { catalog, detail } => {
                write!(f, "[{catalog}] Parse error: {detail}")
            }
            Self::InvalidConfig { catalog, detail } => {
                write!(f, "[{catalog}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Convenience type alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;
