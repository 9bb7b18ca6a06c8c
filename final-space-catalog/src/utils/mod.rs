//! Utility modules.

/// Tolerant decoders for loosely typed upstream fields.
pub(crate) mod lenient;
/// Log sanitization utilities to keep upstream bodies out of logs.
pub mod log_sanitizer;
