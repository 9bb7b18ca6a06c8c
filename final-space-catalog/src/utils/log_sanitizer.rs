//! Log sanitization utilities
//!
//! Upstream bodies can be large (the full catalog is tens of kilobytes), so
//! debug/error logs only carry a bounded prefix.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Keep a bounded prefix of an upstream body for logging.
///
/// Bodies within `TRUNCATE_LIMIT` bytes are returned whole. Longer bodies are
/// cut at the last character that ends inside the limit and tagged with their
/// full byte length.
pub fn truncate_for_log(s: &str) -> String {
    let cut = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    if cut == s.len() {
        return s.to_owned();
    }
    let mut out = String::with_capacity(cut + 40);
    out.push_str(&s[..cut]);
    out.push_str(&format!("... [truncated, total {} bytes]", s.len()));
    out
}
