//! Localized character types

use serde::Serialize;
use serde_json::{Map, Value};

/// A character record after dictionary-based field substitution.
///
/// Same JSON shape as the upstream record: enumerated fields are always
/// present (translated or defaulted), while `id`, `name`, `img_url` and any
/// extra upstream fields pass through as received, an explicit `null`
/// included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedCharacter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub hair: String,
    pub alias: Vec<String>,
    pub origin: String,
    pub abilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_url: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocalizedCharacter {
    /// Name for display and search; empty when the upstream omitted it or
    /// sent something other than a string.
    pub fn display_name(&self) -> &str {
        self.name.as_ref().and_then(Value::as_str).unwrap_or_default()
    }

    /// Portrait URL, if the upstream sent a non-empty string.
    pub fn image_url(&self) -> Option<&str> {
        self.img_url
            .as_ref()
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test_utils::localized;

    #[test]
    fn display_name_ignores_non_strings() {
        let mut c = localized("Gary");
        assert_eq!(c.display_name(), "Gary");
        c.name = Some(json!(42));
        assert_eq!(c.display_name(), "");
        c.name = Some(serde_json::Value::Null);
        assert_eq!(c.display_name(), "");
    }

    #[test]
    fn image_url_requires_non_empty_string() {
        let mut c = localized("Gary");
        c.img_url = Some(json!("https://example.test/gary.png"));
        assert_eq!(c.image_url(), Some("https://example.test/gary.png"));
        c.img_url = Some(json!(""));
        assert_eq!(c.image_url(), None);
        c.img_url = Some(serde_json::Value::Null);
        assert_eq!(c.image_url(), None);
    }
}
