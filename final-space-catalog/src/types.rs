use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::lenient;

// ============ Character Types ============

/// A character record exactly as the upstream catalog returns it.
///
/// No field is trusted to be present or well typed: `id`, `name` and
/// `img_url` are kept as raw JSON (an explicit `null` included), text fields
/// accept any scalar, and list fields drop elements that are not scalars.
/// Fields the catalog adds later are kept verbatim in [`extra`](Self::extra)
/// so they can be passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCharacter {
    #[serde(
        default,
        deserialize_with = "lenient::keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient::keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub species: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub alias: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub abilities: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub img_url: Option<Value>,
    /// Any upstream field not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============ Source Configuration ============

/// Public character endpoint of the Final Space API.
pub const DEFAULT_BASE_URL: &str = "https://finalspaceapi.com/api/v0/character";
/// Identifying `User-Agent` sent with every upstream request.
pub const DEFAULT_USER_AGENT: &str = "Final-Space-Gallery/1.0";
/// Default connect timeout (seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Full URL of the character list endpoint.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl SourceConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": 1,
            "name": "Gary Goodspeed",
            "status": "Alive",
            "species": "Human",
            "gender": "Male",
            "hair": "Blonde",
            "alias": ["The Gary", "Thunderbolt"],
            "origin": "Earth",
            "abilities": ["Piloting", "Marksmanship"],
            "img_url": "https://finalspaceapi.com/api/character/avatar/gary_goodspeed.png"
        }"#;
        let c: RawCharacter = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, Some(json!(1)));
        assert_eq!(c.name, Some(json!("Gary Goodspeed")));
        assert_eq!(c.abilities.as_ref().map(Vec::len), Some(2));
        assert!(c.extra.is_empty());
    }

    #[test]
    fn deserialize_sparse_record() {
        let c: RawCharacter = serde_json::from_str(r#"{"name": "Mooncake"}"#).unwrap();
        assert!(c.id.is_none());
        assert!(c.status.is_none());
        assert!(c.alias.is_none());
        assert!(c.img_url.is_none());
    }

    #[test]
    fn null_fields_become_none() {
        let c: RawCharacter =
            serde_json::from_str(r#"{"id": 3, "hair": null, "alias": null}"#).unwrap();
        assert!(c.hair.is_none());
        assert!(c.alias.is_none());
    }

    #[test]
    fn null_passthrough_fields_are_kept() {
        let c: RawCharacter =
            serde_json::from_str(r#"{"id": null, "name": null, "img_url": null}"#).unwrap();
        assert_eq!(c.id, Some(Value::Null));
        assert_eq!(c.name, Some(Value::Null));
        assert_eq!(c.img_url, Some(Value::Null));

        let back = serde_json::to_value(&c).unwrap();
        let obj = back.as_object().unwrap();
        for key in ["id", "name", "img_url"] {
            assert_eq!(obj.get(key), Some(&Value::Null), "{key}");
        }
    }

    #[test]
    fn odd_ids_do_not_reject_the_array() {
        let list: Vec<RawCharacter> = serde_json::from_str(
            r#"[{"id": 1, "name": "Gary"}, {"id": -1, "name": "Glitch"}, {"id": 1.5}, {"id": "kvn"}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list[1].id, Some(json!(-1)));
        assert_eq!(list[2].id, Some(json!(1.5)));
        assert_eq!(list[3].id, Some(json!("kvn")));
    }

    #[test]
    fn null_ability_does_not_reject_the_array() {
        let list: Vec<RawCharacter> = serde_json::from_str(
            r#"[{"id": 1, "abilities": ["Piloting", null, "Telepathy"]},
                {"id": 2, "alias": "Mooncake", "status": 0, "species": {"kind": "Alien"}}]"#,
        )
        .unwrap();
        assert_eq!(list[0].abilities.as_deref().unwrap(), ["Piloting", "Telepathy"]);
        assert_eq!(list[1].alias.as_deref().unwrap(), ["Mooncake"]);
        assert_eq!(list[1].status.as_deref(), Some("0"));
        assert!(list[1].species.is_none());
    }

    #[test]
    fn unknown_fields_are_kept() {
        let c: RawCharacter =
            serde_json::from_str(r#"{"id": "kvn", "quote": "Best friends forever"}"#).unwrap();
        assert_eq!(c.id, Some(json!("kvn")));
        assert_eq!(
            c.extra.get("quote"),
            Some(&Value::String("Best friends forever".to_string()))
        );

        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["quote"], "Best friends forever");
    }

    #[test]
    fn source_config_defaults() {
        let cfg = SourceConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.user_agent, "Final-Space-Gallery/1.0");
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn source_config_partial_override() {
        let cfg: SourceConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:9000/character"}"#).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:9000/character");
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    }
}
