//! Server configuration
//!
//! Loaded from a TOML file. Every field has a default, so an empty or missing
//! file gives a working server:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! workers = 4
//!
//! [upstream]
//! base_url = "https://finalspaceapi.com/api/v0/character"
//! user_agent = "Final-Space-Gallery/1.0"
//! connect_timeout_secs = 10
//! request_timeout_secs = 30
//!
//! [log]
//! level = "info"
//! format = "text"          # or "json"
//! directory = "logs"       # optional rolling file output
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use final_space_catalog::SourceConfig;
use serde::Deserialize;

/// Used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: SourceConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Actix worker threads
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: num_cpus::get(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    pub level: String,
    pub format: LogFormat,
    /// Directory for daily-rotated log files, disabled when unset
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            directory: None,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    ///
    /// Returns the config and whether the file was found.
    pub fn load(path: &Path) -> anyhow::Result<(Self, bool)> {
        if !path.exists() {
            return Ok((Self::default(), false));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok((config, true))
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use final_space_catalog::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.workers, num_cpus::get());
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.upstream.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(config.log.directory.is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9000

            [upstream]
            request_timeout_secs = 5

            [log]
            format = "json"
            directory = "/var/log/final-space"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.request_timeout_secs, 5);
        assert_eq!(config.upstream.connect_timeout_secs, 10);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(
            config.log.directory.as_deref(),
            Some(Path::new("/var/log/final-space"))
        );
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(AppConfig::from_toml("[log]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let (config, found) =
            AppConfig::load(Path::new("/nonexistent/final-space/config.toml")).unwrap();
        assert!(!found);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn bind_address_pairs_host_and_port() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
    }
}
