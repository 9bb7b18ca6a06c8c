//! Generic HTTP client tools
//!
//! Shared request handling for catalog sources: sending, logging, status
//! classification and JSON parsing. Sources build their own `RequestBuilder`.
//!
//! There is no retry loop here. A failed upstream call is final for the
//! current load.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::types::SourceConfig;
use crate::utils::log_sanitizer::truncate_for_log;

/// Build an HTTP client with the configured timeouts and identifying user agent.
pub fn create_http_client(config: &SourceConfig, catalog: &str) -> Result<Client, CatalogError> {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| CatalogError::InvalidConfig {
            catalog: catalog.to_string(),
            detail: e.to_string(),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// # Returns
    /// * `Ok(response_text)` - 2xx response body
    /// * `Err(CatalogError::Timeout | NetworkError)` - transport failure
    /// * `Err(CatalogError::UpstreamStatus)` - any non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        catalog: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, CatalogError> {
        log::debug!("[{catalog}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    catalog: catalog.to_string(),
                    detail: e.to_string(),
                }
            } else {
                CatalogError::NetworkError {
                    catalog: catalog.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{catalog}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            log::warn!(
                "[{catalog}] Upstream returned HTTP {}: {}",
                status.as_u16(),
                body.as_deref().map(truncate_for_log).unwrap_or_default()
            );
            return Err(CatalogError::UpstreamStatus {
                catalog: catalog.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| CatalogError::NetworkError {
                catalog: catalog.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{catalog}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(CatalogError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, catalog: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{catalog}] JSON parse failed: {e}");
            log::error!("[{catalog}] Raw response: {}", truncate_for_log(response_text));
            CatalogError::ParseError {
                catalog: catalog.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
