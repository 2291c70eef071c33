//! Data API client — the single entry point for all social-network data calls.
//!
//! Every endpoint returns the same envelope: `{success, data?, message?}`.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The data API's standard response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issues `GET {base}/{endpoint}?{query}` and decodes the envelope.
    pub async fn call_api(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!("Calling data API: {url}");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_success_payload() {
        let json = r#"{"success": true, "data": {"name": "Lear Cyber Tech"}}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap()["name"], "Lear Cyber Tech");
        assert!(response.message.is_none());
    }

    #[test]
    fn test_envelope_deserializes_error_payload() {
        let json = r#"{"success": false, "message": "rate limited"}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_envelope_fields_all_default() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.base_url, "https://api.example.com");
    }
}
