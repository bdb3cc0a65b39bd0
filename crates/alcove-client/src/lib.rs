//! HTTP client for the Alfresco public REST API.
//!
//! One shared `reqwest::Client`; the session credential is passed into every
//! call and becomes a `Basic base64(credential)` header. Non-2xx responses
//! surface as `AppError::Upstream` with the body untouched; no retries, no
//! backoff. Domain methods live in [`api`] behind the [`AlfrescoApi`] trait
//! so the web layer and tests can substitute implementations.

pub mod api;

use std::time::Duration;

use alcove_core::{AppError, Config};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub use api::AlfrescoApi;

const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

/// Fixed paging used by every list page: one page of at most 100 entries.
pub const DEFAULT_SKIP_COUNT: i64 = 0;
pub const DEFAULT_MAX_ITEMS: i64 = 100;

/// `Authorization` header value for a credential string.
pub fn basic_auth_value(credential: &str) -> String {
    format!("Basic {}", BASE64.encode(credential))
}

/// Client over the three Alfresco public API roots (core, auth, search).
#[derive(Clone, Debug)]
pub struct AlfrescoClient {
    http: Client,
    core_url: String,
    auth_url: String,
    search_url: String,
}

impl AlfrescoClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            core_url: config.core_api_url(),
            auth_url: config.auth_api_url(),
            search_url: config.search_api_url(),
        })
    }

    pub fn core_url(&self, path: &str) -> String {
        format!("{}{}", self.core_url, path)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}{}", self.auth_url, path)
    }

    pub fn search_url(&self, path: &str) -> String {
        format!("{}{}", self.search_url, path)
    }

    /// Read the response, mapping non-2xx to `Upstream` with the body as-is.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read response body: {}", e)))?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("Unexpected response shape: {}", e)))
    }

    /// GET with Basic auth, decoding the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        credential: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let mut request = self
            .http
            .get(url)
            .header(AUTHORIZATION, basic_auth_value(credential))
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Request to {} failed: {}", url, e)))?;
        Self::decode(Self::check(response).await?).await
    }

    /// GET with Basic auth, returning the raw body bytes.
    pub async fn get_bytes(&self, url: &str, credential: &str) -> Result<Bytes, AppError> {
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, basic_auth_value(credential))
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Request to {} failed: {}", url, e)))?;
        Self::check(response)
            .await?
            .bytes()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read response body: {}", e)))
    }

    /// POST a JSON body with Basic auth, decoding the JSON response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        credential: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, basic_auth_value(credential))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Request to {} failed: {}", url, e)))?;
        Self::decode(Self::check(response).await?).await
    }

    /// POST a JSON body without auth (ticket creation).
    pub async fn post_json_unauthenticated<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Request to {} failed: {}", url, e)))?;
        Self::decode(Self::check(response).await?).await
    }

    /// PUT raw bytes with Basic auth, decoding the JSON response.
    pub async fn put_bytes<T: DeserializeOwned>(
        &self,
        url: &str,
        credential: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .put(url)
            .header(AUTHORIZATION, basic_auth_value(credential))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, content_type.to_string())
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Request to {} failed: {}", url, e)))?;
        Self::decode(Self::check(response).await?).await
    }
}
