//! HTTP client for the Tracker API
//!
//! Provides the reqwest-backed transport that handles:
//! - Resolving resource paths against the configured base URL
//! - Token authentication via the `X-TrackerToken` header
//! - Response status classification
//! - Pagination header extraction

use super::types::{ApiRequest, ApiResponse, PaginationInfo, Transport};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Header the Tracker API reads the API token from
pub const TOKEN_HEADER: &str = "X-TrackerToken";

/// HTTP client bound to one API root
pub struct HttpClient {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client from a client config
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.parsed_base_url()?,
            api_token: config.api_token.clone(),
            timeout: config.timeout(),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn timeout_error(&self) -> Error {
        Error::Timeout {
            timeout_ms: self.timeout.as_millis() as u64,
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.build_url(&request.path)?;
        debug!("{} {} {:?}", request.method, url, request.query);

        let mut req = self.client.request(request.method.into(), url.clone());

        if let Some(ref token) = self.api_token {
            req = req.header(TOKEN_HEADER, token.as_str());
        }

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Request failed with {}: {} {}",
                status.as_u16(),
                request.method,
                url
            );
            return Err(Error::http_status(status.as_u16(), body));
        }

        let pagination = PaginationInfo::from_headers(response.headers());
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                Error::Http(e)
            }
        })?;

        debug!(
            "Request succeeded: {} {} ({} bytes)",
            request.method,
            url,
            body.len()
        );

        Ok(ApiResponse {
            status: status.as_u16(),
            pagination,
            body,
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.api_token.is_some())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
