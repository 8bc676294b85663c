//! Request and response descriptors shared by every transport

use crate::error::{Error, Result};
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Header carrying the total size of a paginated collection
pub const TOTAL_HEADER: &str = "X-Tracker-Pagination-Total";
/// Header carrying the offset the server applied
pub const OFFSET_HEADER: &str = "X-Tracker-Pagination-Offset";
/// Header carrying the limit the server applied
pub const LIMIT_HEADER: &str = "X-Tracker-Pagination-Limit";
/// Header carrying the number of items in this page
pub const RETURNED_HEADER: &str = "X-Tracker-Pagination-Returned";

// ============================================================================
// Request
// ============================================================================

/// An outbound request, relative to the transport's base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Resource path, e.g. `projects/1/stories`
    pub path: String,
    /// Query parameters, encoded by the transport
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    /// Create a request without query or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set a query parameter, replacing any previous value for the key
    pub fn set_query(&mut self, key: &str, value: impl Into<String>) {
        self.query.retain(|(k, _)| k != key);
        self.query.push((key.to_string(), value.into()));
    }

    /// Look up a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` as the JSON document of this request
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

// ============================================================================
// Response
// ============================================================================

/// Pagination metadata reported by the server for a collection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Total number of items in the (filtered) collection
    pub total: usize,
    /// Offset the server applied
    pub offset: Option<usize>,
    /// Limit the server applied
    pub limit: Option<usize>,
    /// Number of items in this page
    pub returned: Option<usize>,
}

impl PaginationInfo {
    /// Metadata with only a total
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            offset: None,
            limit: None,
            returned: None,
        }
    }

    /// Parse the `X-Tracker-Pagination-*` headers.
    ///
    /// Returns `None` when the total header is missing or malformed.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<usize>().ok())
        };

        Some(Self {
            total: read(TOTAL_HEADER)?,
            offset: read(OFFSET_HEADER),
            limit: read(LIMIT_HEADER),
            returned: read(RETURNED_HEADER),
        })
    }
}

/// A successful (2xx) response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Pagination metadata, present on collection endpoints
    pub pagination: Option<PaginationInfo>,
    /// Raw response body
    pub body: Bytes,
}

impl ApiResponse {
    /// Create a 200 response with a body
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            pagination: None,
            body: body.into(),
        }
    }

    /// Attach pagination metadata
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationInfo) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| Error::decode(e.to_string()))
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Executes requests against the remote service.
///
/// Implementations surface non-2xx responses as
/// [`Error::HttpStatus`](crate::Error::HttpStatus) and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request/response round trip
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
