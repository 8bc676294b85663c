//! Pagination types
//!
//! Defines the request builder a cursor re-invokes for every page.

use crate::http::ApiRequest;

/// Limit value asking the cursor to fetch the whole collection in one request
pub const FETCH_ALL: usize = 0;

/// Query parameter carrying the page offset
pub const OFFSET_PARAM: &str = "offset";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

/// Query parameter carrying the server-side filter expression
pub const FILTER_PARAM: &str = "filter";

/// Builds the request for one filtered collection endpoint.
///
/// Every call to [`build`](ListRequest::build) yields a fresh request so the
/// cursor can attach its own `offset` and `limit` without accumulating state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    path: String,
    filter: Option<String>,
}

impl ListRequest {
    /// Create a request builder for a collection path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filter: None,
        }
    }

    /// Set the filter expression. An empty filter is ignored.
    #[must_use]
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = (!filter.is_empty()).then(|| filter.to_string());
        self
    }

    /// Collection path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Filter expression, if any
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Build the request for the first page
    pub fn build(&self) -> ApiRequest {
        let request = ApiRequest::get(self.path.clone());
        match &self.filter {
            Some(filter) => request.query(FILTER_PARAM, filter.clone()),
            None => request,
        }
    }
}
