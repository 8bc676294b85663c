//! HTTP client module
//!
//! Provides the transport the resource services and cursors talk through.
//!
//! # Features
//!
//! - **Transport trait**: the seam between pagination and HTTP
//! - **Token auth**: `X-TrackerToken` header on every request
//! - **Pagination metadata**: `X-Tracker-Pagination-*` headers parsed per response

mod client;
mod types;

pub use client::{HttpClient, TOKEN_HEADER};
pub use types::{
    ApiRequest, ApiResponse, PaginationInfo, Transport, LIMIT_HEADER, OFFSET_HEADER,
    RETURNED_HEADER, TOTAL_HEADER,
};

#[cfg(test)]
mod tests;
