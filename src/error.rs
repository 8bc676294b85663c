//! Error types for the Pivotal Tracker client
//!
//! Every fallible operation in the crate returns [`Result<T>`]. Reaching the
//! end of a collection is not an error: cursors report it as `Ok(None)`.

use thiserror::Error;

/// Errors raised while configuring the client or talking to Tracker
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Setup
    // ============================================================================
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed config file: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Requests
    // ============================================================================
    /// A request failed local validation and was never sent
    #[error("Missing required field '{field}'")]
    FieldNotSet { field: String },

    #[error("Could not encode JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport
    // ============================================================================
    #[error("Request to Tracker failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No response from Tracker within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Tracker answered with a non-2xx status
    #[error("Tracker returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Responses
    // ============================================================================
    #[error("Unexpected response body: {message}")]
    Decode { message: String },

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field_not_set(field: impl Into<String>) -> Self {
        Self::FieldNotSet {
            field: field.into(),
        }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// True for failures of the HTTP exchange itself, as opposed to bad
    /// input or an unexpected body
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. } => true,
            Error::Context { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Status code Tracker answered with, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            Error::Context { source, .. } => source.status(),
            _ => None,
        }
    }
}

/// Result type alias for the Pivotal Tracker client
pub type Result<T> = std::result::Result<T, Error>;

/// Attach a description of what was being attempted to an error
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`context`](Self::context), building the message only on error
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
