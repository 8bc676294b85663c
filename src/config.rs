//! Client configuration
//!
//! `ClientConfig` carries everything the HTTP transport and the services
//! need: base URL, API token, timeout, user agent and the page size used
//! for lazy iteration. It can be built in code, loaded from a YAML or JSON
//! file, or read from the environment.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API root for Pivotal Tracker v5
pub const DEFAULT_BASE_URL: &str = "https://www.pivotaltracker.com/services/v5/";

/// Number of items fetched per request when iterating lazily
pub const PAGE_LIMIT: usize = 10;

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "PIVOTAL_API_TOKEN";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "PIVOTAL_BASE_URL";

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a [`PivotalClient`](crate::PivotalClient)
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root all resource paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Token sent in the `X-TrackerToken` header
    #[serde(default)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Page size for lazy iteration (0 fetches everything in one request)
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pivotal-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_page_limit() -> usize {
    PAGE_LIMIT
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            page_limit: default_page_limit(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a config from a YAML (or JSON) string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Default config with the token and base URL taken from the environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `PIVOTAL_API_TOKEN` and `PIVOTAL_BASE_URL` when set
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                self.api_token = Some(token);
            }
        }
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                self.base_url = base_url;
            }
        }
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse the base URL, guaranteeing a trailing slash so relative
    /// resource paths join beneath it instead of replacing its last segment
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_value(
                "base_url",
                format!("'{}' cannot be used as a base URL", self.base_url),
            ));
        }
        Ok(url)
    }

    /// Check the config for values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API token
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.config.api_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Set the page size for lazy iteration
    pub fn page_limit(mut self, limit: usize) -> Self {
        self.config.page_limit = limit;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.page_limit, PAGE_LIMIT);
        assert!(config.api_token.is_none());
        assert!(config.user_agent.starts_with("pivotal-client/"));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::builder()
            .base_url("https://tracker.example.com/api")
            .api_token("secret")
            .timeout(Duration::from_secs(5))
            .page_limit(50)
            .user_agent("test-agent/1.0")
            .build();

        assert_eq!(config.base_url, "https://tracker.example.com/api");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.page_limit, 50);
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_parsed_base_url_adds_trailing_slash() {
        let config = ClientConfig::builder()
            .base_url("https://tracker.example.com/services/v5")
            .build();
        let url = config.parsed_base_url().unwrap();
        assert_eq!(url.as_str(), "https://tracker.example.com/services/v5/");
        assert_eq!(
            url.join("projects/1/stories").unwrap().as_str(),
            "https://tracker.example.com/services/v5/projects/1/stories"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ClientConfig::builder().base_url("not a url").build();
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let mut config = ClientConfig::default();
        config.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::builder().api_token("super-secret").build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
base_url: https://tracker.example.com/services/v5/
api_token: abc123
page_limit: 25
";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("abc123"));
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_yaml_str_accepts_json() {
        let config = ClientConfig::from_yaml_str(r#"{"api_token": "xyz"}"#).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("xyz"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_token: from-file\ntimeout_secs: 10").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("from-file"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ClientConfig::from_file("/nonexistent/pivotal.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
