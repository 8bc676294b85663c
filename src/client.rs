//! Top-level API client

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::services::{EpicService, StoryService};
use std::sync::Arc;

/// Entry point to the Tracker API.
///
/// Cheap to clone; every clone and every service shares one transport.
#[derive(Clone)]
pub struct PivotalClient {
    transport: Arc<dyn Transport>,
    page_limit: usize,
}

impl PivotalClient {
    /// Create a client talking HTTP according to `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = HttpClient::with_config(config)?;
        Ok(Self::with_transport(Arc::new(http), config.page_limit))
    }

    /// Create a client from the `PIVOTAL_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>, page_limit: usize) -> Self {
        Self {
            transport,
            page_limit,
        }
    }

    /// Story endpoints
    pub fn stories(&self) -> StoryService {
        StoryService::new(self.transport.clone(), self.page_limit)
    }

    /// Epic endpoints
    pub fn epics(&self) -> EpicService {
        EpicService::new(self.transport.clone(), self.page_limit)
    }

    /// Shared transport
    pub fn transport(&self) -> Arc<dyn Transport> {
        self.transport.clone()
    }
}

impl std::fmt::Debug for PivotalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PivotalClient")
            .field("page_limit", &self.page_limit)
            .finish_non_exhaustive()
    }
}
