//! Resource services
//!
//! Each service maps the REST endpoints of one resource kind onto typed
//! async methods. Collection endpoints are exposed twice: `list` drains
//! every page eagerly, `iterate` returns a cursor that fetches pages on
//! demand.

mod epics;
mod stories;

pub use epics::{EpicCursor, EpicService};
pub use stories::{StoryCursor, StoryService};

use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use serde::de::DeserializeOwned;

/// Send a request and decode the JSON body
async fn execute<T: DeserializeOwned>(transport: &dyn Transport, request: &ApiRequest) -> Result<T> {
    transport.send(request).await?.json()
}
