//! Epic endpoints

use super::execute;
use crate::error::{Error, Result};
use crate::http::{ApiRequest, Transport};
use crate::models::{Epic, EpicRequest};
use crate::pagination::{Cursor, ItemCursor, ListRequest, FETCH_ALL};
use crate::types::{Id, Method};
use std::sync::Arc;
use tracing::debug;

/// Lazy, single-pass iteration over epics
pub type EpicCursor = ItemCursor<Epic>;

/// Epics of a project
#[derive(Clone)]
pub struct EpicService {
    transport: Arc<dyn Transport>,
    page_limit: usize,
}

impl EpicService {
    pub(crate) fn new(transport: Arc<dyn Transport>, page_limit: usize) -> Self {
        Self {
            transport,
            page_limit,
        }
    }

    fn list_request(project_id: Id, filter: &str) -> ListRequest {
        ListRequest::new(format!("projects/{project_id}/epics")).with_filter(filter)
    }

    /// All epics matching `filter` (every epic when empty).
    ///
    /// Sizes the collection first and then fetches it in a single page; see
    /// [`StoryService::list`](super::StoryService::list).
    pub async fn list(&self, project_id: Id, filter: &str) -> Result<Vec<Epic>> {
        debug!("Listing epics for project {project_id} (filter: {filter:?})");
        let request = Self::list_request(project_id, filter);
        Cursor::new(self.transport.clone(), request, FETCH_ALL)
            .await?
            .all()
            .await
    }

    /// Cursor over the epics matching `filter`, fetching pages on demand
    pub async fn iterate(&self, project_id: Id, filter: &str) -> Result<EpicCursor> {
        self.iterate_with_limit(project_id, filter, self.page_limit)
            .await
    }

    /// Like [`iterate`](Self::iterate) with an explicit page size
    pub async fn iterate_with_limit(
        &self,
        project_id: Id,
        filter: &str,
        limit: usize,
    ) -> Result<EpicCursor> {
        let request = Self::list_request(project_id, filter);
        ItemCursor::new(self.transport.clone(), request, limit).await
    }

    /// Create an epic. The request must carry a name.
    pub async fn create(&self, project_id: Id, epic: &EpicRequest) -> Result<Epic> {
        if project_id == 0 {
            return Err(Error::field_not_set("project_id"));
        }
        if epic.name.as_deref().map_or(true, str::is_empty) {
            return Err(Error::field_not_set("name"));
        }

        let request = ApiRequest::new(Method::POST, format!("projects/{project_id}/epics"))
            .with_body(epic)?;
        execute(self.transport.as_ref(), &request).await
    }

    pub async fn get(&self, project_id: Id, epic_id: Id) -> Result<Epic> {
        let request = ApiRequest::get(format!("projects/{project_id}/epics/{epic_id}"));
        execute(self.transport.as_ref(), &request).await
    }

    pub async fn update(&self, project_id: Id, epic_id: Id, epic: &EpicRequest) -> Result<Epic> {
        let request =
            ApiRequest::new(Method::PUT, format!("projects/{project_id}/epics/{epic_id}"))
                .with_body(epic)?;
        execute(self.transport.as_ref(), &request).await
    }
}

impl std::fmt::Debug for EpicService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpicService")
            .field("page_limit", &self.page_limit)
            .finish_non_exhaustive()
    }
}
