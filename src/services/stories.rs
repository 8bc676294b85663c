//! Story endpoints

use super::execute;
use crate::error::{Error, Result};
use crate::http::{ApiRequest, Transport};
use crate::models::{
    Blocker, BlockerRequest, Comment, CommentRequest, Person, Story, StoryRequest, Task,
    TaskRequest,
};
use crate::pagination::{Cursor, ItemCursor, ListRequest, FETCH_ALL};
use crate::types::{Id, Method};
use std::sync::Arc;
use tracing::debug;

/// Lazy, single-pass iteration over stories
pub type StoryCursor = ItemCursor<Story>;

/// Stories of a project, with their tasks, owners, comments and blockers
#[derive(Clone)]
pub struct StoryService {
    transport: Arc<dyn Transport>,
    page_limit: usize,
}

impl StoryService {
    pub(crate) fn new(transport: Arc<dyn Transport>, page_limit: usize) -> Self {
        Self {
            transport,
            page_limit,
        }
    }

    fn list_request(project_id: Id, filter: &str) -> ListRequest {
        ListRequest::new(format!("projects/{project_id}/stories")).with_filter(filter)
    }

    /// All stories matching `filter` (every story when empty).
    ///
    /// Sends two requests: one to learn how many stories match, and one
    /// fetching all of them at once. Filtered listings are not sorted
    /// consistently between pages, so the whole result has to come from a
    /// single page.
    pub async fn list(&self, project_id: Id, filter: &str) -> Result<Vec<Story>> {
        debug!("Listing stories for project {project_id} (filter: {filter:?})");
        let request = Self::list_request(project_id, filter);
        Cursor::new(self.transport.clone(), request, FETCH_ALL)
            .await?
            .all()
            .await
    }

    /// Cursor over the stories matching `filter`, fetching pages on demand
    pub async fn iterate(&self, project_id: Id, filter: &str) -> Result<StoryCursor> {
        self.iterate_with_limit(project_id, filter, self.page_limit)
            .await
    }

    /// Like [`iterate`](Self::iterate) with an explicit page size
    pub async fn iterate_with_limit(
        &self,
        project_id: Id,
        filter: &str,
        limit: usize,
    ) -> Result<StoryCursor> {
        let request = Self::list_request(project_id, filter);
        ItemCursor::new(self.transport.clone(), request, limit).await
    }

    /// Create a story. The request must carry a name.
    pub async fn create(&self, project_id: Id, story: &StoryRequest) -> Result<Story> {
        if project_id == 0 {
            return Err(Error::field_not_set("project_id"));
        }
        if story.name.as_deref().map_or(true, str::is_empty) {
            return Err(Error::field_not_set("name"));
        }

        let request = ApiRequest::new(Method::POST, format!("projects/{project_id}/stories"))
            .with_body(story)?;
        execute(self.transport.as_ref(), &request).await
    }

    pub async fn get(&self, project_id: Id, story_id: Id) -> Result<Story> {
        let request = ApiRequest::get(format!("projects/{project_id}/stories/{story_id}"));
        execute(self.transport.as_ref(), &request).await
    }

    /// Several stories by id in one request
    pub async fn get_bulk(&self, project_id: Id, story_ids: &[Id]) -> Result<Vec<Story>> {
        let mut request = ApiRequest::get(format!("projects/{project_id}/stories/bulk"));
        if !story_ids.is_empty() {
            let ids = story_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            request = request.query("ids", ids);
        }
        execute(self.transport.as_ref(), &request).await
    }

    pub async fn update(&self, project_id: Id, story_id: Id, story: &StoryRequest) -> Result<Story> {
        let request = ApiRequest::new(
            Method::PUT,
            format!("projects/{project_id}/stories/{story_id}"),
        )
        .with_body(story)?;
        execute(self.transport.as_ref(), &request).await
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    pub async fn list_tasks(&self, project_id: Id, story_id: Id) -> Result<Vec<Task>> {
        let request = ApiRequest::get(format!("projects/{project_id}/stories/{story_id}/tasks"));
        execute(self.transport.as_ref(), &request).await
    }

    /// Add a task. The description must not be empty.
    pub async fn add_task(&self, project_id: Id, story_id: Id, task: &TaskRequest) -> Result<Task> {
        if task.description.is_empty() {
            return Err(Error::field_not_set("description"));
        }

        let request = ApiRequest::new(
            Method::POST,
            format!("projects/{project_id}/stories/{story_id}/tasks"),
        )
        .with_body(task)?;
        execute(self.transport.as_ref(), &request).await
    }

    // ========================================================================
    // Owners
    // ========================================================================

    pub async fn list_owners(&self, project_id: Id, story_id: Id) -> Result<Vec<Person>> {
        let request = ApiRequest::get(format!("projects/{project_id}/stories/{story_id}/owners"));
        execute(self.transport.as_ref(), &request).await
    }

    // ========================================================================
    // Comments
    // ========================================================================

    pub async fn list_comments(&self, project_id: Id, story_id: Id) -> Result<Vec<Comment>> {
        let request =
            ApiRequest::get(format!("projects/{project_id}/stories/{story_id}/comments"));
        execute(self.transport.as_ref(), &request).await
    }

    pub async fn add_comment(
        &self,
        project_id: Id,
        story_id: Id,
        comment: &CommentRequest,
    ) -> Result<Comment> {
        let request = ApiRequest::new(
            Method::POST,
            format!("projects/{project_id}/stories/{story_id}/comments"),
        )
        .with_body(comment)?;
        execute(self.transport.as_ref(), &request).await
    }

    // ========================================================================
    // Blockers
    // ========================================================================

    pub async fn list_blockers(&self, project_id: Id, story_id: Id) -> Result<Vec<Blocker>> {
        let request =
            ApiRequest::get(format!("projects/{project_id}/stories/{story_id}/blockers"));
        execute(self.transport.as_ref(), &request).await
    }

    pub async fn add_blocker(
        &self,
        project_id: Id,
        story_id: Id,
        description: &str,
    ) -> Result<Blocker> {
        let blocker = BlockerRequest {
            description: Some(description.to_string()),
            resolved: None,
        };
        let request = ApiRequest::new(
            Method::POST,
            format!("projects/{project_id}/stories/{story_id}/blockers"),
        )
        .with_body(&blocker)?;
        execute(self.transport.as_ref(), &request).await
    }

    pub async fn update_blocker(
        &self,
        project_id: Id,
        story_id: Id,
        blocker_id: Id,
        blocker: &BlockerRequest,
    ) -> Result<Blocker> {
        let request = ApiRequest::new(
            Method::PUT,
            format!("projects/{project_id}/stories/{story_id}/blockers/{blocker_id}"),
        )
        .with_body(blocker)?;
        execute(self.transport.as_ref(), &request).await
    }
}

impl std::fmt::Debug for StoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryService")
            .field("page_limit", &self.page_limit)
            .finish_non_exhaustive()
    }
}
