//! Story records

use super::Label;
use crate::types::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a story represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
    Release,
    #[serde(other)]
    Unknown,
}

/// Workflow state of a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryState {
    Unscheduled,
    Planned,
    Unstarted,
    Started,
    Finished,
    Delivered,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl StoryState {
    /// Wire name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryState::Unscheduled => "unscheduled",
            StoryState::Planned => "planned",
            StoryState::Unstarted => "unstarted",
            StoryState::Started => "started",
            StoryState::Finished => "finished",
            StoryState::Delivered => "delivered",
            StoryState::Accepted => "accepted",
            StoryState::Rejected => "rejected",
            StoryState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A story as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub id: Id,
    pub project_id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<StoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<StoryState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub task_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follower_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comment_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Fields accepted when creating or updating a story.
///
/// Unset fields are left out of the request and keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<StoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<StoryState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_ids: Option<Vec<Id>>,
}

impl StoryRequest {
    /// Request creating a story with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the story type
    #[must_use]
    pub fn story_type(mut self, story_type: StoryType) -> Self {
        self.story_type = Some(story_type);
        self
    }

    /// Set the workflow state
    #[must_use]
    pub fn state(mut self, state: StoryState) -> Self {
        self.current_state = Some(state);
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
