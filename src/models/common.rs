//! Records attached to stories and epics: labels, tasks, people, comments
//! and blockers

use super::is_zero;
use crate::types::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Label
// ============================================================================

/// A project label. A label with only a name creates it on first use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: Id,
    #[serde(skip_serializing_if = "is_zero")]
    pub project_id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Label {
    /// Label referenced by name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Task
// ============================================================================

/// A checklist item on a story
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: Id,
    pub story_id: Id,
    pub description: String,
    pub position: u32,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when adding a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskRequest {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

impl TaskRequest {
    /// Task with a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Person
// ============================================================================

/// A project member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

// ============================================================================
// Comment
// ============================================================================

/// A comment on a story or epic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_attachment_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub google_attachment_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when adding a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_identifier: Option<String>,
}

impl CommentRequest {
    /// Plain text comment
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Blocker
// ============================================================================

/// Something preventing a story from progressing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blocker {
    pub id: Id,
    pub story_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<Id>,
    pub description: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when adding or updating a blocker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

impl BlockerRequest {
    /// Mark a blocker resolved
    pub fn resolve() -> Self {
        Self {
            description: None,
            resolved: Some(true),
        }
    }
}
