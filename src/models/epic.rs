//! Epic records

use super::Label;
use crate::types::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An epic as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Epic {
    pub id: Id,
    pub project_id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comment_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follower_ids: Vec<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Fields accepted when creating or updating an epic
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EpicRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<Id>,
}

impl EpicRequest {
    /// Request creating an epic with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
