//! Tests for resource records

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_story_deserialize_full() {
    let story: Story = serde_json::from_value(json!({
        "kind": "story",
        "id": 561,
        "project_id": 99,
        "name": "Bring me the passengers",
        "description": "ignore the droids",
        "story_type": "feature",
        "current_state": "started",
        "estimate": 2,
        "requested_by_id": 101,
        "owner_ids": [101, 102],
        "labels": [{"id": 2008, "project_id": 99, "kind": "label", "name": "plans"}],
        "created_at": "2024-03-05T12:00:00Z",
        "updated_at": "2024-03-05T12:00:00Z",
        "url": "http://localhost/story/show/561"
    }))
    .unwrap();

    assert_eq!(story.id, 561);
    assert_eq!(story.story_type, Some(StoryType::Feature));
    assert_eq!(story.current_state, Some(StoryState::Started));
    assert_eq!(story.estimate, Some(2.0));
    assert_eq!(story.owner_ids, vec![101, 102]);
    assert_eq!(story.labels[0].name, "plans");
    assert!(story.created_at.is_some());
    assert!(story.accepted_at.is_none());
}

#[test]
fn test_story_deserialize_minimal_and_unknown_state() {
    let story: Story = serde_json::from_value(json!({
        "id": 1,
        "current_state": "archived",
        "story_type": "epic-thing"
    }))
    .unwrap();

    assert_eq!(story.current_state, Some(StoryState::Unknown));
    assert_eq!(story.story_type, Some(StoryType::Unknown));
    assert!(story.name.is_empty());
    assert!(story.owner_ids.is_empty());
}

#[test]
fn test_story_request_serializes_only_set_fields() {
    let request = StoryRequest::named("Exhaust ports")
        .story_type(StoryType::Bug)
        .state(StoryState::Unstarted);

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "Exhaust ports",
            "story_type": "bug",
            "current_state": "unstarted"
        })
    );

    let clear_owners = StoryRequest {
        owner_ids: Some(Vec::new()),
        ..StoryRequest::default()
    };
    assert_eq!(
        serde_json::to_value(&clear_owners).unwrap(),
        json!({"owner_ids": []})
    );
}

#[test]
fn test_epic_request_with_new_label() {
    let request = EpicRequest {
        label: Some(Label::named("death star")),
        ..EpicRequest::named("Destroy the Death Star")
    };

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "Destroy the Death Star",
            "label": {"name": "death star"}
        })
    );
}

#[test]
fn test_epic_deserialize() {
    let epic: Epic = serde_json::from_value(json!({
        "id": 5,
        "project_id": 99,
        "name": "Rebel base",
        "label": {"id": 3, "name": "rebels"},
        "completed_at": null
    }))
    .unwrap();

    assert_eq!(epic.id, 5);
    assert_eq!(epic.label.unwrap().id, 3);
    assert!(epic.completed_at.is_none());
}

#[test]
fn test_task_and_blocker_requests() {
    assert_eq!(
        serde_json::to_value(TaskRequest::new("Check the hyperdrive")).unwrap(),
        json!({"description": "Check the hyperdrive"})
    );
    assert_eq!(
        serde_json::to_value(BlockerRequest::resolve()).unwrap(),
        json!({"resolved": true})
    );
    assert_eq!(
        serde_json::to_value(CommentRequest::text("On it")).unwrap(),
        json!({"text": "On it"})
    );
}

#[test]
fn test_comment_and_person_deserialize() {
    let comment: Comment = serde_json::from_value(json!({
        "id": 300,
        "story_id": 561,
        "text": "I have a bad feeling about this",
        "person_id": 101
    }))
    .unwrap();
    assert_eq!(comment.story_id, Some(561));
    assert!(comment.epic_id.is_none());

    let person: Person = serde_json::from_value(json!({
        "id": 101,
        "name": "Han Solo",
        "initials": "HS",
        "username": "han"
    }))
    .unwrap();
    assert_eq!(person.username, "han");
    assert!(person.email.is_empty());
}
