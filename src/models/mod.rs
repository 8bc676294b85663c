//! Resource records
//!
//! Plain serde types mirroring the JSON documents of the Tracker API.
//! Records (`Story`, `Epic`, ...) tolerate missing fields; request types
//! (`StoryRequest`, ...) serialize only the fields that are set.

mod common;
mod epic;
mod story;

pub use common::{
    Blocker, BlockerRequest, Comment, CommentRequest, Label, Person, Task, TaskRequest,
};
pub use epic::{Epic, EpicRequest};
pub use story::{Story, StoryRequest, StoryState, StoryType};

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(id: &crate::types::Id) -> bool {
    *id == 0
}

#[cfg(test)]
mod tests;
