//! CLI module
//!
//! Command-line front end over [`PivotalClient`](crate::PivotalClient).
//!
//! # Commands
//!
//! - `stories list|iterate|get` - Stories of a project
//! - `epics list|iterate|get` - Epics of a project
//! - `tasks`, `comments`, `blockers`, `owners` - Records attached to one story

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, ResourceCommand, StoryArgs};
pub use runner::{render, Runner};
