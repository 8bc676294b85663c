//! CLI commands and argument parsing

use crate::config::{BASE_URL_ENV, TOKEN_ENV};
use crate::types::Id;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for Pivotal Tracker
#[derive(Parser, Debug)]
#[command(name = "pivotal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API token
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stories of a project
    Stories {
        #[command(subcommand)]
        command: ResourceCommand,
    },

    /// Epics of a project
    Epics {
        #[command(subcommand)]
        command: ResourceCommand,
    },

    /// Tasks of a story
    Tasks(StoryArgs),

    /// Comments on a story
    Comments(StoryArgs),

    /// Blockers of a story
    Blockers(StoryArgs),

    /// Owners of a story
    Owners(StoryArgs),
}

/// Operations shared by stories and epics
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ResourceCommand {
    /// Fetch every matching item at once
    List {
        /// Project id
        #[arg(short, long)]
        project: Id,

        /// Tracker search filter, e.g. "label:bug state:started"
        #[arg(long, default_value = "")]
        filter: String,
    },

    /// Print items as pages arrive
    Iterate {
        /// Project id
        #[arg(short, long)]
        project: Id,

        /// Tracker search filter
        #[arg(long, default_value = "")]
        filter: String,

        /// Page size (0 = size the collection and fetch it in one page)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Fetch a single item
    Get {
        /// Project id
        #[arg(short, long)]
        project: Id,

        /// Item id
        id: Id,
    },
}

/// Identifies one story
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryArgs {
    /// Project id
    #[arg(short, long)]
    pub project: Id,

    /// Story id
    #[arg(short, long)]
    pub story: Id,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stories_list() {
        let cli = Cli::try_parse_from([
            "pivotal", "stories", "list", "--project", "99", "--filter", "label:bug",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Stories { command } => assert_eq!(
                command,
                ResourceCommand::List {
                    project: 99,
                    filter: "label:bug".to_string(),
                }
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_iterate_with_limit_and_global_flags() {
        let cli = Cli::try_parse_from([
            "pivotal",
            "epics",
            "iterate",
            "-p",
            "7",
            "--limit",
            "0",
            "--format",
            "pretty",
            "--token",
            "abc",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.token.as_deref(), Some("abc"));
        match cli.command {
            Commands::Epics {
                command: ResourceCommand::Iterate { project, limit, .. },
            } => {
                assert_eq!(project, 7);
                assert_eq!(limit, Some(0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_story_sub_resource() {
        let cli = Cli::try_parse_from(["pivotal", "blockers", "-p", "1", "-s", "2"]).unwrap();
        match cli.command {
            Commands::Blockers(args) => {
                assert_eq!(args, StoryArgs { project: 1, story: 2 });
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_story_sub_resource_requires_story() {
        assert!(Cli::try_parse_from(["pivotal", "tasks", "--project", "1"]).is_err());
    }

    #[test]
    fn test_get_requires_id() {
        assert!(Cli::try_parse_from(["pivotal", "stories", "get", "-p", "1"]).is_err());
    }
}
