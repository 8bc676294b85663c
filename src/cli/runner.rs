//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, ResourceCommand, StoryArgs};
use crate::client::PivotalClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::ItemCursor;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = PivotalClient::new(&config)?;

        match &self.cli.command {
            Commands::Stories { command } => self.stories(&client, command).await,
            Commands::Epics { command } => self.epics(&client, command).await,
            Commands::Tasks(StoryArgs { project, story }) => {
                let tasks = client.stories().list_tasks(*project, *story).await?;
                self.print_all(&tasks)
            }
            Commands::Comments(StoryArgs { project, story }) => {
                let comments = client.stories().list_comments(*project, *story).await?;
                self.print_all(&comments)
            }
            Commands::Blockers(StoryArgs { project, story }) => {
                let blockers = client.stories().list_blockers(*project, *story).await?;
                self.print_all(&blockers)
            }
            Commands::Owners(StoryArgs { project, story }) => {
                let owners = client.stories().list_owners(*project, *story).await?;
                self.print_all(&owners)
            }
        }
    }

    /// Build the client config: file first, then environment and flags
    /// (clap already folds the `PIVOTAL_*` variables into the flags).
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(token) = &self.cli.token {
            config.api_token = Some(token.clone());
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        config.validate()?;

        if config.api_token.is_none() {
            warn!("No API token configured, requests will be sent unauthenticated");
        }
        debug!("Using config: {config:?}");
        Ok(config)
    }

    async fn stories(&self, client: &PivotalClient, command: &ResourceCommand) -> Result<()> {
        let service = client.stories();
        match command {
            ResourceCommand::List { project, filter } => {
                let stories = service.list(*project, filter).await?;
                self.print_all(&stories)
            }
            ResourceCommand::Iterate {
                project,
                filter,
                limit,
            } => {
                let cursor = match limit {
                    Some(limit) => service.iterate_with_limit(*project, filter, *limit).await?,
                    None => service.iterate(*project, filter).await?,
                };
                self.print_cursor(cursor).await
            }
            ResourceCommand::Get { project, id } => {
                let story = service.get(*project, *id).await?;
                self.print(&story)
            }
        }
    }

    async fn epics(&self, client: &PivotalClient, command: &ResourceCommand) -> Result<()> {
        let service = client.epics();
        match command {
            ResourceCommand::List { project, filter } => {
                let epics = service.list(*project, filter).await?;
                self.print_all(&epics)
            }
            ResourceCommand::Iterate {
                project,
                filter,
                limit,
            } => {
                let cursor = match limit {
                    Some(limit) => service.iterate_with_limit(*project, filter, *limit).await?,
                    None => service.iterate(*project, filter).await?,
                };
                self.print_cursor(cursor).await
            }
            ResourceCommand::Get { project, id } => {
                let epic = service.get(*project, *id).await?;
                self.print(&epic)
            }
        }
    }

    // ========================================================================
    // Output
    // ========================================================================

    async fn print_cursor<T: Serialize + DeserializeOwned>(
        &self,
        mut cursor: ItemCursor<T>,
    ) -> Result<()> {
        let mut count = 0usize;
        while let Some(item) = cursor.next().await? {
            self.print(&item)?;
            count += 1;
        }
        debug!("Printed {count} items");
        Ok(())
    }

    fn print_all<T: Serialize>(&self, items: &[T]) -> Result<()> {
        for item in items {
            self.print(item)?;
        }
        debug!("Printed {} items", items.len());
        Ok(())
    }

    fn print<T: Serialize>(&self, item: &T) -> Result<()> {
        println!("{}", render(self.cli.format, item)?);
        Ok(())
    }
}

/// Render one item in the requested format
pub fn render<T: Serialize + ?Sized>(format: OutputFormat, item: &T) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(item)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(item)?,
    };
    Ok(rendered)
}
