//! `event` commands.

use clap::Subcommand;

mod create;

#[derive(Debug, Subcommand)]
pub(crate) enum EventCommand {
    /// Create an event the storefront can route to by slug
    Create(create::CreateEventArgs),
}

impl EventCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self {
            Self::Create(args) => create::run(args).await,
        }
    }
}
