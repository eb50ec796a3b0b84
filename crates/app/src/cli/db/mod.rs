//! `db` commands.

use clap::Subcommand;

mod migrate;

#[derive(Debug, Subcommand)]
pub(crate) enum DbCommand {
    /// Apply pending schema migrations
    Migrate(migrate::MigrateArgs),
}

impl DbCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self {
            Self::Migrate(args) => migrate::run(args).await,
        }
    }
}
