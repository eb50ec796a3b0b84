//! `user` commands.

use clap::Subcommand;

mod create;

#[derive(Debug, Subcommand)]
pub(crate) enum UserCommand {
    /// Register a storefront account
    Create(create::CreateUserArgs),
}

impl UserCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self {
            Self::Create(args) => create::run(args).await,
        }
    }
}
