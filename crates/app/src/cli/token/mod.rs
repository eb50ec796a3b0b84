//! `token` commands: bearer tokens for storefront accounts.

use clap::Subcommand;

mod create;
mod revoke;

#[derive(Debug, Subcommand)]
pub(crate) enum TokenCommand {
    /// Issue a bearer token for a user and print it once
    Create(create::CreateTokenArgs),

    /// Revoke a token so it no longer authenticates
    Revoke(revoke::RevokeTokenArgs),
}

impl TokenCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self {
            Self::Create(args) => create::run(args).await,
            Self::Revoke(args) => revoke::run(args).await,
        }
    }
}
