//! `product` commands.

use clap::Subcommand;

mod create;

#[derive(Debug, Subcommand)]
pub(crate) enum ProductCommand {
    /// Add a product, with optional priced variants, to an event
    Create(create::CreateProductArgs),
}

impl ProductCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self {
            Self::Create(args) => create::run(args).await,
        }
    }
}
