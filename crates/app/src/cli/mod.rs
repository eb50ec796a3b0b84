//! Operator CLI.

use boxoffice_app::database;
use clap::{Parser, Subcommand};
use sqlx::PgPool;

mod db;
mod event;
mod product;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "boxoffice-app", about = "Box Office CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage storefront accounts
    #[command(subcommand)]
    User(user::UserCommand),

    /// Manage bearer tokens
    #[command(subcommand)]
    Token(token::TokenCommand),

    /// Manage events
    #[command(subcommand)]
    Event(event::EventCommand),

    /// Manage an event's catalogue
    #[command(subcommand)]
    Product(product::ProductCommand),

    /// Database maintenance
    #[command(subcommand)]
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => command.run().await,
            Commands::Token(command) => command.run().await,
            Commands::Event(command) => command.run().await,
            Commands::Product(command) => command.run().await,
            Commands::Db(command) => command.run().await,
        }
    }
}

async fn connect(database_url: &str) -> Result<PgPool, String> {
    database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
