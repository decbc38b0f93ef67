mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { source, json } => commands::parse::parse(&source, json),

        Commands::Check { source } => commands::parse::check(&source),

        Commands::Configure {
            catalog,
            pseudo,
            vocabulary,
            show,
        } => commands::configure::handle(catalog, pseudo, vocabulary, show),
    }
}
