//! CLI argument definitions for poe-item

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poe-item")]
#[command(about = "Parse Path of Exile item text copied from the game", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse item text and print the item
    #[command(visible_alias = "p")]
    Parse {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the item as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report whether item text is recognised
    #[command(visible_alias = "k")]
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Configure default catalog and vocabulary paths
    #[command(visible_alias = "c")]
    Configure {
        /// Set default trade API stats document
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Set default pseudo stat definitions
        #[arg(long)]
        pseudo: Option<PathBuf>,

        /// Set default vocabulary file (JSON or TOML)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Where item text and lookup data come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// File holding copied item text (reads stdin if omitted)
    pub input: Option<PathBuf>,

    /// Trade API stats document (uses configured default if not provided)
    #[arg(long, env = "POE_ITEM_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Pseudo stat definitions (built-in English set if not provided)
    #[arg(long)]
    pub pseudo: Option<PathBuf>,

    /// Vocabulary file for non-English clients
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,
}
