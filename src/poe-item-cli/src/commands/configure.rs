//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting default lookup files.

use std::path::PathBuf;

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
pub fn handle(
    catalog: Option<PathBuf>,
    pseudo: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if !apply(&mut config, catalog, pseudo, vocabulary) {
        show_usage();
        return Ok(());
    }

    config.save()?;
    show_config(&config);
    Ok(())
}

/// Copy the given paths into `config`; false if there was nothing to set
fn apply(
    config: &mut Config,
    catalog: Option<PathBuf>,
    pseudo: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
) -> bool {
    let changed = catalog.is_some() || pseudo.is_some() || vocabulary.is_some();
    if catalog.is_some() {
        config.catalog = catalog;
    }
    if pseudo.is_some() {
        config.pseudo = pseudo;
    }
    if vocabulary.is_some() {
        config.vocabulary = vocabulary;
    }
    changed
}

fn show_config(config: &Config) {
    let show = |label: &str, path: &Option<PathBuf>| match path {
        Some(path) => println!("{}: {}", label, path.display()),
        None => println!("{}: (not set)", label),
    };
    show("Stat catalog", &config.catalog);
    show("Pseudo definitions", &config.pseudo);
    show("Vocabulary", &config.vocabulary);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!(
        "Usage: poe-item configure --catalog stats.json [--pseudo pseudo.json] \
         [--vocabulary de.toml]"
    );
    println!("   or: poe-item configure --show");
    println!();
    println!("The stat catalog is the trade API stats document (api/trade/data/stats).");
}
