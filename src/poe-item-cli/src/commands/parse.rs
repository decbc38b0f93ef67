//! Parse and check command handlers

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use poe_item::{Item, ItemParser, ItemStats, PseudoIndex, StatIndex, Vocabulary};

use crate::cli::SourceArgs;
use crate::config::Config;

/// Handle the parse command
pub fn parse(source: &SourceArgs, json: bool) -> Result<()> {
    let parser = build_parser(source, &Config::load()?)?;
    let text = read_input(source.input.as_deref())?;

    let item = parser.parse(&text).context("Failed to parse item text")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("{}", summary(&item));
    }

    Ok(())
}

/// Handle the check command
pub fn check(source: &SourceArgs) -> Result<()> {
    let parser = build_parser(source, &Config::load()?)?;
    let text = read_input(source.input.as_deref())?;

    if parser.is_parseable(&text) {
        println!("Parseable");
    } else if let Err(e) = parser.parse(&text) {
        println!("Not parseable: {}", e);
    }

    Ok(())
}

/// Flag paths win over configured ones
fn resolve(flag: &Option<PathBuf>, configured: &Option<PathBuf>) -> Option<PathBuf> {
    flag.clone().or_else(|| configured.clone())
}

fn build_parser(source: &SourceArgs, config: &Config) -> Result<ItemParser> {
    let catalog = match resolve(&source.catalog, &config.catalog) {
        Some(path) => StatIndex::load(&path)
            .with_context(|| format!("Failed to load stat catalog {}", path.display()))?,
        None => {
            tracing::warn!("no stat catalog configured, stat lines will not be resolved");
            StatIndex::default()
        }
    };

    let definitions = match resolve(&source.pseudo, &config.pseudo) {
        Some(path) => PseudoIndex::load_definitions(&path)
            .with_context(|| format!("Failed to load pseudo definitions {}", path.display()))?,
        None => PseudoIndex::english_definitions(),
    };
    let pseudo =
        PseudoIndex::build(&catalog, &definitions).context("Failed to build pseudo stats")?;

    let vocabulary = match resolve(&source.vocabulary, &config.vocabulary) {
        Some(path) => Vocabulary::load(&path)
            .with_context(|| format!("Failed to load vocabulary {}", path.display()))?,
        None => Vocabulary::english(),
    };

    tracing::debug!(stats = catalog.len(), pseudo = pseudo.len(), "catalogs loaded");
    Ok(ItemParser::new(&vocabulary, Arc::new(catalog), Arc::new(pseudo)))
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read item text from stdin")?;
            Ok(text)
        }
    }
}

/// Human readable item description
fn summary(item: &Item) -> String {
    let mut lines = vec![
        item.display_name(),
        format!("Rarity: {} ({})", item.rarity(), item.category()),
    ];

    match item {
        Item::Equippable(gear) => {
            lines.push(format!("Category: {}", gear.category));
            lines.push(format!("Item Level: {}", gear.item_level));
            if gear.quality > 0 {
                lines.push(format!("Quality: +{}%", gear.quality));
            }
            if !gear.sockets.is_empty() {
                lines.push(format!(
                    "Sockets: {} ({} links)",
                    gear.sockets,
                    gear.sockets.max_links()
                ));
            }
            if let Some(dps) = gear.weapon.as_ref().and_then(|w| w.physical_dps()) {
                lines.push(format!("Physical DPS: {:.1}", dps));
            }
            if !gear.influences.is_empty() {
                let names: Vec<&str> = gear.influences.iter().map(|i| i.name()).collect();
                lines.push(format!("Influences: {}", names.join(", ")));
            }
            flags(&mut lines, gear.is_identified, gear.is_corrupted);
            if gear.is_synthesised {
                lines.push("Synthesised".to_string());
            }
        }
        Item::Flask(flask) => {
            lines.push(format!("Quality: +{}%", flask.quality));
            flags(&mut lines, flask.is_identified, false);
        }
        Item::Gem(gem) => {
            lines.push(format!("Level: {}", gem.level));
            lines.push(format!("Quality: +{}%", gem.quality));
            lines.push(format!("Experience: {:.1}%", gem.experience_percent));
            if gem.is_vaal_version {
                lines.push("Vaal".to_string());
            }
            flags(&mut lines, true, gem.is_corrupted);
        }
        Item::Map(map) => {
            lines.push(format!("Tier: {}", map.tier));
            lines.push(format!(
                "Quantity: {}%, Rarity: {}%, Pack Size: {}%",
                map.item_quantity, map.item_rarity, map.monster_pack_size
            ));
            if map.is_blighted {
                lines.push("Blighted".to_string());
            }
            flags(&mut lines, map.is_identified, map.is_corrupted);
        }
        Item::Jewel(jewel) => flags(&mut lines, jewel.is_identified, jewel.is_corrupted),
        Item::Currency(currency) => {
            if let Some(stack) = currency.stack_size {
                lines.push(format!("Stack: {}/{}", stack.current, stack.max));
            }
        }
        Item::DivinationCard(card) => {
            if let Some(stack) = card.stack_size {
                lines.push(format!("Stack: {}/{}", stack.current, stack.max));
            }
        }
        Item::Organ(_) | Item::Fragment(_) => {}
    }

    if let Some(stats) = item.stats() {
        stat_lines(&mut lines, stats);
    }

    lines.join("\n")
}

fn flags(lines: &mut Vec<String>, is_identified: bool, is_corrupted: bool) {
    if !is_identified {
        lines.push("Unidentified".to_string());
    }
    if is_corrupted {
        lines.push("Corrupted".to_string());
    }
}

fn stat_lines(lines: &mut Vec<String>, stats: &ItemStats) {
    if stats.is_empty() {
        return;
    }
    lines.push("Stats:".to_string());
    for stat in stats.iter() {
        lines.push(format!("  [{}] {}", stat.category, stat.text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{"result": [
        {"label": "Explicit", "entries": [
            {"id": "explicit.stat_3299347043", "text": "+# to maximum Life", "type": "explicit"}
        ]}
    ]}"#;

    const HELMET: &str = "Rarity: Rare\nDoom Mark\nHubris Circlet\n--------\n\
                          Energy Shield: 150\n--------\nSockets: B-B G\n--------\n\
                          Item Level: 84\n--------\n+78 to maximum Life\n--------\nCorrupted";

    fn source_in(dir: &Path) -> SourceArgs {
        let catalog = dir.join("stats.json");
        std::fs::write(&catalog, CATALOG).unwrap();
        let input = dir.join("item.txt");
        std::fs::write(&input, HELMET).unwrap();
        SourceArgs {
            input: Some(input),
            catalog: Some(catalog),
            pseudo: None,
            vocabulary: None,
        }
    }

    #[test]
    fn test_resolve_prefers_flag() {
        let flag = Some(PathBuf::from("flag.json"));
        let configured = Some(PathBuf::from("config.json"));
        assert_eq!(resolve(&flag, &configured), flag);
        assert_eq!(resolve(&None, &configured), configured);
        assert_eq!(resolve(&None, &None), None);
    }

    #[test]
    fn test_parse_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = source_in(dir.path());
        let parser = build_parser(&source, &Config::default()).unwrap();
        let text = read_input(source.input.as_deref()).unwrap();

        let item = parser.parse(&text).unwrap();
        let stats = item.stats().unwrap();
        assert_eq!(stats.explicit[0].id, "explicit.stat_3299347043");
        assert_eq!(stats.pseudo[0].id, "pseudo.pseudo_total_life");

        let summary = summary(&item);
        assert!(summary.starts_with("Doom Mark Hubris Circlet\nRarity: Rare (equippable)"));
        assert!(summary.contains("Sockets: B-B G (2 links)"));
        assert!(summary.contains("Corrupted"));
        assert!(summary.contains("  [explicit] +78 to maximum Life"));
        assert!(summary.contains("  [pseudo] +78 total maximum Life"));
    }

    #[test]
    fn test_missing_catalog_file() {
        let source = SourceArgs {
            catalog: Some(PathBuf::from("/nonexistent/stats.json")),
            ..Default::default()
        };
        let err = build_parser(&source, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to load stat catalog"));
    }

    #[test]
    fn test_without_catalog_stats_are_dropped() {
        let parser = build_parser(&SourceArgs::default(), &Config::default()).unwrap();
        let item = parser.parse(HELMET).unwrap();
        assert!(item.stats().unwrap().is_empty());
    }

    #[test]
    fn test_summary_currency() {
        let parser = build_parser(&SourceArgs::default(), &Config::default()).unwrap();
        let item = parser
            .parse("Rarity: Currency\nChaos Orb\n--------\nStack Size: 7/10")
            .unwrap();
        assert_eq!(summary(&item), "Chaos Orb\nRarity: Currency (currency)\nStack: 7/10");
    }
}
