//! In-memory stat catalog
//!
//! Loads the trade API stats document:
//!
//! ```json
//! {"result": [{"label": "Explicit", "entries": [
//!     {"id": "explicit.stat_3299347043", "text": "+# to maximum Life", "type": "explicit"}
//! ]}]}
//! ```
//!
//! Entries are indexed by category and normalized template. The sign in
//! front of a `#` is ignored, so `-9% to Cold Resistance` still finds
//! `+#% to Cold Resistance`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{CatalogError, StatCatalog, StatData};
use crate::item::StatCategory;
use crate::text;

#[derive(Debug, Deserialize)]
struct StatsDocument {
    result: Vec<StatGroup>,
}

#[derive(Debug, Deserialize)]
struct StatGroup {
    entries: Vec<StatEntry>,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    id: String,
    text: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Clone, Default)]
pub struct StatIndex {
    stats: Vec<StatData>,
    by_id: HashMap<String, usize>,
    by_template: HashMap<(StatCategory, String), usize>,
}

impl StatIndex {
    /// Build an index; the first entry wins on duplicate ids or templates
    pub fn new(stats: impl IntoIterator<Item = StatData>) -> Self {
        let mut index = Self::default();
        for stat in stats {
            if index.by_id.contains_key(&stat.id) {
                continue;
            }
            let position = index.stats.len();
            index.by_id.insert(stat.id.clone(), position);
            index
                .by_template
                .entry((stat.category, template_key(&stat.text)))
                .or_insert(position);
            index.stats.push(stat);
        }
        index
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: StatsDocument = serde_json::from_str(json)?;
        let stats = document
            .result
            .into_iter()
            .flat_map(|group| group.entries)
            .filter_map(|entry| match StatCategory::from_trade_type(&entry.kind) {
                Some(category) => Some(StatData::new(entry.id, entry.text, category)),
                None => {
                    tracing::debug!(
                        id = %entry.id,
                        kind = %entry.kind,
                        "skipping stat of unsupported type"
                    );
                    None
                }
            });
        Ok(Self::new(stats))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// All stats in load order
    pub fn stats(&self) -> &[StatData] {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl StatCatalog for StatIndex {
    fn get_stat_data(&self, text: &str, categories: &[StatCategory]) -> Option<StatData> {
        let key = template_key(text);
        let categories = if categories.is_empty() {
            StatCategory::ALL
        } else {
            categories
        };
        categories
            .iter()
            .find_map(|category| self.by_template.get(&(*category, key.clone())))
            .map(|&position| self.stats[position].clone())
    }

    fn get_stat_data_by_id(&self, id: &str) -> Option<StatData> {
        self.by_id.get(id).map(|&position| self.stats[position].clone())
    }
}

/// Normalize a template for lookup.
///
/// Literal numbers in catalog text become `#` like the numbers of an item
/// line do, signs before `#` are dropped and spaces collapsed.
fn template_key(text: &str) -> String {
    let text = text::number_placeholders(text);
    let mut key = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if (c == '+' || c == '-') && chars.peek() == Some(&'#') {
            continue;
        }
        key.push(c);
    }
    key.split_whitespace().collect::<Vec<_>>().join(" ")
}
