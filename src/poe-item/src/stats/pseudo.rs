//! Pseudo stat synthesis

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{PseudoStatCatalog, StatData};
use crate::item::{ItemStat, ItemStats, StatCategory};
use crate::text;

/// Categories whose stats feed pseudo totals
const CONTRIBUTING: &[StatCategory] = &[
    StatCategory::Enchant,
    StatCategory::Fractured,
    StatCategory::Implicit,
    StatCategory::Explicit,
    StatCategory::Crafted,
];

/// Derives pseudo stats (total resistances, total life, ...) from resolved
/// item stats.
///
/// Pseudo stats already present in the input are ignored, so synthesizing
/// twice gives the same result as synthesizing once.
#[derive(Clone)]
pub struct PseudoStatSynthesizer {
    catalog: Arc<dyn PseudoStatCatalog>,
}

impl PseudoStatSynthesizer {
    pub fn new(catalog: Arc<dyn PseudoStatCatalog>) -> Self {
        Self { catalog }
    }

    pub fn synthesize(&self, stats: &ItemStats) -> Vec<ItemStat> {
        let mut totals: Vec<(StatData, Vec<f64>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        let contributors = CONTRIBUTING
            .iter()
            .flat_map(|category| stats.get(*category).iter());

        for stat in contributors {
            for (pseudo, weight) in self.catalog.get_pseudo_stat_contributions(&stat.id) {
                let position = *positions.entry(pseudo.id.clone()).or_insert_with(|| {
                    totals.push((pseudo, Vec::new()));
                    totals.len() - 1
                });
                add_values(&mut totals[position].1, &stat.values, weight);
            }
        }

        totals
            .into_iter()
            .map(|(pseudo, values)| ItemStat {
                text: fill_template(&pseudo.text, &values),
                id: pseudo.id,
                category: StatCategory::Pseudo,
                values,
            })
            .collect()
    }
}

impl std::fmt::Debug for PseudoStatSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PseudoStatSynthesizer").finish_non_exhaustive()
    }
}

/// Element-wise weighted sum, growing `total` as needed
fn add_values(total: &mut Vec<f64>, values: &[f64], weight: f64) {
    if total.len() < values.len() {
        total.resize(values.len(), 0.0);
    }
    for (sum, value) in total.iter_mut().zip(values) {
        *sum += value * weight;
    }
}

/// Replace each `#` with the next value; extra placeholders stay as `#`
fn fill_template(template: &str, values: &[f64]) -> String {
    let mut values = values.iter();
    let mut filled = String::with_capacity(template.len());
    for c in template.chars() {
        if c != '#' {
            filled.push(c);
            continue;
        }
        match values.next() {
            Some(value) => filled.push_str(&text::format_value(*value)),
            None => filled.push('#'),
        }
    }
    // "+#" with a negative total would read "+-5"
    filled.replace("+-", "-")
}
