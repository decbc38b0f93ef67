//! Stat identity lookups
//!
//! The parsers never know stat ids themselves. They hand a stat template
//! (`+# to maximum Life`) and a category hint to a [`StatCatalog`], and ask a
//! [`PseudoStatCatalog`] which pseudo stats a resolved stat feeds.
//!
//! [`StatIndex`] and [`PseudoIndex`] are in-memory implementations built
//! from the trade API stats document.

mod index;
mod pseudo;

pub use index::StatIndex;
pub use pseudo::{PseudoDefinition, PseudoIndex, PseudoPattern};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::StatCategory;

/// Canonical stat record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatData {
    /// e.g. `explicit.stat_3299347043`
    pub id: String,
    /// Template text with `#` placeholders, e.g. `+# to maximum Life`
    pub text: String,
    pub category: StatCategory,
}

impl StatData {
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: StatCategory) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
        }
    }
}

/// Resolves stat text to a canonical stat
pub trait StatCatalog: Send + Sync {
    /// Find the stat whose template matches `text`, searching `categories`
    /// in order. An empty slice searches every category.
    fn get_stat_data(&self, text: &str, categories: &[StatCategory]) -> Option<StatData>;

    fn get_stat_data_by_id(&self, id: &str) -> Option<StatData>;
}

/// Maps a stat id to the pseudo stats it contributes to
pub trait PseudoStatCatalog: Send + Sync {
    fn get_pseudo_stat_data(&self, stat_id: &str) -> Vec<StatData>;

    /// Pseudo stats fed by `stat_id`, each with the factor the stat's values
    /// are multiplied by before summing. `+#% to Fire and Cold Resistances`
    /// counts twice towards total elemental resistance.
    fn get_pseudo_stat_contributions(&self, stat_id: &str) -> Vec<(StatData, f64)> {
        self.get_pseudo_stat_data(stat_id)
            .into_iter()
            .map(|pseudo| (pseudo, 1.0))
            .collect()
    }
}

/// Errors that can occur while loading catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern in pseudo stat {id}: {source}")]
    Pattern {
        id: String,
        #[source]
        source: regex::Error,
    },
}
