//! Stat line extraction and categorization
//!
//! Item parsers slice the stat-bearing groups out of a tooltip and hand them
//! to the [`StatsExtractor`] for their category. Each line is:
//!
//! 1. stripped of its client marker (`(implicit)`, `(crafted)`, ...), which
//!    becomes the category hint,
//! 2. normalized to a lookup template (`+# to maximum Life`),
//! 3. resolved through the [`StatCatalog`], first under the hinted category,
//!    then under every category.
//!
//! Lines that do not resolve are dropped; they never fail the parse.

mod pseudo;

pub use pseudo::PseudoStatSynthesizer;

use std::sync::Arc;

use crate::catalog::{StatCatalog, StatData};
use crate::item::{ItemCategory, ItemStat, ItemStats, StatCategory};
use crate::text;
use crate::vocabulary::{Keywords, Term};

/// Categories searched once the hinted category has no match
const WIDENED: &[StatCategory] = &[
    StatCategory::Enchant,
    StatCategory::Fractured,
    StatCategory::Implicit,
    StatCategory::Explicit,
    StatCategory::Crafted,
    StatCategory::Monster,
];

const MARKERS: &[(Term, StatCategory)] = &[
    (Term::EnchantMarker, StatCategory::Enchant),
    (Term::ImplicitMarker, StatCategory::Implicit),
    (Term::CraftedMarker, StatCategory::Crafted),
    (Term::FracturedMarker, StatCategory::Fractured),
];

/// Stats extractor for one item category
#[derive(Clone)]
pub struct StatsExtractor {
    category: ItemCategory,
    default_hint: StatCategory,
    markers: Vec<(String, StatCategory)>,
    local_suffix: String,
    catalog: Arc<dyn StatCatalog>,
    synthesizer: PseudoStatSynthesizer,
}

impl StatsExtractor {
    pub fn new(
        category: ItemCategory,
        keywords: &Keywords,
        catalog: Arc<dyn StatCatalog>,
        synthesizer: PseudoStatSynthesizer,
    ) -> Self {
        // Organ lines describe the monster the organ came from
        let default_hint = match category {
            ItemCategory::Organ => StatCategory::Monster,
            _ => StatCategory::Explicit,
        };
        let markers = MARKERS
            .iter()
            .map(|(term, category)| (keywords.get(*term).to_string(), *category))
            .filter(|(marker, _)| !marker.is_empty())
            .collect();

        Self {
            category,
            default_hint,
            markers,
            local_suffix: keywords.get(Term::LocalSuffix).to_string(),
            catalog,
            synthesizer,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Resolve every line of `groups` and add pseudo totals.
    ///
    /// `prefer_local_stats` picks the item-local form of a stat when the
    /// catalog has both a local and a global one for the same text.
    pub fn extract(&self, groups: &[&[&str]], prefer_local_stats: bool) -> ItemStats {
        let mut stats = ItemStats::default();
        for line in groups.iter().flat_map(|group| group.iter()) {
            match self.resolve(line, prefer_local_stats) {
                Some(stat) => stats.push(stat),
                None => tracing::debug!(
                    category = %self.category,
                    line = %line,
                    "dropping unrecognised stat line"
                ),
            }
        }
        stats.pseudo = self.synthesizer.synthesize(&stats);
        stats
    }

    fn resolve(&self, line: &str, prefer_local: bool) -> Option<ItemStat> {
        let (body, hint) = self.split_marker(line);
        let stat_text = text::normalize_stat_line(body)?;
        let data = self
            .lookup(&stat_text.template, &[hint], prefer_local)
            .or_else(|| self.lookup(&stat_text.template, WIDENED, prefer_local))?;

        Some(ItemStat {
            id: data.id,
            text: stat_text.text,
            category: data.category,
            values: stat_text.values,
        })
    }

    /// Strip a trailing client marker, returning the category it names
    fn split_marker<'l>(&self, line: &'l str) -> (&'l str, StatCategory) {
        self.markers
            .iter()
            .find_map(|(marker, category)| {
                line.strip_suffix(marker.as_str())
                    .map(|body| (body.trim_end(), *category))
            })
            .unwrap_or((line, self.default_hint))
    }

    fn lookup(
        &self,
        template: &str,
        categories: &[StatCategory],
        prefer_local: bool,
    ) -> Option<StatData> {
        let local = format!("{} {}", template, self.local_suffix);
        let (first, second) = if prefer_local {
            (local.as_str(), template)
        } else {
            (template, local.as_str())
        };
        self.catalog
            .get_stat_data(first, categories)
            .or_else(|| self.catalog.get_stat_data(second, categories))
    }
}

impl std::fmt::Debug for StatsExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsExtractor")
            .field("category", &self.category)
            .field("default_hint", &self.default_hint)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}
