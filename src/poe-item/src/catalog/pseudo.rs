//! Pseudo stat mapping
//!
//! A pseudo stat ("+#% total to Fire Resistance") is fed by every catalog
//! stat whose template matches one of its patterns ("+#% to Fire
//! Resistance", "+#% to Fire and Cold Resistances", ...). The index is
//! resolved once against a [`StatIndex`] so lookups by stat id are a single
//! hash lookup.
//!
//! Each pattern carries a weight: a stat naming two elements feeds total
//! elemental resistance with twice its value.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use super::{CatalogError, PseudoStatCatalog, StatCatalog, StatData, StatIndex};
use crate::item::StatCategory;

/// A pseudo stat and the stat templates that feed it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PseudoDefinition {
    pub id: String,
    /// Template used when the catalog has no entry for `id`
    pub text: String,
    pub patterns: Vec<PseudoPattern>,
}

impl PseudoDefinition {
    fn english(id: &str, text: &str, patterns: &[(&str, f64)]) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            patterns: patterns
                .iter()
                .map(|&(pattern, weight)| PseudoPattern::new(pattern, weight))
                .collect(),
        }
    }
}

/// Regex matched against catalog stat templates, with the factor a matching
/// stat's values are multiplied by.
///
/// Deserializes from a bare string (weight 1) or from
/// `{"pattern": "...", "weight": 2}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PatternEntry")]
pub struct PseudoPattern {
    pub pattern: String,
    pub weight: f64,
}

impl PseudoPattern {
    pub fn new(pattern: impl Into<String>, weight: f64) -> Self {
        Self {
            pattern: pattern.into(),
            weight,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternEntry {
    Plain(String),
    Weighted {
        pattern: String,
        #[serde(default = "unit_weight")]
        weight: f64,
    },
}

fn unit_weight() -> f64 {
    1.0
}

impl From<PatternEntry> for PseudoPattern {
    fn from(entry: PatternEntry) -> Self {
        match entry {
            PatternEntry::Plain(pattern) => Self::new(pattern, unit_weight()),
            PatternEntry::Weighted { pattern, weight } => Self::new(pattern, weight),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PseudoIndex {
    pseudo: Vec<StatData>,
    /// Stat id to (pseudo position, weight)
    feeds: HashMap<String, Vec<(usize, f64)>>,
}

impl PseudoIndex {
    /// Resolve definitions against every non-pseudo stat of `catalog`.
    ///
    /// A stat matching several patterns of one definition counts once, with
    /// the weight of the first pattern it matches.
    pub fn build(
        catalog: &StatIndex,
        definitions: &[PseudoDefinition],
    ) -> Result<Self, CatalogError> {
        let mut index = Self::default();

        for definition in definitions {
            let patterns = definition
                .patterns
                .iter()
                .map(|p| Regex::new(&p.pattern).map(|regex| (regex, p.weight)))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| CatalogError::Pattern {
                    id: definition.id.clone(),
                    source,
                })?;

            let position = index.pseudo.len();
            index.pseudo.push(
                catalog
                    .get_stat_data_by_id(&definition.id)
                    .unwrap_or_else(|| {
                        StatData::new(&definition.id, &definition.text, StatCategory::Pseudo)
                    }),
            );

            for stat in catalog.stats() {
                if stat.category == StatCategory::Pseudo {
                    continue;
                }
                let weight = patterns
                    .iter()
                    .find(|(regex, _)| regex.is_match(&stat.text))
                    .map(|(_, weight)| *weight);
                if let Some(weight) = weight {
                    let feeds = index.feeds.entry(stat.id.clone()).or_default();
                    if !feeds.iter().any(|(p, _)| *p == position) {
                        feeds.push((position, weight));
                    }
                }
            }
        }

        tracing::debug!(
            pseudo = index.pseudo.len(),
            contributors = index.feeds.len(),
            "built pseudo stat index"
        );
        Ok(index)
    }

    pub fn load_definitions(
        path: impl AsRef<Path>,
    ) -> Result<Vec<PseudoDefinition>, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Totals for resistances, life, mana, energy shield and attributes.
    ///
    /// Multi-element resistances count once per element towards the total
    /// elemental resistance.
    pub fn english_definitions() -> Vec<PseudoDefinition> {
        vec![
            PseudoDefinition::english(
                "pseudo.pseudo_total_elemental_resistance",
                "+#% total Elemental Resistance",
                &[
                    (r"^\+#% to (Fire|Cold|Lightning) Resistance$", 1.0),
                    (r"^\+#% to (Fire and (Cold|Lightning)|Cold and Lightning) Resistances$", 2.0),
                    (r"^\+#% to all Elemental Resistances$", 3.0),
                ],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_fire_resistance",
                "+#% total to Fire Resistance",
                &[
                    (r"^\+#% to Fire Resistance$", 1.0),
                    (r"^\+#% to Fire and (Cold|Lightning) Resistances$", 1.0),
                    (r"^\+#% to all Elemental Resistances$", 1.0),
                ],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_cold_resistance",
                "+#% total to Cold Resistance",
                &[
                    (r"^\+#% to Cold Resistance$", 1.0),
                    (r"^\+#% to (Fire and Cold|Cold and Lightning) Resistances$", 1.0),
                    (r"^\+#% to all Elemental Resistances$", 1.0),
                ],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_lightning_resistance",
                "+#% total to Lightning Resistance",
                &[
                    (r"^\+#% to Lightning Resistance$", 1.0),
                    (r"^\+#% to (Fire and Lightning|Cold and Lightning) Resistances$", 1.0),
                    (r"^\+#% to all Elemental Resistances$", 1.0),
                ],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_chaos_resistance",
                "+#% total to Chaos Resistance",
                &[(r"^\+#% to Chaos Resistance$", 1.0)],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_life",
                "+# total maximum Life",
                &[(r"^\+# to maximum Life$", 1.0)],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_mana",
                "+# total maximum Mana",
                &[(r"^\+# to maximum Mana$", 1.0)],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_energy_shield",
                "+# total maximum Energy Shield",
                &[(r"^\+# to maximum Energy Shield$", 1.0)],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_strength",
                "+# total to Strength",
                &[
                    (r"^\+# to Strength$", 1.0),
                    (r"^\+# to Strength and (Dexterity|Intelligence)$", 1.0),
                    (r"^\+# to all Attributes$", 1.0),
                ],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_dexterity",
                "+# total to Dexterity",
                &[
                    (r"^\+# to Dexterity$", 1.0),
                    (r"^\+# to (Strength and Dexterity|Dexterity and Intelligence)$", 1.0),
                    (r"^\+# to all Attributes$", 1.0),
                ],
            ),
            PseudoDefinition::english(
                "pseudo.pseudo_total_intelligence",
                "+# total to Intelligence",
                &[
                    (r"^\+# to Intelligence$", 1.0),
                    (r"^\+# to (Strength|Dexterity) and Intelligence$", 1.0),
                    (r"^\+# to all Attributes$", 1.0),
                ],
            ),
        ]
    }

    pub fn len(&self) -> usize {
        self.pseudo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pseudo.is_empty()
    }
}

impl PseudoStatCatalog for PseudoIndex {
    fn get_pseudo_stat_data(&self, stat_id: &str) -> Vec<StatData> {
        self.get_pseudo_stat_contributions(stat_id)
            .into_iter()
            .map(|(pseudo, _)| pseudo)
            .collect()
    }

    fn get_pseudo_stat_contributions(&self, stat_id: &str) -> Vec<(StatData, f64)> {
        self.feeds
            .get(stat_id)
            .map(|feeds| {
                feeds
                    .iter()
                    .map(|&(position, weight)| (self.pseudo[position].clone(), weight))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StatIndex {
        StatIndex::new([
            StatData::new(
                "pseudo.pseudo_total_life",
                "+# total maximum Life",
                StatCategory::Pseudo,
            ),
            StatData::new("explicit.life", "+# to maximum Life", StatCategory::Explicit),
            StatData::new("implicit.life", "+# to maximum Life", StatCategory::Implicit),
            StatData::new("explicit.fire", "+#% to Fire Resistance", StatCategory::Explicit),
            StatData::new(
                "explicit.fire_cold",
                "+#% to Fire and Cold Resistances",
                StatCategory::Explicit,
            ),
            StatData::new(
                "explicit.all_res",
                "+#% to all Elemental Resistances",
                StatCategory::Explicit,
            ),
            StatData::new("explicit.str", "+# to Strength", StatCategory::Explicit),
        ])
    }

    #[test]
    fn test_english_definitions_compile() {
        let index = PseudoIndex::build(&catalog(), &PseudoIndex::english_definitions()).unwrap();
        assert_eq!(index.len(), PseudoIndex::english_definitions().len());
    }

    #[test]
    fn test_feeds() {
        let index = PseudoIndex::build(&catalog(), &PseudoIndex::english_definitions()).unwrap();

        let life = index.get_pseudo_stat_data("explicit.life");
        assert_eq!(life.len(), 1);
        assert_eq!(life[0].id, "pseudo.pseudo_total_life");
        assert_eq!(index.get_pseudo_stat_data("implicit.life"), life);

        let ids: Vec<_> = index
            .get_pseudo_stat_data("explicit.fire_cold")
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "pseudo.pseudo_total_elemental_resistance",
                "pseudo.pseudo_total_fire_resistance",
                "pseudo.pseudo_total_cold_resistance",
            ]
        );

        assert_eq!(index.get_pseudo_stat_data("explicit.all_res").len(), 4);
        assert!(index.get_pseudo_stat_data("unknown").is_empty());
    }

    #[test]
    fn test_pseudo_text_falls_back_to_definition() {
        let index = PseudoIndex::build(&catalog(), &PseudoIndex::english_definitions()).unwrap();
        let strength = index.get_pseudo_stat_data("explicit.str");
        assert_eq!(strength[0].text, "+# total to Strength");
        assert_eq!(strength[0].category, StatCategory::Pseudo);
    }

    #[test]
    fn test_invalid_pattern() {
        let definitions = vec![PseudoDefinition {
            id: "pseudo.broken".to_string(),
            text: "#".to_string(),
            patterns: vec![PseudoPattern::new("(", 1.0)],
        }];
        let err = PseudoIndex::build(&catalog(), &definitions).unwrap_err();
        assert!(matches!(err, CatalogError::Pattern { ref id, .. } if id == "pseudo.broken"));
    }

    #[test]
    fn test_elemental_total_weights() {
        let index = PseudoIndex::build(&catalog(), &PseudoIndex::english_definitions()).unwrap();
        let weight = |stat_id: &str, pseudo_id: &str| {
            index
                .get_pseudo_stat_contributions(stat_id)
                .into_iter()
                .find(|(pseudo, _)| pseudo.id == pseudo_id)
                .map(|(_, weight)| weight)
        };
        let total = "pseudo.pseudo_total_elemental_resistance";
        assert_eq!(weight("explicit.fire", total), Some(1.0));
        assert_eq!(weight("explicit.fire_cold", total), Some(2.0));
        assert_eq!(weight("explicit.all_res", total), Some(3.0));
        assert_eq!(
            weight("explicit.all_res", "pseudo.pseudo_total_fire_resistance"),
            Some(1.0)
        );
        assert_eq!(weight("explicit.life", total), None);
    }

    #[test]
    fn test_load_definitions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pseudo.json");
        fs::write(
            &path,
            r#"[{
                "id": "pseudo.pseudo_total_life",
                "text": "+# total maximum Life",
                "patterns": ["^\\+# to maximum Life$"]
            }]"#,
        )
        .unwrap();
        let definitions = PseudoIndex::load_definitions(&path).unwrap();
        assert_eq!(definitions.len(), 1);
        let index = PseudoIndex::build(&catalog(), &definitions).unwrap();
        assert_eq!(index.get_pseudo_stat_data("explicit.life").len(), 1);
    }

    #[test]
    fn test_load_weighted_patterns() {
        let definitions: Vec<PseudoDefinition> = serde_json::from_str(
            r#"[{
                "id": "pseudo.pseudo_total_elemental_resistance",
                "text": "+#% total Elemental Resistance",
                "patterns": [
                    "^\\+#% to Fire Resistance$",
                    {"pattern": "^\\+#% to all Elemental Resistances$", "weight": 3},
                    {"pattern": "^\\+#% to Fire and Cold Resistances$"}
                ]
            }]"#,
        )
        .unwrap();
        assert_eq!(
            definitions[0].patterns,
            vec![
                PseudoPattern::new(r"^\+#% to Fire Resistance$", 1.0),
                PseudoPattern::new(r"^\+#% to all Elemental Resistances$", 3.0),
                PseudoPattern::new(r"^\+#% to Fire and Cold Resistances$", 1.0),
            ]
        );

        let index = PseudoIndex::build(&catalog(), &definitions).unwrap();
        assert_eq!(
            index.get_pseudo_stat_contributions("explicit.all_res")[0].1,
            3.0
        );
    }
}
