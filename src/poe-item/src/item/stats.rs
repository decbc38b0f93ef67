//! Categorized item stats

use serde::{Deserialize, Serialize};

/// Where a stat comes from on the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Enchant,
    Fractured,
    Implicit,
    Explicit,
    Crafted,
    Monster,
    Pseudo,
}

impl StatCategory {
    /// Every category, in tooltip order (enchants first, crafted last)
    pub const ALL: &'static [StatCategory] = &[
        StatCategory::Enchant,
        StatCategory::Fractured,
        StatCategory::Implicit,
        StatCategory::Explicit,
        StatCategory::Crafted,
        StatCategory::Monster,
        StatCategory::Pseudo,
    ];

    /// Map a trade API entry `type` to a category
    pub fn from_trade_type(kind: &str) -> Option<Self> {
        match kind {
            "enchant" => Some(StatCategory::Enchant),
            "fractured" => Some(StatCategory::Fractured),
            "implicit" => Some(StatCategory::Implicit),
            "explicit" => Some(StatCategory::Explicit),
            "crafted" => Some(StatCategory::Crafted),
            "monster" => Some(StatCategory::Monster),
            "pseudo" => Some(StatCategory::Pseudo),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatCategory::Enchant => "enchant",
            StatCategory::Fractured => "fractured",
            StatCategory::Implicit => "implicit",
            StatCategory::Explicit => "explicit",
            StatCategory::Crafted => "crafted",
            StatCategory::Monster => "monster",
            StatCategory::Pseudo => "pseudo",
        }
    }
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One resolved stat line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStat {
    /// Catalog id, e.g. `explicit.stat_3299347043`
    pub id: String,
    /// Text as shown on the item, roll ranges removed
    pub text: String,
    pub category: StatCategory,
    pub values: Vec<f64>,
}

impl ItemStat {
    pub fn value(&self) -> Option<f64> {
        self.values.first().copied()
    }
}

/// Stats grouped by category, each list in source text order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemStats {
    pub enchanted: Vec<ItemStat>,
    pub fractured: Vec<ItemStat>,
    pub implicit: Vec<ItemStat>,
    pub explicit: Vec<ItemStat>,
    pub crafted: Vec<ItemStat>,
    pub monster: Vec<ItemStat>,
    pub pseudo: Vec<ItemStat>,
}

impl ItemStats {
    /// Append a stat to the list for its category
    pub fn push(&mut self, stat: ItemStat) {
        self.list_mut(stat.category).push(stat);
    }

    pub fn get(&self, category: StatCategory) -> &[ItemStat] {
        match category {
            StatCategory::Enchant => &self.enchanted,
            StatCategory::Fractured => &self.fractured,
            StatCategory::Implicit => &self.implicit,
            StatCategory::Explicit => &self.explicit,
            StatCategory::Crafted => &self.crafted,
            StatCategory::Monster => &self.monster,
            StatCategory::Pseudo => &self.pseudo,
        }
    }

    fn list_mut(&mut self, category: StatCategory) -> &mut Vec<ItemStat> {
        match category {
            StatCategory::Enchant => &mut self.enchanted,
            StatCategory::Fractured => &mut self.fractured,
            StatCategory::Implicit => &mut self.implicit,
            StatCategory::Explicit => &mut self.explicit,
            StatCategory::Crafted => &mut self.crafted,
            StatCategory::Monster => &mut self.monster,
            StatCategory::Pseudo => &mut self.pseudo,
        }
    }

    /// All stats, category by category in tooltip order
    pub fn iter(&self) -> impl Iterator<Item = &ItemStat> {
        StatCategory::ALL
            .iter()
            .flat_map(move |category| self.get(*category).iter())
    }

    pub fn len(&self) -> usize {
        StatCategory::ALL
            .iter()
            .map(|category| self.get(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
