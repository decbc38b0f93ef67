//! Item rarity

use serde::Serialize;

use crate::vocabulary::Term;

/// Rarity named on the `Rarity:` header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRarity {
    Normal,
    Magic,
    Rare,
    Unique,
    Gem,
    Currency,
    DivinationCard,
}

impl ItemRarity {
    pub const ALL: &'static [ItemRarity] = &[
        ItemRarity::Normal,
        ItemRarity::Magic,
        ItemRarity::Rare,
        ItemRarity::Unique,
        ItemRarity::Gem,
        ItemRarity::Currency,
        ItemRarity::DivinationCard,
    ];

    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            ItemRarity::Normal => "Normal",
            ItemRarity::Magic => "Magic",
            ItemRarity::Rare => "Rare",
            ItemRarity::Unique => "Unique",
            ItemRarity::Gem => "Gem",
            ItemRarity::Currency => "Currency",
            ItemRarity::DivinationCard => "Divination Card",
        }
    }

    /// Normal, Magic, Rare or Unique: the rarities gear can roll
    pub fn is_gear(&self) -> bool {
        matches!(
            self,
            ItemRarity::Normal | ItemRarity::Magic | ItemRarity::Rare | ItemRarity::Unique
        )
    }

    pub(crate) fn term(&self) -> Term {
        match self {
            ItemRarity::Normal => Term::RarityNormal,
            ItemRarity::Magic => Term::RarityMagic,
            ItemRarity::Rare => Term::RarityRare,
            ItemRarity::Unique => Term::RarityUnique,
            ItemRarity::Gem => Term::RarityGem,
            ItemRarity::Currency => Term::RarityCurrency,
            ItemRarity::DivinationCard => Term::RarityDivinationCard,
        }
    }
}

impl std::fmt::Display for ItemRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_rarities() {
        let gear: Vec<_> = ItemRarity::ALL.iter().filter(|r| r.is_gear()).collect();
        assert_eq!(gear.len(), 4);
        assert!(!ItemRarity::Gem.is_gear());
        assert!(!ItemRarity::Currency.is_gear());
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemRarity::DivinationCard.to_string(), "Divination Card");
        assert_eq!(ItemRarity::Rare.to_string(), "Rare");
    }
}
