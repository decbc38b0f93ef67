//! Header and property helpers shared by the category parsers

use crate::item::{ItemHeader, ItemRarity};
use crate::text::{self, ItemBlock};
use crate::vocabulary::{Keywords, Term};

/// Rarity, name and type read from the first group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Header<'a> {
    pub rarity: ItemRarity,
    pub name: &'a str,
    pub type_line: &'a str,
}

impl<'a> Header<'a> {
    /// `None` unless the first group carries a known `Rarity:` line.
    ///
    /// Lines before the rarity line (newer clients prepend an item class)
    /// are skipped. One line after it is the name; a second is the type.
    pub fn read(block: &ItemBlock<'a>, keywords: &Keywords) -> Option<Self> {
        let lines = block.header();
        let (position, rarity) = lines
            .iter()
            .enumerate()
            .find_map(|(i, line)| keywords.rarity_line(line).map(|rarity| (i, rarity)))?;
        let rest = &lines[position + 1..];

        Some(Self {
            rarity,
            name: rest.first().copied().unwrap_or_default(),
            type_line: rest.get(1).copied().unwrap_or_default(),
        })
    }

    pub fn item_header(&self, block: &ItemBlock<'_>) -> ItemHeader {
        ItemHeader::new(block.text(), self.name, self.type_line)
    }

    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && (self.name.contains(needle) || self.type_line.contains(needle))
    }
}

pub(super) fn rarity(block: &ItemBlock<'_>, keywords: &Keywords) -> Option<ItemRarity> {
    Header::read(block, keywords).map(|header| header.rarity)
}

pub(super) fn has_gear_rarity(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    rarity(block, keywords).is_some_and(|rarity| rarity.is_gear())
}

pub(super) fn mentions(block: &ItemBlock<'_>, keywords: &Keywords, term: Term) -> bool {
    block.contains(keywords.get(term))
}

pub(super) fn has_property(block: &ItemBlock<'_>, keywords: &Keywords, term: Term) -> bool {
    block.property(keywords.get(term)).is_some()
}

pub(super) fn is_identified(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    !block.has_line(keywords.get(Term::Unidentified))
}

pub(super) fn is_corrupted(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    block.has_line(keywords.get(Term::Corrupted))
}

pub(super) fn integer(block: &ItemBlock<'_>, keywords: &Keywords, term: Term) -> Option<i64> {
    block.property(keywords.get(term)).and_then(text::first_integer)
}

/// Unsigned property value; missing or negative reads as 0
pub(super) fn property_u32(block: &ItemBlock<'_>, keywords: &Keywords, term: Term) -> u32 {
    integer(block, keywords, term)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}

pub(super) fn property_i32(block: &ItemBlock<'_>, keywords: &Keywords, term: Term) -> i32 {
    integer(block, keywords, term)
        .and_then(|value| i32::try_from(value).ok())
        .unwrap_or(0)
}

/// The groups holding stat lines.
///
/// Stats follow the `Item Level:` group. Without one they follow the last
/// property group, or the header. Groups made only of marker lines
/// (`Corrupted`, influences, ...) are left out.
pub(super) fn stat_groups<'b, 'a>(
    block: &'b ItemBlock<'a>,
    keywords: &Keywords,
) -> Vec<&'b [&'a str]> {
    let groups = block.groups();
    let item_level = keywords.get(Term::ItemLevel);
    let has_item_level = |group: &Vec<&str>| {
        !item_level.is_empty() && group.iter().any(|l| l.starts_with(item_level))
    };
    let is_property_group = |group: &Vec<&str>| group.iter().any(|l| keywords.is_property_line(l));

    let start = groups
        .iter()
        .position(has_item_level)
        .or_else(|| groups.iter().rposition(is_property_group))
        .map_or(1, |index| index + 1);

    groups
        .iter()
        .skip(start)
        .filter(|group| !group.iter().all(|l| keywords.is_marker_line(l)))
        .map(Vec::as_slice)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_with_type() {
        let block =
            ItemBlock::new("Rarity: Rare\nDoom Mark\nHubris Circlet\n--------\nItem Level: 84");
        let header = Header::read(&block, &Keywords::english()).unwrap();
        assert_eq!(header.rarity, ItemRarity::Rare);
        assert_eq!(header.name, "Doom Mark");
        assert_eq!(header.type_line, "Hubris Circlet");
    }

    #[test]
    fn test_header_single_line() {
        let block = ItemBlock::new("Rarity: Currency\nChaos Orb");
        let header = Header::read(&block, &Keywords::english()).unwrap();
        assert_eq!(header.name, "Chaos Orb");
        assert_eq!(header.type_line, "");
    }

    #[test]
    fn test_header_skips_item_class() {
        let block =
            ItemBlock::new("Item Class: Helmets\nRarity: Magic\nHubris Circlet of the Whelpling");
        let header = Header::read(&block, &Keywords::english()).unwrap();
        assert_eq!(header.rarity, ItemRarity::Magic);
        assert_eq!(header.name, "Hubris Circlet of the Whelpling");
    }

    #[test]
    fn test_header_requires_rarity() {
        let keywords = Keywords::english();
        assert!(Header::read(&ItemBlock::new(""), &keywords).is_none());
        let block = ItemBlock::new("Chaos Orb\n--------\nRarity: Currency");
        assert!(Header::read(&block, &keywords).is_none());
    }

    #[test]
    fn test_stat_groups_after_item_level() {
        let block = ItemBlock::new(
            "Rarity: Rare\nX\nY\n--------\nQuality: +20%\n--------\nItem Level: 84\n--------\n\
             +20 to maximum Life (implicit)\n--------\n+15 to maximum Life\n--------\n\
             Corrupted\n--------\nShaper Item\nElder Item",
        );
        let groups = stat_groups(&block, &Keywords::english());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], &["+20 to maximum Life (implicit)"]);
        assert_eq!(groups[1], &["+15 to maximum Life"]);
    }

    #[test]
    fn test_stat_groups_without_item_level() {
        let keywords = Keywords::english();
        let block = ItemBlock::new(
            "Rarity: Rare\nX\n--------\nQuality: +20%\n--------\n+15 to maximum Life",
        );
        assert_eq!(stat_groups(&block, &keywords), vec![&["+15 to maximum Life"][..]]);

        let block = ItemBlock::new("Rarity: Rare\nX\n--------\n+15 to maximum Life");
        assert_eq!(stat_groups(&block, &keywords), vec![&["+15 to maximum Life"][..]]);
    }

    #[test]
    fn test_properties() {
        let keywords = Keywords::english();
        let block = ItemBlock::new(
            "Rarity: Rare\nX\n--------\n\
             Item Quantity: +85% (augmented)\nQuality: -3%\nUnidentified",
        );
        assert_eq!(property_i32(&block, &keywords, Term::ItemQuantity), 85);
        assert_eq!(property_u32(&block, &keywords, Term::Quality), 0);
        assert_eq!(property_u32(&block, &keywords, Term::MapTier), 0);
        assert!(!is_identified(&block, &keywords));
        assert!(!is_corrupted(&block, &keywords));
    }
}
