//! Metamorph organs
//!
//! Organ stat lines describe the monster the organ was taken from, so the
//! extractor for this category resolves unmarked lines as monster stats.

use super::common::{self, Header};
use crate::item::{Item, ItemRarity, OrganItem};
use crate::stats::StatsExtractor;
use crate::text::ItemBlock;
use crate::vocabulary::{Keywords, Term};

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::rarity(block, keywords) == Some(ItemRarity::Unique)
        && common::mentions(block, keywords, Term::OrganUsage)
}

pub(super) fn parse(
    block: &ItemBlock<'_>,
    keywords: &Keywords,
    header: Header<'_>,
    stats: &StatsExtractor,
) -> Item {
    let mut item = OrganItem::new(header.item_header(block));
    item.stats = stats.extract(&common::stat_groups(block, keywords), false);
    Item::Organ(item)
}
