use super::common::{self, Header};
use crate::item::{Item, ItemError, JewelItem};
use crate::stats::StatsExtractor;
use crate::text::ItemBlock;
use crate::vocabulary::{Keywords, Term};

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::has_gear_rarity(block, keywords) && common::mentions(block, keywords, Term::JewelUsage)
}

pub(super) fn parse(
    block: &ItemBlock<'_>,
    keywords: &Keywords,
    header: Header<'_>,
    stats: &StatsExtractor,
) -> Result<Item, ItemError> {
    let mut item = JewelItem::new(header.item_header(block), header.rarity)?;
    item.is_identified = common::is_identified(block, keywords);
    item.is_corrupted = common::is_corrupted(block, keywords);
    item.stats = stats.extract(&common::stat_groups(block, keywords), false);
    Ok(Item::Jewel(item))
}
