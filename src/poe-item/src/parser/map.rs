//! Maps, including blighted and unique maps

use super::common::{self, Header};
use crate::item::{Item, ItemError, MapItem};
use crate::stats::StatsExtractor;
use crate::text::ItemBlock;
use crate::vocabulary::{Keywords, Term};

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::has_gear_rarity(block, keywords) && common::has_property(block, keywords, Term::MapTier)
}

pub(super) fn parse(
    block: &ItemBlock<'_>,
    keywords: &Keywords,
    header: Header<'_>,
    stats: &StatsExtractor,
) -> Result<Item, ItemError> {
    let mut item = MapItem::new(header.item_header(block), header.rarity)?;

    item.tier = common::property_u32(block, keywords, Term::MapTier);
    item.item_quantity = common::property_i32(block, keywords, Term::ItemQuantity);
    item.item_rarity = common::property_i32(block, keywords, Term::ItemRarity);
    item.monster_pack_size = common::property_i32(block, keywords, Term::MonsterPackSize);
    item.quality = common::property_u32(block, keywords, Term::Quality);
    item.is_blighted = header.contains(keywords.get(Term::Blighted));
    item.is_corrupted = common::is_corrupted(block, keywords);
    item.is_identified = common::is_identified(block, keywords);
    item.stats = stats.extract(&common::stat_groups(block, keywords), false);

    Ok(Item::Map(item))
}
