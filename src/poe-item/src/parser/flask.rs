//! Life, mana and utility flasks

use super::common::{self, Header};
use crate::item::{FlaskItem, Item, ItemError};
use crate::stats::StatsExtractor;
use crate::text::ItemBlock;
use crate::vocabulary::{Keywords, Term};

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::has_gear_rarity(block, keywords)
        && common::mentions(block, keywords, Term::FlaskCharges)
}

pub(super) fn parse(
    block: &ItemBlock<'_>,
    keywords: &Keywords,
    header: Header<'_>,
    stats: &StatsExtractor,
) -> Result<Item, ItemError> {
    let mut item = FlaskItem::new(header.item_header(block), header.rarity)?;
    item.quality = common::property_u32(block, keywords, Term::Quality);
    item.is_identified = common::is_identified(block, keywords);
    item.stats = stats.extract(&common::stat_groups(block, keywords), false);
    Ok(Item::Flask(item))
}
