//! Map fragments: Normal rarity items opened in a map device

use super::common::{self, Header};
use crate::item::{FragmentItem, Item, ItemRarity};
use crate::text::ItemBlock;
use crate::vocabulary::{Keywords, Term};

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::rarity(block, keywords) == Some(ItemRarity::Normal)
        && common::mentions(block, keywords, Term::FragmentUsage)
        && !common::has_property(block, keywords, Term::MapTier)
}

pub(super) fn parse(block: &ItemBlock<'_>, header: Header<'_>) -> Item {
    Item::Fragment(FragmentItem::new(header.item_header(block)))
}
