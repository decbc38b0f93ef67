use super::common::{self, Header};
use crate::item::{DivinationCardItem, Item, ItemRarity, StackSize};
use crate::text::ItemBlock;
use crate::vocabulary::Keywords;

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::rarity(block, keywords) == Some(ItemRarity::DivinationCard)
}

pub(super) fn parse(block: &ItemBlock<'_>, keywords: &Keywords, header: Header<'_>) -> Item {
    let mut item = DivinationCardItem::new(header.item_header(block));
    item.stack_size = StackSize::read(block, keywords);
    Item::DivinationCard(item)
}
