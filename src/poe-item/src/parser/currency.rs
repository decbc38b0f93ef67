use super::common::{self, Header};
use crate::item::{CurrencyItem, Item, ItemRarity, StackSize};
use crate::text::ItemBlock;
use crate::vocabulary::Keywords;

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::rarity(block, keywords) == Some(ItemRarity::Currency)
}

pub(super) fn parse(block: &ItemBlock<'_>, keywords: &Keywords, header: Header<'_>) -> Item {
    let mut item = CurrencyItem::new(header.item_header(block));
    item.stack_size = StackSize::read(block, keywords);
    Item::Currency(item)
}
