//! Weapons, armour and accessories

use super::common::{self, Header};
use crate::item::{
    ArmourValues, EquipmentCategory, EquippableItem, Influence, Item, ItemError, ItemSockets,
    WeaponValues,
};
use crate::stats::StatsExtractor;
use crate::text::ItemBlock;
use crate::vocabulary::{Keywords, Term};

/// Markers that hand a gear-rarity item to a more specific parser
const CLAIMED_ELSEWHERE: &[Term] = &[
    Term::FlaskCharges,
    Term::JewelUsage,
    Term::OrganUsage,
    Term::FragmentUsage,
];

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::has_gear_rarity(block, keywords)
        && !common::has_property(block, keywords, Term::MapTier)
        && !CLAIMED_ELSEWHERE
            .iter()
            .any(|term| common::mentions(block, keywords, *term))
}

pub(super) fn parse(
    block: &ItemBlock<'_>,
    keywords: &Keywords,
    header: Header<'_>,
    stats: &StatsExtractor,
) -> Result<Item, ItemError> {
    let mut item = EquippableItem::new(header.item_header(block), header.rarity)?;

    item.quality = common::property_u32(block, keywords, Term::Quality);
    item.item_level = common::property_u32(block, keywords, Term::ItemLevel);
    item.influences = Influence::read(block, keywords);
    item.sockets = block
        .property(keywords.get(Term::Sockets))
        .map(ItemSockets::parse)
        .unwrap_or_default();
    item.is_corrupted = common::is_corrupted(block, keywords);
    item.is_identified = common::is_identified(block, keywords);
    item.is_synthesised = block.has_line(keywords.get(Term::Synthesised));
    item.armour = ArmourValues::read(block, keywords);
    item.weapon = WeaponValues::read(block, keywords);
    item.category = match (&item.weapon, &item.armour) {
        (Some(_), _) => EquipmentCategory::Weapon,
        (None, Some(_)) => EquipmentCategory::Armour,
        (None, None) => EquipmentCategory::Accessory,
    };

    // Weapon and armour base values are rolled by local mods
    let prefer_local = item.category != EquipmentCategory::Accessory;
    item.stats = stats.extract(&common::stat_groups(block, keywords), prefer_local);

    Ok(Item::Equippable(item))
}
