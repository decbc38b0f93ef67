//! Skill and support gems

use super::common::{self, Header};
use crate::item::{GemItem, Item, ItemRarity};
use crate::text::{self, ItemBlock};
use crate::vocabulary::{Keywords, Term};

pub(super) fn can_parse(block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
    common::rarity(block, keywords) == Some(ItemRarity::Gem)
}

pub(super) fn parse(block: &ItemBlock<'_>, keywords: &Keywords, header: Header<'_>) -> Item {
    let mut item = GemItem::new(header.item_header(block));

    item.quality = common::property_u32(block, keywords, Term::Quality);
    item.level = gem_level(block, keywords);
    item.experience_percent = block
        .property(keywords.get(Term::Experience))
        .and_then(experience_percent)
        .unwrap_or(0.0);
    item.is_corrupted = common::is_corrupted(block, keywords);
    item.is_vaal_version = is_vaal(block, keywords, &header);

    Item::Gem(item)
}

/// `Level:` read from the groups before `Requirements:`; the one inside the
/// requirements group is the character level needed to use the gem
fn gem_level(block: &ItemBlock<'_>, keywords: &Keywords) -> u32 {
    let level = keywords.get(Term::Level);
    let requirements = keywords.get(Term::Requirements);
    if level.is_empty() {
        return 0;
    }
    let is_requirements = |group: &&Vec<&str>| {
        !requirements.is_empty() && group.first().is_some_and(|l| l.starts_with(requirements))
    };

    block
        .groups()
        .iter()
        .skip(1)
        .take_while(|group| !is_requirements(group))
        .flatten()
        .find_map(|line| line.strip_prefix(level))
        .and_then(text::first_integer)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}

/// `121,461,578/242,923,156` -> 50.0
fn experience_percent(value: &str) -> Option<f64> {
    let (current, max) = value.split_once('/')?;
    let current = text::grouped_integer(current)? as f64;
    let max = text::grouped_integer(max)? as f64;
    (max > 0.0).then(|| current / max * 100.0)
}

/// Vaal gems carry a `Vaal` tag on the line after the header
fn is_vaal(block: &ItemBlock<'_>, keywords: &Keywords, header: &Header<'_>) -> bool {
    let vaal = keywords.get(Term::Vaal);
    if vaal.is_empty() {
        return false;
    }
    let tagged = block
        .groups()
        .get(1)
        .and_then(|group| group.first())
        .is_some_and(|tags| tags.split(',').any(|tag| tag.trim() == vaal));

    tagged
        || header
            .name
            .strip_prefix(vaal)
            .is_some_and(|rest| rest.starts_with(' '))
}
