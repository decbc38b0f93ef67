//! Typed items built from tooltip text
//!
//! Every item shares an [`ItemHeader`] (source text, name, type) and a
//! rarity. Variants whose rarity is fixed by their category (gems, currency,
//! organs, ...) set it themselves; gear variants validate the rarity they
//! are given and refuse anything outside Normal/Magic/Rare/Unique.

mod properties;
mod rarity;
mod sockets;
mod stats;

pub use properties::{
    ArmourValues, DamageRange, EquipmentCategory, Influence, StackSize, WeaponValues,
};
pub use rarity::ItemRarity;
pub use sockets::{ItemSockets, Socket, SocketColor, SocketGroup};
pub use stats::{ItemStat, ItemStats, StatCategory};

use serde::Serialize;
use thiserror::Error;

/// Item category, one per category parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Equippable,
    Flask,
    Gem,
    Map,
    Jewel,
    Organ,
    Currency,
    DivinationCard,
    Fragment,
}

impl ItemCategory {
    /// Every category, in parser registration order
    pub const ALL: &'static [ItemCategory] = &[
        ItemCategory::Equippable,
        ItemCategory::Flask,
        ItemCategory::Gem,
        ItemCategory::Map,
        ItemCategory::Jewel,
        ItemCategory::Organ,
        ItemCategory::Currency,
        ItemCategory::DivinationCard,
        ItemCategory::Fragment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Equippable => "equippable",
            ItemCategory::Flask => "flask",
            ItemCategory::Gem => "gem",
            ItemCategory::Map => "map",
            ItemCategory::Jewel => "jewel",
            ItemCategory::Organ => "organ",
            ItemCategory::Currency => "currency",
            ItemCategory::DivinationCard => "divination_card",
            ItemCategory::Fragment => "fragment",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while constructing an item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("{category} items cannot have {rarity} rarity")]
    InvalidRarity {
        category: ItemCategory,
        rarity: ItemRarity,
    },
}

fn gear_rarity(category: ItemCategory, rarity: ItemRarity) -> Result<ItemRarity, ItemError> {
    if rarity.is_gear() {
        Ok(rarity)
    } else {
        Err(ItemError::InvalidRarity { category, rarity })
    }
}

/// Fields shared by every item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemHeader {
    /// Verbatim clipboard text the item was parsed from
    pub item_text: String,
    pub name: String,
    /// Base type; empty when the tooltip has a single name line
    #[serde(rename = "type")]
    pub type_line: String,
}

impl ItemHeader {
    pub fn new(
        item_text: impl Into<String>,
        name: impl Into<String>,
        type_line: impl Into<String>,
    ) -> Self {
        Self {
            item_text: item_text.into(),
            name: name.into(),
            type_line: type_line.into(),
        }
    }

    /// Name, followed by the type unless the name already contains it
    pub fn display_name(&self) -> String {
        if self.type_line.is_empty() || self.name.contains(&self.type_line) {
            self.name.clone()
        } else if self.name.is_empty() {
            self.type_line.clone()
        } else {
            format!("{} {}", self.name, self.type_line)
        }
    }
}

/// Weapons, armour and accessories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquippableItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    rarity: ItemRarity,
    pub quality: u32,
    pub item_level: u32,
    pub influences: Vec<Influence>,
    pub sockets: ItemSockets,
    pub is_corrupted: bool,
    pub is_identified: bool,
    pub is_synthesised: bool,
    pub category: EquipmentCategory,
    pub armour: Option<ArmourValues>,
    pub weapon: Option<WeaponValues>,
    pub stats: ItemStats,
}

impl EquippableItem {
    pub fn new(header: ItemHeader, rarity: ItemRarity) -> Result<Self, ItemError> {
        Ok(Self {
            header,
            rarity: gear_rarity(ItemCategory::Equippable, rarity)?,
            quality: 0,
            item_level: 0,
            influences: Vec::new(),
            sockets: ItemSockets::default(),
            is_corrupted: false,
            is_identified: true,
            is_synthesised: false,
            category: EquipmentCategory::Accessory,
            armour: None,
            weapon: None,
            stats: ItemStats::default(),
        })
    }

    pub fn rarity(&self) -> ItemRarity {
        self.rarity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaskItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    rarity: ItemRarity,
    pub quality: u32,
    pub is_identified: bool,
    pub stats: ItemStats,
}

impl FlaskItem {
    pub fn new(header: ItemHeader, rarity: ItemRarity) -> Result<Self, ItemError> {
        Ok(Self {
            header,
            rarity: gear_rarity(ItemCategory::Flask, rarity)?,
            quality: 0,
            is_identified: true,
            stats: ItemStats::default(),
        })
    }

    pub fn rarity(&self) -> ItemRarity {
        self.rarity
    }
}

/// Skill and support gems; rarity is always [`ItemRarity::Gem`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GemItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    pub quality: u32,
    pub level: u32,
    pub experience_percent: f64,
    pub is_corrupted: bool,
    pub is_vaal_version: bool,
}

impl GemItem {
    pub fn new(header: ItemHeader) -> Self {
        Self {
            header,
            quality: 0,
            level: 0,
            experience_percent: 0.0,
            is_corrupted: false,
            is_vaal_version: false,
        }
    }

    pub fn rarity(&self) -> ItemRarity {
        ItemRarity::Gem
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    rarity: ItemRarity,
    pub tier: u32,
    pub item_quantity: i32,
    pub item_rarity: i32,
    pub monster_pack_size: i32,
    pub quality: u32,
    pub is_blighted: bool,
    pub is_corrupted: bool,
    pub is_identified: bool,
    pub stats: ItemStats,
}

impl MapItem {
    pub fn new(header: ItemHeader, rarity: ItemRarity) -> Result<Self, ItemError> {
        Ok(Self {
            header,
            rarity: gear_rarity(ItemCategory::Map, rarity)?,
            tier: 0,
            item_quantity: 0,
            item_rarity: 0,
            monster_pack_size: 0,
            quality: 0,
            is_blighted: false,
            is_corrupted: false,
            is_identified: true,
            stats: ItemStats::default(),
        })
    }

    pub fn rarity(&self) -> ItemRarity {
        self.rarity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JewelItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    rarity: ItemRarity,
    pub is_identified: bool,
    pub is_corrupted: bool,
    pub stats: ItemStats,
}

impl JewelItem {
    pub fn new(header: ItemHeader, rarity: ItemRarity) -> Result<Self, ItemError> {
        Ok(Self {
            header,
            rarity: gear_rarity(ItemCategory::Jewel, rarity)?,
            is_identified: true,
            is_corrupted: false,
            stats: ItemStats::default(),
        })
    }

    pub fn rarity(&self) -> ItemRarity {
        self.rarity
    }
}

/// Metamorph organs; always Unique
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    pub stats: ItemStats,
}

impl OrganItem {
    pub fn new(header: ItemHeader) -> Self {
        Self {
            header,
            stats: ItemStats::default(),
        }
    }

    pub fn rarity(&self) -> ItemRarity {
        ItemRarity::Unique
    }
}

/// Currency; rarity is always [`ItemRarity::Currency`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    pub stack_size: Option<StackSize>,
}

impl CurrencyItem {
    pub fn new(header: ItemHeader) -> Self {
        Self {
            header,
            stack_size: None,
        }
    }

    pub fn rarity(&self) -> ItemRarity {
        ItemRarity::Currency
    }

    /// Currency rarity is fixed; this is a no-op.
    pub fn set_rarity(&mut self, _rarity: ItemRarity) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivinationCardItem {
    #[serde(flatten)]
    pub header: ItemHeader,
    pub stack_size: Option<StackSize>,
}

impl DivinationCardItem {
    pub fn new(header: ItemHeader) -> Self {
        Self {
            header,
            stack_size: None,
        }
    }

    pub fn rarity(&self) -> ItemRarity {
        ItemRarity::DivinationCard
    }
}

/// Map fragments and scarabs; always Normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentItem {
    #[serde(flatten)]
    pub header: ItemHeader,
}

impl FragmentItem {
    pub fn new(header: ItemHeader) -> Self {
        Self { header }
    }

    pub fn rarity(&self) -> ItemRarity {
        ItemRarity::Normal
    }
}

/// A parsed item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Equippable(EquippableItem),
    Flask(FlaskItem),
    Gem(GemItem),
    Map(MapItem),
    Jewel(JewelItem),
    Organ(OrganItem),
    Currency(CurrencyItem),
    DivinationCard(DivinationCardItem),
    Fragment(FragmentItem),
}

impl Item {
    pub fn header(&self) -> &ItemHeader {
        match self {
            Item::Equippable(item) => &item.header,
            Item::Flask(item) => &item.header,
            Item::Gem(item) => &item.header,
            Item::Map(item) => &item.header,
            Item::Jewel(item) => &item.header,
            Item::Organ(item) => &item.header,
            Item::Currency(item) => &item.header,
            Item::DivinationCard(item) => &item.header,
            Item::Fragment(item) => &item.header,
        }
    }

    pub fn rarity(&self) -> ItemRarity {
        match self {
            Item::Equippable(item) => item.rarity(),
            Item::Flask(item) => item.rarity(),
            Item::Gem(item) => item.rarity(),
            Item::Map(item) => item.rarity(),
            Item::Jewel(item) => item.rarity(),
            Item::Organ(item) => item.rarity(),
            Item::Currency(item) => item.rarity(),
            Item::DivinationCard(item) => item.rarity(),
            Item::Fragment(item) => item.rarity(),
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            Item::Equippable(_) => ItemCategory::Equippable,
            Item::Flask(_) => ItemCategory::Flask,
            Item::Gem(_) => ItemCategory::Gem,
            Item::Map(_) => ItemCategory::Map,
            Item::Jewel(_) => ItemCategory::Jewel,
            Item::Organ(_) => ItemCategory::Organ,
            Item::Currency(_) => ItemCategory::Currency,
            Item::DivinationCard(_) => ItemCategory::DivinationCard,
            Item::Fragment(_) => ItemCategory::Fragment,
        }
    }

    /// Stats, for categories that carry any
    pub fn stats(&self) -> Option<&ItemStats> {
        match self {
            Item::Equippable(item) => Some(&item.stats),
            Item::Flask(item) => Some(&item.stats),
            Item::Map(item) => Some(&item.stats),
            Item::Jewel(item) => Some(&item.stats),
            Item::Organ(item) => Some(&item.stats),
            Item::Gem(_) | Item::Currency(_) | Item::DivinationCard(_) | Item::Fragment(_) => None,
        }
    }

    pub fn item_text(&self) -> &str {
        &self.header().item_text
    }

    pub fn name(&self) -> &str {
        &self.header().name
    }

    pub fn type_line(&self) -> &str {
        &self.header().type_line
    }

    pub fn display_name(&self) -> String {
        self.header().display_name()
    }
}
