//! Localized keywords used to read tooltip text
//!
//! The game client writes tooltips in the user's language, so every keyword
//! the parsers look for ("Rarity: ", "Corrupted", "Item Level: ", ...) comes
//! from a flat key -> string [`Vocabulary`]. English is compiled in and used
//! for any key a loaded vocabulary does not provide.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::item::ItemRarity;

/// Errors that can occur while loading a vocabulary file
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse vocabulary TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// English defaults, keyed the same way as vocabulary files
static ENGLISH: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "header.rarity" => "Rarity: ",
    "rarity.normal" => "Normal",
    "rarity.magic" => "Magic",
    "rarity.rare" => "Rare",
    "rarity.unique" => "Unique",
    "rarity.gem" => "Gem",
    "rarity.currency" => "Currency",
    "rarity.divination_card" => "Divination Card",
    "marker.unidentified" => "Unidentified",
    "marker.corrupted" => "Corrupted",
    "marker.synthesised" => "Synthesised Item",
    "marker.mirrored" => "Mirrored",
    "influence.shaper" => "Shaper Item",
    "influence.elder" => "Elder Item",
    "influence.crusader" => "Crusader Item",
    "influence.hunter" => "Hunter Item",
    "influence.redeemer" => "Redeemer Item",
    "influence.warlord" => "Warlord Item",
    "property.quality" => "Quality: ",
    "property.item_level" => "Item Level: ",
    "property.level" => "Level: ",
    "property.experience" => "Experience: ",
    "property.sockets" => "Sockets: ",
    "property.requirements" => "Requirements:",
    "property.stack_size" => "Stack Size: ",
    "property.map_tier" => "Map Tier: ",
    "property.item_quantity" => "Item Quantity: ",
    "property.item_rarity" => "Item Rarity: ",
    "property.monster_pack_size" => "Monster Pack Size: ",
    "property.armour" => "Armour: ",
    "property.evasion" => "Evasion Rating: ",
    "property.energy_shield" => "Energy Shield: ",
    "property.block" => "Chance to Block: ",
    "property.physical_damage" => "Physical Damage: ",
    "property.elemental_damage" => "Elemental Damage: ",
    "property.chaos_damage" => "Chaos Damage: ",
    "property.critical_chance" => "Critical Strike Chance: ",
    "property.attacks_per_second" => "Attacks per Second: ",
    "property.weapon_range" => "Weapon Range: ",
    "usage.flask_charges" => "Charges on use",
    "usage.jewel" => "Jewel Socket on the Passive Skill Tree",
    "usage.organ" => "Tane's Laboratory",
    "usage.fragment" => "Can be used in a personal Map Device",
    "keyword.blighted" => "Blighted",
    "keyword.vaal" => "Vaal",
    "stat.enchant" => "(enchant)",
    "stat.implicit" => "(implicit)",
    "stat.crafted" => "(crafted)",
    "stat.fractured" => "(fractured)",
    "stat.local" => "(Local)",
};

/// A keyword the parsers need, independent of language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    RarityPrefix,
    RarityNormal,
    RarityMagic,
    RarityRare,
    RarityUnique,
    RarityGem,
    RarityCurrency,
    RarityDivinationCard,
    Unidentified,
    Corrupted,
    Synthesised,
    Mirrored,
    InfluenceShaper,
    InfluenceElder,
    InfluenceCrusader,
    InfluenceHunter,
    InfluenceRedeemer,
    InfluenceWarlord,
    Quality,
    ItemLevel,
    Level,
    Experience,
    Sockets,
    Requirements,
    StackSize,
    MapTier,
    ItemQuantity,
    ItemRarity,
    MonsterPackSize,
    Armour,
    Evasion,
    EnergyShield,
    Block,
    PhysicalDamage,
    ElementalDamage,
    ChaosDamage,
    CriticalChance,
    AttacksPerSecond,
    WeaponRange,
    FlaskCharges,
    JewelUsage,
    OrganUsage,
    FragmentUsage,
    Blighted,
    Vaal,
    EnchantMarker,
    ImplicitMarker,
    CraftedMarker,
    FracturedMarker,
    LocalSuffix,
}

impl Term {
    /// Every term, in declaration order
    pub const ALL: &'static [Term] = &[
        Term::RarityPrefix,
        Term::RarityNormal,
        Term::RarityMagic,
        Term::RarityRare,
        Term::RarityUnique,
        Term::RarityGem,
        Term::RarityCurrency,
        Term::RarityDivinationCard,
        Term::Unidentified,
        Term::Corrupted,
        Term::Synthesised,
        Term::Mirrored,
        Term::InfluenceShaper,
        Term::InfluenceElder,
        Term::InfluenceCrusader,
        Term::InfluenceHunter,
        Term::InfluenceRedeemer,
        Term::InfluenceWarlord,
        Term::Quality,
        Term::ItemLevel,
        Term::Level,
        Term::Experience,
        Term::Sockets,
        Term::Requirements,
        Term::StackSize,
        Term::MapTier,
        Term::ItemQuantity,
        Term::ItemRarity,
        Term::MonsterPackSize,
        Term::Armour,
        Term::Evasion,
        Term::EnergyShield,
        Term::Block,
        Term::PhysicalDamage,
        Term::ElementalDamage,
        Term::ChaosDamage,
        Term::CriticalChance,
        Term::AttacksPerSecond,
        Term::WeaponRange,
        Term::FlaskCharges,
        Term::JewelUsage,
        Term::OrganUsage,
        Term::FragmentUsage,
        Term::Blighted,
        Term::Vaal,
        Term::EnchantMarker,
        Term::ImplicitMarker,
        Term::CraftedMarker,
        Term::FracturedMarker,
        Term::LocalSuffix,
    ];

    /// Property line prefixes; a group containing one of these is a
    /// property group rather than a stat group
    pub const PROPERTIES: &'static [Term] = &[
        Term::Quality,
        Term::ItemLevel,
        Term::Level,
        Term::Experience,
        Term::Sockets,
        Term::Requirements,
        Term::StackSize,
        Term::MapTier,
        Term::ItemQuantity,
        Term::ItemRarity,
        Term::MonsterPackSize,
        Term::Armour,
        Term::Evasion,
        Term::EnergyShield,
        Term::Block,
        Term::PhysicalDamage,
        Term::ElementalDamage,
        Term::ChaosDamage,
        Term::CriticalChance,
        Term::AttacksPerSecond,
        Term::WeaponRange,
    ];

    /// Lines that mark item state rather than describe stats
    pub const MARKERS: &'static [Term] = &[
        Term::Unidentified,
        Term::Corrupted,
        Term::Synthesised,
        Term::Mirrored,
        Term::InfluenceShaper,
        Term::InfluenceElder,
        Term::InfluenceCrusader,
        Term::InfluenceHunter,
        Term::InfluenceRedeemer,
        Term::InfluenceWarlord,
    ];

    /// Vocabulary file key
    pub fn key(self) -> &'static str {
        match self {
            Term::RarityPrefix => "header.rarity",
            Term::RarityNormal => "rarity.normal",
            Term::RarityMagic => "rarity.magic",
            Term::RarityRare => "rarity.rare",
            Term::RarityUnique => "rarity.unique",
            Term::RarityGem => "rarity.gem",
            Term::RarityCurrency => "rarity.currency",
            Term::RarityDivinationCard => "rarity.divination_card",
            Term::Unidentified => "marker.unidentified",
            Term::Corrupted => "marker.corrupted",
            Term::Synthesised => "marker.synthesised",
            Term::Mirrored => "marker.mirrored",
            Term::InfluenceShaper => "influence.shaper",
            Term::InfluenceElder => "influence.elder",
            Term::InfluenceCrusader => "influence.crusader",
            Term::InfluenceHunter => "influence.hunter",
            Term::InfluenceRedeemer => "influence.redeemer",
            Term::InfluenceWarlord => "influence.warlord",
            Term::Quality => "property.quality",
            Term::ItemLevel => "property.item_level",
            Term::Level => "property.level",
            Term::Experience => "property.experience",
            Term::Sockets => "property.sockets",
            Term::Requirements => "property.requirements",
            Term::StackSize => "property.stack_size",
            Term::MapTier => "property.map_tier",
            Term::ItemQuantity => "property.item_quantity",
            Term::ItemRarity => "property.item_rarity",
            Term::MonsterPackSize => "property.monster_pack_size",
            Term::Armour => "property.armour",
            Term::Evasion => "property.evasion",
            Term::EnergyShield => "property.energy_shield",
            Term::Block => "property.block",
            Term::PhysicalDamage => "property.physical_damage",
            Term::ElementalDamage => "property.elemental_damage",
            Term::ChaosDamage => "property.chaos_damage",
            Term::CriticalChance => "property.critical_chance",
            Term::AttacksPerSecond => "property.attacks_per_second",
            Term::WeaponRange => "property.weapon_range",
            Term::FlaskCharges => "usage.flask_charges",
            Term::JewelUsage => "usage.jewel",
            Term::OrganUsage => "usage.organ",
            Term::FragmentUsage => "usage.fragment",
            Term::Blighted => "keyword.blighted",
            Term::Vaal => "keyword.vaal",
            Term::EnchantMarker => "stat.enchant",
            Term::ImplicitMarker => "stat.implicit",
            Term::CraftedMarker => "stat.crafted",
            Term::FracturedMarker => "stat.fractured",
            Term::LocalSuffix => "stat.local",
        }
    }

    /// Compiled-in English text
    pub fn english(self) -> &'static str {
        ENGLISH.get(self.key()).copied().unwrap_or_default()
    }
}

/// Flat key -> string resource map
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: HashMap<String, String>,
}

impl Vocabulary {
    /// The English vocabulary (no overrides, every key falls back)
    pub fn english() -> Self {
        Self::default()
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, VocabularyError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a vocabulary file, TOML if the extension says so, JSON otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        if path.extension().is_some_and(|e| e == "toml") {
            Self::from_toml(&contents)
        } else {
            Self::from_json(&contents)
        }
    }

    /// Look up a key, falling back to English
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .or_else(|| ENGLISH.get(key).copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every [`Term`] resolved against a vocabulary, once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    terms: Vec<String>,
}

impl Keywords {
    pub fn resolve(vocabulary: &Vocabulary) -> Self {
        let terms = Term::ALL
            .iter()
            .map(|term| {
                vocabulary
                    .get(term.key())
                    .unwrap_or_else(|| term.english())
                    .to_string()
            })
            .collect();
        Self { terms }
    }

    pub fn english() -> Self {
        Self::resolve(&Vocabulary::english())
    }

    pub fn get(&self, term: Term) -> &str {
        // Term::ALL is declared in discriminant order, so the index is the discriminant
        self.terms.get(term as usize).map_or("", String::as_str)
    }

    /// Map a rarity display name ("Divination Card") back to the enum
    pub fn rarity(&self, display: &str) -> Option<ItemRarity> {
        ItemRarity::ALL
            .iter()
            .copied()
            .find(|rarity| self.get(rarity.term()) == display)
    }

    /// The rarity named on a `Rarity: ...` line
    pub fn rarity_line(&self, line: &str) -> Option<ItemRarity> {
        let prefix = self.get(Term::RarityPrefix);
        if prefix.is_empty() {
            return None;
        }
        line.strip_prefix(prefix)
            .and_then(|display| self.rarity(display.trim()))
    }

    pub fn is_property_line(&self, line: &str) -> bool {
        Term::PROPERTIES.iter().any(|term| {
            let prefix = self.get(*term);
            !prefix.is_empty() && line.starts_with(prefix)
        })
    }

    pub fn is_marker_line(&self, line: &str) -> bool {
        Term::MARKERS.iter().any(|term| self.get(*term) == line)
    }
}
