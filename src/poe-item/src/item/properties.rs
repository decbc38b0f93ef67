//! Gear properties read from the property groups of a tooltip

use serde::Serialize;

use crate::text::{self, ItemBlock};
use crate::vocabulary::{Keywords, Term};

/// Broad gear slot family, derived from which properties are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Weapon,
    Armour,
    Accessory,
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armour => write!(f, "armour"),
            Self::Accessory => write!(f, "accessory"),
        }
    }
}

/// Conqueror / atlas influence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Influence {
    Shaper,
    Elder,
    Crusader,
    Hunter,
    Redeemer,
    Warlord,
}

impl Influence {
    pub const ALL: &'static [Influence] = &[
        Influence::Shaper,
        Influence::Elder,
        Influence::Crusader,
        Influence::Hunter,
        Influence::Redeemer,
        Influence::Warlord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Influence::Shaper => "shaper",
            Influence::Elder => "elder",
            Influence::Crusader => "crusader",
            Influence::Hunter => "hunter",
            Influence::Redeemer => "redeemer",
            Influence::Warlord => "warlord",
        }
    }

    pub(crate) fn term(&self) -> Term {
        match self {
            Influence::Shaper => Term::InfluenceShaper,
            Influence::Elder => Term::InfluenceElder,
            Influence::Crusader => Term::InfluenceCrusader,
            Influence::Hunter => Term::InfluenceHunter,
            Influence::Redeemer => Term::InfluenceRedeemer,
            Influence::Warlord => Term::InfluenceWarlord,
        }
    }

    /// Influences marked on the item, in declaration order
    pub(crate) fn read(block: &ItemBlock<'_>, keywords: &Keywords) -> Vec<Influence> {
        Influence::ALL
            .iter()
            .copied()
            .filter(|influence| block.has_line(keywords.get(influence.term())))
            .collect()
    }
}

/// Defence values of armour pieces and shields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArmourValues {
    pub armour: Option<u32>,
    pub evasion: Option<u32>,
    pub energy_shield: Option<u32>,
    /// Chance to block, percent
    pub block: Option<u32>,
}

impl ArmourValues {
    /// `None` when the item has no defence property at all
    pub(crate) fn read(block: &ItemBlock<'_>, keywords: &Keywords) -> Option<Self> {
        let read = |term| {
            block
                .property(keywords.get(term))
                .and_then(text::first_integer)
                .and_then(|v| u32::try_from(v).ok())
        };
        let values = Self {
            armour: read(Term::Armour),
            evasion: read(Term::Evasion),
            energy_shield: read(Term::EnergyShield),
            block: read(Term::Block),
        };
        (values != Self::default()).then_some(values)
    }
}

/// A `min-max` damage roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub fn average(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

/// Offensive values of weapons
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeaponValues {
    pub physical_damage: Option<DamageRange>,
    pub elemental_damage: Vec<DamageRange>,
    pub chaos_damage: Option<DamageRange>,
    /// Critical strike chance, percent
    pub critical_chance: Option<f64>,
    pub attacks_per_second: Option<f64>,
    pub weapon_range: Option<u32>,
}

impl WeaponValues {
    /// `None` unless the item shows damage or attack speed
    pub(crate) fn read(block: &ItemBlock<'_>, keywords: &Keywords) -> Option<Self> {
        let ranges = |term| {
            block
                .property(keywords.get(term))
                .map(text::damage_ranges)
                .unwrap_or_default()
                .into_iter()
                .map(|(min, max)| DamageRange { min, max })
                .collect::<Vec<_>>()
        };
        let number = |term| block.property(keywords.get(term)).and_then(text::first_number);

        let values = Self {
            physical_damage: ranges(Term::PhysicalDamage).first().copied(),
            elemental_damage: ranges(Term::ElementalDamage),
            chaos_damage: ranges(Term::ChaosDamage).first().copied(),
            critical_chance: number(Term::CriticalChance),
            attacks_per_second: number(Term::AttacksPerSecond),
            weapon_range: number(Term::WeaponRange).map(|v| v as u32),
        };

        let is_weapon = values.physical_damage.is_some()
            || !values.elemental_damage.is_empty()
            || values.chaos_damage.is_some()
            || values.attacks_per_second.is_some();
        is_weapon.then_some(values)
    }

    /// Average physical damage per second
    pub fn physical_dps(&self) -> Option<f64> {
        Some(self.physical_damage?.average() * self.attacks_per_second?)
    }

    /// Average elemental damage per second, all elements summed
    pub fn elemental_dps(&self) -> Option<f64> {
        let aps = self.attacks_per_second?;
        if self.elemental_damage.is_empty() {
            return None;
        }
        Some(self.elemental_damage.iter().map(DamageRange::average).sum::<f64>() * aps)
    }
}

/// `Stack Size: 3/10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackSize {
    pub current: u32,
    pub max: u32,
}

impl StackSize {
    pub(crate) fn read(block: &ItemBlock<'_>, keywords: &Keywords) -> Option<Self> {
        let value = block.property(keywords.get(Term::StackSize))?;
        let (current, max) = value.split_once('/')?;
        Some(Self {
            current: u32::try_from(text::grouped_integer(current)?).ok()?,
            max: u32::try_from(text::grouped_integer(max)?).ok()?,
        })
    }
}
