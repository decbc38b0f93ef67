//! Item text parsing
//!
//! [`ItemParser`] holds one category parser per [`ItemCategory`]. Every
//! category is asked whether it recognises a tooltip; the text parses only
//! when exactly one does. The order categories are asked in never changes
//! the outcome, only the number of claims does.

mod common;
mod currency;
mod divination;
mod equippable;
mod flask;
mod fragment;
mod gem;
mod jewel;
mod map;
mod organ;

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{PseudoStatCatalog, StatCatalog};
use crate::item::{Item, ItemCategory, ItemError};
use crate::stats::{PseudoStatSynthesizer, StatsExtractor};
use crate::text::ItemBlock;
use crate::vocabulary::{Keywords, Vocabulary};
use common::Header;

/// Errors that can occur while parsing item text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("No parser recognises this item text")]
    NoMatchingParserFound { text: String },

    #[error("Item text is claimed by several parsers: {}", join_categories(.parsers))]
    MultipleMatchingParsersFound {
        text: String,
        parsers: Vec<ItemCategory>,
    },

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl ParseError {
    /// The item text that failed, if the failure was about recognition
    pub fn text(&self) -> Option<&str> {
        match self {
            ParseError::NoMatchingParserFound { text }
            | ParseError::MultipleMatchingParsersFound { text, .. } => Some(text),
            ParseError::Item(_) => None,
        }
    }
}

fn join_categories(categories: &[ItemCategory]) -> String {
    categories
        .iter()
        .map(ItemCategory::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One category's recognition and parsing, paired with its stats extractor
#[derive(Debug, Clone)]
struct CategoryParser {
    stats: StatsExtractor,
}

impl CategoryParser {
    fn category(&self) -> ItemCategory {
        self.stats.category()
    }

    fn can_parse(&self, block: &ItemBlock<'_>, keywords: &Keywords) -> bool {
        match self.category() {
            ItemCategory::Equippable => equippable::can_parse(block, keywords),
            ItemCategory::Flask => flask::can_parse(block, keywords),
            ItemCategory::Gem => gem::can_parse(block, keywords),
            ItemCategory::Map => map::can_parse(block, keywords),
            ItemCategory::Jewel => jewel::can_parse(block, keywords),
            ItemCategory::Organ => organ::can_parse(block, keywords),
            ItemCategory::Currency => currency::can_parse(block, keywords),
            ItemCategory::DivinationCard => divination::can_parse(block, keywords),
            ItemCategory::Fragment => fragment::can_parse(block, keywords),
        }
    }

    fn parse(&self, block: &ItemBlock<'_>, keywords: &Keywords) -> Result<Item, ParseError> {
        let header =
            Header::read(block, keywords).ok_or_else(|| ParseError::NoMatchingParserFound {
                text: block.text().to_string(),
            })?;
        let stats = &self.stats;

        let item = match self.category() {
            ItemCategory::Equippable => equippable::parse(block, keywords, header, stats)?,
            ItemCategory::Flask => flask::parse(block, keywords, header, stats)?,
            ItemCategory::Gem => gem::parse(block, keywords, header),
            ItemCategory::Map => map::parse(block, keywords, header, stats)?,
            ItemCategory::Jewel => jewel::parse(block, keywords, header, stats)?,
            ItemCategory::Organ => organ::parse(block, keywords, header, stats),
            ItemCategory::Currency => currency::parse(block, keywords, header),
            ItemCategory::DivinationCard => divination::parse(block, keywords, header),
            ItemCategory::Fragment => fragment::parse(block, header),
        };
        Ok(item)
    }
}

/// Parses copied tooltip text into [`Item`]s.
///
/// Keywords are resolved from the vocabulary once, here; the catalogs are
/// shared by every category. The parser holds no mutable state and can be
/// used from several threads at once.
#[derive(Debug, Clone)]
pub struct ItemParser {
    keywords: Keywords,
    parsers: Vec<CategoryParser>,
}

impl ItemParser {
    /// A parser for every [`ItemCategory`]
    pub fn new(
        vocabulary: &Vocabulary,
        catalog: Arc<dyn StatCatalog>,
        pseudo: Arc<dyn PseudoStatCatalog>,
    ) -> Self {
        Self::with_categories(vocabulary, catalog, pseudo, ItemCategory::ALL.iter().copied())
    }

    /// A parser for an explicit list of categories, asked in the given order
    pub fn with_categories(
        vocabulary: &Vocabulary,
        catalog: Arc<dyn StatCatalog>,
        pseudo: Arc<dyn PseudoStatCatalog>,
        categories: impl IntoIterator<Item = ItemCategory>,
    ) -> Self {
        let keywords = Keywords::resolve(vocabulary);
        let synthesizer = PseudoStatSynthesizer::new(pseudo);
        let parsers = categories
            .into_iter()
            .map(|category| CategoryParser {
                stats: StatsExtractor::new(
                    category,
                    &keywords,
                    Arc::clone(&catalog),
                    synthesizer.clone(),
                ),
            })
            .collect();

        Self { keywords, parsers }
    }

    /// Registered categories, in the order they are asked
    pub fn categories(&self) -> Vec<ItemCategory> {
        self.parsers.iter().map(CategoryParser::category).collect()
    }

    /// True if exactly one category recognises `text`
    pub fn is_parseable(&self, text: &str) -> bool {
        let block = ItemBlock::new(text);
        self.claims(&block).len() == 1
    }

    pub fn parse(&self, text: &str) -> Result<Item, ParseError> {
        let block = ItemBlock::new(text);
        let claims = self.claims(&block);

        match claims.as_slice() {
            [] => {
                tracing::debug!(lines = block.lines().len(), "no parser recognises item text");
                Err(ParseError::NoMatchingParserFound {
                    text: text.to_string(),
                })
            }
            [parser] => {
                tracing::debug!(category = %parser.category(), "parsing item");
                parser.parse(&block, &self.keywords)
            }
            _ => {
                let parsers: Vec<ItemCategory> = claims.iter().map(|p| p.category()).collect();
                tracing::warn!(parsers = %join_categories(&parsers), "item text is ambiguous");
                Err(ParseError::MultipleMatchingParsersFound {
                    text: text.to_string(),
                    parsers,
                })
            }
        }
    }

    fn claims(&self, block: &ItemBlock<'_>) -> Vec<&CategoryParser> {
        self.parsers
            .iter()
            .filter(|parser| parser.can_parse(block, &self.keywords))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PseudoIndex, StatData, StatIndex};
    use crate::item::{EquipmentCategory, Influence, ItemRarity, StatCategory};

    const HELMET: &str = "Rarity: Rare
Doom Mark
Hubris Circlet
--------
Quality: +20% (augmented)
Energy Shield: 150 (augmented)
--------
Requirements:
Level: 69
Int: 154
--------
Sockets: B-B-R G
--------
Item Level: 84
--------
+20 to maximum Life (implicit)
--------
+15(10-20) to maximum Life
+42% to Fire Resistance
+50 to maximum Energy Shield
Socketed Gems are Supported by Level 18 Nothing
--------
Corrupted
--------
Hunter Item
";

    const AXE: &str = "Rarity: Magic
Siege Axe of the Rainbow
--------
Two Handed Axe
Physical Damage: 80-150
Critical Strike Chance: 5.00%
Attacks per Second: 1.50
Weapon Range: 13
--------
Item Level: 70
--------
+42% to Fire Resistance
";

    const FLASK: &str = "Rarity: Magic
Seething Divine Life Flask of Staunching
--------
Quality: +20% (augmented)
Recovers 2400 Life over 0.30 Seconds
Consumes 15 of 45 Charges on use
Currently has 45 Charges
--------
Requirements:
Level: 60
--------
Item Level: 81
--------
Immunity to Bleeding and Corrupted Blood during Flask effect
--------
Right click to drink. Can only hold charges while in belt. Refills as you kill monsters.
";

    const GEM: &str = "Rarity: Gem
Vaal Grace
--------
Vaal, Aura, Spell, AoE
Level: 20 (Max)
--------
Requirements:
Level: 68
Dex: 151
--------
Quality: +20% (augmented)
--------
Experience: 121,461,578/242,923,156
--------
Corrupted
";

    const MAP: &str = "Rarity: Rare
Maelström Lair
Blighted Cemetery Map
--------
Map Tier: 16
Item Quantity: +85% (augmented)
Item Rarity: +45% (augmented)
Monster Pack Size: +30% (augmented)
Quality: +20% (augmented)
--------
Item Level: 83
--------
Monsters deal 110% extra Physical Damage as Fire
--------
Travel to this Map by using it in a personal Map Device. Maps can only be used once.
";

    const JEWEL: &str = "Rarity: Rare
Chimeric Spark
Cobalt Jewel
--------
Item Level: 78
--------
7% increased maximum Life
--------
Place into an allocated Jewel Socket on the Passive Skill Tree. Right click to remove from the Socket.
";

    const ORGAN: &str = "Rarity: Unique
Cyclops's Heart
--------
Item Level: 78
--------
Drops additional Rare Items
--------
Combine this with four other different samples in Tane's Laboratory.
";

    const CURRENCY: &str = "Rarity: Currency
Chaos Orb
--------
Stack Size: 7/10
--------
Reforges a rare item with new random modifiers
";

    const DIVINATION_CARD: &str = "Rarity: Divination Card
The Doctor
--------
Stack Size: 1/8
--------
Headhunter
Leather Belt
";

    const FRAGMENT: &str = "Rarity: Normal
Sacrifice at Dawn
--------
Can be used in a personal Map Device.
";

    const FIXTURES: &[(ItemCategory, &str)] = &[
        (ItemCategory::Equippable, HELMET),
        (ItemCategory::Equippable, AXE),
        (ItemCategory::Flask, FLASK),
        (ItemCategory::Gem, GEM),
        (ItemCategory::Map, MAP),
        (ItemCategory::Jewel, JEWEL),
        (ItemCategory::Organ, ORGAN),
        (ItemCategory::Currency, CURRENCY),
        (ItemCategory::DivinationCard, DIVINATION_CARD),
        (ItemCategory::Fragment, FRAGMENT),
    ];

    /// Claimed by both the map and the flask parser
    const AMBIGUOUS: &str = "Rarity: Magic
Impossible Thing
--------
Map Tier: 5
Consumes 10 of 40 Charges on use
";

    fn catalog() -> StatIndex {
        StatIndex::new([
            StatData::new("explicit.life", "+# to maximum Life", StatCategory::Explicit),
            StatData::new("implicit.life", "+# to maximum Life", StatCategory::Implicit),
            StatData::new("explicit.fire", "+#% to Fire Resistance", StatCategory::Explicit),
            StatData::new("explicit.es", "+# to maximum Energy Shield", StatCategory::Explicit),
            StatData::new(
                "explicit.es_local",
                "+# to maximum Energy Shield (Local)",
                StatCategory::Explicit,
            ),
            StatData::new("explicit.pct_life", "#% increased maximum Life", StatCategory::Explicit),
            StatData::new(
                "explicit.bleed_immunity",
                "Immunity to Bleeding and Corrupted Blood during Flask effect",
                StatCategory::Explicit,
            ),
            StatData::new(
                "explicit.map_fire",
                "Monsters deal #% extra Physical Damage as Fire",
                StatCategory::Explicit,
            ),
            StatData::new(
                "monster.rare_items",
                "Drops additional Rare Items",
                StatCategory::Monster,
            ),
        ])
    }

    fn parser_for(vocabulary: &Vocabulary, categories: Option<Vec<ItemCategory>>) -> ItemParser {
        let catalog = catalog();
        let pseudo = PseudoIndex::build(&catalog, &PseudoIndex::english_definitions()).unwrap();
        let catalog: Arc<dyn StatCatalog> = Arc::new(catalog);
        let pseudo: Arc<dyn PseudoStatCatalog> = Arc::new(pseudo);
        match categories {
            Some(categories) => {
                ItemParser::with_categories(vocabulary, catalog, pseudo, categories)
            }
            None => ItemParser::new(vocabulary, catalog, pseudo),
        }
    }

    fn parser() -> ItemParser {
        parser_for(&Vocabulary::english(), None)
    }

    #[test]
    fn test_default_registration() {
        assert_eq!(parser().categories(), ItemCategory::ALL.to_vec());
    }

    #[test]
    fn test_categories_are_exclusive() {
        let parser = parser();
        for (category, text) in FIXTURES {
            let block = ItemBlock::new(text);
            let claims: Vec<ItemCategory> =
                parser.claims(&block).into_iter().map(CategoryParser::category).collect();
            assert_eq!(claims, vec![*category], "claims for {} fixture", category);
            assert!(parser.is_parseable(text));
            assert_eq!(parser.parse(text).unwrap().category(), *category);
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = parser();
        for (_, text) in FIXTURES {
            assert_eq!(parser.parse(text).unwrap(), parser.parse(text).unwrap());
        }
    }

    #[test]
    fn test_minimal_rare_round_trip() {
        let text = "Rarity: Rare\nTestName\n--------\nQuality: +20% (augmented)";
        let Item::Equippable(item) = parser().parse(text).unwrap() else {
            panic!("expected an equippable item");
        };
        assert_eq!(item.header.name, "TestName");
        assert_eq!(item.header.type_line, "");
        assert_eq!(item.header.item_text, text);
        assert_eq!(item.rarity(), ItemRarity::Rare);
        assert_eq!(item.quality, 20);
        assert!(item.is_identified);
        assert!(!item.is_corrupted);
        assert!(item.stats.is_empty());
    }

    #[test]
    fn test_helmet() {
        let Item::Equippable(item) = parser().parse(HELMET).unwrap() else {
            panic!("expected an equippable item");
        };
        assert_eq!(item.header.display_name(), "Doom Mark Hubris Circlet");
        assert_eq!(item.item_level, 84);
        assert_eq!(item.quality, 20);
        assert_eq!(item.category, EquipmentCategory::Armour);
        assert_eq!(item.armour.and_then(|a| a.energy_shield), Some(150));
        assert!(item.weapon.is_none());
        assert_eq!(item.influences, vec![Influence::Hunter]);
        assert!(item.is_corrupted);
        assert!(item.is_identified);
        assert!(!item.is_synthesised);

        assert_eq!(item.sockets.groups.len(), 2);
        assert_eq!(item.sockets.groups[0].links(), 3);
        assert_eq!(item.sockets.groups[1].links(), 0);
        assert_eq!(item.sockets.count(), 3);

        let stats = &item.stats;
        assert_eq!(stats.implicit.len(), 1);
        assert_eq!(stats.implicit[0].id, "implicit.life");
        let explicit: Vec<&str> = stats.explicit.iter().map(|s| s.id.as_str()).collect();
        // The unknown support line is dropped; armour prefers the local ES stat
        assert_eq!(explicit, vec!["explicit.life", "explicit.fire", "explicit.es_local"]);
        assert_eq!(stats.explicit[0].text, "+15 to maximum Life");
        assert_eq!(stats.explicit[0].value(), Some(15.0));

        let life = stats
            .pseudo
            .iter()
            .find(|s| s.id == "pseudo.pseudo_total_life")
            .unwrap();
        assert_eq!(life.value(), Some(35.0));
    }

    #[test]
    fn test_weapon() {
        let Item::Equippable(item) = parser().parse(AXE).unwrap() else {
            panic!("expected an equippable item");
        };
        assert_eq!(item.rarity(), ItemRarity::Magic);
        assert_eq!(item.header.name, "Siege Axe of the Rainbow");
        assert_eq!(item.category, EquipmentCategory::Weapon);
        assert_eq!(item.weapon.as_ref().and_then(|w| w.physical_dps()), Some(172.5));
        assert!(item.sockets.is_empty());
        assert_eq!(item.stats.explicit[0].id, "explicit.fire");
    }

    #[test]
    fn test_flask() {
        let Item::Flask(item) = parser().parse(FLASK).unwrap() else {
            panic!("expected a flask");
        };
        assert_eq!(item.quality, 20);
        assert!(item.is_identified);
        assert_eq!(item.stats.explicit.len(), 1);
        assert_eq!(item.stats.explicit[0].id, "explicit.bleed_immunity");
        assert!(item.stats.explicit[0].values.is_empty());
    }

    #[test]
    fn test_gem() {
        let Item::Gem(item) = parser().parse(GEM).unwrap() else {
            panic!("expected a gem");
        };
        assert_eq!(item.rarity(), ItemRarity::Gem);
        assert_eq!(item.header.name, "Vaal Grace");
        assert_eq!(item.level, 20);
        assert_eq!(item.quality, 20);
        assert_eq!(item.experience_percent, 50.0);
        assert!(item.is_corrupted);
        assert!(item.is_vaal_version);
    }

    #[test]
    fn test_map() {
        let Item::Map(item) = parser().parse(MAP).unwrap() else {
            panic!("expected a map");
        };
        assert_eq!(item.tier, 16);
        assert_eq!(item.item_quantity, 85);
        assert_eq!(item.item_rarity, 45);
        assert_eq!(item.monster_pack_size, 30);
        assert_eq!(item.quality, 20);
        assert!(item.is_blighted);
        assert!(!item.is_corrupted);
        assert_eq!(item.stats.explicit[0].id, "explicit.map_fire");
        assert_eq!(item.stats.explicit[0].value(), Some(110.0));
    }

    #[test]
    fn test_jewel_and_organ() {
        let parser = parser();
        let Item::Jewel(jewel) = parser.parse(JEWEL).unwrap() else {
            panic!("expected a jewel");
        };
        assert_eq!(jewel.stats.explicit[0].id, "explicit.pct_life");
        assert!(!jewel.is_corrupted);

        let organ = parser.parse(ORGAN).unwrap();
        assert_eq!(organ.rarity(), ItemRarity::Unique);
        let stats = organ.stats().unwrap();
        assert_eq!(stats.monster.len(), 1);
        assert_eq!(stats.monster[0].id, "monster.rare_items");
    }

    #[test]
    fn test_stackables() {
        let parser = parser();
        let Item::Currency(currency) = parser.parse(CURRENCY).unwrap() else {
            panic!("expected currency");
        };
        assert_eq!(currency.header.name, "Chaos Orb");
        assert_eq!(currency.stack_size.map(|s| (s.current, s.max)), Some((7, 10)));

        let card = parser.parse(DIVINATION_CARD).unwrap();
        assert_eq!(card.rarity(), ItemRarity::DivinationCard);
        assert_eq!(card.display_name(), "The Doctor");

        let fragment = parser.parse(FRAGMENT).unwrap();
        assert_eq!(fragment.rarity(), ItemRarity::Normal);
        assert!(fragment.stats().is_none());
    }

    #[test]
    fn test_no_matching_parser() {
        let parser = parser();
        for text in ["", "Hello world", "Rarity: Legendary\nSomething"] {
            assert!(!parser.is_parseable(text));
            assert_eq!(
                parser.parse(text),
                Err(ParseError::NoMatchingParserFound {
                    text: text.to_string()
                })
            );
        }

        let empty = parser_for(&Vocabulary::english(), Some(Vec::new()));
        assert!(!empty.is_parseable(CURRENCY));
        assert!(matches!(
            empty.parse(CURRENCY),
            Err(ParseError::NoMatchingParserFound { .. })
        ));
    }

    #[test]
    fn test_multiple_matching_parsers() {
        let parser = parser();
        assert!(!parser.is_parseable(AMBIGUOUS));
        assert_eq!(
            parser.parse(AMBIGUOUS),
            Err(ParseError::MultipleMatchingParsersFound {
                text: AMBIGUOUS.to_string(),
                parsers: vec![ItemCategory::Flask, ItemCategory::Map],
            })
        );

        let pair = parser_for(
            &Vocabulary::english(),
            Some(vec![ItemCategory::Map, ItemCategory::Flask]),
        );
        let err = pair.parse(AMBIGUOUS).unwrap_err();
        assert!(matches!(
            &err,
            ParseError::MultipleMatchingParsersFound { parsers, .. }
                if parsers == &[ItemCategory::Map, ItemCategory::Flask]
        ));
        assert_eq!(err.text(), Some(AMBIGUOUS));
        assert_eq!(
            err.to_string(),
            "Item text is claimed by several parsers: map, flask"
        );
    }

    #[test]
    fn test_duplicate_registration_is_ambiguous() {
        let twice = parser_for(
            &Vocabulary::english(),
            Some(vec![ItemCategory::Currency, ItemCategory::Currency]),
        );
        assert!(matches!(
            twice.parse(CURRENCY),
            Err(ParseError::MultipleMatchingParsersFound { parsers, .. }) if parsers.len() == 2
        ));
    }

    #[test]
    fn test_localized_keywords() {
        let vocabulary = Vocabulary::from_entries([
            ("header.rarity", "Seltenheit: "),
            ("rarity.currency", "Währung"),
            ("property.stack_size", "Stapelgröße: "),
        ]);
        let parser = parser_for(&vocabulary, None);
        let item = parser
            .parse("Seltenheit: Währung\nChaos-Kugel\n--------\nStapelgröße: 3/10")
            .unwrap();
        assert_eq!(item.rarity(), ItemRarity::Currency);
        assert_eq!(item.name(), "Chaos-Kugel");
        assert!(!parser.is_parseable(CURRENCY));
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ItemParser>();
    }
}
