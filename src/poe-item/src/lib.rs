//! # poe-item
//!
//! Parsing of Path of Exile item tooltip text copied to the clipboard.
//!
//! This library provides functionality to:
//! - Decide whether a block of copied text is a recognisable item
//! - Parse that text into a typed [`Item`] (gear, flasks, gems, maps, jewels,
//!   organs, currency, divination cards and fragments)
//! - Resolve and categorize stat lines through a [`StatCatalog`]
//! - Synthesize pseudo stats (total resistances, total life, ...)
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use poe_item::{ItemParser, PseudoIndex, StatIndex, Vocabulary};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(StatIndex::load("stats.json")?);
//! let pseudo = Arc::new(PseudoIndex::build(&catalog, &PseudoIndex::english_definitions())?);
//! let parser = ItemParser::new(&Vocabulary::english(), catalog, pseudo);
//!
//! let text = std::fs::read_to_string("item.txt")?;
//! if parser.is_parseable(&text) {
//!     let item = parser.parse(&text)?;
//!     println!("{} ({})", item.display_name(), item.rarity());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod item;
pub mod parser;
pub mod stats;
pub mod text;
pub mod vocabulary;

#[doc(inline)]
pub use catalog::{
    CatalogError, PseudoDefinition, PseudoIndex, PseudoPattern, PseudoStatCatalog, StatCatalog,
    StatData, StatIndex,
};
#[doc(inline)]
pub use item::{
    ArmourValues, CurrencyItem, DamageRange, DivinationCardItem, EquipmentCategory,
    EquippableItem, FlaskItem, FragmentItem, GemItem, Influence, Item, ItemCategory, ItemError,
    ItemHeader, ItemRarity, ItemSockets, ItemStat, ItemStats, JewelItem, MapItem, OrganItem,
    Socket, SocketColor, SocketGroup, StackSize, StatCategory, WeaponValues,
};
#[doc(inline)]
pub use parser::{ItemParser, ParseError};
#[doc(inline)]
pub use stats::PseudoStatSynthesizer;
#[doc(inline)]
pub use vocabulary::{Keywords, Term, Vocabulary, VocabularyError};
