//! Qt Linguist `.ts` catalogs: model, reader, writer and the lookup contract.
//!
//! ## Module Structure
//!
//! - `model`: Catalog / Context / Message types and the key index
//! - `reader`: XML parsing with line tracking
//! - `writer`: canonical lupdate-style serialization
//! - `lookup`: translation lookup with fallback to the source text
//! - `plural`: per-language numerus rules
//! - `placeholders`: `%1` / `%n` extraction and substitution
//! - `stats`: completion statistics
//! - `scanner`: catalog discovery on disk

pub mod lookup;
pub mod model;
pub mod placeholders;
pub mod plural;
pub mod reader;
pub mod scanner;
pub mod stats;
pub mod writer;

pub use lookup::{FallbackReason, Lookup, LookupOutcome};
pub use model::{
    Catalog, Context, Message, MessageKey, SourceRef, Translation, TranslationStatus,
    TranslationValue,
};
pub use plural::PluralRule;
pub use reader::{parse_catalog_file, parse_catalog_str};
pub use scanner::scan_catalog_files;
pub use stats::CatalogStats;
pub use writer::{catalog_to_string, write_catalog_file};
