//! Translation core: the nested dictionary, the dotted-key resolver, and
//! locale file parsing.
//!
//! ## Module Structure
//!
//! - `dictionary`: TranslationDictionary and its node tree
//! - `resolver`: TranslationResolver (fallback-to-key lookup)
//! - `parsers`: locale file loading from disk

pub mod dictionary;
pub mod parsers;
pub mod resolver;

pub use dictionary::{
    BUNDLED_LOCALE, DictionaryError, KEY_DELIMITER, LoadedDictionary, SkippedEntry,
    TranslationDictionary, TranslationNode,
};
pub use resolver::TranslationResolver;
