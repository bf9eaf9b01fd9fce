//! Dotted-key translation lookup.
//!
//! ```ignore
//! let resolver = TranslationResolver::bundled()?;
//! assert_eq!(resolver.resolve("tabs.home"), "Home");
//! assert_eq!(resolver.resolve("tabs.missing"), "tabs.missing");
//! ```

use super::dictionary::{DictionaryError, KEY_DELIMITER, TranslationDictionary, TranslationNode};

/// Resolves lookup keys against one dictionary.
///
/// Any key that does not end on a leaf string resolves to itself, so a
/// missing translation shows up as its raw key wherever it is displayed.
#[derive(Debug, Clone, Copy)]
pub struct TranslationResolver<'d> {
    dictionary: &'d TranslationDictionary,
}

impl<'d> TranslationResolver<'d> {
    pub fn new(dictionary: &'d TranslationDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'d TranslationDictionary {
        self.dictionary
    }

    /// Leaf string at `key`, or `None` when the path misses a segment,
    /// crosses a leaf, or stops on a branch.
    pub fn lookup(&self, key: &str) -> Option<&'d str> {
        let mut segments = key.split(KEY_DELIMITER);
        // `split` always yields at least one segment, even for "".
        let first = segments.next()?;
        let mut cursor: &TranslationNode = self.dictionary.root().get(first)?;
        for segment in segments {
            cursor = cursor.child(segment)?;
        }
        cursor.as_leaf()
    }

    /// Translation for `key`, or `key` itself when there is none.
    pub fn resolve<'k>(&self, key: &'k str) -> &'k str
    where
        'd: 'k,
    {
        match self.lookup(key) {
            Some(text) => text,
            None => {
                tracing::debug!(key, "translation missing, falling back to key");
                key
            }
        }
    }

    /// Owned variant of [`resolve`](Self::resolve).
    pub fn translate(&self, key: &str) -> String {
        self.resolve(key).to_string()
    }

    /// Every leaf key of the underlying dictionary.
    pub fn keys(&self) -> Vec<String> {
        self.dictionary.leaf_keys()
    }
}

impl TranslationResolver<'static> {
    /// Resolver over the bundled dictionary.
    pub fn bundled() -> Result<Self, DictionaryError> {
        TranslationDictionary::bundled().map(Self::new)
    }
}
