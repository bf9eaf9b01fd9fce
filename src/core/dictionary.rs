//! Nested translation dictionary.
//!
//! A dictionary is a tree of [`TranslationNode`]s built once from a JSON
//! document and never mutated afterwards. Objects become branches, strings
//! become leaves, and arrays become branches keyed by element index so that
//! paths like `faq.items.0.question` address into them.

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use serde_json::Value;
use thiserror::Error;

/// Separator between the segments of a lookup key.
pub const KEY_DELIMITER: char = '.';

/// Locale of the dictionary bundled into the binary.
pub const BUNDLED_LOCALE: &str = "it";

const BUNDLED_JSON: &str = include_str!("../../locales/it.json");

static BUNDLED: LazyLock<Result<TranslationDictionary, DictionaryError>> = LazyLock::new(|| {
    TranslationDictionary::from_json_str(BUNDLED_JSON).map(|loaded| loaded.dictionary)
});

/// Errors raised while building a dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The document is not valid JSON.
    #[error("invalid translation JSON: {0}")]
    Parse(String),
    /// The document parsed, but its root is not an object.
    #[error("translation root must be an object, found {0}")]
    InvalidRoot(&'static str),
}

/// A single node of the dictionary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    Branch(BTreeMap<String, TranslationNode>),
    Leaf(String),
}

impl TranslationNode {
    /// Child reached by `segment`, if this node is a branch that has it.
    pub fn child(&self, segment: &str) -> Option<&TranslationNode> {
        match self {
            TranslationNode::Branch(children) => children.get(segment),
            TranslationNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TranslationNode::Leaf(text) => Some(text),
            TranslationNode::Branch(_) => None,
        }
    }
}

/// An entry of the source document that has no translation meaning and was
/// left out of the dictionary (numbers, booleans, null).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Dotted path of the skipped value.
    pub key: String,
    /// JSON kind of the skipped value.
    pub kind: &'static str,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' holds a {} and is not a translation", self.key, self.kind)
    }
}

/// A dictionary together with the entries dropped while building it.
#[derive(Debug, Clone)]
pub struct LoadedDictionary {
    pub dictionary: TranslationDictionary,
    pub skipped: Vec<SkippedEntry>,
}

/// Immutable nested mapping from key segments to branches or leaf strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDictionary {
    root: BTreeMap<String, TranslationNode>,
}

impl TranslationDictionary {
    /// Dictionary with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self {
            root: BTreeMap::new(),
        }
    }

    /// The dictionary bundled with the crate, parsed on first use.
    pub fn bundled() -> Result<&'static TranslationDictionary, DictionaryError> {
        BUNDLED.as_ref().map_err(Clone::clone)
    }

    pub fn from_json_str(content: &str) -> Result<LoadedDictionary, DictionaryError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| DictionaryError::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<LoadedDictionary, DictionaryError> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(DictionaryError::InvalidRoot(json_kind(&other))),
        };

        let mut skipped = Vec::new();
        let root = map
            .into_iter()
            .filter_map(|(key, val)| {
                let node = build_node(val, &key, &mut skipped)?;
                Some((key, node))
            })
            .collect();

        for entry in &skipped {
            tracing::debug!("skipping translation entry: {}", entry);
        }

        Ok(LoadedDictionary {
            dictionary: Self { root },
            skipped,
        })
    }

    /// Top-level entries, keyed by their first segment.
    pub fn root(&self) -> &BTreeMap<String, TranslationNode> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Every leaf as a dotted key, in sorted order.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for (segment, node) in &self.root {
            collect_leaf_keys(node, segment.clone(), &mut keys);
        }
        keys
    }
}

impl Default for TranslationDictionary {
    fn default() -> Self {
        Self::empty()
    }
}

fn build_node(
    value: Value,
    path: &str,
    skipped: &mut Vec<SkippedEntry>,
) -> Option<TranslationNode> {
    match value {
        Value::String(text) => Some(TranslationNode::Leaf(text)),
        Value::Object(map) => {
            let children = map
                .into_iter()
                .filter_map(|(key, val)| {
                    let child_path = join_key(path, &key);
                    let node = build_node(val, &child_path, skipped)?;
                    Some((key, node))
                })
                .collect();
            Some(TranslationNode::Branch(children))
        }
        Value::Array(items) => {
            let children = items
                .into_iter()
                .enumerate()
                .filter_map(|(index, val)| {
                    let segment = index.to_string();
                    let child_path = join_key(path, &segment);
                    let node = build_node(val, &child_path, skipped)?;
                    Some((segment, node))
                })
                .collect();
            Some(TranslationNode::Branch(children))
        }
        other => {
            skipped.push(SkippedEntry {
                key: path.to_string(),
                kind: json_kind(&other),
            });
            None
        }
    }
}

fn collect_leaf_keys(node: &TranslationNode, prefix: String, keys: &mut Vec<String>) {
    match node {
        TranslationNode::Leaf(_) => keys.push(prefix),
        TranslationNode::Branch(children) => {
            for (segment, child) in children {
                collect_leaf_keys(child, join_key(&prefix, segment), keys);
            }
        }
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    format!("{}{}{}", prefix, KEY_DELIMITER, segment)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
