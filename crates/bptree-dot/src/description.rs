//! Input descriptions of B+ trees.
//!
//! The input format accepts two shapes for every block: a bare list of keys
//! (a leaf) or a mapping with optional `keys` and `children`. [`BlockInput`]
//! captures exactly what was written; [`BlockInput::normalize`] turns it into
//! the single canonical [`BlockDescription`] the tree model consumes.

use crate::error::{Result, TreeError};
use crate::tree::BlockAddress;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// A single key as drawn inside a block.
///
/// Any scalar is accepted and kept in its textual form; `null` becomes an
/// empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar key (string, number or boolean)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Key, E> {
        // Debug keeps the fractional part of whole floats: `1.0`, not `1`.
        Ok(Key(format!("{v:?}")))
    }

    fn visit_char<E: de::Error>(self, v: char) -> std::result::Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Key, E> {
        Ok(Key(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Key, E> {
        Ok(Key::default())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Key, E> {
        Ok(Key::default())
    }
}

/// A block exactly as written in the input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BlockInput {
    /// Shorthand for a leaf: `[k1, k2]`.
    Keys(Vec<Key>),
    /// Full form: `{keys: [...], children: [...]}`.
    Block(BlockFields),
}

/// Fields of the full block form. A `null` child is an omitted block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockFields {
    #[serde(default)]
    pub keys: Option<Vec<Key>>,
    #[serde(default)]
    pub children: Option<Vec<Option<BlockInput>>>,
}

impl BlockInput {
    /// Normalize this block and everything below it.
    ///
    /// `address` is only used to point at the offending block in errors.
    pub fn normalize(self, address: &BlockAddress) -> Result<BlockDescription> {
        match self {
            BlockInput::Keys(keys) => Ok(BlockDescription::leaf(keys)),
            BlockInput::Block(BlockFields {
                keys: None,
                children: None,
            }) => Err(TreeError::MalformedBlock {
                address: address.clone(),
                reason: "expected a list of keys or a mapping with `keys` or `children`"
                    .to_string(),
            }),
            BlockInput::Block(BlockFields { keys, children }) => {
                let children = children
                    .unwrap_or_default()
                    .into_iter()
                    .enumerate()
                    .map(|(i, child)| {
                        child
                            .map(|c| c.normalize(&address.with_child(i)))
                            .transpose()
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(BlockDescription {
                    keys: keys.unwrap_or_default(),
                    children,
                })
            }
        }
    }
}

/// Canonical description of one block and its subtree.
///
/// `None` entries in `children` are blocks deliberately left out of the
/// drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDescription {
    pub keys: Vec<Key>,
    pub children: Vec<Option<BlockDescription>>,
}

impl BlockDescription {
    pub fn leaf<K: Into<Key>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            children: Vec::new(),
        }
    }

    pub fn with_children<K: Into<Key>>(
        keys: impl IntoIterator<Item = K>,
        children: Vec<Option<BlockDescription>>,
    ) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            children,
        }
    }
}

/// Top-level input document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeDocument {
    pub keys_per_block: usize,
    #[serde(default)]
    pub tree: Option<BlockInput>,
}

impl TreeDocument {
    /// Normalize the root block, if any.
    pub fn into_root(self) -> Result<Option<BlockDescription>> {
        self.tree
            .map(|root| root.normalize(&BlockAddress::root()))
            .transpose()
    }
}
