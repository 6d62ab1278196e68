//! Stored records and their composite key.

use std::cmp::Ordering;
use std::fmt;

use crate::common::config::NAME_COLUMN_WIDTH;

/// Composite key: a pet's name, then its kind.
///
/// Keys order by `name` first and fall back to `kind` only when the names
/// match. Both fields compare byte-wise, so `"Zed"` sorts before `"abe"`.
///
/// # Example
/// ```
/// use petclub_tree::Key;
///
/// assert!(Key::new("Bo", "dog") < Key::new("Bo", "emu"));
/// assert!(Key::new("Al", "zebu") < Key::new("Bo", "ant"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    // Field order matters: the derived `Ord` compares `name` before `kind`.
    name: String,
    kind: String,
}

impl Key {
    /// Create a key from a name and a kind.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Primary field.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Secondary field.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.kind)
    }
}

/// A record stored in the tree.
///
/// Only the [`Key`] takes part in ordering and equality checks made by the
/// tree; `payload` is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<P = ()> {
    key: Key,
    /// Data attached to the pet that the tree never inspects.
    pub payload: P,
}

impl Item<()> {
    /// Create an item with no payload.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::with_payload(name, kind, ())
    }
}

impl<P> Item<P> {
    /// Create an item carrying `payload`.
    pub fn with_payload(name: impl Into<String>, kind: impl Into<String>, payload: P) -> Self {
        Self {
            key: Key::new(name, kind),
            payload,
        }
    }

    #[inline]
    pub fn key(&self) -> &Key {
        &self.key
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.key.name()
    }

    #[inline]
    pub fn kind(&self) -> &str {
        self.key.kind()
    }

    /// Position of `self` relative to `other` under the composite key order.
    #[inline]
    pub fn cmp_key(&self, other: &Item<P>) -> Ordering {
        self.key.cmp(&other.key)
    }

    /// Split the item back into its key and payload.
    pub fn into_parts(self) -> (Key, P) {
        (self.key, self.payload)
    }
}

impl<P> fmt::Display for Item<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pet: {:<width$}  Kind: {}",
            self.name(),
            self.kind(),
            width = NAME_COLUMN_WIDTH
        )
    }
}
