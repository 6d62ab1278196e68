//! Error types for tree operations.

use thiserror::Error;

use crate::tree::Key;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the tree.
///
/// `CapacityExceeded`, `DuplicateKey` and `NotFound` are expected conditions:
/// the tree is left untouched and the caller decides what to do. `Corrupted`
/// means the ordering invariant no longer holds and the tree must not be
/// trusted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree already holds `capacity` items.
    #[error("Tree is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// An item with the same (name, kind) key is already stored.
    #[error("Attempted to add duplicate item {0}")]
    DuplicateKey(Key),

    /// No item with this key is stored.
    #[error("Item {0} not found")]
    NotFound(Key),

    /// Insertion descent met a key that is neither left nor right of an
    /// existing node.
    ///
    /// This indicates a bug - the duplicate check should make it unreachable.
    #[error("Location error during insert: {0}")]
    Corrupted(String),
}
