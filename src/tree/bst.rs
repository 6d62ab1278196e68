//! The tree itself: bookkeeping plus the public operations.

use tracing::{debug, instrument, warn};

use crate::common::config::MAX_ITEMS;
use crate::common::{Error, Result};
use crate::tree::item::{Item, Key};
use crate::tree::iter::Iter;
use crate::tree::locate::{locate, locate_slot, Step};
use crate::tree::node::{self, Link, Node};

/// An unbalanced binary search tree of [`Item`]s, bounded by a fixed capacity.
///
/// Items are ordered by their composite [`Key`] (name, then kind). No two
/// items with the same key coexist: inserting a duplicate is rejected rather
/// than overwriting the stored item.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ Tree { root, size, capacity }                │
/// │            │                                 │
/// │            ▼                                 │
/// │          (M,cat)            left  < node     │
/// │          /     \            right > node     │
/// │     (D,dog)   (T,bird)                       │
/// │      /   \      /                            │
/// │ (B,fish)(F,frog)(Q,cat)                      │
/// └──────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use petclub_tree::{Item, Key, Tree};
///
/// let mut tree = Tree::new();
/// tree.insert(Item::new("Rex", "dog"))?;
/// tree.insert(Item::new("Tom", "cat"))?;
///
/// assert!(tree.contains(&Key::new("Rex", "dog")));
/// assert_eq!(tree.count(), 2);
///
/// let mut names = Vec::new();
/// tree.traverse(|item| names.push(item.name().to_string()));
/// assert_eq!(names, ["Rex", "Tom"]);
/// # Ok::<(), petclub_tree::Error>(())
/// ```
///
/// # Thread Safety
/// `Tree` does no locking. Wrap it in a [`SharedTree`](crate::SharedTree)
/// (or another exclusive lock) to share it between threads.
#[derive(Debug)]
pub struct Tree<P = ()> {
    root: Link<P>,
    /// Number of nodes reachable from `root`.
    size: usize,
    capacity: usize,
}

impl<P> Tree<P> {
    /// Create an empty tree holding at most [`MAX_ITEMS`] items.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ITEMS)
    }

    /// Create an empty tree holding at most `capacity` items.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            root: None,
            size: 0,
            capacity,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// True iff the tree holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True iff the tree holds `capacity` items.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Number of items stored.
    #[inline]
    pub fn count(&self) -> usize {
        self.size
    }

    /// Maximum number of items the tree accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True iff an item with this key is stored.
    pub fn contains(&self, key: &Key) -> bool {
        locate(&self.root, key).found()
    }

    /// The stored item with this key.
    pub fn get(&self, key: &Key) -> Option<&Item<P>> {
        locate(&self.root, key).node.map(|node| &node.item)
    }

    /// The item whose node is the parent of the node holding `key`.
    ///
    /// Returns `None` if `key` is absent or is stored at the root.
    pub fn parent_of(&self, key: &Key) -> Option<&Item<P>> {
        locate(&self.root, key).parent.map(|node| &node.item)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Add `item` to the tree.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the tree is full
    /// - `Error::DuplicateKey` if an item with the same key is stored
    /// - `Error::Corrupted` if the descent finds the tree out of order
    ///
    /// The tree is unchanged whenever an error is returned.
    #[instrument(level = "trace", skip(self, item), fields(key = %item.key()))]
    pub fn insert(&mut self, item: Item<P>) -> Result<()> {
        if self.is_full() {
            warn!(capacity = self.capacity, "Tree is full");
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.contains(item.key()) {
            warn!("Attempted to add duplicate item");
            return Err(Error::DuplicateKey(item.key().clone()));
        }

        // Allocate before touching the structure so nothing is left half-built.
        let new_node = Node::new(item);
        self.attach(new_node)?;
        self.size += 1;

        debug!(count = self.size, "item added");
        Ok(())
    }

    /// Walk down from the root and hang `new_node` in the first empty slot.
    fn attach(&mut self, new_node: Box<Node<P>>) -> Result<()> {
        let mut slot = &mut self.root;

        loop {
            let step = slot.as_deref().map(|node| Step::toward(new_node.key(), node));
            match (step, slot) {
                (Some(Step::Left), Some(node)) => slot = &mut node.left,
                (Some(Step::Right), Some(node)) => slot = &mut node.right,
                (Some(Step::Here), Some(node)) => {
                    // The duplicate check in `insert` makes this unreachable
                    // unless the ordering has been broken.
                    return Err(Error::Corrupted(format!(
                        "{} collides with stored {}",
                        new_node.key(),
                        node.key()
                    )));
                }
                (_, empty) => {
                    *empty = Some(new_node);
                    return Ok(());
                }
            }
        }
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Remove the item with this key.
    ///
    /// Returns `false` and leaves the tree unchanged if the key is absent.
    pub fn delete(&mut self, key: &Key) -> bool {
        self.remove(key).is_some()
    }

    /// Remove and return the item with this key.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, key: &Key) -> Option<Item<P>> {
        let slot = locate_slot(&mut self.root, key);
        let removed = node::splice_out(slot)?;
        self.size -= 1;

        debug!(count = self.size, "item removed");
        Some(removed.item)
    }

    /// Remove and return the item with this key.
    ///
    /// # Errors
    /// - `Error::NotFound` if the key is absent
    pub fn try_remove(&mut self, key: &Key) -> Result<Item<P>> {
        self.remove(key).ok_or_else(|| Error::NotFound(key.clone()))
    }

    /// Release every node and reset to the empty state.
    ///
    /// Safe to call on an empty tree.
    pub fn clear(&mut self) {
        let released = node::release(self.root.take());
        self.size = 0;

        if released > 0 {
            debug!(released, "tree cleared");
        }
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Call `visit` on every item in ascending key order.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&Item<P>),
    {
        for item in self.iter() {
            visit(item);
        }
    }

    /// In-order iterator over the stored items.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(self.root.as_deref(), self.size)
    }

    /// Verify the ordering and bookkeeping invariants.
    ///
    /// # Errors
    /// - `Error::Corrupted` if an in-order walk is not strictly ascending, or
    ///   if the number of reachable items differs from [`count`](Self::count)
    pub fn check_invariants(&self) -> Result<()> {
        let mut previous: Option<&Key> = None;
        let mut reachable = 0usize;

        for item in self.iter() {
            if let Some(prev) = previous {
                if prev >= item.key() {
                    return Err(Error::Corrupted(format!(
                        "{} is not less than {}",
                        prev,
                        item.key()
                    )));
                }
            }
            previous = Some(item.key());
            reachable += 1;
        }

        if reachable != self.size {
            return Err(Error::Corrupted(format!(
                "count is {} but {} items are reachable",
                self.size, reachable
            )));
        }
        Ok(())
    }
}

impl<P> Default for Tree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Drop for Tree<P> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

impl<'a, P> IntoIterator for &'a Tree<P> {
    type Item = &'a Item<P>;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, kind: &str) -> Key {
        Key::new(name, kind)
    }

    fn keys<P>(tree: &Tree<P>) -> Vec<(String, String)> {
        tree.iter()
            .map(|i| (i.name().to_string(), i.kind().to_string()))
            .collect()
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree: Tree = Tree::new();
        assert!(tree.is_empty());
        assert!(!tree.is_full());
        assert_eq!(tree.count(), 0);
        assert_eq!(tree.capacity(), MAX_ITEMS);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_zero_capacity_panics() {
        let _tree: Tree = Tree::with_capacity(0);
    }

    #[test]
    fn test_insert_into_empty_becomes_root() {
        let mut tree = Tree::new();
        tree.insert(Item::new("Rex", "dog")).unwrap();

        assert!(!tree.is_empty());
        assert_eq!(tree.count(), 1);
        assert!(tree.parent_of(&key("Rex", "dog")).is_none());
        assert_eq!(tree.get(&key("Rex", "dog")).unwrap().name(), "Rex");
    }

    #[test]
    fn test_insert_places_by_key() {
        let mut tree = Tree::new();
        for (name, kind) in [("M", "cat"), ("D", "dog"), ("T", "bird"), ("M", "emu")] {
            tree.insert(Item::new(name, kind)).unwrap();
        }

        assert_eq!(tree.parent_of(&key("D", "dog")).unwrap().name(), "M");
        assert_eq!(tree.parent_of(&key("T", "bird")).unwrap().name(), "M");
        // (M, emu) sorts right of (M, cat) and left of (T, bird).
        assert_eq!(tree.parent_of(&key("M", "emu")).unwrap().name(), "T");
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut tree = Tree::new();
        tree.insert(Item::with_payload("Rex", "dog", 1)).unwrap();

        let err = tree.insert(Item::with_payload("Rex", "dog", 2)).unwrap_err();
        assert_eq!(err, Error::DuplicateKey(key("Rex", "dog")));
        assert_eq!(tree.count(), 1);
        // The original payload is kept.
        assert_eq!(tree.get(&key("Rex", "dog")).unwrap().payload, 1);
    }

    #[test]
    fn test_same_name_different_kind_allowed() {
        let mut tree = Tree::new();
        tree.insert(Item::new("Rex", "dog")).unwrap();
        tree.insert(Item::new("Rex", "cat")).unwrap();
        assert_eq!(tree.count(), 2);
        assert_eq!(
            keys(&tree),
            vec![
                ("Rex".to_string(), "cat".to_string()),
                ("Rex".to_string(), "dog".to_string())
            ]
        );
    }

    #[test]
    fn test_insert_when_full() {
        let mut tree = Tree::with_capacity(2);
        tree.insert(Item::new("A", "cat")).unwrap();
        tree.insert(Item::new("B", "cat")).unwrap();
        assert!(tree.is_full());

        let err = tree.insert(Item::new("C", "cat")).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { capacity: 2 });
        assert_eq!(tree.count(), 2);
        assert!(!tree.contains(&key("C", "cat")));
    }

    #[test]
    fn test_full_check_precedes_duplicate_check() {
        let mut tree = Tree::with_capacity(1);
        tree.insert(Item::new("A", "cat")).unwrap();
        assert_eq!(
            tree.insert(Item::new("A", "cat")),
            Err(Error::CapacityExceeded { capacity: 1 })
        );
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = Tree::new();
        assert!(!tree.delete(&key("A", "cat")));

        tree.insert(Item::new("A", "cat")).unwrap();
        assert!(!tree.delete(&key("A", "dog")));
        assert_eq!(tree.count(), 1);
        assert_eq!(
            tree.try_remove(&key("B", "cat")),
            Err(Error::NotFound(key("B", "cat")))
        );
    }

    #[test]
    fn test_delete_leaf_and_single_child() {
        let mut tree = Tree::new();
        for name in ["M", "D", "B"] {
            tree.insert(Item::new(name, "cat")).unwrap();
        }

        // D has only a left child.
        assert!(tree.delete(&key("D", "cat")));
        assert_eq!(tree.parent_of(&key("B", "cat")).unwrap().name(), "M");

        // B is now a leaf.
        assert!(tree.delete(&key("B", "cat")));
        assert_eq!(tree.count(), 1);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_delete_root_with_two_children() {
        let mut tree = Tree::new();
        for (name, kind) in [
            ("M", "cat"),
            ("D", "dog"),
            ("T", "bird"),
            ("B", "fish"),
            ("F", "frog"),
            ("Q", "cat"),
        ] {
            tree.insert(Item::new(name, kind)).unwrap();
        }

        let removed = tree.remove(&key("M", "cat")).unwrap();
        assert_eq!(removed.name(), "M");
        assert_eq!(tree.count(), 5);

        // D's subtree moves up, T hangs off F (M's predecessor).
        assert!(tree.parent_of(&key("D", "dog")).is_none());
        assert_eq!(tree.parent_of(&key("T", "bird")).unwrap().name(), "F");
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_returns_payload() {
        let mut tree = Tree::new();
        tree.insert(Item::with_payload("Tom", "cat", "tabby")).unwrap();
        let item = tree.try_remove(&key("Tom", "cat")).unwrap();
        assert_eq!(item.payload, "tabby");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut tree = Tree::new();
        tree.clear();
        assert!(tree.is_empty());

        for name in ["C", "A", "B"] {
            tree.insert(Item::new(name, "cat")).unwrap();
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.count(), 0);
        assert!(!tree.contains(&key("A", "cat")));

        // Usable again after clearing.
        tree.insert(Item::new("A", "cat")).unwrap();
        assert_eq!(tree.count(), 1);
    }

    #[test]
    fn test_traverse_empty_never_calls_visitor() {
        let tree: Tree = Tree::new();
        let mut calls = 0;
        tree.traverse(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_traverse_visits_in_order() {
        let mut tree = Tree::new();
        for name in ["E", "B", "G", "A", "C"] {
            tree.insert(Item::new(name, "cat")).unwrap();
        }

        let mut seen = Vec::new();
        tree.traverse(|item| seen.push(item.name().to_string()));
        assert_eq!(seen, vec!["A", "B", "C", "E", "G"]);

        let via_ref: Vec<_> = (&tree).into_iter().map(|i| i.name()).collect();
        assert_eq!(via_ref, vec!["A", "B", "C", "E", "G"]);
    }

    #[test]
    fn test_check_invariants_detects_bad_count() {
        let mut tree = Tree::new();
        tree.insert(Item::new("A", "cat")).unwrap();
        tree.size = 2;
        assert!(matches!(tree.check_invariants(), Err(Error::Corrupted(_))));
        tree.size = 1;
    }

    #[test]
    fn test_attach_reports_corruption() {
        let mut tree = Tree::new();
        tree.insert(Item::new("A", "cat")).unwrap();

        // Bypass the duplicate check to hit the descent guard directly.
        let err = tree.attach(Node::new(Item::new("A", "cat"))).unwrap_err();
        assert!(matches!(err, Error::Corrupted(_)));
        assert_eq!(tree.count(), 1);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_ascending_inserts_build_chain() {
        let mut tree = Tree::with_capacity(2_000);
        for i in 0..2_000u32 {
            tree.insert(Item::new(format!("{:04}", i), "cat")).unwrap();
        }
        assert!(tree.is_full());
        assert_eq!(tree.parent_of(&key("1999", "cat")).unwrap().name(), "1998");
        tree.check_invariants().unwrap();
    }
}
