//! A tree behind one exclusive lock.

use parking_lot::{Mutex, MutexGuard};

use crate::common::Result;
use crate::tree::bst::Tree;
use crate::tree::item::{Item, Key};

/// A [`Tree`] that can be shared between threads.
///
/// All operations, reads included, take the same exclusive lock: a traversal
/// walks node links that a concurrent delete would invalidate, so readers and
/// writers are never allowed to overlap.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use petclub_tree::{Item, Key, SharedTree};
///
/// let tree: Arc<SharedTree> = Arc::new(SharedTree::with_capacity(8));
///
/// let handles: Vec<_> = ["Rex", "Tom"]
///     .into_iter()
///     .map(|name| {
///         let tree = Arc::clone(&tree);
///         thread::spawn(move || tree.insert(Item::new(name, "dog")))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap()?;
/// }
///
/// assert_eq!(tree.count(), 2);
/// assert!(tree.contains(&Key::new("Tom", "dog")));
/// # Ok::<(), petclub_tree::Error>(())
/// ```
#[derive(Debug)]
pub struct SharedTree<P = ()> {
    inner: Mutex<Tree<P>>,
}

impl<P> SharedTree<P> {
    /// Create an empty shared tree with the default capacity.
    pub fn new() -> Self {
        Self::from(Tree::new())
    }

    /// Create an empty shared tree holding at most `capacity` items.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Tree::with_capacity(capacity))
    }

    /// Lock the tree for a compound operation.
    ///
    /// Other callers block until the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, Tree<P>> {
        self.inner.lock()
    }

    /// Consume the wrapper and return the tree.
    pub fn into_inner(self) -> Tree<P> {
        self.inner.into_inner()
    }

    /// See [`Tree::insert`].
    pub fn insert(&self, item: Item<P>) -> Result<()> {
        self.inner.lock().insert(item)
    }

    /// See [`Tree::contains`].
    pub fn contains(&self, key: &Key) -> bool {
        self.inner.lock().contains(key)
    }

    /// See [`Tree::delete`].
    pub fn delete(&self, key: &Key) -> bool {
        self.inner.lock().delete(key)
    }

    /// See [`Tree::remove`].
    pub fn remove(&self, key: &Key) -> Option<Item<P>> {
        self.inner.lock().remove(key)
    }

    /// See [`Tree::traverse`].
    ///
    /// The lock is held for the whole walk. `visit` must not call back into
    /// this `SharedTree`, or it will deadlock.
    pub fn traverse<F>(&self, visit: F)
    where
        F: FnMut(&Item<P>),
    {
        self.inner.lock().traverse(visit)
    }

    /// See [`Tree::clear`].
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }
}

impl<P: Clone> SharedTree<P> {
    /// A copy of the stored item with this key.
    ///
    /// Returns an owned item since a reference cannot outlive the lock.
    pub fn get_cloned(&self, key: &Key) -> Option<Item<P>> {
        self.inner.lock().get(key).cloned()
    }
}

impl<P> Default for SharedTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> From<Tree<P>> for SharedTree<P> {
    fn from(tree: Tree<P>) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }
}
