//! Key-directed search from the root.
//!
//! Every public operation starts here: membership and duplicate checks use
//! [`locate`], structural edits use [`locate_slot`]. Both take their
//! left/right decisions from [`Step::toward`], so they always agree on where
//! a key lives.

use std::cmp::Ordering;

use crate::tree::item::Key;
use crate::tree::node::{Link, Node};

/// Direction to take from a node when searching for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Target sorts before the node.
    Left,
    /// Target sorts after the node.
    Right,
    /// Target is the node's key.
    Here,
}

impl Step {
    #[inline]
    pub(crate) fn toward<P>(target: &Key, node: &Node<P>) -> Self {
        match target.cmp(node.key()) {
            Ordering::Less => Step::Left,
            Ordering::Greater => Step::Right,
            Ordering::Equal => Step::Here,
        }
    }
}

/// Result of [`locate`]: the matching node and its parent.
#[derive(Debug)]
pub(crate) struct Location<'a, P> {
    /// The node holding the target key, if any.
    pub(crate) node: Option<&'a Node<P>>,
    /// Parent of `node`; `None` when `node` is the root or was not found.
    pub(crate) parent: Option<&'a Node<P>>,
}

impl<P> Location<'_, P> {
    #[inline]
    pub(crate) fn found(&self) -> bool {
        self.node.is_some()
    }
}

/// Find the node holding `key` along with its parent.
pub(crate) fn locate<'a, P>(root: &'a Link<P>, key: &Key) -> Location<'a, P> {
    let mut parent = None;
    let mut child = root.as_deref();

    while let Some(node) = child {
        match Step::toward(key, node) {
            Step::Left => {
                parent = Some(node);
                child = node.left.as_deref();
            }
            Step::Right => {
                parent = Some(node);
                child = node.right.as_deref();
            }
            Step::Here => break,
        }
    }

    Location {
        node: child,
        parent: child.and(parent),
    }
}

/// Find the slot that owns the node holding `key`.
///
/// The returned slot is either the tree's root slot or the `left`/`right`
/// field of the matching node's parent, so rewriting it replaces the node's
/// incoming link. If the key is absent, the returned slot is the empty one
/// where the key would be attached.
pub(crate) fn locate_slot<'a, P>(mut slot: &'a mut Link<P>, key: &Key) -> &'a mut Link<P> {
    loop {
        // Decide the direction before borrowing the slot mutably.
        let step = slot.as_deref().map(|node| Step::toward(key, node));
        slot = match (step, slot) {
            (Some(Step::Left), Some(node)) => &mut node.left,
            (Some(Step::Right), Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}
