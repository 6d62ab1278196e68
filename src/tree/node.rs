//! Tree vertices and the owning links between them.

use crate::tree::item::{Item, Key};

/// An owning child slot: either empty or the root of a subtree.
///
/// Every node is owned by exactly one slot (the tree's root slot or a
/// parent's `left`/`right`), so there are no back references and no cycles.
pub(crate) type Link<P> = Option<Box<Node<P>>>;

/// A vertex holding one item and up to two child subtrees.
///
/// There is no parent pointer. Parentage is discovered by searching from the
/// root.
#[derive(Debug)]
pub(crate) struct Node<P> {
    pub(crate) item: Item<P>,
    pub(crate) left: Link<P>,
    pub(crate) right: Link<P>,
}

impl<P> Node<P> {
    /// Allocate a childless node for `item`.
    pub(crate) fn new(item: Item<P>) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub(crate) fn key(&self) -> &Key {
        self.item.key()
    }
}

/// Unlink the node held by `slot` and return it, keeping the subtree ordered.
///
/// - No left child: the right child (possibly empty) takes the node's place.
/// - No right child: the left child takes the node's place.
/// - Two children: the removed node's right subtree is hung off the right
///   slot of its in-order predecessor (the rightmost node of the left
///   subtree), then the left child takes the node's place.
///
/// No other node is moved or rebuilt. Returns `None` if `slot` is empty.
pub(crate) fn splice_out<P>(slot: &mut Link<P>) -> Option<Box<Node<P>>> {
    let mut removed = slot.take()?;

    *slot = match (removed.left.take(), removed.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(mut left), Some(right)) => {
            // The predecessor is the first node on the left child's right
            // spine with an empty right slot.
            let mut attach = &mut left.right;
            let mut depth = 0usize;
            while let Some(node) = attach {
                attach = &mut node.right;
                depth += 1;
            }
            tracing::trace!(
                removed = %removed.key(),
                spine_depth = depth,
                "reattaching right subtree onto in-order predecessor"
            );
            *attach = Some(right);
            Some(left)
        }
    };

    Some(removed)
}

/// Drop every node reachable from `link` without recursing.
///
/// Returns the number of nodes released. Recursive `Box` drops would use one
/// stack frame per level, and an unbalanced tree can be as deep as it is long.
pub(crate) fn release<P>(link: Link<P>) -> usize {
    let mut pending: Vec<Box<Node<P>>> = link.into_iter().collect();
    let mut released = 0;

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
        released += 1;
        // `node` is childless here, so dropping it cannot recurse.
    }

    released
}
