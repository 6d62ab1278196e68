//! In-order iteration.

use std::iter::FusedIterator;

use crate::tree::item::Item;
use crate::tree::node::Node;

/// Borrowing in-order iterator over a [`Tree`](crate::Tree).
///
/// Yields items in ascending key order. Uses an explicit stack of pending
/// ancestors rather than recursion, so memory use is bounded by tree height
/// on the heap instead of the call stack.
#[derive(Debug)]
pub struct Iter<'a, P> {
    /// Nodes whose left subtree has been pushed but which are not yet yielded.
    stack: Vec<&'a Node<P>>,
    remaining: usize,
}

impl<'a, P> Iter<'a, P> {
    pub(crate) fn new(root: Option<&'a Node<P>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<P>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a Item<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<P> FusedIterator for Iter<'_, P> {}
