//! Binary search tree of pet records.
//!
//! # Components
//! - [`Tree`] - The tree: insert, lookup, delete, traverse, clear
//! - [`Item`] / [`Key`] - Stored records and their (name, kind) key
//! - [`Iter`] - In-order iterator
//! - [`SharedTree`] - A tree behind one exclusive lock
//!
//! Nodes, the search primitive and the delete splice are internal.

mod bst;
mod item;
mod iter;
mod locate;
mod node;
mod shared;

pub use bst::Tree;
pub use item::{Item, Key};
pub use iter::Iter;
pub use shared::SharedTree;
