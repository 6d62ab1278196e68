//! petclub-tree - An unbalanced binary search tree of pet records.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          petclub-tree                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            SharedTree (tree/shared.rs)                   │   │
//! │  │        one exclusive lock for readers and writers        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Tree (tree/bst.rs)                       │   │
//! │  │  insert · contains/get · delete · traverse · clear       │   │
//! │  │          size / capacity bookkeeping                     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   locate (search)  ·  node (splice, release)  ·  iter    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`tree`] - The tree, its items and iterators
//!
//! The tree never performs I/O. Callers hand it parsed [`Item`]s and read
//! items back through [`Tree::traverse`] or [`Tree::iter`]. Rejections are
//! reported as [`Error`] values and logged through `tracing`.
//!
//! # Quick Start
//! ```
//! use petclub_tree::{Item, Key, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert(Item::new("Rex", "dog"))?;
//! tree.insert(Item::new("Tom", "cat"))?;
//!
//! assert!(tree.delete(&Key::new("Rex", "dog")));
//! assert!(!tree.contains(&Key::new("Rex", "dog")));
//!
//! tree.traverse(|item| println!("{}", item));
//! # Ok::<(), petclub_tree::Error>(())
//! ```

pub mod common;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use common::config::MAX_ITEMS;
pub use common::{Error, Result};

pub use tree::{Item, Iter, Key, SharedTree, Tree};
