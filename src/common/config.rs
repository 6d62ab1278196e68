//! Configuration constants for the pet club tree.

/// Maximum number of items a [`Tree`](crate::Tree) built with
/// [`Tree::new`](crate::Tree::new) can hold.
///
/// Capacity is fixed at build time. Use
/// [`Tree::with_capacity`](crate::Tree::with_capacity) when a different bound
/// is needed.
pub const MAX_ITEMS: usize = 10;

/// Column width used when listing a pet's name.
///
/// Names are padded to this width so the `Kind:` column lines up.
pub const NAME_COLUMN_WIDTH: usize = 19;
