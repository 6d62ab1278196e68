//! Shared helpers for integration tests.

use std::sync::Once;

use petclub_tree::{Item, Key, Tree};
use tracing_subscriber::{fmt, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a fmt subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `warn` so rejected inserts are visible.
pub fn init_test_logging() {
    TEST_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Build a tree from (name, kind) pairs, inserted in order.
#[allow(dead_code)]
pub fn tree_of(capacity: usize, pets: &[(&str, &str)]) -> Tree {
    let mut tree = Tree::with_capacity(capacity);
    for (name, kind) in pets {
        tree.insert(Item::new(*name, *kind)).unwrap();
    }
    tree
}

/// In-order keys as owned pairs.
#[allow(dead_code)]
pub fn keys_of<P>(tree: &Tree<P>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    tree.traverse(|item| out.push((item.name().to_string(), item.kind().to_string())));
    out
}

#[allow(dead_code)]
pub fn key(name: &str, kind: &str) -> Key {
    Key::new(name, kind)
}
