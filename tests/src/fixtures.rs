//! # Shared Test Fixtures
//!
//! Builders and event types used by several integration tests.

use groundwork_bus::BusEvent;
use groundwork_trees::{ListPath, NodeId, Tree};

/// Topics for tree mutation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeTopic {
    /// Structural changes: nodes added or removed.
    Structure,
    /// Value changes on existing nodes.
    Value,
}

/// Events emitted while a tree is mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    /// A node was added at the given path.
    NodeAdded { path: String },
    /// A subtree was removed; `count` nodes vanished.
    SubtreeRemoved { path: String, count: usize },
    /// A node's value was replaced.
    ValueChanged { path: String },
}

impl BusEvent for TreeEvent {
    type Topic = TreeTopic;

    fn topic(&self) -> TreeTopic {
        match self {
            Self::NodeAdded { .. } | Self::SubtreeRemoved { .. } => TreeTopic::Structure,
            Self::ValueChanged { .. } => TreeTopic::Value,
        }
    }
}

/// config -> (network -> (port, host), logging -> level)
pub fn config_tree() -> (Tree<String, String>, NodeId) {
    let mut tree = Tree::new();
    let root = tree.set_root("config".to_string(), String::new());
    let network = tree
        .add_child(root, "network".to_string(), String::new())
        .expect("root is alive");
    tree.add_child(network, "port".to_string(), "8080".to_string())
        .expect("network is alive");
    tree.add_child(network, "host".to_string(), "127.0.0.1".to_string())
        .expect("network is alive");
    let logging = tree
        .add_child(root, "logging".to_string(), String::new())
        .expect("root is alive");
    tree.add_child(logging, "level".to_string(), "info".to_string())
        .expect("logging is alive");
    (tree, root)
}

/// Build a `ListPath` from string literals.
pub fn string_path(segments: &[&str]) -> ListPath<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

/// Build a tree containing every path in `paths`, creating intermediate
/// nodes as needed. Values count insertion order.
pub fn tree_from_paths(paths: &[Vec<u8>]) -> Tree<u8, u32> {
    let mut tree = Tree::new();
    let mut counter = 0u32;

    for path in paths {
        let Some((first, rest)) = path.split_first() else {
            continue;
        };

        let root = match tree.root() {
            Some(root) if tree.key(root).ok() == Some(first) => root,
            Some(_) => continue, // different root key, not representable
            None => {
                counter += 1;
                tree.set_root(*first, counter)
            }
        };

        let mut cursor = root;
        for segment in rest {
            let existing = tree
                .children(cursor)
                .expect("cursor is alive")
                .iter()
                .copied()
                .find(|child| tree.key(*child).ok() == Some(segment));
            cursor = match existing {
                Some(child) => child,
                None => {
                    counter += 1;
                    tree.add_child(cursor, *segment, counter)
                        .expect("cursor is alive")
                }
            };
        }
    }
    tree
}
