//! # Groundwork Trees
//!
//! A generic tree/path toolkit: mutable n-ary trees addressable by
//! hierarchical keys.
//!
//! ## Building Blocks
//!
//! - [`ListPath`] - an immutable ordered sequence of comparable segments
//! - [`EnumPath`] - a path whose segment slots are named and ordered by an
//!   [`Axis`] enumeration (a "semantic" path: each position has a meaning)
//! - [`Tree`] - an arena-backed tree of keyed, valued nodes with parent
//!   back-references, addressed by [`NodeId`] handles
//!
//! ## Handles, not references
//!
//! Nodes live in an arena owned by the [`Tree`]; callers hold copyable
//! [`NodeId`] handles instead of references. Handles carry a generation
//! tag, so a handle to a removed node reports [`TreeError::StaleNode`]
//! rather than silently resolving to whatever reused its slot.
//!
//! ```
//! use groundwork_trees::{ListPath, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.set_root("config", 0);
//! let net = tree.add_child(root, "network", 1).unwrap();
//! tree.add_child(net, "port", 8080).unwrap();
//!
//! let path: ListPath<&str> = ["config", "network", "port"].into_iter().collect();
//! let node = tree.get(&path).unwrap();
//! assert_eq!(tree.value(node).unwrap(), &8080);
//! ```

pub mod enum_path;
pub mod error;
pub mod path;
pub mod tree;

// Re-export main types
pub use enum_path::{Axis, EnumPath};
pub use error::{PathError, TreeError};
pub use path::ListPath;
pub use tree::{NodeId, Tree};
