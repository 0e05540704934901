//! # Flat Tree Wire Form
//!
//! A [`TreeDto`] is a tree flattened to `(path, value)` rows in
//! root-first, depth-first order. The row order is part of the format:
//! it is what disambiguates duplicate sibling keys when the tree is
//! rebuilt, so a round trip reproduces the original shape exactly.

use groundwork_trees::{ListPath, NodeId, Tree, TreeError};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// One node of a flattened tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow<K, V> {
    /// Path from the root to the node, root key first.
    pub path: ListPath<K>,
    /// The node's value.
    pub value: V,
}

/// A tree flattened to rows, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDto<K, V> {
    /// Rows in root-first, depth-first order.
    pub rows: Vec<TreeRow<K, V>>,
}

impl<K, V> TreeDto<K, V>
where
    K: Clone + PartialEq,
    V: Clone,
{
    /// Flatten a tree. The empty tree flattens to zero rows.
    pub fn from_tree(tree: &Tree<K, V>) -> Result<Self, TreeError> {
        let mut rows = Vec::with_capacity(tree.len());
        for id in tree.dfs() {
            rows.push(TreeRow {
                path: tree.path_of(id)?,
                value: tree.value(id)?.clone(),
            });
        }
        Ok(Self { rows })
    }

    /// Rebuild the tree the rows were flattened from.
    ///
    /// Rows are attached using a stack of the most recently built nodes:
    /// each row's parent path must match a node on the current root-to-tip
    /// chain. This reattaches children to the exact duplicate sibling they
    /// came from, which plain path resolution could not do.
    ///
    /// # Errors
    ///
    /// - [`CodecError::BadRootRow`] when the first row is not a
    ///   single-segment path
    /// - [`CodecError::DisconnectedRow`] when a row's parent path is not
    ///   on the chain built so far
    pub fn into_tree(self) -> Result<Tree<K, V>, CodecError>
    where
        K: std::fmt::Display,
    {
        let mut tree = Tree::new();
        let Some((first, rest)) = self.rows.split_first() else {
            return Ok(tree);
        };

        let root_key = match first.path.first() {
            Some(key) if first.path.len() == 1 => key.clone(),
            _ => {
                return Err(CodecError::BadRootRow {
                    path: first.path.to_string(),
                })
            }
        };
        let root = tree.set_root(root_key, first.value.clone());

        // Chain of (path, node) from the root to the most recent node.
        let mut chain: Vec<(ListPath<K>, NodeId)> = vec![(first.path.clone(), root)];

        for (offset, row) in rest.iter().enumerate() {
            let disconnected = |row: &TreeRow<K, V>| CodecError::DisconnectedRow {
                index: offset + 1,
                path: row.path.to_string(),
            };

            let parent_path = row.path.parent().ok_or_else(|| disconnected(row))?;

            // Pop the chain back to the row's parent.
            while let Some((path, _)) = chain.last() {
                if *path == parent_path {
                    break;
                }
                chain.pop();
            }
            let Some((_, parent)) = chain.last() else {
                return Err(disconnected(row));
            };

            let key = row.path.last().cloned().ok_or_else(|| disconnected(row))?;
            let node = tree
                .add_child(*parent, key, row.value.clone())
                .map_err(|_| disconnected(row))?;
            chain.push((row.path.clone(), node));
        }

        Ok(tree)
    }
}
