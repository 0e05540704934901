//! # Arena-Backed Trees
//!
//! Nodes hold a key, a value, a parent back-reference and an ordered child
//! list. The tree owns all nodes in an arena; callers address them through
//! copyable [`NodeId`] handles.
//!
//! ## Invariants
//!
//! - The parent/child links always form a single tree: no cycles, every
//!   non-root node reachable from the root.
//! - A removed node's slot is recycled with a bumped generation, so stale
//!   handles fail with [`TreeError::StaleNode`] instead of resolving to an
//!   unrelated node.
//! - Sibling keys need not be unique; path resolution takes the first
//!   match in child order.

use crate::error::TreeError;
use crate::path::ListPath;

/// Copyable handle to a node in a [`Tree`].
///
/// Handles are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// Arena slot. The generation is bumped every time the slot is vacated.
#[derive(Debug, Clone)]
struct Slot<K, V> {
    generation: u32,
    data: Option<NodeData<K, V>>,
}

#[derive(Debug, Clone)]
struct NodeData<K, V> {
    key: K,
    value: V,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Mutable n-ary tree with keyed nodes, addressable by paths.
#[derive(Debug, Clone)]
pub struct Tree<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<u32>,
    root: Option<NodeId>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Install a new root, discarding any existing tree content.
    pub fn set_root(&mut self, key: K, value: V) -> NodeId {
        self.clear();
        let id = self.alloc(NodeData {
            key,
            value,
            parent: None,
            children: Vec::new(),
        });
        self.root = Some(id);
        id
    }

    /// Remove every node. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.data.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.root = None;
        self.len = 0;
    }

    /// Append a child under `parent`, after its existing children.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] when `parent` is not alive.
    pub fn add_child(&mut self, parent: NodeId, key: K, value: V) -> Result<NodeId, TreeError> {
        self.data(parent)?;

        let id = self.alloc(NodeData {
            key,
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.data_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Key of a node.
    pub fn key(&self, id: NodeId) -> Result<&K, TreeError> {
        Ok(&self.data(id)?.key)
    }

    /// Value of a node.
    pub fn value(&self, id: NodeId) -> Result<&V, TreeError> {
        Ok(&self.data(id)?.value)
    }

    /// Mutable value of a node.
    pub fn value_mut(&mut self, id: NodeId) -> Result<&mut V, TreeError> {
        Ok(&mut self.data_mut(id)?.value)
    }

    /// Replace a node's value, returning the previous one.
    pub fn set_value(&mut self, id: NodeId, value: V) -> Result<V, TreeError> {
        let slot = self.data_mut(id)?;
        Ok(std::mem::replace(&mut slot.value, value))
    }

    /// Parent of a node (`None` for the root).
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.data(id)?.parent)
    }

    /// Children of a node, in insertion order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(&self.data(id)?.children)
    }

    /// `true` when the node has no children.
    pub fn is_leaf(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(self.data(id)?.children.is_empty())
    }

    /// Number of nodes in the subtree rooted at `id`, including `id`.
    pub fn subtree_size(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.collect_subtree(id)?.len())
    }

    /// Detach the subtree rooted at `id` and drop it.
    ///
    /// Returns the number of nodes removed. Removing the root empties the
    /// tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] when `id` is not alive.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, TreeError> {
        let doomed = self.collect_subtree(id)?;

        // Detach from the parent's child list first, so the tree is
        // consistent even while subtree slots are being vacated.
        if let Some(parent) = self.data(id)?.parent {
            self.data_mut(parent)?.children.retain(|child| *child != id);
        }

        for node in &doomed {
            let slot = &mut self.slots[node.index as usize];
            slot.data = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(node.index);
        }
        self.len -= doomed.len();

        if self.root == Some(id) {
            self.root = None;
        }
        Ok(doomed.len())
    }

    /// Move `id` (with its whole subtree) under `new_parent`, after the
    /// existing children.
    ///
    /// # Errors
    ///
    /// - [`TreeError::StaleNode`] when either handle is not alive
    /// - [`TreeError::RootMove`] when `id` is the root
    /// - [`TreeError::WouldCycle`] when `new_parent` is `id` itself or
    ///   any of its descendants
    pub fn reparent(&mut self, id: NodeId, new_parent: NodeId) -> Result<(), TreeError> {
        self.data(id)?;
        self.data(new_parent)?;

        if self.root == Some(id) {
            return Err(TreeError::RootMove);
        }
        if id == new_parent {
            return Err(TreeError::WouldCycle);
        }

        // Walk new_parent's ancestor chain; hitting `id` means the target
        // lies inside the subtree being moved.
        let mut cursor = self.data(new_parent)?.parent;
        while let Some(ancestor) = cursor {
            if ancestor == id {
                return Err(TreeError::WouldCycle);
            }
            cursor = self.data(ancestor)?.parent;
        }

        // Only the root has no parent, and the root was rejected above.
        let old_parent = self.data(id)?.parent.ok_or(TreeError::RootMove)?;
        self.data_mut(old_parent)?.children.retain(|child| *child != id);

        self.data_mut(new_parent)?.children.push(id);
        self.data_mut(id)?.parent = Some(new_parent);
        Ok(())
    }

    /// Node handles in root-first, depth-first order.
    ///
    /// Children are visited in insertion order. Empty tree yields nothing.
    pub fn dfs(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = Vec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            if let Ok(data) = self.data(next) {
                stack.extend(data.children.iter().rev());
            }
            Some(next)
        })
    }

    fn alloc(&mut self, data: NodeData<K, V>) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.data = Some(data);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            data: Some(data),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    fn data(&self, id: NodeId) -> Result<&NodeData<K, V>, TreeError> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.data.as_ref())
            .ok_or(TreeError::StaleNode {
                index: id.index,
                generation: id.generation,
            })
    }

    fn data_mut(&mut self, id: NodeId) -> Result<&mut NodeData<K, V>, TreeError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.data.as_mut())
            .ok_or(TreeError::StaleNode {
                index: id.index,
                generation: id.generation,
            })
    }

    /// Subtree handles in root-first, depth-first order.
    fn collect_subtree(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let data = self.data(next)?;
            out.push(next);
            stack.extend(data.children.iter().rev());
        }
        Ok(out)
    }
}

impl<K: Clone, V> Tree<K, V> {
    /// The path from the root to `id`, root key first.
    pub fn path_of(&self, id: NodeId) -> Result<ListPath<K>, TreeError> {
        let mut keys = vec![self.data(id)?.key.clone()];
        let mut cursor = self.data(id)?.parent;
        while let Some(ancestor) = cursor {
            let data = self.data(ancestor)?;
            keys.push(data.key.clone());
            cursor = data.parent;
        }
        keys.reverse();
        Ok(ListPath::from_segments(keys))
    }
}

impl<K: PartialEq, V> Tree<K, V> {
    /// Resolve a path by walking child links from the root.
    ///
    /// The first segment must match the root key; each further segment
    /// selects the first child (in insertion order) with a matching key.
    /// The empty path resolves to nothing.
    #[must_use]
    pub fn resolve(&self, segments: &[K]) -> Option<NodeId> {
        let (first, rest) = segments.split_first()?;
        let root = self.root?;
        if self.data(root).ok()?.key != *first {
            return None;
        }

        let mut cursor = root;
        for segment in rest {
            let children = &self.data(cursor).ok()?.children;
            cursor = *children
                .iter()
                .find(|child| self.data(**child).map(|d| d.key == *segment).unwrap_or(false))?;
        }
        Some(cursor)
    }

    /// Resolve a [`ListPath`] by walking child links from the root.
    #[must_use]
    pub fn get(&self, path: &ListPath<K>) -> Option<NodeId> {
        self.resolve(path.segments())
    }
}
