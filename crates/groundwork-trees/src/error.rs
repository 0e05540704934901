//! Error types for the tree/path toolkit

use thiserror::Error;

/// Errors from tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The handle refers to a node that was removed (or never existed in
    /// this tree). Slots are generation-tagged, so a recycled slot does
    /// not alias an old handle.
    #[error("stale node handle: slot {index} generation {generation}")]
    StaleNode {
        /// Arena slot index the handle pointed at.
        index: u32,
        /// Generation the handle was issued for.
        generation: u32,
    },

    /// Reparenting would place a node underneath itself.
    #[error("reparenting node into its own subtree would create a cycle")]
    WouldCycle,

    /// The root node cannot be reparented.
    #[error("the root node cannot be reparented")]
    RootMove,

    /// The operation requires a root but the tree is empty.
    #[error("tree has no root")]
    NoRoot,
}

/// Errors from enum-indexed path construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Raw slot vector length does not match the axis count.
    #[error("expected {expected} slots, got {found}")]
    WrongSlotCount {
        /// Number of slots supplied.
        found: usize,
        /// Number of slots the axis enumeration defines.
        expected: usize,
    },

    /// A vacant slot was followed by a populated one. Populated slots
    /// must form a contiguous prefix.
    #[error("vacant slot at axis position {index} precedes a populated slot")]
    VacancyGap {
        /// Axis position of the offending vacancy.
        index: usize,
    },

    /// Appending to a path whose slots are all populated.
    #[error("path is full: all {capacity} axis slots are populated")]
    PathFull {
        /// Total slot count of the path.
        capacity: usize,
    },
}
