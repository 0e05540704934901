//! # Tuple
//!
//! A plain pair with named sides. Unlike `(L, R)`, the fields carry names
//! on the wire, which keeps serialized forms self-describing.

use serde::{Deserialize, Serialize};

/// A pair of values with named `left` and `right` sides.
///
/// Ordering compares `left` first, then `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tuple<L, R> {
    /// Left side of the pair.
    pub left: L,
    /// Right side of the pair.
    pub right: R,
}

impl<L, R> Tuple<L, R> {
    /// Create a new tuple.
    #[must_use]
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Swap the sides.
    #[must_use]
    pub fn swap(self) -> Tuple<R, L> {
        Tuple {
            left: self.right,
            right: self.left,
        }
    }

    /// Map the left side, keeping the right.
    #[must_use]
    pub fn map_left<F, L2>(self, f: F) -> Tuple<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        Tuple {
            left: f(self.left),
            right: self.right,
        }
    }

    /// Map the right side, keeping the left.
    #[must_use]
    pub fn map_right<F, R2>(self, f: F) -> Tuple<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        Tuple {
            left: self.left,
            right: f(self.right),
        }
    }

    /// Split into a standard library tuple.
    #[must_use]
    pub fn into_pair(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> From<(L, R)> for Tuple<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Self { left, right }
    }
}
