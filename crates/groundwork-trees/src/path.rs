//! # List-Backed Paths
//!
//! An immutable ordered sequence of segments identifying a location in a
//! tree. Appending produces a new path; the receiver is never modified.
//!
//! Ordering is lexicographic over the segments: the first differing
//! segment decides, and a strict prefix orders before its extensions
//! (`a/b` < `a/b/c` < `a/c`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable ordered sequence of segments.
///
/// Serializes transparently as a plain list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListPath<S> {
    segments: Vec<S>,
}

impl<S> ListPath<S> {
    /// The empty path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Create a path from its segments, in order.
    #[must_use]
    pub fn from_segments(segments: Vec<S>) -> Self {
        Self { segments }
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` when the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at the given position, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.segments.get(index)
    }

    /// First segment, if any.
    #[must_use]
    pub fn first(&self) -> Option<&S> {
        self.segments.first()
    }

    /// Last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&S> {
        self.segments.last()
    }

    /// All segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[S] {
        &self.segments
    }

    /// Iterate over the segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.segments.iter()
    }
}

impl<S: Clone> ListPath<S> {
    /// A new path with `segment` appended. The receiver is unchanged.
    #[must_use]
    pub fn append(&self, segment: S) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// The path with the last segment removed, or `None` for the empty
    /// path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }
}

impl<S: PartialEq> ListPath<S> {
    /// `true` when `prefix` is a (non-strict) prefix of this path.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        prefix.segments.len() <= self.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }
}

impl<S: fmt::Display> fmt::Display for ListPath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl<S> From<Vec<S>> for ListPath<S> {
    fn from(segments: Vec<S>) -> Self {
        Self { segments }
    }
}

impl<S> FromIterator<S> for ListPath<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<S> IntoIterator for ListPath<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a ListPath<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
