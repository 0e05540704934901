//! # Enum-Indexed Paths
//!
//! A path whose segment slots are fixed in number and order by an axis
//! enumeration: each position has a named, enumerated meaning rather than
//! a plain list index. Partial paths are supported - populated slots form
//! a contiguous prefix and trailing slots stay vacant.

use std::fmt;
use std::marker::PhantomData;

use crate::error::PathError;
use crate::path::ListPath;

/// Fixed, ordered set of named path positions.
///
/// Implementors are expected to be field-less enums: `COUNT` is the number
/// of variants, `index` maps a variant to its position, and `all` lists
/// the variants in position order.
pub trait Axis: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Number of axis positions.
    const COUNT: usize;

    /// Zero-based position of this axis value.
    fn index(self) -> usize;

    /// All axis values, in position order.
    fn all() -> &'static [Self];
}

/// Path with one slot per [`Axis`] position.
///
/// Populated slots always form a contiguous prefix; a vacancy gap cannot
/// be constructed. Ordering compares slot-by-slot with vacant ordering
/// before populated, so a partial path precedes all of its completions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumPath<A: Axis, S> {
    slots: Vec<Option<S>>,
    _axes: PhantomData<A>,
}

impl<A: Axis, S> EnumPath<A, S> {
    /// The empty path: every slot vacant.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: (0..A::COUNT).map(|_| None).collect(),
            _axes: PhantomData,
        }
    }

    /// Build a path from raw slots, one per axis position.
    ///
    /// # Errors
    ///
    /// - [`PathError::WrongSlotCount`] when `slots.len() != A::COUNT`
    /// - [`PathError::VacancyGap`] when a vacant slot precedes a
    ///   populated one
    pub fn from_slots(slots: Vec<Option<S>>) -> Result<Self, PathError> {
        if slots.len() != A::COUNT {
            return Err(PathError::WrongSlotCount {
                found: slots.len(),
                expected: A::COUNT,
            });
        }

        let mut seen_vacant_at = None;
        for (index, slot) in slots.iter().enumerate() {
            match (slot, seen_vacant_at) {
                (None, None) => seen_vacant_at = Some(index),
                (Some(_), Some(gap)) => return Err(PathError::VacancyGap { index: gap }),
                _ => {}
            }
        }

        Ok(Self {
            slots,
            _axes: PhantomData,
        })
    }

    /// Segment at the named axis position, if populated.
    #[must_use]
    pub fn get(&self, axis: A) -> Option<&S> {
        self.slots[axis.index()].as_ref()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    /// `true` when no slot is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.first().is_none_or(|slot| slot.is_none())
    }

    /// Total slot count, `A::COUNT`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        A::COUNT
    }

    /// `true` when every slot is populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == A::COUNT
    }

    /// Axis position the next append would fill, if any.
    #[must_use]
    pub fn next_axis(&self) -> Option<A> {
        A::all().get(self.len()).copied()
    }

    /// Iterate over the populated segments, in axis order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.slots.iter().map_while(Option::as_ref)
    }
}

impl<A: Axis, S: Clone> EnumPath<A, S> {
    /// A new path with `segment` in the first vacant slot. The receiver
    /// is unchanged.
    ///
    /// # Errors
    ///
    /// [`PathError::PathFull`] when every slot is already populated.
    pub fn append(&self, segment: S) -> Result<Self, PathError> {
        let position = self.len();
        if position == A::COUNT {
            return Err(PathError::PathFull { capacity: A::COUNT });
        }

        let mut slots = self.slots.clone();
        slots[position] = Some(segment);
        Ok(Self {
            slots,
            _axes: PhantomData,
        })
    }

    /// The populated prefix as a plain [`ListPath`].
    #[must_use]
    pub fn to_list_path(&self) -> ListPath<S> {
        self.iter().cloned().collect()
    }
}

impl<A: Axis, S: fmt::Display> fmt::Display for EnumPath<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in self.iter() {
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}
