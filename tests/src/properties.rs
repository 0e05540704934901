//! # Property Tests
//!
//! Invariants checked over generated inputs: path ordering laws, DTO
//! round-trips, enum-path slot discipline.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use groundwork_codec::TreeDto;
    use groundwork_trees::{Axis, EnumPath, ListPath};

    use crate::fixtures::tree_from_paths;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Slot {
        A,
        B,
        C,
    }

    impl Axis for Slot {
        const COUNT: usize = 3;

        fn index(self) -> usize {
            match self {
                Self::A => 0,
                Self::B => 1,
                Self::C => 2,
            }
        }

        fn all() -> &'static [Self] {
            &[Self::A, Self::B, Self::C]
        }
    }

    fn segments() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..4, 0..6)
    }

    proptest! {
        /// Lexicographic law: ordering is decided by the first differing
        /// segment; a strict prefix precedes its extensions.
        #[test]
        fn prop_path_ordering_first_differing_segment(a in segments(), b in segments()) {
            let pa: ListPath<u8> = a.clone().into();
            let pb: ListPath<u8> = b.clone().into();

            let expected = match a.iter().zip(b.iter()).find(|(x, y)| x != y) {
                Some((x, y)) => x.cmp(y),
                None => a.len().cmp(&b.len()),
            };
            prop_assert_eq!(pa.cmp(&pb), expected);
        }

        /// Appending always produces a strictly later, longer path that
        /// starts with the original.
        #[test]
        fn prop_append_extends(a in segments(), extra in 0u8..4) {
            let base: ListPath<u8> = a.into();
            let extended = base.append(extra);

            prop_assert!(base < extended);
            prop_assert_eq!(extended.len(), base.len() + 1);
            prop_assert!(extended.starts_with(&base));
            let extended_parent = extended.parent();
            prop_assert_eq!(extended_parent.as_ref(), Some(&base));
        }

        /// Flatten/rebuild reproduces the tree exactly: same row list.
        #[test]
        fn prop_tree_dto_roundtrip(paths in prop::collection::vec(
            prop::collection::vec(0u8..3, 1..5),
            0..12,
        )) {
            // Give every path the same first segment so it is one tree.
            let rooted: Vec<Vec<u8>> = paths
                .into_iter()
                .map(|mut p| { p.insert(0, 0); p })
                .collect();
            let tree = tree_from_paths(&rooted);

            let dto = TreeDto::from_tree(&tree).expect("live handles");
            let rebuilt = dto.clone().into_tree().expect("rows connect");
            prop_assert_eq!(TreeDto::from_tree(&rebuilt).expect("live handles"), dto);
            prop_assert_eq!(rebuilt.len(), tree.len());
        }

        /// Enum paths never hold a vacancy gap, whatever sequence of
        /// appends constructed them.
        #[test]
        fn prop_enum_path_slots_stay_contiguous(count in 0usize..5) {
            let mut path: EnumPath<Slot, u8> = EnumPath::empty();
            let mut appended = 0usize;
            for i in 0..count {
                match path.append(i as u8) {
                    Ok(next) => { path = next; appended += 1; }
                    Err(_) => prop_assert!(i >= Slot::COUNT),
                }
            }
            prop_assert_eq!(path.len(), appended.min(Slot::COUNT));

            // Rebuilding from the raw populated prefix succeeds.
            let slots: Vec<Option<u8>> = (0..Slot::COUNT)
                .map(|i| Slot::all().get(i).and_then(|axis| path.get(*axis)).copied())
                .collect();
            prop_assert!(EnumPath::<Slot, u8>::from_slots(slots).is_ok());
        }

        /// A partial enum path precedes every completion of it.
        #[test]
        fn prop_partial_enum_path_precedes_completion(first in 0u8..4, second in 0u8..4) {
            let partial: EnumPath<Slot, u8> = EnumPath::empty().append(first).expect("slot free");
            let complete = partial.append(second).expect("slot free");
            prop_assert!(partial < complete);
        }
    }

    /// Ordering must agree with equality (total order sanity).
    #[test]
    fn test_path_ordering_consistent_with_eq() {
        let a: ListPath<u8> = vec![1, 2].into();
        let b: ListPath<u8> = vec![1, 2].into();
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }
}
