//! Property-based tests for ErasedCursor over fixed arrays and slices.

use proptest::prelude::*;

use erased_cursor::{ContiguousCursor, CursorError, ErasedCursor, RevSliceCursor, SliceCursor};
use fixed_array::FixedArray;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
struct Sample {
    id: u32,
    reading: f32,
}

fn sample_strategy() -> impl Strategy<Value = Sample> {
    (any::<u32>(), -1.0e6f32..1.0e6).prop_map(|(id, reading)| Sample { id, reading })
}

/// A cursor defined outside the crate: walks a fixed array two slots at a
/// time, so position `p` reads element `2 * p`.
struct EvenSlots<'a, T, const N: usize> {
    array: &'a FixedArray<T, N>,
    pos: isize,
}

impl<T, const N: usize> Clone for EvenSlots<'_, T, N> {
    fn clone(&self) -> Self {
        EvenSlots {
            array: self.array,
            pos: self.pos,
        }
    }
}

impl<'a, T, const N: usize> ContiguousCursor<'a> for EvenSlots<'a, T, N> {
    type Item = T;

    fn get(&self) -> Option<&'a T> {
        usize::try_from(self.pos * 2)
            .ok()
            .and_then(|i| self.array.at(i).ok())
    }

    fn advance_by(&mut self, n: isize) {
        self.pos += n;
    }

    fn position(&self) -> isize {
        self.pos
    }

    fn origin(&self) -> *const T {
        self.array.as_ptr()
    }

    fn len(&self) -> usize {
        N.div_ceil(2)
    }
}

fn forward<const N: usize>(array: &FixedArray<Sample, N>) -> ErasedCursor<'_, Sample> {
    ErasedCursor::from_slice(array.as_slice())
}

//
// -----------------------------------------------------------------------------
// Offset algebra
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_offset_matches_repeated_increment(
        values in prop::array::uniform16(sample_strategy()),
        n in 0isize..16,
    ) {
        let array = FixedArray::new(values);
        let it = forward(&array);

        let mut stepped = it.clone();
        for _ in 0..n {
            stepped.inc();
        }

        let jumped = &it + n;
        prop_assert_eq!(jumped.get(), stepped.get());
        prop_assert_eq!(jumped.get(), Some(&values[n as usize]));
        prop_assert!(jumped == stepped);
    }

    #[test]
    fn prop_add_then_sub_is_identity(
        values in prop::array::uniform8(any::<u64>()),
        start in 0isize..8,
        n in -8isize..8,
    ) {
        let array = FixedArray::new(values);
        let it = ErasedCursor::from_slice(array.as_slice()) + start;

        let back = &it + n - n;
        prop_assert_eq!(&back, &it);
        prop_assert_eq!(back.get(), it.get());

        let mut compound = it.clone();
        compound += n;
        compound -= n;
        prop_assert_eq!(compound, it);
    }

    #[test]
    fn prop_index_matches_offset_deref(
        values in prop::array::uniform8(any::<i32>()),
        start in 0isize..8,
        n in -8isize..8,
    ) {
        let array = FixedArray::new(values);
        let it = ErasedCursor::from_slice_rev(array.as_slice()) + start;

        prop_assert_eq!((&it + n).at(0), it.at(n));
        if let Some(expected) = it.at(n) {
            prop_assert_eq!((&it + n)[0], it[n]);
            prop_assert_eq!(&it[n], expected);
        }
    }

    #[test]
    fn prop_distance_inverts_offset(
        values in prop::array::uniform8(any::<u8>()),
        a in 0isize..8,
        n in -8isize..8,
    ) {
        let array = FixedArray::new(values);
        let first = ErasedCursor::from_slice(array.as_slice()) + a;
        let second = &first + n;

        prop_assert_eq!(second.distance(&first), Ok(n));
        prop_assert!(&first + second.distance(&first).unwrap() == second);
    }
}

//
// -----------------------------------------------------------------------------
// Ownership: clone independence and take
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_clone_is_independent(values in prop::array::uniform8(sample_strategy()), steps in 1usize..8) {
        let array = FixedArray::new(values);
        let original = forward(&array);
        let mut copy = original.clone();

        for _ in 0..steps {
            copy.inc();
        }

        prop_assert_eq!(original.get(), Some(&values[0]));
        prop_assert_eq!(copy.get(), Some(&values[steps]));
        prop_assert!(original != copy);
    }

    #[test]
    fn prop_take_transfers_position(values in prop::array::uniform8(any::<u16>()), start in 0isize..8) {
        let array = FixedArray::new(values);
        let mut source = ErasedCursor::from_slice(array.as_slice()) + start;
        let expected = source.get();

        let dest = source.take();
        prop_assert_eq!(dest.get(), expected);
        prop_assert!(source.is_vacant());
        prop_assert_eq!(source.try_get(), Err(CursorError::Vacant));
    }
}

//
// -----------------------------------------------------------------------------
// Equality
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_equal_positions_compare_equal(values in prop::array::uniform8(any::<u32>()), pos in 0isize..8) {
        let array = FixedArray::new(values);
        let a = ErasedCursor::new(SliceCursor::at_position(array.as_slice(), pos));
        let b = ErasedCursor::from_slice(array.as_slice()) + pos;

        prop_assert!(a == b);
        prop_assert_eq!(a.try_eq(&b), Ok(true));

        let mut ahead = b.clone();
        ahead.inc();
        prop_assert!(a != ahead);
        prop_assert_eq!(a.try_eq(&ahead), Ok(false));
    }

    #[test]
    fn prop_mismatched_types_are_reported(values in prop::array::uniform4(any::<u32>())) {
        let array = FixedArray::new(values);
        let fwd = ErasedCursor::from_slice(array.as_slice());
        let rev = ErasedCursor::from(RevSliceCursor::begin(array.as_slice()));
        let even = ErasedCursor::new(EvenSlots { array: &array, pos: 0 });

        prop_assert!(fwd != rev);
        prop_assert!(
            matches!(fwd.try_eq(&rev), Err(CursorError::TypeMismatch { .. })),
            "forward vs reverse must be a type mismatch"
        );
        prop_assert!(
            matches!(even.distance(&fwd), Err(CursorError::TypeMismatch { .. })),
            "custom vs forward must be a type mismatch"
        );
    }
}

//
// -----------------------------------------------------------------------------
// Iteration through the erased cursor
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_iteration_matches_array(values in prop::array::uniform16(any::<i16>())) {
        let array = FixedArray::new(values);

        let forward: Vec<i16> = ErasedCursor::from_slice(array.as_slice()).into_iter().copied().collect();
        let backward: Vec<i16> = ErasedCursor::from_slice_rev(array.as_slice()).iter().copied().collect();

        prop_assert_eq!(forward, array.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(backward, array.iter_rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn prop_custom_cursor_erases(values in prop::array::uniform7(any::<u8>())) {
        let array = FixedArray::new(values);
        let it = ErasedCursor::new(EvenSlots { array: &array, pos: 0 });

        let evens: Vec<u8> = it.iter().copied().collect();
        let expected: Vec<u8> = values.iter().step_by(2).copied().collect();
        prop_assert_eq!(evens, expected);
        prop_assert_eq!(it.iter().len(), 4);
    }
}

#[test]
fn checked_errors_are_traced() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("erased_cursor=debug")
        .with_test_writer()
        .try_init();

    let array = FixedArray::new([1u8, 2]);
    let end = ErasedCursor::from_slice(array.as_slice()) + 2;

    assert_eq!(
        end.try_get(),
        Err(CursorError::OutOfRange { position: 2, len: 2 })
    );
    assert_eq!(end.get(), None);
    assert_eq!(end.iter().count(), 0);
}
