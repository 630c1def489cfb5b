//! Object-safe cursor interface and the per-type adapter behind it.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use core::any::type_name;
use core::ptr;

use crate::CursorError;
use crate::cursor::ContiguousCursor;

/// Boxed cursor owned by an [`ErasedCursor`](crate::ErasedCursor).
pub type BoxedCursor<'a, T> = Box<dyn DynCursor<'a, T> + 'a>;

/// The operation set every erased contiguous cursor supports.
///
/// Operations that produce a new cursor (post-increment, offsets, clone)
/// return a freshly boxed adapter of the same concrete type, owned by the
/// caller.
pub trait DynCursor<'a, T: 'a> {
    fn get(&self) -> Option<&'a T>;

    /// Element `n` positions away.
    fn at_offset(&self, n: isize) -> Option<&'a T>;

    fn inc(&mut self);

    fn dec(&mut self);

    /// Increments and returns the position held before.
    fn post_inc(&mut self) -> BoxedCursor<'a, T>;

    /// Decrements and returns the position held before.
    fn post_dec(&mut self) -> BoxedCursor<'a, T>;

    fn add_assign(&mut self, n: isize);

    fn sub_assign(&mut self, n: isize);

    /// New cursor `n` positions away.
    fn offset_box(&self, n: isize) -> BoxedCursor<'a, T>;

    /// Copy of the concrete cursor, not of this interface.
    fn clone_box(&self) -> BoxedCursor<'a, T>;

    fn position(&self) -> isize;

    fn region_len(&self) -> usize;

    fn origin(&self) -> *const T;

    /// Name of the concrete cursor type, used to identify it at runtime.
    ///
    /// Built from [`core::any::type_name`], whose output is not guaranteed
    /// unique across types, so this is a best-effort identity: two distinct
    /// cursor types with the same name would pass the type check.
    fn type_tag(&self) -> &'static str;

    #[doc(hidden)]
    fn eq_dyn(&self, rhs: &dyn DynCursor<'a, T>) -> Result<bool, CursorError>;

    #[doc(hidden)]
    fn ne_dyn(&self, rhs: &dyn DynCursor<'a, T>) -> Result<bool, CursorError> {
        self.eq_dyn(rhs).map(|eq| !eq)
    }

    /// Steps from `rhs` to `self`.
    #[doc(hidden)]
    fn distance_dyn(&self, rhs: &dyn DynCursor<'a, T>) -> Result<isize, CursorError>;
}

/// Implements [`DynCursor`] for one concrete cursor type by forwarding
/// every operation to it.
#[derive(Clone, Debug)]
pub struct Adapter<C> {
    cursor: C,
}

impl<C> Adapter<C> {
    pub fn new(cursor: C) -> Self {
        Adapter { cursor }
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<'a, C> Adapter<C>
where
    C: ContiguousCursor<'a> + 'a,
{
    fn boxed(cursor: C) -> BoxedCursor<'a, C::Item> {
        Box::new(Adapter { cursor })
    }

    /// Accepts `rhs` only if it wraps the same cursor type over the same
    /// region.
    fn check_comparable(&self, rhs: &dyn DynCursor<'a, C::Item>) -> Result<(), CursorError> {
        let left = type_name::<C>();
        if left != rhs.type_tag() {
            tracing::debug!(left, right = rhs.type_tag(), "erased cursor type mismatch");
            return Err(CursorError::TypeMismatch {
                left,
                right: rhs.type_tag(),
            });
        }
        if !ptr::eq(self.cursor.origin(), rhs.origin()) || self.cursor.len() != rhs.region_len() {
            return Err(CursorError::DifferentRegions);
        }
        Ok(())
    }
}

impl<'a, C> DynCursor<'a, C::Item> for Adapter<C>
where
    C: ContiguousCursor<'a> + 'a,
{
    #[inline]
    fn get(&self) -> Option<&'a C::Item> {
        self.cursor.get()
    }

    #[inline]
    fn at_offset(&self, n: isize) -> Option<&'a C::Item> {
        self.cursor.at(n)
    }

    #[inline]
    fn inc(&mut self) {
        self.cursor.advance_by(1);
    }

    #[inline]
    fn dec(&mut self) {
        self.cursor.advance_by(-1);
    }

    fn post_inc(&mut self) -> BoxedCursor<'a, C::Item> {
        let before = Self::boxed(self.cursor.clone());
        self.inc();
        before
    }

    fn post_dec(&mut self) -> BoxedCursor<'a, C::Item> {
        let before = Self::boxed(self.cursor.clone());
        self.dec();
        before
    }

    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.cursor.advance_by(n);
    }

    #[inline]
    fn sub_assign(&mut self, n: isize) {
        match n.checked_neg() {
            Some(back) => self.cursor.advance_by(back),
            // -isize::MIN is isize::MAX + 1
            None => {
                self.cursor.advance_by(isize::MAX);
                self.cursor.advance_by(1);
            }
        }
    }

    fn offset_box(&self, n: isize) -> BoxedCursor<'a, C::Item> {
        let mut moved = self.cursor.clone();
        moved.advance_by(n);
        Self::boxed(moved)
    }

    fn clone_box(&self) -> BoxedCursor<'a, C::Item> {
        Self::boxed(self.cursor.clone())
    }

    #[inline]
    fn position(&self) -> isize {
        self.cursor.position()
    }

    #[inline]
    fn region_len(&self) -> usize {
        self.cursor.len()
    }

    #[inline]
    fn origin(&self) -> *const C::Item {
        self.cursor.origin()
    }

    fn type_tag(&self) -> &'static str {
        type_name::<C>()
    }

    fn eq_dyn(&self, rhs: &dyn DynCursor<'a, C::Item>) -> Result<bool, CursorError> {
        match self.check_comparable(rhs) {
            Ok(()) => Ok(self.cursor.position() == rhs.position()),
            Err(CursorError::DifferentRegions) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn distance_dyn(&self, rhs: &dyn DynCursor<'a, C::Item>) -> Result<isize, CursorError> {
        self.check_comparable(rhs)?;
        Ok(self.cursor.position() - rhs.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{RevSliceCursor, SliceCursor};

    #[test]
    fn adapter_forwards_to_cursor() {
        let data = [1, 2, 3, 4];
        let mut a = Adapter::new(SliceCursor::begin(&data));

        a.inc();
        assert_eq!(a.get(), Some(&2));
        a.add_assign(2);
        assert_eq!(a.get(), Some(&4));
        a.sub_assign(3);
        assert_eq!(a.get(), Some(&1));
        assert_eq!(a.at_offset(3), Some(&4));

        let before = a.post_inc();
        assert_eq!(before.get(), Some(&1));
        assert_eq!(a.get(), Some(&2));

        let before = a.post_dec();
        assert_eq!(before.get(), Some(&2));
        assert_eq!(a.get(), Some(&1));
    }

    #[test]
    fn adapter_exposes_wrapped_cursor() {
        let data = [4u32, 5, 6];
        let mut a = Adapter::new(SliceCursor::at_position(&data, 1));
        assert_eq!(a.cursor().position(), 1);

        a.add_assign(1);
        let inner = a.into_inner();
        assert_eq!(inner.position(), 2);
        assert_eq!(inner.get(), Some(&6));
    }

    #[test]
    fn sub_assign_accepts_isize_min() {
        let data = [0u8; 2];
        let mut a = Adapter::new(SliceCursor::at_position(&data, -1));
        a.sub_assign(isize::MIN);
        assert_eq!(DynCursor::position(&a), isize::MAX);
        assert_eq!(DynCursor::get(&a), None);
    }

    #[test]
    fn clone_box_keeps_concrete_type() {
        let data = [1u16, 2];
        let a = Adapter::new(RevSliceCursor::begin(&data));
        let b = a.clone_box();

        assert_eq!(b.type_tag(), a.type_tag());
        assert_eq!(a.eq_dyn(&*b), Ok(true));
        assert_eq!(b.get(), Some(&2));
    }

    #[test]
    fn comparison_hooks_check_type() {
        let data = [1u16, 2];
        let fwd = Adapter::new(SliceCursor::begin(&data));
        let rev = Adapter::new(RevSliceCursor::begin(&data));

        assert!(matches!(
            fwd.eq_dyn(&rev),
            Err(CursorError::TypeMismatch { .. })
        ));
        assert!(fwd.distance_dyn(&rev).is_err());

        let moved = fwd.offset_box(2);
        assert_eq!(fwd.ne_dyn(&*moved), Ok(true));
        assert_eq!(moved.distance_dyn(&fwd), Ok(2));
    }

    #[test]
    fn different_regions_are_unequal() {
        let left = [0u8; 3];
        let right = [0u8; 3];
        let a = Adapter::new(SliceCursor::begin(&left));
        let b = Adapter::new(SliceCursor::begin(&right));

        assert_eq!(a.eq_dyn(&b), Ok(false));
        assert_eq!(a.distance_dyn(&b), Err(CursorError::DifferentRegions));
    }
}
