//! Concrete contiguous cursors and the capability trait they implement.

use core::fmt;

/// A random-access position over elements stored in one contiguous region.
///
/// This is the capability set a cursor type must offer before it can be
/// erased into an [`ErasedCursor`](crate::ErasedCursor). Types that lack it
/// are rejected at compile time.
///
/// A cursor may be moved outside `0..len()`; only [`get`](Self::get) cares,
/// and returns `None` there.
pub trait ContiguousCursor<'a>: Clone {
    type Item: 'a;

    /// Element under the cursor.
    fn get(&self) -> Option<&'a Self::Item>;

    /// Moves the cursor by `n` positions; negative `n` moves backwards.
    ///
    /// The resulting position must fit in `isize`; moving past it
    /// overflows.
    fn advance_by(&mut self, n: isize);

    /// Logical position counted from the cursor's begin.
    fn position(&self) -> isize;

    /// Start of the underlying region. Used as identity, never read through.
    fn origin(&self) -> *const Self::Item;

    /// Number of elements in the underlying region.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `n` positions away, leaving `self` where it is.
    fn at(&self, n: isize) -> Option<&'a Self::Item> {
        let mut ahead = self.clone();
        ahead.advance_by(n);
        ahead.get()
    }
}

/// Forward cursor over a slice.
///
/// # Examples
///
/// ```
/// use erased_cursor::{ContiguousCursor, SliceCursor};
///
/// let data = [10, 20, 30];
/// let mut cursor = SliceCursor::begin(&data);
///
/// assert_eq!(cursor.get(), Some(&10));
/// cursor.advance_by(2);
/// assert_eq!(cursor.get(), Some(&30));
/// cursor.advance_by(1);
/// assert_eq!(cursor.get(), None);
/// assert_eq!(cursor.position(), SliceCursor::end(&data).position());
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: isize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn begin(slice: &'a [T]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    /// One past the last element.
    pub fn end(slice: &'a [T]) -> Self {
        SliceCursor {
            slice,
            pos: region_len(slice),
        }
    }

    pub fn at_position(slice: &'a [T], pos: isize) -> Self {
        SliceCursor { slice, pos }
    }
}

impl<'a, T> ContiguousCursor<'a> for SliceCursor<'a, T> {
    type Item = T;

    #[inline]
    fn get(&self) -> Option<&'a T> {
        usize::try_from(self.pos)
            .ok()
            .and_then(|i| self.slice.get(i))
    }

    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.pos += n;
    }

    #[inline]
    fn position(&self) -> isize {
        self.pos
    }

    #[inline]
    fn origin(&self) -> *const T {
        self.slice.as_ptr()
    }

    #[inline]
    fn len(&self) -> usize {
        self.slice.len()
    }
}

/// Reverse cursor over a slice: position 0 is the last element.
///
/// ```
/// use erased_cursor::{ContiguousCursor, RevSliceCursor};
///
/// let data = ['a', 'b', 'c'];
/// let cursor = RevSliceCursor::begin(&data);
///
/// assert_eq!(cursor.get(), Some(&'c'));
/// assert_eq!(cursor.at(2), Some(&'a'));
/// assert_eq!(cursor.at(3), None);
/// ```
pub struct RevSliceCursor<'a, T> {
    slice: &'a [T],
    pos: isize,
}

impl<'a, T> RevSliceCursor<'a, T> {
    pub fn begin(slice: &'a [T]) -> Self {
        RevSliceCursor { slice, pos: 0 }
    }

    /// One past the first element, walking backwards.
    pub fn end(slice: &'a [T]) -> Self {
        RevSliceCursor {
            slice,
            pos: region_len(slice),
        }
    }
}

impl<'a, T> ContiguousCursor<'a> for RevSliceCursor<'a, T> {
    type Item = T;

    #[inline]
    fn get(&self) -> Option<&'a T> {
        let index = region_len(self.slice) - 1 - self.pos;
        usize::try_from(index)
            .ok()
            .and_then(|i| self.slice.get(i))
    }

    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.pos += n;
    }

    #[inline]
    fn position(&self) -> isize {
        self.pos
    }

    #[inline]
    fn origin(&self) -> *const T {
        self.slice.as_ptr()
    }

    #[inline]
    fn len(&self) -> usize {
        self.slice.len()
    }
}

// Slices never hold more than `isize::MAX` bytes, so the length fits.
#[inline]
fn region_len<T>(slice: &[T]) -> isize {
    slice.len() as isize
}

// Manual impls: derives would demand `T: Clone` for a borrowed slice.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Clone for RevSliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevSliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> fmt::Debug for RevSliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevSliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}
