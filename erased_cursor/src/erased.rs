#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Index, Sub, SubAssign};

use crate::CursorError;
use crate::adapter::{Adapter, BoxedCursor};
use crate::cursor::{ContiguousCursor, RevSliceCursor, SliceCursor};

/// A contiguous cursor over `T` whose concrete type is hidden.
///
/// `ErasedCursor` owns exactly one heap-allocated [`Adapter`] around the
/// cursor it was built from, or nothing at all when it is *vacant*
/// (`Default`, or the source left behind by [`core::mem::take`]).
///
/// Cloning clones the concrete cursor, so clones move independently.
///
/// # Preconditions
///
/// - Reading a vacant cursor or a position outside the region is the
///   caller's mistake: [`get`](Self::get) returns `None`, [`try_get`](Self::try_get)
///   reports why, and indexing panics.
/// - Comparing cursors that erase different concrete types is not
///   meaningful. `==` answers `false`; [`try_eq`](Self::try_eq) reports
///   [`CursorError::TypeMismatch`].
///
/// # Examples
///
/// ```
/// use erased_cursor::{ErasedCursor, RevSliceCursor, SliceCursor};
///
/// let data = [1, 2, 3, 4];
///
/// // Two different concrete cursors behind one type
/// let cursors = [
///     ErasedCursor::new(SliceCursor::begin(&data)),
///     ErasedCursor::new(RevSliceCursor::begin(&data)),
/// ];
/// let firsts: Vec<i32> = cursors.iter().map(|c| *c.get().unwrap()).collect();
/// assert_eq!(firsts, vec![1, 4]);
///
/// // Random-access algebra
/// let it = ErasedCursor::from_slice(&data);
/// assert_eq!((&it + 2)[0], it[2]);
/// assert_eq!(&it + 3 - 3, it);
/// ```
pub struct ErasedCursor<'a, T: 'a> {
    inner: Option<BoxedCursor<'a, T>>,
}

impl<'a, T: 'a> ErasedCursor<'a, T> {
    /// Erases `cursor`, allocating an adapter of its concrete type.
    pub fn new<C>(cursor: C) -> Self
    where
        C: ContiguousCursor<'a, Item = T> + 'a,
    {
        tracing::trace!(
            cursor = core::any::type_name::<C>(),
            "allocating erased cursor"
        );
        ErasedCursor {
            inner: Some(Box::new(Adapter::new(cursor))),
        }
    }

    /// Forward cursor at the first element of `slice`.
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::new(SliceCursor::begin(slice))
    }

    /// Reverse cursor at the last element of `slice`.
    pub fn from_slice_rev(slice: &'a [T]) -> Self {
        Self::new(RevSliceCursor::begin(slice))
    }

    /// A cursor that owns no adapter.
    pub const fn vacant() -> Self {
        ErasedCursor { inner: None }
    }

    pub fn is_vacant(&self) -> bool {
        self.inner.is_none()
    }

    /// Moves the adapter out, leaving `self` vacant.
    ///
    /// ```
    /// use erased_cursor::ErasedCursor;
    ///
    /// let data = [3u8, 4];
    /// let mut source = ErasedCursor::from_slice(&data) + 1;
    /// let dest = source.take();
    ///
    /// assert_eq!(dest.get(), Some(&4));
    /// assert!(source.is_vacant());
    /// ```
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    fn adapter(&self) -> &BoxedCursor<'a, T> {
        match &self.inner {
            Some(adapter) => adapter,
            None => vacant_use(),
        }
    }

    fn adapter_mut(&mut self) -> &mut BoxedCursor<'a, T> {
        match &mut self.inner {
            Some(adapter) => adapter,
            None => vacant_use(),
        }
    }

    /// Element under the cursor; `None` when vacant or out of range.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.inner.as_ref()?.get()
    }

    /// Checked dereference.
    ///
    /// # Errors
    ///
    /// - `CursorError::Vacant` if the cursor owns no adapter
    /// - `CursorError::OutOfRange` if the position is outside the region
    ///
    /// ```
    /// use erased_cursor::{CursorError, ErasedCursor};
    ///
    /// let data = [7u8];
    /// let mut it = ErasedCursor::from_slice(&data);
    /// assert_eq!(it.try_get(), Ok(&7));
    ///
    /// it.inc();
    /// assert_eq!(it.try_get(), Err(CursorError::OutOfRange { position: 1, len: 1 }));
    ///
    /// let taken = std::mem::take(&mut it);
    /// assert_eq!(it.try_get(), Err(CursorError::Vacant));
    /// assert!(!taken.is_vacant());
    /// ```
    pub fn try_get(&self) -> Result<&'a T, CursorError> {
        let adapter = self.inner.as_ref().ok_or_else(|| {
            tracing::debug!("dereferenced a vacant erased cursor");
            CursorError::Vacant
        })?;
        adapter.get().ok_or_else(|| {
            let (position, len) = (adapter.position(), adapter.region_len());
            tracing::debug!(position, len, "dereferenced erased cursor out of range");
            CursorError::OutOfRange { position, len }
        })
    }

    /// Element `n` positions away, without moving.
    #[inline]
    pub fn at(&self, n: isize) -> Option<&'a T> {
        self.inner.as_ref()?.at_offset(n)
    }

    /// Pointer to the element under the cursor.
    pub fn as_ptr(&self) -> Option<*const T> {
        self.get().map(|item| item as *const T)
    }

    /// Logical position from the cursor's begin; `None` when vacant.
    pub fn position(&self) -> Option<isize> {
        self.inner.as_ref().map(|adapter| adapter.position())
    }

    /// Length of the walked region; `None` when vacant.
    pub fn region_len(&self) -> Option<usize> {
        self.inner.as_ref().map(|adapter| adapter.region_len())
    }

    /// Name of the erased concrete cursor type.
    pub fn type_tag(&self) -> Option<&'static str> {
        self.inner.as_ref().map(|adapter| adapter.type_tag())
    }

    /// Pre-increment.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is vacant, as do all moving operations.
    pub fn inc(&mut self) -> &mut Self {
        self.adapter_mut().inc();
        self
    }

    /// Pre-decrement.
    pub fn dec(&mut self) -> &mut Self {
        self.adapter_mut().dec();
        self
    }

    /// Post-increment: moves forward and returns the previous position.
    ///
    /// ```
    /// use erased_cursor::ErasedCursor;
    ///
    /// let data = ['a', 'b'];
    /// let mut it = ErasedCursor::from_slice(&data);
    /// let before = it.post_inc();
    /// assert_eq!(before.get(), Some(&'a'));
    /// assert_eq!(it.get(), Some(&'b'));
    /// ```
    pub fn post_inc(&mut self) -> Self {
        ErasedCursor {
            inner: Some(self.adapter_mut().post_inc()),
        }
    }

    /// Post-decrement: moves back and returns the previous position.
    pub fn post_dec(&mut self) -> Self {
        ErasedCursor {
            inner: Some(self.adapter_mut().post_dec()),
        }
    }

    /// Checked equality.
    ///
    /// # Errors
    ///
    /// - `CursorError::Vacant` if either side is vacant
    /// - `CursorError::TypeMismatch` if the sides erase different cursor types
    pub fn try_eq(&self, other: &Self) -> Result<bool, CursorError> {
        match (&self.inner, &other.inner) {
            (Some(lhs), Some(rhs)) => lhs.eq_dyn(&**rhs),
            _ => Err(CursorError::Vacant),
        }
    }

    /// Number of steps from `origin` to `self`, so that
    /// `origin + self.distance(origin)? == self`.
    ///
    /// # Errors
    ///
    /// Fails if either side is vacant, the concrete types differ, or the
    /// cursors walk different regions.
    ///
    /// ```
    /// use erased_cursor::ErasedCursor;
    ///
    /// let data = [0u32; 10];
    /// let a = ErasedCursor::from_slice(&data);
    /// let b = &a + 7;
    /// assert_eq!(b.distance(&a), Ok(7));
    /// assert_eq!(a.distance(&b), Ok(-7));
    /// ```
    pub fn distance(&self, origin: &Self) -> Result<isize, CursorError> {
        match (&self.inner, &origin.inner) {
            (Some(lhs), Some(rhs)) => lhs.distance_dyn(&**rhs),
            _ => Err(CursorError::Vacant),
        }
    }

    /// Iterates from the current position to the end of the region.
    ///
    /// The cursor itself does not move, so each call restarts the walk.
    pub fn iter(&self) -> ErasedIter<'a, T> {
        ErasedIter {
            cursor: self.clone(),
        }
    }
}

#[cold]
#[track_caller]
fn vacant_use() -> ! {
    panic!("{}", CursorError::Vacant)
}

impl<T> Default for ErasedCursor<'_, T> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<T> Clone for ErasedCursor<'_, T> {
    fn clone(&self) -> Self {
        ErasedCursor {
            inner: self.inner.as_ref().map(|adapter| adapter.clone_box()),
        }
    }
}

impl<'a, T, C> From<C> for ErasedCursor<'a, T>
where
    C: ContiguousCursor<'a, Item = T> + 'a,
{
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}

impl<T> fmt::Debug for ErasedCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(adapter) => f
                .debug_struct("ErasedCursor")
                .field("cursor", &adapter.type_tag())
                .field("position", &adapter.position())
                .field("len", &adapter.region_len())
                .finish(),
            None => f.write_str("ErasedCursor(vacant)"),
        }
    }
}

/// Same concrete type, same region, same position.
impl<T> PartialEq for ErasedCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs.eq_dyn(&**rhs).unwrap_or(false),
            _ => false,
        }
    }
}

impl<T> AddAssign<isize> for ErasedCursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.adapter_mut().add_assign(n);
    }
}

impl<T> SubAssign<isize> for ErasedCursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.adapter_mut().sub_assign(n);
    }
}

impl<'a, T> Add<isize> for ErasedCursor<'a, T> {
    type Output = ErasedCursor<'a, T>;

    fn add(mut self, n: isize) -> Self::Output {
        self += n;
        self
    }
}

impl<'a, T> Sub<isize> for ErasedCursor<'a, T> {
    type Output = ErasedCursor<'a, T>;

    fn sub(mut self, n: isize) -> Self::Output {
        self -= n;
        self
    }
}

/// Allocates a new cursor `n` positions away; the operand stays put.
impl<'a, T> Add<isize> for &ErasedCursor<'a, T> {
    type Output = ErasedCursor<'a, T>;

    fn add(self, n: isize) -> Self::Output {
        ErasedCursor {
            inner: Some(self.adapter().offset_box(n)),
        }
    }
}

impl<'a, T> Sub<isize> for &ErasedCursor<'a, T> {
    type Output = ErasedCursor<'a, T>;

    fn sub(self, n: isize) -> Self::Output {
        let mut moved = ErasedCursor {
            inner: Some(self.adapter().clone_box()),
        };
        moved -= n;
        moved
    }
}

/// `it[n]` reads the element `n` positions away without moving `it`.
///
/// Panics when the cursor is vacant or the element is out of range.
impl<T> Index<isize> for ErasedCursor<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &Self::Output {
        match self.adapter().at_offset(n) {
            Some(item) => item,
            None => panic!("erased cursor offset {} is out of range", n),
        }
    }
}

impl<'a, T> IntoIterator for ErasedCursor<'a, T> {
    type Item = &'a T;
    type IntoIter = ErasedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        ErasedIter { cursor: self }
    }
}

/// Iterator over the elements from a cursor's position to the region end.
#[derive(Debug)]
pub struct ErasedIter<'a, T: 'a> {
    cursor: ErasedCursor<'a, T>,
}

impl<T> Clone for ErasedIter<'_, T> {
    fn clone(&self) -> Self {
        ErasedIter {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, T> Iterator for ErasedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.get()?;
        self.cursor.inc();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.cursor.position(), self.cursor.region_len()) {
            (Some(pos), Some(len)) if pos >= 0 => len.saturating_sub(pos as usize),
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ErasedIter<'_, T> {}

impl<T> FusedIterator for ErasedIter<'_, T> {}
