use core::ops::{Index, IndexMut};
use core::{array, iter, slice};

use bytemuck::{Pod, Zeroable};

use crate::ArrayError;

/// Fixed-capacity array whose length `N` is part of the type.
///
/// `FixedArray<T, N>` is a transparent wrapper over `[T; N]` with value
/// semantics: copying or cloning it copies every element, and its capacity
/// never changes after construction.
///
/// # Construction
///
/// - From an element list: [`FixedArray::new`], `From<[T; N]>` or the
///   [`fixed_array!`](crate::fixed_array) macro
/// - Every slot defaulted: [`Default`]
/// - Widening from a smaller array of the same element type:
///   [`FixedArray::widen_from`] / [`FixedArray::widen`]
/// - From a slice no longer than `N`: `TryFrom<&[T]>`
///
/// # Examples
///
/// ```
/// use fixed_array::{fixed_array, FixedArray};
///
/// let mut arr = fixed_array![10u16, 20, 30];
/// assert_eq!(arr.size(), 3);
/// assert_eq!(arr.at(1), Ok(&20));
///
/// arr[2] = 99;
/// assert_eq!(arr.iter().copied().sum::<u16>(), 129);
///
/// arr.fill(7);
/// assert!(arr.iter().all(|&v| v == 7));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedArray<T, const N: usize> {
    items: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// The fixed capacity, available without an instance.
    pub const SIZE: usize = N;

    /// Creates an array from an explicit element list.
    ///
    /// The list length must equal `N`; a mismatch is rejected by the
    /// compiler.
    ///
    /// ```
    /// use fixed_array::FixedArray;
    ///
    /// let arr = FixedArray::new(['a', 'b']);
    /// assert_eq!(arr.as_slice(), &['a', 'b']);
    /// ```
    #[inline]
    pub const fn new(items: [T; N]) -> Self {
        FixedArray { items }
    }

    /// Builds a larger array from a smaller one of the same element type.
    ///
    /// The `M` source elements are cloned in order; the remaining `N - M`
    /// slots hold `T::default()`. Widening from a larger array does not
    /// compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_array::{fixed_array, FixedArray};
    ///
    /// let small = fixed_array![1i32, 2, 3];
    /// let wide = FixedArray::<i32, 5>::widen_from(&small);
    /// assert_eq!(wide.as_slice(), &[1, 2, 3, 0, 0]);
    /// ```
    ///
    /// ```compile_fail
    /// use fixed_array::{fixed_array, FixedArray};
    ///
    /// let big = fixed_array![1i32, 2, 3];
    /// let _ = FixedArray::<i32, 2>::widen_from(&big);
    /// ```
    pub fn widen_from<const M: usize>(source: &FixedArray<T, M>) -> Self
    where
        T: Clone + Default,
    {
        const { assert!(M <= N, "cannot widen from a larger array") };
        FixedArray {
            items: array::from_fn(|i| source.items.get(i).cloned().unwrap_or_default()),
        }
    }

    /// Consuming form of [`widen_from`](Self::widen_from): moves the
    /// elements into an array of capacity `W >= N`.
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let names = fixed_array![String::from("a"), String::from("b")];
    /// let wide = names.widen::<3>();
    /// assert_eq!(wide[1], "b");
    /// assert!(wide[2].is_empty());
    /// ```
    pub fn widen<const W: usize>(self) -> FixedArray<T, W>
    where
        T: Default,
    {
        const { assert!(N <= W, "cannot widen into a smaller array") };
        let mut source = self.items.into_iter();
        FixedArray {
            items: array::from_fn(|_| source.next().unwrap_or_default()),
        }
    }

    /// Returns the fixed capacity `N`.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Same as [`size`](Self::size).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` only for the zero-capacity array.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::OutOfBounds` if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_array::{fixed_array, ArrayError};
    ///
    /// let arr = fixed_array![5u8, 6, 7];
    /// assert_eq!(arr.at(2), Ok(&7));
    /// assert_eq!(arr.at(3), Err(ArrayError::OutOfBounds { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.items.get(index).ok_or_else(|| out_of_bounds(index, N))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::OutOfBounds` if `index >= N`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.items.get_mut(index).ok_or_else(|| out_of_bounds(index, N))
    }

    /// Reads the element at `index` by value.
    ///
    /// Intended for small `Copy` element types where handing out a reference
    /// buys nothing.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`, like indexing.
    #[inline]
    pub fn value(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.items[index]
    }

    /// Overwrites every slot with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.items.fill(value);
    }

    /// First element, `None` when `N == 0`.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.items.first_mut()
    }

    /// Last element, `None` when `N == 0`.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Pointer to the first slot of the contiguous storage.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// The native array backing this container.
    #[inline]
    pub fn underlying(&self) -> &[T; N] {
        &self.items
    }

    #[inline]
    pub fn underlying_mut(&mut self) -> &mut [T; N] {
        &mut self.items
    }

    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.items
    }

    /// Iterates over the elements in storage order.
    ///
    /// Every call starts a fresh traversal.
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let arr = fixed_array![1u32, 2, 3];
    /// assert_eq!(arr.iter().sum::<u32>(), 6);
    /// assert_eq!(arr.iter().count(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Iterates over the elements from last to first.
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let arr = fixed_array!['x', 'y', 'z'];
    /// let reversed: Vec<char> = arr.iter_rev().copied().collect();
    /// assert_eq!(reversed, vec!['z', 'y', 'x']);
    /// ```
    #[inline]
    pub fn iter_rev(&self) -> iter::Rev<slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    #[inline]
    pub fn iter_rev_mut(&mut self) -> iter::Rev<slice::IterMut<'_, T>> {
        self.items.iter_mut().rev()
    }
}

impl<T: Pod, const N: usize> FixedArray<T, N> {
    /// Zero-copy view of the elements as raw bytes.
    ///
    /// ```
    /// use fixed_array::fixed_array;
    ///
    /// let arr = fixed_array![0x0102u16, 0x0304];
    /// assert_eq!(arr.as_bytes().len(), 4);
    /// ```
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.items)
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.items)
    }
}

#[inline]
fn out_of_bounds(index: usize, len: usize) -> ArrayError {
    tracing::debug!(index, len, "checked array access out of bounds");
    ArrayError::OutOfBounds { index, len }
}

/// Unchecked-by-contract access: `index < N` is the caller's obligation and
/// a violation panics.
impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        FixedArray {
            items: array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        FixedArray { items }
    }
}

/// Aggregate-style initialisation: the slice fills the front of the array
/// and the tail is defaulted.
impl<T: Clone + Default, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = ArrayError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        if values.len() > N {
            tracing::debug!(len = values.len(), capacity = N, "slice does not fit array");
            return Err(ArrayError::CapacityExceeded {
                len: values.len(),
                capacity: N,
            });
        }
        Ok(FixedArray {
            items: array::from_fn(|i| values.get(i).cloned().unwrap_or_default()),
        })
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

// SAFETY: `repr(transparent)` over `[T; N]`, which has no padding and is
// valid when zeroed whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for FixedArray<T, N> {}

// SAFETY: as above; `T: Pod` implies `T: Copy + 'static`, so the derived
// `Copy` impl applies.
unsafe impl<T: Pod, const N: usize> Pod for FixedArray<T, N> {}

/// Builds a [`FixedArray`] from an element list, like `vec!`.
///
/// ```
/// use fixed_array::fixed_array;
///
/// let listed = fixed_array![1u8, 2, 3];
/// let repeated = fixed_array![0u8; 4];
/// assert_eq!(listed.size(), 3);
/// assert_eq!(repeated.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! fixed_array {
    ($item:expr; $n:expr) => {
        $crate::FixedArray::new([$item; $n])
    };
    ($($item:expr),* $(,)?) => {
        $crate::FixedArray::new([$($item),*])
    };
}
