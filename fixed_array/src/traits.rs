//! Compile-time registration of array-like containers.
//!
//! [`ArrayTraits`] is a lookup keyed by type: given a container type it
//! yields the element type, the fixed size, the underlying storage type and
//! the iterator types. Registering a type only requires an impl of this
//! trait, so foreign types such as `[T; N]` can be registered without
//! touching them.
//!
//! ```rust
//! use fixed_array::{ArrayTraits, FixedArray, size_of_registered};
//!
//! fn sum<A>(container: &A) -> u64
//! where
//!     A: ArrayTraits<Element = u64>,
//! {
//!     A::iter(container).sum()
//! }
//!
//! let arr = FixedArray::new([1u64, 2, 3]);
//! assert_eq!(sum(&arr), 6);
//! assert_eq!(sum(&[4u64, 5]), 9);
//! assert_eq!(size_of_registered::<FixedArray<u8, 16>>(), 16);
//! ```

use core::{iter, slice};

use crate::FixedArray;

/// Associated types and constants of a registered fixed-size container.
pub trait ArrayTraits {
    type Element;

    /// Capacity of every value of the registered type.
    const SIZE: usize;

    /// Native storage the container is laid out as.
    type Underlying;

    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    type IterMut<'a>: Iterator<Item = &'a mut Self::Element>
    where
        Self: 'a;

    type RevIter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    type RevIterMut<'a>: Iterator<Item = &'a mut Self::Element>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    fn iter_rev(&self) -> Self::RevIter<'_>;

    fn iter_rev_mut(&mut self) -> Self::RevIterMut<'_>;

    fn underlying(&self) -> &Self::Underlying;
}

/// Size recorded for `A` in its registration.
pub const fn size_of_registered<A: ArrayTraits>() -> usize {
    A::SIZE
}

impl<T, const N: usize> ArrayTraits for FixedArray<T, N> {
    type Element = T;
    const SIZE: usize = N;
    type Underlying = [T; N];
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;
    type RevIter<'a>
        = iter::Rev<slice::Iter<'a, T>>
    where
        Self: 'a;
    type RevIterMut<'a>
        = iter::Rev<slice::IterMut<'a, T>>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        FixedArray::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        FixedArray::iter_mut(self)
    }

    fn iter_rev(&self) -> Self::RevIter<'_> {
        FixedArray::iter_rev(self)
    }

    fn iter_rev_mut(&mut self) -> Self::RevIterMut<'_> {
        FixedArray::iter_rev_mut(self)
    }

    fn underlying(&self) -> &Self::Underlying {
        FixedArray::underlying(self)
    }
}

impl<T, const N: usize> ArrayTraits for [T; N] {
    type Element = T;
    const SIZE: usize = N;
    type Underlying = [T; N];
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;
    type RevIter<'a>
        = iter::Rev<slice::Iter<'a, T>>
    where
        Self: 'a;
    type RevIterMut<'a>
        = iter::Rev<slice::IterMut<'a, T>>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }

    fn iter_rev(&self) -> Self::RevIter<'_> {
        self.as_slice().iter().rev()
    }

    fn iter_rev_mut(&mut self) -> Self::RevIterMut<'_> {
        self.as_mut_slice().iter_mut().rev()
    }

    fn underlying(&self) -> &Self::Underlying {
        self
    }
}
