//! # erased_cursor
//!
//! Type erasure for contiguous random-access cursors.
//!
//! Any type implementing [`ContiguousCursor`] can be held behind the single
//! concrete type [`ErasedCursor`], which keeps the full cursor algebra:
//! dereference, increment and decrement, offsets, indexing and equality.
//!
//! ```rust
//! use erased_cursor::{ErasedCursor, RevSliceCursor, SliceCursor};
//!
//! fn second<'a>(it: &ErasedCursor<'a, u32>) -> Option<&'a u32> {
//!     it.at(1)
//! }
//!
//! let data = [1u32, 2, 3];
//! assert_eq!(second(&ErasedCursor::from(SliceCursor::begin(&data))), Some(&2));
//! assert_eq!(second(&ErasedCursor::from(RevSliceCursor::begin(&data))), Some(&2));
//!
//! let mut it = ErasedCursor::from_slice(&data);
//! let copy = it.clone();
//! it += 2;
//! assert_eq!(it.get(), Some(&3));
//! assert_eq!(copy.get(), Some(&1));
//! assert_eq!(it.iter().count(), 1);
//! ```
//!
//! ## Features
//! - `std` (default): `thiserror`-derived errors. Without it the crate is
//!   `no_std` and needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod adapter;
pub mod cursor;
pub mod erased;
pub mod error;

pub use adapter::{Adapter, BoxedCursor, DynCursor};
pub use cursor::{ContiguousCursor, RevSliceCursor, SliceCursor};
pub use erased::{ErasedCursor, ErasedIter};
pub use error::CursorError;
