//! # fixed_array
//!
//! A fixed-capacity array wrapper whose length is part of its type, plus a
//! compile-time registration trait describing array-like containers.
//!
//! ```rust
//! use fixed_array::{fixed_array, FixedArray};
//!
//! let small = fixed_array![1u32, 2, 3];
//! let wide = FixedArray::<u32, 5>::widen_from(&small);
//!
//! assert_eq!(wide.as_slice(), &[1, 2, 3, 0, 0]);
//! assert!(wide.at(5).is_err());
//! ```
//!
//! ## Features
//! - `std` (default): `thiserror`-derived errors. Without it the crate is `no_std`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod array;
pub mod error;
pub mod traits;

pub use array::FixedArray;
pub use error::ArrayError;
pub use traits::{ArrayTraits, size_of_registered};
