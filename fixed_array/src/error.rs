#[cfg(feature = "std")]
use thiserror::Error;

/// Fixed array errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access past the fixed capacity
    #[cfg_attr(feature = "std", error("Index {index} out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },

    /// Source slice longer than the array it initialises
    #[cfg_attr(
        feature = "std",
        error("Cannot fit {len} elements into an array of capacity {capacity}")
    )]
    CapacityExceeded { len: usize, capacity: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArrayError::OutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            ArrayError::CapacityExceeded { len, capacity } => write!(
                f,
                "Cannot fit {} elements into an array of capacity {}",
                len, capacity
            ),
        }
    }
}
