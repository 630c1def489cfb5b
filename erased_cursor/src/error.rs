#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[cfg_attr(feature = "std", error("erased cursor is vacant"))]
    Vacant,

    #[cfg_attr(
        feature = "std",
        error("Position {position} is outside a region of length {len}")
    )]
    OutOfRange { position: isize, len: usize },

    #[cfg_attr(
        feature = "std",
        error("cannot compare cursors of different types: {left} vs {right}")
    )]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    #[cfg_attr(feature = "std", error("cursors walk different regions"))]
    DifferentRegions,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CursorError::Vacant => write!(f, "erased cursor is vacant"),
            CursorError::OutOfRange { position, len } => write!(
                f,
                "Position {} is outside a region of length {}",
                position, len
            ),
            CursorError::TypeMismatch { left, right } => write!(
                f,
                "cannot compare cursors of different types: {} vs {}",
                left, right
            ),
            CursorError::DifferentRegions => write!(f, "cursors walk different regions"),
        }
    }
}
