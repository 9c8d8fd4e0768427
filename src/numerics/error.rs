// src/numerics/error.rs
// Errors reported by the checked (`try_*`) operations.

/// Degenerate inputs reported by the checked operations.
///
/// The unchecked operations never return these; they fall back to a sentinel
/// value (zero vector, identity matrix or quaternion) instead.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Singular matrix: determinant is {determinant}")]
    SingularMatrix { determinant: f32 },

    #[error("Zero length: cannot normalize or invert a zero-length value")]
    ZeroLength,
}

/// Result alias for the checked operations.
pub type Result<T> = core::result::Result<T, NumericsError>;
