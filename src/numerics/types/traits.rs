// src/numerics/types/traits.rs
// Approximate comparison shared by every value type.

use crate::numerics::tolerance::Tolerance;

/// ApproxEq compares two values component by component under a `Tolerance`.
///
/// `==` on the value types stays an exact comparison; this is the trait to
/// reach for when a value went through one of the approximated functions.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool;

    /// Compare with the default tolerance (absolute `EPSILON`).
    fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::default())
    }
}

impl ApproxEq for f32 {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.accepts(*self, *other)
    }
}

impl<const N: usize> ApproxEq for [f32; N] {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| tolerance.accepts(*a, *b))
    }
}
