//! Fixed-size linear algebra and scalar approximations for real-time code.
//!
//! Everything here is a plain `Copy` value type over `f32`. Degenerate
//! inputs never fail: they produce a documented sentinel (zero vector,
//! identity matrix or quaternion, `0`). The `try_*` variants report the
//! same cases as [`NumericsError`] for callers that want to branch on them.

pub mod numerics;

pub use numerics::{
    ApproxEq, Matrix2x2, Matrix3x3, Matrix4x4, NumericsError, Quaternion, Tolerance, Vector2,
    Vector3, Vector4,
};

/// Glob-importable set of the algebra types and helper traits.
pub mod prelude {
    pub use crate::numerics::constants::{DEG_TO_RAD, EPSILON, HALF_PI, PI, RAD_TO_DEG, TWO_PI};
    pub use crate::numerics::scalar;
    pub use crate::numerics::{
        ApproxEq, Matrix2x2, Matrix3x3, Matrix4x4, Quaternion, Tolerance, Vector2, Vector3,
        Vector4,
    };
}
