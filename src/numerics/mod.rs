// src/numerics/mod.rs
// Top-level numerics module. Scalar approximations live at this level,
// the fixed-size algebra types under `types`.

pub mod constants;
pub mod error;
pub mod scalar;
pub mod tolerance;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix2x2;
    pub mod matrix3x3;
    pub mod matrix4x4;
    pub mod quaternion;
    pub mod traits;
    pub mod vector2;
    pub mod vector3;
    pub mod vector4;
}

pub use error::{NumericsError, Result};
pub use tolerance::Tolerance;
pub use types::matrix2x2::Matrix2x2;
pub use types::matrix3x3::Matrix3x3;
pub use types::matrix4x4::Matrix4x4;
pub use types::quaternion::Quaternion;
pub use types::traits::ApproxEq;
pub use types::vector2::Vector2;
pub use types::vector3::Vector3;
pub use types::vector4::Vector4;
