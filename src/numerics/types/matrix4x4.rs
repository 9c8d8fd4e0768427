// src/numerics/types/matrix4x4.rs
// 4x4 row-major matrix for homogeneous 3D transforms.

#![allow(clippy::too_many_arguments)]

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::matrix3x3::Matrix3x3;
use super::traits::ApproxEq;
use super::vector3::Vector3;
use super::vector4::Vector4;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::scalar;
use crate::numerics::tolerance::Tolerance;

/// Matrix4x4 with row-major storage, `data[row][column]`.
///
/// Translations live in the last column, so points are transformed as
/// column vectors: `m * Vector3` promotes the point to `(x, y, z, 1)` and
/// divides by the resulting `w` when it is non-zero. `m * Vector4` is the
/// plain linear map.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4 {
    pub data: [[f32; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4x4 {
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            data: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    /// Build from four rows.
    pub const fn from_rows(r0: [f32; 4], r1: [f32; 4], r2: [f32; 4], r3: [f32; 4]) -> Self {
        Self {
            data: [r0, r1, r2, r3],
        }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [f32; 4] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [f32; 4] {
        [
            self.data[0][idx],
            self.data[1][idx],
            self.data[2][idx],
            self.data[3][idx],
        ]
    }

    /// Copy of the row-major storage.
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        self.data
    }

    /// Identity matrix
    pub const fn identity() -> Self {
        Self::from_rows(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// All zeros
    pub const fn zero() -> Self {
        Self { data: [[0.0; 4]; 4] }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[j][i];
            }
        }
        Matrix4x4 { data: result }
    }

    /// The 3x3 matrix left after removing `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3x3 {
        let mut result = [[0.0; 3]; 3];
        let rows = (0..4).filter(|&r| r != row);
        for (target_row, r) in result.iter_mut().zip(rows) {
            let cols = (0..4).filter(|&c| c != col);
            for (value, c) in target_row.iter_mut().zip(cols) {
                *value = self.data[r][c];
            }
        }
        Matrix3x3 { data: result }
    }

    /// Signed minor at `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let minor = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|j| self.data[0][j] * self.cofactor(0, j)).sum()
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.cofactor(j, i);
            }
        }
        Matrix4x4 { data: result }
    }

    /// Adjugate over determinant; the identity when the determinant is exactly 0.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            tracing::trace!(matrix = ?self, "inverting singular Matrix4x4, returning identity");
            return Self::identity();
        }
        self.adjugate() * (1.0 / det)
    }

    /// Inverse, or `SingularMatrix` when the determinant is exactly 0.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(NumericsError::SingularMatrix { determinant: det });
        }
        Ok(self.adjugate() * (1.0 / det))
    }

    /// Reset to the identity.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Overwrite with a scaling matrix (`w` row kept at identity).
    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32, scale_z: f32) {
        *self = Self::zero();
        self.data[0][0] = scale_x;
        self.data[1][1] = scale_y;
        self.data[2][2] = scale_z;
        self.data[3][3] = 1.0;
    }

    /// Overwrite with a translation by `(tx, ty, tz)`.
    pub fn set_translation(&mut self, tx: f32, ty: f32, tz: f32) {
        *self = Self::identity();
        self.data[0][3] = tx;
        self.data[1][3] = ty;
        self.data[2][3] = tz;
    }

    /// Overwrite with a counter-clockwise rotation about the Z axis.
    pub fn set_rotation(&mut self, radians: f32) {
        let c = scalar::cos(radians);
        let s = scalar::sin(radians);
        *self = Self::identity();
        self.data[0][0] = c;
        self.data[0][1] = -s;
        self.data[1][0] = s;
        self.data[1][1] = c;
    }
}

impl Serialize for Matrix4x4 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix4x4 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[f32; 4]; 4]>::deserialize(deserializer)?;
        Ok(Matrix4x4 { data })
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    fn from(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }
}

impl Add for Matrix4x4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix4x4 { data: result }
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix4x4 { data: result }
    }
}

impl Mul<f32> for Matrix4x4 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[i][j] * scalar;
            }
        }
        Matrix4x4 { data: result }
    }
}

impl Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut result = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += self.data[i][k] * rhs.data[k][j];
                }
            }
        }
        Matrix4x4 { data: result }
    }
}

impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Vector4 {
        let m = &self.data;
        Vector4 {
            x: m[0][0] * rhs.x + m[0][1] * rhs.y + m[0][2] * rhs.z + m[0][3] * rhs.w,
            y: m[1][0] * rhs.x + m[1][1] * rhs.y + m[1][2] * rhs.z + m[1][3] * rhs.w,
            z: m[2][0] * rhs.x + m[2][1] * rhs.y + m[2][2] * rhs.z + m[2][3] * rhs.w,
            w: m[3][0] * rhs.x + m[3][1] * rhs.y + m[3][2] * rhs.z + m[3][3] * rhs.w,
        }
    }
}

impl Mul<Vector3> for Matrix4x4 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        let m = &self.data;
        let mut x = m[0][0] * rhs.x + m[0][1] * rhs.y + m[0][2] * rhs.z + m[0][3];
        let mut y = m[1][0] * rhs.x + m[1][1] * rhs.y + m[1][2] * rhs.z + m[1][3];
        let mut z = m[2][0] * rhs.x + m[2][1] * rhs.y + m[2][2] * rhs.z + m[2][3];
        let w = m[3][0] * rhs.x + m[3][1] * rhs.y + m[3][2] * rhs.z + m[3][3];
        if w != 0.0 {
            x /= w;
            y /= w;
            z /= w;
        }
        Vector3::new(x, y, z)
    }
}

impl AddAssign for Matrix4x4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Matrix4x4 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign<f32> for Matrix4x4 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        &self.data[row][column]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        &mut self.data[row][column]
    }
}

impl ApproxEq for Matrix4x4 {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::constants::HALF_PI;

    fn translation(tx: f32, ty: f32, tz: f32) -> Matrix4x4 {
        let mut m = Matrix4x4::default();
        m.set_translation(tx, ty, tz);
        m
    }

    #[test]
    fn test_default_is_identity() {
        let m = Matrix4x4::default();
        assert_eq!(m, Matrix4x4::identity());
        assert_eq!(m.row(3), [0.0, 0.0, 0.0, 1.0]);

        let mut n = Matrix4x4::zero();
        n.set_identity();
        assert_eq!(n, Matrix4x4::identity());
    }

    #[test]
    fn test_accessors() {
        let m = Matrix4x4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m.row(1), [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(m.column(2), [3.0, 7.0, 11.0, 15.0]);
        assert_eq!(m[(3, 0)], 13.0);
        assert_eq!(m.transpose().row(0), [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(Matrix4x4::from(m.to_rows()), m);
    }

    #[test]
    fn test_arithmetic() {
        let a = translation(1.0, 2.0, 3.0);
        let b = Matrix4x4::identity();

        let sum = a + b;
        assert_eq!(sum.row(0), [2.0, 0.0, 0.0, 1.0]);
        assert_eq!((a - b).column(3), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!((b * 3.0).row(2), [0.0, 0.0, 3.0, 0.0]);

        let mut c = a;
        c += b;
        c -= b;
        c *= 1.0;
        assert_eq!(c, a);
    }

    #[test]
    fn test_identity_times_vector4() {
        let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(Matrix4x4::identity() * v, v);
    }

    #[test]
    fn test_vector4_product_is_linear() {
        let t = translation(1.0, 2.0, 3.0);
        // w = 0: directions ignore translation
        assert_eq!(t * Vector4::new(1.0, 0.0, 0.0, 0.0), Vector4::new(1.0, 0.0, 0.0, 0.0));
        // w = 2: translation scaled by w, no division
        assert_eq!(t * Vector4::new(0.0, 0.0, 0.0, 2.0), Vector4::new(2.0, 4.0, 6.0, 2.0));
    }

    #[test]
    fn test_vector3_product_is_homogeneous() {
        let t = translation(1.0, 2.0, 3.0);
        assert_eq!(t * Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 3.0, 4.0));

        let mut projective = Matrix4x4::identity();
        projective[(3, 3)] = 2.0;
        assert_eq!(projective * Vector3::new(2.0, 4.0, 6.0), Vector3::new(1.0, 2.0, 3.0));

        let mut flat = Matrix4x4::identity();
        flat[(3, 3)] = 0.0;
        assert_eq!(flat * Vector3::new(2.0, 4.0, 6.0), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_matrix_product_composes_transforms() {
        let mut scale = Matrix4x4::identity();
        scale.set_scale(2.0, 2.0, 2.0);
        let t = translation(1.0, 0.0, 0.0);

        // Scale first, then translate.
        let m = t * scale;
        assert_eq!(m * Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 2.0, 2.0));
        assert_eq!(m * Matrix4x4::identity(), m);
    }

    #[test]
    fn test_setters_overwrite_everything() {
        let mut m = Matrix4x4::new(
            9.0, 9.0, 9.0, 9.0,
            9.0, 9.0, 9.0, 9.0,
            9.0, 9.0, 9.0, 9.0,
            9.0, 9.0, 9.0, 9.0,
        );
        m.set_scale(1.0, 2.0, 3.0);
        assert_eq!(
            m,
            Matrix4x4::from_rows(
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 2.0, 0.0, 0.0],
                [0.0, 0.0, 3.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            )
        );

        m.set_translation(4.0, 5.0, 6.0);
        assert_eq!(m.column(3), [4.0, 5.0, 6.0, 1.0]);
        assert_eq!(m.row(0), [1.0, 0.0, 0.0, 4.0]);

        m.set_rotation(HALF_PI);
        let rotated = m * Vector3::new(1.0, 0.0, 0.0);
        assert!(rotated.approx_eq(&Vector3::new(0.0, 1.0, 0.0), Tolerance::loose()));
        assert_eq!(m.row(2), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(m.row(3), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_minor_and_determinant() {
        let m = Matrix4x4::from_rows(
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        );
        assert_eq!(
            m.minor(0, 3),
            Matrix3x3::from_rows([0.0, 3.0, 0.0], [0.0, 0.0, 4.0], [0.0, 0.0, 0.0])
        );
        assert_eq!(m.determinant(), 24.0);
        assert_eq!(Matrix4x4::identity().determinant(), 1.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let mut rotation = Matrix4x4::identity();
        rotation.set_rotation(0.3);
        let mut scale = Matrix4x4::identity();
        scale.set_scale(2.0, 0.5, 4.0);
        let m = translation(1.0, -2.0, 3.0) * rotation * scale;

        let inv = m.inverse();
        assert!((m * inv).approx_eq(&Matrix4x4::identity(), Tolerance::absolute(1e-5)));
        assert!((inv * m).approx_eq(&Matrix4x4::identity(), Tolerance::absolute(1e-5)));

        let point = Vector3::new(0.5, 0.25, -1.0);
        assert!((inv * (m * point)).approx_eq(&point, Tolerance::absolute(1e-5)));
    }

    #[test]
    fn test_translation_inverse() {
        let inv = translation(1.0, 2.0, 3.0).inverse();
        assert_eq!(inv, translation(-1.0, -2.0, -3.0));
        assert_eq!(translation(1.0, 2.0, 3.0).try_inverse(), Ok(inv));
    }

    #[test]
    fn test_singular_inverse_falls_back_to_identity() {
        let m = Matrix4x4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix4x4::identity());
        assert_eq!(
            m.try_inverse(),
            Err(NumericsError::SingularMatrix { determinant: 0.0 })
        );
    }
}
