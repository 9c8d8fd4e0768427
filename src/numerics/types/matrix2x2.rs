// src/numerics/types/matrix2x2.rs
// 2x2 row-major matrix for 2D linear maps (scale, rotation).

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::traits::ApproxEq;
use super::vector2::Vector2;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::scalar;
use crate::numerics::tolerance::Tolerance;

/// Matrix2x2 stores its elements row-major: `data[row][column]`.
///
/// The default value is the identity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix2x2 {
    pub data: [[f32; 2]; 2],
}

impl Default for Matrix2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix2x2 {
    /// Construct from elements given row by row.
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            data: [[m00, m01], [m10, m11]],
        }
    }

    /// Build from two rows.
    pub const fn from_rows(r0: [f32; 2], r1: [f32; 2]) -> Self {
        Self { data: [r0, r1] }
    }

    /// Build from two columns.
    pub const fn from_columns(c0: [f32; 2], c1: [f32; 2]) -> Self {
        Self {
            data: [[c0[0], c1[0]], [c0[1], c1[1]]],
        }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [f32; 2] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [f32; 2] {
        [self.data[0][idx], self.data[1][idx]]
    }

    /// Copy of the row-major storage.
    pub fn to_rows(&self) -> [[f32; 2]; 2] {
        self.data
    }

    /// Identity matrix
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// All zeros
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// `ad - bc`
    pub fn determinant(&self) -> f32 {
        self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        Self::new(
            self.data[0][0],
            self.data[1][0],
            self.data[0][1],
            self.data[1][1],
        )
    }

    /// Closed-form inverse `adj(M) / det(M)`.
    ///
    /// Returns the identity when the determinant is exactly 0.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            tracing::trace!(matrix = ?self, "inverting singular Matrix2x2, returning identity");
            return Self::identity();
        }
        self.adjugate_scaled(1.0 / det)
    }

    /// Inverse, or `SingularMatrix` where [`Matrix2x2::inverse`] would fall back.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(NumericsError::SingularMatrix { determinant: det });
        }
        Ok(self.adjugate_scaled(1.0 / det))
    }

    fn adjugate_scaled(&self, inv_det: f32) -> Self {
        let m = &self.data;
        Self::new(
            m[1][1] * inv_det,
            -m[0][1] * inv_det,
            -m[1][0] * inv_det,
            m[0][0] * inv_det,
        )
    }

    /// Overwrite with the identity.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Overwrite with a scaling matrix.
    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32) {
        *self = Self::new(scale_x, 0.0, 0.0, scale_y);
    }

    /// Overwrite with a counter-clockwise rotation by `radians`.
    pub fn set_rotation(&mut self, radians: f32) {
        let c = scalar::cos(radians);
        let s = scalar::sin(radians);
        *self = Self::new(c, -s, s, c);
    }
}

impl Serialize for Matrix2x2 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix2x2 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[f32; 2]; 2]>::deserialize(deserializer)?;
        Ok(Matrix2x2 { data })
    }
}

impl From<[[f32; 2]; 2]> for Matrix2x2 {
    fn from(data: [[f32; 2]; 2]) -> Self {
        Self { data }
    }
}

impl Add for Matrix2x2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix2x2 { data: result }
    }
}

impl Sub for Matrix2x2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix2x2 { data: result }
    }
}

impl Mul<f32> for Matrix2x2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        let mut result = self.data;
        for row in result.iter_mut() {
            for value in row.iter_mut() {
                *value *= scalar;
            }
        }
        Matrix2x2 { data: result }
    }
}

impl Mul<Matrix2x2> for Matrix2x2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: Matrix2x2) -> Matrix2x2 {
        let mut result = [[0.0; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    result[i][j] += self.data[i][k] * rhs.data[k][j];
                }
            }
        }
        Matrix2x2 { data: result }
    }
}

impl Mul<Vector2> for Matrix2x2 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2 {
            x: self.data[0][0] * rhs.x + self.data[0][1] * rhs.y,
            y: self.data[1][0] * rhs.x + self.data[1][1] * rhs.y,
        }
    }
}

impl AddAssign for Matrix2x2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Matrix2x2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign<f32> for Matrix2x2 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

/// `m[(row, column)]`; panics outside 0..2 like array indexing.
impl Index<(usize, usize)> for Matrix2x2 {
    type Output = f32;

    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        &self.data[row][column]
    }
}

impl IndexMut<(usize, usize)> for Matrix2x2 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        &mut self.data[row][column]
    }
}

impl ApproxEq for Matrix2x2 {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}
