// src/numerics/types/matrix3x3.rs
// 3x3 row-major matrix: linear maps in 3D and homogeneous transforms in 2D.

#![allow(clippy::too_many_arguments)]

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::traits::ApproxEq;
use super::vector2::Vector2;
use super::vector3::Vector3;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::tolerance::Tolerance;

/// Matrix3x3 with row-major storage, `data[row][column]`.
///
/// Applied to a [`Vector3`] it is a plain linear map. Applied to a
/// [`Vector2`] the vector is promoted to `(x, y, 1)` and the result is divided
/// by the computed `w`, unless that `w` is 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3 {
    pub data: [[f32; 3]; 3],
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix3x3 {
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self {
            data: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    /// Construct a new matrix from 3 rows
    pub const fn from_rows(r0: [f32; 3], r1: [f32; 3], r2: [f32; 3]) -> Self {
        Self { data: [r0, r1, r2] }
    }

    /// Construct a new matrix from 3 columns
    pub const fn from_columns(c0: [f32; 3], c1: [f32; 3], c2: [f32; 3]) -> Self {
        Self {
            data: [
                [c0[0], c1[0], c2[0]],
                [c0[1], c1[1], c2[1]],
                [c0[2], c1[2], c2[2]],
            ],
        }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [f32; 3] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [f32; 3] {
        [self.data[0][idx], self.data[1][idx], self.data[2][idx]]
    }

    /// Copy of the row-major storage.
    pub fn to_rows(&self) -> [[f32; 3]; 3] {
        self.data
    }

    /// Identity matrix
    pub const fn identity() -> Self {
        Self::from_rows([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
    }

    /// Zero matrix
    pub const fn zero() -> Self {
        Self { data: [[0.0; 3]; 3] }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[j][i];
            }
        }
        Matrix3x3 { data: result }
    }

    /// Cofactor of the element at (`row`, `col`).
    ///
    /// The remaining rows and columns are taken cyclically, which makes the
    /// 2x2 minor come out already carrying the `(-1)^(row + col)` sign.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let m = &self.data;
        let (r1, r2) = ((row + 1) % 3, (row + 2) % 3);
        let (c1, c2) = ((col + 1) % 3, (col + 2) % 3);
        m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]
    }

    /// Signed 2x2 minors, one per entry.
    pub fn cofactor_matrix(&self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.cofactor(i, j);
            }
        }
        Matrix3x3 { data: result }
    }

    /// Adjugate: the transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// `adjugate() * (1 / determinant())`, or the identity when the
    /// determinant is exactly 0.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            tracing::trace!(matrix = ?self, "inverting singular Matrix3x3, returning identity");
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

    /// Overwrite with a diagonal scaling matrix.
    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32, scale_z: f32) {
        *self = Self::from_rows(
            [scale_x, 0.0, 0.0],
            [0.0, scale_y, 0.0],
            [0.0, 0.0, scale_z],
        );
    }
}

// Generic serde implementations for Matrix3x3
impl Serialize for Matrix3x3 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix3x3 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr = <[[f32; 3]; 3]>::deserialize(deserializer)?;
        Ok(Matrix3x3 { data: arr })
    }
}

impl From<[[f32; 3]; 3]> for Matrix3x3 {
    fn from(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }
}

impl Add for Matrix3x3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

impl Sub for Matrix3x3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

impl Mul<f32> for Matrix3x3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] * scalar;
            }
        }
        Matrix3x3 { data: result }
    }
}

impl Mul<Vector3> for Matrix3x3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.data[0][0] * rhs.x + self.data[0][1] * rhs.y + self.data[0][2] * rhs.z,
            y: self.data[1][0] * rhs.x + self.data[1][1] * rhs.y + self.data[1][2] * rhs.z,
            z: self.data[2][0] * rhs.x + self.data[2][1] * rhs.y + self.data[2][2] * rhs.z,
        }
    }
}

impl Mul<Vector2> for Matrix3x3 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        let m = &self.data;
        let mut x = m[0][0] * rhs.x + m[0][1] * rhs.y + m[0][2];
        let mut y = m[1][0] * rhs.x + m[1][1] * rhs.y + m[1][2];
        let w = m[2][0] * rhs.x + m[2][1] * rhs.y + m[2][2];
        if w != 0.0 {
            x /= w;
            y /= w;
        }
        Vector2::new(x, y)
    }
}

impl Mul<Matrix3x3> for Matrix3x3 {
    type Output = Matrix3x3;

    fn mul(self, rhs: Matrix3x3) -> Matrix3x3 {
        let mut result = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][0] * rhs.data[0][j]
                    + self.data[i][1] * rhs.data[1][j]
                    + self.data[i][2] * rhs.data[2][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

impl AddAssign for Matrix3x3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Matrix3x3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign<f32> for Matrix3x3 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Index<(usize, usize)> for Matrix3x3 {
    type Output = f32;

    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        &self.data[row][column]
    }
}

impl IndexMut<(usize, usize)> for Matrix3x3 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        &mut self.data[row][column]
    }
}

impl ApproxEq for Matrix3x3 {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}
