// src/numerics/types/vector4.rs
// Vector4: four-component vector, mostly used as a homogeneous coordinate.

use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::traits::ApproxEq;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::scalar;
use crate::numerics::tolerance::Tolerance;

/// Vector4 is a 4D vector. `Matrix4x4` maps it linearly, with no division by `w`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Serialize for Vector4 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector4 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(f32, f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Vector4 { x, y, z, w })
    }
}

impl Vector4 {
    /// Construct a new Vector4
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Vector of all zeros
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Vector of all ones
    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Components as `[x, y, z, w]`.
    pub fn as_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Squared length, no `sqrt` involved.
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Euclidean length over all four components.
    ///
    /// Accurate while `length_squared()` stays within `[1e-3, 1e5]`, i.e. a
    /// magnitude of roughly 0.03 to 316. Outside that range the fixed-step
    /// `sqrt` overestimates, so the result comes out too large.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Unit-length copy, or the zero vector when the length is exactly 0.
    ///
    /// Outside the range given on [`Vector4::length`] the copy is not unit length.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            tracing::trace!(vector = ?self, "normalizing zero-length Vector4, returning zero");
            return Self::zero();
        }
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// In-place variant of [`Vector4::normalized`]; zero stays zero.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            *self /= len;
        }
    }

    /// Like [`Vector4::normalized`], but zero length is an error.
    pub fn try_normalized(&self) -> Result<Self> {
        if self.length() == 0.0 {
            return Err(NumericsError::ZeroLength);
        }
        Ok(self.normalized())
    }

    /// `(a - b).length()`, with the same magnitude range.
    pub fn distance(a: &Self, b: &Self) -> f32 {
        (*a - *b).length()
    }

    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        *a * (1.0 - t) + *b * t
    }

    /// Overwrite all components.
    pub fn set_position(&mut self, position: &Self) {
        *self = *position;
    }

    /// Add `offset` in place.
    pub fn move_by(&mut self, offset: &Self) {
        *self += *offset;
    }

    /// Overwrite with `factor`.
    pub fn set_scale(&mut self, factor: &Self) {
        *self = *factor;
    }

    /// Component-wise multiply in place.
    pub fn scale(&mut self, factor: &Self) {
        self.x *= factor.x;
        self.y *= factor.y;
        self.z *= factor.z;
        self.w *= factor.w;
    }

    /// Overwrite with `origin`.
    pub fn set_origin(&mut self, origin: &Self) {
        *self = *origin;
    }
}

impl Add for Vector4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Vector4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar, self.w / scalar)
    }
}

impl Neg for Vector4 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl AddAssign for Vector4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Vector4 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign<f32> for Vector4 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl DivAssign<f32> for Vector4 {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

/// 0 = x, 1 = y, 2 = z, anything else = w.
impl Index<usize> for Vector4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => &self.w,
        }
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => &mut self.w,
        }
    }
}

impl ApproxEq for Vector4 {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.as_array().approx_eq(&other.as_array(), tolerance)
    }
}

impl From<(f32, f32, f32, f32)> for Vector4 {
    fn from(tuple: (f32, f32, f32, f32)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(array: [f32; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(v: Vector4) -> Self {
        v.as_array()
    }
}

impl From<Vector4> for (f32, f32, f32, f32) {
    fn from(v: Vector4) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}
