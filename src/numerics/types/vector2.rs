// src/numerics/types/vector2.rs
// Vector2: two-component single precision vector.

use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::traits::ApproxEq;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::scalar;
use crate::numerics::tolerance::Tolerance;

/// Vector2 is a 2D vector (or point) with arithmetic and geometric operations.
///
/// Equality is exact componentwise float comparison; use [`ApproxEq`] for
/// results of approximated math.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Serialize for Vector2 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector2 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(f32, f32)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

impl Vector2 {
    /// Construct a new Vector2
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Vector of all ones
    /// Vector of all ones
    pub const fn one() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    /// Components as `[x, y]`.
    pub fn as_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length through the kernel's approximated `sqrt`.
    ///
    /// Accurate while `length_squared()` stays within `[1e-3, 1e5]`, i.e. a
    /// magnitude of roughly 0.03 to 316. Outside that range the fixed-step
    /// `sqrt` overestimates, so the result comes out too large.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D pseudo cross product `x1 * y2 - y1 * x2` (the z of the 3D cross).
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Unit-length copy, or the zero vector when the length is exactly 0.
    ///
    /// Only unit length inside the range documented on [`Vector2::length`]:
    /// `(1000, 0)` normalizes to a length of about 0.967, `(0.001, 0)` to
    /// about 0.47.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            tracing::trace!(vector = ?self, "normalizing zero-length Vector2, returning zero");
            return Self::zero();
        }
        Self::new(self.x / len, self.y / len)
    }

    /// Normalizes in place; a zero-length vector is left untouched.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            *self /= len;
        }
    }

    /// Like [`Vector2::normalized`] but reports the zero-length case.
    pub fn try_normalized(&self) -> Result<Self> {
        if self.length() == 0.0 {
            return Err(NumericsError::ZeroLength);
        }
        Ok(self.normalized())
    }

    /// Distance between two points, `(a - b).length()`; same range as [`Vector2::length`].
    pub fn distance(a: &Self, b: &Self) -> f32 {
        (*a - *b).length()
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        *a * (1.0 - t) + *b * t
    }

    /// Overwrite both components.
    pub fn set_position(&mut self, position: &Self) {
        *self = *position;
    }

    /// Offsets this vector by `offset`.
    pub fn move_by(&mut self, offset: &Self) {
        *self += *offset;
    }

    /// Overwrite with `factor`.
    pub fn set_scale(&mut self, factor: &Self) {
        *self = *factor;
    }

    /// Componentwise scale.
    pub fn scale(&mut self, factor: &Self) {
        self.x *= factor.x;
        self.y *= factor.y;
    }

    /// Overwrite with `origin`.
    pub fn set_origin(&mut self, origin: &Self) {
        *self = *origin;
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

/// Component access: 0 is `x`; any other index clamps to the last component, `y`.
impl Index<usize> for Vector2 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            _ => &self.y,
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            _ => &mut self.y,
        }
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.accepts(self.x, other.x) && tolerance.accepts(self.y, other.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from(tuple: (f32, f32)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(array: [f32; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}
