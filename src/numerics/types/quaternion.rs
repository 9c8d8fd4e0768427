// src/numerics/types/quaternion.rs
// Rotation quaternion (x, y, z vector part, w scalar part).

use core::ops::{Mul, MulAssign};
use serde::{Deserialize, Serialize};

use super::traits::ApproxEq;
use super::vector3::Vector3;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::scalar;
use crate::numerics::tolerance::Tolerance;

/// Quaternion representing a rotation in a right-handed frame.
///
/// The default value is the identity rotation `(0, 0, 0, 1)`. Composition
/// follows the Hamilton product, so `a * b` applies `b` first and then `a`
/// when used through [`Quaternion::rotate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

// Serialized as a plain (x, y, z, w) tuple.
impl Serialize for Quaternion {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quaternion {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(f32, f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Quaternion { x, y, z, w })
    }
}

impl Quaternion {
    /// Construct from the vector part `(x, y, z)` and scalar `w`.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// The no-rotation quaternion `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` must already be unit length; it is not normalized here.
    ///
    /// ```
    /// use fulcrum::numerics::constants::HALF_PI;
    /// use fulcrum::numerics::types::quaternion::Quaternion;
    /// use fulcrum::numerics::types::vector3::Vector3;
    ///
    /// let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), HALF_PI);
    /// let v = q.rotate(&Vector3::new(1.0, 0.0, 0.0));
    /// assert!((v.z + 1.0).abs() < 1e-4);
    /// ```
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = scalar::sin(half);
        Self::new(axis.x * s, axis.y * s, axis.z * s, scalar::cos(half))
    }

    /// Sum of the squared components.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm through the kernel `sqrt`.
    ///
    /// Accurate while `length_squared()` stays within `[1e-3, 1e5]`, i.e. a
    /// magnitude of roughly 0.03 to 316. Outside that range the fixed-step
    /// `sqrt` overestimates, so the result comes out too large.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Four-component dot product
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Vector part negated.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Normalize in place. A zero-length quaternion is left untouched.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            self.x /= len;
            self.y /= len;
            self.z /= len;
            self.w /= len;
        }
    }

    /// Unit-length copy, or the identity when the length is exactly 0.
    ///
    /// Unit length is only reached inside the range documented on
    /// [`Quaternion::length`]; `(0, 0, 0, 1000)` normalizes to about 0.967.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            tracing::trace!(quaternion = ?self, "normalizing zero-length Quaternion, returning identity");
            return Self::identity();
        }
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Like [`Quaternion::normalized`], but a zero quaternion is an error.
    pub fn try_normalized(&self) -> Result<Self> {
        if self.length() == 0.0 {
            return Err(NumericsError::ZeroLength);
        }
        Ok(self.normalized())
    }

    /// Conjugate over squared length; the identity when that length is 0.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            tracing::trace!(quaternion = ?self, "inverting zero-length Quaternion, returning identity");
            return Self::identity();
        }
        self.scaled_conjugate(1.0 / len_sq)
    }

    /// Like [`Quaternion::inverse`], but a zero quaternion is an error.
    pub fn try_inverse(&self) -> Result<Self> {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return Err(NumericsError::ZeroLength);
        }
        Ok(self.scaled_conjugate(1.0 / len_sq))
    }

    fn scaled_conjugate(&self, factor: f32) -> Self {
        Self::new(
            -self.x * factor,
            -self.y * factor,
            -self.z * factor,
            self.w * factor,
        )
    }

    /// Rotate `v` with the sandwich product `q * (v, 0) * q⁻¹`.
    pub fn rotate(&self, v: &Vector3) -> Vector3 {
        let p = Quaternion::new(v.x, v.y, v.z, 0.0);
        let r = *self * p * self.inverse();
        Vector3::new(r.x, r.y, r.z)
    }

    /// Componentwise blend followed by renormalization. `t` is clamped to `[0, 1]`.
    ///
    /// This is not a spherical interpolation: angular velocity is not
    /// constant and the blend does not pick the shorter arc.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        Self::new(
            a.x * s + b.x * t,
            a.y * s + b.y * t,
            a.z * s + b.z * t,
            a.w * s + b.w * t,
        )
        .normalized()
    }

    /// Components as `[x, y, z, w]`.
    pub fn as_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, o: Self) -> Self {
        Self::new(
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y - self.x * o.z + self.y * o.w + self.z * o.x,
            self.w * o.z + self.x * o.y - self.y * o.x + self.z * o.w,
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl ApproxEq for Quaternion {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.as_array().approx_eq(&other.as_array(), tolerance)
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(array: [f32; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        q.as_array()
    }
}
