// src/numerics/types/vector3.rs
// Vector3: three-component single precision vector.

use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::traits::ApproxEq;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::scalar;
use crate::numerics::tolerance::Tolerance;

/// Vector3 is a 3D vector (or point) used for positions, directions and scales.
///
/// Quaternions rotate it and `Matrix3x3`/`Matrix4x4` transform it; see the
/// matrix types for how the homogeneous `w` is handled.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

// Serialized as a plain (x, y, z) tuple.
impl Serialize for Vector3 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl Vector3 {
    /// Construct a new Vector3
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Vector of all ones
    pub const fn one() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }

    /// Components as `[x, y, z]`.
    pub fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Return the Euclidean length. Uses the kernel's Newton `sqrt`.
    ///
    /// Accurate while `length_squared()` stays within `[1e-3, 1e5]`, i.e. a
    /// magnitude of roughly 0.03 to 316. Outside that range the fixed-step
    /// `sqrt` overestimates, so the result comes out too large.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product: `x̂ × ŷ = ẑ`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unit-length copy; the zero vector when the length is exactly 0.
    ///
    /// The result is only unit length while [`Vector3::length`] is accurate.
    /// `(1000, 0, 0)` comes out with length ~0.967 and `(0.001, 0, 0)` with ~0.47.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            tracing::trace!(vector = ?self, "normalizing zero-length Vector3, returning zero");
            return Self::zero();
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// In-place normalize; leaves a zero-length vector as it is.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            *self /= len;
        }
    }

    /// Like [`Vector3::normalized`], but the zero-length case is an error.
    pub fn try_normalized(&self) -> Result<Self> {
        if self.length() == 0.0 {
            return Err(NumericsError::ZeroLength);
        }
        Ok(self.normalized())
    }

    /// Distance between two points. Inherits the magnitude range of [`Vector3::length`].
    pub fn distance(a: &Self, b: &Self) -> f32 {
        (*a - *b).length()
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
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
    }

    /// Overwrite with `origin`.
    pub fn set_origin(&mut self, origin: &Self) {
        *self = *origin;
    }
}

// Implement operator + for Vector3
impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Implement operator - for Vector3
impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

/// Component access (0 = x, 1 = y, 2 = z). Indices past 2 clamp to `z`.
impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl ApproxEq for Vector3 {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.as_array().approx_eq(&other.as_array(), tolerance)
    }
}

// Conversions between Vector3 and tuples / arrays

impl From<(f32, f32, f32)> for Vector3 {
    fn from(tuple: (f32, f32, f32)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(array: [f32; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<Vector3> for (f32, f32, f32) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vector_add_sub() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

        let diff = sum - a;
        assert_eq!(diff, b);

        assert_eq!(a * 3.0, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_compound_assignment_mutates_receiver_only() {
        let offset = Vector3::one();
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += offset;
        v -= Vector3::new(0.0, 1.0, 2.0);
        v *= 4.0;
        v /= 2.0;
        assert_eq!(v, Vector3::new(4.0, 4.0, 4.0));
        assert_eq!(offset, Vector3::one());
    }

    #[test]
    fn test_length_and_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);

        let lsq = a.length_squared();
        assert!((lsq - 14.0).abs() < 1e-6);

        let len = a.length();
        assert!((len - 14.0_f32.sqrt()).abs() < 1e-5);

        assert_eq!(a.dot(&Vector3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn test_cross_is_right_handed() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), -z);

        let a = Vector3::new(2.0, 3.0, 4.0);
        let c = a.cross(&Vector3::new(5.0, 6.0, 7.0));
        assert_eq!(c, Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(c.dot(&a), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector3::new(0.0, 3.0, 4.0).normalized();
        assert!(n.approx_eq(&Vector3::new(0.0, 0.6, 0.8), Tolerance::absolute(1e-5)));
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);

        assert_eq!(Vector3::zero().normalized(), Vector3::zero());
        assert_eq!(Vector3::zero().try_normalized(), Err(NumericsError::ZeroLength));

        let mut v = Vector3::new(5.0, 0.0, 0.0);
        v.normalize();
        assert!(v.approx_eq_default(&Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_index_clamps_to_last_component() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v[3], 3.0);
        assert_eq!(v[usize::MAX], 3.0);

        v[1] = 9.0;
        v[7] = 8.0;
        assert_eq!(v, Vector3::new(1.0, 9.0, 8.0));
    }

    #[test]
    fn test_distance_and_lerp() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(3.0, 1.0, 1.0);
        assert_abs_diff_eq!(Vector3::distance(&a, &b), 2.0, epsilon = 1e-5);

        assert_eq!(Vector3::lerp(&a, &b, 0.0), a);
        assert_eq!(Vector3::lerp(&a, &b, 1.0), b);
        assert_eq!(Vector3::lerp(&a, &b, 0.5), Vector3::new(2.0, 1.0, 1.0));
        assert_eq!(Vector3::lerp(&a, &b, 2.0), b);
    }

    #[test]
    fn test_transform_helpers() {
        let mut v = Vector3::zero();
        v.set_position(&Vector3::new(1.0, 2.0, 3.0));
        v.move_by(&Vector3::one());
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));

        v.scale(&Vector3::new(0.5, 2.0, 1.0));
        assert_eq!(v, Vector3::new(1.0, 6.0, 4.0));

        v.set_scale(&Vector3::one());
        assert_eq!(v, Vector3::one());
        v.set_origin(&Vector3::new(-1.0, 0.0, 1.0));
        assert_eq!(v, Vector3::new(-1.0, 0.0, 1.0));
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let tup = (1.0f32, 2.0f32, 3.0f32);

        let v: Vector3 = tup.into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let back: (f32, f32, f32) = v.into();
        assert_eq!(back, tup);

        let arr: [f32; 3] = v.into();
        assert_eq!(Vector3::from(arr), v);
    }

    #[test]
    fn test_normalized_drifts_outside_sqrt_range() {
        let inside = Vector3::new(300.0, 0.0, 0.0);
        assert_abs_diff_eq!(inside.normalized().length(), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Vector3::new(0.03, 0.0, 0.0).normalized().length(), 1.0, epsilon = 1e-4);

        // Ten Newton steps from x/2 do not converge for large or tiny squared lengths.
        let large = Vector3::new(1000.0, 0.0, 0.0);
        assert_abs_diff_eq!(large.length(), 1033.841, epsilon = 1e-2);
        assert_abs_diff_eq!(large.normalized().length(), 0.9673, epsilon = 1e-3);
        assert_abs_diff_eq!(Vector3::distance(&Vector3::zero(), &large), 1033.841, epsilon = 1e-2);

        let tiny = Vector3::new(1e-3, 0.0, 0.0);
        assert_abs_diff_eq!(tiny.length(), 0.002_121, epsilon = 1e-5);
        assert_abs_diff_eq!(tiny.normalized().length(), 0.4715, epsilon = 1e-3);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let v = Vector3::new(1.0, 2.0, 3.0);

        let encoded = bincode::serde::encode_to_vec(v, config).expect("serialize failed");
        assert_eq!(encoded.len(), 12);

        let (decoded, _len): (Vector3, _) =
            bincode::serde::decode_from_slice(&encoded, config).expect("deserialize failed");
        assert_eq!(v, decoded);
    }
}
