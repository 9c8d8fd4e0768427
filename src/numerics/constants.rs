// src/numerics/constants.rs
// Compile-time constants consumed by the scalar functions and the value types.

#![allow(clippy::approx_constant, clippy::excessive_precision)]

/// PI
pub const PI: f32 = 3.14159265358979323846;

/// 2PI
pub const TWO_PI: f32 = 6.28318530717958647692;

/// PI/2
pub const HALF_PI: f32 = 1.57079632679489661923;

/// PI/4
pub const QUARTER_PI: f32 = 0.785398163397448309616;

/// Euler's number
pub const E: f32 = 2.71828182845904523536;

/// Degree to radian conversion factor
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Radian to degree conversion factor
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Small tolerance used in float comparisons
pub const EPSILON: f32 = 1e-6;

pub const ONE: f32 = 1.0;

pub const ZERO: f32 = 0.0;

/// Positive "infinity" sentinel. Large and finite, not IEEE infinity.
pub const INF: f32 = 1e30;

/// Negative "infinity" sentinel. Large and finite, not IEEE infinity.
pub const NEG_INF: f32 = -1e30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants_agree() {
        assert!((TWO_PI - 2.0 * PI).abs() < 1e-6);
        assert!((HALF_PI - PI / 2.0).abs() < 1e-6);
        assert!((QUARTER_PI - PI / 4.0).abs() < 1e-6);
        assert!((DEG_TO_RAD * RAD_TO_DEG - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_infinity_sentinels_are_finite() {
        assert!(INF.is_finite());
        assert!(NEG_INF.is_finite());
        assert_eq!(INF, -NEG_INF);
    }
}
