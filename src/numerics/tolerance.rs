// src/numerics/tolerance.rs
// Comparison tolerance used by `ApproxEq`.

use super::constants::EPSILON;

/// Tolerance configuration for approximate float comparisons.
///
/// Two values are accepted as equal when their difference is within the
/// absolute bound, or within the relative bound scaled by the larger magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest accepted absolute difference.
    pub absolute: f32,

    /// Largest accepted difference as a fraction of `max(|a|, |b|)`.
    /// Zero disables the relative check.
    pub relative: f32,
}

impl Default for Tolerance {
    /// Absolute `EPSILON`, no relative bound.
    fn default() -> Self {
        Self {
            absolute: EPSILON,
            relative: 0.0,
        }
    }
}

impl Tolerance {
    pub fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    /// Only an absolute bound.
    pub fn absolute(absolute: f32) -> Self {
        Self {
            absolute,
            relative: 0.0,
        }
    }

    /// Only a relative bound.
    pub fn relative(relative: f32) -> Self {
        Self {
            absolute: 0.0,
            relative,
        }
    }

    /// Accepts exact equality only.
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Absolute 1e-4, suited to results of the series approximations.
    pub fn loose() -> Self {
        Self {
            absolute: 1e-4,
            relative: 0.0,
        }
    }

    /// Whether `a` and `b` are equal within this tolerance.
    pub fn accepts(&self, a: f32, b: f32) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        if diff <= self.absolute {
            return true;
        }
        let largest = if a.abs() > b.abs() { a.abs() } else { b.abs() };
        diff <= self.relative * largest
    }
}
