// src/numerics/scalar.rs
// Scalar approximations built from elementary float operations only.
//
// Nothing here calls into the platform math library. The iteration and term
// budgets are fixed so that every caller sees the same error profile.

use super::constants::{E, PI, TWO_PI};

/// Newton iterations performed by [`sqrt`].
pub const SQRT_ITERATIONS: usize = 10;

/// [`sin`] stops summing once a term's magnitude falls below this.
pub const SIN_TERM_THRESHOLD: f64 = 1e-7;

/// Highest power summed by [`cos`] (five non-constant terms).
pub const COS_SERIES_DEGREE: u32 = 10;

/// Square root by Newton-Raphson.
///
/// Runs exactly [`SQRT_ITERATIONS`] steps seeded at `number / 2`, with no
/// convergence check. For inputs in `[1e-3, 1e5]` the result squared is
/// within 1e-3 relative of `number`; far above that range ten steps are not
/// enough (`sqrt(1e6)` is about 1034).
///
/// Returns 0 for `number <= 0`. Callers treat 0 as the degenerate result.
///
/// ```
/// use fulcrum::numerics::scalar::sqrt;
///
/// assert!((sqrt(16.0) - 4.0).abs() < 1e-5);
/// assert_eq!(sqrt(0.0), 0.0);
/// assert_eq!(sqrt(-1.0), 0.0);
/// ```
pub fn sqrt(number: f32) -> f32 {
    if number <= 0.0 {
        tracing::trace!(number, "sqrt of non-positive input, returning 0");
        return 0.0;
    }
    let mut xi = number / 2.0;
    for _ in 0..SQRT_ITERATIONS {
        xi -= (square(xi) - number) / (2.0 * xi);
    }
    xi
}

/// `number * number`
pub fn square(number: f32) -> f32 {
    number * number
}

/// `number` cubed.
pub fn cube(number: f32) -> f32 {
    number * number * number
}

/// `base` raised to `exponent` by repeated multiplication.
///
/// Only natural-number exponents are meaningful. The loop runs
/// `exponent as i32` times, so fractional parts are truncated away and zero
/// or negative exponents give 1.
pub fn power(base: f32, exponent: f32) -> f32 {
    let count = exponent as i32;
    let mut result = 1.0;
    for _ in 0..count {
        result *= base;
    }
    result
}

/// Integer absolute value. `i32::MIN` wraps to itself.
pub fn abs(number: i32) -> i32 {
    if number < 0 {
        number.wrapping_neg()
    } else {
        number
    }
}

/// Larger of two floats; `b` when they compare equal or unordered.
pub fn e_max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of two floats; `b` when they compare equal or unordered.
pub fn e_min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Rounds by truncating and adding one when the fractional part is at least 0.5.
///
/// Negative inputs have a negative fractional part, so they round toward zero:
/// `round(-2.7) == -2`.
pub fn round(number: f32) -> i32 {
    let int_part = number as i32;
    let fraction = number - int_part as f32;
    if fraction >= 0.5 {
        int_part.saturating_add(1)
    } else {
        int_part
    }
}

/// Truncates toward zero. This is not IEEE floor: `floor(-1.5) == -1`.
pub fn floor(number: f32) -> i32 {
    number as i32
}

/// Truncated value plus one, for every input.
///
/// Exact integers are bumped as well: `ceil(2.0) == 3`.
pub fn ceil(number: f32) -> i32 {
    (number as i32).saturating_add(1)
}

/// Float absolute value.
pub fn fabs(number: f32) -> f32 {
    if number < 0.0 {
        -number
    } else {
        number
    }
}

/// Fractional part of the quotient `a / b`, i.e. `(a / b) - trunc(a / b)`.
///
/// This is not the remainder `a - b * trunc(a / b)`: `modulo(7.0, 2.0)` is
/// 0.5, not 1.0. Returns 0 when `b == 0`.
pub fn modulo(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        tracing::trace!(a, "modulo by zero, returning 0");
        return 0.0;
    }
    let quotient = a / b;
    quotient - (quotient as i32) as f32
}

/// `E` raised to `exponent` through [`power`]; the same integer-only contract applies.
pub fn exp(exponent: f32) -> f32 {
    power(E, exponent)
}

/// Sine of `angle` (radians) from its Taylor series.
///
/// Terms are summed until one drops below [`SIN_TERM_THRESHOLD`]; the first
/// term is always added. The angle is not range-reduced, so precision falls
/// off as `|angle|` grows, unlike [`cos`]. Summation also stops once a term
/// overflows, which bounds the work for very large angles.
///
/// Terms and the running sum are `f32`, but the ratio between consecutive
/// terms and the threshold test are evaluated in `f64`. Each new term is
/// rounded to `f32` only after the multiplication.
pub fn sin(angle: f32) -> f32 {
    let wide = f64::from(angle);
    let mut n: u32 = 0;
    let mut result: f32 = 0.0;
    let mut term = angle;
    while f64::from(fabs(term)) >= SIN_TERM_THRESHOLD || n == 0 {
        result += term;
        n += 1;
        let two_n = 2.0 * f64::from(n);
        let ratio = (-wide * wide) / (two_n * (two_n + 1.0));
        term = (f64::from(term) * ratio) as f32;
        if !term.is_finite() {
            break;
        }
    }
    result
}

/// Cosine of `angle` (radians).
///
/// The angle is first moved into `[-PI, PI]` by whole turns, then the Taylor
/// series is summed up to the `x^10` term. The fixed term count gives a
/// consistent error over the reduced range, largest near `±PI` (about 2e-3).
pub fn cos(angle: f32) -> f32 {
    let mut radians = angle;
    while radians > PI {
        let next = radians - TWO_PI;
        if next == radians {
            break;
        }
        radians = next;
    }
    while radians < -PI {
        let next = radians + TWO_PI;
        if next == radians {
            break;
        }
        radians = next;
    }

    let x2 = radians * radians;
    let mut result = 1.0;
    let mut term = 1.0;
    let mut sign = -1.0;
    for i in (2..=COS_SERIES_DEGREE).step_by(2) {
        term *= x2 / (i * (i - 1)) as f32;
        result += sign * term;
        sign = -sign;
    }
    result
}

/// Degrees to radians.
pub fn radians(degrees: f32) -> f32 {
    (degrees * PI) / 180.0
}

/// Radians to degrees.
pub fn degrees(radians: f32) -> f32 {
    (radians * 180.0) / PI
}

/// `PI * r^2`
pub fn circle_area(radius: f32) -> f32 {
    PI * radius * radius
}

/// `2 * PI * r`
pub fn circle_circumference(radius: f32) -> f32 {
    2.0 * PI * radius
}

/// Rectangle area.
pub fn rect_area(width: f32, height: f32) -> f32 {
    width * height
}

/// Rectangle perimeter.
pub fn rect_perimeter(width: f32, height: f32) -> f32 {
    2.0 * (width + height)
}

/// Triangle area from base and height.
pub fn tri_area(base: f32, height: f32) -> f32 {
    0.5 * base * height
}

/// Sum of the three sides.
pub fn tri_perimeter(side1: f32, side2: f32, side3: f32) -> f32 {
    side1 + side2 + side3
}

/// Perimeter of an equilateral triangle.
pub fn equilateral_perimeter(side: f32) -> f32 {
    3.0 * side
}

/// Euclidean distance between the 2D points `(x1, y1)` and `(x2, y2)`.
///
/// Goes through [`sqrt`], so it is only accurate for squared distances in
/// `[1e-3, 1e5]`.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    sqrt(dx * dx + dy * dy)
}

/// Linear interpolation. `t` is not clamped.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// `number!`, or 1 for `number <= 0`. Saturates at `i64::MAX`.
pub fn factorial(number: i32) -> i64 {
    let mut result: i64 = 1;
    for i in (1..=number).rev() {
        result = result.saturating_mul(i as i64);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::constants::{HALF_PI, QUARTER_PI};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_sqrt_known_values() {
        assert_abs_diff_eq!(sqrt(4.0), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sqrt(2.0), 1.414_213_6, epsilon = 1e-6);
        assert_abs_diff_eq!(sqrt(100.0), 10.0, epsilon = 1e-5);
        assert_relative_eq!(sqrt(1e-3), 0.031_622_78, max_relative = 1e-4);
    }

    #[test]
    fn test_sqrt_degenerate_inputs() {
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(-1.0), 0.0);
        assert_eq!(sqrt(-1e9), 0.0);
    }

    #[test]
    fn test_sqrt_iteration_budget_runs_out_above_range() {
        // Ten steps from 5e5 have only halved their way down to ~1034.
        let root = sqrt(1e6);
        assert!(root > 1030.0 && root < 1040.0);
    }

    #[test]
    fn test_square_cube() {
        assert_eq!(square(3.0), 9.0);
        assert_eq!(square(-3.0), 9.0);
        assert_eq!(cube(-2.0), -8.0);
    }

    #[test]
    fn test_power_natural_exponents() {
        assert_eq!(power(2.0, 0.0), 1.0);
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(-3.0, 3.0), -27.0);
    }

    #[test]
    fn test_power_out_of_contract_exponents() {
        assert_eq!(power(2.0, 2.9), 4.0);
        assert_eq!(power(2.0, -3.0), 1.0);
        assert_eq!(power(2.0, 0.5), 1.0);
    }

    #[test]
    fn test_exp_integer_exponents() {
        assert_eq!(exp(0.0), 1.0);
        assert_abs_diff_eq!(exp(1.0), E, epsilon = 1e-6);
        assert_relative_eq!(exp(3.0), 20.085_537, max_relative = 1e-5);
        // Fractions are dropped, as in `power`.
        assert_eq!(exp(1.5), exp(1.0));
    }

    #[test]
    fn test_abs_and_fabs() {
        assert_eq!(abs(-5), 5);
        assert_eq!(abs(7), 7);
        assert_eq!(abs(i32::MIN), i32::MIN);
        assert_eq!(fabs(-2.5), 2.5);
        assert_eq!(fabs(2.5), 2.5);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(e_max(1.0, 2.0), 2.0);
        assert_eq!(e_max(3.0, 2.0), 3.0);
        assert_eq!(e_min(1.0, 2.0), 1.0);
        assert_eq!(e_min(3.0, 2.0), 2.0);
    }

    #[test]
    fn test_rounding_legacy_semantics() {
        assert_eq!(round(2.4), 2);
        assert_eq!(round(2.5), 3);
        assert_eq!(round(-2.7), -2);

        assert_eq!(floor(2.9), 2);
        assert_eq!(floor(-1.5), -1);

        assert_eq!(ceil(2.1), 3);
        assert_eq!(ceil(2.0), 3);
        assert_eq!(ceil(-1.5), 0);
    }

    #[test]
    fn test_modulo_is_fractional_quotient() {
        assert_abs_diff_eq!(modulo(7.0, 2.0), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(modulo(9.0, 3.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(modulo(-7.0, 2.0), -0.5, epsilon = 1e-6);
        assert_eq!(modulo(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_sin_known_values() {
        assert_eq!(sin(0.0), 0.0);
        assert_abs_diff_eq!(sin(HALF_PI), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sin(-HALF_PI), -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sin(PI / 6.0), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(sin(PI), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sin_step_ratio_is_double_precision() {
        // Bit patterns of the mixed f32/f64 series; an all-f32 ratio lands a few ulps away.
        assert_eq!(sin(-3.1993).to_bits(), 0x3d6c_3ce6);
        assert_eq!(sin(-3.0).to_bits(), 0xbe10_81ca);
        assert_eq!(sin(1.0).to_bits(), 0x3f57_6aa4);
        assert_eq!(sin(3.0), -sin(-3.0));
    }

    #[test]
    fn test_sin_terminates_for_huge_angles() {
        // Overflowing terms end the sum; the value itself is meaningless.
        sin(1000.0);
        assert!(sin(f32::NAN).is_nan());
    }

    #[test]
    fn test_cos_known_values() {
        assert_abs_diff_eq!(cos(0.0), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cos(PI / 3.0), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(cos(HALF_PI), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cos(QUARTER_PI), 0.707_106_8, epsilon = 1e-5);
        assert_abs_diff_eq!(cos(PI), -1.0, epsilon = 3e-3);
    }

    #[test]
    fn test_cos_range_reduction() {
        assert_abs_diff_eq!(cos(TWO_PI), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(cos(PI / 3.0 + 2.0 * TWO_PI), 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(cos(-PI / 3.0 - TWO_PI), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_cos_terminates_for_non_finite_input() {
        assert!(!cos(f32::INFINITY).is_finite());
        assert!(cos(f32::NAN).is_nan());
    }

    #[test]
    fn test_angle_conversion() {
        assert_abs_diff_eq!(radians(180.0), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(degrees(HALF_PI), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(degrees(radians(37.0)), 37.0, epsilon = 1e-4);
    }

    #[test]
    fn test_shape_formulas() {
        assert_abs_diff_eq!(circle_area(2.0), 4.0 * PI, epsilon = 1e-5);
        assert_abs_diff_eq!(circle_circumference(1.0), TWO_PI, epsilon = 1e-5);
        assert_eq!(rect_area(3.0, 4.0), 12.0);
        assert_eq!(rect_perimeter(3.0, 4.0), 14.0);
        assert_eq!(tri_area(4.0, 3.0), 6.0);
        assert_eq!(tri_perimeter(3.0, 4.0, 5.0), 12.0);
        assert_eq!(equilateral_perimeter(2.0), 6.0);
    }

    #[test]
    fn test_distance_and_lerp() {
        assert_abs_diff_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0, epsilon = 1e-5);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);

        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(-4), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
        assert_eq!(factorial(25), i64::MAX);
    }
}
