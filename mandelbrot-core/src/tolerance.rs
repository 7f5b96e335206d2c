//! Floating-point tolerance used when comparing computed values.
//!
//! `Complex` equality is exact. Results that go through transcendental
//! functions (rotation, modulus) are compared with these helpers instead.

/// Default absolute tolerance for comparing doubles.
pub const EPSILON: f64 = 1e-9;

/// Check if two doubles differ by at most `epsilon`.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}
