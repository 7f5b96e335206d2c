//! Immutable double-precision complex number.
//!
//! Every operation returns a new value. Equality and hashing are exact;
//! use [`Complex::approx_eq`] where rounding is expected.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::tolerance;
use crate::ComplexError;

/// Complex number `real + imaginary·i` with f64 components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

// Callers keep components finite (see `is_finite`); the operations here
// preserve that, so exact comparison is reflexive.
impl Eq for Complex {}

impl Complex {
    /// Zero constant.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create from real and imaginary parts, stored verbatim.
    ///
    /// Components must be finite for `Eq` and `Hash` to hold.
    #[inline]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Complex number on the real axis.
    #[inline]
    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// Unit complex number `cos(theta) + sin(theta)·i`, a counter-clockwise
    /// rotation by `theta` radians.
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn real(self) -> f64 {
        self.real
    }

    #[inline]
    pub fn imaginary(self) -> f64 {
        self.imaginary
    }

    /// Check that neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Copy of self with the real part replaced.
    #[inline]
    pub fn with_real(self, real: f64) -> Self {
        Self::new(real, self.imaginary)
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// |z|² = re² + im²
    #[inline]
    pub fn squared_modulus(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// |z| = √(re² + im²)
    #[inline]
    pub fn modulus(self) -> f64 {
        self.squared_modulus().sqrt()
    }

    /// Multiplicative inverse: conj(z) / |z|².
    ///
    /// Fails with [`ComplexError::DivisionByZero`] for `0 + 0i`.
    pub fn reciprocal(self) -> Result<Self, ComplexError> {
        if self == Self::ZERO {
            log::debug!("Rejected reciprocal of {}", self);
            return Err(ComplexError::DivisionByZero);
        }

        let squared_modulus = self.squared_modulus();
        if squared_modulus < f64::MIN_POSITIVE || !squared_modulus.is_finite() {
            // |z|² is subnormal or overflowed: rescale so the largest component
            // is 1, and divide by the scale last so the denominator stays finite.
            let scale = self.real.abs().max(self.imaginary.abs());
            let unit = Self::new(self.real / scale, self.imaginary / scale);
            let unit_squared_modulus = unit.squared_modulus();
            return Ok(Self::new(
                unit.real / unit_squared_modulus / scale,
                -unit.imaginary / unit_squared_modulus / scale,
            ));
        }

        Ok(Self::new(
            self.real / squared_modulus,
            -self.imaginary / squared_modulus,
        ))
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.real + other.real, self.imaginary + other.imaginary)
    }

    /// self - other
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.real - other.real, self.imaginary - other.imaginary)
    }

    /// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.real * other.real - self.imaginary * other.imaginary,
            self.real * other.imaginary + self.imaginary * other.real,
        )
    }

    /// Multiply both components by a real scalar.
    #[inline]
    pub fn scale(self, lambda: f64) -> Self {
        Self::new(self.real * lambda, self.imaginary * lambda)
    }

    /// self / other, computed as self × other⁻¹.
    pub fn divide(self, other: Self) -> Result<Self, ComplexError> {
        Ok(self.multiply(other.reciprocal()?))
    }

    /// Integer power by repeated multiplication. `pow(0)` is `ONE`, also
    /// for a zero base.
    pub fn pow(self, exponent: u32) -> Self {
        (0..exponent).fold(Self::ONE, |acc, _| acc.multiply(self))
    }

    /// Componentwise comparison within `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        tolerance::approx_eq(self.real, other.real, epsilon)
            && tolerance::approx_eq(self.imaginary, other.imaginary, epsilon)
    }
}

/// Bit pattern with -0.0 folded onto 0.0, since the two compare equal.
#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.real).hash(state);
        canonical_bits(self.imaginary).hash(state);
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the fractional part on integral values (1.0, not 1).
        write!(
            f,
            "Complex{{real={:?}, imaginary={:?}}}",
            self.real, self.imaginary
        )
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self::new(real, imaginary)
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

// -- Arithmetic operators --

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

/// Scalar multiplication: `Complex * f64`.
impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}
