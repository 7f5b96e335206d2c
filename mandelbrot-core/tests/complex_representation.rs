use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use mandelbrot_core::{Complex, ComplexError};

fn hash_of(z: &Complex) -> u64 {
    let mut hasher = DefaultHasher::new();
    z.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_shows_both_components_by_name() {
    assert_eq!(
        Complex::new(1.0, -1.0).to_string(),
        "Complex{real=1.0, imaginary=-1.0}"
    );
    assert_eq!(
        Complex::new(-12.0, 10.0).to_string(),
        "Complex{real=-12.0, imaginary=10.0}"
    );
}

#[test]
fn display_keeps_shortest_round_trip_digits() {
    assert_eq!(
        Complex::new(0.1, -2.5).to_string(),
        "Complex{real=0.1, imaginary=-2.5}"
    );
}

#[test]
fn display_uses_exponent_form_outside_decimal_range() {
    assert_eq!(
        Complex::new(1e-7, 1e16).to_string(),
        "Complex{real=1e-7, imaginary=1e16}"
    );
}

#[test]
fn error_message_names_division_by_zero() {
    assert_eq!(
        ComplexError::DivisionByZero.to_string(),
        "Division by zero: reciprocal of 0 + 0i is undefined"
    );
}

// ============================================================================
// Equality and hash
// ============================================================================

#[test]
fn equal_values_hash_identically() {
    let c1 = Complex::new(-12.0, 10.0);
    let c2 = Complex::new(-12.0, 10.0);
    assert_eq!(c1, c2);
    assert_eq!(hash_of(&c1), hash_of(&c2));
}

#[test]
fn equality_is_exact() {
    let z = Complex::new(0.1 + 0.2, 0.0);
    assert_ne!(z, Complex::new(0.3, 0.0));
    assert!(z.approx_eq(Complex::new(0.3, 0.0), mandelbrot_core::EPSILON));
}

#[test]
fn results_with_signed_zero_hash_like_constants() {
    // (-1)(-1) has imaginary part -0.0
    let product = Complex::new(-1.0, 0.0).multiply(Complex::new(-1.0, 0.0));
    assert_eq!(product, Complex::ONE);
    assert_eq!(hash_of(&product), hash_of(&Complex::ONE));
}

#[test]
fn hash_set_deduplicates_equal_values() {
    let values: HashSet<Complex> = [
        Complex::ONE,
        Complex::new(1.0, 0.0),
        Complex::new(1.0, -0.0),
        Complex::I,
        Complex::ZERO,
    ]
    .into_iter()
    .collect();
    assert_eq!(values.len(), 3);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn serializes_components_by_name() {
    let json = serde_json::to_string(&Complex::new(1.0, -1.0)).unwrap();
    assert_eq!(json, r#"{"real":1.0,"imaginary":-1.0}"#);
}

#[test]
fn deserializes_from_named_components() {
    let z: Complex = serde_json::from_str(r#"{"real": 122.0, "imaginary": -597.0}"#).unwrap();
    assert_eq!(z, Complex::new(2.0, 3.0).pow(5));
}
