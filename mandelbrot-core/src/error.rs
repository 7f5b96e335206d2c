//! Complex arithmetic error types.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ComplexError {
    /// Reciprocal of, or division by, the zero complex number.
    #[error("Division by zero: reciprocal of 0 + 0i is undefined")]
    DivisionByZero,
}
