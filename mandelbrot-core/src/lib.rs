pub mod complex;
pub mod error;
pub mod tolerance;

pub use complex::Complex;
pub use error::ComplexError;
pub use tolerance::{approx_eq, EPSILON};
