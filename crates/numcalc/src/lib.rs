//! Scalar addition and central-difference derivatives.
//!
//! `numcalc` re-exports the public API of [`numcalc_core`]:
//!
//! - [`sum(a, b)`](sum) adds two scalars.
//! - [`derivative(f, x)`](derivative) and
//!   [`derivative_with_step(f, x, h)`](derivative_with_step) estimate `f'(x)`
//!   with a central difference, `h` defaulting to `1e-5`.
//! - [`dynamic`] offers the same operations for runtime-typed [`Value`]s and
//!   rejects mismatched operands with [`NumericError::InvalidArgument`].
//!
//! # Example
//!
//! ```
//! use numcalc::prelude::*;
//!
//! let slope = derivative(|x: f64| sum(x, 2.0) * sum(x, 3.0), 1.0);
//! assert!((slope - 7.0).abs() < 1e-6);
//! ```

pub use numcalc_core::{arithmetic, config, dynamic, error, numerical, types};

pub use numcalc_core::arithmetic::sum;
pub use numcalc_core::config::DerivativeConfig;
pub use numcalc_core::dynamic::Value;
pub use numcalc_core::error::{NumericError, Result};
pub use numcalc_core::numerical::{
    derivative, derivative_with_step, CentralDifference, CountingFunction,
};
pub use numcalc_core::types::Scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numcalc_core::prelude::*;
}
