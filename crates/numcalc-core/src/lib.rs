//! Scalar arithmetic and finite-difference derivatives.
//!
//! This crate provides two small numeric building blocks: a typed adder and
//! a central-difference derivative estimator. Both are stateless and
//! reentrant. A second, runtime-checked API accepts dynamically typed
//! operands and rejects mismatched types with
//! [`NumericError::InvalidArgument`].
//!
//! # Modules
//!
//! - [`arithmetic`]: Scalar addition
//! - [`config`]: Step-size configuration
//! - [`dynamic`]: Runtime-checked entry points for untyped input
//! - [`error`]: Error types
//! - [`numerical`]: Central-difference derivative estimation
//! - [`types`]: Scalar trait and numerical constants
//!
//! # Example
//!
//! ```
//! use numcalc_core::prelude::*;
//!
//! assert_eq!(sum(1.0, 2.0), 3.0);
//!
//! let slope = derivative(f64::sin, 0.0);
//! assert!((slope - 1.0).abs() < 1e-6);
//! ```

pub mod arithmetic;
pub mod config;
pub mod core;
pub mod dynamic;
pub mod numerical;

pub use crate::core::{error, types};

// Re-export commonly used items at the crate root
pub use error::{NumericError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use numcalc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arithmetic::sum;
    pub use crate::config::DerivativeConfig;
    pub use crate::dynamic::Value;
    pub use crate::error::{NumericError, Result};
    pub use crate::numerical::{
        derivative, derivative_with_step, CentralDifference, CountingFunction,
    };
    pub use crate::types::{constants, Scalar};
}
