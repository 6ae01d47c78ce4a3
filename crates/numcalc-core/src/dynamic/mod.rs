//! Runtime-checked entry points for untyped input.
//!
//! The typed functions in [`crate::arithmetic`] and [`crate::numerical`]
//! cannot receive a wrong operand type. Input that arrives untyped (decoded
//! JSON, a scripting bridge) is checked here first: every argument is
//! validated at entry and the first mismatch is reported as
//! [`NumericError::InvalidArgument`](crate::error::NumericError) before any
//! arithmetic runs or the function argument is evaluated.

pub mod validation;
pub mod value;

pub use validation::{require_function, require_number};
pub use value::{Callable, Value};

use crate::{arithmetic, error::Result, numerical, types::Scalar};

/// Adds two dynamically typed operands.
///
/// Both operands must be [`Value::Number`]; NaN and infinities are accepted.
///
/// # Example
///
/// ```
/// use numcalc_core::dynamic::{sum, Value};
///
/// assert_eq!(sum(&Value::from(1.0), &Value::from(2.0)).unwrap(), 3.0);
/// assert!(sum(&Value::from("1"), &Value::from(2.0)).is_err());
/// ```
pub fn sum(a: &Value, b: &Value) -> Result<f64> {
    let a = require_number(a, "a")?;
    let b = require_number(b, "b")?;
    Ok(arithmetic::sum(a, b))
}

/// Estimates the derivative of a dynamically typed function.
///
/// `f` must be a [`Value::Function`] and `x` a [`Value::Number`], checked in
/// that order. `h` defaults to `1e-5` and is used as given otherwise.
///
/// # Example
///
/// ```
/// use numcalc_core::dynamic::{derivative, Value};
///
/// let f = Value::function(|x| x * x);
/// let slope = derivative(&f, &Value::from(3.0), None).unwrap();
/// assert!((slope - 6.0).abs() < 1e-6);
/// ```
pub fn derivative(f: &Value, x: &Value, h: Option<f64>) -> Result<f64> {
    let f = require_function(f, "f")?;
    let x = require_number(x, "x")?;
    let h = h.unwrap_or(f64::DEFAULT_STEP_SIZE);

    #[cfg(feature = "tracing")]
    tracing::trace!(x, h, "estimating derivative");

    Ok(numerical::derivative_with_step(|t| f(t), x, h))
}
