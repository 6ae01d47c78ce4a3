//! Argument checks for the dynamic entry points.

use super::value::{Callable, Value};
use crate::error::{NumericError, Result};

/// Returns the number held by `value`, or an `InvalidArgument` error naming `argument`.
pub fn require_number(value: &Value, argument: &str) -> Result<f64> {
    value.as_number().ok_or_else(|| reject(value, argument, "number"))
}

/// Returns the function held by `value`, or an `InvalidArgument` error naming `argument`.
pub fn require_function<'a>(value: &'a Value, argument: &str) -> Result<&'a Callable> {
    value
        .as_function()
        .ok_or_else(|| reject(value, argument, "function"))
}

fn reject(value: &Value, argument: &str, expected: &str) -> NumericError {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        argument,
        expected,
        got = value.type_name(),
        "rejected argument"
    );
    NumericError::invalid_argument(
        argument,
        format!("expected {expected}, got {}", value.type_name()),
    )
}
