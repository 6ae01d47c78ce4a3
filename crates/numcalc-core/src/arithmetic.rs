//! Scalar addition.
//!
//! The typed adder accepts any [`Scalar`] and follows IEEE 754 addition
//! exactly: rounding error, overflow to infinity and NaN propagation are
//! passed through untouched. For operands whose type is only known at
//! runtime, see [`crate::dynamic::sum`].

use crate::types::Scalar;

/// Returns the sum of two scalars.
///
/// # Example
///
/// ```
/// use numcalc_core::arithmetic::sum;
///
/// assert_eq!(sum(1.0, 2.0), 3.0);
/// assert_eq!(sum(-1.0_f32, -2.0), -3.0);
/// ```
#[inline]
pub fn sum<T: Scalar>(a: T, b: T) -> T {
    a + b
}
