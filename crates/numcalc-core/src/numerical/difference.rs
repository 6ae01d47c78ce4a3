//! Central-difference derivative estimation.
//!
//! The derivative of a unary function `f` at `x` is approximated by
//!
//! ```text
//! f'(x) ≈ (f(x + h) - f(x - h)) / (2h)
//! ```
//!
//! The truncation error of this symmetric formula is O(h²), against O(h)
//! for a one-sided difference, so a single fixed step gives usable results
//! without adaptive step selection. Very small steps lose precision to
//! cancellation in the numerator.
//!
//! `f` is evaluated exactly twice per estimate, first at `x + h`, then at
//! `x - h`.

use crate::{config::DerivativeConfig, error::Result, types::Scalar};
use std::cell::Cell;

/// Estimates `f'(x)` with the default step size of `1e-5`.
///
/// # Example
///
/// ```
/// use numcalc_core::numerical::derivative;
///
/// let slope = derivative(|x: f64| x * x, 3.0);
/// assert!((slope - 6.0).abs() < 1e-6);
/// ```
pub fn derivative<T, F>(f: F, x: T) -> T
where
    T: Scalar,
    F: FnMut(T) -> T,
{
    derivative_with_step(f, x, T::DEFAULT_STEP_SIZE)
}

/// Estimates `f'(x)` with an explicit step size `h`.
///
/// `h` is used as given. A zero, negative or non-finite step is not
/// rejected and flows into the arithmetic; use [`CentralDifference::new`]
/// for a checked step.
pub fn derivative_with_step<T, F>(mut f: F, x: T, h: T) -> T
where
    T: Scalar,
    F: FnMut(T) -> T,
{
    let f_plus = f(x + h);
    let f_minus = f(x - h);
    (f_plus - f_minus) / (h + h)
}

/// Reusable central-difference estimator with a validated step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralDifference<T> {
    step_size: T,
}

impl<T: Scalar> Default for CentralDifference<T> {
    fn default() -> Self {
        Self {
            step_size: T::DEFAULT_STEP_SIZE,
        }
    }
}

impl<T: Scalar> CentralDifference<T> {
    /// Creates an estimator with step size `h`.
    ///
    /// Fails with `InvalidArgument` if `h` is not finite or not strictly positive.
    pub fn new(h: T) -> Result<Self> {
        Self::from_config(&DerivativeConfig::new(h))
    }

    /// Creates an estimator from a configuration.
    pub fn from_config(config: &DerivativeConfig<T>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            step_size: config.step_size,
        })
    }

    /// Returns the step size used by this estimator.
    pub fn step_size(&self) -> T {
        self.step_size
    }

    /// Estimates `f'(x)`.
    pub fn estimate<F>(&self, f: F, x: T) -> T
    where
        F: FnMut(T) -> T,
    {
        derivative_with_step(f, x, self.step_size)
    }
}

/// Wrapper to count function evaluations for testing and debugging.
#[derive(Debug)]
pub struct CountingFunction<F> {
    /// The underlying function
    pub inner: F,
    count: Cell<usize>,
}

impl<F> CountingFunction<F> {
    /// Creates a new counting wrapper around a function.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    /// Evaluates the wrapped function and records the call.
    pub fn call<T>(&self, x: T) -> T
    where
        F: Fn(T) -> T,
    {
        self.count.set(self.count.get() + 1);
        (self.inner)(x)
    }

    /// Returns the number of evaluations since creation or the last reset.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Resets the evaluation counter to zero.
    pub fn reset_count(&self) {
        self.count.set(0);
    }
}
