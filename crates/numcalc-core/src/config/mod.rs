//! Configuration for derivative estimation.
//!
//! [`DerivativeConfig`] carries the step size used by
//! [`CentralDifference`](crate::numerical::CentralDifference). With the
//! `serde` feature it can be loaded from any serde format.

use crate::{
    error::{NumericError, Result},
    types::Scalar,
};

/// Step-size configuration for central-difference estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        default,
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct DerivativeConfig<T> {
    /// Distance between the evaluation point and each sample point
    pub step_size: T,
}

impl<T: Scalar> Default for DerivativeConfig<T> {
    fn default() -> Self {
        Self {
            step_size: T::DEFAULT_STEP_SIZE,
        }
    }
}

impl<T: Scalar> DerivativeConfig<T> {
    /// Creates a configuration with the given step size.
    ///
    /// The step size is not checked here; call [`validate`](Self::validate)
    /// or build a [`CentralDifference`](crate::numerical::CentralDifference)
    /// from it.
    pub fn new(step_size: T) -> Self {
        Self { step_size }
    }

    /// Sets the step size.
    #[must_use]
    pub fn with_step_size(mut self, step_size: T) -> Self {
        self.step_size = step_size;
        self
    }

    /// Checks that the step size is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let h = self.step_size;
        if !h.is_finite() {
            return Err(NumericError::invalid_argument(
                "h",
                format!("step size must be finite, got {h}"),
            ));
        }
        if h <= T::zero() {
            return Err(NumericError::invalid_argument(
                "h",
                format!("step size must be positive, got {h}"),
            ));
        }
        Ok(())
    }
}
