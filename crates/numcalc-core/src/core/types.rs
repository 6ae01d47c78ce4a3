//! Scalar trait and numerical constants.
//!
//! This module provides the numeric trait shared by the typed API and the
//! constants used as defaults throughout the library.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in numeric operations (f32 or f64).
///
/// Values keep IEEE semantics: NaN and infinities are valid scalars and
/// propagate through every operation without being rejected.
pub trait Scalar:
    Float + FromPrimitive + Display + Debug + Default + Copy + Send + Sync + 'static
{
    /// Default step size for central-difference derivatives.
    const DEFAULT_STEP_SIZE: Self;
}

impl Scalar for f32 {
    const DEFAULT_STEP_SIZE: Self = 1e-5;
}

impl Scalar for f64 {
    const DEFAULT_STEP_SIZE: Self = 1e-5;
}

/// Numerical constants.
pub mod constants {
    /// Largest integer n such that n and n + 1 are both exactly representable in f64.
    pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
}
