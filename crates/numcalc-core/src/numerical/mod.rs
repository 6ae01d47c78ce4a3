//! Numerical differentiation.

pub mod difference;

pub use difference::{derivative, derivative_with_step, CentralDifference, CountingFunction};
