//! Core error and scalar types.

pub mod error;
pub mod types;

// Re-export core types
pub use error::*;
pub use types::*;
