//! Error types for checked test function evaluation.
//!
//! The objective functions themselves never fail: overflow surfaces as
//! infinity or NaN. These errors only come from looking functions up by
//! name and checking input dimensions in [`crate::FunctionRegistry`].

use thiserror::Error;

/// Errors that can occur when evaluating a registered test function.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TestFunctionError {
    /// No function is registered under this name.
    #[error("unknown test function: '{name}'")]
    UnknownFunction {
        /// The requested name
        name: String,
    },

    /// Input vector has the wrong number of coordinates.
    #[error("dimension mismatch for '{name}': expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the function being evaluated
        name: String,
        /// Dimension the function accepts
        expected: usize,
        /// Dimension of the input provided
        got: usize,
    },
}

/// A specialized `Result` type for test function operations.
pub type Result<T> = std::result::Result<T, TestFunctionError>;

impl TestFunctionError {
    /// Returns `true` if the function name could not be resolved.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, TestFunctionError::UnknownFunction { .. })
    }

    /// Returns `true` if this is a dimension mismatch error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, TestFunctionError::DimensionMismatch { .. })
    }
}
