//! Error types for generator configuration validation.

use thiserror::Error;

/// Errors raised while validating a generator configuration.
///
/// Validation runs before any data is generated, so a failed configuration
/// never produces a partial document.
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    /// A probability parameter was non-finite or outside `[0.0, 1.0]`.
    #[error("probability `{parameter}` must lie within [0.0, 1.0], got {value}")]
    InvalidProbability {
        /// Name of the invalid parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
}
