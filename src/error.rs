//! Error types for tour optimization.

use thiserror::Error;

/// Failure reported by configuration validation or fitness evaluation.
///
/// Configuration problems are detected when the engine is constructed;
/// degenerate input is detected the first time a tour is scored.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// A parameter or the city list violates its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A tour has zero total length, so its fitness is undefined.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        TspError::InvalidConfiguration(msg.into())
    }
}
