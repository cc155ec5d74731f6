//! Error type shared by every pipeline stage.

use thiserror::Error;

/// Errors from pipeline construction and execution.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An i64 operation left the representable range.
    #[error("Overflow: {lhs} {op} {rhs} overflows i64")]
    Overflow {
        op: &'static str,
        lhs: i64,
        rhs: i64,
    },

    /// Configuration rejected by validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Two runs over identical input produced different hashes.
    #[error("Determinism failure: run 1 = {first}, run 2 = {second}")]
    Determinism { first: String, second: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
