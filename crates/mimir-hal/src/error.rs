//! Error types for the executor abstraction.

use thiserror::Error;

/// Errors that can occur when executing circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecError {
    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Circuit exceeds executor capabilities.
    #[error("Circuit exceeds executor capabilities: {0}")]
    CircuitTooLarge(String),

    /// Invalid circuit.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic executor error.
    #[error("Executor error: {0}")]
    Backend(String),
}

/// Result type for executor operations.
pub type ExecResult<T> = Result<T, ExecError>;
