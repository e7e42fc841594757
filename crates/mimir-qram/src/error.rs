//! Error types for circuit construction.

use mimir_ir::IrError;
use thiserror::Error;

/// Errors that can occur while building lookup, oracle, diffuser, or
/// search circuits.
///
/// Every variant is a precondition violation: construction is pure and
/// deterministic, so failures abort immediately and no partial circuit is
/// ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QramError {
    /// Lookup table length is not a power of two.
    #[error("lookup table length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Lookup table too short to address.
    ///
    /// A single-entry table would need an empty address register, which
    /// neither the encoder nor the diffuser supports.
    #[error("lookup table must hold at least two entries, got {0}")]
    TooFewEntries(usize),

    /// Lookup table entry outside {0, 1}.
    #[error("lookup table entries must be 0 or 1, got {0}")]
    NotABit(u8),

    /// Invalid character in a table literal.
    #[error("invalid bit character {0:?} in table literal")]
    InvalidBitChar(char),

    /// Diffuser requested over an empty address register.
    #[error("diffuser requires at least one address qubit")]
    EmptyAddressRegister,

    /// Gate sequence applied to a register of the wrong width.
    #[error("sequence '{name}' spans {expected} qubits, got {got}")]
    RegisterMismatch {
        /// Name of the sequence.
        name: String,
        /// Qubits the sequence spans.
        expected: u32,
        /// Qubits supplied.
        got: usize,
    },

    /// Underlying IR error.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for circuit construction.
pub type QramResult<T> = Result<T, QramError>;
