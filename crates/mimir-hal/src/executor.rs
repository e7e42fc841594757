//! Executor trait.
//!
//! The executor lifecycle is a single blocking call:
//!
//! ```text
//!   resources() ──→ run() ──→ ExecutionResult
//!     (sync)        (sync)
//! ```
//!
//! Circuit construction is pure computation over immutable inputs; an
//! executor takes a finished [`Circuit`] and a shot count and returns the
//! complete measurement distribution. No streaming, no partial results,
//! no cancellation.

use mimir_ir::Circuit;

use crate::error::ExecResult;
use crate::result::{ExecutionResult, ResourceMetrics};

/// Trait for circuit executors.
///
/// # Contract
///
/// - `run()` MUST reject `shots == 0` with [`ExecError::InvalidShots`] and
///   circuits larger than `max_qubits()` with [`ExecError::CircuitTooLarge`].
/// - On success the returned counts MUST sum exactly to `shots`.
/// - `resources()` reports depth and per-operation counts in the executor's
///   own elementary gate set.
///
/// [`ExecError::InvalidShots`]: crate::error::ExecError::InvalidShots
/// [`ExecError::CircuitTooLarge`]: crate::error::ExecError::CircuitTooLarge
pub trait Executor {
    /// Get the name of this executor.
    fn name(&self) -> &str;

    /// Maximum number of qubits this executor supports.
    fn max_qubits(&self) -> u32;

    /// Execute a circuit for the given number of shots.
    fn run(&self, circuit: &Circuit, shots: u32) -> ExecResult<ExecutionResult>;

    /// Report resource metrics for a circuit as this executor would run it.
    fn resources(&self, circuit: &Circuit) -> ExecResult<ResourceMetrics>;
}
