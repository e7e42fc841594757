//! Mimir Executor Abstraction Layer
//!
//! This crate defines the boundary between circuit construction and circuit
//! execution:
//!
//! - The [`Executor`] trait: a synchronous `run(circuit, shots)` call
//!   returning a complete measurement distribution, plus resource metrics
//!   for any circuit
//! - [`Counts`] and [`ExecutionResult`] for unified result handling
//! - [`ResourceMetrics`] for depth and per-operation counts
//!
//! # Example
//!
//! ```ignore
//! use mimir_hal::Executor;
//! use mimir_adapter_sv::SvExecutor;
//! use mimir_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("flip", 1, 1);
//! circuit.x(QubitId(0))?;
//! circuit.measure(QubitId(0), ClbitId(0))?;
//!
//! let executor = SvExecutor::new();
//! let result = executor.run(&circuit, 100)?;
//! assert_eq!(result.counts.get("1"), 100);
//! ```

pub mod error;
pub mod executor;
pub mod result;

pub use error::{ExecError, ExecResult};
pub use executor::Executor;
pub use result::{Counts, ExecutionResult, ResourceMetrics};
