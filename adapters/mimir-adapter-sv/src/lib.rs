//! Statevector executor for Mimir circuits.
//!
//! Exact simulation of small circuits: the full state is evolved once,
//! then measurement outcomes are sampled from the final distribution.
//!
//! # Example
//!
//! ```
//! use mimir_adapter_sv::SvExecutor;
//! use mimir_hal::Executor;
//! use mimir_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("flip", 1, 1);
//! circuit.x(QubitId(0))?;
//! circuit.measure(QubitId(0), ClbitId(0))?;
//!
//! let executor = SvExecutor::new();
//! let result = executor.run(&circuit, 100)?;
//! assert_eq!(result.counts.get("1"), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod executor;
pub mod statevector;

pub use executor::SvExecutor;
pub use statevector::Statevector;
