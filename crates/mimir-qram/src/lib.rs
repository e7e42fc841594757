//! Mimir QRAM: lookup encoding, Grover oracle, and search assembly.
//!
//! This crate turns a classical bit table into quantum circuits:
//!
//! - [`LookupTable`]: validated table contents (power-of-two length)
//! - [`lookup_sequence`]: the reversible memory read
//! - [`oracle_sequence`]: phase oracle marking addresses that store a
//!   [`Target`] value
//! - [`diffuser_sequence`]: inversion about the mean
//! - [`grover_circuit`]: one full Grover iteration, measured
//! - [`render_histogram`]: text histogram of measurement counts
//!
//! # Example
//!
//! ```
//! use mimir_qram::{LookupTable, Target, grover_circuit};
//!
//! let table: LookupTable = "1010".parse()?;
//! let circuit = grover_circuit(&table, Target::One)?;
//! assert_eq!(circuit.num_qubits(), 3);
//! # Ok::<(), mimir_qram::QramError>(())
//! ```

pub mod diffuser;
pub mod error;
pub mod grover;
pub mod lookup;
pub mod oracle;
pub mod report;
pub mod sequence;
pub mod table;

pub use diffuser::diffuser_sequence;
pub use error::{QramError, QramResult};
pub use grover::{diffuser_circuit, grover_circuit, lookup_circuit, oracle_circuit};
pub use lookup::lookup_sequence;
pub use oracle::{Target, oracle_sequence};
pub use report::render_histogram;
pub use sequence::{GateSequence, SequenceBuilder};
pub use table::{LookupTable, address_pattern};
