//! Mimir Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Mimir: a small gate set, instructions, and a list-based
//! [`Circuit`] with a fluent builder API.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`], including a variable-width
//!   multi-controlled X ([`StandardGate::Mcx`])
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] builder with register layout, depth, and
//!   per-operation counts
//! - **Rendering**: [`render::render`] for plain-text diagram output
//!
//! # Example: Building and Inspecting a Circuit
//!
//! ```rust
//! use mimir_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("toggle");
//! let addr = circuit.add_qreg("addr", 2);
//! let out = circuit.add_qreg("out", 1);
//!
//! circuit.x(addr[0]).unwrap();
//! circuit.mcx(&[addr[0], addr[1]], out[0]).unwrap();
//! circuit.x(addr[0]).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.depth(), 3);
//! assert_eq!(circuit.count_ops()["x"], 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod render;

pub use circuit::{Circuit, Register};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
