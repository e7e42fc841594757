//! Statevector executor implementation.

use std::time::Instant;
use tracing::debug;

use mimir_hal::{Counts, ExecError, ExecResult, ExecutionResult, Executor, ResourceMetrics};
use mimir_ir::{Circuit, InstructionKind};

use crate::statevector::Statevector;

/// Local statevector executor.
///
/// Simulates the full state exactly, then samples the requested number of
/// shots from the final distribution. Supports circuits up to ~20 qubits
/// (limited by memory).
///
/// Measurements are deferred: every gate is applied to the statevector
/// and measurement instructions only record which qubit feeds which
/// classical bit. Circuits that apply gates after a measurement are
/// rejected, since sampling from the final state cannot reproduce
/// mid-circuit collapse.
pub struct SvExecutor {
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl SvExecutor {
    /// Create an executor with the default qubit limit.
    pub fn new() -> Self {
        Self { max_qubits: 20 }
    }

    /// Create an executor with a custom qubit limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    fn validate(&self, circuit: &Circuit, shots: u32) -> ExecResult<()> {
        if shots == 0 {
            return Err(ExecError::InvalidShots(
                "shot count must be at least 1".into(),
            ));
        }
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(ExecError::CircuitTooLarge(format!(
                "circuit has {} qubits but executor supports at most {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }

        let mut measured = false;
        for inst in circuit.instructions() {
            match inst.kind {
                InstructionKind::Measure => measured = true,
                InstructionKind::Gate(_) if measured => {
                    return Err(ExecError::InvalidCircuit(
                        "gates after measurement are not supported".into(),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Map a sampled basis index to a classical bitstring.
    ///
    /// Classical bit 0 is the leftmost character; clbits never written by
    /// a measurement read as 0.
    fn outcome_to_bitstring(circuit: &Circuit, outcome: usize) -> String {
        let mut bits = vec![b'0'; circuit.num_clbits() as usize];
        for inst in circuit.instructions() {
            if let InstructionKind::Measure = inst.kind {
                for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                    let value = (outcome >> q.0) & 1;
                    bits[c.0 as usize] = b'0' + value as u8;
                }
            }
        }
        String::from_utf8(bits).unwrap_or_default()
    }
}

impl Default for SvExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for SvExecutor {
    fn name(&self) -> &str {
        "statevector"
    }

    fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    fn run(&self, circuit: &Circuit, shots: u32) -> ExecResult<ExecutionResult> {
        self.validate(circuit, shots)?;
        let start = Instant::now();

        debug!(
            qubits = circuit.num_qubits(),
            shots,
            instructions = circuit.num_ops(),
            "starting simulation"
        );

        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample();
            counts.insert(Self::outcome_to_bitstring(circuit, outcome), 1);
        }

        let elapsed = start.elapsed();
        debug!(elapsed_ms = elapsed.as_millis() as u64, "simulation done");

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }

    fn resources(&self, circuit: &Circuit) -> ExecResult<ResourceMetrics> {
        Ok(ResourceMetrics {
            num_qubits: circuit.num_qubits(),
            depth: circuit.depth(),
            ops: circuit.count_ops(),
        })
    }
}
