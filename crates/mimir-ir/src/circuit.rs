//! High-level circuit builder API.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A named, contiguous slice of a circuit's qubits or classical bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    /// Name of the register.
    pub name: String,
    /// Index of the first bit in the register.
    pub first: u32,
    /// Number of bits in the register.
    pub size: u32,
}

impl Register {
    fn contains(&self, bit: u32) -> bool {
        bit >= self.first && bit < self.first + self.size
    }
}

/// A quantum circuit.
///
/// A circuit is a named register layout plus an ordered list of applied
/// instructions. It is built once through the fluent API and then handed
/// to an executor; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Quantum registers, in declaration order.
    qregs: Vec<Register>,
    /// Classical registers, in declaration order.
    cregs: Vec<Register>,
    /// Total number of qubits.
    num_qubits: u32,
    /// Total number of classical bits.
    num_clbits: u32,
    /// Applied instructions, in order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qregs: vec![],
            cregs: vec![],
            num_qubits: 0,
            num_clbits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with default `q`/`c` registers of the given sizes.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        if num_qubits > 0 {
            circuit.add_qreg("q", num_qubits);
        }
        if num_clbits > 0 {
            circuit.add_creg("c", num_clbits);
        }
        circuit
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let first = self.num_qubits;
        self.qregs.push(Register {
            name: name.into(),
            first,
            size,
        });
        self.num_qubits += size;
        (first..self.num_qubits).map(QubitId).collect()
    }

    /// Add a classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let first = self.num_clbits;
        self.cregs.push(Register {
            name: name.into(),
            first,
            size,
        });
        self.num_clbits += size;
        (first..self.num_clbits).map(ClbitId).collect()
    }

    /// Apply an instruction to the circuit.
    ///
    /// Validates gate arity, operand existence, and duplicate operands
    /// before appending.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let gate_name = match &instruction.kind {
            InstructionKind::Gate(gate) => Some(gate.name().to_string()),
            _ => None,
        };

        if let InstructionKind::Gate(gate) = &instruction.kind {
            if matches!(gate, StandardGate::Mcx(0)) {
                return Err(IrError::MissingControls);
            }
            let expected = gate.num_qubits();
            let got = u32::try_from(instruction.qubits.len()).unwrap_or(u32::MAX);
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        if instruction.is_measure() && instruction.qubits.len() != instruction.clbits.len() {
            return Err(IrError::MeasureArityMismatch {
                qubits: instruction.qubits.len(),
                clbits: instruction.clbits.len(),
            });
        }

        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }
        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CZ, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CCX, [c1, c2, target]))
    }

    /// Apply an X on `target` controlled on all of `controls` being |1⟩.
    pub fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<&mut Self> {
        if controls.is_empty() {
            return Err(IrError::MissingControls);
        }
        let n = u32::try_from(controls.len()).expect("control count exceeds u32::MAX");
        let qubits: Vec<_> = controls.iter().copied().chain([target]).collect();
        self.apply(Instruction::gate(StandardGate::Mcx(n), qubits))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))
    }

    /// Measure qubits into corresponding classical bits, pairwise.
    pub fn measure_all(
        &mut self,
        qubits: &[QubitId],
        clbits: &[ClbitId],
    ) -> IrResult<&mut Self> {
        if qubits.len() != clbits.len() {
            return Err(IrError::MeasureArityMismatch {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        for (&q, &c) in qubits.iter().zip(clbits) {
            self.measure(q, c)?;
        }
        Ok(self)
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier(qubits))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the quantum registers.
    pub fn qregs(&self) -> &[Register] {
        &self.qregs
    }

    /// Get the classical registers.
    pub fn cregs(&self) -> &[Register] {
        &self.cregs
    }

    /// Get the applied instructions in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the number of instructions.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Get the circuit depth.
    ///
    /// Levelized over wires: each instruction lands one level after the
    /// deepest wire it touches, barriers and measures included.
    pub fn depth(&self) -> usize {
        let mut qubit_level = vec![0usize; self.num_qubits as usize];
        let mut clbit_level = vec![0usize; self.num_clbits as usize];
        let mut max_depth = 0;

        for inst in &self.instructions {
            let level = inst
                .qubits
                .iter()
                .map(|q| qubit_level[q.0 as usize])
                .chain(inst.clbits.iter().map(|c| clbit_level[c.0 as usize]))
                .max()
                .unwrap_or(0)
                + 1;

            for q in &inst.qubits {
                qubit_level[q.0 as usize] = level;
            }
            for c in &inst.clbits {
                clbit_level[c.0 as usize] = level;
            }
            max_depth = max_depth.max(level);
        }

        max_depth
    }

    /// Count instructions per operation name.
    ///
    /// Returns a `BTreeMap` so iteration order is deterministic.
    pub fn count_ops(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for inst in &self.instructions {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Get the display label for a qubit (`addr[1]` if registered, `q3` otherwise).
    pub fn qubit_label(&self, qubit: QubitId) -> String {
        match self.qregs.iter().find(|r| r.contains(qubit.0)) {
            Some(reg) => format!("{}[{}]", reg.name, qubit.0 - reg.first),
            None => qubit.to_string(),
        }
    }

    /// Get the display label for a classical bit.
    pub fn clbit_label(&self, clbit: ClbitId) -> String {
        match self.cregs.iter().find(|r| r.contains(clbit.0)) {
            Some(reg) => format!("{}[{}]", reg.name, clbit.0 - reg.first),
            None => clbit.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
    }

    #[test]
    fn test_add_registers() {
        let mut circuit = Circuit::new("test");
        let qreg = circuit.add_qreg("addr", 2);
        let out = circuit.add_qreg("out", 1);
        let creg = circuit.add_creg("c", 2);

        assert_eq!(qreg, vec![QubitId(0), QubitId(1)]);
        assert_eq!(out, vec![QubitId(2)]);
        assert_eq!(creg.len(), 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.qubit_label(QubitId(2)), "out[0]");
        assert_eq!(circuit.clbit_label(ClbitId(1)), "c[1]");
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.num_ops(), 4);
        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
    }

    #[test]
    fn test_unknown_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let err = circuit.h(QubitId(5)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_mcx_requires_controls() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        let err = circuit.mcx(&[], QubitId(2)).unwrap_err();
        assert!(matches!(err, IrError::MissingControls));

        circuit
            .mcx(&[QubitId(0), QubitId(1)], QubitId(2))
            .unwrap();
        assert_eq!(circuit.count_ops()["mcx"], 1);
    }

    #[test]
    fn test_depth_parallel_gates() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.h(QubitId(1)).unwrap();
        circuit.h(QubitId(2)).unwrap();
        assert_eq!(circuit.depth(), 1);

        circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_count_ops() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.h(QubitId(1)).unwrap();
        circuit.x(QubitId(0)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();

        let ops = circuit.count_ops();
        assert_eq!(ops["h"], 2);
        assert_eq!(ops["x"], 1);
        assert_eq!(ops["measure"], 1);
    }
}
