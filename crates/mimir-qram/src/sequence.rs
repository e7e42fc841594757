//! Reversible gate sequences and their builder.
//!
//! A [`GateSequence`] is an ordered list of elementary operations over a
//! fixed-width local register, immutable once built. Its inverse is a
//! derived transform — reversed order, each gate replaced by its own
//! inverse — so the round-trip invariant holds structurally rather than by
//! hand-maintaining a mirror sequence.

use serde::{Deserialize, Serialize};

use mimir_ir::{Circuit, Instruction, QubitId, StandardGate};

use crate::error::{QramError, QramResult};

/// An immutable sequence of gates over `num_qubits` local qubits.
///
/// Local qubit indices run `0..num_qubits`; [`GateSequence::append_to`]
/// maps them onto the qubits of a larger circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSequence {
    name: String,
    num_qubits: u32,
    ops: Vec<Instruction>,
}

impl GateSequence {
    /// Get the sequence name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width of the local register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The operations, in application order.
    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check whether the sequence is the identity (no operations).
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Derive the inverse sequence: reversed order, each gate inverted.
    ///
    /// For sequences made of self-inverse gates this returns the same
    /// gates in reverse; either way, applying a sequence followed by its
    /// inverse is the identity.
    pub fn inverse(&self) -> GateSequence {
        let ops = self
            .ops
            .iter()
            .rev()
            .map(|inst| {
                let gate = inst
                    .as_gate()
                    .expect("gate sequences contain only gate instructions");
                Instruction::gate(gate.inverse(), inst.qubits.iter().copied())
            })
            .collect();
        GateSequence {
            name: format!("{}_dg", self.name),
            num_qubits: self.num_qubits,
            ops,
        }
    }

    /// Append this sequence to a circuit, mapping local qubit `j` to
    /// `qubits[j]`.
    pub fn append_to(&self, circuit: &mut Circuit, qubits: &[QubitId]) -> QramResult<()> {
        if qubits.len() != self.num_qubits as usize {
            return Err(QramError::RegisterMismatch {
                name: self.name.clone(),
                expected: self.num_qubits,
                got: qubits.len(),
            });
        }
        for inst in &self.ops {
            let gate = inst
                .as_gate()
                .expect("gate sequences contain only gate instructions");
            let mapped = inst.qubits.iter().map(|q| qubits[q.0 as usize]);
            circuit.apply(Instruction::gate(gate, mapped))?;
        }
        Ok(())
    }

    /// Build a standalone circuit holding just this sequence, for
    /// rendering or state-level inspection.
    pub fn to_circuit(&self) -> QramResult<Circuit> {
        let mut circuit = Circuit::new(self.name.clone());
        let qubits = circuit.add_qreg("q", self.num_qubits);
        self.append_to(&mut circuit, &qubits)?;
        Ok(circuit)
    }
}

/// Accumulates operations and produces an immutable [`GateSequence`].
///
/// All methods take local qubit indices in `0..num_qubits`.
///
/// # Panics
///
/// Builder methods panic on out-of-range local indices; sequence
/// construction is deterministic, so an out-of-range index is a bug in
/// the caller, not a runtime condition.
#[derive(Debug)]
pub struct SequenceBuilder {
    num_qubits: u32,
    ops: Vec<Instruction>,
}

impl SequenceBuilder {
    /// Create a builder for a register of `num_qubits` local qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            ops: vec![],
        }
    }

    fn check(&self, qubit: u32) {
        assert!(
            qubit < self.num_qubits,
            "local qubit {qubit} out of range for {}-qubit sequence",
            self.num_qubits
        );
    }

    /// Append a bit-flip.
    pub fn x(&mut self, qubit: u32) -> &mut Self {
        self.check(qubit);
        self.ops
            .push(Instruction::single_qubit_gate(StandardGate::X, QubitId(qubit)));
        self
    }

    /// Append a phase-flip on the |1⟩ branch.
    pub fn z(&mut self, qubit: u32) -> &mut Self {
        self.check(qubit);
        self.ops
            .push(Instruction::single_qubit_gate(StandardGate::Z, QubitId(qubit)));
        self
    }

    /// Append a Hadamard.
    pub fn h(&mut self, qubit: u32) -> &mut Self {
        self.check(qubit);
        self.ops
            .push(Instruction::single_qubit_gate(StandardGate::H, QubitId(qubit)));
        self
    }

    /// Append an X on `target` controlled on every qubit in `controls`.
    pub fn mcx(&mut self, controls: impl IntoIterator<Item = u32>, target: u32) -> &mut Self {
        self.check(target);
        let mut qubits: Vec<QubitId> = controls
            .into_iter()
            .inspect(|&q| self.check(q))
            .map(QubitId)
            .collect();
        let n = u32::try_from(qubits.len()).expect("control count exceeds u32::MAX");
        assert!(n >= 1, "mcx requires at least one control qubit");
        qubits.push(QubitId(target));
        self.ops.push(Instruction::gate(StandardGate::Mcx(n), qubits));
        self
    }

    /// Run `f` with control polarity remapped: every qubit whose digit in
    /// `pattern` is 0 is bit-flipped before `f` and flipped back after.
    ///
    /// The closure is infallible, so the restoring flips cannot be
    /// skipped; the bracket is guaranteed balanced on every path.
    pub fn with_zero_controls(
        &mut self,
        pattern: &[u8],
        f: impl FnOnce(&mut Self),
    ) -> &mut Self {
        let flipped: Vec<u32> = pattern
            .iter()
            .enumerate()
            .filter(|&(_, &digit)| digit == 0)
            .map(|(j, _)| j as u32)
            .collect();

        for &q in &flipped {
            self.x(q);
        }
        f(self);
        for &q in &flipped {
            self.x(q);
        }
        self
    }

    /// Append every operation of an already-built sequence.
    pub fn append(&mut self, sequence: &GateSequence) -> &mut Self {
        assert_eq!(
            sequence.num_qubits(),
            self.num_qubits,
            "cannot append a {}-qubit sequence to a {}-qubit builder",
            sequence.num_qubits(),
            self.num_qubits
        );
        self.ops.extend_from_slice(sequence.ops());
        self
    }

    /// Finish, producing the immutable sequence.
    pub fn finish(self, name: impl Into<String>) -> GateSequence {
        GateSequence {
            name: name.into(),
            num_qubits: self.num_qubits,
            ops: self.ops,
        }
    }
}
