//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
///
/// The set is deliberately small: it covers the reversible permutation
/// primitives a classical-memory read needs (X, multi-controlled X), the
/// phase primitive (Z), and the superposition primitive (H), plus a few
/// common companions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Toffoli gate (CCX).
    CCX,
    /// X on a target conditioned on `n` control qubits all being |1⟩.
    ///
    /// `Mcx(1)` acts like [`StandardGate::CX`] and `Mcx(2)` like
    /// [`StandardGate::CCX`]; the variant exists so an AND over an entire
    /// address register is a single operation. `n` must be at least 1.
    Mcx(u32),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
            StandardGate::Mcx(_) => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg => 1,

            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => 2,

            StandardGate::CCX => 3,

            StandardGate::Mcx(controls) => controls + 1,
        }
    }

    /// Get the inverse of this gate.
    ///
    /// Every supported gate is its own inverse except the S/Sdg pair.
    #[inline]
    pub fn inverse(&self) -> StandardGate {
        match self {
            StandardGate::S => StandardGate::Sdg,
            StandardGate::Sdg => StandardGate::S,
            g => *g,
        }
    }

    /// Check if applying this gate twice yields the identity.
    #[inline]
    pub fn is_self_inverse(&self) -> bool {
        self.inverse() == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);
        assert_eq!(StandardGate::Mcx(4).num_qubits(), 5);

        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::Mcx(4).name(), "mcx");
    }

    #[test]
    fn test_inverse() {
        assert_eq!(StandardGate::X.inverse(), StandardGate::X);
        assert_eq!(StandardGate::Mcx(3).inverse(), StandardGate::Mcx(3));
        assert_eq!(StandardGate::S.inverse(), StandardGate::Sdg);
        assert_eq!(StandardGate::Sdg.inverse(), StandardGate::S);

        assert!(StandardGate::Z.is_self_inverse());
        assert!(!StandardGate::S.is_self_inverse());
    }
}
