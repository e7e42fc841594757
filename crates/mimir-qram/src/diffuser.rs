//! Grover diffuser: inversion about the mean amplitude.

use crate::error::{QramError, QramResult};
use crate::sequence::{GateSequence, SequenceBuilder};

/// Build the diffuser over `address_bits` qubits.
///
/// The standard construction conjugates a phase flip on |0…0⟩ by H and X
/// layers: H on every qubit, X on every qubit, a multi-controlled Z
/// realized as H · MCX · H on the last qubit, then the X and H layers
/// again. The sequence depends only on the register width, never on the
/// table contents.
///
/// For a single address qubit the multi-controlled core has no controls
/// left, so the construction degenerates: HXHXHXH on one qubit reduces to
/// a plain X, which is exactly inversion about the mean on two
/// amplitudes. An empty register is rejected.
pub fn diffuser_sequence(address_bits: u32) -> QramResult<GateSequence> {
    if address_bits == 0 {
        return Err(QramError::EmptyAddressRegister);
    }

    let mut builder = SequenceBuilder::new(address_bits);
    if address_bits == 1 {
        builder.x(0);
        return Ok(builder.finish("diffuser"));
    }

    let last = address_bits - 1;
    for q in 0..address_bits {
        builder.h(q);
    }
    for q in 0..address_bits {
        builder.x(q);
    }
    builder.h(last);
    builder.mcx(0..last, last);
    builder.h(last);
    for q in 0..address_bits {
        builder.x(q);
    }
    for q in 0..address_bits {
        builder.h(q);
    }
    Ok(builder.finish("diffuser"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimir_ir::StandardGate;

    #[test]
    fn test_empty_register_rejected() {
        let err = diffuser_sequence(0).unwrap_err();
        assert!(matches!(err, QramError::EmptyAddressRegister));
    }

    #[test]
    fn test_single_qubit_degenerates_to_x() {
        let seq = diffuser_sequence(1).unwrap();
        let names: Vec<_> = seq.ops().iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["x"]);
    }

    #[test]
    fn test_two_qubit_layout() {
        let seq = diffuser_sequence(2).unwrap();
        let names: Vec<_> = seq.ops().iter().map(|op| op.name()).collect();
        assert_eq!(
            names,
            vec!["h", "h", "x", "x", "h", "mcx", "h", "x", "x", "h", "h"]
        );
        assert_eq!(seq.ops()[5].as_gate(), Some(StandardGate::Mcx(1)));
    }

    #[test]
    fn test_core_controls_span_all_but_last() {
        let seq = diffuser_sequence(4).unwrap();
        let mcx = seq
            .ops()
            .iter()
            .find(|op| matches!(op.as_gate(), Some(StandardGate::Mcx(_))))
            .unwrap();
        assert_eq!(mcx.as_gate(), Some(StandardGate::Mcx(3)));
        assert_eq!(mcx.qubits.len(), 4);
    }

    #[test]
    fn test_palindrome_layout() {
        // Every gate is self-inverse and the layer structure is a
        // palindrome, so reversing the sequence preserves the gate list.
        let seq = diffuser_sequence(3).unwrap();
        let forward: Vec<_> = seq.ops().iter().map(|op| op.name()).collect();
        let backward: Vec<_> = seq.inverse().ops().iter().map(|op| op.name()).collect();
        assert_eq!(forward, backward);
    }
}
