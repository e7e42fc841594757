//! Search assembler: one Grover iteration over a table lookup.

use mimir_ir::Circuit;

use crate::diffuser::diffuser_sequence;
use crate::error::QramResult;
use crate::oracle::{Target, oracle_sequence};
use crate::sequence::GateSequence;
use crate::table::LookupTable;

/// Assemble the full search circuit for one Grover iteration.
///
/// Registers: `addr` holds the address qubits, `out` the single oracle
/// output qubit, `c` one classical bit per address qubit. The stages are
/// applied in order:
///
/// 1. H on every address qubit (uniform superposition)
/// 2. the phase oracle for `table` and `target`
/// 3. the diffuser over the address register
/// 4. measurement of every address qubit into `c`, in index order
///
/// Address qubit `j` measures into classical bit `j`, so reading a result
/// bitstring left to right recovers the address pattern most significant
/// bit first. The output qubit is never measured; the oracle returns it
/// to |0⟩.
pub fn grover_circuit(table: &LookupTable, target: Target) -> QramResult<Circuit> {
    let bits = table.address_bits();
    let mut circuit = Circuit::new("grover_search");
    let addr = circuit.add_qreg("addr", bits);
    let out = circuit.add_qreg("out", 1);
    let clbits = circuit.add_creg("c", bits);

    for &q in &addr {
        circuit.h(q)?;
    }

    let mut oracle_qubits = addr.clone();
    oracle_qubits.extend_from_slice(&out);
    oracle_sequence(table, target).append_to(&mut circuit, &oracle_qubits)?;

    diffuser_sequence(bits)?.append_to(&mut circuit, &addr)?;

    circuit.measure_all(&addr, &clbits)?;
    Ok(circuit)
}

/// The oracle as a standalone circuit over `addr` and `out` registers,
/// for rendering and inspection.
pub fn oracle_circuit(table: &LookupTable, target: Target) -> QramResult<Circuit> {
    named_stage_circuit(table.address_bits(), &oracle_sequence(table, target))
}

/// The diffuser as a standalone circuit over an `addr` register.
pub fn diffuser_circuit(address_bits: u32) -> QramResult<Circuit> {
    let seq = diffuser_sequence(address_bits)?;
    let mut circuit = Circuit::new(seq.name().to_owned());
    let addr = circuit.add_qreg("addr", address_bits);
    seq.append_to(&mut circuit, &addr)?;
    Ok(circuit)
}

/// The lookup as a standalone circuit over `addr` and `out` registers.
pub fn lookup_circuit(table: &LookupTable) -> QramResult<Circuit> {
    named_stage_circuit(table.address_bits(), &crate::lookup::lookup_sequence(table))
}

fn named_stage_circuit(address_bits: u32, seq: &GateSequence) -> QramResult<Circuit> {
    let mut circuit = Circuit::new(seq.name().to_owned());
    let mut qubits = circuit.add_qreg("addr", address_bits);
    qubits.extend(circuit.add_qreg("out", 1));
    seq.append_to(&mut circuit, &qubits)?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimir_ir::InstructionKind;

    #[test]
    fn test_register_layout() {
        let table = LookupTable::new(vec![1, 0, 1, 0]).unwrap();
        let circuit = grover_circuit(&table, Target::One).unwrap();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        let names: Vec<_> = circuit.qregs().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["addr", "out"]);
    }

    #[test]
    fn test_measures_address_qubits_only() {
        let table = LookupTable::new(vec![0, 1]).unwrap();
        let circuit = grover_circuit(&table, Target::One).unwrap();

        let measured: Vec<_> = circuit
            .instructions()
            .iter()
            .filter(|inst| matches!(inst.kind, InstructionKind::Measure))
            .flat_map(|inst| inst.qubits.iter().map(|q| q.0))
            .collect();
        assert_eq!(measured, vec![0]);
    }

    #[test]
    fn test_stage_order() {
        let table = LookupTable::new(vec![0, 0, 0, 1]).unwrap();
        let circuit = grover_circuit(&table, Target::One).unwrap();
        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();

        // h h | mcx z mcx | diffuser | measure measure
        assert_eq!(
            names,
            vec![
                "h", "h", "mcx", "z", "mcx", "h", "h", "x", "x", "h", "mcx", "h", "x", "x", "h",
                "h", "measure", "measure"
            ]
        );
    }

    #[test]
    fn test_stage_circuits_render_standalone() {
        let table = LookupTable::new(vec![1, 0, 1, 0]).unwrap();

        let lookup = lookup_circuit(&table).unwrap();
        assert_eq!(lookup.name(), "lookup");
        assert_eq!(lookup.num_qubits(), 3);

        let oracle = oracle_circuit(&table, Target::Zero).unwrap();
        assert_eq!(oracle.name(), "oracle");

        let diffuser = diffuser_circuit(2).unwrap();
        assert_eq!(diffuser.name(), "diffuser");
        assert_eq!(diffuser.num_qubits(), 2);
    }
}
