//! Plain-text circuit rendering.
//!
//! Produces a line-oriented listing suitable for writing to diagram files:
//! a header describing the register layout followed by one line per
//! instruction, operands labelled through their registers.

use std::fmt::Write;

use crate::circuit::Circuit;
use crate::instruction::InstructionKind;

/// Render a circuit as plain text.
pub fn render(circuit: &Circuit) -> String {
    let mut out = String::new();

    let qregs: Vec<_> = circuit
        .qregs()
        .iter()
        .map(|r| format!("{}[{}]", r.name, r.size))
        .collect();
    let cregs: Vec<_> = circuit
        .cregs()
        .iter()
        .map(|r| format!("{}[{}]", r.name, r.size))
        .collect();

    let _ = writeln!(out, "circuit {}", circuit.name());
    let _ = writeln!(out, "qubits:  {}", join_or_none(&qregs));
    let _ = writeln!(out, "clbits:  {}", join_or_none(&cregs));
    let _ = writeln!(out, "{}", "-".repeat(40));

    for inst in circuit.instructions() {
        let qubits: Vec<_> = inst
            .qubits
            .iter()
            .map(|&q| circuit.qubit_label(q))
            .collect();

        match inst.kind {
            InstructionKind::Measure => {
                let clbits: Vec<_> = inst
                    .clbits
                    .iter()
                    .map(|&c| circuit.clbit_label(c))
                    .collect();
                let _ = writeln!(out, "measure {} -> {}", qubits.join(" "), clbits.join(" "));
            }
            _ => {
                let _ = writeln!(out, "{} {}", inst.name(), qubits.join(" "));
            }
        }
    }

    out
}

fn join_or_none(parts: &[String]) -> String {
    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::QubitId;

    #[test]
    fn test_render_listing() {
        let mut circuit = Circuit::new("demo");
        let addr = circuit.add_qreg("addr", 2);
        let out = circuit.add_qreg("out", 1);
        let c = circuit.add_creg("c", 2);

        circuit.h(addr[0]).unwrap();
        circuit.mcx(&[addr[0], addr[1]], out[0]).unwrap();
        circuit.measure(addr[0], c[0]).unwrap();

        let text = render(&circuit);
        assert!(text.starts_with("circuit demo\n"));
        assert!(text.contains("qubits:  addr[2] out[1]"));
        assert!(text.contains("h addr[0]"));
        assert!(text.contains("mcx addr[0] addr[1] out[0]"));
        assert!(text.contains("measure addr[0] -> c[0]"));
    }

    #[test]
    fn test_render_empty_circuit() {
        let circuit = Circuit::new("empty");
        let text = render(&circuit);
        assert!(text.contains("qubits:  (none)"));
    }

    #[test]
    fn test_render_unregistered_bits() {
        let mut circuit = Circuit::with_size("anon", 1, 0);
        circuit.x(QubitId(0)).unwrap();
        let text = render(&circuit);
        assert!(text.contains("x q[0]"));
    }
}
