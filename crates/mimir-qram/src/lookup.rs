//! Lookup encoder: classical table contents as a reversible read.

use crate::sequence::{GateSequence, SequenceBuilder};
use crate::table::{LookupTable, address_pattern};

/// Build the memory-read sequence for a lookup table.
///
/// The sequence spans `address_bits + 1` qubits: local qubits
/// `0..address_bits` hold the address (qubit 0 is the most significant
/// bit) and the last qubit is the output. For every address whose stored
/// value is 1, the output is flipped exactly when the address register
/// holds that address. Addresses storing 0 contribute no gates, so an
/// all-zero table yields an empty (identity) sequence.
///
/// On a basis state |a⟩|0⟩ the sequence produces |a⟩|data\[a\]⟩; in
/// superposition every branch is conditioned independently, which is what
/// makes the read usable as an oracle core.
pub fn lookup_sequence(table: &LookupTable) -> GateSequence {
    let bits = table.address_bits();
    let output = bits;
    let mut builder = SequenceBuilder::new(bits + 1);

    for address in table.matching_addresses(1) {
        let pattern = address_pattern(address, bits);
        builder.with_zero_controls(&pattern, |b| {
            b.mcx(0..bits, output);
        });
    }

    builder.finish("lookup")
}
