//! Phase oracle: mark addresses whose stored value matches a target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QramError;
use crate::lookup::lookup_sequence;
use crate::sequence::{GateSequence, SequenceBuilder};
use crate::table::LookupTable;

/// The stored value a search should mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Mark addresses storing 0.
    Zero,
    /// Mark addresses storing 1.
    One,
}

impl Target {
    /// The target as a bit value.
    pub fn bit(self) -> u8 {
        match self {
            Target::Zero => 0,
            Target::One => 1,
        }
    }
}

impl FromStr for Target {
    type Err = QramError;

    fn from_str(s: &str) -> Result<Self, QramError> {
        match s {
            "0" => Ok(Target::Zero),
            "1" => Ok(Target::One),
            other => {
                let c = other.chars().next().unwrap_or('?');
                Err(QramError::InvalidBitChar(c))
            }
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

/// Build the phase oracle for a table and target value.
///
/// The sequence spans the same `address_bits + 1` qubits as the lookup:
/// it reads the table onto the output qubit, applies a phase flip to the
/// branches where the output matches `target`, then uncomputes the read
/// so the output qubit returns to |0⟩ on every branch. The net effect is
/// |a⟩ ↦ −|a⟩ exactly when `data[a] == target`, with the output qubit
/// left disentangled.
///
/// For [`Target::One`] the phase flip is a plain Z on the output; for
/// [`Target::Zero`] the Z is conjugated by X so the zero branch picks up
/// the phase instead.
pub fn oracle_sequence(table: &LookupTable, target: Target) -> GateSequence {
    let lookup = lookup_sequence(table);
    let output = table.address_bits();
    let mut builder = SequenceBuilder::new(table.address_bits() + 1);

    builder.append(&lookup);
    match target {
        Target::One => {
            builder.z(output);
        }
        Target::Zero => {
            builder.x(output).z(output).x(output);
        }
    }
    builder.append(&lookup.inverse());

    builder.finish("oracle")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parse_and_display() {
        assert_eq!("0".parse::<Target>().unwrap(), Target::Zero);
        assert_eq!("1".parse::<Target>().unwrap(), Target::One);
        assert_eq!(Target::One.to_string(), "1");
        assert_eq!(Target::Zero.bit(), 0);

        let err = "2".parse::<Target>().unwrap_err();
        assert!(matches!(err, QramError::InvalidBitChar('2')));
    }

    #[test]
    fn test_oracle_wraps_lookup_symmetrically() {
        let table = LookupTable::new(vec![1, 0, 1, 0]).unwrap();
        let lookup = lookup_sequence(&table);
        let oracle = oracle_sequence(&table, Target::One);

        // lookup + z + inverse lookup
        assert_eq!(oracle.len(), 2 * lookup.len() + 1);
        assert_eq!(oracle.ops()[lookup.len()].name(), "z");
        assert_eq!(oracle.num_qubits(), 3);
    }

    #[test]
    fn test_target_zero_conjugates_phase_flip() {
        let table = LookupTable::new(vec![1, 0, 1, 0]).unwrap();
        let lookup = lookup_sequence(&table);
        let oracle = oracle_sequence(&table, Target::Zero);

        assert_eq!(oracle.len(), 2 * lookup.len() + 3);
        let mid: Vec<_> = oracle.ops()[lookup.len()..lookup.len() + 3]
            .iter()
            .map(|op| op.name())
            .collect();
        assert_eq!(mid, vec!["x", "z", "x"]);
    }

    #[test]
    fn test_all_zero_table_target_one_is_bare_z() {
        let table = LookupTable::new(vec![0, 0]).unwrap();
        let oracle = oracle_sequence(&table, Target::One);
        let names: Vec<_> = oracle.ops().iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["z"]);
    }
}
