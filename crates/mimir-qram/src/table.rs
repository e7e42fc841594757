//! Classical lookup table contents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{QramError, QramResult};

/// Classical contents of the quantum memory: an immutable bit vector whose
/// length is a power of two.
///
/// Entry `a` is the value stored at address `a`; `address_bits` qubits are
/// needed to address the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTable {
    bits: Vec<u8>,
    address_bits: u32,
}

impl LookupTable {
    /// Create a table from 0/1 entries.
    ///
    /// Fails unless the length is a power of two and at least 2 — a
    /// single-entry table would need an empty address register.
    pub fn new(bits: impl Into<Vec<u8>>) -> QramResult<Self> {
        let bits = bits.into();
        if bits.len() < 2 {
            return Err(QramError::TooFewEntries(bits.len()));
        }
        if !bits.len().is_power_of_two() {
            return Err(QramError::NotPowerOfTwo(bits.len()));
        }
        if let Some(&bad) = bits.iter().find(|&&b| b > 1) {
            return Err(QramError::NotABit(bad));
        }
        let address_bits = bits.len().trailing_zeros();
        Ok(Self { bits, address_bits })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false — tables hold at least two entries.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of address qubits (`log2(len)`).
    pub fn address_bits(&self) -> u32 {
        self.address_bits
    }

    /// Get the stored bit at an address.
    pub fn get(&self, address: usize) -> Option<u8> {
        self.bits.get(address).copied()
    }

    /// The raw entries.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Addresses whose stored value equals `value`, in ascending order.
    pub fn matching_addresses(&self, value: u8) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(move |&(_, &b)| b == value)
            .map(|(a, _)| a)
    }
}

impl FromStr for LookupTable {
    type Err = QramError;

    /// Parse a table literal like `"1010"`.
    fn from_str(s: &str) -> QramResult<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(QramError::InvalidBitChar(other)),
            })
            .collect::<QramResult<Vec<u8>>>()?;
        Self::new(bits)
    }
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bits {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

/// Binary digits of an address, zero-padded to `bits` digits, most
/// significant first.
///
/// Digit `j` of the result belongs to address qubit `j`, so qubit 0 always
/// carries the most significant address bit.
pub fn address_pattern(address: usize, bits: u32) -> Vec<u8> {
    (0..bits)
        .map(|j| ((address >> (bits - 1 - j)) & 1) as u8)
        .collect()
}
