use std::fmt;
use std::str::FromStr;

use crate::error::HuffmanError;

/// An ordered sequence of binary digits: a single codeword or a whole encoded
/// stream. Rendered as text it is a string of `0` and `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bits(Vec<bool>);

impl Bits {
    pub fn new() -> Self {
        Bits(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Bits(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn append(&mut self, other: &Bits) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn starts_with(&self, prefix: &Bits) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Returns a copy with `bit` appended.
    pub(crate) fn extended(&self, bit: bool) -> Bits {
        let mut next = Bits::with_capacity(self.len() + 1);
        next.append(self);
        next.push(bit);
        next
    }

    /// Packs the bits MSB-first into bytes, zero-padding the final byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0
            .chunks(8)
            .map(|chunk| {
                let byte = chunk
                    .iter()
                    .fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit));
                byte << (8 - chunk.len())
            })
            .collect()
    }
}

impl From<Vec<bool>> for Bits {
    fn from(bits: Vec<bool>) -> Self {
        Bits(bits)
    }
}

impl FromIterator<bool> for Bits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Bits(iter.into_iter().collect())
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Bits {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(HuffmanError::InvalidDigit { position, digit }),
            })
            .collect()
    }
}
