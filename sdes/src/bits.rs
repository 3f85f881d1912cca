//! Bit-string type used throughout the cipher engine
//!
//! All cipher state (blocks, keys, S-box entries, keystreams) is carried as
//! [`BitString`] values. Lengths are significant: operations that combine two
//! bit-strings check them and report a mismatch instead of truncating.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SdesError};

/// An ordered sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Create an empty bit-string (useful as an accumulator).
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if no bits are present.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`, like slice indexing.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Overwrite the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`, like slice indexing.
    pub fn set(&mut self, index: usize, bit: bool) {
        self.bits[index] = bit;
    }

    /// Append all bits of `other`.
    pub fn extend(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Concatenate two bit-strings into a new one.
    pub fn concat(&self, other: &BitString) -> BitString {
        let mut bits = self.bits.clone();
        bits.extend_from_slice(&other.bits);
        BitString { bits }
    }

    /// Bitwise XOR of two equal-length bit-strings.
    pub fn xor(&self, other: &BitString) -> Result<BitString> {
        if self.len() != other.len() {
            return Err(SdesError::SizeMismatch(format!(
                "cannot XOR bit-strings of lengths {} and {}",
                self.len(),
                other.len()
            )));
        }
        let bits = self
            .bits
            .iter()
            .zip(other.bits.iter())
            .map(|(a, b)| a ^ b)
            .collect();
        Ok(BitString { bits })
    }

    /// Circular left shift by `n` positions (`n` is reduced modulo the length).
    pub fn rotate_left(&self, n: usize) -> BitString {
        let mut bits = self.bits.clone();
        if !bits.is_empty() {
            let len = bits.len();
            bits.rotate_left(n % len);
        }
        BitString { bits }
    }

    /// Circular right shift by `n` positions (`n` is reduced modulo the length).
    pub fn rotate_right(&self, n: usize) -> BitString {
        let mut bits = self.bits.clone();
        if !bits.is_empty() {
            let len = bits.len();
            bits.rotate_right(n % len);
        }
        BitString { bits }
    }

    /// The first `n` bits.
    pub fn prefix(&self, n: usize) -> Result<BitString> {
        if n > self.len() {
            return Err(SdesError::SizeMismatch(format!(
                "prefix of {} bits requested from a {}-bit string",
                n,
                self.len()
            )));
        }
        Ok(BitString {
            bits: self.bits[..n].to_vec(),
        })
    }

    /// Split into `(left, right)` at `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > len()`, like `slice::split_at`.
    pub fn split_at(&self, mid: usize) -> (BitString, BitString) {
        let (l, r) = self.bits.split_at(mid);
        (
            BitString { bits: l.to_vec() },
            BitString { bits: r.to_vec() },
        )
    }

    /// Iterate over `size`-bit chunks; the final chunk may be shorter.
    pub fn chunks(&self, size: usize) -> impl Iterator<Item = BitString> + '_ {
        self.bits.chunks(size).map(|c| BitString { bits: c.to_vec() })
    }

    /// Interpret the bits as an unsigned big-endian integer.
    pub fn to_decimal(&self) -> Result<u64> {
        if self.is_empty() {
            return Err(SdesError::InvalidBinaryInput(
                "cannot convert an empty bit-string to a number".to_string(),
            ));
        }
        if self.len() > 64 {
            return Err(SdesError::SizeMismatch(format!(
                "{}-bit string does not fit a 64-bit integer",
                self.len()
            )));
        }
        let mut value = 0u64;
        for &bit in &self.bits {
            value = (value << 1) | u64::from(bit);
        }
        Ok(value)
    }

    /// Minimal big-endian binary representation of `value` (`0` becomes `"0"`).
    pub fn from_decimal(value: u64) -> BitString {
        if value == 0 {
            return BitString { bits: vec![false] };
        }
        let width = 64 - value.leading_zeros() as usize;
        let bits = (0..width).rev().map(|i| (value >> i) & 1 == 1).collect();
        BitString { bits }
    }

    /// Big-endian binary representation of `value` left-padded with zeros to
    /// exactly `width` bits; fails if `value` does not fit.
    pub fn from_decimal_width(value: u64, width: usize) -> Result<BitString> {
        let minimal = Self::from_decimal(value);
        if minimal.len() > width {
            return Err(SdesError::SizeMismatch(format!(
                "value {} does not fit in {} bits",
                value, width
            )));
        }
        let mut bits = vec![false; width - minimal.len()];
        bits.extend_from_slice(&minimal.bits);
        Ok(BitString { bits })
    }
}

impl FromStr for BitString {
    type Err = SdesError;

    /// Parse a string of `'0'`/`'1'` characters. Empty input and any other
    /// character are rejected.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(SdesError::InvalidBinaryInput(
                "empty bit-string".to_string(),
            ));
        }
        let mut bits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => {
                    return Err(SdesError::InvalidBinaryInput(format!(
                        "unexpected character '{}' in bit-string",
                        other
                    )))
                }
            }
        }
        Ok(BitString { bits })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitString {
            bits: iter.into_iter().collect(),
        }
    }
}
