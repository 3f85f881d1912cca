//! Engine configuration
//!
//! All parameters are reachable only through validating setters; a rejected
//! value leaves the configuration untouched. The only cross-field invariant
//! the setters maintain is `key_length == block_size/2 + 3`. S-box width is
//! not tied to the block size here, so boxes and block size can be changed
//! one at a time; a pair that does not line up surfaces as a size mismatch
//! once a block runs through the round function.

use crate::codec;
use crate::error::{Result, SdesError};
use crate::modmath;
use crate::sbox::SBox;

pub const DEFAULT_ROUNDS: usize = 2;
pub const DEFAULT_BLOCK_SIZE: usize = 12;
pub const DEFAULT_P: u64 = 103;
pub const DEFAULT_Q: u64 = 199;
pub const DEFAULT_PAD: char = 'Q';

/// The only supported text encoding.
pub const ENCODING: &str = "B6";

const BUNDLED_SBOX1: &str = include_str!("../resources/sbox1.txt");
const BUNDLED_SBOX2: &str = include_str!("../resources/sbox2.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdesConfig {
    rounds: usize,
    block_size: usize,
    key_length: usize,
    p: u64,
    q: u64,
    sbox1: SBox,
    sbox2: SBox,
    pad: char,
}

impl SdesConfig {
    /// The default configuration: 2 rounds, 12-bit blocks, p = 103, q = 199,
    /// pad 'Q' and the bundled S-box tables.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rounds: DEFAULT_ROUNDS,
            block_size: DEFAULT_BLOCK_SIZE,
            key_length: DEFAULT_BLOCK_SIZE / 2 + 3,
            p: DEFAULT_P,
            q: DEFAULT_Q,
            sbox1: SBox::parse(BUNDLED_SBOX1)?,
            sbox2: SBox::parse(BUNDLED_SBOX2)?,
            pad: DEFAULT_PAD,
        })
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Derived from the block size; there is no setter for it.
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    pub fn sbox1(&self) -> &SBox {
        &self.sbox1
    }

    pub fn sbox2(&self) -> &SBox {
        &self.sbox2
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    pub fn encoding(&self) -> &'static str {
        ENCODING
    }

    /// Set the number of Feistel rounds (must be greater than 1).
    pub fn set_rounds(&mut self, rounds: usize) -> Result<()> {
        if rounds <= 1 {
            return Err(SdesError::InvalidParameterValue(format!(
                "rounds must be greater than 1, got {}",
                rounds
            )));
        }
        self.rounds = rounds;
        Ok(())
    }

    /// Set the block size (even, at least 4) and re-derive `key_length` so
    /// that subkeys stay as wide as an expanded half block. The installed
    /// S-boxes are left as they are.
    pub fn set_block_size(&mut self, block_size: usize) -> Result<()> {
        if block_size < 4 || block_size % 2 != 0 {
            return Err(SdesError::InvalidParameterValue(format!(
                "block size must be even and at least 4, got {}",
                block_size
            )));
        }
        self.block_size = block_size;
        self.key_length = block_size / 2 + 3;
        Ok(())
    }

    /// Set the first BBS prime (must be congruent to 3 mod 4).
    pub fn set_p(&mut self, p: u64) -> Result<()> {
        if !modmath::is_congruent(p, 3, 4) {
            return Err(SdesError::InvalidParameterValue(format!(
                "p must be congruent to 3 mod 4, got {}",
                p
            )));
        }
        self.p = p;
        Ok(())
    }

    /// Set the second BBS prime (must be congruent to 3 mod 4).
    pub fn set_q(&mut self, q: u64) -> Result<()> {
        if !modmath::is_congruent(q, 3, 4) {
            return Err(SdesError::InvalidParameterValue(format!(
                "q must be congruent to 3 mod 4, got {}",
                q
            )));
        }
        self.q = q;
        Ok(())
    }

    /// Replace the first S-box (must hold a loaded table). The width is not
    /// checked against the block size until a block is processed.
    pub fn set_sbox1(&mut self, sbox: SBox) -> Result<()> {
        if sbox.is_empty() {
            return Err(SdesError::InvalidParameterValue(
                "S-box 1 must not be empty".to_string(),
            ));
        }
        self.sbox1 = sbox;
        Ok(())
    }

    /// Replace the second S-box (must hold a loaded table). The width is not
    /// checked against the block size until a block is processed.
    pub fn set_sbox2(&mut self, sbox: SBox) -> Result<()> {
        if sbox.is_empty() {
            return Err(SdesError::InvalidParameterValue(
                "S-box 2 must not be empty".to_string(),
            ));
        }
        self.sbox2 = sbox;
        Ok(())
    }

    /// Set the padding character (must belong to the B6 alphabet).
    pub fn set_pad(&mut self, pad: char) -> Result<()> {
        if !codec::in_alphabet(pad) {
            return Err(SdesError::InvalidParameterValue(format!(
                "pad character {:?} is not in the B6 alphabet",
                pad
            )));
        }
        self.pad = pad;
        Ok(())
    }
}
