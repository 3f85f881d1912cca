//! Feistel round engine and key schedule
//!
//! One round maps `(L, R)` to `(R, L XOR F(R, k_i))`. F expands the right
//! half by duplicating its middle bit pair, XORs the subkey in, and runs the
//! two halves of the result through the configured S-boxes. Encryption
//! applies the rounds with subkeys `0..rounds` and swaps the halves once at
//! the end; decryption applies the same rounds with the subkey order
//! reversed and its own terminal swap.

use crate::bits::BitString;
use crate::cipher::BlockCipher;
use crate::config::SdesConfig;
use crate::error::{Result, SdesError};
use crate::prng::{self, PrimeTable};

/// Derive the master key for `config` via BBS: `key_length` bits from
/// `(p, q)` and the prime table.
pub fn derive_key(config: &SdesConfig, primes: &PrimeTable) -> Result<BitString> {
    prng::bbs(config.p(), config.q(), config.key_length(), primes)
}

/// Subkey `i`: the key circularly left-shifted by `i` positions, keeping all
/// but the last bit.
pub fn derive_subkey(key: &BitString, i: usize) -> Result<BitString> {
    key.rotate_left(i).prefix(key.len() - 1)
}

/// Expand a half block by duplicating and re-ordering its middle bit pair,
/// growing it by exactly 2 bits.
pub fn expand(half: &BitString) -> Result<BitString> {
    if half.len() < 2 {
        return Err(SdesError::SizeMismatch(format!(
            "cannot expand a {}-bit half block",
            half.len()
        )));
    }
    let middle = half.len() / 2 - 1;
    let mut expanded = BitString::new();
    for i in 0..middle {
        expanded.push(half.bit(i));
    }
    expanded.push(half.bit(middle + 1));
    expanded.push(half.bit(middle));
    expanded.push(half.bit(middle + 1));
    expanded.push(half.bit(middle));
    for i in middle + 2..half.len() {
        expanded.push(half.bit(i));
    }
    Ok(expanded)
}

/// The round function F: expand, XOR the subkey, substitute the two halves
/// through the S-boxes and concatenate.
pub fn round_function(
    config: &SdesConfig,
    half: &BitString,
    subkey: &BitString,
) -> Result<BitString> {
    let expanded = expand(half)?;
    if expanded.len() != subkey.len() {
        return Err(SdesError::SizeMismatch(format!(
            "expanded half block is {} bits but the subkey is {} bits",
            expanded.len(),
            subkey.len()
        )));
    }
    let mixed = expanded.xor(subkey)?;
    let (high, low) = mixed.split_at(mixed.len() / 2);
    let substituted_high = config.sbox1().substitute(&high)?;
    let substituted_low = config.sbox2().substitute(&low)?;
    Ok(substituted_high.concat(&substituted_low))
}

/// One Feistel round: `(L, R)` becomes `(R, L XOR F(R, subkey))`.
///
/// Not self-inverting on its own; inversion relies on reversed subkey order
/// plus the terminal swap.
pub fn round(config: &SdesConfig, block: &BitString, subkey: &BitString) -> Result<BitString> {
    if block.is_empty() || block.len() % 2 != 0 {
        return Err(SdesError::SizeMismatch(format!(
            "a Feistel round needs an even-length block, got {} bits",
            block.len()
        )));
    }
    let (left, right) = block.split_at(block.len() / 2);
    let mixed = left.xor(&round_function(config, &right, subkey)?)?;
    Ok(right.concat(&mixed))
}

fn swap_halves(block: &BitString) -> BitString {
    let (left, right) = block.split_at(block.len() / 2);
    right.concat(&left)
}

/// A fully keyed Feistel cipher: a configuration plus its derived subkeys.
pub struct FeistelCipher<'a> {
    config: &'a SdesConfig,
    subkeys: Vec<BitString>,
}

impl<'a> FeistelCipher<'a> {
    /// Run the key schedule for `config`: derive the master key and one
    /// subkey per round.
    pub fn new(config: &'a SdesConfig, primes: &PrimeTable) -> Result<Self> {
        let key = derive_key(config, primes)?;
        let subkeys = (0..config.rounds())
            .map(|i| derive_subkey(&key, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { config, subkeys })
    }

    fn check_block(&self, block: &BitString) -> Result<()> {
        if block.len() != self.config.block_size() {
            return Err(SdesError::SizeMismatch(format!(
                "block has {} bits, the cipher expects {}",
                block.len(),
                self.config.block_size()
            )));
        }
        Ok(())
    }
}

impl BlockCipher for FeistelCipher<'_> {
    fn encrypt_block(&self, block: &BitString) -> Result<BitString> {
        self.check_block(block)?;
        let mut state = block.clone();
        for subkey in &self.subkeys {
            state = round(self.config, &state, subkey)?;
        }
        Ok(swap_halves(&state))
    }

    fn decrypt_block(&self, block: &BitString) -> Result<BitString> {
        self.check_block(block)?;
        let mut state = block.clone();
        for subkey in self.subkeys.iter().rev() {
            state = round(self.config, &state, subkey)?;
        }
        Ok(swap_halves(&state))
    }

    fn block_size(&self) -> usize {
        self.config.block_size()
    }
}
