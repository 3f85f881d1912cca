//! Pseudo-random bit generators
//!
//! Two deterministic generators feed the cipher: a linear feedback shift
//! register ([`lfsr`]) used for IV derivation, and Blum-Blum-Shub ([`bbs`])
//! used for key derivation. BBS seeds itself from a [`PrimeTable`].

use std::fs;
use std::path::Path;

use num_bigint::BigUint;

use crate::bits::BitString;
use crate::error::{Result, SdesError};
use crate::modmath;

/// Prime table shipped with the crate: the first 21000 primes, one per line.
const BUNDLED_PRIMES: &str = include_str!("../resources/primes.txt");

/// Linear feedback shift register.
///
/// `feedback` and `seed` must have equal, non-zero length; the `1` positions
/// of `feedback` name the register taps. The first output bit is the last bit
/// of the seed. Each step XORs the tapped state bits, shifts the state
/// circularly right by one, overwrites the new first bit with the XOR result
/// and emits the new last bit.
pub fn lfsr(feedback: &BitString, seed: &BitString, bits: usize) -> Result<BitString> {
    if feedback.len() != seed.len() {
        return Err(SdesError::InvalidBinaryInput(format!(
            "feedback and seed lengths differ ({} vs {})",
            feedback.len(),
            seed.len()
        )));
    }
    if seed.is_empty() {
        return Err(SdesError::InvalidBinaryInput(
            "feedback and seed must not be empty".to_string(),
        ));
    }
    if bits == 0 {
        return Err(SdesError::InvalidBinaryInput(
            "at least one output bit must be requested".to_string(),
        ));
    }

    let mut output = BitString::new();
    output.push(seed.bit(seed.len() - 1));

    let mut state = seed.clone();
    for _ in 1..bits {
        let mut tap_xor = false;
        for i in 0..feedback.len() {
            if feedback.bit(i) {
                tap_xor ^= state.bit(i);
            }
        }
        state = state.rotate_right(1);
        state.set(0, tap_xor);
        output.push(state.bit(state.len() - 1));
    }

    Ok(output)
}

/// Blum-Blum-Shub generator.
///
/// Both `p` and `q` must be congruent to 3 mod 4. The seed is the `n`-th
/// table entry (1-indexed) for `n = p*q`; entries sharing a factor with `n`
/// are skipped. Starting from `x = seed² mod n`, each output bit is the
/// parity of the next square.
pub fn bbs(p: u64, q: u64, bits: usize, primes: &PrimeTable) -> Result<BitString> {
    if !modmath::is_congruent(p, 3, 4) {
        return Err(SdesError::InvalidKeyMaterial(format!(
            "p = {} is not congruent to 3 mod 4",
            p
        )));
    }
    if !modmath::is_congruent(q, 3, 4) {
        return Err(SdesError::InvalidKeyMaterial(format!(
            "q = {} is not congruent to 3 mod 4",
            q
        )));
    }
    if bits == 0 {
        return Err(SdesError::InvalidKeyMaterial(
            "bit count must be positive".to_string(),
        ));
    }

    let n = p.checked_mul(q).ok_or_else(|| {
        SdesError::InvalidKeyMaterial(format!("p*q overflows for p = {}, q = {}", p, q))
    })?;
    let modulus = BigUint::from(n);

    let mut index = usize::try_from(n).map_err(|_| {
        SdesError::InvalidKeyMaterial(format!(
            "prime table with {} entries cannot seed n = {}",
            primes.len(),
            n
        ))
    })?;
    let seed = loop {
        match primes.get(index) {
            Some(entry) if modmath::is_coprime(&BigUint::from(entry), &modulus) => break entry,
            Some(_) => index += 1,
            None => {
                return Err(SdesError::InvalidKeyMaterial(format!(
                    "prime table with {} entries cannot seed n = {}",
                    primes.len(),
                    n
                )))
            }
        }
    };

    let mut x = BigUint::from(seed);
    x = &x * &x % &modulus;

    let mut output = BitString::new();
    for _ in 0..bits {
        x = &x * &x % &modulus;
        output.push(x.bit(0));
    }
    Ok(output)
}

/// A 1-indexed table of precomputed primes, one decimal value per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    entries: Vec<u64>,
}

impl PrimeTable {
    /// Parse a table from text. Blank lines are skipped; anything that is not
    /// a decimal integer is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value = line.parse::<u64>().map_err(|_| {
                SdesError::InvalidKeyMaterial(format!(
                    "prime table line {}: '{}' is not a decimal integer",
                    line_no + 1,
                    line
                ))
            })?;
            entries.push(value);
        }
        if entries.is_empty() {
            return Err(SdesError::InvalidKeyMaterial(
                "prime table contains no entries".to_string(),
            ));
        }
        Ok(Self { entries })
    }

    /// Read a table from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// The table embedded in the crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_PRIMES)
    }

    /// The `index`-th entry, 1-indexed; `None` if the table is too short.
    pub fn get(&self, index: usize) -> Option<u64> {
        if index == 0 {
            return None;
        }
        self.entries.get(index - 1).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every entry with a trial-division primality test. Intended for
    /// user-supplied tables; the bundled table is already prime-only.
    pub fn validate(&self) -> Result<()> {
        for (i, &entry) in self.entries.iter().enumerate() {
            if !modmath::is_prime(entry) {
                return Err(SdesError::InvalidKeyMaterial(format!(
                    "prime table entry {} ({}) is not prime",
                    i + 1,
                    entry
                )));
            }
        }
        Ok(())
    }
}
