//! Generic block cipher trait

use crate::bits::BitString;
use crate::error::Result;

/// Trait for a cipher that transforms one fixed-size block at a time.
///
/// The chaining modes are generic over this trait, so they can be driven by
/// the Feistel engine or by any other keyed block transform.
pub trait BlockCipher {
    /// Encrypts a single `block_size()`-bit block
    fn encrypt_block(&self, block: &BitString) -> Result<BitString>;

    /// Decrypts a single `block_size()`-bit block
    fn decrypt_block(&self, block: &BitString) -> Result<BitString>;

    /// Returns the block size of the cipher in bits
    fn block_size(&self) -> usize;
}
