//! CBC (Cipher Block Chaining) mode

use crate::bits::BitString;
use crate::cipher::BlockCipher;
use crate::error::Result;

use super::ModeEngine;

impl ModeEngine {
    /// CBC encryption: each plaintext block is XORed with the previous
    /// ciphertext block (the IV for the first) before it enters the cipher.
    ///
    /// The stream length must be a multiple of the block size and the IV
    /// must be exactly one block wide.
    pub fn cbc_encrypt<C: BlockCipher>(
        cipher: &C,
        stream: &BitString,
        iv: &BitString,
    ) -> Result<BitString> {
        Self::check_alignment(stream, cipher.block_size())?;
        Self::check_iv(iv, cipher.block_size())?;

        let mut ciphertext = BitString::new();
        let mut previous_block = iv.clone();
        for block in stream.chunks(cipher.block_size()) {
            let chained = block.xor(&previous_block)?;
            let encrypted = cipher.encrypt_block(&chained)?;
            ciphertext.extend(&encrypted);
            previous_block = encrypted;
        }
        Ok(ciphertext)
    }

    /// CBC decryption: each block is deciphered and then XORed with the raw
    /// previous ciphertext block (the IV for the first).
    pub fn cbc_decrypt<C: BlockCipher>(
        cipher: &C,
        stream: &BitString,
        iv: &BitString,
    ) -> Result<BitString> {
        Self::check_alignment(stream, cipher.block_size())?;
        Self::check_iv(iv, cipher.block_size())?;

        let mut plaintext = BitString::new();
        let mut previous_block = iv.clone();
        for block in stream.chunks(cipher.block_size()) {
            let decrypted = cipher.decrypt_block(&block)?;
            plaintext.extend(&decrypted.xor(&previous_block)?);
            previous_block = block;
        }
        Ok(plaintext)
    }
}
