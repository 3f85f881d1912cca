//! ECB (Electronic Code Book) mode

use crate::bits::BitString;
use crate::cipher::BlockCipher;
use crate::error::Result;

use super::ModeEngine;

impl ModeEngine {
    /// ECB encryption: every block runs through the cipher independently.
    ///
    /// The stream length must be a multiple of the cipher's block size.
    pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, stream: &BitString) -> Result<BitString> {
        Self::check_alignment(stream, cipher.block_size())?;

        let mut ciphertext = BitString::new();
        for block in stream.chunks(cipher.block_size()) {
            ciphertext.extend(&cipher.encrypt_block(&block)?);
        }
        Ok(ciphertext)
    }

    /// ECB decryption, the blockwise inverse of [`ModeEngine::ecb_encrypt`].
    pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, stream: &BitString) -> Result<BitString> {
        Self::check_alignment(stream, cipher.block_size())?;

        let mut plaintext = BitString::new();
        for block in stream.chunks(cipher.block_size()) {
            plaintext.extend(&cipher.decrypt_block(&block)?);
        }
        Ok(plaintext)
    }
}
