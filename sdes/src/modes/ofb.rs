//! OFB (Output Feedback) mode

use crate::bits::BitString;
use crate::cipher::BlockCipher;
use crate::error::{Result, SdesError};

use super::ModeEngine;

impl ModeEngine {
    /// OFB encryption: the cipher repeatedly encrypts its own output,
    /// starting from the IV, and the resulting keystream is XORed onto the
    /// stream. The cipher is only ever run forward, so this works as a
    /// stream cipher.
    ///
    /// The stream may end in a partial block; the leading keystream bits
    /// cover it. Only the IV width is checked.
    pub fn ofb_encrypt<C: BlockCipher>(
        cipher: &C,
        stream: &BitString,
        iv: &BitString,
    ) -> Result<BitString> {
        if cipher.block_size() == 0 {
            return Err(SdesError::InvalidParameterValue(
                "block size must be positive".to_string(),
            ));
        }
        Self::check_iv(iv, cipher.block_size())?;

        let mut ciphertext = BitString::new();
        let mut keystream_block = iv.clone();
        for block in stream.chunks(cipher.block_size()) {
            keystream_block = cipher.encrypt_block(&keystream_block)?;
            ciphertext.extend(&block.xor(&keystream_block.prefix(block.len())?)?);
        }
        Ok(ciphertext)
    }

    /// OFB decryption. The keystream only depends on the IV, so decryption
    /// is the same XOR again.
    pub fn ofb_decrypt<C: BlockCipher>(
        cipher: &C,
        stream: &BitString,
        iv: &BitString,
    ) -> Result<BitString> {
        Self::ofb_encrypt(cipher, stream, iv)
    }
}
