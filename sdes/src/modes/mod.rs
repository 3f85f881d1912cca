//! Chaining modes driving the block cipher over multi-block streams

pub mod cbc;
pub mod ecb;
pub mod ofb;

use std::fmt;
use std::str::FromStr;

use crate::bits::BitString;
use crate::config::SdesConfig;
use crate::error::{Result, SdesError};
use crate::prng;

/// Namespace struct for the chaining-mode engines
pub struct ModeEngine;

/// The supported chaining modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
    Ofb,
}

impl FromStr for Mode {
    type Err = SdesError;

    /// Parse a mode name, case-insensitively. Unknown names fail with
    /// [`SdesError::UnsupportedMode`].
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(Mode::Ecb),
            "CBC" => Ok(Mode::Cbc),
            "OFB" => Ok(Mode::Ofb),
            _ => Err(SdesError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Ofb => "OFB",
        };
        f.write_str(name)
    }
}

/// Derive the IV that seeds CBC and OFB chaining: an LFSR run whose seed is
/// the binary representation of `key_length` and whose taps alternate
/// `0101…` over `key_length / 2` positions.
///
/// The IV is a pure function of the configuration, so the same configuration
/// always yields the same starting chain state. Callers needing per-message
/// uniqueness must vary the configuration. When the seed width does not
/// match the tap width (possible for large block sizes) the LFSR length
/// check fails and the error propagates.
pub fn initial_vector(config: &SdesConfig) -> Result<BitString> {
    let seed = BitString::from_decimal(config.key_length() as u64);
    let feedback: BitString = (0..config.key_length() / 2).map(|i| i % 2 == 1).collect();
    prng::lfsr(&feedback, &seed, config.block_size())
}

impl ModeEngine {
    fn check_alignment(stream: &BitString, block_size: usize) -> Result<()> {
        if block_size == 0 {
            return Err(SdesError::InvalidParameterValue(
                "block size must be positive".to_string(),
            ));
        }
        if stream.len() % block_size != 0 {
            return Err(SdesError::SizeMismatch(format!(
                "{}-bit stream does not divide into {}-bit blocks",
                stream.len(),
                block_size
            )));
        }
        Ok(())
    }

    fn check_iv(iv: &BitString, block_size: usize) -> Result<()> {
        if iv.len() != block_size {
            return Err(SdesError::SizeMismatch(format!(
                "IV has {} bits, the cipher expects {}",
                iv.len(),
                block_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::bits::BitString;
    use crate::cipher::BlockCipher;
    use crate::error::Result;

    /// Test-only cipher: encryption rotates the block left by one position,
    /// decryption rotates it back.
    pub struct RotateCipher {
        pub block_size: usize,
    }

    impl BlockCipher for RotateCipher {
        fn encrypt_block(&self, block: &BitString) -> Result<BitString> {
            Ok(block.rotate_left(1))
        }

        fn decrypt_block(&self, block: &BitString) -> Result<BitString> {
            Ok(block.rotate_right(1))
        }

        fn block_size(&self) -> usize {
            self.block_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("ECB".parse::<Mode>().unwrap(), Mode::Ecb);
        assert_eq!("cbc".parse::<Mode>().unwrap(), Mode::Cbc);
        assert_eq!("Ofb".parse::<Mode>().unwrap(), Mode::Ofb);
        assert!(matches!(
            "CTR".parse::<Mode>(),
            Err(SdesError::UnsupportedMode(_))
        ));
        assert_eq!(Mode::Cbc.to_string(), "CBC");
    }

    #[test]
    fn test_initial_vector_default_configuration() {
        let config = SdesConfig::new().unwrap();
        let iv = initial_vector(&config).unwrap();
        assert_eq!(iv, "100111100111".parse().unwrap());
    }

    #[test]
    fn test_initial_vector_is_deterministic() {
        let config = SdesConfig::new().unwrap();
        assert_eq!(
            initial_vector(&config).unwrap(),
            initial_vector(&config).unwrap()
        );
    }

    #[test]
    fn test_initial_vector_follows_block_size() {
        let mut config = SdesConfig::new().unwrap();
        config.set_block_size(8).unwrap();
        // key_length 7 seeds a 3-bit register ("111") with a 3-bit tap vector
        let iv = initial_vector(&config).unwrap();
        assert_eq!(iv.len(), 8);
    }
}
