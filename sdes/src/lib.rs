//! A small-block Feistel cipher in the style of simplified DES, built for
//! studying block cipher internals rather than for protecting data.
//!
//! The cipher works on 12-bit blocks by default (configurable) with a 9-bit
//! key derived from a Blum-Blum-Shub generator and round subkeys taken from
//! a rotating key schedule. Text is carried over a 6-bit alphabet of
//! digits, letters, space and newline; anything outside the alphabet passes
//! through untouched. ECB, CBC and OFB chaining modes are available, with
//! the CBC/OFB initialization vector derived from the configuration through
//! an LFSR.
//!
//! Every parameter that shapes the cipher lives in [`SdesConfig`]: round
//! count, block size, the Blum primes, the two S-boxes and the pad
//! character. The [`Sdes`] engine ties a configuration to a prime table and
//! exposes the text pipelines.
//!
//! # Example
//!
//! ```
//! use sdes::{Mode, Sdes};
//!
//! let sdes = Sdes::new()?;
//!
//! let ciphertext = sdes.encrypt("hello world", Mode::Cbc)?;
//! let plaintext = sdes.decrypt(&ciphertext, Mode::Cbc)?;
//!
//! assert_eq!(plaintext, "hello world");
//! # Ok::<(), sdes::SdesError>(())
//! ```
//!
//! The lower layers are public as well: [`BitString`] for bit-level work,
//! [`prng`] for the LFSR and Blum-Blum-Shub generators, [`SBox`] for
//! substitution tables and [`ModeEngine`] for driving any [`BlockCipher`]
//! through a chaining mode.

pub mod bits;
pub mod cipher;
pub mod codec;
pub mod config;
pub mod error;
pub mod feistel;
pub mod modes;
pub mod modmath;
pub mod prng;
pub mod sbox;
pub mod sdes;

pub use bits::BitString;
pub use cipher::BlockCipher;
pub use config::SdesConfig;
pub use error::{Result, SdesError};
pub use feistel::FeistelCipher;
pub use modes::{Mode, ModeEngine};
pub use prng::PrimeTable;
pub use sbox::SBox;
pub use sdes::Sdes;

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_public_types_are_reachable() {
        let config = SdesConfig::new().unwrap();
        assert_eq!(config.block_size(), 12);
        assert_eq!(config.key_length(), 9);

        let engine = Sdes::with_config(config).unwrap();
        assert_eq!(engine.key().unwrap().len(), 9);
    }
}
