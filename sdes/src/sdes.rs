//! The assembled cipher: configuration, key material and the text pipelines

use crate::bits::BitString;
use crate::codec;
use crate::config::SdesConfig;
use crate::error::Result;
use crate::feistel::{self, FeistelCipher};
use crate::modes::{self, Mode, ModeEngine};
use crate::prng::PrimeTable;

/// The complete cipher engine. It owns a configuration and a prime table
/// and runs whole texts through encode, chain and decode.
///
/// Encryption strips characters outside the B6 alphabet (remembering their
/// positions), pads ECB/CBC input up to whole blocks, encodes the rest six
/// bits per character, drives the Feistel cipher in the requested chaining
/// mode and decodes the result back to text with the stripped characters
/// spliced in unchanged. Decryption runs the same pipeline backwards and
/// drops the trailing pad characters the encryption added.
pub struct Sdes {
    config: SdesConfig,
    primes: PrimeTable,
}

impl Sdes {
    /// Create an engine with the default configuration and the bundled
    /// prime table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config: SdesConfig::new()?,
            primes: PrimeTable::bundled()?,
        })
    }

    /// Create an engine around an existing configuration, keeping the
    /// bundled prime table.
    pub fn with_config(config: SdesConfig) -> Result<Self> {
        Ok(Self {
            config,
            primes: PrimeTable::bundled()?,
        })
    }

    /// Create an engine with an explicit configuration and prime table.
    pub fn with_resources(config: SdesConfig, primes: PrimeTable) -> Self {
        Self { config, primes }
    }

    pub fn config(&self) -> &SdesConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SdesConfig {
        &mut self.config
    }

    pub fn primes(&self) -> &PrimeTable {
        &self.primes
    }

    /// The Blum-Blum-Shub key the current configuration derives.
    pub fn key(&self) -> Result<BitString> {
        feistel::derive_key(&self.config, &self.primes)
    }

    /// The round subkey for round `i` under the current configuration.
    pub fn subkey(&self, i: usize) -> Result<BitString> {
        let key = self.key()?;
        feistel::derive_subkey(&key, i)
    }

    /// The IV the current configuration derives for CBC and OFB chaining.
    pub fn initial_vector(&self) -> Result<BitString> {
        modes::initial_vector(&self.config)
    }

    /// Encrypt `plaintext` under the given chaining mode.
    ///
    /// Characters outside the B6 alphabet pass through unencrypted at their
    /// original positions. ECB and CBC pad the alphabet characters with the
    /// configured pad character until they fill whole blocks; OFB encrypts
    /// them as they are.
    pub fn encrypt(&self, plaintext: &str, mode: Mode) -> Result<String> {
        let (mut symbols, foreign) = codec::strip_foreign(plaintext);
        if mode != Mode::Ofb {
            self.pad_symbols(&mut symbols);
        }
        let stream = codec::encode_text(&symbols)?;
        let cipher = FeistelCipher::new(&self.config, &self.primes)?;

        let processed = match mode {
            Mode::Ecb => ModeEngine::ecb_encrypt(&cipher, &stream)?,
            Mode::Cbc => {
                let iv = modes::initial_vector(&self.config)?;
                ModeEngine::cbc_encrypt(&cipher, &stream, &iv)?
            }
            Mode::Ofb => {
                let iv = modes::initial_vector(&self.config)?;
                ModeEngine::ofb_encrypt(&cipher, &stream, &iv)?
            }
        };

        let ciphertext = codec::decode_text(&processed)?;
        Ok(codec::restore_foreign(&ciphertext, &foreign))
    }

    /// Decrypt `ciphertext` under the given chaining mode.
    ///
    /// ECB and CBC require ciphertext whose alphabet characters fill whole
    /// blocks and strip the trailing pad characters from the recovered
    /// plaintext. OFB accepts any length and strips nothing.
    pub fn decrypt(&self, ciphertext: &str, mode: Mode) -> Result<String> {
        let (symbols, foreign) = codec::strip_foreign(ciphertext);
        let stream = codec::encode_text(&symbols)?;
        let cipher = FeistelCipher::new(&self.config, &self.primes)?;

        let processed = match mode {
            Mode::Ecb => ModeEngine::ecb_decrypt(&cipher, &stream)?,
            Mode::Cbc => {
                let iv = modes::initial_vector(&self.config)?;
                ModeEngine::cbc_decrypt(&cipher, &stream, &iv)?
            }
            Mode::Ofb => {
                let iv = modes::initial_vector(&self.config)?;
                ModeEngine::ofb_decrypt(&cipher, &stream, &iv)?
            }
        };

        let plaintext = codec::decode_text(&processed)?;
        let restored = codec::restore_foreign(&plaintext, &foreign);
        if mode == Mode::Ofb {
            Ok(restored)
        } else {
            Ok(restored.trim_end_matches(self.config.pad()).to_string())
        }
    }

    /// Append pad characters until the symbols form whole character pairs
    /// and whole blocks. Terminates within one block's worth of characters
    /// because the block size is even.
    fn pad_symbols(&self, symbols: &mut String) {
        let block_size = self.config.block_size();
        let pad = self.config.pad();
        let mut count = symbols.chars().count();
        while count % 2 != 0 || (count * codec::SYMBOL_BITS) % block_size != 0 {
            symbols.push(pad);
            count += 1;
        }
    }
}
