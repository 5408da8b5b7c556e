// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub mod entropy;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

pub use self::entropy::{ChecksummedMaterial, Entropy};
pub use self::mnemonic::Mnemonic;
pub use self::seed::Seed;
pub use self::wordlist::Wordlist;

/// Number of bits encoded by a single word
pub const WORD_BITS: usize = 11;
/// Largest valid word index (2^11 - 1)
pub const MAX_WORD_INDEX: u16 = 0x07FF;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid word index: {0}")]
    InvalidWordIndex(u16),
    #[error("Invalid word count: {0}")]
    InvalidWordCount(usize),
    #[error("Invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),
}

/// Mnemonic length.
///
/// Every variant fixes the entropy size (`words * 32 / 3` bits) and the
/// checksum size (`entropy bits / 32`).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum WordCount {
    W12 = 12,
    W15 = 15,
    W18 = 18,
    W21 = 21,
    W24 = 24,
}

impl Default for WordCount {
    fn default() -> Self {
        Self::W24
    }
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [Self::W12, Self::W15, Self::W18, Self::W21, Self::W24];

    pub fn new(words: usize) -> Result<Self, Error> {
        match words {
            12 => Ok(Self::W12),
            15 => Ok(Self::W15),
            18 => Ok(Self::W18),
            21 => Ok(Self::W21),
            24 => Ok(Self::W24),
            _ => Err(Error::InvalidWordCount(words)),
        }
    }

    /// Get [`WordCount`] from entropy length in bytes
    pub fn from_entropy_len(len: usize) -> Result<Self, Error> {
        match len {
            16 => Ok(Self::W12),
            20 => Ok(Self::W15),
            24 => Ok(Self::W18),
            28 => Ok(Self::W21),
            32 => Ok(Self::W24),
            _ => Err(Error::InvalidEntropyLength(len)),
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    pub fn as_usize(&self) -> usize {
        *self as usize
    }

    /// Entropy length in bytes
    pub fn entropy_len(&self) -> usize {
        self.as_usize() * 4 / 3
    }

    pub fn entropy_bits(&self) -> usize {
        self.entropy_len() * 8
    }

    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }

    /// Entropy plus checksum bits. Always a multiple of [`WORD_BITS`].
    pub fn total_bits(&self) -> usize {
        self.entropy_bits() + self.checksum_bits()
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl FromStr for WordCount {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: usize = s.trim().parse()?;
        Self::new(words)
    }
}

/// Position of a word inside a [`Wordlist`], in `[0, 2047]`
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WordIndex(u16);

impl WordIndex {
    pub fn new(index: u16) -> Result<Self, Error> {
        if index <= MAX_WORD_INDEX {
            Ok(Self(index))
        } else {
            Err(Error::InvalidWordIndex(index))
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Everything worth showing to the user after a derivation
#[derive(Serialize)]
pub struct Secrets {
    pub entropy: String,
    pub mnemonic: Mnemonic,
    pub passphrase: Option<String>,
    pub seed_hex: String,
}

impl Secrets {
    pub fn new(entropy: &Entropy, mnemonic: Mnemonic, passphrase: Option<String>) -> Self {
        let seed: Seed = mnemonic.to_seed(passphrase.as_deref());
        Self {
            entropy: entropy.to_hex(),
            mnemonic,
            passphrase,
            seed_hex: seed.to_hex(),
        }
    }

    pub fn entropy_bits(&self) -> usize {
        self.entropy.len() / 2 * 8
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}
