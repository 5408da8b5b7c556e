// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;

use super::{Error, WordCount};

/// BIP39 entropy: 16, 20, 24, 28 or 32 bytes
#[derive(Clone, Eq, PartialEq)]
pub struct Entropy {
    bytes: Vec<u8>,
    word_count: WordCount,
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

impl Drop for Entropy {
    fn drop(&mut self) {
        self.bytes.iter_mut().for_each(|b| *b = 0);
    }
}

impl Entropy {
    pub fn new<T>(bytes: T) -> Result<Self, Error>
    where
        T: Into<Vec<u8>>,
    {
        let bytes: Vec<u8> = bytes.into();
        let word_count: WordCount = WordCount::from_entropy_len(bytes.len())?;
        Ok(Self { bytes, word_count })
    }

    pub(crate) fn from_parts(bytes: Vec<u8>, word_count: WordCount) -> Self {
        debug_assert_eq!(bytes.len(), word_count.entropy_len());
        Self { bytes, word_count }
    }

    pub fn from_hex<S>(hex: S) -> Result<Self, crate::bips::bip39::Error>
    where
        S: AsRef<str>,
    {
        let bytes: Vec<u8> = hex::decode(hex.as_ref().trim())?;
        Ok(Self::new(bytes)?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bits(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Entropy followed by a single checksum byte.
///
/// Only the high `checksum_bits` bits of the last byte are significant,
/// the remaining low bits are always zero.
#[derive(Clone, Eq, PartialEq)]
pub struct ChecksummedMaterial {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl fmt::Debug for ChecksummedMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

impl Drop for ChecksummedMaterial {
    fn drop(&mut self) {
        self.bytes.iter_mut().for_each(|b| *b = 0);
    }
}

impl ChecksummedMaterial {
    pub(crate) fn from_parts(bytes: Vec<u8>, bit_len: usize) -> Self {
        Self { bytes, bit_len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of significant bits
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn checksum_bits(&self) -> usize {
        // bit_len = entropy bits * 33 / 32
        self.bit_len / 33
    }

    /// Checksum value, right aligned
    pub fn checksum(&self) -> u8 {
        let cs: usize = self.checksum_bits();
        match self.bytes.last() {
            Some(&byte) if cs > 0 => byte >> (8 - cs),
            _ => 0,
        }
    }
}
