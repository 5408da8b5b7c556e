// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;

use serde::{Serialize, Serializer};

use super::{Seed, WordCount, Wordlist};
use crate::bips::bip39::{self, Error};

/// BIP39 mnemonic sentence
#[derive(Clone, Eq, PartialEq)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

impl Serialize for Mnemonic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Mnemonic {
    pub(crate) fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Parse and validate a phrase against `wordlist` (words and checksum)
    pub fn parse_in<S>(wordlist: &Wordlist, phrase: S) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let entropy = bip39::recover(phrase.as_ref(), wordlist)?;
        bip39::from_entropy(&entropy, wordlist)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    pub fn word_count(&self) -> Result<WordCount, Error> {
        Ok(WordCount::new(self.words.len())?)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Derive the 64 byte BIP39 seed
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        bip39::derive_seed(&self.to_string(), passphrase)
    }
}
