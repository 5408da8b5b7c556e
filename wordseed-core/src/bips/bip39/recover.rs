// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Mnemonic recovery
//!
//! Words -> 11 bit indices -> entropy || checksum, then the checksum is
//! recomputed from the entropy and compared.

use super::seed::normalize;
use super::{append_checksum, join_indices, Error};
use crate::types::{Entropy, WordCount, WordIndex, Wordlist};

/// Recover the entropy encoded in `phrase`, validating its checksum
pub fn recover(phrase: &str, wordlist: &Wordlist) -> Result<Entropy, Error> {
    let normalized: String = normalize(phrase);
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let word_count: WordCount = WordCount::new(words.len())?;

    let indices: Vec<WordIndex> = words
        .iter()
        .enumerate()
        .map(|(position, word)| {
            wordlist.position(word).ok_or_else(|| Error::UnknownWord {
                word: word.to_string(),
                position,
            })
        })
        .collect::<Result<_, _>>()?;

    let (bytes, bits) = join_indices(&indices);
    debug_assert_eq!(bits, word_count.total_bits());

    let entropy_len: usize = word_count.entropy_len();
    let entropy: Entropy = Entropy::new(&bytes[..entropy_len])?;
    let expected = append_checksum(&entropy);

    if expected.as_bytes() != bytes.as_slice() {
        log::debug!("Checksum mismatch for {} words mnemonic", word_count);
        return Err(Error::ChecksumMismatch);
    }

    Ok(entropy)
}

/// Check that `phrase` is a valid mnemonic for `wordlist`
pub fn validate(phrase: &str, wordlist: &Wordlist) -> Result<(), Error> {
    recover(phrase, wordlist).map(|_| ())
}
