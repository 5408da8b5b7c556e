// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! BIP39: Mnemonic code for generating deterministic keys
//!
//! <https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki>
//!
//! ```text
//! entropy -> entropy || checksum -> 11 bit indices -> words -> PBKDF2 -> seed
//! ```

pub mod bits;
pub mod checksum;
pub mod entropy;
pub mod recover;
pub mod seed;
pub mod words;

pub use self::bits::{join_indices, split_into_indices};
pub use self::checksum::append_checksum;
pub use self::recover::{recover, validate};
pub use self::seed::derive_seed;
pub use self::words::{resolve, resolve_with, Observer, Silent};
use crate::types::{self, wordlist, Entropy, Mnemonic, WordCount, WordIndex, Wordlist};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Types(#[from] types::Error),
    #[error(transparent)]
    Wordlist(#[from] wordlist::Error),
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Bitstream of {bits} bits is not a multiple of 11")]
    IncompleteWindow { bits: usize },
    #[error("Bitstream overrun: bit {bit} requested from {len} bytes")]
    BitstreamOverrun { bit: usize, len: usize },
    #[error("Word index {index} out of range (wordlist has {len} words)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Wordlist must contain 2048 words, found {0}")]
    WordlistLength(usize),
    #[error("Unknown word `{word}` at position {position}")]
    UnknownWord { word: String, position: usize },
    #[error("Invalid checksum")]
    ChecksumMismatch,
}

/// Encode entropy as a mnemonic
pub fn from_entropy(entropy: &Entropy, wordlist: &Wordlist) -> Result<Mnemonic, Error> {
    from_entropy_with(entropy, wordlist, &mut Silent)
}

/// Encode entropy as a mnemonic, reporting every resolved word to `observer`
pub fn from_entropy_with(
    entropy: &Entropy,
    wordlist: &Wordlist,
    observer: &mut dyn Observer,
) -> Result<Mnemonic, Error> {
    let material = append_checksum(entropy);
    let indices: Vec<WordIndex> = split_into_indices(&material)?;
    log::debug!(
        "Encoding {} bits of entropy ({} checksum bits) into {} words",
        entropy.bits(),
        material.checksum_bits(),
        indices.len()
    );
    resolve_with(&indices, wordlist, observer)
}

/// Generate fresh entropy and encode it as a mnemonic
pub fn generate_mnemonic(
    word_count: WordCount,
    wordlist: &Wordlist,
    custom: Option<&[u8]>,
) -> Result<(Entropy, Mnemonic), Error> {
    let entropy: Entropy = entropy::generate(word_count, custom);
    let mnemonic: Mnemonic = from_entropy(&entropy, wordlist)?;
    Ok((entropy, mnemonic))
}
