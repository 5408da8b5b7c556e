// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Entropy source

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha512};

use super::Error;
use crate::types::{Entropy, WordCount};
use crate::util::time;

const DOMAIN: &[u8] = b"wordseed-entropy";

/// Generate entropy for a mnemonic of `word_count` words.
///
/// OS random and a ChaCha20 CSPRNG (seeded from the OS) are mixed with the
/// current timestamp and the optional `custom` entropy (ex. dice rolls)
/// through SHA-512.
pub fn generate(word_count: WordCount, custom: Option<&[u8]>) -> Entropy {
    let mut h = Sha512::new();
    h.update(DOMAIN);

    // TRNG & CSPRNG
    let mut os_random: [u8; 32] = [0u8; 32];
    OsRng.fill_bytes(&mut os_random);
    h.update(os_random);

    let mut chacha = ChaCha20Rng::from_entropy();
    let mut chacha_random: [u8; 32] = [0u8; 32];
    chacha.fill_bytes(&mut chacha_random);
    h.update(chacha_random);

    h.update(time::timestamp_nanos().to_be_bytes());

    // Add custom entropy
    if let Some(custom) = custom {
        if custom.is_empty() {
            log::warn!("custom entropy is empty, ignoring it");
        }
        h.update(custom);
    }

    let mut digest = h.finalize();
    let len: usize = word_count.entropy_len();
    let bytes: Vec<u8> = digest[..len].to_vec();

    os_random.iter_mut().for_each(|b| *b = 0);
    chacha_random.iter_mut().for_each(|b| *b = 0);
    digest.iter_mut().for_each(|b| *b = 0);

    log::debug!("Generated {} bits of entropy", len * 8);

    Entropy::from_parts(bytes, word_count)
}

/// Generate `len` bytes of entropy.
///
/// `len` must be one of 16, 20, 24, 28 or 32: it's checked before touching
/// the RNG.
pub fn generate_bytes(len: usize, custom: Option<&[u8]>) -> Result<Entropy, Error> {
    let word_count: WordCount = WordCount::from_entropy_len(len)?;
    Ok(generate(word_count, custom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    #[test]
    fn test_generate_lengths() {
        for word_count in WordCount::ALL {
            let entropy = generate(word_count, None);
            assert_eq!(entropy.len(), word_count.entropy_len());
            assert_eq!(entropy.word_count(), word_count);
        }
    }

    #[test]
    fn test_generate_is_random() {
        let a = generate(WordCount::W24, None);
        let b = generate(WordCount::W24, None);
        assert_ne!(a, b);

        // Custom entropy never makes the output deterministic
        let rolls: &[u8] = &[1, 6, 3, 2, 5, 4];
        let a = generate(WordCount::W12, Some(rolls));
        let b = generate(WordCount::W12, Some(rolls));
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_bytes() {
        for len in [16, 20, 24, 28, 32] {
            assert_eq!(generate_bytes(len, None).unwrap().len(), len);
        }
        for len in [0, 8, 17, 30, 64] {
            assert!(matches!(
                generate_bytes(len, None),
                Err(Error::Types(types::Error::InvalidEntropyLength(l))) if l == len
            ));
        }
    }
}
