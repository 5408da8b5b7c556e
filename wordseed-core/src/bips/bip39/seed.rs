// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;

use crate::types::seed::SEED_LEN;
use crate::types::Seed;

const SALT_PREFIX: &str = "mnemonic";
const PBKDF2_ROUNDS: u32 = 2048;

/// NFKD normalization, required by BIP39 before encoding to bytes
pub fn normalize(text: &str) -> String {
    text.nfkd().collect()
}

/// Derive the BIP39 seed: PBKDF2-HMAC-SHA512 over the mnemonic, salted with
/// `"mnemonic" + passphrase`.
///
/// A missing passphrase is the same as an empty one.
pub fn derive_seed(mnemonic: &str, passphrase: Option<&str>) -> Seed {
    let password: String = normalize(mnemonic);
    let mut salt: String = String::from(SALT_PREFIX);
    salt.push_str(&normalize(passphrase.unwrap_or_default()));

    let mut seed: [u8; SEED_LEN] = [0u8; SEED_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    );

    Seed::from(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_seed_no_passphrase() {
        assert_eq!(
            derive_seed(MNEMONIC, None).to_hex(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_seed_trezor() {
        assert_eq!(
            derive_seed(MNEMONIC, Some("TREZOR")).to_hex(),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_none_equals_empty() {
        assert_eq!(derive_seed(MNEMONIC, None), derive_seed(MNEMONIC, Some("")));
        assert_ne!(derive_seed(MNEMONIC, None), derive_seed(MNEMONIC, Some(" ")));
    }

    #[test]
    fn test_deterministic() {
        let a = derive_seed(MNEMONIC, Some("mypassphrase"));
        let b = derive_seed(MNEMONIC, Some("mypassphrase"));
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_seed_with_passphrase() {
        let mnemonic = "easy uncover favorite crystal bless differ energy seat ecology match carry group refuse together chat observe hidden glad brave month diesel sustain depth salt";
        assert_eq!(
            derive_seed(mnemonic, Some("mypassphrase")).to_hex(),
            "fb826595a0d679f5e9f8c799bd1decb8dc2ad3fb4e39a1ffaa4708a150e0e81ae55d3f340a188cd6188a2b76601aeae16945b36ae0ecfced9645029796c33713"
        );
    }

    #[test]
    fn test_passphrase_nfkd() {
        // "é" precomposed (U+00E9) and decomposed (U+0065 U+0301)
        assert_eq!(
            derive_seed(MNEMONIC, Some("caf\u{e9}")),
            derive_seed(MNEMONIC, Some("cafe\u{301}"))
        );
        assert_eq!(normalize("\u{e9}"), "e\u{301}");
    }
}
