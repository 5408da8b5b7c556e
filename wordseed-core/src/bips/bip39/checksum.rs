// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use sha2::{Digest, Sha256};

use crate::types::{ChecksummedMaterial, Entropy};

/// Append the BIP39 checksum to `entropy`.
///
/// The checksum is the first `entropy bits / 32` bits of `SHA256(entropy)`.
/// That's at most 8 bits, so only the first byte of the digest is used.
pub fn append_checksum(entropy: &Entropy) -> ChecksummedMaterial {
    let digest = Sha256::digest(entropy.as_bytes());
    let checksum_bits: usize = entropy.word_count().checksum_bits();
    let mask: u8 = 0xFF << (8 - checksum_bits);

    let mut bytes: Vec<u8> = Vec::with_capacity(entropy.len() + 1);
    bytes.extend_from_slice(entropy.as_bytes());
    bytes.push(digest[0] & mask);

    ChecksummedMaterial::from_parts(bytes, entropy.bits() + checksum_bits)
}
