// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! 11 bit packing
//!
//! The checksummed entropy is read as a bitstream, most significant bit
//! first, and cut into big-endian 11 bit windows: one window per word.

use super::Error;
use crate::types::{ChecksummedMaterial, WordIndex, WORD_BITS};

fn bit_at(bytes: &[u8], bit: usize) -> Result<u16, Error> {
    match bytes.get(bit / 8) {
        Some(byte) => Ok(((byte >> (7 - bit % 8)) & 1) as u16),
        None => Err(Error::BitstreamOverrun {
            bit,
            len: bytes.len(),
        }),
    }
}

/// Split checksummed entropy into word indices
pub fn split_into_indices(material: &ChecksummedMaterial) -> Result<Vec<WordIndex>, Error> {
    let bits: usize = material.bit_len();
    if bits % WORD_BITS != 0 {
        return Err(Error::IncompleteWindow { bits });
    }

    let bytes: &[u8] = material.as_bytes();
    let mut indices: Vec<WordIndex> = Vec::with_capacity(bits / WORD_BITS);

    for window in 0..bits / WORD_BITS {
        let mut value: u16 = 0;
        for offset in 0..WORD_BITS {
            value = (value << 1) | bit_at(bytes, window * WORD_BITS + offset)?;
        }
        indices.push(WordIndex::new(value)?);
    }

    Ok(indices)
}

/// Pack word indices back into a bitstream.
///
/// Returns the bytes and the number of significant bits. Unused low bits
/// of the last byte are zero.
pub fn join_indices(indices: &[WordIndex]) -> (Vec<u8>, usize) {
    let bits: usize = indices.len() * WORD_BITS;
    let mut bytes: Vec<u8> = vec![0u8; (bits + 7) / 8];

    for (window, index) in indices.iter().enumerate() {
        let value: u16 = index.as_u16();
        for offset in 0..WORD_BITS {
            if value & (1 << (WORD_BITS - 1 - offset)) != 0 {
                let bit: usize = window * WORD_BITS + offset;
                bytes[bit / 8] |= 1 << (7 - bit % 8);
            }
        }
    }

    (bytes, bits)
}
