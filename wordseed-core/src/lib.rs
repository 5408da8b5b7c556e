// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

#![doc = include_str!("../README.md")]

pub mod bips;
pub mod types;
pub mod util;

pub use self::types::{Entropy, Mnemonic, Seed, WordCount, Wordlist};

pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
