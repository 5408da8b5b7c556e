// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wordseed_core::WordCount;

pub mod io;

#[derive(Debug, Parser)]
#[command(name = "wordseed")]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Wordlist file (2048 newline-delimited words)
    #[clap(short, long, global = true)]
    pub wordlist: Option<PathBuf>,
    /// Print JSON instead of a table
    #[clap(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate BIP39 Seed Phrase
    Generate {
        /// Word count (12, 15, 18, 21 or 24)
        #[arg(default_value_t = WordCount::default())]
        word_count: WordCount,
        /// Add dice rolls to the entropy
        #[arg(long)]
        dice_roll: bool,
        /// Use a BIP39 passphrase
        #[arg(short, long)]
        passphrase: bool,
        /// Print words while they are resolved
        #[arg(long)]
        progress: bool,
    },
    /// Encode entropy (hex) as BIP39 Seed Phrase
    #[command(arg_required_else_help = true)]
    FromEntropy {
        /// Entropy hex (16, 20, 24, 28 or 32 bytes)
        #[arg(required = true)]
        entropy: String,
        /// Use a BIP39 passphrase
        #[arg(short, long)]
        passphrase: bool,
        /// Print words while they are resolved
        #[arg(long)]
        progress: bool,
    },
    /// Derive BIP39 seed from Seed Phrase
    Seed {
        /// Use a BIP39 passphrase
        #[arg(short, long)]
        passphrase: bool,
    },
    /// Validate Seed Phrase and recover its entropy
    Recover,
}
