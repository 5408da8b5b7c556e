// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

#![doc = include_str!("../../README.md")]

use clap::Parser;
use console::Term;
use wordseed_core::bips::bip39::{self, entropy, Observer, Silent};
use wordseed_core::types::Secrets;
use wordseed_core::util::dir;
use wordseed_core::{Entropy, Mnemonic, Result, Wordlist};

mod cli;
mod util;

use self::cli::io;
use self::cli::{Cli, Command};
use self::util::Progress;

fn encode(entropy: &Entropy, wordlist: &Wordlist, progress: bool) -> Result<Mnemonic> {
    let mut observer: Box<dyn Observer> = if progress {
        Box::new(Progress::new())
    } else {
        Box::new(Silent)
    };
    Ok(bip39::from_entropy_with(
        entropy,
        wordlist,
        observer.as_mut(),
    )?)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let wordlist: Wordlist = dir::load_wordlist(args.wordlist.as_ref())?;

    match args.command {
        Command::Generate {
            word_count,
            dice_roll,
            passphrase,
            progress,
        } => {
            let custom: Option<Vec<u8>> = if dice_roll {
                Some(io::dice_rolls(&Term::stdout())?)
            } else {
                None
            };
            let entropy: Entropy = entropy::generate(word_count, custom.as_deref());
            let mnemonic: Mnemonic = encode(&entropy, &wordlist, progress)?;
            let passphrase: Option<String> = io::get_passphrase(passphrase)?;

            if !args.json {
                println!("\n!!! WRITE DOWN YOUR SEED PHRASE !!!\n");
            }
            util::print_secrets(&Secrets::new(&entropy, mnemonic, passphrase), args.json)
        }
        Command::FromEntropy {
            entropy,
            passphrase,
            progress,
        } => {
            let entropy: Entropy = Entropy::from_hex(entropy)?;
            let mnemonic: Mnemonic = encode(&entropy, &wordlist, progress)?;
            let passphrase: Option<String> = io::get_passphrase(passphrase)?;
            util::print_secrets(&Secrets::new(&entropy, mnemonic, passphrase), args.json)
        }
        Command::Seed { passphrase } => {
            let mnemonic: Mnemonic = Mnemonic::parse_in(&wordlist, io::get_input("Seed")?)?;
            let passphrase: Option<String> = io::get_passphrase(passphrase)?;
            util::print_seed(&mnemonic.to_seed(passphrase.as_deref()), args.json)
        }
        Command::Recover => {
            let entropy: Entropy = bip39::recover(&io::get_input("Seed")?, &wordlist)?;
            let mnemonic: Mnemonic = bip39::from_entropy(&entropy, &wordlist)?;
            util::print_secrets(&Secrets::new(&entropy, mnemonic, None), args.json)
        }
    }
}
