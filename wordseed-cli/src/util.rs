// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use console::Term;
use prettytable::{row, Table};
use wordseed_core::bips::bip39::Observer;
use wordseed_core::types::Secrets;
use wordseed_core::{Result, Seed};

pub fn print_secrets(secrets: &Secrets, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(secrets)?);
        return Ok(());
    }

    let mut table = Table::new();

    table.add_row(row![
        format!("Entropy ({} bits)", secrets.entropy_bits()),
        secrets.entropy
    ]);
    table.add_row(row!["Mnemonic (BIP39)", secrets.mnemonic]);

    if let Some(passphrase) = &secrets.passphrase {
        table.add_row(row!["Passphrase (BIP39)", passphrase]);
    }

    table.add_row(row!["Seed HEX (BIP39)", secrets.seed_hex]);

    table.printstd();

    Ok(())
}

pub fn print_seed(seed: &Seed, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::json!({ "seed_hex": seed.to_hex() }));
    } else {
        println!("{}", seed.to_hex());
    }
    Ok(())
}

/// Prints every resolved word to stderr
pub struct Progress {
    term: Term,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Observer for Progress {
    fn on_word(&mut self, position: usize, total: usize, word: &str) {
        if let Err(e) = self
            .term
            .write_line(&format!("{:>2}/{total} {word}", position + 1))
        {
            log::warn!("Impossible to print progress: {e}");
        }
    }
}
