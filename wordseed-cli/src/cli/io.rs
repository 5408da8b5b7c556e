// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use console::Term;
use dialoguer::{Input, Password, Select};
use wordseed_core::Result;

pub fn get_input<S>(prompt: S) -> Result<String>
where
    S: Into<String>,
{
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

pub fn get_passphrase_with_confirmation() -> Result<String> {
    Ok(Password::new()
        .with_prompt("Passphrase")
        .with_confirmation("Confirm passphrase", "Passphrases mismatching")
        .allow_empty_password(true)
        .interact()?)
}

/// Ask for the passphrase only if `enabled`
pub fn get_passphrase(enabled: bool) -> Result<Option<String>> {
    if enabled {
        Ok(Some(get_passphrase_with_confirmation()?))
    } else {
        Ok(None)
    }
}

/// Collect dice rolls until "finish" is selected
pub fn dice_rolls(term: &Term) -> Result<Vec<u8>> {
    let items: [&str; 7] = ["1", "2", "3", "4", "5", "6", "finish"];
    let mut rolls: Vec<u8> = Vec::new();
    loop {
        term.write_line(&format!("Total rolls: {}", rolls.len()))?;
        let index: usize = Select::new()
            .with_prompt("Select number")
            .default(0)
            .items(&items)
            .interact_on(term)?;
        term.clear_last_lines(1)?;
        match items[index].parse::<u8>() {
            Ok(num) => rolls.push(num),
            Err(_) => break,
        }
    }
    Ok(rolls)
}
