// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use std::path::{Path, PathBuf};

use crate::types::Wordlist;

pub const WORDLIST_FILE_NAME: &str = "wordlist.txt";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Wordlist(#[from] crate::types::wordlist::Error),
}

pub fn home() -> PathBuf {
    match dirs::home_dir() {
        Some(path) => path,
        None => Path::new("./").to_path_buf(),
    }
}

/// `~/.wordseed`
pub fn wordseed() -> PathBuf {
    home().join(".wordseed")
}

/// Nothing is created on disk: the file is optional.
pub fn default_wordlist_file() -> PathBuf {
    wordseed().join(WORDLIST_FILE_NAME)
}

/// Load the wordlist to use.
///
/// An explicit `path` always wins. Otherwise `~/.wordseed/wordlist.txt` is
/// used if it exists, falling back to the built-in English list. A file
/// that fails to load is an error, never replaced by the built-in list.
pub fn load_wordlist<P>(path: Option<P>) -> Result<Wordlist, Error>
where
    P: AsRef<Path>,
{
    let path: Option<PathBuf> = match path {
        Some(path) => Some(path.as_ref().to_path_buf()),
        None => {
            let default: PathBuf = default_wordlist_file();
            default.exists().then_some(default)
        }
    };

    match path {
        Some(path) => {
            log::info!("Loading wordlist from {}", path.display());
            Ok(Wordlist::from_file(path)?)
        }
        None => {
            log::info!("Using built-in English wordlist");
            Ok(Wordlist::english())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_explicit_wordlist() {
        let path = std::env::temp_dir().join(format!("wordseed-dir-{}.txt", std::process::id()));
        let text: String = Wordlist::english().iter().collect::<Vec<&str>>().join("\n");
        std::fs::write(&path, text).unwrap();
        let wordlist = load_wordlist(Some(&path)).unwrap();
        assert!(wordlist.iter().eq(Wordlist::english().iter()));

        std::fs::write(&path, "abandon\nability\n").unwrap();
        assert!(matches!(
            load_wordlist(Some(&path)),
            Err(Error::Wordlist(crate::types::wordlist::Error::Length(2)))
        ));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_home_uses_builtin() {
        let previous = std::env::var_os("HOME");
        std::env::set_var("HOME", "/proc/wordseed-missing-home");

        let wordlist = load_wordlist::<&str>(None);
        assert!(!Path::new("/proc/wordseed-missing-home").exists());

        match previous {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }

        let wordlist = wordlist.unwrap();
        assert!(wordlist.iter().eq(Wordlist::english().iter()));
    }
}
