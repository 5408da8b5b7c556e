// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use super::Error;
use crate::types::wordlist::WORDLIST_LEN;
use crate::types::{Mnemonic, WordIndex, Wordlist};

/// Receives every word while a mnemonic is being assembled
pub trait Observer {
    /// `position` starts from 0
    fn on_word(&mut self, position: usize, total: usize, word: &str);
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    fn on_word(&mut self, _position: usize, _total: usize, _word: &str) {}
}

/// Map word indices to words
pub fn resolve(indices: &[WordIndex], wordlist: &Wordlist) -> Result<Mnemonic, Error> {
    resolve_with(indices, wordlist, &mut Silent)
}

pub fn resolve_with(
    indices: &[WordIndex],
    wordlist: &Wordlist,
    observer: &mut dyn Observer,
) -> Result<Mnemonic, Error> {
    // Wordlist constructors enforce 2048 words, so neither check below fires
    // for a `Wordlist` built by this crate
    if wordlist.len() != WORDLIST_LEN {
        return Err(Error::WordlistLength(wordlist.len()));
    }

    let total: usize = indices.len();
    let mut words: Vec<String> = Vec::with_capacity(total);

    for (position, index) in indices.iter().enumerate() {
        let word: &str = wordlist.get(*index).ok_or(Error::IndexOutOfRange {
            index: index.as_usize(),
            len: wordlist.len(),
        })?;
        observer.on_word(position, total, word);
        words.push(word.to_string());
    }

    Ok(Mnemonic::from_words(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(usize, usize, String)>,
    }

    impl Observer for Recorder {
        fn on_word(&mut self, position: usize, total: usize, word: &str) {
            self.seen.push((position, total, word.to_string()));
        }
    }

    fn indices(values: &[u16]) -> Vec<WordIndex> {
        values.iter().map(|v| WordIndex::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_resolve() {
        let wordlist = Wordlist::english();
        let mnemonic = resolve(&indices(&[0, 3, 2047]), &wordlist).unwrap();
        assert_eq!(mnemonic.to_string(), "abandon about zoo");
    }

    #[test]
    fn test_resolve_order_and_observer() {
        let wordlist = Wordlist::english();
        let mut recorder = Recorder::default();
        let mnemonic = resolve_with(&indices(&[102, 0]), &wordlist, &mut recorder).unwrap();
        assert_eq!(mnemonic.to_string(), "art abandon");
        assert_eq!(
            recorder.seen,
            vec![(0, 2, String::from("art")), (1, 2, String::from("abandon"))]
        );
    }

    #[test]
    fn test_resolve_empty() {
        let mnemonic = resolve(&[], &Wordlist::english()).unwrap();
        assert!(mnemonic.is_empty());
        assert_eq!(mnemonic.to_string(), "");
    }
}
