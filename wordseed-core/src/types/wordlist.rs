// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! BIP39 wordlist
//!
//! A wordlist is an ordered list of exactly 2048 unique words: the word at
//! line `i` (starting from 0) encodes the 11 bit value `i`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use super::WordIndex;

/// Number of words in a BIP39 wordlist
pub const WORDLIST_LEN: usize = 2048;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Wordlist is not valid UTF-8")]
    Encoding,
    #[error("Empty word at line {line}")]
    Empty { line: usize },
    #[error("Duplicate word `{word}` at lines {first} and {second}")]
    Duplicate {
        word: String,
        first: usize,
        second: usize,
    },
    #[error("Wordlist must contain 2048 words, found {0}")]
    Length(usize),
}

#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    positions: HashMap<String, WordIndex>,
}

impl Wordlist {
    /// Build a wordlist from ordered words.
    ///
    /// Words are trimmed and NFKD normalized.
    pub fn new<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().nfkd().collect())
            .collect();

        if let Some(line) = words.iter().position(|w| w.is_empty()) {
            return Err(Error::Empty { line });
        }

        if words.len() != WORDLIST_LEN {
            return Err(Error::Length(words.len()));
        }

        let mut positions: HashMap<String, WordIndex> = HashMap::with_capacity(WORDLIST_LEN);
        for (line, word) in words.iter().enumerate() {
            // Length is checked above: `line` always fits in 11 bits
            if let Some(first) = positions.insert(word.clone(), WordIndex(line as u16)) {
                return Err(Error::Duplicate {
                    word: word.clone(),
                    first: first.as_usize(),
                    second: line,
                });
            }
        }

        Ok(Self { words, positions })
    }

    /// The canonical BIP39 English wordlist
    pub fn english() -> Self {
        let words: Vec<String> = bip39::Language::English
            .word_list()
            .iter()
            .map(|w| w.to_string())
            .collect();
        let positions: HashMap<String, WordIndex> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), WordIndex(i as u16)))
            .collect();
        Self { words, positions }
    }

    /// Parse a newline-delimited wordlist
    pub fn parse<S>(text: S) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        Self::new(text.as_ref().lines())
    }

    pub fn from_file<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let content: Vec<u8> = fs::read(path)?;
        let text: String = String::from_utf8(content).map_err(|_| Error::Encoding)?;
        Self::parse(text)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: WordIndex) -> Option<&str> {
        self.words.get(index.as_usize()).map(|w| w.as_str())
    }

    /// Find the index of a (NFKD normalized) word
    pub fn position(&self, word: &str) -> Option<WordIndex> {
        self.positions.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("word{i}")).collect()
    }

    #[test]
    fn test_english() {
        let wordlist = Wordlist::english();
        assert_eq!(wordlist.len(), WORDLIST_LEN);
        assert_eq!(wordlist.get(WordIndex::new(0).unwrap()), Some("abandon"));
        assert_eq!(wordlist.get(WordIndex::new(3).unwrap()), Some("about"));
        assert_eq!(wordlist.get(WordIndex::new(2047).unwrap()), Some("zoo"));
        assert_eq!(wordlist.position("art"), WordIndex::new(102).ok());
        assert!(wordlist.contains("legal"));
        assert!(!wordlist.contains("bitcoin"));
    }

    #[test]
    fn test_parse() {
        let text = synthetic(WORDLIST_LEN).join("\r\n") + "\n";
        let wordlist = Wordlist::parse(text).unwrap();
        assert_eq!(wordlist.len(), WORDLIST_LEN);
        assert_eq!(wordlist.get(WordIndex::new(7).unwrap()), Some("word7"));
        assert_eq!(wordlist.position("word2047"), WordIndex::new(2047).ok());
    }

    #[test]
    fn test_english_roundtrip_text() {
        let english = Wordlist::english();
        let text: String = english.iter().collect::<Vec<&str>>().join("\n");
        let parsed = Wordlist::parse(text).unwrap();
        assert!(english.iter().eq(parsed.iter()));
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            Wordlist::new(synthetic(2047)),
            Err(Error::Length(2047))
        ));
        assert!(matches!(
            Wordlist::new(synthetic(2049)),
            Err(Error::Length(2049))
        ));
        assert!(matches!(Wordlist::parse(""), Err(Error::Length(0))));
    }

    #[test]
    fn test_duplicate() {
        let mut words = synthetic(WORDLIST_LEN);
        words[10] = String::from("word3");
        match Wordlist::new(words) {
            Err(Error::Duplicate {
                word,
                first,
                second,
            }) => {
                assert_eq!(word, "word3");
                assert_eq!(first, 3);
                assert_eq!(second, 10);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_entry() {
        let mut words = synthetic(WORDLIST_LEN);
        words[5] = String::from("   ");
        assert!(matches!(Wordlist::new(words), Err(Error::Empty { line: 5 })));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("wordseed-wordlist-{}.txt", std::process::id()));
        fs::write(&path, synthetic(WORDLIST_LEN).join("\n")).unwrap();
        let wordlist = Wordlist::from_file(&path).unwrap();
        assert_eq!(wordlist.len(), WORDLIST_LEN);

        fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();
        assert!(matches!(Wordlist::from_file(&path), Err(Error::Encoding)));

        fs::remove_file(&path).unwrap();
        assert!(matches!(Wordlist::from_file(&path), Err(Error::IO(_))));
    }
}
