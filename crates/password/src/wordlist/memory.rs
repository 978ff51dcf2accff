use super::WordList;
use crate::{dice::DICE_PER_KEY, DiceKey, Error, Result};
use std::{collections::HashMap, path::Path};

/// Wordlist held in memory.
///
/// Parsed from the diceware text format where each entry is a
/// dice key followed by whitespace and the word:
///
/// ```text
/// 11111	a
/// 11112	a&p
/// ```
///
/// Lines that do not begin with a five digit key (blank lines,
/// signature armor, headers) are ignored.
#[derive(Debug, Default, Clone)]
pub struct MemoryWordList {
    words: HashMap<DiceKey, String>,
}

impl MemoryWordList {
    /// Create an empty wordlist.
    pub fn new() -> Self {
        Default::default()
    }

    /// Load a wordlist from a text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::StoreUnavailable(path.to_path_buf(), Box::new(e))
        })?;
        let list = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            words = list.len(),
            "wordlist::load",
        );
        Ok(list)
    }

    /// Parse a wordlist from diceware text.
    pub fn parse(content: &str) -> Result<Self> {
        let mut list = Self::new();
        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let mut parts = line.split_whitespace();
            let Some(key) = parts.next() else {
                continue;
            };
            if key.len() != DICE_PER_KEY
                || !key.bytes().all(|b| b.is_ascii_digit())
            {
                continue;
            }
            let key: DiceKey =
                key.parse().map_err(|e: Error| Error::MalformedWordList {
                    line: line_number,
                    reason: e.to_string(),
                })?;
            let word = parts.next().ok_or_else(|| Error::MalformedWordList {
                line: line_number,
                reason: format!("no word for key {}", key),
            })?;
            if list.insert(key, word.to_owned()).is_some() {
                return Err(Error::MalformedWordList {
                    line: line_number,
                    reason: format!("duplicate key {}", key),
                });
            }
        }
        Ok(list)
    }

    /// Add a word, returning any previous word for the key.
    pub fn insert(&mut self, key: DiceKey, word: String) -> Option<String> {
        self.words.insert(key, word)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Determine if the wordlist is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&DiceKey, &String)> {
        self.words.iter()
    }
}

impl FromIterator<(DiceKey, String)> for MemoryWordList {
    fn from_iter<I: IntoIterator<Item = (DiceKey, String)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl WordList for MemoryWordList {
    fn lookup(&self, key: DiceKey) -> Result<Option<String>> {
        let word = self.words.get(&key).cloned();
        if word.is_none() {
            tracing::warn!(key = %key, "word not found");
        }
        Ok(word)
    }
}
