//! Wordlist stores mapping dice keys to words.
//!
//! A missing key is not an error, lookups return `Ok(None)` and the
//! caller decides whether to roll again. Errors are reserved for a
//! store that cannot be read at all.
use crate::{DiceKey, Result};
use std::path::Path;

mod memory;
mod sqlite;

pub use memory::MemoryWordList;
pub use sqlite::{SqliteWordList, WordEntity};

/// File extensions opened as SQLite databases.
pub const SQLITE_EXTENSIONS: &[&str] = &["db", "sqlite", "sqlite3"];

/// Read access to a diceware wordlist.
pub trait WordList {
    /// Find the word for a dice key.
    fn lookup(&self, key: DiceKey) -> Result<Option<String>>;
}

impl<T: WordList + ?Sized> WordList for &T {
    fn lookup(&self, key: DiceKey) -> Result<Option<String>> {
        (**self).lookup(key)
    }
}

impl<T: WordList + ?Sized> WordList for Box<T> {
    fn lookup(&self, key: DiceKey) -> Result<Option<String>> {
        (**self).lookup(key)
    }
}

/// Open a wordlist from a path.
///
/// Paths with a SQLite extension are queried on demand,
/// anything else is parsed as a diceware text list.
pub fn open(path: impl AsRef<Path>) -> Result<Box<dyn WordList>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "wordlist::open");
    if is_sqlite(path) {
        Ok(Box::new(SqliteWordList::new(path)))
    } else {
        Ok(Box::new(MemoryWordList::load(path)?))
    }
}

/// Determine if a path should be treated as a SQLite database.
pub fn is_sqlite(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SQLITE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wordlist_backend_from_extension() {
        assert!(is_sqlite("diceware.db"));
        assert!(is_sqlite("words.SQLITE"));
        assert!(is_sqlite("/tmp/words.sqlite3"));
        assert!(!is_sqlite("diceware.txt"));
        assert!(!is_sqlite("diceware"));
    }
}
