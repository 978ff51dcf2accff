use super::{MemoryWordList, WordList};
use crate::{DiceKey, Error, Result};
use async_sqlite::rusqlite::{
    Connection, Error as SqlError, OpenFlags, OptionalExtension,
};
use std::{
    ops::Deref,
    path::{Path, PathBuf},
};

/// Wordlist stored in a SQLite database.
///
/// Expects a `diceware` table with the dice key in the
/// `number` column and the word in the `word` column.
/// A read only connection is opened for each lookup and
/// closed before the lookup returns.
#[derive(Debug, Clone)]
pub struct SqliteWordList {
    path: PathBuf,
}

impl SqliteWordList {
    /// Create a wordlist for a database file.
    ///
    /// The file is not opened until the first lookup.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the words into a new or existing database file.
    ///
    /// Existing entries with the same key are replaced.
    pub fn create(
        path: impl AsRef<Path>,
        words: &MemoryWordList,
    ) -> Result<Self> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        let tx = conn.transaction()?;
        let entity = WordEntity::new(&tx);
        entity.create_table()?;
        for (key, word) in words.iter() {
            entity.insert_word(*key, word)?;
        }
        tx.commit()?;
        tracing::debug!(
            path = %path.display(),
            words = words.len(),
            "wordlist::create",
        );
        Ok(Self::new(path))
    }

    /// Count the words in the database.
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count = WordEntity::new(&&conn)
            .count_words()
            .map_err(|e| self.unavailable(e))?;
        Ok(count)
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, e: SqlError) -> Error {
        Error::StoreUnavailable(self.path.clone(), Box::new(e))
    }
}

impl WordList for SqliteWordList {
    fn lookup(&self, key: DiceKey) -> Result<Option<String>> {
        let conn = self.connect()?;
        let word = WordEntity::new(&&conn)
            .find_word(key)
            .map_err(|e| self.unavailable(e))?;
        if word.is_none() {
            tracing::warn!(key = %key, "word not found");
        }
        Ok(word)
    }
}

/// Queries for the `diceware` table.
pub struct WordEntity<'conn, C>
where
    C: Deref<Target = Connection>,
{
    conn: &'conn C,
}

impl<'conn, C> WordEntity<'conn, C>
where
    C: Deref<Target = Connection>,
{
    /// Create a new word entity.
    pub fn new(conn: &'conn C) -> Self {
        Self { conn }
    }

    /// Create the table if it does not exist.
    pub fn create_table(&self) -> std::result::Result<(), SqlError> {
        self.conn.execute_batch(
            r#"
              CREATE TABLE IF NOT EXISTS diceware
              (
                number  INTEGER PRIMARY KEY NOT NULL,
                word    TEXT NOT NULL
              );
            "#,
        )
    }

    /// Find the word for a dice key.
    pub fn find_word(
        &self,
        key: DiceKey,
    ) -> std::result::Result<Option<String>, SqlError> {
        let mut stmt = self.conn.prepare_cached(
            r#"
              SELECT word FROM diceware WHERE number = ?1
            "#,
        )?;
        stmt.query_row([key.value()], |row| row.get(0)).optional()
    }

    /// Insert or replace the word for a dice key.
    pub fn insert_word(
        &self,
        key: DiceKey,
        word: &str,
    ) -> std::result::Result<(), SqlError> {
        let mut stmt = self.conn.prepare_cached(
            r#"
              INSERT OR REPLACE INTO diceware (number, word)
                VALUES (?1, ?2)
            "#,
        )?;
        stmt.execute((key.value(), word))?;
        Ok(())
    }

    /// Count the rows in the table.
    pub fn count_words(&self) -> std::result::Result<usize, SqlError> {
        let mut stmt = self.conn.prepare_cached(
            r#"
              SELECT COUNT(*) FROM diceware
            "#,
        )?;
        let count: i64 = stmt.query_row([], |row| row.get(0))?;
        Ok(count as usize)
    }
}
