use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when too few words are requested.
    #[error("number of dice rolls must be at least {1}, got {0}")]
    TooFewWords(i64, usize),

    /// Error generated when a count is above its limit.
    #[error("number of {0} must be at most {2}, got {1}")]
    TooMany(&'static str, i64, usize),

    /// Error generated when a digit or symbol count is negative.
    #[error("number of {0} cannot be negative, got {1}")]
    NegativeCount(&'static str, i64),

    /// Error generated when a value is not a valid dice key.
    #[error("{0} is not a dice key, expected five digits between 1 and 6")]
    InvalidDiceKey(String),

    /// Error generated when the wordlist cannot be opened or queried.
    #[error("wordlist {} is unavailable", .0.display())]
    StoreUnavailable(
        PathBuf,
        #[source] Box<dyn std::error::Error + Send + Sync>,
    ),

    /// Error generated when the exact number of words could not
    /// be resolved within the allowed attempts.
    #[error(
        "failed to generate {words} words after {attempts} attempts, \
         the last attempt found {found}"
    )]
    GenerationExhausted {
        /// Number of words requested.
        words: usize,
        /// Number of generation passes made.
        attempts: usize,
        /// Number of words resolved by the final pass.
        found: usize,
    },

    /// Error generated when a text wordlist has a bad entry.
    #[error("malformed wordlist at line {line}: {reason}")]
    MalformedWordList {
        /// Line number (one-based).
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated by the database driver.
    #[error(transparent)]
    Sqlite(#[from] async_sqlite::rusqlite::Error),
}

impl Error {
    /// Determine if this error was caused by invalid arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::TooFewWords(_, _)
                | Error::TooMany(_, _, _)
                | Error::NegativeCount(_, _)
        )
    }

    /// Determine if this error means the wordlist could not be accessed.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Error::StoreUnavailable(_, _))
    }
}
