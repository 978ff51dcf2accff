#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Diceware passphrase generation for the `dicepass` command line tool.
//!
//! Words are resolved from a [wordlist](wordlist::WordList) keyed by
//! simulated rolls of five six-sided dice, then combined with optional
//! digit and symbol suffixes by the [Composer].

pub mod composer;
pub mod dice;
mod error;
pub mod retry;
pub mod wordlist;

pub use composer::{Composer, Passphrase, Recipe};
pub use dice::DiceKey;
pub use error::Error;
pub use wordlist::WordList;

pub use secrecy;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Special character tokens appended as symbol components.
///
/// Some tokens are more than one character long; each token
/// counts as a single component.
pub const SPECIAL_CHARACTERS: &[&str] = &[
    "!", "!!", "\"", "#", "##", "$", "$$", "%", "%%", "&", "(", "()", ")",
    "*", "**", "+", "-", ":", ";", "=", "?", "??", "@",
];
