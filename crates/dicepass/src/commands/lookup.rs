use crate::Result;
use dicepass_password::{wordlist, DiceKey, WordList};
use std::{io::Write, path::Path};

/// Print the word for each dice key, `-` when missing.
pub fn run(path: &Path, keys: Vec<DiceKey>) -> Result<()> {
    let store = wordlist::open(path)?;
    let mut out = std::io::stdout().lock();
    for key in keys {
        let word = store.lookup(key)?;
        writeln!(out, "{}  {}", key, word.as_deref().unwrap_or("-"))?;
    }
    Ok(())
}
