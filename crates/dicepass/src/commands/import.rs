use crate::{helpers::messages, Error, Result};
use dicepass_password::wordlist::{MemoryWordList, SqliteWordList};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Number of entries in a complete diceware list.
pub const DICEWARE_WORDS: usize = 7776;

/// Convert a diceware text list into a wordlist database.
pub fn run(input: PathBuf, output: PathBuf, force: bool) -> Result<()> {
    let count = import(&input, &output, force)?;
    if count != DICEWARE_WORDS {
        messages::warn(format!(
            "{} has {} words, a complete list has {}",
            input.display(),
            count,
            DICEWARE_WORDS,
        ));
    }
    messages::success(format!(
        "Imported {} words into {}",
        count,
        output.display()
    ));
    Ok(())
}

/// Write the words from a text list to a database file
/// and return the number of words written.
///
/// The database is built in a temporary file next to the
/// output and only moved over the output once complete, so
/// an existing database survives any failure.
pub fn import(input: &Path, output: &Path, force: bool) -> Result<usize> {
    if output.exists() && !force {
        return Err(Error::FileExists(output.to_path_buf()));
    }

    let words = MemoryWordList::load(input)?;
    if words.is_empty() {
        return Err(Error::EmptyWordList(input.to_path_buf()));
    }

    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(parent)?;
    let store = SqliteWordList::create(temp.path(), &words)?;
    let count = store.count()?;
    temp.persist(output).map_err(|e| e.error)?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        count,
        "import",
    );
    Ok(count)
}
