use anyhow::Result;
use dicepass::{
    commands::{
        generate::{generate, GenerateArgs},
        import::{import, DICEWARE_WORDS},
    },
    Error,
};
use dicepass_password::{
    wordlist::{self, SqliteWordList},
    Composer, Recipe, WordList,
};
use dicepass_unit_tests::{signed_wordlist, word_for};
use tempfile::tempdir;

fn generate_args(dice_rolls: i64) -> GenerateArgs {
    GenerateArgs {
        dice_rolls,
        nums: 2,
        chars: 1,
        caps: false,
        no_caps: false,
        count: 3,
        no_progress: true,
    }
}

#[test]
fn import_then_compose_from_database() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("diceware.txt");
    let output = dir.path().join("diceware.db");
    std::fs::write(&input, signed_wordlist())?;

    let count = import(&input, &output, false)?;
    assert_eq!(DICEWARE_WORDS, count);

    let store = SqliteWordList::new(&output);
    let key = "31524".parse()?;
    assert_eq!(Some(word_for(key)), store.lookup(key)?);

    let composer = Composer::new(wordlist::open(&output)?);
    let passphrase = composer.compose(&Recipe::default())?;
    assert_eq!(4, passphrase.words().len());
    Ok(())
}

#[test]
fn import_refuses_to_overwrite() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("diceware.txt");
    let output = dir.path().join("diceware.db");
    std::fs::write(&input, signed_wordlist())?;
    std::fs::write(&output, b"existing")?;

    let err = import(&input, &output, false).unwrap_err();
    assert!(matches!(err, Error::FileExists(_)));

    assert_eq!(DICEWARE_WORDS, import(&input, &output, true)?);
    Ok(())
}

#[test]
fn forced_import_failure_keeps_existing_database() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("diceware.txt");
    let output = dir.path().join("diceware.db");
    std::fs::write(&input, signed_wordlist())?;
    import(&input, &output, false)?;

    let missing = dir.path().join("missing.txt");
    let err = import(&missing, &output, true).unwrap_err();
    assert!(
        matches!(err, Error::Password(ref e) if e.is_store_unavailable())
    );

    let malformed = dir.path().join("malformed.txt");
    std::fs::write(&malformed, "11111 a\n11117 b\n")?;
    assert!(import(&malformed, &output, true).is_err());

    let store = SqliteWordList::new(&output);
    assert_eq!(DICEWARE_WORDS, store.count()?);
    let key = "66666".parse()?;
    assert_eq!(Some(word_for(key)), store.lookup(key)?);
    Ok(())
}

#[test]
fn import_failure_leaves_no_files() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("malformed.txt");
    let output = dir.path().join("diceware.db");
    std::fs::write(&input, "11111\n")?;

    assert!(import(&input, &output, false).is_err());
    let entries = std::fs::read_dir(dir.path())?.count();
    assert_eq!(1, entries);
    Ok(())
}

#[test]
fn import_empty_list_fails() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("diceware.db");
    std::fs::write(&input, "no entries here\n")?;

    let err = import(&input, &output, false).unwrap_err();
    assert!(matches!(err, Error::EmptyWordList(_)));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn generate_writes_passphrases() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("diceware.txt");
    std::fs::write(&input, signed_wordlist())?;

    let mut out = Vec::new();
    generate(&input, &generate_args(4), &mut out)?;
    let text = String::from_utf8(out)?;
    assert!(text.contains("Diceware Password Generator"));
    assert_eq!(3, text.matches("Your passphrase:").count());
    Ok(())
}

#[test]
fn generate_missing_wordlist_writes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let mut out = Vec::new();
    let err = generate(
        &dir.path().join("missing.db"),
        &generate_args(4),
        &mut out,
    )
    .unwrap_err();
    assert!(
        matches!(err, Error::Password(ref e) if e.is_store_unavailable())
    );
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn generate_invalid_arguments_write_nothing() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("diceware.txt");
    std::fs::write(&input, signed_wordlist())?;

    let mut out = Vec::new();
    let err = generate(&input, &generate_args(1), &mut out).unwrap_err();
    assert!(
        matches!(err, Error::Password(ref e) if e.is_invalid_argument())
    );
    assert!(out.is_empty());
    Ok(())
}
