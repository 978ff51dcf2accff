use anyhow::Result;
use dicepass_password::{
    dice::{next_dice_key, DICE_KEY_CEILING},
    wordlist::MemoryWordList,
    Composer, DiceKey, Error, Recipe, WordList, SPECIAL_CHARACTERS,
};
use dicepass_unit_tests::signed_wordlist;
use secrecy::ExposeSecret;
use std::collections::HashSet;

fn wordlist() -> Result<MemoryWordList> {
    Ok(MemoryWordList::parse(&signed_wordlist())?)
}

#[test]
fn compose_four_plain_words() -> Result<()> {
    let list = wordlist()?;
    assert_eq!(7776, list.len());
    let values: HashSet<&String> = list.iter().map(|(_, w)| w).collect();

    let composer = Composer::new(&list);
    let passphrase = composer.compose(&Recipe::new(4, 0, 0, false)?)?;
    let (components, password) = passphrase.into_parts();
    assert_eq!(4, components.len());
    for word in &components {
        assert!(values.contains(word));
    }
    assert_eq!(components.concat(), password.expose_secret());
    Ok(())
}

#[test]
fn compose_capitalized_with_digits_and_symbol() -> Result<()> {
    let list = wordlist()?;
    let composer = Composer::new(&list);
    let passphrase = composer.compose(&Recipe::new(2, 3, 1, true)?)?;
    assert_eq!(4, passphrase.len());

    for word in passphrase.words() {
        let lower = word.to_lowercase();
        assert!(list.iter().any(|(_, w)| *w == lower));
        assert!(word.chars().next().map(char::is_uppercase).unwrap());
        assert_eq!(lower[1..], word[1..]);
    }

    let digits = passphrase.digits().unwrap();
    assert_eq!(3, digits.len());
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(digits, passphrase.components()[2]);

    assert_eq!(1, passphrase.symbols().len());
    let symbol = passphrase.components()[3].as_str();
    assert!(SPECIAL_CHARACTERS.contains(&symbol));
    assert_eq!(
        passphrase.components().concat(),
        passphrase.password().expose_secret()
    );
    Ok(())
}

#[test]
fn compose_rejects_invalid_arguments() {
    assert!(Recipe::new(1, 0, 0, false).unwrap_err().is_invalid_argument());
    assert!(Recipe::new(0, -1, 0, false)
        .unwrap_err()
        .is_invalid_argument());
    assert!(Recipe::new(2, 0, -3, true)
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn compose_every_valid_word_count() -> Result<()> {
    let list = wordlist()?;
    let composer = Composer::new(&list);
    for words in 2..=12 {
        let recipe = Recipe::new(words, 0, 0, false)?;
        let passphrase = composer.compose(&recipe)?;
        assert_eq!(words as usize, passphrase.words().len());
    }
    Ok(())
}

#[test]
fn compose_exhausts_with_single_word_list() -> Result<()> {
    let list: MemoryWordList =
        [(DiceKey::MIN, "a".to_owned())].into_iter().collect();
    let composer = Composer::new(&list);
    let err =
        composer.compose(&Recipe::new(8, 0, 0, false)?).unwrap_err();
    assert!(matches!(err, Error::GenerationExhausted { words: 8, .. }));
    Ok(())
}

#[test]
fn dice_keys_resolve_in_complete_list() -> Result<()> {
    let list = wordlist()?;
    for _ in 0..500 {
        let key = next_dice_key();
        assert!(key.value() <= DICE_KEY_CEILING);
        assert!(list.lookup(key)?.is_some());
    }
    Ok(())
}
