//! Shared fixtures for the integration tests.
use dicepass_password::DiceKey;

/// Word for a dice key spelled from its rolls, `31524` is `caebd`.
pub fn word_for(key: DiceKey) -> String {
    key.rolls()
        .iter()
        .map(|roll| (b'a' + roll - 1) as char)
        .collect()
}

/// Complete diceware list in the signed text format.
pub fn signed_wordlist() -> String {
    let mut text = String::from(
        "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA1\n\n",
    );
    for value in DiceKey::MIN.value()..=DiceKey::MAX.value() {
        if let Ok(key) = DiceKey::new(value) {
            text.push_str(&format!("{}\t{}\n", key, word_for(key)));
        }
    }
    text.push_str("\n-----BEGIN PGP SIGNATURE-----\n");
    text
}
