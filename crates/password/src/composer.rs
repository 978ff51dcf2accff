//! Compose passphrases from dice words, digits and symbols.
use crate::{
    csprng,
    dice::{
        next_dice_key_with, next_digit_block_with,
        next_special_character_with,
    },
    retry::{self, Retry},
    wordlist::WordList,
    Error, Result,
};
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use std::fmt;

/// Minimum number of words in a passphrase.
pub const MIN_WORDS: usize = 2;

/// Maximum number of words in a passphrase.
pub const MAX_WORDS: usize = 64;

/// Maximum length of the digit block.
pub const MAX_DIGITS: usize = 64;

/// Maximum number of special character components.
pub const MAX_SYMBOLS: usize = 64;

/// Maximum number of full word generation passes.
pub const MAX_ATTEMPTS: usize = 10;

/// Number of words, digits and symbols for a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    words: usize,
    digits: usize,
    symbols: usize,
    capitalize: bool,
}

impl Recipe {
    /// Create a recipe.
    ///
    /// Fails when fewer than two words are requested, when
    /// the digit or symbol count is negative or when any count
    /// is above its limit.
    pub fn new(
        words: i64,
        digits: i64,
        symbols: i64,
        capitalize: bool,
    ) -> Result<Self> {
        let words = usize::try_from(words)
            .ok()
            .filter(|words| *words >= MIN_WORDS)
            .ok_or(Error::TooFewWords(words, MIN_WORDS))?;
        if words > MAX_WORDS {
            return Err(Error::TooMany("words", words as i64, MAX_WORDS));
        }
        let digits = bounded_count("digits", digits, MAX_DIGITS)?;
        let symbols = bounded_count("characters", symbols, MAX_SYMBOLS)?;
        Ok(Self {
            words,
            digits,
            symbols,
            capitalize,
        })
    }

    /// Number of words.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Length of the digit block.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Number of special character components.
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// Whether words are capitalized.
    pub fn capitalize(&self) -> bool {
        self.capitalize
    }

    /// Total number of components a passphrase
    /// made from this recipe will have.
    pub fn components(&self) -> usize {
        self.words + usize::from(self.digits > 0) + self.symbols
    }
}

fn bounded_count(
    name: &'static str,
    value: i64,
    max: usize,
) -> Result<usize> {
    let count = usize::try_from(value)
        .map_err(|_| Error::NegativeCount(name, value))?;
    if count > max {
        return Err(Error::TooMany(name, value, max));
    }
    Ok(count)
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            words: 4,
            digits: 0,
            symbols: 0,
            capitalize: false,
        }
    }
}

/// Generated passphrase.
///
/// Components are ordered words first, then the digit
/// block (if any), then the special characters.
pub struct Passphrase {
    components: Vec<String>,
    words: usize,
    digits: bool,
    password: SecretString,
}

impl Passphrase {
    fn new(components: Vec<String>, words: usize, digits: bool) -> Self {
        let password = SecretString::from(components.concat());
        Self {
            components,
            words,
            digits,
            password,
        }
    }

    /// All components in order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Word components.
    pub fn words(&self) -> &[String] {
        &self.components[..self.words]
    }

    /// Digit block component.
    pub fn digits(&self) -> Option<&str> {
        self.digits.then(|| self.components[self.words].as_str())
    }

    /// Special character components.
    pub fn symbols(&self) -> &[String] {
        &self.components[self.words + usize::from(self.digits)..]
    }

    /// Concatenated password.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Determine if there are no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Split into the components and the password.
    pub fn into_parts(self) -> (Vec<String>, SecretString) {
        (self.components, self.password)
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("components", &self.components.len())
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Builds passphrases from a wordlist.
pub struct Composer<W> {
    wordlist: W,
}

impl<W: WordList> Composer<W> {
    /// Create a composer for a wordlist.
    pub fn new(wordlist: W) -> Self {
        Self { wordlist }
    }

    /// Wordlist used for lookups.
    pub fn wordlist(&self) -> &W {
        &self.wordlist
    }

    /// Generate a passphrase using the default CSPRNG.
    pub fn compose(&self, recipe: &Recipe) -> Result<Passphrase> {
        self.compose_with(&mut csprng(), recipe)
    }

    /// Generate multiple passphrases.
    ///
    /// Each passphrase draws fresh randomness, nothing
    /// is shared between them except the wordlist.
    pub fn many(
        &self,
        recipe: &Recipe,
        count: usize,
    ) -> Result<Vec<Passphrase>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.compose(recipe)?);
        }
        Ok(results)
    }

    /// Generate a passphrase using the given generator.
    pub fn compose_with<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        recipe: &Recipe,
    ) -> Result<Passphrase> {
        let expected = recipe.words();
        let outcome = retry::bounded(
            MAX_ATTEMPTS,
            |attempt| {
                let words = self.roll_words(&mut *rng, expected)?;
                if words.len() != expected {
                    tracing::debug!(
                        attempt,
                        found = words.len(),
                        expected,
                        "compose::retry",
                    );
                }
                Ok::<_, Error>(words)
            },
            |words| words.len() == expected,
        )?;

        let mut components = match outcome {
            Retry::Accepted { value, .. } => value,
            Retry::Exhausted { last, attempts } => {
                return Err(Error::GenerationExhausted {
                    words: expected,
                    attempts,
                    found: last.map(|words| words.len()).unwrap_or(0),
                });
            }
        };

        if recipe.capitalize() {
            for word in components.iter_mut() {
                *word = capitalize(word);
            }
        }

        if recipe.digits() > 0 {
            components.push(next_digit_block_with(rng, recipe.digits()));
        }

        for _ in 0..recipe.symbols() {
            components.push(next_special_character_with(rng).to_owned());
        }

        Ok(Passphrase::new(components, expected, recipe.digits() > 0))
    }

    /// Roll `count` dice keys and keep the words that resolve.
    fn roll_words<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<String>> {
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            let key = next_dice_key_with(rng);
            if let Some(word) = self.wordlist.lookup(key)? {
                words.push(word);
            }
        }
        Ok(words)
    }
}

/// Upper case the first character of a word.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
