//! Random sources for dice keys, digit blocks and special characters.
//!
//! Every draw comes from the operating system CSPRNG unless a caller
//! supplies its own generator through the `_with` variants.
use crate::{csprng, Error, Result, DIGITS, SPECIAL_CHARACTERS};
use rand::{CryptoRng, Rng};
use std::{fmt, str::FromStr};

/// Number of dice rolled for each key.
pub const DICE_PER_KEY: usize = 5;

/// Largest dice key accepted from the random source.
///
/// Draws above this value are rejected and the whole key is rolled again.
pub const DICE_KEY_CEILING: u32 = 65433;

/// Five rolls of a six-sided die concatenated in roll order,
/// for example `31524`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceKey(u32);

impl DiceKey {
    /// Smallest possible key.
    pub const MIN: DiceKey = DiceKey(11111);

    /// Largest possible key.
    pub const MAX: DiceKey = DiceKey(66666);

    /// Create a dice key from an integer.
    ///
    /// The value must have exactly five digits and every
    /// digit must be between 1 and 6.
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(Error::InvalidDiceKey(value.to_string()));
        }
        let mut rest = value;
        while rest > 0 {
            if !(1..=6).contains(&(rest % 10)) {
                return Err(Error::InvalidDiceKey(value.to_string()));
            }
            rest /= 10;
        }
        Ok(Self(value))
    }

    /// Create a dice key from individual rolls.
    pub fn from_rolls(rolls: [u8; DICE_PER_KEY]) -> Result<Self> {
        let value = rolls
            .iter()
            .fold(0u32, |acc, roll| acc * 10 + u32::from(*roll));
        if rolls.iter().any(|roll| !(1..=6).contains(roll)) {
            return Err(Error::InvalidDiceKey(format!("{:?}", rolls)));
        }
        Self::new(value)
    }

    /// Integer value of the key.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Individual rolls in roll order.
    pub fn rolls(&self) -> [u8; DICE_PER_KEY] {
        let mut rolls = [0u8; DICE_PER_KEY];
        let mut rest = self.0;
        for roll in rolls.iter_mut().rev() {
            *roll = (rest % 10) as u8;
            rest /= 10;
        }
        rolls
    }
}

impl fmt::Display for DiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DiceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != DICE_PER_KEY || !s.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::InvalidDiceKey(s.to_owned()));
        }
        let value: u32 =
            s.parse().map_err(|_| Error::InvalidDiceKey(s.to_owned()))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for DiceKey {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DiceKey> for u32 {
    fn from(value: DiceKey) -> Self {
        value.0
    }
}

/// Roll a dice key using the default CSPRNG.
pub fn next_dice_key() -> DiceKey {
    next_dice_key_with(&mut csprng())
}

/// Roll a dice key using the given generator.
///
/// Keys above [DICE_KEY_CEILING] are discarded and rolled again.
pub fn next_dice_key_with<R: Rng + CryptoRng>(rng: &mut R) -> DiceKey {
    loop {
        let value = (0..DICE_PER_KEY)
            .fold(0u32, |acc, _| acc * 10 + rng.gen_range(1..=6u32));
        if value <= DICE_KEY_CEILING {
            return DiceKey(value);
        }
        tracing::trace!(key = value, "dice::reroll");
    }
}

/// Generate a block of random decimal digits using the default CSPRNG.
pub fn next_digit_block(length: usize) -> String {
    next_digit_block_with(&mut csprng(), length)
}

/// Generate a block of random decimal digits using the given generator.
///
/// Leading zeros are kept so the block is always `length` characters.
pub fn next_digit_block_with<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
) -> String {
    (0..length)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())])
        .collect()
}

/// Pick a special character token using the default CSPRNG.
pub fn next_special_character() -> &'static str {
    next_special_character_with(&mut csprng())
}

/// Pick a special character token using the given generator.
pub fn next_special_character_with<R: Rng + CryptoRng>(
    rng: &mut R,
) -> &'static str {
    SPECIAL_CHARACTERS[rng.gen_range(0..SPECIAL_CHARACTERS.len())]
}
