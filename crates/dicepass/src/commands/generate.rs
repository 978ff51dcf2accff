use crate::{
    helpers::{display_heading, display_passphrase, progress},
    Result,
};
use clap::Args;
use dicepass_password::{wordlist, Composer, Recipe};
use std::{io::Write, path::Path};

/// Options for generating passphrases.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of dice rolls (words in the passphrase).
    #[clap(long, default_value_t = 4, allow_negative_numbers = true)]
    pub dice_rolls: i64,

    /// Number of random digits to add (0-10).
    #[clap(
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(i64).range(0..=10)
    )]
    pub nums: i64,

    /// Number of special characters to add (0-10).
    #[clap(
        long = "char",
        default_value_t = 0,
        value_parser = clap::value_parser!(i64).range(0..=10)
    )]
    pub chars: i64,

    /// Capitalize first letter of each word.
    #[clap(long, overrides_with = "no_caps")]
    pub caps: bool,

    /// Do not capitalize words.
    #[clap(long, overrides_with = "caps")]
    pub no_caps: bool,

    /// Number of passphrases to generate (1-100).
    #[clap(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..=100)
    )]
    pub count: u64,

    /// Skip the progress animation.
    #[clap(long)]
    pub no_progress: bool,
}

impl GenerateArgs {
    /// Whether words should be capitalized.
    pub fn capitalize(&self) -> bool {
        self.caps && !self.no_caps
    }

    /// Recipe for the composer.
    pub fn recipe(&self) -> Result<Recipe> {
        Ok(Recipe::new(
            self.dice_rolls,
            self.nums,
            self.chars,
            self.capitalize(),
        )?)
    }
}

/// Generate and print passphrases.
pub fn run(path: &Path, args: &GenerateArgs) -> Result<()> {
    let mut out = std::io::stdout().lock();
    generate(path, args, &mut out)
}

/// Generate passphrases and write them to an output sink.
///
/// Every passphrase is generated before anything is written
/// so a failure never leaves partial output.
pub fn generate(
    path: &Path,
    args: &GenerateArgs,
    out: &mut impl Write,
) -> Result<()> {
    let recipe = args.recipe()?;
    let composer = Composer::new(wordlist::open(path)?);
    let results = composer.many(&recipe, args.count as usize)?;
    tracing::debug!(
        count = results.len(),
        components = recipe.components(),
        "generate",
    );

    display_heading(out)?;
    for passphrase in &results {
        if !args.no_progress {
            progress::animate(passphrase.components())?;
        }
        display_passphrase(out, passphrase)?;
    }
    out.flush()?;
    Ok(())
}
