use dicepass_password::Passphrase;
use secrecy::ExposeSecret;
use std::{borrow::Cow, io::Write};
use terminal_banner::{colored::Colorize, Banner, Padding};

pub(crate) mod progress;
pub(crate) mod strength;

pub use dicepass_cli_helpers::messages;

const TITLE: &str = "Diceware Password Generator";
const TAGLINE: &str = "Generate high-entropy passwords the easy way!";

pub(crate) fn display_heading(out: &mut impl Write) -> std::io::Result<()> {
    let banner = Banner::new()
        .padding(Padding::one())
        .text(Cow::Borrowed(TITLE).into())
        .text(Cow::Borrowed(TAGLINE).into())
        .render();
    writeln!(out, "{}", banner)
}

pub(crate) fn display_passphrase(
    out: &mut impl Write,
    passphrase: &Passphrase,
) -> std::io::Result<()> {
    writeln!(out, "{}", render_passphrase(passphrase))
}

/// Render the numbered components, the passphrase and,
/// when the component count has one, the strength estimate.
pub(crate) fn render_passphrase(passphrase: &Passphrase) -> String {
    let words = passphrase
        .components()
        .iter()
        .enumerate()
        .map(|(index, component)| format!("{}. {}", index + 1, component))
        .collect::<Vec<_>>()
        .join("\n");

    let mut banner = Banner::new()
        .padding(Padding::one())
        .text(Cow::Borrowed("Diceware Password").into())
        .text(Cow::<str>::Owned(format!("{}\n{}", "Your words:".bold(), words)).into())
        .text(Cow::<str>::Owned(format!(
            "{}\n{}",
            "Your passphrase:".bold(),
            passphrase.password().expose_secret().green()
        )).into());

    if let Some(label) = strength::label(passphrase.len()) {
        banner = banner.text(Cow::<str>::Owned(format!(
            "of possible passwords: {}",
            label
        )).into());
    }
    banner.render()
}
