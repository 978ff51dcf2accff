use clap::{CommandFactory, Parser, Subcommand};
use dicepass_cli_helpers::CommandTree;
use dicepass_password::DiceKey;
use kdam::term;
use std::path::PathBuf;

use crate::{
    commands::{generate, import, lookup, GenerateArgs},
    Result,
};

/// Default wordlist file.
pub const DEFAULT_WORDLIST: &str = "diceware.db";

/// Generate high-entropy passwords the easy way!
#[derive(Parser, Debug)]
#[clap(name = "dicepass", author, version, about, long_about = None)]
pub struct Dicepass {
    /// Wordlist file, a SQLite database (.db) or diceware text list.
    #[clap(
        short,
        long,
        env = "DICEPASS_WORDLIST",
        default_value = DEFAULT_WORDLIST,
        global = true
    )]
    pub wordlist: PathBuf,

    #[clap(flatten)]
    pub generate: GenerateArgs,

    #[clap(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the words for dice keys.
    Lookup {
        /// Dice keys, five digits between 1 and 6.
        #[clap(required = true)]
        keys: Vec<DiceKey>,
    },
    /// Convert a diceware text list to a wordlist database.
    Import {
        /// Replace the output file if it exists.
        #[clap(short, long)]
        force: bool,

        /// Diceware text list to read.
        input: PathBuf,

        /// Database file to write.
        output: PathBuf,
    },
}

pub fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("DICEPASS_CLI_JSON").ok().is_some() {
        let cmd = Dicepass::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        std::process::exit(0);
    }

    ctrlc::set_handler(move || {
        let _ = term::show_cursor();
        std::process::exit(1);
    })?;

    let args = Dicepass::parse();
    match args.cmd {
        None => generate::run(&args.wordlist, &args.generate)?,
        Some(Command::Lookup { keys }) => lookup::run(&args.wordlist, keys)?,
        Some(Command::Import {
            force,
            input,
            output,
        }) => import::run(input, output, force)?,
    }
    Ok(())
}
