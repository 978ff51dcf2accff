use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "file {} already exists, use --force to replace it",
        .0.display()
    )]
    FileExists(PathBuf),

    #[error("wordlist {} has no entries", .0.display())]
    EmptyWordList(PathBuf),

    #[error(transparent)]
    Password(#[from] dicepass_password::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Ctrlc(#[from] ctrlc::Error),
}
