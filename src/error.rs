//! Error types.
//!
//! Invalid guesses are not errors: the session records them and scores them
//! through the reward model. Everything here is either a malformed input at
//! startup or a misuse of the session API.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::Status;
use crate::word::Word;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("'{word}' has {len} characters, expected 5")]
    Length { word: String, len: usize },
    #[error("'{word}' contains non-letter character {ch:?}")]
    Character { word: String, ch: char },
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("answer list is empty")]
    EmptyAnswers,
    #[error("guess list is empty")]
    EmptyGuesses,
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported word list format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no episode in progress, call reset() first")]
    NotStarted,
    #[error("episode is already over ({status}), call reset() first")]
    AlreadyTerminated { status: Status },
    #[error("{0} is not in the answer list")]
    UnknownTarget(Word),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Crate-level error used by the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
