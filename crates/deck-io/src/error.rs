//! Error types for deck-io

use deck_inp::InpError;
use deck_model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeckError>;

#[derive(Error, Debug)]
pub enum DeckError {
    /// Set indices of a topology block must not decrease.
    #[error("set index {found} in {section} (line {line}) follows index {previous}")]
    Sequence {
        section: String,
        line: usize,
        previous: usize,
        found: usize,
    },

    #[error("invalid state: {0}")]
    State(String),

    #[error("parse error in {section} (line {line}): {message}")]
    Parse {
        section: String,
        line: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Inp(#[from] InpError),
}
