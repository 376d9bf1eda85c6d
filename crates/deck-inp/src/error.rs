//! Error types for deck-inp

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InpError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InpError {
    /// The text could not be split into exactly one key and one value.
    #[error("could not process option text {text:?}: expected `key value` or `key = value`")]
    Format { text: String },

    /// An option with this key already exists and the new one does not overwrite.
    #[error("key {key:?} is already set in section {section:?}")]
    DuplicateKey { section: String, key: String },
}
