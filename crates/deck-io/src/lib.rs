//! Reading and writing of Baci-style `.dat` input decks.
//!
//! This crate provides:
//! - [`DeckParser`]: routing of deck blocks into sections and entity tables
//! - [`link_entities`]: moving parsed entities into an [`EntityStore`](deck_model::EntityStore),
//!   verbatim or with all references resolved
//! - [`DeckWriter`]: numbered output of a store in canonical section order
//! - [`DatFile`]: a whole document with file read/write
//! - JSON loading of [`DeckFormat`](deck_model::DeckFormat) tables

pub mod dat_file;
pub mod error;
pub mod format;
pub mod header;
pub mod link;
pub mod parser;
pub mod writer;

pub use dat_file::{DatFile, WriteOptions};
pub use error::{DeckError, Result};
pub use format::{load_format, save_format};
pub use header::MetadataProvider;
pub use link::{LinkMode, link_entities};
pub use parser::{DeckParser, ParsedDeck, ParsedEntities, ParsedSet};
pub use writer::DeckWriter;
