//! Reader layer for Baci-style `.dat` input decks.
//!
//! A deck is a sequence of sections. Each section starts with a header line
//! made of dashes followed by the section name:
//!
//! ```text
//! -----------------------------------------------------------------PROBLEM SIZE
//! DIM                                   3
//! ```
//!
//! This crate provides:
//! - [`SectionLine`] / [`DeckOption`]: parsing and rendering of option lines
//! - [`Section`]: ordered options with unique or repeated keys
//! - [`RawDeck`]: splitting deck text into header/body blocks

pub mod blocks;
pub mod error;
pub mod option;
pub mod section;

pub use blocks::{Block, ContentLine, RawDeck, is_comment_line};
pub use error::{InpError, Result};
pub use option::{COMMENT_MARKER, DeckOption, KEY_WIDTH, SectionLine, Separator};
pub use section::{HEADER_PREFIX, KeyPolicy, SECTION_WIDTH, Section, section_header, section_name};
