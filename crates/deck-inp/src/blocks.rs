//! Splitting of raw deck text into section blocks.

use log::debug;

use crate::option::COMMENT_MARKER;
use crate::section::{HEADER_PREFIX, section_name};

/// Deck text split at section headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDeck {
    /// Lines in front of the first section header.
    pub preamble: Vec<String>,
    pub blocks: Vec<Block>,
}

/// The lines following one section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    /// Trimmed body lines, comments and blank lines included.
    pub body: Vec<String>,
    /// 1-based line number of the header.
    pub line_start: usize,
}

/// A content line together with the comment lines directly in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub text: String,
    pub comments: Vec<String>,
    /// 1-based line number in the deck.
    pub line: usize,
}

impl RawDeck {
    pub fn parse_str(raw: &str) -> Self {
        let mut preamble = Vec::new();
        let mut blocks: Vec<Block> = Vec::new();

        for (i, line) in raw.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with(HEADER_PREFIX) {
                blocks.push(Block {
                    name: section_name(trimmed).to_string(),
                    body: Vec::new(),
                    line_start: i + 1,
                });
                continue;
            }
            match blocks.last_mut() {
                Some(block) => block.body.push(trimmed.to_string()),
                None => preamble.push(trimmed.to_string()),
            }
        }

        if preamble.len() == 1 && preamble[0].is_empty() {
            preamble.clear();
        }

        RawDeck { preamble, blocks }
    }
}

impl Block {
    /// Group the body into content lines, each with the comment lines in front
    /// of it. Comment lines after the last content line have no owner and are
    /// dropped.
    pub fn grouped(&self) -> Vec<ContentLine> {
        let mut grouped = Vec::new();
        let mut pending = Vec::new();

        for (i, line) in self.body.iter().enumerate() {
            if is_comment_line(line) {
                pending.push(line.clone());
            } else {
                grouped.push(ContentLine {
                    text: line.clone(),
                    comments: std::mem::take(&mut pending),
                    line: self.line_start + i + 1,
                });
            }
        }

        if pending.iter().any(|line| !line.is_empty()) {
            debug!(
                "Dropping {} trailing comment line(s) of section \"{}\" (line {}).",
                pending.len(),
                self.name,
                self.line_start
            );
        }
        grouped
    }
}

/// Blank lines and lines starting with `//` carry no data.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}
