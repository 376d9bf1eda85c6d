//! Material definitions.

use crate::error::{EntityKind, ModelError, Result};

/// A material law, written as `MAT <n> <definition>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    /// Everything after the material number, e.g. `MAT_BeamReissnerElastHyper YOUNG 1.0 ...`
    pub definition: String,
    pub comments: Vec<String>,
}

impl Material {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into().trim().to_string(),
            comments: Vec::new(),
        }
    }

    /// Decode a `MAT <n> <definition>` line. The number is positional and dropped.
    pub fn from_dat(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next();
        let number = tokens.next();
        if keyword != Some("MAT") || number.and_then(|n| n.parse::<usize>().ok()).is_none() {
            return Err(ModelError::invalid_line(
                EntityKind::Material,
                line,
                "expected `MAT <n> <definition>`",
            ));
        }
        Ok(Self::new(tokens.collect::<Vec<_>>().join(" ")))
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn dat_line(&self, number: usize) -> String {
        if self.definition.is_empty() {
            format!("MAT {number}")
        } else {
            format!("MAT {number} {}", self.definition)
        }
    }
}
