//! Entities that are kept as the text they were read from.

use deck_inp::ContentLine;

/// Verbatim deck text of one entity with its leading comment lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawItem {
    pub comments: Vec<String>,
    pub lines: Vec<String>,
}

impl RawItem {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            comments: Vec::new(),
            lines: vec![line.into()],
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn dat_lines(&self) -> Vec<String> {
        self.comments.iter().chain(&self.lines).cloned().collect()
    }
}

impl From<&ContentLine> for RawItem {
    fn from(line: &ContentLine) -> Self {
        Self {
            comments: line.comments.clone(),
            lines: vec![line.text.clone()],
        }
    }
}

/// A store entry: either verbatim text or a typed entity.
///
/// Verbatim entries take a position (and therefore a global number) in their
/// collection, but are written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<T> {
    Verbatim(RawItem),
    Typed(T),
}

impl<T> Item<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            Item::Typed(value) => Some(value),
            Item::Verbatim(_) => None,
        }
    }

    pub fn typed_mut(&mut self) -> Option<&mut T> {
        match self {
            Item::Typed(value) => Some(value),
            Item::Verbatim(_) => None,
        }
    }

    pub fn is_verbatim(&self) -> bool {
        matches!(self, Item::Verbatim(_))
    }
}
