//! Single option lines of a deck section.
//!
//! A line inside a section is either a key/value option or a comment line.
//! Blank lines are comment lines with empty text.

use std::fmt::{Display, Formatter};

use crate::error::{InpError, Result};

/// Column width the option key is padded to.
pub const KEY_WIDTH: usize = 35;

/// Marker that starts a trailing comment.
pub const COMMENT_MARKER: &str = "//";

/// How the key is separated from the value when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// Two spaces, `KEY  value`.
    #[default]
    Space,
    /// Equal sign, `KEY = value`.
    Equals,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Space => "  ",
            Separator::Equals => "= ",
        }
    }
}

/// A key/value option with an optional trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOption {
    pub key: String,
    pub value: String,
    /// Comment text including its leading `//`.
    pub comment: Option<String>,
    pub separator: Separator,
    /// Replace an existing option with the same key instead of failing.
    pub overwrite: bool,
}

impl DeckOption {
    /// Create an option from an explicit key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into().trim().to_string(),
            value: value.into().trim().to_string(),
            comment: None,
            separator: Separator::Space,
            overwrite: false,
        }
    }

    /// Append `// comment` to the option.
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(match self.comment.take() {
            Some(existing) => format!("{existing} {COMMENT_MARKER} {comment}"),
            None => format!("{COMMENT_MARKER} {comment}"),
        });
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Mark the option so that it replaces an existing option with the same key.
    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Render the option with the key padded to `key_width` columns.
    pub fn render(&self, key_width: usize) -> String {
        let mut line = format!(
            "{:<key_width$} {}{}",
            self.key,
            self.separator.as_str(),
            self.value
        );
        if let Some(comment) = &self.comment {
            line.push(' ');
            line.push_str(comment);
        }
        line
    }
}

impl Display for DeckOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(KEY_WIDTH))
    }
}

/// One line of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLine {
    Option(DeckOption),
    /// Comment-only or blank line, stored as trimmed text.
    Comment(String),
}

impl SectionLine {
    /// Parse a free-text line.
    ///
    /// A trailing comment starting at the first `//` is split off first. If the
    /// remaining text contains `=` it is split there, otherwise a text made of
    /// exactly two whitespace separated tokens is split between them. Any other
    /// text becomes a comment line holding the whole trimmed input.
    pub fn parse(text: &str) -> Result<Self> {
        let (body, comment) = match text.find(COMMENT_MARKER) {
            Some(pos) => (&text[..pos], Some(text[pos..].to_string())),
            None => (text, None),
        };

        if body.contains('=') {
            let fields: Vec<&str> = body.split('=').map(str::trim).collect();
            return match fields.as_slice() {
                [key, value] if !key.is_empty() => Ok(Self::Option(DeckOption {
                    key: key.to_string(),
                    value: value.to_string(),
                    comment,
                    separator: Separator::Equals,
                    overwrite: false,
                })),
                _ => Err(InpError::Format {
                    text: text.to_string(),
                }),
            };
        }

        let tokens: Vec<&str> = body.split_whitespace().collect();
        match tokens.as_slice() {
            [key, value] => Ok(Self::Option(DeckOption {
                key: key.to_string(),
                value: value.to_string(),
                comment,
                separator: Separator::Space,
                overwrite: false,
            })),
            _ => Ok(Self::Comment(text.trim().to_string())),
        }
    }

    /// Key used for collision checks; comment lines have none.
    pub fn key(&self) -> Option<&str> {
        match self {
            SectionLine::Option(option) => Some(option.key.as_str()),
            SectionLine::Comment(_) => None,
        }
    }

    pub fn as_option(&self) -> Option<&DeckOption> {
        match self {
            SectionLine::Option(option) => Some(option),
            SectionLine::Comment(_) => None,
        }
    }

    pub fn overwrites(&self) -> bool {
        matches!(self, SectionLine::Option(option) if option.overwrite)
    }

    pub(crate) fn mark_overwrite(&mut self) {
        if let SectionLine::Option(option) = self {
            option.overwrite = true;
        }
    }

    pub fn render(&self, key_width: usize) -> String {
        match self {
            SectionLine::Option(option) => option.render(key_width),
            SectionLine::Comment(text) => text.clone(),
        }
    }
}

impl From<DeckOption> for SectionLine {
    fn from(option: DeckOption) -> Self {
        SectionLine::Option(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(line: SectionLine) -> DeckOption {
        match line {
            SectionLine::Option(option) => option,
            SectionLine::Comment(text) => panic!("expected option, got comment {text:?}"),
        }
    }

    #[test]
    fn splits_two_tokens() {
        let opt = option(SectionLine::parse("INT_STRATEGY    Standard").expect("parse"));
        assert_eq!(opt.key, "INT_STRATEGY");
        assert_eq!(opt.value, "Standard");
        assert_eq!(opt.separator, Separator::Space);
        assert_eq!(opt.comment, None);
    }

    #[test]
    fn splits_at_equal_sign_and_keeps_comment() {
        let opt = option(
            SectionLine::parse("Outer Iteration StatusTest = No // checked later").expect("parse"),
        );
        assert_eq!(opt.key, "Outer Iteration StatusTest");
        assert_eq!(opt.value, "No");
        assert_eq!(opt.separator, Separator::Equals);
        assert_eq!(opt.comment.as_deref(), Some("// checked later"));
    }

    #[test]
    fn other_text_becomes_comment_line() {
        assert_eq!(
            SectionLine::parse("  var // comment ").expect("parse"),
            SectionLine::Comment("var // comment".to_string())
        );
        assert_eq!(
            SectionLine::parse("COMPONENT 0 FUNCTION t").expect("parse"),
            SectionLine::Comment("COMPONENT 0 FUNCTION t".to_string())
        );
        assert_eq!(
            SectionLine::parse("").expect("parse"),
            SectionLine::Comment(String::new())
        );
    }

    #[test]
    fn rejects_more_than_one_equal_sign() {
        let err = SectionLine::parse("a = b = c").expect_err("should fail");
        assert!(matches!(err, InpError::Format { .. }));
    }

    #[test]
    fn rejects_missing_key() {
        let err = SectionLine::parse(" = 5").expect_err("should fail");
        assert!(matches!(err, InpError::Format { .. }));
    }

    #[test]
    fn renders_padded_key() {
        let opt = DeckOption::new("DIM", "3");
        assert_eq!(opt.to_string(), format!("{:<35}   3", "DIM"));

        let opt = DeckOption::new("XML File", "run.xml")
            .with_separator(Separator::Equals)
            .with_comment("side file");
        assert_eq!(
            opt.render(10),
            "XML File   = run.xml // side file".to_string()
        );
    }

    #[test]
    fn explicit_comment_is_appended_after_parsed_one() {
        let opt = option(SectionLine::parse("test 2 //first").expect("parse")).with_comment("second");
        assert_eq!(opt.comment.as_deref(), Some("//first // second"));
    }
}
