//! Named sections made of option and comment lines.

use crate::error::{InpError, Result};
use crate::option::{DeckOption, SectionLine};

/// Total width of a section header line.
pub const SECTION_WIDTH: usize = 80;

/// Prefix that marks a section header line.
pub const HEADER_PREFIX: &str = "--";

/// Build the header line for a section, `-----...NAME`.
pub fn section_header(name: &str, width: usize) -> String {
    let dashes = width
        .saturating_sub(name.chars().count())
        .max(HEADER_PREFIX.len());
    format!("{}{}", "-".repeat(dashes), name)
}

/// Recover the section name from a header line.
pub fn section_name(header: &str) -> &str {
    header.trim().trim_start_matches('-')
}

/// Whether options with an existing key are rejected or appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Keys are unique; an existing key can only be replaced by an overwriting option.
    #[default]
    Unique,
    /// Every line is appended, the position is its only identity.
    Repeated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<SectionLine>,
    policy: KeyPolicy,
}

impl Section {
    /// Create an empty section with unique keys.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            policy: KeyPolicy::Unique,
        }
    }

    /// Create an empty section that accepts repeated keys (e.g. knot vectors).
    pub fn multi_key(name: impl Into<String>) -> Self {
        Self {
            policy: KeyPolicy::Repeated,
            ..Self::new(name)
        }
    }

    /// Create a section and fill it from free text.
    pub fn from_text(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut section = Self::new(name);
        section.add_text(text)?;
        Ok(section)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    pub fn is_multi_key(&self) -> bool {
        self.policy == KeyPolicy::Repeated
    }

    pub fn lines(&self) -> &[SectionLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionLine> {
        self.lines.iter()
    }

    pub fn options(&self) -> impl Iterator<Item = &DeckOption> {
        self.lines.iter().filter_map(SectionLine::as_option)
    }

    /// First option with the given key.
    pub fn get(&self, key: &str) -> Option<&DeckOption> {
        self.options().find(|option| option.key == key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|option| option.value.as_str())
    }

    /// Split `text` into lines and add every line.
    ///
    /// A single blank line at the start and at the end of the text is ignored.
    pub fn add_text(&mut self, text: &str) -> Result<()> {
        self.add_parsed(text.split('\n'), false)
    }

    /// Like [`Section::add_text`], with every parsed option replacing existing keys.
    pub fn add_text_overwrite(&mut self, text: &str) -> Result<()> {
        self.add_parsed(text.split('\n'), true)
    }

    /// Add a list of line strings, with the same blank-edge handling as [`Section::add_text`].
    pub fn add_lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_parsed(lines, false)
    }

    pub fn add_lines_overwrite<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_parsed(lines, true)
    }

    pub fn add_option(&mut self, option: DeckOption) -> Result<()> {
        self.add_line(SectionLine::Option(option))
    }

    /// Place a single line according to the key policy.
    pub fn add_line(&mut self, line: SectionLine) -> Result<()> {
        let existing = match (self.policy, line.key()) {
            (KeyPolicy::Unique, Some(key)) => self.position(key),
            _ => None,
        };

        match existing {
            None => self.lines.push(line),
            Some(index) if line.overwrites() => self.lines[index] = line,
            Some(_) => {
                return Err(InpError::DuplicateKey {
                    section: self.name.clone(),
                    key: line.key().unwrap_or_default().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Fold the lines of `other` into this section. Lines already present keep
    /// their position.
    pub fn merge_section(&mut self, other: Section) -> Result<()> {
        for line in other.lines {
            self.add_line(line)?;
        }
        Ok(())
    }

    /// Header followed by the rendered lines.
    pub fn dat_lines(&self, width: usize, key_width: usize) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 1);
        out.push(section_header(&self.name, width));
        out.extend(self.lines.iter().map(|line| line.render(key_width)));
        out
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.key() == Some(key))
    }

    fn add_parsed<I, S>(&mut self, lines: I, overwrite: bool) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines: Vec<S> = lines.into_iter().collect();
        if lines.first().is_some_and(|l| l.as_ref().trim().is_empty()) {
            lines.remove(0);
        }
        if lines.last().is_some_and(|l| l.as_ref().trim().is_empty()) {
            lines.pop();
        }

        for text in lines {
            let mut line = SectionLine::parse(text.as_ref())?;
            if overwrite {
                line.mark_overwrite();
            }
            self.add_line(line)?;
        }
        Ok(())
    }
}
