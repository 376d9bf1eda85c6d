//! Function blocks (`FUNCT<n>` sections).

/// Body of one function block. The block header carries the global number,
/// so the lines themselves are written unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Function {
    pub lines: Vec<String>,
}

impl Function {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a text block into function lines, dropping surrounding blank lines.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
        Self::new(lines[start..end].iter().copied())
    }

    pub fn dat_lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}
