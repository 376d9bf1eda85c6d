//! Comment block written at the top of every generated deck.

use chrono::NaiveDateTime;

/// Supplies one block of header comment lines, e.g. version information of the
/// script that generated the deck. Lines are written as given, so they should
/// start with `//`.
pub trait MetadataProvider {
    fn header_block(&self) -> Vec<String>;
}

/// Fixed list of lines.
impl MetadataProvider for Vec<String> {
    fn header_block(&self) -> Vec<String> {
        self.clone()
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `// ` followed by dashes up to `width`.
pub fn comment_rule(width: usize) -> String {
    format!("// {}", "-".repeat(width.saturating_sub(3)))
}

/// Notice written in front of everything else.
pub fn banner_lines(width: usize) -> Vec<String> {
    vec![
        comment_rule(width),
        "// This input file was created with deck-io.".to_string(),
        comment_rule(width),
    ]
}

/// Maintainer, date and description, followed by one block per provider, each
/// block enclosed in rules.
pub fn header_lines(
    width: usize,
    maintainer: &str,
    description: Option<&str>,
    date: NaiveDateTime,
    providers: &[Box<dyn MetadataProvider>],
) -> Vec<String> {
    let mut model = vec![
        format!("// Maintainer: {maintainer}"),
        format!("// Date:       {}", date.format(DATE_FORMAT)),
    ];
    if let Some(description) = description {
        model.push(format!("// Description: {description}"));
    }

    let rule = comment_rule(width);
    let mut lines = vec![rule.clone()];
    for block in std::iter::once(model).chain(providers.iter().map(|p| p.header_block())) {
        lines.extend(block);
        lines.push(rule.clone());
    }
    lines
}
