use crate::diagnostics::{Diagnostics, Expected, join_expected};
use std::fmt;

/// Human-readable location of an offset in the input
///
/// Both fields are 1-based. `column` counts characters, not bytes, so a
/// pointer lines up with what an editor shows for the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The part of `text` before `position`, clamped to the text and to a
/// character boundary.
fn before(text: &str, position: usize) -> &str {
    let mut end = position.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Convert a byte offset into a line and column
pub fn line_col(text: &str, position: usize) -> LineCol {
    let head = before(text, position);
    let line_start = head.rfind('\n').map_or(0, |i| i + 1);

    LineCol {
        line: head.matches('\n').count() + 1,
        column: head[line_start..].chars().count() + 1,
    }
}

/// Renders a furthest failure against the text it came from
///
/// ```text
/// 2:5: expected ')' or '+'
///
///     1 | (1 +
///   > 2 |  2 ]
///              ^--- here
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    text: &'a str,
    position: usize,
    expected: &'a [Expected],
}

impl<'a> Report<'a> {
    pub fn new(text: &'a str, diagnostics: &'a Diagnostics) -> Self {
        Self::at(text, diagnostics.position(), diagnostics.expected())
    }

    /// Report a failure at `position` with an explicit expectation list
    pub fn at(text: &'a str, position: usize, expected: &'a [Expected]) -> Self {
        Report {
            text,
            position,
            expected,
        }
    }

    pub fn line_col(&self) -> LineCol {
        line_col(self.text, self.position)
    }

    /// Up to two lines either side of the failure, with a pointer under it
    fn context_lines(&self) -> Vec<String> {
        let loc = self.line_col();
        let first = loc.line.saturating_sub(2).max(1);
        let last = loc.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.text.split('\n').enumerate() {
            let current = index + 1;
            if current < first {
                continue;
            }
            if current > last {
                break;
            }

            let prefix = if current == loc.line {
                format!("  > {} | ", current)
            } else {
                format!("    {} | ", current)
            };
            lines.push(format!("{}{}", prefix, content.trim_end_matches('\r')));

            if current == loc.line {
                let offset = prefix.len() + loc.column - 1;
                lines.push(format!("{}^--- here", " ".repeat(offset)));
            }
        }

        lines
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.line_col();
        if self.expected.is_empty() {
            writeln!(f, "{}: parse failed", loc)?;
        } else {
            writeln!(f, "{}: expected {}", loc, join_expected(self.expected))?;
        }

        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
