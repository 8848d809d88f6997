use crate::diagnostics::{Diagnostics, Expected, join_expected};
use crate::report::Report;
use thiserror::Error;

/// Failure of a whole parse run
///
/// Local mismatches inside a grammar are ordinary values handled by the
/// combinators. This type only comes out of the top-level driver, once
/// nothing is left to backtrack into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The top-level parser did not match
    #[error("parse failed{}", summary(.diagnostics.as_ref()))]
    NoMatch { diagnostics: Option<Diagnostics> },

    /// The top-level parser matched, but input remains after `position`
    #[error("unconsumed input at position {position}{}", summary(.diagnostics.as_ref()))]
    TrailingInput {
        position: usize,
        diagnostics: Option<Diagnostics>,
    },
}

fn summary(diagnostics: Option<&Diagnostics>) -> String {
    match diagnostics {
        Some(d) if !d.is_empty() => format!(
            ": expected {} at position {}",
            join_expected(d.expected()),
            d.position()
        ),
        _ => String::new(),
    }
}

impl ParseError {
    /// Furthest-failure data, if tracking was enabled for the run
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            ParseError::NoMatch { diagnostics } => diagnostics.as_ref(),
            ParseError::TrailingInput { diagnostics, .. } => diagnostics.as_ref(),
        }
    }

    /// The most useful offset to point a user at
    pub fn fail_position(&self) -> Option<usize> {
        match (self.diagnostics(), self) {
            (Some(d), _) if !d.is_empty() => Some(d.position()),
            (_, ParseError::TrailingInput { position, .. }) => Some(*position),
            _ => None,
        }
    }

    /// What was expected at [`ParseError::fail_position`]
    pub fn expected(&self) -> &[Expected] {
        self.diagnostics().map_or(&[], Diagnostics::expected)
    }

    /// Render this failure against the input it came from
    pub fn report<'a>(&'a self, text: &'a str) -> Report<'a> {
        Report::at(text, self.fail_position().unwrap_or(0), self.expected())
    }
}
