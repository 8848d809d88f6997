use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::parser::{PResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// Yields the matched slice of the input. Running out of input part-way
/// through is an ordinary mismatch.
#[derive(Debug, Clone)]
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        match cursor.remaining().get(..self.expected.len()) {
            Some(head) if head == self.expected => {
                cursor.advance(head.len());
                Ok(head)
            }
            _ => Err(cursor.fail(Expected::Literal(self.expected.clone()))),
        }
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
