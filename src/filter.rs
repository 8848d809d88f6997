use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::parser::{Mismatch, PResult, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value counts as a failure: the input is rewound and `label`
/// is recorded as the expectation at the starting position.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    label: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, label: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            label,
        }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for FilterParser<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterParser")
            .field("parser", &self.parser)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<'code, P, F, T> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut checkpoint = cursor.checkpoint();
        let start = checkpoint.start();
        let value = self.parser.parse(&mut checkpoint)?;

        if (self.predicate)(&value) {
            checkpoint.commit();
            Ok(value)
        } else {
            drop(checkpoint);
            cursor.record_failure(start, Expected::Label(self.label.clone()));
            Err(Mismatch::at(start))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(self, predicate: F, label: impl Into<Cow<'static, str>>) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, label.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    label: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, label.into())
}
