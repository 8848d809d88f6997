use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Byte range of the input matched by a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `None` if the span does not fit `source`
    pub fn slice<'code>(&self, source: &'code str) -> Option<&'code str> {
        source.get(self.start..self.end)
    }
}

/// A parser combinator that captures the position span of a successful parse
#[derive(Debug, Clone, Copy)]
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span);

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let start = cursor.position();
        let output = self.parser.parse(cursor)?;
        Ok((output, Span::new(start, cursor.position())))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpannedExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpannedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned combinator
pub fn spanned<'code, P>(parser: P) -> Spanned<P>
where
    P: Parser<'code>,
{
    Spanned::new(parser)
}
