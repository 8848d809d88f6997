use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives start from the same position. The first success wins,
/// even when the second alternative would have matched more input.
#[derive(Debug, Clone, Copy)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}
