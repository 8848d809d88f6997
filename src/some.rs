use crate::cursor::Cursor;
use crate::many::repeat_into;
use crate::parser::{PResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
#[derive(Debug, Clone, Copy)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut checkpoint = cursor.checkpoint();
        let start = checkpoint.start();

        // First parse must succeed
        let first = self.parser.parse(&mut checkpoint)?;
        let stalled = checkpoint.position() == start;
        checkpoint.commit();

        let mut results = vec![first];
        if !stalled {
            repeat_into(&self.parser, cursor, &mut results);
        }
        Ok(results)
    }
}

/// Convenience function to create a Many1 parser
pub fn some<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Extension trait to add .some() method support for parsers
pub trait SomeExt<'code>: Parser<'code> + Sized {
    fn some(self) -> Many1<Self> {
        Many1::new(self)
    }
}

/// Implement SomeExt for all parsers
impl<'code, P> SomeExt<'code> for P where P: Parser<'code> {}
