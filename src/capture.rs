use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that returns the input consumed by another parser
///
/// The inner parser's own value is discarded; only the exact slice of input
/// it matched is returned.
#[derive(Debug, Clone, Copy)]
pub struct Capture<P> {
    parser: P,
}

impl<P> Capture<P> {
    pub fn new(parser: P) -> Self {
        Capture { parser }
    }
}

impl<'code, P> Parser<'code> for Capture<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut checkpoint = cursor.checkpoint();
        self.parser.parse(&mut checkpoint)?;
        let consumed = checkpoint.consumed();
        checkpoint.commit();
        Ok(consumed)
    }
}

/// Convenience function to create a Capture parser
pub fn stry<'code, P>(parser: P) -> Capture<P>
where
    P: Parser<'code>,
{
    Capture::new(parser)
}

/// Extension trait to add .stry() method support for parsers
pub trait CaptureExt<'code>: Parser<'code> + Sized {
    fn stry(self) -> Capture<Self> {
        Capture::new(self)
    }
}

/// Implement CaptureExt for all parsers
impl<'code, P> CaptureExt<'code> for P where P: Parser<'code> {}
