use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds. Each failed attempt is rewound, so the cursor ends up
/// right after the last successful repetition. A repetition that succeeds
/// without consuming anything ends the loop after it is collected.
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// Collect repetitions of `parser` into `results` until it fails or stalls
pub(crate) fn repeat_into<'code, P>(
    parser: &P,
    cursor: &mut Cursor<'code>,
    results: &mut Vec<P::Output>,
) where
    P: Parser<'code>,
{
    loop {
        let mut checkpoint = cursor.checkpoint();
        let start = checkpoint.start();
        match parser.parse(&mut checkpoint) {
            Ok(value) => {
                let stalled = checkpoint.position() == start;
                checkpoint.commit();
                results.push(value);
                if stalled {
                    break;
                }
            }
            // Many matches zero or more, so error is not propagated
            Err(_) => break,
        }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut results = Vec::new();
        repeat_into(&self.parser, cursor, &mut results);
        Ok(results)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
