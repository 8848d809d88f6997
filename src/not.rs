use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::parser::{Mismatch, PResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
///
/// The inner parser runs with diagnostics suspended, since its failures
/// are what this combinator is looking for.
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let start = cursor.position();
        let matched = cursor.quietly(|cursor| {
            let mut probe = cursor.checkpoint();
            self.parser.parse(&mut probe).is_ok()
        });
        debug_assert_eq!(cursor.position(), start);

        if matched {
            cursor.record_failure(start, Expected::NotFollowedBy);
            Err(Mismatch::at(start))
        } else {
            Ok(())
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn negate<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .negate() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn negate(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
