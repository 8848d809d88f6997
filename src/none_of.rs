use crate::any_of::Alternatives;
use crate::chars::any_char;
use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::parser::{Mismatch, PResult, Parser};

/// Parser that consumes one character when none of the given parsers match
///
/// This is a fused "negate each, then consume one" operation, not a plain
/// negative lookahead: on success it always consumes exactly one character
/// via [`any_char`], and it fails at end of input.
#[derive(Debug, Clone, Copy)]
pub struct NoneOf<A> {
    excluded: A,
}

impl<A> NoneOf<A> {
    pub fn new(excluded: A) -> Self {
        NoneOf { excluded }
    }
}

impl<'code, A> Parser<'code> for NoneOf<A>
where
    A: Alternatives<'code>,
{
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let start = cursor.position();
        let excluded = cursor.quietly(|cursor| {
            let mut probe = cursor.checkpoint();
            self.excluded.parse_first(&mut probe).is_ok()
        });

        if excluded {
            cursor.record_failure(start, Expected::NoneOf);
            return Err(Mismatch::at(start));
        }
        any_char().parse(cursor)
    }
}

/// Convenience function to create a NoneOf parser
pub fn none_of<'code, A>(excluded: A) -> NoneOf<A>
where
    A: Alternatives<'code>,
{
    NoneOf::new(excluded)
}
