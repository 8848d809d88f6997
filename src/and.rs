use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// If the second parser fails, the cursor is rewound to where the first
/// parser started, so a partial match is never visible to the caller.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nested
/// shape is explicit about parsing order; reshape it with `.map()` when needed.
///
/// Example:
/// ```
/// use retrace::{AndExt, is_char, is_string, parse};
///
/// let (((key, _), value), _) = parse(
///     is_string("key")
///         .and(is_char('='))
///         .and(is_string("value"))
///         .and(is_char(';')),
///     "key=value;",
/// )
/// .unwrap();
/// assert_eq!(key, "key");
/// assert_eq!(value, "value");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut checkpoint = cursor.checkpoint();
        let result1 = self.parser1.parse(&mut checkpoint)?;
        let result2 = self.parser2.parse(&mut checkpoint)?;
        checkpoint.commit();
        Ok((result1, result2))
    }
}

/// Sequence of two parsers keeping only the first result (`a <* b`)
#[derive(Debug, Clone, Copy)]
pub struct Skip<P1, P2> {
    inner: And<P1, P2>,
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        self.inner.parse(cursor).map(|(kept, _)| kept)
    }
}

/// Sequence of two parsers keeping only the second result (`a *> b`)
#[derive(Debug, Clone, Copy)]
pub struct Then<P1, P2> {
    inner: And<P1, P2>,
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        self.inner.parse(cursor).map(|(_, kept)| kept)
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and(), .skip() and .then() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }

    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code>,
    {
        Skip {
            inner: And::new(self, other),
        }
    }

    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then {
            inner: And::new(self, other),
        }
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
