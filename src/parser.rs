use crate::cursor::Cursor;
use std::rc::Rc;
use std::sync::Arc;
use thiserror::Error;

/// Local, recoverable failure of a single parser
///
/// Carries the position at which the failing parser was entered. What was
/// expected there lives in the cursor's diagnostics, not here, so that
/// failing stays cheap on the backtracking path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no match at position {position}")]
pub struct Mismatch {
    position: usize,
}

impl Mismatch {
    pub fn at(position: usize) -> Self {
        Self { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// Result of running a parser
pub type PResult<T> = Result<T, Mismatch>;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value that can be run any number of times
/// against any cursor.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse at the cursor's current position
    ///
    /// On success the cursor has moved past the matched input. On failure
    /// the cursor must be exactly where it was when `parse` was called.
    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, handy for recursive or runtime-built grammars
pub type BoxedParser<'p, 'code, O> = Box<dyn Parser<'code, Output = O> + 'p>;

/// Parser built from a plain function or closure
///
/// The function must honour the same contract as [`Parser::parse`]:
/// leave the cursor untouched when returning `Err`.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<'code, F, O> Parser<'code> for FromFn<F>
where
    F: Fn(&mut Cursor<'code>) -> PResult<O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        (self.f)(cursor)
    }
}

/// Convenience function to create a parser from a closure
pub fn from_fn<'code, F, O>(f: F) -> FromFn<F>
where
    F: Fn(&mut Cursor<'code>) -> PResult<O>,
{
    FromFn { f }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, 'code, Self::Output>
    where
        Self: 'p,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::diagnostics::Expected;

    #[test]
    fn test_from_fn() {
        let digit = from_fn(|cursor| match cursor.peek() {
            Some(c) if c.is_ascii_digit() => {
                cursor.advance(1);
                Ok(c)
            }
            _ => Err(cursor.fail(Expected::Label("digit".into()))),
        });

        let mut cursor = Cursor::new("7x");
        assert_eq!(digit.parse(&mut cursor), Ok('7'));
        assert_eq!(digit.parse(&mut cursor), Err(Mismatch::at(1)));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_reference_and_box() {
        let parser = is_char('a');
        let by_ref = &parser;
        let boxed = is_char('a').boxed();

        let mut cursor = Cursor::new("aa");
        assert_eq!(by_ref.parse(&mut cursor), Ok('a'));
        assert_eq!(boxed.parse(&mut cursor), Ok('a'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_shared_parser() {
        let shared = Arc::new(is_char('z'));
        let mut first = Cursor::new("z");
        let mut second = Cursor::new("y");

        assert!(shared.parse(&mut first).is_ok());
        assert!(shared.parse(&mut second).is_err());
        assert_eq!(second.position(), 0);
    }

    #[test]
    fn test_mismatch_display() {
        assert_eq!(Mismatch::at(3).to_string(), "no match at position 3");
    }
}
