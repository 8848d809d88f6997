use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// ```
/// use retrace::{AndExt, BoxedExt, BoxedParser, MapExt, OrExt, is_char, lazy, parse};
///
/// // nested := '(' nested ')' | 'x'
/// fn nested<'code>() -> BoxedParser<'code, 'code, usize> {
///     is_char('(')
///         .then(lazy(nested))
///         .skip(is_char(')'))
///         .map(|depth| depth + 1)
///         .or(is_char('x').map(|_| 0))
///         .boxed()
/// }
///
/// assert_eq!(parse(nested(), "((x))").unwrap(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
