use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the inner result on a match and `None`, without
/// consuming anything, when the inner parser fails. Never fails itself.
///
/// Example:
/// ```
/// use retrace::{AndExt, OptionalExt, is_char, is_string, parse};
///
/// let signed = is_char('-').optional().and(is_string("42"));
/// assert_eq!(parse(&signed, "-42").unwrap(), (Some('-'), "42"));
/// assert_eq!(parse(&signed, "42").unwrap(), (None, "42"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut checkpoint = cursor.checkpoint();
        match self.parser.parse(&mut checkpoint) {
            Ok(value) => {
                checkpoint.commit();
                Ok(Some(value))
            }
            Err(_) => Ok(None),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
