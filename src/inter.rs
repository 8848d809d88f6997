use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items and
/// drops the separators.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"a,b,"` with separator `,` → `vec!['a', 'b']`, leaving `","` unconsumed
///
/// # Note
/// - Requires at least one element
/// - A separator that is not followed by an item is rewound
/// - Does not handle whitespace automatically
#[derive(Debug, Clone, Copy)]
pub struct Inter<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> Inter<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        Inter { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for Inter<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut results = vec![self.parser.parse(cursor)?];

        loop {
            let mut checkpoint = cursor.checkpoint();
            let start = checkpoint.start();
            if self.separator.parse(&mut checkpoint).is_err() {
                break;
            }
            let Ok(item) = self.parser.parse(&mut checkpoint) else {
                break;
            };
            let stalled = checkpoint.position() == start;
            checkpoint.commit();
            results.push(item);
            if stalled {
                break;
            }
        }

        Ok(results)
    }
}

/// Like [`Inter`], but also consumes one optional trailing separator
///
/// # Examples
/// - `"a,b,"` with separator `,` → `vec!['a', 'b']`, consuming the trailing `","`
#[derive(Debug, Clone, Copy)]
pub struct Dangling<P, PS> {
    inter: Inter<P, PS>,
}

impl<P, PS> Dangling<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        Dangling {
            inter: Inter::new(parser, separator),
        }
    }
}

impl<'code, P, PS> Parser<'code> for Dangling<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let items = self.inter.parse(cursor)?;

        let mut checkpoint = cursor.checkpoint();
        if self.inter.separator.parse(&mut checkpoint).is_ok() {
            checkpoint.commit();
        }
        Ok(items)
    }
}

/// Convenience function to create an Inter parser
pub fn inter<'code, P, PS>(parser: P, separator: PS) -> Inter<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    Inter::new(parser, separator)
}

/// Convenience function to create a Dangling parser
pub fn dangling<'code, P, PS>(parser: P, separator: PS) -> Dangling<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    Dangling::new(parser, separator)
}
