use crate::cursor::Cursor;
use crate::parser::{Mismatch, PResult, Parser};

/// A group of parsers with a common output, tried in order
///
/// Implemented for tuples of up to eight parsers, arrays and vectors.
pub trait Alternatives<'code> {
    type Output;

    /// Run each alternative from the current position and return the first
    /// success. Every failed alternative is rewound before the next is tried.
    fn parse_first(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output>;
}

// One attempt from a fresh checkpoint
fn attempt<'code, P>(parser: &P, cursor: &mut Cursor<'code>) -> Option<P::Output>
where
    P: Parser<'code>,
{
    let mut checkpoint = cursor.checkpoint();
    let value = parser.parse(&mut checkpoint).ok()?;
    checkpoint.commit();
    Some(value)
}

fn first_of<'code, 'p, P>(
    parsers: impl IntoIterator<Item = &'p P>,
    cursor: &mut Cursor<'code>,
) -> PResult<P::Output>
where
    P: Parser<'code> + 'p,
{
    let start = cursor.position();
    parsers
        .into_iter()
        .find_map(|parser| attempt(parser, cursor))
        .ok_or(Mismatch::at(start))
}

impl<'code, P, const N: usize> Alternatives<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        first_of(self, cursor)
    }
}

impl<'code, P> Alternatives<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        first_of(self, cursor)
    }
}

macro_rules! tuple_alternatives {
    ($($name:ident $index:tt),+) => {
        impl<'code, O, $($name),+> Alternatives<'code> for ($($name,)+)
        where
            $($name: Parser<'code, Output = O>,)+
        {
            type Output = O;

            fn parse_first(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
                let start = cursor.position();
                $(
                    if let Some(value) = attempt(&self.$index, cursor) {
                        return Ok(value);
                    }
                )+
                Err(Mismatch::at(start))
            }
        }
    };
}

tuple_alternatives!(A 0);
tuple_alternatives!(A 0, B 1);
tuple_alternatives!(A 0, B 1, C 2);
tuple_alternatives!(A 0, B 1, C 2, D 3);
tuple_alternatives!(A 0, B 1, C 2, D 3, E 4);
tuple_alternatives!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple_alternatives!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_alternatives!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// Ordered choice over any number of alternatives
///
/// Over single-character matchers this doubles as set membership:
/// `any_of([is_char('+'), is_char('-')])`.
#[derive(Debug, Clone, Copy)]
pub struct AnyOf<A> {
    alternatives: A,
}

impl<A> AnyOf<A> {
    pub fn new(alternatives: A) -> Self {
        AnyOf { alternatives }
    }
}

impl<'code, A> Parser<'code> for AnyOf<A>
where
    A: Alternatives<'code>,
{
    type Output = A::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        self.alternatives.parse_first(cursor)
    }
}

/// Convenience function to create an AnyOf parser
pub fn any_of<'code, A>(alternatives: A) -> AnyOf<A>
where
    A: Alternatives<'code>,
{
    AnyOf::new(alternatives)
}
