use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns ()
///
/// The neutral element for sequencing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpsParser;

impl<'code> Parser<'code> for EpsParser {
    type Output = ();

    fn parse(&self, _cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        Ok(())
    }
}

/// Parser that always succeeds without consuming input and returns a clone of a value
#[derive(Debug, Clone)]
pub struct PureParser<T> {
    value: T,
}

impl<'code, T> Parser<'code> for PureParser<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        Ok(self.value.clone())
    }
}

/// Parser that always succeeds without consuming input and returns the default value of T
#[derive(Debug)]
pub struct DefaultParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> DefaultParser<T> {
    pub fn new() -> Self {
        DefaultParser {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for DefaultParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T> Parser<'code> for DefaultParser<T>
where
    T: Default,
{
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        Ok(T::default())
    }
}

/// Convenience function to create an EpsParser
pub fn eps() -> EpsParser {
    EpsParser
}

/// Convenience function to create a PureParser
pub fn pure<T: Clone>(value: T) -> PureParser<T> {
    PureParser { value }
}

/// Convenience function to create a default parser
pub fn default<T>() -> DefaultParser<T>
where
    T: Default,
{
    DefaultParser::new()
}
