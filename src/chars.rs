use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::parser::{PResult, Parser};
use std::borrow::Cow;
use std::fmt;

// Consume the next character if `accept` allows it, otherwise record `expected`
fn next_char_if<'code>(
    cursor: &mut Cursor<'code>,
    accept: impl FnOnce(char) -> bool,
    expected: impl FnOnce() -> Expected,
) -> PResult<char> {
    match cursor.peek() {
        Some(c) if accept(c) => {
            cursor.advance(c.len_utf8());
            Ok(c)
        }
        _ => Err(cursor.fail(expected())),
    }
}

/// Parser that consumes and returns any single character
///
/// Fails only at end of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCharParser;

impl<'code> Parser<'code> for AnyCharParser {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        next_char_if(cursor, |_| true, || Expected::AnyChar)
    }
}

/// Parser that matches a specific character
#[derive(Debug, Clone, Copy)]
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl<'code> Parser<'code> for IsCharParser {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        next_char_if(
            cursor,
            |c| c == self.expected,
            || Expected::Char(self.expected),
        )
    }
}

/// Parser that matches a character within a range (inclusive)
#[derive(Debug, Clone, Copy)]
pub struct BetweenCharsParser {
    start: char,
    end: char,
}

impl BetweenCharsParser {
    pub fn new(start: char, end: char) -> Self {
        BetweenCharsParser { start, end }
    }
}

impl<'code> Parser<'code> for BetweenCharsParser {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        next_char_if(
            cursor,
            |c| (self.start..=self.end).contains(&c),
            || Expected::Range(self.start, self.end),
        )
    }
}

/// Parser that matches one character accepted by a predicate
pub struct SatisfyParser<F> {
    predicate: F,
    label: Cow<'static, str>,
}

impl<F> SatisfyParser<F> {
    pub fn new(predicate: F, label: Cow<'static, str>) -> Self {
        SatisfyParser { predicate, label }
    }
}

impl<F> fmt::Debug for SatisfyParser<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SatisfyParser")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<'code, F> Parser<'code> for SatisfyParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        next_char_if(
            cursor,
            |c| (self.predicate)(c),
            || Expected::Label(self.label.clone()),
        )
    }
}

/// Convenience function to create an AnyCharParser (the "dot" wildcard)
pub fn any_char() -> AnyCharParser {
    AnyCharParser
}

/// Convenience function to create an IsCharParser
pub fn is_char(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}

/// Convenience function to create a BetweenCharsParser
pub fn between_chars(start: char, end: char) -> BetweenCharsParser {
    BetweenCharsParser::new(start, end)
}

/// Convenience function to create a SatisfyParser. `label` names the
/// accepted class in diagnostics.
pub fn satisfy<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> SatisfyParser<F>
where
    F: Fn(char) -> bool,
{
    SatisfyParser::new(predicate, label.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char_success() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(any_char().parse(&mut cursor), Ok('h'));
        assert_eq!(cursor.peek(), Some('e'));
    }

    #[test]
    fn test_any_char_eof() {
        let mut cursor = Cursor::new("x");
        assert_eq!(any_char().parse(&mut cursor), Ok('x'));

        let result = any_char().parse(&mut cursor);
        assert!(result.is_err());
        assert_eq!(cursor.position(), 1);
        assert_eq!(
            cursor.diagnostics().unwrap().expected(),
            &[Expected::AnyChar]
        );
    }

    #[test]
    fn test_any_char_multibyte() {
        let mut cursor = Cursor::new("żółw");
        assert_eq!(any_char().parse(&mut cursor), Ok('ż'));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_is_char_success() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(is_char('h').parse(&mut cursor), Ok('h'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_is_char_failure_does_not_consume() {
        let mut cursor = Cursor::new("world");
        assert!(is_char('h').parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);

        let diagnostics = cursor.diagnostics().unwrap();
        assert_eq!(diagnostics.position(), 0);
        assert_eq!(diagnostics.expected(), &[Expected::Char('h')]);
    }

    #[test]
    fn test_is_char_at_end() {
        let mut cursor = Cursor::new("");
        assert!(is_char('a').parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_between_chars_success() {
        let mut cursor = Cursor::new("5abc");
        assert_eq!(between_chars('0', '9').parse(&mut cursor), Ok('5'));
        assert_eq!(cursor.peek(), Some('a'));
    }

    #[test]
    fn test_between_chars_bounds_inclusive() {
        let digits = between_chars('0', '9');
        assert!(digits.parse(&mut Cursor::new("0")).is_ok());
        assert!(digits.parse(&mut Cursor::new("9")).is_ok());
        assert!(digits.parse(&mut Cursor::new("/")).is_err());
        assert!(digits.parse(&mut Cursor::new(":")).is_err());
    }

    #[test]
    fn test_between_chars_failure_diagnostics() {
        let mut cursor = Cursor::new("x");
        assert!(between_chars('a', 'f').parse(&mut cursor).is_err());
        assert_eq!(
            cursor.diagnostics().unwrap().expected(),
            &[Expected::Range('a', 'f')]
        );
    }

    #[test]
    fn test_satisfy_debug_names_label() {
        let upper = satisfy(char::is_uppercase, "uppercase letter");
        assert_eq!(
            format!("{:?}", upper),
            "SatisfyParser { label: \"uppercase letter\", .. }"
        );
    }

    #[test]
    fn test_satisfy() {
        let upper = satisfy(char::is_uppercase, "uppercase letter");

        let mut cursor = Cursor::new("Ab");
        assert_eq!(upper.parse(&mut cursor), Ok('A'));
        assert!(upper.parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 1);
        assert_eq!(
            cursor.diagnostics().unwrap().expected(),
            &[Expected::Label("uppercase letter".into())]
        );
    }
}
