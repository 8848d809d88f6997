use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::parser::{PResult, Parser};

/// Parser that succeeds only at the end of input, consuming nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct EofParser;

impl<'code> Parser<'code> for EofParser {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        if cursor.is_at_end() {
            Ok(())
        } else {
            Err(cursor.fail(Expected::EndOfInput))
        }
    }
}

/// Convenience function to create an EofParser
pub fn eof() -> EofParser {
    EofParser
}
