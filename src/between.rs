use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value
/// with the delimiters discarded. A missing close delimiter rewinds the
/// whole match. Whitespace is not handled.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
#[derive(Debug, Clone, Copy)]
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let mut checkpoint = cursor.checkpoint();
        self.open.parse(&mut checkpoint)?;
        let content = self.content.parse(&mut checkpoint)?;
        self.close.parse(&mut checkpoint)?;
        checkpoint.commit();
        Ok(content)
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}
