use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::parser::{PResult, Parser};
use std::borrow::Cow;

/// Parser combinator that names what another parser expects
///
/// When the inner parser fails without getting past its starting position,
/// the expectations it recorded there are replaced by the label, so
/// diagnostics read `expected number` instead of `expected '0'..='9' or '-'`.
/// Failures further into the input are more precise and are kept.
#[derive(Debug, Clone)]
pub struct Label<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: Cow<'static, str>) -> Self {
        Label { parser, label }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> PResult<Self::Output> {
        let start = cursor.position();
        let mark = cursor.failure_mark();
        self.parser.parse(cursor).inspect_err(|_| {
            cursor.relabel_failure(start, mark, Expected::Label(self.label.clone()));
        })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, label: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, label.into())
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, label.into())
}
