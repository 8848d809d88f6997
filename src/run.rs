use crate::config::ParseConfig;
use crate::cursor::Cursor;
use crate::diagnostics::Expected;
use crate::error::ParseError;
use crate::parser::Parser;

/// Run `parser` over the whole of `text`
///
/// Succeeds only if the parser matches and leaves nothing unconsumed. A
/// fresh cursor is created for every call, so a parser value can be run
/// any number of times, from any number of threads if it is `Sync`.
///
/// ```
/// use retrace::{AndExt, is_string, parse};
///
/// assert_eq!(parse(is_string("a").and(is_string("b")), "ab"), Ok(("a", "b")));
/// assert!(parse(is_string("a"), "ab").is_err());
/// ```
pub fn parse<'code, P>(parser: P, text: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code>,
{
    parse_with(parser, text, &ParseConfig::default())
}

/// Like [`parse`], with explicit control over failure tracking
pub fn parse_with<'code, P>(
    parser: P,
    text: &'code str,
    config: &ParseConfig,
) -> Result<P::Output, ParseError>
where
    P: Parser<'code>,
{
    log::trace!("parse: starting on {} bytes", text.len());
    let mut cursor = Cursor::with_config(text, config);

    let error = match parser.parse(&mut cursor) {
        Ok(value) if cursor.is_at_end() => return Ok(value),
        Ok(_) => {
            let position = cursor.position();
            cursor.record_failure(position, Expected::EndOfInput);
            ParseError::TrailingInput {
                position,
                diagnostics: cursor.into_diagnostics(),
            }
        }
        Err(_) => ParseError::NoMatch {
            diagnostics: cursor.into_diagnostics(),
        },
    };

    log::debug!(
        "parse: failed at {:?} of {} bytes: {}",
        error.fail_position(),
        text.len(),
        error
    );
    Err(error)
}

/// Method form of [`parse`]
pub trait RunExt<'code>: Parser<'code> {
    fn run(&self, text: &'code str) -> Result<Self::Output, ParseError> {
        parse(self, text)
    }
}

impl<'code, P> RunExt<'code> for P where P: Parser<'code> + ?Sized {}
