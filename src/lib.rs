//! # Retrace - Backtracking Parser Combinators
//!
//! Retrace builds recursive-descent parsers for text out of small, typed
//! parser values. Every combinator either succeeds and moves the cursor
//! forward, or fails and leaves the cursor exactly where it was, so choice,
//! repetition and lookahead can backtrack freely.
//!
//! - **Typed results**: each parser produces a value of its own output type
//! - **Furthest-failure diagnostics**: a failed run reports the deepest
//!   position reached and everything that was expected there
//! - **No panics on input**: running off the end of the text is an ordinary
//!   mismatch
//!
//! ```
//! use retrace::{AndExt, CaptureExt, MapExt, SomeExt, between_chars, inter, is_char, parse};
//!
//! let number = between_chars('0', '9').some().stry().map(|s: &str| s.len());
//! let list = is_char('[').then(inter(number, is_char(','))).skip(is_char(']'));
//!
//! assert_eq!(parse(&list, "[1,22,333]"), Ok(vec![1, 2, 3]));
//!
//! let error = parse(&list, "[1,22;").unwrap_err();
//! assert_eq!(error.fail_position(), Some(5));
//! ```

pub mod and;
pub mod any_of;
pub mod between;
pub mod capture;
pub mod chars;
pub mod config;
pub mod cursor;
pub mod diagnostics;
pub mod eof;
pub mod eps;
pub mod error;
pub mod filter;
pub mod inter;
pub mod label;
pub mod lazy;
pub mod many;
pub mod map;
pub mod none_of;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod report;
pub mod run;
pub mod some;
pub mod span;
pub mod string;

pub use and::{And, AndExt, Skip, Then, and};
pub use any_of::{Alternatives, AnyOf, any_of};
pub use between::{Between, between};
pub use capture::{Capture, CaptureExt, stry};
pub use chars::{any_char, between_chars, is_char, satisfy};
pub use config::ParseConfig;
pub use cursor::{Checkpoint, Cursor};
pub use diagnostics::{Diagnostics, Expected};
pub use eof::eof;
pub use eps::{default, eps, pure};
pub use error::ParseError;
pub use filter::{FilterExt, FilterParser, filter};
pub use inter::{Dangling, Inter, dangling, inter};
pub use label::{Label, LabelExt, label};
pub use lazy::{Lazy, lazy};
pub use many::{Many, ManyExt, many};
pub use map::{Map, MapExt, map};
pub use none_of::{NoneOf, none_of};
pub use not::{Not, NotExt, negate};
pub use optional::{Optional, OptionalExt, optional};
pub use or::{Or, OrExt, or};
pub use parser::{BoxedExt, BoxedParser, FromFn, Mismatch, PResult, Parser, from_fn};
pub use report::{LineCol, Report, line_col};
pub use run::{RunExt, parse, parse_with};
pub use some::{Many1, SomeExt, some};
pub use span::{Span, Spanned, SpannedExt, spanned};
pub use string::is_string;
