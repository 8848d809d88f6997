use std::borrow::Cow;
use std::fmt;

/// Description of something a parser wanted to see at a position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expected {
    /// A single specific character
    Char(char),
    /// An exact string
    Literal(Cow<'static, str>),
    /// One character within an inclusive range
    Range(char, char),
    /// Any character at all (fails only at end of input)
    AnyChar,
    /// The end of the input
    EndOfInput,
    /// Input that does not match a negated pattern
    NotFollowedBy,
    /// A character outside an excluded set
    NoneOf,
    /// A caller-provided name, usually for a grammar rule
    Label(Cow<'static, str>),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Char(c) => write!(f, "{:?}", c),
            Expected::Literal(s) => write!(f, "{:?}", s),
            Expected::Range(lo, hi) => write!(f, "{:?}..={:?}", lo, hi),
            Expected::AnyChar => f.write_str("any character"),
            Expected::EndOfInput => f.write_str("end of input"),
            Expected::NotFollowedBy => f.write_str("something else"),
            Expected::NoneOf => f.write_str("a character outside the excluded set"),
            Expected::Label(name) => f.write_str(name),
        }
    }
}

/// Snapshot of the tracker taken before running a parser, used by `label`
/// to tell which expectations were added by that parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mark {
    position: usize,
    len: usize,
}

/// Furthest-failure tracker for a single parse run
///
/// `position` is the deepest offset at which any primitive match failed.
/// `expected` lists what was wanted there, in the order first recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    position: usize,
    expected: Vec<Expected>,
    #[cfg_attr(feature = "serde", serde(skip))]
    limit: usize,
}

impl Diagnostics {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            position: 0,
            expected: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Offset of the furthest failure
    pub fn position(&self) -> usize {
        self.position
    }

    /// Everything that was expected at [`Diagnostics::position`]
    pub fn expected(&self) -> &[Expected] {
        &self.expected
    }

    /// True when no failure was recorded during the run
    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    /// Record a failure. Further positions replace the set, equal
    /// positions extend it, earlier positions are ignored.
    pub(crate) fn record(&mut self, at: usize, expected: Expected) {
        if self.expected.is_empty() || at > self.position {
            self.position = at;
            self.expected.clear();
        } else if at < self.position {
            return;
        }

        if self.expected.len() < self.limit && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            len: self.expected.len(),
        }
    }

    /// Replace whatever was recorded at `at` since `mark` with `expected`.
    /// Failures that got past `at` are more precise and are left alone.
    pub(crate) fn relabel(&mut self, at: usize, mark: Mark, expected: Expected) {
        if !self.expected.is_empty() && self.position > at {
            return;
        }
        if self.position == at {
            let keep = if mark.position == at { mark.len } else { 0 };
            self.expected.truncate(keep);
        }
        self.record(at, expected);
    }
}

/// Join expectations as `a, b or c`
pub(crate) fn join_expected(expected: &[Expected]) -> String {
    match expected {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}
