use crate::config::ParseConfig;
use crate::diagnostics::{Diagnostics, Expected, Mark};
use crate::parser::Mismatch;
use std::ops::{Deref, DerefMut};

/// Scan state threaded through one parse run
///
/// The cursor owns the read position into `text` and, optionally, the
/// furthest-failure diagnostics for the run. Parsers receive it by mutable
/// reference, move the position forward on success and must leave it
/// untouched on failure. Positions are byte offsets and always sit on a
/// `char` boundary.
#[derive(Debug)]
pub struct Cursor<'code> {
    text: &'code str,
    position: usize,
    diagnostics: Option<Diagnostics>,
    quiet_depth: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `text` with default diagnostics
    pub fn new(text: &'code str) -> Self {
        Self::with_config(text, &ParseConfig::default())
    }

    pub fn with_config(text: &'code str, config: &ParseConfig) -> Self {
        Self {
            text,
            position: 0,
            diagnostics: config
                .track_failures
                .then(|| Diagnostics::new(config.max_expected)),
            quiet_depth: 0,
        }
    }

    /// The whole input
    pub fn text(&self) -> &'code str {
        self.text
    }

    /// Byte offset of the next unconsumed character
    pub fn position(&self) -> usize {
        self.position
    }

    /// Input from the current position to the end
    pub fn remaining(&self) -> &'code str {
        self.text.get(self.position..).unwrap_or("")
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.text.len()
    }

    /// Next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Input between two byte offsets, or `None` when the range is out of
    /// bounds or splits a character
    pub fn slice(&self, from: usize, to: usize) -> Option<&'code str> {
        self.text.get(from..to)
    }

    /// Move forward by `n` bytes. Only call this after a successful match.
    pub fn advance(&mut self, n: usize) {
        let target = self.position.saturating_add(n).min(self.text.len());
        debug_assert!(self.text.is_char_boundary(target));
        self.position = target;
    }

    /// Move back to an earlier position
    ///
    /// Targets ahead of the cursor or inside a character are ignored.
    pub fn rewind(&mut self, to: usize) {
        if to <= self.position && self.text.is_char_boundary(to) {
            self.position = to;
        }
    }

    /// Note that `expected` was not found at offset `at`
    pub fn record_failure(&mut self, at: usize, expected: Expected) {
        if self.quiet_depth > 0 {
            return;
        }
        if let Some(diagnostics) = self.diagnostics.as_mut() {
            diagnostics.record(at, expected);
        }
    }

    /// Record a failure at the current position and produce the mismatch
    pub fn fail(&mut self, expected: Expected) -> Mismatch {
        self.record_failure(self.position, expected);
        Mismatch::at(self.position)
    }

    /// Run `f` without recording any failures
    pub fn quietly<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.quiet_depth += 1;
        let result = f(self);
        self.quiet_depth -= 1;
        result
    }

    /// Snapshot the position. The returned guard rewinds the cursor when
    /// dropped unless [`Checkpoint::commit`] is called first.
    pub fn checkpoint(&mut self) -> Checkpoint<'_, 'code> {
        let start = self.position;
        Checkpoint {
            cursor: self,
            start,
            committed: false,
        }
    }

    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        self.diagnostics.as_ref()
    }

    pub fn into_diagnostics(self) -> Option<Diagnostics> {
        self.diagnostics
    }

    pub(crate) fn failure_mark(&self) -> Option<Mark> {
        self.diagnostics.as_ref().map(Diagnostics::mark)
    }

    pub(crate) fn relabel_failure(&mut self, at: usize, mark: Option<Mark>, expected: Expected) {
        if self.quiet_depth > 0 {
            return;
        }
        if let (Some(diagnostics), Some(mark)) = (self.diagnostics.as_mut(), mark) {
            diagnostics.relabel(at, mark, expected);
        }
    }
}

/// Scoped position snapshot
///
/// Derefs to the underlying [`Cursor`], so it can be handed straight to
/// [`Parser::parse`](crate::Parser::parse). Dropping it without a commit
/// restores the position captured when it was taken.
#[derive(Debug)]
pub struct Checkpoint<'c, 'code> {
    cursor: &'c mut Cursor<'code>,
    start: usize,
    committed: bool,
}

impl<'c, 'code> Checkpoint<'c, 'code> {
    /// Position at which the checkpoint was taken
    pub fn start(&self) -> usize {
        self.start
    }

    /// Text consumed since the checkpoint was taken
    pub fn consumed(&self) -> &'code str {
        self.cursor
            .slice(self.start, self.cursor.position)
            .unwrap_or("")
    }

    /// Keep everything consumed since the checkpoint
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<'code> Deref for Checkpoint<'_, 'code> {
    type Target = Cursor<'code>;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl<'code> DerefMut for Checkpoint<'_, 'code> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl Drop for Checkpoint<'_, '_> {
    fn drop(&mut self) {
        if !self.committed {
            self.cursor.rewind(self.start);
        }
    }
}
