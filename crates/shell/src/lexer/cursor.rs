// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Character cursor over source text.

use crate::span::Position;

/// Char-addressable read head that tracks line, column and byte offset.
///
/// Positions are absolute: a cursor over a substring (the body of a command
/// substitution) starts at the substring's position in the enclosing input.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    origin: Position,
    pos: Position,
    mark: Option<Position>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, origin: Position) -> Self {
        Self {
            source,
            origin,
            pos: origin,
            mark: None,
        }
    }

    /// Current absolute position.
    pub(crate) fn position(&self) -> Position {
        self.pos
    }

    fn local(&self, pos: Position) -> usize {
        pos.offset - self.origin.offset
    }

    /// Unconsumed remainder of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.local(self.pos)..]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.rest().is_empty()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Look `n` characters ahead (`peek_nth(0) == peek()`).
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume one character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos.offset += c.len_utf8();
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        Some(c)
    }

    /// Remember the current position for a later [`Cursor::reset`].
    ///
    /// Only one mark is kept; marking again replaces it.
    pub(crate) fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    /// Return to the marked position. Without a mark this is a no-op.
    pub(crate) fn reset(&mut self) {
        if let Some(mark) = self.mark.take() {
            self.pos = mark;
        }
    }

    /// Rewind to the very beginning of the input.
    pub(crate) fn rewind(&mut self) {
        self.pos = self.origin;
        self.mark = None;
    }

    /// Source text between two absolute positions.
    pub(crate) fn slice(&self, start: Position, end: Position) -> &'a str {
        self.source
            .get(self.local(start)..self.local(end))
            .unwrap_or("")
    }

    /// Source text from `start` to the current position.
    pub(crate) fn slice_from(&self, start: Position) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
