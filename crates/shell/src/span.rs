// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for the lexer, parser and diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the source text.
///
/// `offset` is a byte offset for slicing; `line` and `column` are 1-based and
/// count characters, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range in the source text.
///
/// # Examples
///
/// ```ignore
/// use fsh_shell::{Position, Span};
///
/// let source = "cat notes";
/// let span = Span::new(Position::new(4, 1, 5), Position::new(9, 1, 10));
/// assert_eq!(span.slice(source), "notes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span from start to end positions.
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Check if this span contains a byte offset.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start.offset..self.end.offset).unwrap_or("")
    }
}

/// Generate a context snippet showing the error location in source text.
///
/// # Example
///
/// ```text
/// cat a | | tail
///         ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let at = span.start.offset.min(input.len());
    let start = input[..at]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0);

    let end = input[at..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| at + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet = &input[start..end];
    let caret_pos = input[start..at].chars().count();
    let caret_len = span.len().max(1);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

/// Content of the line a position sits on (without trailing newline).
pub fn line_content(source: &str, pos: Position) -> &str {
    source.lines().nth(pos.line.saturating_sub(1)).unwrap_or("")
}

/// Generate a rich diagnostic message with line/column info.
///
/// Produces output in a format similar to rustc errors:
///
/// ```text
/// error: unexpected token '|'
///   --> line 1, column 9
///    |
///  1 | cat a | | tail
///    |         ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let line = line_content(source, span.start);
    let col = span.start.column.saturating_sub(1);
    let span_len = span.len().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        span.start.line,
        span.start.column,
        span.start.line,
        line,
        " ".repeat(col),
        "^".repeat(span_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
