// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types and result structures.

use crate::ast::Program;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
use crate::span::{context_snippet, diagnostic_context, Span};
use crate::token::TokenKind;
use thiserror::Error;

/// Parser errors.
///
/// Every variant carries the span it refers to. Use [`ParseError::context`]
/// to generate a snippet showing where the error occurred.
///
/// # Examples
///
/// ```ignore
/// use fsh_shell::{Parser, ParseError};
///
/// let result = Parser::parse("ls |");
/// assert!(matches!(result, Err(ParseError::UnexpectedEof { .. })));
///
/// let result = Parser::parse("ls | | pwd");
/// assert!(matches!(result, Err(ParseError::UnexpectedToken { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended where more was required.
    ///
    /// # Example
    /// ```ignore
    /// let result = Parser::parse("cat a >");
    /// assert!(matches!(result, Err(ParseError::UnexpectedEof { .. })));
    /// ```
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
        span: Span,
    },

    /// A token that does not fit the grammar at this point.
    #[error("unexpected token {found} at {}, expected {expected}", span.start)]
    UnexpectedToken {
        found: TokenKind,
        expected: String,
        span: Span,
    },

    /// A `)` with no opening `(`, or a `(` never closed.
    #[error("unmatched parenthesis at {}", span.start)]
    UnmatchedParen { span: Span },

    /// Input ended inside a quoted string.
    #[error("unterminated quote at {}", span.start)]
    UnterminatedQuote { span: Span },

    /// Command substitutions nested deeper than the limit.
    ///
    /// # Example
    /// ```ignore
    /// let deep = format!("{}pwd{}", "cat (".repeat(11), ")".repeat(11));
    /// let result = Parser::parse(&deep);
    /// assert!(matches!(result, Err(ParseError::SubstitutionDepthExceeded { .. })));
    /// ```
    #[error("command substitution nested deeper than {limit} levels at {}", span.start)]
    SubstitutionDepthExceeded { limit: usize, span: Span },
}

impl ParseError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedEof { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnmatchedParen { span }
            | ParseError::UnterminatedQuote { span }
            | ParseError::SubstitutionDepthExceeded { span, .. } => *span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            ParseError::UnexpectedEof { .. } => DiagnosticCode::UnexpectedEof,
            ParseError::UnexpectedToken { .. } => DiagnosticCode::UnexpectedToken,
            ParseError::UnmatchedParen { .. } => DiagnosticCode::UnmatchedParen,
            ParseError::UnterminatedQuote { .. } => DiagnosticCode::UnterminatedQuote,
            ParseError::SubstitutionDepthExceeded { .. } => {
                DiagnosticCode::SubstitutionDepthExceeded
            }
        }
    }

    /// Convert into the diagnostic reported to a collector.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string(), self.span())
    }

    /// Generate a context snippet showing where the error occurred.
    ///
    /// ```text
    /// ls | | pwd
    ///      ^
    /// ```
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }

    /// Generate a rich diagnostic with line/column info.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

/// Outcome of [`Parser::parse_with_recovery`](crate::Parser::parse_with_recovery).
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed program, or `None` when the top-level structure could not
    /// be recovered.
    pub program: Option<Program>,
    /// Everything reported while parsing, nested substitutions included.
    pub diagnostics: Diagnostics,
}

impl ParseResult {
    /// Whether parsing produced a program with no errors.
    pub fn is_clean(&self) -> bool {
        self.program.is_some() && !self.diagnostics.has_errors()
    }
}
