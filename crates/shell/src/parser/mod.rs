// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell parser that transforms tokens into an Abstract Syntax Tree.

mod command;
mod words;

use crate::ast::{Pipeline, Program};
use crate::diagnostics::Diagnostics;
use crate::lexer::Lexer;
use crate::parse_error::{ParseError, ParseResult};
use crate::span::{Position, Span};
use crate::token::{Token, TokenKind};

/// Maximum nesting of `(...)` command substitutions, enforced both here and
/// by the executor.
pub const MAX_SUBSTITUTION_DEPTH: usize = 10;

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the [`Lexer`] on demand. Each command substitution
/// body is handed to a fresh parser one level deeper that shares this
/// parser's diagnostic collector.
///
/// # Examples
///
/// ## Basic parsing
///
/// ```ignore
/// use fsh_shell::Parser;
///
/// let ast = Parser::parse("cat /notes.txt | tail -n 3")?;
/// assert_eq!(ast.count_commands(), 2);
/// # Ok::<(), fsh_shell::ParseError>(())
/// ```
///
/// ## Error recovery
///
/// ```ignore
/// use fsh_shell::Parser;
///
/// let result = Parser::parse_with_recovery("cat (ls |) (pwd");
/// assert!(result.program.is_some());
/// assert_eq!(result.diagnostics.len(), 2);
/// ```
pub struct Parser<'src, 'diag> {
    lexer: Lexer<'src>,
    /// Lookahead token.
    current: Token,
    /// End of the most recently consumed token.
    last_end: Position,
    /// Substitution nesting level of this parser (0 at top level).
    depth: usize,
    diagnostics: &'diag mut Diagnostics,
    /// Keep going past broken words instead of failing.
    recover: bool,
}

impl<'src, 'diag> Parser<'src, 'diag> {
    fn new(
        source: &'src str,
        origin: Position,
        depth: usize,
        diagnostics: &'diag mut Diagnostics,
        recover: bool,
    ) -> Self {
        let mut lexer = Lexer::with_origin(source, origin);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            last_end: origin,
            depth,
            diagnostics,
            recover,
        }
    }

    /// Parse input into a program.
    ///
    /// Returns the first error encountered. For lenient parsing that
    /// collects every problem, use [`Parser::parse_with_recovery`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use fsh_shell::Parser;
    ///
    /// // Pipeline
    /// let ast = Parser::parse("ls /logs | head -n 2")?;
    /// assert_eq!(ast.count_commands(), 2);
    ///
    /// // Substitutions are parsed eagerly
    /// let ast = Parser::parse("cat (ls /logs)")?;
    /// assert_eq!(ast.max_substitution_depth(), 1);
    /// # Ok::<(), fsh_shell::ParseError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Program, ParseError> {
        let mut diagnostics = Diagnostics::new();
        Parser::new(source, Position::START, 0, &mut diagnostics, false).parse_program()
    }

    /// Parse with error recovery.
    ///
    /// Unterminated quotes, unbalanced parentheses and broken substitution
    /// bodies are reported and parsing continues; a broken substitution is
    /// kept as quoted literal text. Structural errors in the top-level
    /// pipeline still end parsing, leaving `program` empty.
    pub fn parse_with_recovery(source: &str) -> ParseResult {
        let mut diagnostics = Diagnostics::new();
        let program = Parser::new(source, Position::START, 0, &mut diagnostics, true)
            .parse_program()
            .ok();
        ParseResult {
            program,
            diagnostics,
        }
    }

    /// Parse a substitution body one level deeper than this parser.
    fn parse_nested(&mut self, source: &str, origin: Position) -> Result<Program, ParseError> {
        tracing::trace!(depth = self.depth + 1, %origin, "parsing substitution body");
        Parser::new(
            source,
            origin,
            self.depth + 1,
            &mut *self.diagnostics,
            self.recover,
        )
        .parse_program()
    }

    /// program ::= pipeline EOF
    fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.skip_trivia();
        let start = self.current.span.start;

        let pipeline = if self.check(TokenKind::Eof) {
            Pipeline {
                commands: Vec::new(),
                span: Span::empty(start),
            }
        } else {
            self.parse_pipeline()?
        };

        self.skip_trivia();
        self.expect(TokenKind::Eof, "end of input")?;

        Ok(Program {
            span: Span::new(start, self.last_end.max(start)),
            pipeline,
        })
    }

    /// pipeline ::= command ('|' command)*
    fn parse_pipeline(&mut self) -> Result<Pipeline, ParseError> {
        let first = self.parse_command()?;
        let mut span = first.span;
        let mut commands = vec![first];

        while self.accept(TokenKind::Pipe) {
            self.skip_trivia();
            let cmd = self.parse_command()?;
            span = span.merge(cmd.span);
            commands.push(cmd);
        }

        Ok(Pipeline { commands, span })
    }

    // Token operations

    /// Consume the lookahead and return it.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let token = std::mem::replace(&mut self.current, next);
        self.last_end = token.span.end;
        token
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the lookahead if it has the given kind.
    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Skip newlines and comments.
    fn skip_trivia(&mut self) {
        while matches!(self.current.kind, TokenKind::Newline | TokenKind::Comment) {
            self.advance();
        }
    }

    /// Record an error in the shared collector and hand it back.
    fn report(&mut self, error: ParseError) -> ParseError {
        self.diagnostics.push(error.to_diagnostic());
        error
    }

    /// Build (and report) the error for an unexpected lookahead token.
    fn unexpected(&mut self, expected: &str) -> ParseError {
        let span = self.current.span;
        let error = match self.current.kind {
            TokenKind::Eof => ParseError::UnexpectedEof {
                expected: expected.to_string(),
                span,
            },
            TokenKind::RParen => ParseError::UnmatchedParen { span },
            found => ParseError::UnexpectedToken {
                found,
                expected: expected.to_string(),
                span,
            },
        };
        self.report(error)
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
