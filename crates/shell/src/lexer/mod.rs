// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stateful tokenizer.
//!
//! The lexer produces one [`Token`] at a time. Operators are recognised by
//! direct lookup; everything else goes through word scanning, which first
//! tries a greedy fast path and falls back to a char-by-char scan that tracks
//! quote and substitution context on a [`LexState`] stack.
//!
//! The lexer never fails. Input that ends inside a quote or a substitution
//! yields a best-effort token whose [`TokenFlags`](crate::TokenFlags) record
//! the problem; the parser turns those into errors.

mod cursor;
mod state;
mod word;

pub use state::LexState;

use crate::span::{Position, Span};
use crate::token::{Token, TokenKind};
use cursor::Cursor;
use state::StateStack;

/// Single-character operators.
fn operator_kind(c: char) -> Option<TokenKind> {
    match c {
        '|' => Some(TokenKind::Pipe),
        '<' => Some(TokenKind::Less),
        '>' => Some(TokenKind::Greater),
        ')' => Some(TokenKind::RParen),
        _ => None,
    }
}

/// Shell tokenizer.
///
/// # Examples
///
/// ```ignore
/// use fsh_shell::{Lexer, TokenKind};
///
/// let tokens = Lexer::tokenize("cat notes.txt | tail -n 3");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds[2], TokenKind::Pipe);
/// assert_eq!(kinds.last(), Some(&TokenKind::Eof));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    states: StateStack,
    /// Open parentheses in the substitution currently being captured.
    paren_depth: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_origin(source, Position::START)
    }

    /// Lex a fragment that starts at `origin` in some enclosing input, so
    /// token spans stay absolute.
    pub fn with_origin(source: &'a str, origin: Position) -> Self {
        Self {
            cursor: Cursor::new(source, origin),
            states: StateStack::default(),
            paren_depth: 0,
        }
    }

    /// Tokenize a whole input, including the trailing EOF token.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize_all()
    }

    /// Re-scan from the start of the input and return every token up to and
    /// including EOF.
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        self.cursor.rewind();
        self.states.reset();
        self.paren_depth = 0;

        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Current position of the read head.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Produce the next token. Returns EOF tokens forever once the input is
    /// exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_blanks();
        let start = self.cursor.position();

        let Some(c) = self.cursor.peek() else {
            return Token::bare(TokenKind::Eof, "", Span::empty(start));
        };

        match c {
            '\n' => {
                self.cursor.bump();
                self.bare_token(TokenKind::Newline, start)
            }
            '#' => self.scan_comment(start),
            _ => match operator_kind(c) {
                Some(kind) => {
                    self.cursor.bump();
                    self.bare_token(kind, start)
                }
                None => self.scan_word(start),
            },
        }
    }

    /// Skip blanks and backslash-newline continuations.
    fn skip_blanks(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\t' | '\r') => {
                    self.cursor.bump();
                }
                Some('\\') if self.cursor.peek_nth(1) == Some('\n') => {
                    self.cursor.bump();
                    self.cursor.bump();
                }
                _ => return,
            }
        }
    }

    fn scan_comment(&mut self, start: Position) -> Token {
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.bump();
        }
        self.bare_token(TokenKind::Comment, start)
    }

    fn bare_token(&self, kind: TokenKind, start: Position) -> Token {
        let end = self.cursor.position();
        Token::bare(kind, self.cursor.slice(start, end), Span::new(start, end))
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
