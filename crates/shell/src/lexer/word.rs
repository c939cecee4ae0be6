// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word scanning: greedy fast path and context-tracking slow path.

use super::state::LexState;
use super::Lexer;
use crate::span::{Position, Span};
use crate::token::{classify, Segment, Token, TokenFlags, TokenKind};

/// Characters that stop the fast path.
fn is_special(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '|' | '<' | '>' | '(' | ')' | '"' | '\'' | '\\' | '*' | '?' | '[' | '#'
        )
}

/// Characters that end an unquoted word.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '|' | '<' | '>' | ')')
}

/// Accumulates decoded segments for one word token.
#[derive(Debug, Default)]
struct WordBuilder {
    segments: Vec<Segment>,
    literal: String,
    literal_quoted: bool,
    flags: TokenFlags,
}

impl WordBuilder {
    fn push_char(&mut self, c: char, quoted: bool) {
        if quoted != self.literal_quoted {
            self.flush();
            self.literal_quoted = quoted;
        }
        self.literal.push(c);
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            self.segments.push(Segment::Literal {
                value: std::mem::take(&mut self.literal),
                quoted: self.literal_quoted,
            });
        }
    }

    fn push_glob(&mut self, text: String) {
        self.flush();
        self.flags.has_glob = true;
        self.segments.push(Segment::Glob(text));
    }

    fn push_substitution(&mut self, source: String, span: Span) {
        self.flush();
        self.flags.has_substitution = true;
        self.segments.push(Segment::Substitution { source, span });
    }

    fn finish(mut self) -> (Vec<Segment>, TokenFlags) {
        self.flush();
        // `''` and `""` still denote one (empty) argument.
        if self.segments.is_empty() {
            self.segments.push(Segment::Literal {
                value: String::new(),
                quoted: self.flags.quoted,
            });
        }
        (self.segments, self.flags)
    }
}

impl Lexer<'_> {
    pub(super) fn scan_word(&mut self, start: Position) -> Token {
        self.cursor.mark();
        if let Some(token) = self.scan_fast(start) {
            return token;
        }
        self.cursor.reset();
        self.scan_slow(start)
    }

    /// Consume plain characters; succeed only if the word ends exactly at a
    /// boundary without meeting any special character.
    fn scan_fast(&mut self, start: Position) -> Option<Token> {
        while let Some(c) = self.cursor.peek() {
            if is_special(c) {
                break;
            }
            self.cursor.bump();
        }
        let at_boundary = self.cursor.peek().map_or(true, is_boundary);
        let text = self.cursor.slice_from(start);
        if !at_boundary || text.is_empty() {
            return None;
        }
        Some(Token {
            kind: classify(text),
            text: text.to_string(),
            span: Span::new(start, self.cursor.position()),
            flags: TokenFlags::default(),
            segments: vec![Segment::Literal {
                value: text.to_string(),
                quoted: false,
            }],
        })
    }

    fn scan_slow(&mut self, start: Position) -> Token {
        self.states.reset();
        let mut word = WordBuilder::default();

        loop {
            match self.states.top() {
                LexState::Normal => {
                    let Some(c) = self.cursor.peek() else {
                        break;
                    };
                    if is_boundary(c) {
                        break;
                    }
                    match c {
                        '\\' => {
                            self.cursor.bump();
                            match self.cursor.peek() {
                                Some('\n') => {
                                    self.cursor.bump();
                                }
                                Some(next) => {
                                    self.cursor.bump();
                                    word.flags.quoted = true;
                                    word.push_char(next, true);
                                }
                                None => word.push_char('\\', false),
                            }
                        }
                        '\'' => {
                            self.cursor.bump();
                            word.flags.quoted = true;
                            self.states.push(LexState::SingleQuoted);
                        }
                        '"' => {
                            self.cursor.bump();
                            word.flags.quoted = true;
                            self.states.push(LexState::DoubleQuoted);
                        }
                        '(' => self.scan_substitution(&mut word),
                        '*' | '?' => {
                            self.cursor.bump();
                            word.push_glob(c.to_string());
                        }
                        '[' => match self.scan_bracket() {
                            Some(class) => word.push_glob(class),
                            None => {
                                self.cursor.bump();
                                word.push_char('[', false);
                            }
                        },
                        other => {
                            self.cursor.bump();
                            word.push_char(other, false);
                        }
                    }
                }
                LexState::SingleQuoted => match self.cursor.bump() {
                    None => {
                        word.flags.unterminated_quote = true;
                        break;
                    }
                    Some('\'') => {
                        self.states.pop();
                    }
                    Some(c) => word.push_char(c, true),
                },
                LexState::DoubleQuoted => match self.cursor.peek() {
                    None => {
                        word.flags.unterminated_quote = true;
                        break;
                    }
                    Some('"') => {
                        self.cursor.bump();
                        self.states.pop();
                    }
                    Some('\\') => {
                        self.cursor.bump();
                        match self.cursor.peek() {
                            Some(escaped @ ('"' | '\\')) => {
                                self.cursor.bump();
                                word.push_char(escaped, true);
                            }
                            _ => word.push_char('\\', true),
                        }
                    }
                    Some('(') => self.scan_substitution(&mut word),
                    Some(c) => {
                        self.cursor.bump();
                        word.push_char(c, true);
                    }
                },
                // Substitution bodies are captured whole by scan_substitution.
                LexState::CommandSubstitution => break,
            }
        }
        self.states.reset();

        let end = self.cursor.position();
        let (segments, flags) = word.finish();
        Token {
            kind: TokenKind::Word,
            text: self.cursor.slice(start, end).to_string(),
            span: Span::new(start, end),
            flags,
            segments,
        }
    }

    /// Capture a balanced `( ... )` body as raw text.
    ///
    /// Quoted regions inside the body are skipped so their parentheses and
    /// quote characters do not affect the balance.
    fn scan_substitution(&mut self, word: &mut WordBuilder) {
        self.cursor.bump(); // (
        let body_start = self.cursor.position();
        let base = self.states.depth();
        self.states.push(LexState::CommandSubstitution);
        self.paren_depth = 1;

        let mut body_end = None;
        while self.states.depth() > base {
            let before = self.cursor.position();
            let Some(c) = self.cursor.bump() else {
                break;
            };
            match (self.states.top(), c) {
                (LexState::CommandSubstitution, '(') => self.paren_depth += 1,
                (LexState::CommandSubstitution, ')') => {
                    self.paren_depth -= 1;
                    if self.paren_depth == 0 {
                        body_end = Some(before);
                        self.states.pop();
                    }
                }
                (LexState::CommandSubstitution, '\'') => self.states.push(LexState::SingleQuoted),
                (LexState::CommandSubstitution, '"') => self.states.push(LexState::DoubleQuoted),
                (LexState::CommandSubstitution, '\\') => {
                    self.cursor.bump();
                }
                (LexState::SingleQuoted, '\'') => {
                    self.states.pop();
                }
                (LexState::DoubleQuoted, '"') => {
                    self.states.pop();
                }
                (LexState::DoubleQuoted, '\\') => {
                    if matches!(self.cursor.peek(), Some('"' | '\\')) {
                        self.cursor.bump();
                    }
                }
                _ => {}
            }
        }

        let body_end = match body_end {
            Some(end) => end,
            None => {
                word.flags.unbalanced_paren = true;
                if self.states.in_quote() {
                    word.flags.unterminated_quote = true;
                }
                self.states.truncate(base);
                self.cursor.position()
            }
        };
        self.paren_depth = 0;

        let source = self.cursor.slice(body_start, body_end).to_string();
        word.push_substitution(source, Span::new(body_start, body_end));
    }

    /// Scan a bracket character class starting at the current `[`.
    ///
    /// Returns the class text (with `^` negation normalized to `!`) and
    /// consumes it, or returns `None` without consuming when the bracket is
    /// not closed before the end of the word.
    fn scan_bracket(&mut self) -> Option<String> {
        let mut chars = self.cursor.rest().chars().skip(1).peekable();
        let mut class = String::from("[");
        let mut consumed = 1;

        if matches!(chars.peek(), Some('!' | '^')) {
            class.push('!');
            chars.next();
            consumed += 1;
        }
        if chars.peek() == Some(&']') {
            class.push(']');
            chars.next();
            consumed += 1;
        }
        loop {
            let c = chars.next()?;
            consumed += 1;
            match c {
                ']' => {
                    class.push(']');
                    break;
                }
                c if is_boundary(c) || matches!(c, '(' | '\'' | '"' | '\\') => return None,
                c => class.push(c),
            }
        }

        for _ in 0..consumed {
            self.cursor.bump();
        }
        Some(class)
    }
}
