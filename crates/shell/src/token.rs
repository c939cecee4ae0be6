// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use crate::span::Span;
use std::fmt;

/// Kind of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Generic word (anything not classified further).
    Word,
    /// Identifier-shaped word: `[A-Za-z_][A-Za-z0-9_]*`.
    Name,
    /// All-digit word.
    Number,
    /// `|`
    Pipe,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// A `)` outside any substitution.
    RParen,
    Newline,
    /// `# ...` up to (not including) the end of line.
    Comment,
    Eof,
}

impl TokenKind {
    /// Whether tokens of this kind can form (part of) a word.
    pub fn is_word(self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Name | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Word => "word",
            TokenKind::Name => "name",
            TokenKind::Number => "number",
            TokenKind::Pipe => "'|'",
            TokenKind::Less => "'<'",
            TokenKind::Greater => "'>'",
            TokenKind::RParen => "')'",
            TokenKind::Newline => "newline",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
        };
        f.write_str(s)
    }
}

/// Flags describing how a word token was spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenFlags {
    /// Some part of the token was quoted.
    pub quoted: bool,
    /// The token contains an unquoted `*`, `?` or `[...]`.
    pub has_glob: bool,
    /// The token contains a `(...)` command substitution.
    pub has_substitution: bool,
    /// Input ended inside a quote.
    pub unterminated_quote: bool,
    /// Input ended inside a substitution.
    pub unbalanced_paren: bool,
}

impl TokenFlags {
    /// Whether the token was cut short by the end of input.
    pub fn is_incomplete(&self) -> bool {
        self.unterminated_quote || self.unbalanced_paren
    }
}

/// A decoded fragment of a word token.
///
/// Quote characters and escapes are already removed from literals, so the
/// parser never re-scans the raw spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal {
        value: String,
        quoted: bool,
    },
    /// Raw glob text: `*`, `?` or a bracket class such as `[!a-z]`.
    Glob(String),
    /// Body of a `(...)` substitution, without the parentheses.
    Substitution {
        source: String,
        /// Span of `source` inside the original input.
        span: Span,
    },
}

/// One lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw spelling as it appears in the source.
    pub text: String,
    pub span: Span,
    pub flags: TokenFlags,
    /// Decoded fragments (word tokens only).
    pub segments: Vec<Segment>,
}

impl Token {
    /// A token with no decoded segments (operators, comments, EOF).
    pub fn bare(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            flags: TokenFlags::default(),
            segments: Vec::new(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Check if a string is identifier-shaped.
///
/// Names start with `[a-zA-Z_]` and contain only `[a-zA-Z0-9_]`.
pub fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check if a string is a non-empty run of ASCII digits.
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Classify an unquoted, special-free spelling.
pub fn classify(s: &str) -> TokenKind {
    if is_number(s) {
        TokenKind::Number
    } else if is_name(s) {
        TokenKind::Name
    } else {
        TokenKind::Word
    }
}
