// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract syntax tree.
//!
//! ```text
//! Program
//! └── Pipeline
//!     └── SimpleCommand[]
//!         ├── name: Word
//!         ├── args: Word[]
//!         └── redirections: Redirection[]
//!
//! Word
//! └── WordPart[] (Literal | Glob | CommandSub → Program)
//! ```
//!
//! Nodes are immutable once built and every node carries its span.

pub mod printer;
mod utils;
mod visitor;

pub use visitor::AstVisitor;

use crate::span::Span;

/// A parsed input: exactly one pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Empty for input with no commands; the compiler rejects that.
    pub pipeline: Pipeline,
    pub span: Span,
}

/// Commands joined by `|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub commands: Vec<SimpleCommand>,
    pub span: Span,
}

impl Pipeline {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A command name, its arguments and redirections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    pub name: Word,
    pub args: Vec<Word>,
    pub redirections: Vec<Redirection>,
    pub span: Span,
}

impl SimpleCommand {
    /// The literal command name, if the name has no globs or substitutions.
    pub fn literal_name(&self) -> Option<String> {
        self.name.literal_value()
    }
}

/// One shell word, possibly built from several adjacent parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub parts: Vec<WordPart>,
    pub span: Span,
}

impl Word {
    /// The concatenated value when every part is literal.
    pub fn literal_value(&self) -> Option<String> {
        let mut value = String::new();
        for part in &self.parts {
            match part {
                WordPart::Literal { value: v, .. } => value.push_str(v),
                WordPart::Glob { .. } | WordPart::CommandSub { .. } => return None,
            }
        }
        Some(value)
    }

    pub fn has_glob(&self) -> bool {
        self.parts.iter().any(|p| matches!(p, WordPart::Glob { .. }))
    }

    pub fn has_substitution(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, WordPart::CommandSub { .. }))
    }

    /// Whether any literal part came from quoted text.
    pub fn is_quoted(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, WordPart::Literal { quoted: true, .. }))
    }

    /// The un-expanded textual form: literal values, glob patterns and
    /// `(body)` for substitutions, in order.
    pub fn text(&self) -> String {
        self.parts.iter().map(WordPart::text).collect()
    }
}

/// A fragment of a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPart {
    /// Text with quotes and escapes already removed.
    Literal { value: String, quoted: bool },
    /// `*`, `?` or a bracket class.
    Glob { pattern: String },
    /// A `(...)` command substitution and its parsed body.
    CommandSub {
        program: Box<Program>,
        /// Raw body text between the parentheses.
        source: String,
        /// Span of the body.
        span: Span,
    },
}

impl WordPart {
    pub fn literal(value: impl Into<String>) -> Self {
        WordPart::Literal {
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        WordPart::Literal {
            value: value.into(),
            quoted: true,
        }
    }

    pub fn glob(pattern: impl Into<String>) -> Self {
        WordPart::Glob {
            pattern: pattern.into(),
        }
    }

    pub fn text(&self) -> String {
        match self {
            WordPart::Literal { value, .. } => value.clone(),
            WordPart::Glob { pattern } => pattern.clone(),
            WordPart::CommandSub { source, .. } => format!("({source})"),
        }
    }
}

/// Direction of a redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectKind {
    /// `< path`
    In,
    /// `> path`
    Out,
}

impl RedirectKind {
    pub fn symbol(self) -> &'static str {
        match self {
            RedirectKind::In => "<",
            RedirectKind::Out => ">",
        }
    }
}

/// A `<` or `>` redirection attached to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub kind: RedirectKind,
    pub target: Word,
    /// From the operator through the end of the target.
    pub span: Span,
}
