// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Intermediate representation produced by the compiler.
//!
//! Words keep their expansions pending: globs still need the filesystem and
//! substitutions still need to run. The executor consumes a [`PipelineIR`]
//! by value and resolves every pending word exactly once.

mod step;

pub use step::Step;

use crate::ast::{Program, RedirectKind};
use crate::span::Span;

/// A deferred expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<P> {
    /// Not expanded yet; holds what is needed to expand it.
    Pending(P),
    /// Expanded values, in order.
    Resolved(Vec<String>),
}

impl<P> Resolution<P> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending(_))
    }
}

/// A word containing globs but no substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobWord {
    /// Pattern handed to the filesystem, literal parts escaped.
    pub pattern: String,
    /// Un-expanded text, used when nothing matches.
    pub text: String,
}

/// One piece of a word that contains a substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    /// Glob text, expanded after the substitutions are spliced in.
    Glob(String),
    Command {
        program: Box<Program>,
        source: String,
        span: Span,
    },
}

/// A word containing at least one command substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionWord {
    pub fragments: Vec<Fragment>,
    pub text: String,
}

impl SubstitutionWord {
    /// Whether the word is exactly one substitution and nothing else; its
    /// output lines then become separate operands.
    pub fn is_sole_substitution(&self) -> bool {
        matches!(self.fragments.as_slice(), [Fragment::Command { .. }])
    }

    pub fn has_glob(&self) -> bool {
        self.fragments.iter().any(|f| matches!(f, Fragment::Glob(_)))
    }
}

/// One argument after compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandedWord {
    Literal(String),
    Glob(Resolution<GlobWord>),
    Substitution(Resolution<SubstitutionWord>),
}

impl ExpandedWord {
    pub fn literal(value: impl Into<String>) -> Self {
        ExpandedWord::Literal(value.into())
    }

    /// The value of a literal word.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            ExpandedWord::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        match self {
            ExpandedWord::Literal(_) => false,
            ExpandedWord::Glob(r) => r.is_pending(),
            ExpandedWord::Substitution(r) => r.is_pending(),
        }
    }

    /// Record the values a pending word expanded to. Literal and already
    /// resolved words come back unchanged, so a word is expanded at most
    /// once.
    pub fn resolve(self, values: Vec<String>) -> Self {
        match self {
            ExpandedWord::Glob(Resolution::Pending(_)) => {
                ExpandedWord::Glob(Resolution::Resolved(values))
            }
            ExpandedWord::Substitution(Resolution::Pending(_)) => {
                ExpandedWord::Substitution(Resolution::Resolved(values))
            }
            done => done,
        }
    }

    /// Values of a literal or resolved word. A pending word yields its
    /// un-expanded text.
    pub fn into_values(self) -> Vec<String> {
        match self {
            ExpandedWord::Literal(value) => vec![value],
            ExpandedWord::Glob(Resolution::Resolved(values))
            | ExpandedWord::Substitution(Resolution::Resolved(values)) => values,
            pending => vec![pending.text()],
        }
    }

    /// Un-expanded textual form, for messages.
    pub fn text(&self) -> String {
        match self {
            ExpandedWord::Literal(s) => s.clone(),
            ExpandedWord::Glob(Resolution::Pending(g)) => g.text.clone(),
            ExpandedWord::Substitution(Resolution::Pending(s)) => s.text.clone(),
            ExpandedWord::Glob(Resolution::Resolved(v))
            | ExpandedWord::Substitution(Resolution::Resolved(v)) => v.join(" "),
        }
    }
}

/// A redirection with its target compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectionIR {
    pub kind: RedirectKind,
    pub target: ExpandedWord,
    pub span: Span,
}

/// One command after name resolution and word conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommandIR {
    /// The name as written.
    pub name: ExpandedWord,
    /// Canonical command the name resolved to.
    pub command: &'static str,
    pub args: Vec<ExpandedWord>,
    pub redirections: Vec<RedirectionIR>,
    pub span: Span,
}

/// A compiled pipeline. Always has at least one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineIR {
    pub steps: Vec<Step>,
    /// First operand of the first command; the implied input of a leading
    /// `head`/`tail`.
    pub source: Option<ExpandedWord>,
    /// The first command, kept for diagnostics.
    pub first_command: SimpleCommandIR,
    /// `< path` on the first command.
    pub input: Option<ExpandedWord>,
    /// `> path` on the last command.
    pub output: Option<ExpandedWord>,
    pub span: Span,
}

impl PipelineIR {
    /// Whether the last step consumes records instead of producing them.
    pub fn ends_in_effect(&self) -> bool {
        self.output.is_some() || self.steps.last().is_some_and(Step::is_mutating)
    }
}

#[cfg(test)]
#[path = "../ir_tests.rs"]
mod tests;
