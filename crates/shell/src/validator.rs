// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AST validator.
//!
//! Static checks that need no filesystem: redirection placement, empty
//! substitutions and optional nesting limits. Pipelines inside command
//! substitutions are checked the same way as the top-level one.

use crate::ast::{AstVisitor, Pipeline, Program, RedirectKind, Redirection, WordPart};
use crate::span::Span;
use thiserror::Error;

/// A static problem in an otherwise well-formed program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `<` on a command that does not start its pipeline.
    #[error("input redirection is only allowed on the first command of a pipeline")]
    InputNotFirst { span: Span },

    /// `>` on a command that does not end its pipeline.
    #[error("output redirection is only allowed on the last command of a pipeline")]
    OutputNotLast { span: Span },

    /// More than one redirection of the same direction on one command.
    #[error("more than one '{symbol}' redirection on one command")]
    DuplicateRedirect { symbol: &'static str, span: Span },

    /// A redirection whose target is the empty string.
    #[error("redirection target is empty")]
    EmptyRedirectTarget { span: Span },

    /// `()` with no command inside.
    #[error("command substitution is empty")]
    EmptySubstitution { span: Span },

    #[error("command substitution nesting depth {depth} exceeds maximum {max}")]
    ExcessiveNesting { depth: usize, max: usize, span: Span },
}

impl ValidationError {
    pub fn span(&self) -> Span {
        match self {
            ValidationError::InputNotFirst { span }
            | ValidationError::OutputNotLast { span }
            | ValidationError::DuplicateRedirect { span, .. }
            | ValidationError::EmptyRedirectTarget { span }
            | ValidationError::EmptySubstitution { span }
            | ValidationError::ExcessiveNesting { span, .. } => *span,
        }
    }
}

/// Configuration for validation strictness.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Maximum allowed substitution nesting (0 = no limit beyond the
    /// parser's own).
    pub max_substitution_depth: usize,
    /// Whether `()` is accepted.
    pub allow_empty_substitutions: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_substitution_depth: 0,
            allow_empty_substitutions: false,
        }
    }
}

/// Validate a parsed program.
///
/// Returns `Ok(())` if the AST is valid, or `Err(errors)` with all
/// validation errors found.
///
/// # Example
///
/// ```ignore
/// use fsh_shell::{validate, Parser};
///
/// let ast = Parser::parse("cat /a | tail > /b").unwrap();
/// assert!(validate(&ast).is_ok());
///
/// let ast = Parser::parse("cat /a > /b | tail").unwrap();
/// assert!(validate(&ast).is_err());
/// ```
pub fn validate(ast: &Program) -> Result<(), Vec<ValidationError>> {
    validate_with_config(ast, ValidatorConfig::default())
}

/// Validate with custom configuration.
pub fn validate_with_config(
    ast: &Program,
    config: ValidatorConfig,
) -> Result<(), Vec<ValidationError>> {
    Validator::new(config).validate(ast)
}

struct Validator {
    config: ValidatorConfig,
    errors: Vec<ValidationError>,
    current_depth: usize,
}

impl Validator {
    fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            errors: Vec::new(),
            current_depth: 0,
        }
    }

    fn validate(mut self, ast: &Program) -> Result<(), Vec<ValidationError>> {
        self.visit_program(ast);
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn report(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn check_placement(&mut self, redirections: &[Redirection], first: bool, last: bool) {
        let mut seen_in = false;
        let mut seen_out = false;
        for redir in redirections {
            let seen = match redir.kind {
                RedirectKind::In => &mut seen_in,
                RedirectKind::Out => &mut seen_out,
            };
            if std::mem::replace(seen, true) {
                self.report(ValidationError::DuplicateRedirect {
                    symbol: redir.kind.symbol(),
                    span: redir.span,
                });
            }
            match redir.kind {
                RedirectKind::In if !first => {
                    self.report(ValidationError::InputNotFirst { span: redir.span })
                }
                RedirectKind::Out if !last => {
                    self.report(ValidationError::OutputNotLast { span: redir.span })
                }
                _ => {}
            }
        }
    }
}

impl AstVisitor for Validator {
    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        let count = pipeline.commands.len();
        for (i, cmd) in pipeline.commands.iter().enumerate() {
            self.check_placement(&cmd.redirections, i == 0, i + 1 == count);
        }
        self.walk_pipeline(pipeline);
    }

    fn visit_redirection(&mut self, redir: &Redirection) {
        if redir.target.literal_value().is_some_and(|v| v.is_empty()) {
            self.report(ValidationError::EmptyRedirectTarget { span: redir.span });
        }
        self.walk_redirection(redir);
    }

    fn visit_word_part(&mut self, part: &WordPart) {
        let WordPart::CommandSub { program, span, .. } = part else {
            return;
        };

        self.current_depth += 1;
        let max = self.config.max_substitution_depth;
        if max > 0 && self.current_depth > max {
            self.report(ValidationError::ExcessiveNesting {
                depth: self.current_depth,
                max,
                span: *span,
            });
        }
        if program.pipeline.is_empty() && !self.config.allow_empty_substitutions {
            self.report(ValidationError::EmptySubstitution { span: *span });
        }
        self.walk_word_part(part);
        self.current_depth -= 1;
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
