// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compile error types.

use crate::span::Span;
use crate::validator::ValidationError;
use thiserror::Error;

/// Errors raised while lowering a [`Program`](crate::Program) to IR.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The program has no commands.
    #[error("empty pipeline")]
    EmptyPipeline { span: Span },

    /// Static validation failed; all problems are listed.
    #[error("{}", join_validation(.0))]
    Invalid(Vec<ValidationError>),

    /// The command name contains a glob or a substitution.
    #[error("command name must be a literal word at {}", span.start)]
    DynamicCommandName { span: Span },

    #[error("unknown command: {name}")]
    UnknownCommand { name: String, span: Span },

    #[error("{command}: unknown flag '{flag}'")]
    UnknownFlag {
        command: &'static str,
        flag: String,
        span: Span,
    },

    #[error("{command}: flag '-{flag}' requires a value")]
    MissingFlagValue {
        command: &'static str,
        flag: char,
        span: Span,
    },

    #[error("{command}: {message}")]
    MissingOperand {
        command: &'static str,
        message: &'static str,
        span: Span,
    },

    #[error("{command}: unexpected operand '{operand}'")]
    UnexpectedOperand {
        command: &'static str,
        operand: String,
        span: Span,
    },

    /// A command that changes the filesystem must end its pipeline.
    #[error("{command} must be the last command in a pipeline")]
    NotLastInPipeline { command: &'static str, span: Span },
}

impl CompileError {
    /// Span of the offending construct, if there is a single one.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Invalid(errors) => errors.first().map(ValidationError::span),
            CompileError::EmptyPipeline { span }
            | CompileError::DynamicCommandName { span }
            | CompileError::UnknownCommand { span, .. }
            | CompileError::UnknownFlag { span, .. }
            | CompileError::MissingFlagValue { span, .. }
            | CompileError::MissingOperand { span, .. }
            | CompileError::UnexpectedOperand { span, .. }
            | CompileError::NotLastInPipeline { span, .. } => Some(*span),
        }
    }
}

fn join_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
