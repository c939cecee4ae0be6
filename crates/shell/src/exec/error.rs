// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use crate::compiler::CompileError;
use crate::parse_error::ParseError;
use fsh_fs::FsError;
use thiserror::Error;

/// Errors raised while running a compiled pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The filesystem capability failed.
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A command substitution did not compile.
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// An operand resolved to a value the command cannot use.
    #[error("{command}: invalid operand '{value}'")]
    InvalidOperand {
        command: &'static str,
        value: String,
    },

    #[error("command substitution nesting exceeds maximum depth of {limit}")]
    SubstitutionDepthExceeded { limit: usize },

    #[error("command substitution output exceeds {limit} bytes")]
    CaptureLimitExceeded { limit: usize },

    /// A redirection target that expanded to zero or several paths.
    #[error("ambiguous redirect '{target}': expands to {count} paths")]
    AmbiguousRedirect { target: String, count: usize },

    #[error("is a directory: {0}")]
    IsADirectory(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),
}
