// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level error for the [`Shell`](crate::Shell) facade.

use crate::compiler::CompileError;
use crate::exec::ExecError;
use crate::parse_error::ParseError;
use thiserror::Error;

/// Any failure between source text and finished execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl Error {
    /// Diagnostic rendering with source context for parse errors; the plain
    /// message otherwise.
    pub fn render(&self, source: &str) -> String {
        match self {
            Error::Parse(e) => e.diagnostic(source),
            other => other.to_string(),
        }
    }
}
