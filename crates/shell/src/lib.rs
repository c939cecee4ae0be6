// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The fsh command language: a small shell-like language for filesystem
//! operations.
//!
//! Source text goes through a fixed pipeline:
//!
//! ```text
//! text ─▶ Lexer ─▶ Parser ─▶ Program (AST)
//!                               │ validate + compile
//!                               ▼
//!                          PipelineIR (globs and substitutions pending)
//!                               │ Executor + FileSystem capability
//!                               ▼
//!                  RecordStream  or  effect future
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use fsh_fs::MemoryFs;
//! use fsh_shell::Shell;
//!
//! # async fn example() -> Result<(), fsh_shell::Error> {
//! let fs = MemoryFs::new().with_file("/notes/a.txt", "hello\n");
//! let shell = Shell::new(Arc::new(fs));
//! let lines = shell.output("cat (ls /notes/*.txt)").await?;
//! assert_eq!(lines, vec!["hello"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Language
//!
//! - **Pipelines**: `cmd | cmd | cmd`, one pipeline per program
//! - **Quoting**: single quotes, double quotes, backslash escapes
//! - **Globs**: `*`, `?`, `[...]`, expanded through the capability
//! - **Command substitution**: `(cmd ...)`, nested up to
//!   [`MAX_SUBSTITUTION_DEPTH`] levels
//! - **Redirections**: `< path` on the first command, `> path` on the last
//!
//! Every command has a short and a descriptive name (`tail` and
//! `show-trailing-lines`); see [`Compiler`].
//!
//! # Parsing
//!
//! Use [`Parser::parse`] for strict parsing that returns the first error, or
//! [`Parser::parse_with_recovery`] to collect [`Diagnostics`] for every
//! problem in the input.

pub mod ast;
pub mod compiler;
mod diagnostics;
mod error;
pub mod exec;
pub mod ir;
mod lexer;
mod parse_error;
mod parser;
mod shell;
pub mod span;
mod token;
mod validator;

pub use span::{context_snippet, diagnostic_context, line_content, Position, Span};

// Diagnostics
pub use diagnostics::{Diagnostic, DiagnosticCode, Diagnostics, Severity};

// AST types
pub use ast::{
    AstVisitor, Pipeline, Program, RedirectKind, Redirection, SimpleCommand, Word, WordPart,
};

// Lexer
pub use lexer::{LexState, Lexer};

// Parser
pub use parse_error::{ParseError, ParseResult};
pub use parser::{Parser, MAX_SUBSTITUTION_DEPTH};

// Tokens
pub use token::{Segment, Token, TokenFlags, TokenKind};

// Validator
pub use validator::{validate, validate_with_config, ValidationError, ValidatorConfig};

// Compiler and IR
pub use compiler::{CompileError, Compiler};
pub use ir::{ExpandedWord, PipelineIR, Step};

// Execution
pub use error::Error;
pub use exec::{Completion, ExecError, Execution, Executor, Record, RecordStream};
pub use shell::Shell;
