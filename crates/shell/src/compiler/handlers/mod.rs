// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers: one pure mapping per command from classified
//! arguments to a typed [`Step`].

mod lines;
mod mutate;
mod read;

use super::args::{FlagSpec, Operand, ParsedArgs};
use super::error::CompileError;
use crate::ir::Step;
use crate::span::Span;

/// Where the command sits in its pipeline.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HandlerContext {
    pub command: &'static str,
    /// First command of the pipeline.
    pub first: bool,
    /// The command reads `< path` input.
    pub has_input: bool,
    pub span: Span,
}

impl HandlerContext {
    /// Whether records arrive from somewhere other than the operands.
    pub fn has_upstream(&self) -> bool {
        !self.first || self.has_input
    }

    fn missing(&self, message: &'static str) -> CompileError {
        CompileError::MissingOperand {
            command: self.command,
            message,
            span: self.span,
        }
    }

    fn unexpected(&self, operand: &Operand) -> CompileError {
        CompileError::UnexpectedOperand {
            command: self.command,
            operand: operand.word.text(),
            span: operand.span,
        }
    }
}

pub(crate) type Handler = fn(ParsedArgs, &HandlerContext) -> Result<Step, CompileError>;

/// Static description of one command.
pub(crate) struct CommandSpec {
    pub name: &'static str,
    /// Descriptive long name accepted in place of `name`.
    pub alias: &'static str,
    pub flags: &'static [FlagSpec],
    /// Changes the filesystem; must end its pipeline.
    pub mutating: bool,
    pub handler: Handler,
}

/// Every command the language knows.
pub(crate) static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "ls",
        alias: "list-directory",
        flags: &[FlagSpec::switch('l'), FlagSpec::switch('a')],
        mutating: false,
        handler: read::list,
    },
    CommandSpec {
        name: "cat",
        alias: "concatenate-and-print",
        flags: &[FlagSpec::switch('n')],
        mutating: false,
        handler: read::concat,
    },
    CommandSpec {
        name: "cp",
        alias: "copy",
        flags: &[FlagSpec::switch('r'), FlagSpec::switch('R')],
        mutating: true,
        handler: mutate::copy,
    },
    CommandSpec {
        name: "mv",
        alias: "move",
        flags: &[],
        mutating: true,
        handler: mutate::move_,
    },
    CommandSpec {
        name: "rm",
        alias: "remove",
        flags: &[
            FlagSpec::switch('r'),
            FlagSpec::switch('R'),
            FlagSpec::switch('f'),
        ],
        mutating: true,
        handler: mutate::remove,
    },
    CommandSpec {
        name: "touch",
        alias: "create-empty-file",
        flags: &[],
        mutating: true,
        handler: mutate::touch,
    },
    CommandSpec {
        name: "head",
        alias: "show-leading-lines",
        flags: &[FlagSpec::valued('n')],
        mutating: false,
        handler: lines::head,
    },
    CommandSpec {
        name: "tail",
        alias: "show-trailing-lines",
        flags: &[FlagSpec::valued('n')],
        mutating: false,
        handler: lines::tail,
    },
    CommandSpec {
        name: "mkdir",
        alias: "make-directory",
        flags: &[FlagSpec::switch('p')],
        mutating: true,
        handler: mutate::make_dir,
    },
    CommandSpec {
        name: "pwd",
        alias: "print-working-directory",
        flags: &[],
        mutating: false,
        handler: read::print_working_dir,
    },
];

/// Fail on the first operand, if any.
fn no_operands(args: &ParsedArgs, ctx: &HandlerContext) -> Result<(), CompileError> {
    match args.operands.first() {
        Some(operand) => Err(ctx.unexpected(operand)),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "../handlers_tests.rs"]
mod tests;
