// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only producers: `ls`, `cat`, `pwd`.

use super::{no_operands, HandlerContext};
use crate::compiler::args::ParsedArgs;
use crate::compiler::error::CompileError;
use crate::ir::Step;

pub(super) fn list(args: ParsedArgs, _ctx: &HandlerContext) -> Result<Step, CompileError> {
    Ok(Step::List {
        long: args.has(&['l']),
        all: args.has(&['a']),
        paths: args.operand_words(),
    })
}

pub(super) fn concat(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    if args.operands.is_empty() && !ctx.has_upstream() {
        return Err(ctx.missing("requires a file operand or input"));
    }
    Ok(Step::Concat {
        number: args.has(&['n']),
        paths: args.operand_words(),
    })
}

pub(super) fn print_working_dir(
    args: ParsedArgs,
    ctx: &HandlerContext,
) -> Result<Step, CompileError> {
    no_operands(&args, ctx)?;
    Ok(Step::PrintWorkingDir)
}
