// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `head` and `tail`.
//!
//! Both take at most one file operand, and only when they start the
//! pipeline without `< path`: the operand becomes the pipeline's implied
//! source rather than part of the step. Downstream they filter upstream
//! records.

use super::{no_operands, HandlerContext};
use crate::compiler::args::ParsedArgs;
use crate::compiler::error::CompileError;
use crate::ir::{ExpandedWord, Step};

const DEFAULT_COUNT: &str = "10";

pub(super) fn head(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    let count = count(args, ctx)?;
    Ok(Step::Head { count })
}

pub(super) fn tail(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    let count = count(args, ctx)?;
    Ok(Step::Tail { count })
}

/// Check operands and extract the count, left unparsed until run time.
fn count(args: ParsedArgs, ctx: &HandlerContext) -> Result<ExpandedWord, CompileError> {
    if ctx.first {
        match args.operands.as_slice() {
            [] if !ctx.has_input => {
                return Err(ctx.missing("requires a file operand or input"));
            }
            [operand, ..] if ctx.has_input => return Err(ctx.unexpected(operand)),
            [_, extra, ..] => return Err(ctx.unexpected(extra)),
            _ => {}
        }
    } else {
        no_operands(&args, ctx)?;
    }

    Ok(args
        .value('n')
        .cloned()
        .unwrap_or_else(|| ExpandedWord::literal(DEFAULT_COUNT)))
}
