// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal consumers that change the filesystem.

use super::HandlerContext;
use crate::compiler::args::ParsedArgs;
use crate::compiler::error::CompileError;
use crate::ir::{ExpandedWord, Step};

pub(super) fn copy(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    let recursive = args.has(&['r', 'R']);
    let (sources, dest) = sources_and_dest(args, ctx)?;
    Ok(Step::Copy {
        sources,
        dest,
        recursive,
    })
}

pub(super) fn move_(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    let (sources, dest) = sources_and_dest(args, ctx)?;
    Ok(Step::Move { sources, dest })
}

pub(super) fn remove(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    if args.operands.is_empty() && !ctx.has_upstream() {
        return Err(ctx.missing("requires at least one path"));
    }
    Ok(Step::Remove {
        recursive: args.has(&['r', 'R']),
        force: args.has(&['f']),
        paths: args.operand_words(),
    })
}

pub(super) fn touch(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    if args.operands.is_empty() {
        return Err(ctx.missing("requires at least one path"));
    }
    Ok(Step::Touch {
        paths: args.operand_words(),
    })
}

pub(super) fn make_dir(args: ParsedArgs, ctx: &HandlerContext) -> Result<Step, CompileError> {
    if args.operands.is_empty() {
        return Err(ctx.missing("requires at least one path"));
    }
    Ok(Step::MakeDir {
        parents: args.has(&['p']),
        paths: args.operand_words(),
    })
}

/// Split `sources+ dest`. With upstream records a lone operand is the
/// destination and the sources come from upstream.
fn sources_and_dest(
    args: ParsedArgs,
    ctx: &HandlerContext,
) -> Result<(Vec<ExpandedWord>, ExpandedWord), CompileError> {
    let mut words = args.operand_words();
    let enough = match words.len() {
        0 => false,
        1 => ctx.has_upstream(),
        _ => true,
    };
    if !enough {
        return Err(ctx.missing("requires source and destination"));
    }
    match words.pop() {
        Some(dest) => Ok((words, dest)),
        None => Err(ctx.missing("requires source and destination")),
    }
}
