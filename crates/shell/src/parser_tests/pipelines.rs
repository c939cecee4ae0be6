// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{assert_literal, cmd_name, only_command, parse};
use crate::ast::RedirectKind;
use yare::parameterized;

// =============================================================================
// Pipelines
// =============================================================================

#[test]
fn three_stage_pipeline() {
    let ast = parse("a | b | c");
    let names: Vec<_> = ast.pipeline.commands.iter().map(cmd_name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[parameterized(
    one = { "ls", 1 },
    two = { "ls /logs | head", 2 },
    four = { "ls | cat | head -n 2 | tail -n 1", 4 },
)]
fn command_count(source: &str, expected: usize) {
    assert_eq!(parse(source).count_commands(), expected);
}

#[test]
fn newline_after_pipe_continues() {
    let ast = parse("ls /logs |\n  # comment\n  head");
    assert_eq!(ast.pipeline.commands.len(), 2);
}

#[test]
fn leading_and_trailing_trivia_is_skipped() {
    let ast = parse("\n# listing\nls /tmp # trailing\n\n");
    let cmd = only_command(&ast);
    assert_eq!(cmd_name(cmd), "ls");
    assert_literal(&cmd.args[0], "/tmp");
}

#[test]
fn empty_input_is_an_empty_program() {
    let ast = parse("  # nothing here\n");
    assert!(ast.pipeline.is_empty());
    assert_eq!(ast.count_commands(), 0);
}

#[test]
fn spans_cover_commands() {
    let source = "ls /a | head -n 2";
    let ast = parse(source);
    let head = &ast.pipeline.commands[1];
    assert_eq!(head.span.slice(source), "head -n 2");
    assert_eq!(ast.pipeline.span.slice(source), source);
    assert_eq!(ast.span.slice(source), source);
}

// =============================================================================
// Redirections
// =============================================================================

#[test]
fn output_redirection() {
    let source = "cat /a > /b";
    let ast = parse(source);
    let cmd = only_command(&ast);
    assert_eq!(cmd.args.len(), 1);
    assert_eq!(cmd.redirections.len(), 1);
    assert_eq!(cmd.redirections[0].kind, RedirectKind::Out);
    assert_literal(&cmd.redirections[0].target, "/b");
    assert_eq!(cmd.redirections[0].span.slice(source), "> /b");
}

#[test]
fn redirections_interleave_with_args() {
    let ast = parse("head < /in -n 2 >/out");
    let cmd = only_command(&ast);
    assert_eq!(cmd.args.len(), 2);
    let kinds: Vec<_> = cmd.redirections.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![RedirectKind::In, RedirectKind::Out]);
}

#[test]
fn redirection_in_middle_of_pipeline() {
    let ast = parse("cat < /in | tail > /out");
    assert_eq!(ast.pipeline.commands[0].redirections[0].kind, RedirectKind::In);
    assert_eq!(ast.pipeline.commands[1].redirections[0].kind, RedirectKind::Out);
}
