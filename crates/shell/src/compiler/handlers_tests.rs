// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ir::ExpandedWord;
use yare::parameterized;

fn ctx(command: &'static str, first: bool, has_input: bool) -> HandlerContext {
    HandlerContext {
        command,
        first,
        has_input,
        span: Span::default(),
    }
}

fn args(operands: &[&str]) -> ParsedArgs {
    ParsedArgs {
        flags: Vec::new(),
        operands: operands
            .iter()
            .map(|o| Operand {
                word: ExpandedWord::literal(*o),
                span: Span::default(),
            })
            .collect(),
    }
}

fn spec(name: &str) -> &'static CommandSpec {
    match COMMANDS.iter().find(|s| s.name == name) {
        Some(spec) => spec,
        None => panic!("no command {name}"),
    }
}

fn run(name: &'static str, operands: &[&str], first: bool) -> Result<Step, CompileError> {
    (spec(name).handler)(args(operands), &ctx(name, first, false))
}

#[test]
fn names_and_aliases_are_unique() {
    let mut names: Vec<&str> = COMMANDS
        .iter()
        .flat_map(|s| [s.name, s.alias])
        .collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn mutating_commands() {
    let mutating: Vec<&str> = COMMANDS
        .iter()
        .filter(|s| s.mutating)
        .map(|s| s.name)
        .collect();
    assert_eq!(mutating, vec!["cp", "mv", "rm", "touch", "mkdir"]);
}

#[parameterized(
    cat_alone = { "cat" },
    rm_alone = { "rm" },
    touch_alone = { "touch" },
    mkdir_alone = { "mkdir" },
    head_alone = { "head" },
    tail_alone = { "tail" },
    cp_alone = { "cp" },
    mv_alone = { "mv" },
)]
fn first_without_operands_is_missing(name: &'static str) {
    let err = run(name, &[], true).unwrap_err();
    assert!(
        matches!(err, CompileError::MissingOperand { command, .. } if command == name),
        "{err:?}"
    );
}

#[parameterized(
    cat = { "cat" },
    rm = { "rm" },
    head = { "head" },
    tail = { "tail" },
)]
fn downstream_without_operands_reads_upstream(name: &'static str) {
    assert!(run(name, &[], false).is_ok());
}

#[test]
fn ls_defaults_to_no_paths() {
    assert_eq!(
        run("ls", &[], true).unwrap(),
        Step::List {
            paths: vec![],
            long: false,
            all: false,
        }
    );
}

#[test]
fn pwd_rejects_operands() {
    let err = run("pwd", &["/x"], true).unwrap_err();
    assert!(matches!(err, CompileError::UnexpectedOperand { operand, .. } if operand == "/x"));
}

#[test]
fn head_takes_one_file_when_first() {
    assert_eq!(
        run("head", &["/log"], true).unwrap(),
        Step::Head {
            count: ExpandedWord::literal("10")
        }
    );
    let err = run("head", &["/a", "/b"], true).unwrap_err();
    assert!(matches!(err, CompileError::UnexpectedOperand { operand, .. } if operand == "/b"));
}

#[test]
fn tail_rejects_operands_downstream() {
    let err = run("tail", &["/a"], false).unwrap_err();
    assert!(matches!(err, CompileError::UnexpectedOperand { .. }));
}

#[test]
fn head_with_input_needs_no_operand() {
    let step = (spec("head").handler)(args(&[]), &ctx("head", true, true)).unwrap();
    assert!(matches!(step, Step::Head { .. }));
}

#[test]
fn count_flag_overrides_default() {
    let mut parsed = args(&["/log"]);
    parsed.flags.push(('n', Some(ExpandedWord::literal("3"))));
    let step = (spec("tail").handler)(parsed, &ctx("tail", true, false)).unwrap();
    assert_eq!(
        step,
        Step::Tail {
            count: ExpandedWord::literal("3")
        }
    );
}

#[test]
fn copy_splits_sources_and_destination() {
    assert_eq!(
        run("cp", &["/a", "/b", "/dir"], true).unwrap(),
        Step::Copy {
            sources: vec![ExpandedWord::literal("/a"), ExpandedWord::literal("/b")],
            dest: ExpandedWord::literal("/dir"),
            recursive: false,
        }
    );
}

#[test]
fn move_with_one_operand_needs_upstream() {
    assert!(run("mv", &["/dest"], true).is_err());
    assert_eq!(
        run("mv", &["/dest"], false).unwrap(),
        Step::Move {
            sources: vec![],
            dest: ExpandedWord::literal("/dest"),
        }
    );
}

#[test]
fn remove_flags() {
    let mut parsed = args(&["/tmp/a"]);
    parsed.flags.push(('R', None));
    parsed.flags.push(('f', None));
    let step = (spec("rm").handler)(parsed, &ctx("rm", true, false)).unwrap();
    assert_eq!(
        step,
        Step::Remove {
            paths: vec![ExpandedWord::literal("/tmp/a")],
            recursive: true,
            force: true,
        }
    );
}
