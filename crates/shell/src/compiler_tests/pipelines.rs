// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{compile, compiled};
use crate::compiler::Compiler;
use crate::ir::{ExpandedWord, Step};
use crate::parser::Parser;
use yare::parameterized;

#[test]
fn single_command() {
    let ir = compiled("ls /docs");
    assert_eq!(
        ir.steps,
        vec![Step::List {
            paths: vec![ExpandedWord::literal("/docs")],
            long: false,
            all: false,
        }]
    );
    assert_eq!(ir.first_command.command, "ls");
    assert!(ir.input.is_none());
    assert!(ir.output.is_none());
    assert!(!ir.ends_in_effect());
}

#[parameterized(
    list = { "list-directory /", "ls" },
    concat = { "concatenate-and-print /a", "cat" },
    copy = { "copy /a /b", "cp" },
    move_ = { "move /a /b", "mv" },
    remove = { "remove /a", "rm" },
    touch = { "create-empty-file /a", "touch" },
    head = { "show-leading-lines /a", "head" },
    tail = { "show-trailing-lines /a", "tail" },
    mkdir = { "make-directory /a", "mkdir" },
    pwd = { "print-working-directory", "pwd" },
)]
fn descriptive_names_resolve(source: &str, canonical: &str) {
    let ir = compiled(source);
    assert_eq!(ir.steps[0].command(), canonical);
    assert_eq!(ir.first_command.command, canonical);
}

#[test]
fn aliases_compile_like_canonical_names() {
    assert_eq!(
        compiled("show-trailing-lines -n 3 /log.txt").steps,
        compiled("tail -n 3 /log.txt").steps
    );
}

#[test]
fn leading_tail_takes_its_operand_as_source() {
    let ir = compiled("tail -n 3 /log.txt");
    assert_eq!(ir.source, Some(ExpandedWord::literal("/log.txt")));
    assert_eq!(
        ir.steps,
        vec![Step::Tail {
            count: ExpandedWord::literal("3")
        }]
    );
}

#[test]
fn leading_list_has_no_source() {
    assert_eq!(compiled("ls /a").source, None);
}

#[test]
fn three_stage_pipeline() {
    let ir = compiled("cat /a | head -n 2 | tail");
    let names: Vec<_> = ir.steps.iter().map(Step::command).collect();
    assert_eq!(names, vec!["cat", "head", "tail"]);
}

#[test]
fn redirections_are_lifted() {
    let ir = compiled("cat < /in | tail -n 1 > /out");
    assert_eq!(ir.input, Some(ExpandedWord::literal("/in")));
    assert_eq!(ir.output, Some(ExpandedWord::literal("/out")));
    assert!(ir.ends_in_effect());
}

#[test]
fn input_redirect_satisfies_operand() {
    assert!(compile("cat < /in").is_ok());
    assert!(compile("head < /in").is_ok());
}

#[test]
fn mutating_last_is_effect() {
    let ir = compiled("ls /tmp | rm -r");
    assert!(ir.ends_in_effect());
    assert_eq!(
        ir.steps[1],
        Step::Remove {
            paths: vec![],
            recursive: true,
            force: false,
        }
    );
}

#[test]
fn custom_alias() {
    let compiler = Compiler::new().with_alias("dir", "list-directory").unwrap();
    assert_eq!(compiler.resolve("dir"), Some("ls"));
    let program = Parser::parse("dir /").unwrap();
    let ir = compiler.compile(&program).unwrap();
    assert_eq!(ir.steps[0].command(), "ls");
    // The original compiler is unchanged.
    assert_eq!(Compiler::new().resolve("dir"), None);
}

#[test]
fn alias_for_unknown_command_fails() {
    assert!(Compiler::new().with_alias("x", "format-disk").is_err());
}

#[test]
fn names_are_sorted() {
    let compiler = Compiler::new();
    let names: Vec<&str> = compiler.names().collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), 20);
}

#[test]
fn first_command_keeps_its_lowered_form() {
    let ir = compiled("concatenate-and-print /a > /out");
    let first = &ir.first_command;
    assert_eq!(first.name, ExpandedWord::literal("concatenate-and-print"));
    assert_eq!(first.command, "cat");
    assert_eq!(first.args, vec![ExpandedWord::literal("/a")]);
    assert_eq!(first.redirections.len(), 1);
    assert_eq!(first.redirections[0].target, ExpandedWord::literal("/out"));
}
