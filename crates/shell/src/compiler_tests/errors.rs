// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::compile;
use crate::compiler::{CompileError, Compiler};
use crate::parser::Parser;
use crate::validator::{ValidationError, ValidatorConfig};
use yare::parameterized;

#[test]
fn empty_program() {
    assert!(matches!(
        compile("   "),
        Err(CompileError::EmptyPipeline { .. })
    ));
}

#[test]
fn unknown_command() {
    let err = compile("format-disk /").unwrap_err();
    assert!(matches!(&err, CompileError::UnknownCommand { name, .. } if name == "format-disk"));
    assert_eq!(err.to_string(), "unknown command: format-disk");
    assert_eq!(err.span().map(|s| s.start.offset), Some(0));
}

#[test]
fn dynamic_command_name() {
    assert!(matches!(
        compile("l* /"),
        Err(CompileError::DynamicCommandName { .. })
    ));
    assert!(matches!(
        compile("(pwd) /"),
        Err(CompileError::DynamicCommandName { .. })
    ));
}

#[parameterized(
    long_flag = { "ls --all", "--all" },
    unknown_short = { "ls -z", "-z" },
    in_cluster = { "rm -rz /a", "-z" },
)]
fn unknown_flags(source: &str, flag: &str) {
    let err = compile(source).unwrap_err();
    assert!(
        matches!(&err, CompileError::UnknownFlag { flag: f, .. } if f == flag),
        "{err:?}"
    );
}

#[test]
fn missing_count_value() {
    let err = compile("head /a -n").unwrap_err();
    assert!(matches!(err, CompileError::MissingFlagValue { flag: 'n', .. }));
}

#[parameterized(
    rm = { "rm /a | ls" },
    touch = { "touch /a | cat" },
    cp = { "cp /a /b | ls" },
)]
fn mutating_must_be_last(source: &str) {
    assert!(matches!(
        compile(source),
        Err(CompileError::NotLastInPipeline { .. })
    ));
}

#[test]
fn validation_errors_are_collected() {
    let err = compile("cat /a > /x | tail < /y").unwrap_err();
    let CompileError::Invalid(errors) = &err else {
        panic!("expected validation failure, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(err.to_string().contains("; "));
}

#[test]
fn nested_substitutions_are_validated() {
    let err = compile("cat (cat /a > /x | tail)").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Invalid(ref errors)
            if matches!(errors[0], ValidationError::OutputNotLast { .. })
    ));
}

#[test]
fn configured_nesting_limit() {
    let compiler = Compiler::new().validator_config(ValidatorConfig {
        max_substitution_depth: 1,
        allow_empty_substitutions: false,
    });
    let program = Parser::parse("cat (cat (pwd))").unwrap();
    assert!(matches!(
        compiler.compile(&program),
        Err(CompileError::Invalid(_))
    ));
}

#[test]
fn unexpected_operand_message() {
    let err = compile("pwd /x").unwrap_err();
    assert_eq!(err.to_string(), "pwd: unexpected operand '/x'");
}

#[test]
fn missing_operand_message() {
    let err = compile("cp /a").unwrap_err();
    assert_eq!(err.to_string(), "cp: requires source and destination");
}

#[test]
fn unknown_command_after_first() {
    let err = compile("ls / | frobnicate").unwrap_err();
    assert!(matches!(&err, CompileError::UnknownCommand { name, .. } if name == "frobnicate"));
    assert_eq!(err.span().map(|s| s.start.offset), Some(7));
}

#[parameterized(
    head = { "head /a < /b", "head" },
    tail = { "tail -n 2 /a < /b", "tail" },
    alias = { "show-trailing-lines /a < /b", "tail" },
)]
fn leading_count_rejects_operand_with_input(source: &str, command: &str) {
    let err = compile(source).unwrap_err();
    assert!(
        matches!(
            &err,
            CompileError::UnexpectedOperand { command: c, operand, .. } if *c == command && operand == "/a"
        ),
        "{err:?}"
    );
}
