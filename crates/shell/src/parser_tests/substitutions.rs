// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{cmd_name, nested, only_command, parse};
use crate::ast::WordPart;
use crate::parse_error::ParseError;
use crate::parser::{Parser, MAX_SUBSTITUTION_DEPTH};

#[test]
fn substitution_body_is_parsed() {
    let ast = parse("cat (ls /logs | head -n 1)");
    let word = &only_command(&ast).args[0];
    match &word.parts[..] {
        [WordPart::CommandSub { program, source, .. }] => {
            assert_eq!(source, "ls /logs | head -n 1");
            assert_eq!(program.pipeline.commands.len(), 2);
            assert_eq!(cmd_name(&program.pipeline.commands[1]), "head");
        }
        other => panic!("unexpected parts {other:?}"),
    }
    assert_eq!(ast.count_commands(), 3);
    assert_eq!(ast.command_names(), vec!["cat", "ls", "head"]);
}

#[test]
fn nested_spans_are_absolute() {
    let source = "cat (cat (pwd))";
    let ast = parse(source);
    let outer = &only_command(&ast).args[0];
    let WordPart::CommandSub { program, span, .. } = &outer.parts[0] else {
        panic!("expected substitution");
    };
    assert_eq!(span.slice(source), "cat (pwd)");

    let inner_cmd = &program.pipeline.commands[0];
    assert_eq!(inner_cmd.span.slice(source), "cat (pwd)");
    let WordPart::CommandSub { program: inner, .. } = &inner_cmd.args[0].parts[0] else {
        panic!("expected inner substitution");
    };
    assert_eq!(inner.pipeline.commands[0].span.slice(source), "pwd");
    assert_eq!(inner.pipeline.commands[0].span.start.column, 11);
}

#[test]
fn substitution_inside_double_quotes() {
    let ast = parse(r#"cat "/dir/(pwd)""#);
    let word = &only_command(&ast).args[0];
    assert!(word.has_substitution());
    assert_eq!(word.parts.len(), 2);
}

#[test]
fn ten_levels_parse() {
    let ast = parse(&nested(MAX_SUBSTITUTION_DEPTH));
    assert_eq!(ast.max_substitution_depth(), 10);
    assert_eq!(ast.count_commands(), 11);
}

#[test]
fn eleven_levels_fail() {
    let err = Parser::parse(&nested(MAX_SUBSTITUTION_DEPTH + 1)).unwrap_err();
    assert!(matches!(
        err,
        ParseError::SubstitutionDepthExceeded { limit: 10, .. }
    ));
    assert_eq!(err.code().as_str(), "E005");
}

#[test]
fn empty_substitution_is_empty_program() {
    let ast = parse("cat ()");
    let WordPart::CommandSub { program, .. } = &only_command(&ast).args[0].parts[0] else {
        panic!("expected substitution");
    };
    assert!(program.pipeline.is_empty());
}

#[test]
fn globs_inside_substitutions_are_found() {
    assert!(parse("cat (ls /logs/*.txt)").has_globs());
    assert!(!parse("cat (ls /logs)").has_globs());
}
