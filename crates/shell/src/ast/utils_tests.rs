// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::ast::Program;
use yare::parameterized;

fn parse(source: &str) -> Program {
    Program::parse(source).unwrap()
}

#[parameterized(
    none = { "ls /tmp", 0 },
    one = { "cat (ls /logs)", 1 },
    sibling = { "cp (pwd) (pwd) /dst", 1 },
    two = { "cat (cat (pwd))", 2 },
    in_redirect = { "cat > (cat (pwd))", 2 },
)]
fn substitution_depth(source: &str, expected: usize) {
    assert_eq!(parse(source).max_substitution_depth(), expected);
}

#[test]
fn counts_commands_in_substitutions() {
    assert_eq!(parse("cat (ls | head) | tail").count_commands(), 4);
}

#[test]
fn finds_globs() {
    assert!(parse("rm /tmp/*.log").has_globs());
    assert!(!parse("rm '/tmp/*.log'").has_globs());
    assert!(parse("cat > /out (ls [ab])").has_globs());
}

#[test]
fn command_names_in_visit_order() {
    assert_eq!(
        parse("cat (ls /a) | tail -n (cat /n)").command_names(),
        vec!["cat", "ls", "tail", "cat"]
    );
}
