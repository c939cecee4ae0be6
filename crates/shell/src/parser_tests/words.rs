// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{assert_literal, only_command, parse};
use crate::ast::WordPart;

#[test]
fn quoted_and_bare_fragments_join() {
    let ast = parse(r#"cat "foo"bar"#);
    let cmd = only_command(&ast);
    assert_eq!(cmd.args.len(), 1);
    assert_literal(&cmd.args[0], "foobar");
    assert_eq!(
        cmd.args[0].parts,
        vec![WordPart::quoted("foo"), WordPart::literal("bar")]
    );
}

#[test]
fn single_quotes_keep_spaces() {
    let ast = parse("cat 'my notes.txt'");
    let cmd = only_command(&ast);
    assert_literal(&cmd.args[0], "my notes.txt");
    assert!(cmd.args[0].is_quoted());
}

#[test]
fn glob_word() {
    let ast = parse("ls /logs/*.txt");
    let word = &only_command(&ast).args[0];
    assert!(word.has_glob());
    assert!(!word.has_substitution());
    assert_eq!(word.literal_value(), None);
    assert_eq!(word.text(), "/logs/*.txt");
    assert_eq!(
        word.parts,
        vec![
            WordPart::literal("/logs/"),
            WordPart::glob("*"),
            WordPart::literal(".txt"),
        ]
    );
}

#[test]
fn quoted_star_is_literal() {
    let ast = parse("rm '*'");
    let word = &only_command(&ast).args[0];
    assert!(!word.has_glob());
    assert_literal(word, "*");
}

#[test]
fn empty_quotes_are_one_empty_argument() {
    let ast = parse("touch ''");
    let cmd = only_command(&ast);
    assert_eq!(cmd.args.len(), 1);
    assert_literal(&cmd.args[0], "");
}

#[test]
fn word_text_reproduces_parts() {
    let ast = parse("cat /a/(pwd)[0-9]x");
    let word = &only_command(&ast).args[0];
    assert_eq!(word.text(), "/a/(pwd)[0-9]x");
    assert!(word.has_glob());
    assert!(word.has_substitution());
}

#[test]
fn numbers_and_names_are_words() {
    let ast = parse("head -n 5 file_1");
    let cmd = only_command(&ast);
    assert_literal(&cmd.args[1], "5");
    assert_literal(&cmd.args[2], "file_1");
}
