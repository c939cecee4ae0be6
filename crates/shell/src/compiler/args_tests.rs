// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ir::{GlobWord, Resolution};
use yare::parameterized;

const SPECS: &[FlagSpec] = &[
    FlagSpec::switch('r'),
    FlagSpec::switch('f'),
    FlagSpec::valued('n'),
];

fn lit(s: &str) -> (ExpandedWord, Span) {
    (ExpandedWord::literal(s), Span::default())
}

fn run(args: &[&str]) -> Result<ParsedArgs, CompileError> {
    classify("test", args.iter().map(|a| lit(a)).collect(), SPECS)
}

fn operands(parsed: &ParsedArgs) -> Vec<String> {
    parsed.operands.iter().map(|o| o.word.text()).collect()
}

#[test]
fn switches_and_operands() {
    let parsed = run(&["-r", "/a", "/b"]).unwrap();
    assert!(parsed.has(&['r']));
    assert!(!parsed.has(&['f']));
    assert_eq!(operands(&parsed), vec!["/a", "/b"]);
}

#[test]
fn clusters_split() {
    let parsed = run(&["-rf", "/a"]).unwrap();
    assert_eq!(parsed.flags, vec![('r', None), ('f', None)]);
}

#[parameterized(
    separate = { &["-n", "5", "/log"] },
    attached = { &["-n5", "/log"] },
    in_cluster = { &["-rn5", "/log"] },
)]
fn valued_flags(args: &[&str]) {
    let parsed = run(args).unwrap();
    assert_eq!(parsed.value('n'), Some(&ExpandedWord::literal("5")));
    assert_eq!(operands(&parsed), vec!["/log"]);
}

#[test]
fn last_value_wins() {
    let parsed = run(&["-n", "1", "-n", "2"]).unwrap();
    assert_eq!(parsed.value('n'), Some(&ExpandedWord::literal("2")));
}

#[test]
fn value_may_look_like_a_flag() {
    let parsed = run(&["-n", "-3"]).unwrap();
    assert_eq!(parsed.value('n'), Some(&ExpandedWord::literal("-3")));
}

#[test]
fn double_dash_ends_flags() {
    let parsed = run(&["-r", "--", "-f", "/a"]).unwrap();
    assert_eq!(parsed.flags, vec![('r', None)]);
    assert_eq!(operands(&parsed), vec!["-f", "/a"]);
}

#[test]
fn lone_dash_is_an_operand() {
    let parsed = run(&["-"]).unwrap();
    assert_eq!(operands(&parsed), vec!["-"]);
}

#[test]
fn pending_words_are_operands() {
    let glob = ExpandedWord::Glob(Resolution::Pending(GlobWord {
        pattern: "-*".into(),
        text: "-*".into(),
    }));
    let parsed = classify("test", vec![(glob.clone(), Span::default())], SPECS).unwrap();
    assert!(parsed.flags.is_empty());
    assert_eq!(parsed.operands[0].word, glob);
}

#[parameterized(
    short = { &["-x"], "-x" },
    in_cluster = { &["-rx"], "-x" },
    long = { &["--force"], "--force" },
)]
fn unknown_flags(args: &[&str], flag: &str) {
    match run(args) {
        Err(CompileError::UnknownFlag { flag: found, .. }) => assert_eq!(found, flag),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn missing_value() {
    assert!(matches!(
        run(&["/log", "-n"]),
        Err(CompileError::MissingFlagValue { flag: 'n', .. })
    ));
}
