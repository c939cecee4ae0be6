// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::compiled;
use crate::ir::{ExpandedWord, Fragment, GlobWord, Resolution, Step};

fn list_paths(source: &str) -> Vec<ExpandedWord> {
    match compiled(source).steps.into_iter().next() {
        Some(Step::List { paths, .. }) => paths,
        other => panic!("expected ls, got {other:?}"),
    }
}

#[test]
fn quoted_and_bare_parts_concatenate() {
    assert_eq!(
        list_paths(r#"ls "foo"bar"#),
        vec![ExpandedWord::literal("foobar")]
    );
}

#[test]
fn glob_stays_pending() {
    assert_eq!(
        list_paths("ls /docs/*.md"),
        vec![ExpandedWord::Glob(Resolution::Pending(GlobWord {
            pattern: "/docs/*.md".into(),
            text: "/docs/*.md".into(),
        }))]
    );
}

#[test]
fn quoted_metacharacters_are_escaped_in_pattern() {
    let paths = list_paths(r#"ls "[x]"*"#);
    let [ExpandedWord::Glob(Resolution::Pending(glob))] = paths.as_slice() else {
        panic!("expected one pending glob, got {paths:?}");
    };
    assert_eq!(glob.pattern, "[[]x[]]*");
    assert_eq!(glob.text, "[x]*");
}

#[test]
fn quoted_star_is_literal() {
    assert_eq!(list_paths(r#"ls "*""#), vec![ExpandedWord::literal("*")]);
}

#[test]
fn substitution_keeps_fragments() {
    let paths = list_paths("ls /a/(pwd)");
    let [ExpandedWord::Substitution(Resolution::Pending(sub))] = paths.as_slice() else {
        panic!("expected one pending substitution, got {paths:?}");
    };
    assert!(!sub.is_sole_substitution());
    assert_eq!(sub.text, "/a/(pwd)");
    assert!(matches!(&sub.fragments[0], Fragment::Literal(s) if s == "/a/"));
    assert!(matches!(&sub.fragments[1], Fragment::Command { source, .. } if source == "pwd"));
}

#[test]
fn sole_substitution() {
    let paths = list_paths("ls (pwd)");
    let [ExpandedWord::Substitution(Resolution::Pending(sub))] = paths.as_slice() else {
        panic!("expected one pending substitution, got {paths:?}");
    };
    assert!(sub.is_sole_substitution());
    assert!(!sub.has_glob());
}

#[test]
fn substitution_with_glob() {
    let paths = list_paths("ls (pwd)/*");
    let [ExpandedWord::Substitution(Resolution::Pending(sub))] = paths.as_slice() else {
        panic!("expected one pending substitution, got {paths:?}");
    };
    assert!(sub.has_glob());
}
