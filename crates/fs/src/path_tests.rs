// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    root            = { "/", "/" },
    trailing_slash  = { "/a/b/", "/a/b" },
    double_slash    = { "//a//b", "/a/b" },
    dot_segments    = { "/a/./b/.", "/a/b" },
    dotdot          = { "/a/b/../c", "/a/c" },
    dotdot_at_root  = { "/../..", "/" },
)]
fn normalize_cases(input: &str, expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn resolve_relative_against_cwd() {
    assert_eq!(resolve("/home/agent", "notes.txt"), "/home/agent/notes.txt");
    assert_eq!(resolve("/home/agent", "../x"), "/home/x");
}

#[test]
fn resolve_absolute_ignores_cwd() {
    assert_eq!(resolve("/home", "/tmp/./a"), "/tmp/a");
}

#[test]
fn file_name_and_parent() {
    assert_eq!(file_name("/a/b.txt"), "b.txt");
    assert_eq!(file_name("/"), "/");
    assert_eq!(parent("/a/b.txt"), Some("/a"));
    assert_eq!(parent("/a"), Some("/"));
    assert_eq!(parent("/"), None);
}

#[test]
fn join_handles_root() {
    assert_eq!(join("/", "a"), "/a");
    assert_eq!(join("/dir", "a"), "/dir/a");
}

#[test]
fn descendant_checks_segment_boundary() {
    assert!(is_descendant("/a/b", "/a"));
    assert!(!is_descendant("/ab", "/a"));
    assert!(!is_descendant("/a", "/a"));
    assert!(is_descendant("/a", "/"));
}

#[test]
fn escape_pattern_neutralizes_metacharacters() {
    let escaped = escape_pattern("/d/a*b?[c]");
    let pattern = glob::Pattern::new(&escaped).unwrap();
    assert!(pattern.matches("/d/a*b?[c]"));
    assert!(!pattern.matches("/d/axbyc"));
}
