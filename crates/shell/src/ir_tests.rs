// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn glob(text: &str) -> ExpandedWord {
    ExpandedWord::Glob(Resolution::Pending(GlobWord {
        pattern: text.to_string(),
        text: text.to_string(),
    }))
}

#[test]
fn resolving_records_values() {
    let word = glob("/docs/*.md").resolve(vec!["/docs/a.md".into(), "/docs/b.md".into()]);
    assert!(!word.is_pending());
    assert_eq!(word.into_values(), vec!["/docs/a.md", "/docs/b.md"]);
}

#[test]
fn resolved_word_stays_resolved() {
    let word = glob("/docs/*.md").resolve(vec!["/docs/a.md".into()]);
    let again = word.clone().resolve(vec!["/other".into()]);
    assert_eq!(again, word);
}

#[test]
fn literal_ignores_resolution() {
    let word = ExpandedWord::literal("/a").resolve(vec!["/b".into()]);
    assert_eq!(word.into_values(), vec!["/a"]);
}

#[test]
fn substitution_resolves_to_many_values() {
    let word = ExpandedWord::Substitution(Resolution::Pending(SubstitutionWord {
        fragments: vec![],
        text: "(ls)".into(),
    }));
    assert_eq!(word.clone().into_values(), vec!["(ls)"]);
    let word = word.resolve(vec![]);
    assert!(word.into_values().is_empty());
}
