// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{effect, fixture, lines};
use crate::exec::{Completion, ExecError};

#[tokio::test]
async fn output_writes_rendered_records() {
    let fs = fixture();
    let done = effect(&fs, "cat a.md > /out.txt").await.unwrap();
    assert_eq!(done, Completion { operations: 2 });
    assert_eq!(fs.contents("/out.txt").as_deref(), Some("alpha\nbeta\n"));
}

#[tokio::test]
async fn output_replaces_existing_file() {
    let fs = fixture();
    effect(&fs, "tail -n 1 /log.txt > notes.txt").await.unwrap();
    assert_eq!(fs.contents("/docs/notes.txt").as_deref(), Some("line 12\n"));
}

#[tokio::test]
async fn empty_stream_writes_empty_file() {
    let fs = fixture();
    effect(&fs, "head -n 0 /log.txt > /empty").await.unwrap();
    assert_eq!(fs.contents("/empty").as_deref(), Some(""));
}

#[tokio::test]
async fn input_feeds_first_command() {
    let fs = fixture();
    assert_eq!(lines(&fs, "tail -n 1 < /log.txt").await, vec!["line 12"]);
    assert_eq!(lines(&fs, "cat < b.md").await, vec!["gamma"]);
}

#[tokio::test]
async fn input_paths_feed_a_consumer() {
    let fs = fixture();
    fs.insert_file("/victims", "a.md\n/docs/b.md\n");
    let done = effect(&fs, "rm < /victims").await.unwrap();
    assert_eq!(done.operations, 2);
    assert!(fs.contents("/docs/a.md").is_none());
    assert!(fs.contents("/docs/b.md").is_none());
}

#[tokio::test]
async fn consumer_with_output_leaves_empty_file() {
    let fs = fixture();
    let done = effect(&fs, "touch /z > /out").await.unwrap();
    assert_eq!(done.operations, 1);
    assert_eq!(fs.contents("/z").as_deref(), Some(""));
    assert_eq!(fs.contents("/out").as_deref(), Some(""));
}

#[tokio::test]
async fn output_to_directory() {
    let fs = fixture();
    assert_eq!(
        effect(&fs, "ls > /tmp/b").await,
        Err(ExecError::IsADirectory("/tmp/b".into()))
    );
}

#[tokio::test]
async fn ambiguous_output() {
    let fs = fixture();
    let err = effect(&fs, "ls > *.md").await.unwrap_err();
    assert_eq!(
        err,
        ExecError::AmbiguousRedirect {
            target: "*.md".into(),
            count: 2,
        }
    );
}

#[tokio::test]
async fn output_target_from_glob_with_one_match() {
    let fs = fixture();
    effect(&fs, "pwd > notes.*").await.unwrap();
    assert_eq!(fs.contents("/docs/notes.txt").as_deref(), Some("/docs\n"));
}
