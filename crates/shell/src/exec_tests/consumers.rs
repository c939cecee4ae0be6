// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{effect, fixture, run};
use crate::compiler::CompileError;
use crate::exec::{Completion, ExecError};
use fsh_fs::FsError;
use yare::parameterized;

#[tokio::test]
async fn remove_recursive_many() {
    let fs = fixture();
    let done = effect(&fs, "remove -r /tmp/a /tmp/b").await.unwrap();
    assert_eq!(done, Completion { operations: 2 });
    assert!(!fs.is_dir("/tmp/a"));
    assert!(!fs.is_dir("/tmp/b"));
    assert!(fs.contents("/tmp/a/x.txt").is_none());
}

#[tokio::test]
async fn remove_directory_needs_recursive() {
    let fs = fixture();
    assert_eq!(
        effect(&fs, "rm /tmp/a").await,
        Err(ExecError::IsADirectory("/tmp/a".into()))
    );
    assert!(fs.is_dir("/tmp/a"));
}

#[tokio::test]
async fn force_ignores_missing() {
    let fs = fixture();
    assert_eq!(
        effect(&fs, "rm -f /nope a.md").await,
        Ok(Completion { operations: 1 })
    );
    assert!(fs.contents("/docs/a.md").is_none());
}

#[tokio::test]
async fn remove_missing_fails_fast() {
    let fs = fixture();
    assert_eq!(
        effect(&fs, "rm /nope /docs/a.md").await,
        Err(ExecError::Fs(FsError::NotFound("/nope".into())))
    );
    // Nothing after the failure ran.
    assert!(fs.contents("/docs/a.md").is_some());
}

#[tokio::test]
async fn remove_listed_files() {
    let fs = fixture();
    let done = effect(&fs, "ls /docs/*.md | rm").await.unwrap();
    assert_eq!(done.operations, 2);
    assert!(fs.contents("/docs/a.md").is_none());
    assert!(fs.contents("/docs/b.md").is_none());
    assert!(fs.contents("/docs/notes.txt").is_some());
}

#[tokio::test]
async fn touch_creates_empty_and_keeps_existing() {
    let fs = fixture();
    effect(&fs, "touch new.txt a.md").await.unwrap();
    assert_eq!(fs.contents("/docs/new.txt").as_deref(), Some(""));
    assert_eq!(fs.contents("/docs/a.md").as_deref(), Some("alpha\nbeta\n"));
}

#[tokio::test]
async fn make_directory_with_parents() {
    let fs = fixture();
    effect(&fs, "mkdir -p /x/y/z").await.unwrap();
    assert!(fs.is_dir("/x/y/z"));
}

#[tokio::test]
async fn make_directory_without_parent() {
    let fs = fixture();
    assert_eq!(
        effect(&fs, "make-directory /x/y").await,
        Err(ExecError::Fs(FsError::NotFound("/x".into())))
    );
}

#[tokio::test]
async fn copy_into_directory() {
    let fs = fixture();
    effect(&fs, "cp a.md b.md /tmp/b").await.unwrap();
    assert_eq!(fs.contents("/tmp/b/a.md").as_deref(), Some("alpha\nbeta\n"));
    assert_eq!(fs.contents("/tmp/b/b.md").as_deref(), Some("gamma\n"));
    assert!(fs.contents("/docs/a.md").is_some());
}

#[tokio::test]
async fn copy_many_needs_directory() {
    let fs = fixture();
    assert_eq!(
        effect(&fs, "cp a.md b.md /log.txt").await,
        Err(ExecError::NotADirectory("/log.txt".into()))
    );
    assert_eq!(fs.contents("/log.txt").map(|c| c.lines().count()), Some(12));
}

#[parameterized(
    copy = { "cp /docs/*.md /dest" },
    move_ = { "mv /docs/*.md /dest" },
)]
#[test_macro(tokio::test)]
async fn glob_with_many_matches_needs_directory(source: &str) {
    let fs = fixture();
    assert_eq!(
        effect(&fs, source).await,
        Err(ExecError::NotADirectory("/dest".into()))
    );
    assert!(fs.contents("/dest").is_none());
    assert!(fs.contents("/docs/a.md").is_some());
}

#[tokio::test]
async fn glob_with_one_match_copies_to_file() {
    let fs = fixture();
    let done = effect(&fs, "cp /docs/b.* /dest").await.unwrap();
    assert_eq!(done.operations, 1);
    assert_eq!(fs.contents("/dest").as_deref(), Some("gamma\n"));
}

#[tokio::test]
async fn copy_directory_needs_recursive() {
    let fs = fixture();
    assert_eq!(
        effect(&fs, "cp /tmp/a /tmp/c").await,
        Err(ExecError::IsADirectory("/tmp/a".into()))
    );
}

#[tokio::test]
async fn copy_tree() {
    let fs = fixture();
    effect(&fs, "cp -r /tmp/a /tmp/c").await.unwrap();
    assert_eq!(fs.contents("/tmp/c/x.txt").as_deref(), Some("x\n"));
    assert_eq!(fs.contents("/tmp/a/x.txt").as_deref(), Some("x\n"));
}

#[tokio::test]
async fn copy_into_itself() {
    let fs = fixture();
    let err = effect(&fs, "cp -r /tmp /tmp/sub").await.unwrap_err();
    assert!(
        matches!(err, ExecError::InvalidOperand { command: "cp", .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn copy_listed_files() {
    let fs = fixture();
    effect(&fs, "ls *.md | copy /tmp/b").await.unwrap();
    assert!(fs.contents("/tmp/b/a.md").is_some());
    assert!(fs.contents("/tmp/b/b.md").is_some());
}

#[tokio::test]
async fn move_renames() {
    let fs = fixture();
    effect(&fs, "mv a.md renamed.md").await.unwrap();
    assert!(fs.contents("/docs/a.md").is_none());
    assert_eq!(
        fs.contents("/docs/renamed.md").as_deref(),
        Some("alpha\nbeta\n")
    );
}

#[tokio::test]
async fn move_directory() {
    let fs = fixture();
    effect(&fs, "move /tmp/a /tmp/b").await.unwrap();
    assert_eq!(fs.contents("/tmp/b/a/x.txt").as_deref(), Some("x\n"));
    assert!(!fs.is_dir("/tmp/a"));
}

#[tokio::test]
async fn move_into_own_subtree() {
    let fs = fixture();
    let err = effect(&fs, "mv /tmp /tmp/b").await.unwrap_err();
    assert!(matches!(err, ExecError::InvalidOperand { command: "mv", .. }));
    assert!(fs.is_dir("/tmp/a"));
}

#[tokio::test]
async fn mutating_command_must_be_last() {
    let fs = fixture();
    let err = run(&fs, "rm a.md | ls").await.unwrap_err();
    assert!(matches!(
        err,
        ExecError::Compile(CompileError::NotLastInPipeline { command: "rm", .. })
    ));
    assert!(fs.contents("/docs/a.md").is_some());
}
