// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use futures::TryStreamExt;

#[tokio::test]
async fn read_returns_inserted_contents() {
    let fs = MemoryFs::new().with_file("/a/b.txt", "hello");
    assert_eq!(fs.read("/a/b.txt").await.unwrap(), b"hello");
    assert!(fs.is_dir("/a"));
}

#[tokio::test]
async fn read_missing_is_not_found() {
    let fs = MemoryFs::new();
    let err = fs.read("/nope").await.unwrap_err();
    assert_eq!(err, FsError::NotFound("/nope".to_string()));
}

#[tokio::test]
async fn read_directory_fails() {
    let fs = MemoryFs::new().with_dir("/d");
    assert!(matches!(fs.read("/d").await, Err(FsError::IsADirectory(_))));
}

#[tokio::test]
async fn write_requires_existing_parent() {
    let fs = MemoryFs::new();
    let err = fs.write("/missing/file", b"x").await.unwrap_err();
    assert_eq!(err, FsError::NotFound("/missing".to_string()));

    fs.write("/file", b"x").await.unwrap();
    assert_eq!(fs.contents("/file").as_deref(), Some("x"));
}

#[tokio::test]
async fn delete_directory_removes_tree() {
    let fs = MemoryFs::new()
        .with_file("/d/a", "1")
        .with_file("/d/sub/b", "2")
        .with_file("/dx", "3");
    fs.delete("/d").await.unwrap();
    assert_eq!(fs.paths(), vec!["/dx".to_string()]);
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let fs = MemoryFs::new();
    assert!(fs.delete("/x").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn list_matches_single_segment_sorted() {
    let fs = MemoryFs::new()
        .with_file("/logs/b.log", "")
        .with_file("/logs/a.log", "")
        .with_file("/logs/.hidden.log", "")
        .with_file("/logs/nested/c.log", "");
    let found: Vec<String> = fs.list("/logs/*.log").try_collect().await.unwrap();
    assert_eq!(found, vec!["/logs/a.log", "/logs/b.log"]);
}

#[tokio::test]
async fn list_invalid_pattern_errors() {
    let fs = MemoryFs::new();
    let result: Result<Vec<String>, FsError> = fs.list("/[").try_collect().await;
    assert!(matches!(result, Err(FsError::InvalidPattern { .. })));
}

#[tokio::test]
async fn create_dir_with_and_without_parents() {
    let fs = MemoryFs::new();
    assert!(fs.create_dir("/a/b", false).await.unwrap_err().is_not_found());
    fs.create_dir("/a/b", true).await.unwrap();
    assert!(fs.is_dir("/a") && fs.is_dir("/a/b"));
    fs.create_dir("/a/b", true).await.unwrap();
    assert!(matches!(
        fs.create_dir("/a/b", false).await,
        Err(FsError::AlreadyExists(_))
    ));
}

#[tokio::test]
async fn stat_reports_kind_and_size() {
    let fs = MemoryFs::new().with_file("/f", "abc").with_dir("/d");
    assert_eq!(fs.stat("/f").await.unwrap(), Metadata::file(3));
    assert!(fs.stat("/d").await.unwrap().is_dir());
}

#[tokio::test]
async fn clones_share_state() {
    let fs = MemoryFs::new().with_current_dir("/home");
    let handle = fs.clone();
    fs.insert_file("/home/x", "1");
    assert_eq!(handle.contents("/home/x").as_deref(), Some("1"));
    assert_eq!(handle.current_dir(), "/home");
}
