// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::MemoryFs;
use futures::TryStreamExt;

#[tokio::test]
async fn traced_delegates_reads_and_writes() {
    let inner = MemoryFs::new().with_file("/a.txt", "x");
    let fs = TracedFs::new(inner.clone());

    assert_eq!(fs.read("/a.txt").await.unwrap(), b"x");
    fs.write("/b.txt", b"y").await.unwrap();
    assert_eq!(inner.contents("/b.txt").as_deref(), Some("y"));
}

#[tokio::test]
async fn traced_passes_errors_through() {
    let fs = TracedFs::new(MemoryFs::new());
    assert!(fs.read("/missing").await.unwrap_err().is_not_found());
    assert!(fs.delete("/missing").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn traced_list_and_current_dir() {
    let fs = TracedFs::new(MemoryFs::new().with_file("/d/x", "").with_current_dir("/d"));
    let found: Vec<String> = fs.list("/d/*").try_collect().await.unwrap();
    assert_eq!(found, vec!["/d/x"]);
    assert_eq!(fs.current_dir(), "/d");
}
