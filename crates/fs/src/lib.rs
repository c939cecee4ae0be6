// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Filesystem capability consumed by the fsh command language.
//!
//! The language core never touches a concrete storage backend. Everything it
//! needs (reading, listing by glob pattern, writing, deleting, stat) goes
//! through the [`FileSystem`] trait defined here. Backends live outside the
//! core; this crate only ships:
//!
//! - [`TracedFs`], a wrapper that adds `tracing` spans to any backend
//! - `MemoryFs`, an in-memory fake (behind the `test-support` feature)
//! - [`path`], helpers for the `/`-separated virtual path model

pub mod path;
pub mod traced;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod memory;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryFs;

pub use traced::TracedFs;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a filesystem capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),
    #[error("file exists: {0}")]
    AlreadyExists(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
    #[error("invalid glob pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("I/O failure on {path}: {message}")]
    Io { path: String, message: String },
}

impl FsError {
    /// Returns true for the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// Kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

/// Entry metadata returned by [`FileSystem::stat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub kind: EntryKind,
    /// Size in bytes (0 for directories).
    pub size: u64,
}

impl Metadata {
    pub fn file(size: u64) -> Self {
        Self {
            kind: EntryKind::File,
            size,
        }
    }

    pub fn directory() -> Self {
        Self {
            kind: EntryKind::Directory,
            size: 0,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The minimal filesystem interface the language core depends on.
///
/// Paths handed to a capability are absolute and normalized (see
/// [`path::resolve`]). Patterns passed to [`FileSystem::list`] use `glob`
/// syntax (`*`, `?`, `[...]`, `[!...]`) where `*` never crosses a `/` and a
/// leading `.` in a name must be matched literally.
///
/// Implementations own their consistency story: the core may call one
/// capability from several independent executions and does no locking.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read a whole file.
    async fn read(&self, path: &str) -> Result<Vec<u8>, FsError>;

    /// Write a file, replacing previous contents. The parent directory must exist.
    async fn write(&self, path: &str, data: &[u8]) -> Result<(), FsError>;

    /// Delete a file or a directory tree.
    async fn delete(&self, path: &str) -> Result<(), FsError>;

    async fn exists(&self, path: &str) -> Result<bool, FsError>;

    async fn stat(&self, path: &str) -> Result<Metadata, FsError>;

    /// Create a directory, optionally creating missing parents.
    async fn create_dir(&self, path: &str, parents: bool) -> Result<(), FsError>;

    /// Lazily enumerate paths matching a glob pattern, in sorted order.
    fn list(&self, pattern: &str) -> BoxStream<'_, Result<String, FsError>>;

    /// Directory relative paths are resolved against.
    fn current_dir(&self) -> String;

    /// Lazily read a file as text lines.
    ///
    /// The default reads the whole file and splits it; backends with real
    /// streaming reads should override this.
    fn read_lines(&self, path: &str) -> BoxStream<'_, Result<String, FsError>> {
        let path = path.to_string();
        stream::once(async move { self.read(&path).await })
            .map(|result| match result {
                Ok(bytes) => stream::iter(split_lines(&bytes).into_iter().map(Ok)).left_stream(),
                Err(e) => stream::iter(vec![Err(e)]).right_stream(),
            })
            .flatten()
            .boxed()
    }
}

/// Split file contents into lines.
///
/// Accepts `\n` and `\r\n` endings; a final line terminator does not produce
/// a trailing empty line. Invalid UTF-8 is replaced rather than rejected.
pub fn split_lines(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
