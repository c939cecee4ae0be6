// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced capability wrapper for consistent observability

use crate::{FileSystem, FsError, Metadata};
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use tracing::Instrument;

/// Wrapper that adds tracing to any FileSystem
#[derive(Clone)]
pub struct TracedFs<F> {
    inner: F,
}

impl<F> TracedFs<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<F: FileSystem> FileSystem for TracedFs<F> {
    async fn read(&self, path: &str) -> Result<Vec<u8>, FsError> {
        async {
            let result = self.inner.read(path).await;
            match &result {
                Ok(bytes) => tracing::debug!(len = bytes.len(), "read"),
                Err(e) => tracing::warn!(error = %e, "read failed"),
            }
            result
        }
        .instrument(tracing::debug_span!("fs.read", path))
        .await
    }

    async fn write(&self, path: &str, data: &[u8]) -> Result<(), FsError> {
        async {
            tracing::debug!(len = data.len(), "writing");
            let result = self.inner.write(path, data).await;
            if let Err(ref e) = result {
                tracing::error!(error = %e, "write failed");
            }
            result
        }
        .instrument(tracing::info_span!("fs.write", path))
        .await
    }

    async fn delete(&self, path: &str) -> Result<(), FsError> {
        let result = self.inner.delete(path).await;
        tracing::info_span!("fs.delete", path).in_scope(|| match &result {
            Ok(()) => tracing::info!("deleted"),
            Err(e) => tracing::warn!(error = %e, "delete failed"),
        });
        result
    }

    async fn exists(&self, path: &str) -> Result<bool, FsError> {
        let result = self.inner.exists(path).await;
        tracing::trace!(path, exists = ?result.as_ref().ok(), "checked");
        result
    }

    async fn stat(&self, path: &str) -> Result<Metadata, FsError> {
        let result = self.inner.stat(path).await;
        tracing::trace!(path, kind = ?result.as_ref().ok().map(|m| m.kind), "stat");
        result
    }

    async fn create_dir(&self, path: &str, parents: bool) -> Result<(), FsError> {
        let result = self.inner.create_dir(path, parents).await;
        if let Err(ref e) = result {
            tracing::error!(path, parents, error = %e, "create_dir failed");
        }
        result
    }

    fn list(&self, pattern: &str) -> BoxStream<'_, Result<String, FsError>> {
        tracing::debug!(pattern, "listing");
        let pattern = pattern.to_string();
        self.inner
            .list(&pattern)
            .inspect(move |item| {
                if let Err(e) = item {
                    tracing::warn!(pattern = %pattern, error = %e, "list failed");
                }
            })
            .boxed()
    }

    fn current_dir(&self) -> String {
        self.inner.current_dir()
    }

    fn read_lines(&self, path: &str) -> BoxStream<'_, Result<String, FsError>> {
        tracing::debug!(path, "reading lines");
        self.inner
            .read_lines(path)
            .inspect_err(|e| tracing::warn!(error = %e, "read_lines failed"))
            .boxed()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
