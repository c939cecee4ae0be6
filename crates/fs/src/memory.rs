// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory filesystem fake for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::path::{self, is_descendant, normalize};
use crate::{FileSystem, FsError, Metadata};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use glob::{MatchOptions, Pattern};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir,
}

struct MemoryFsState {
    nodes: BTreeMap<String, Node>,
    cwd: String,
}

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle and inspect the tree after
/// an execution mutated it.
#[derive(Clone)]
pub struct MemoryFs {
    inner: Arc<RwLock<MemoryFsState>>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), Node::Dir);
        Self {
            inner: Arc::new(RwLock::new(MemoryFsState {
                nodes,
                cwd: "/".to_string(),
            })),
        }
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating missing parent directories.
    pub fn with_file(self, path: &str, contents: impl AsRef<[u8]>) -> Self {
        self.insert_file(path, contents);
        self
    }

    /// Add a directory, creating missing parents.
    pub fn with_dir(self, path: &str) -> Self {
        let path = normalize(path);
        let mut state = self.inner.write();
        Self::create_parents(&mut state.nodes, &path);
        state.nodes.insert(path, Node::Dir);
        drop(state);
        self
    }

    /// Set the current directory.
    pub fn with_current_dir(self, cwd: &str) -> Self {
        self.inner.write().cwd = normalize(cwd);
        self
    }

    /// Insert or replace a file, creating missing parent directories.
    pub fn insert_file(&self, path: &str, contents: impl AsRef<[u8]>) {
        let path = normalize(path);
        let mut state = self.inner.write();
        Self::create_parents(&mut state.nodes, &path);
        state
            .nodes
            .insert(path, Node::File(contents.as_ref().to_vec()));
    }

    /// Contents of a file as UTF-8 text, if it exists.
    pub fn contents(&self, path: &str) -> Option<String> {
        match self.inner.read().nodes.get(&normalize(path)) {
            Some(Node::File(bytes)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.inner.read().nodes.get(&normalize(path)), Some(Node::Dir))
    }

    /// All paths in the tree, sorted, excluding the root.
    pub fn paths(&self) -> Vec<String> {
        self.inner
            .read()
            .nodes
            .keys()
            .filter(|p| p.as_str() != "/")
            .cloned()
            .collect()
    }

    fn create_parents(nodes: &mut BTreeMap<String, Node>, path: &str) {
        let mut current = path::parent(path);
        let mut missing = Vec::new();
        while let Some(dir) = current {
            if nodes.contains_key(dir) {
                break;
            }
            missing.push(dir.to_string());
            current = path::parent(dir);
        }
        for dir in missing {
            nodes.insert(dir, Node::Dir);
        }
    }

    fn check_parent(nodes: &BTreeMap<String, Node>, path: &str) -> Result<(), FsError> {
        let Some(parent) = path::parent(path) else {
            return Ok(());
        };
        match nodes.get(parent) {
            Some(Node::Dir) => Ok(()),
            Some(Node::File(_)) => Err(FsError::NotADirectory(parent.to_string())),
            None => Err(FsError::NotFound(parent.to_string())),
        }
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn read(&self, path: &str) -> Result<Vec<u8>, FsError> {
        match self.inner.read().nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(Node::Dir) => Err(FsError::IsADirectory(path.to_string())),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn write(&self, path: &str, data: &[u8]) -> Result<(), FsError> {
        let mut state = self.inner.write();
        Self::check_parent(&state.nodes, path)?;
        if let Some(Node::Dir) = state.nodes.get(path) {
            return Err(FsError::IsADirectory(path.to_string()));
        }
        state
            .nodes
            .insert(path.to_string(), Node::File(data.to_vec()));
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), FsError> {
        let mut state = self.inner.write();
        if path == "/" {
            return Err(FsError::Io {
                path: path.to_string(),
                message: "refusing to delete the root directory".to_string(),
            });
        }
        match state.nodes.remove(path) {
            Some(Node::File(_)) => Ok(()),
            Some(Node::Dir) => {
                state.nodes.retain(|p, _| !is_descendant(p, path));
                Ok(())
            }
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn exists(&self, path: &str) -> Result<bool, FsError> {
        Ok(self.inner.read().nodes.contains_key(path))
    }

    async fn stat(&self, path: &str) -> Result<Metadata, FsError> {
        match self.inner.read().nodes.get(path) {
            Some(Node::File(bytes)) => Ok(Metadata::file(bytes.len() as u64)),
            Some(Node::Dir) => Ok(Metadata::directory()),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn create_dir(&self, path: &str, parents: bool) -> Result<(), FsError> {
        let mut state = self.inner.write();
        match state.nodes.get(path) {
            Some(Node::Dir) if parents => return Ok(()),
            Some(_) => return Err(FsError::AlreadyExists(path.to_string())),
            None => {}
        }
        if parents {
            let mut current = path::parent(path);
            while let Some(dir) = current {
                if let Some(Node::File(_)) = state.nodes.get(dir) {
                    return Err(FsError::NotADirectory(dir.to_string()));
                }
                current = path::parent(dir);
            }
            Self::create_parents(&mut state.nodes, path);
        } else {
            Self::check_parent(&state.nodes, path)?;
        }
        state.nodes.insert(path.to_string(), Node::Dir);
        Ok(())
    }

    fn list(&self, pattern: &str) -> BoxStream<'_, Result<String, FsError>> {
        let compiled = match Pattern::new(pattern) {
            Ok(p) => p,
            Err(e) => {
                let err = FsError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.msg.to_string(),
                };
                return stream::iter(vec![Err(err)]).boxed();
            }
        };
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };
        let matches: Vec<Result<String, FsError>> = self
            .inner
            .read()
            .nodes
            .keys()
            .filter(|p| p.as_str() != "/" && compiled.matches_with(p, options))
            .cloned()
            .map(Ok)
            .collect();
        stream::iter(matches).boxed()
    }

    fn current_dir(&self) -> String {
        self.inner.read().cwd.clone()
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
