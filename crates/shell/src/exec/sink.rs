// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal consumers and output redirection.
//!
//! Consumers take their paths either from resolved operands or, when they
//! have none, from upstream records. Paths are applied one at a time in
//! order; the first failure ends the effect.

use super::expand::PathStream;
use super::{Completion, ExecError, Executor, RecordStream};
use crate::ir::{ExpandedWord, Step};
use fsh_fs::path;
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use futures::FutureExt;
use tracing::Instrument;

type Effect<'a> = BoxFuture<'a, Result<Completion, ExecError>>;

impl Executor {
    /// Resolve a terminal step's operands and build its effect.
    pub(super) async fn consume<'a>(
        &'a self,
        step: Step,
        upstream: Option<RecordStream<'a>>,
        depth: usize,
    ) -> Result<Effect<'a>, ExecError> {
        let command = step.command();
        let effect: Effect<'a> = match step {
            Step::Remove {
                paths,
                recursive,
                force,
            } => {
                let paths = self.operand_stream(command, paths, upstream, depth);
                self.remove(paths, recursive, force).boxed()
            }
            Step::Touch { paths } => {
                let paths = self.operand_stream(command, paths, upstream, depth);
                self.touch(paths).boxed()
            }
            Step::MakeDir { paths, parents } => {
                let paths = self.operand_stream(command, paths, upstream, depth);
                self.make_dir(paths, parents).boxed()
            }
            Step::Copy {
                sources,
                dest,
                recursive,
            } => {
                let dest = self.destination(command, dest, depth).await?;
                let sources = self.operand_stream(command, sources, upstream, depth);
                self.transfer(Transfer::Copy { recursive }, sources, dest)
                    .boxed()
            }
            Step::Move { sources, dest } => {
                let dest = self.destination(command, dest, depth).await?;
                let sources = self.operand_stream(command, sources, upstream, depth);
                self.transfer(Transfer::Move, sources, dest).boxed()
            }
            Step::List { .. }
            | Step::Concat { .. }
            | Step::Head { .. }
            | Step::Tail { .. }
            | Step::PrintWorkingDir => {
                return Err(ExecError::InvalidOperand {
                    command,
                    value: "does not change the filesystem".to_string(),
                })
            }
        };
        Ok(effect
            .instrument(tracing::info_span!("effect", command))
            .boxed())
    }

    /// Wrap a pipeline so its rendered records are written to `path`.
    ///
    /// With a terminal consumer the consumer runs first and `path` ends up
    /// empty.
    pub(super) fn write_output<'a>(
        &'a self,
        path: String,
        upstream: Option<RecordStream<'a>>,
        effect: Option<Effect<'a>>,
    ) -> Effect<'a> {
        async move {
            if self.is_dir(&path).await? {
                return Err(ExecError::IsADirectory(path));
            }

            let mut done = Completion::default();
            let mut buffer = String::new();
            if let Some(effect) = effect {
                done = effect.await?;
            } else if let Some(mut records) = upstream {
                while let Some(record) = records.next().await {
                    buffer.push_str(&record?.render());
                    buffer.push('\n');
                    done.operations += 1;
                }
            }

            self.fs.write(&path, buffer.as_bytes()).await?;
            tracing::debug!(%path, bytes = buffer.len(), "wrote output");
            Ok(done)
        }
        .instrument(tracing::info_span!("redirect"))
        .boxed()
    }

    /// Operands as a path stream, or upstream record paths when there are
    /// no operands.
    fn operand_stream<'a>(
        &'a self,
        command: &'static str,
        words: Vec<ExpandedWord>,
        upstream: Option<RecordStream<'a>>,
        depth: usize,
    ) -> PathStream<'a> {
        if !words.is_empty() {
            return self.expand_paths(words, depth);
        }
        let Some(upstream) = upstream else {
            return stream::empty().boxed();
        };
        let cwd = self.fs.current_dir();
        upstream
            .map(move |item| {
                let record = item?;
                match record.path() {
                    Some(p) => Ok(path::resolve(&cwd, p)),
                    None => Err(ExecError::InvalidOperand {
                        command,
                        value: record.render(),
                    }),
                }
            })
            .boxed()
    }

    async fn destination(
        &self,
        command: &'static str,
        word: ExpandedWord,
        depth: usize,
    ) -> Result<String, ExecError> {
        let values = self.resolve_word(word, depth).await?.into_values();
        match values.as_slice() {
            [dest] => Ok(path::resolve(&self.fs.current_dir(), dest)),
            _ => Err(ExecError::InvalidOperand {
                command,
                value: values.join(" "),
            }),
        }
    }

    async fn is_dir(&self, path: &str) -> Result<bool, ExecError> {
        match self.fs.stat(path).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(
        &self,
        mut paths: PathStream<'_>,
        recursive: bool,
        force: bool,
    ) -> Result<Completion, ExecError> {
        let mut done = Completion::default();
        while let Some(path) = paths.next().await {
            let path = path?;
            let meta = match self.fs.stat(&path).await {
                Ok(meta) => meta,
                Err(e) if force && e.is_not_found() => {
                    tracing::debug!(%path, "skipping missing path");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if meta.is_dir() && !recursive {
                return Err(ExecError::IsADirectory(path));
            }
            self.fs.delete(&path).await?;
            tracing::debug!(%path, "removed");
            done.operations += 1;
        }
        Ok(done)
    }

    async fn touch(&self, mut paths: PathStream<'_>) -> Result<Completion, ExecError> {
        let mut done = Completion::default();
        while let Some(path) = paths.next().await {
            let path = path?;
            if !self.fs.exists(&path).await? {
                self.fs.write(&path, b"").await?;
                tracing::debug!(%path, "created");
            }
            done.operations += 1;
        }
        Ok(done)
    }

    async fn make_dir(
        &self,
        mut paths: PathStream<'_>,
        parents: bool,
    ) -> Result<Completion, ExecError> {
        let mut done = Completion::default();
        while let Some(path) = paths.next().await {
            let path = path?;
            self.fs.create_dir(&path, parents).await?;
            tracing::debug!(%path, parents, "created directory");
            done.operations += 1;
        }
        Ok(done)
    }

    /// `cp` and `mv`. Into an existing directory each source keeps its
    /// name; otherwise there must be exactly one source, checked before
    /// anything is written.
    async fn transfer(
        &self,
        mode: Transfer,
        mut sources: PathStream<'_>,
        dest: String,
    ) -> Result<Completion, ExecError> {
        let mut done = Completion::default();
        if !self.is_dir(&dest).await? {
            let Some(source) = sources.next().await else {
                return Ok(done);
            };
            let source = source?;
            if let Some(extra) = sources.next().await {
                extra?;
                return Err(ExecError::NotADirectory(dest));
            }
            self.transfer_entry(mode, &source, &dest).await?;
            done.operations += 1;
            return Ok(done);
        }

        while let Some(source) = sources.next().await {
            let source = source?;
            let target = path::join(&dest, path::file_name(&source));
            self.transfer_entry(mode, &source, &target).await?;
            done.operations += 1;
        }
        Ok(done)
    }

    async fn transfer_entry(
        &self,
        mode: Transfer,
        source: &str,
        target: &str,
    ) -> Result<(), ExecError> {
        match mode {
            Transfer::Copy { recursive } => self.copy_entry(source, target, recursive).await?,
            Transfer::Move => self.move_entry(source, target).await?,
        }
        tracing::debug!(%source, %target, command = mode.command(), "transferred");
        Ok(())
    }

    async fn copy_entry(&self, source: &str, target: &str, recursive: bool) -> Result<(), ExecError> {
        let meta = self.fs.stat(source).await?;
        if !meta.is_dir() {
            let data = self.fs.read(source).await?;
            self.fs.write(target, &data).await?;
            return Ok(());
        }
        if !recursive {
            return Err(ExecError::IsADirectory(source.to_string()));
        }
        check_not_inside("cp", source, target)?;
        self.copy_tree(source, target).await
    }

    async fn move_entry(&self, source: &str, target: &str) -> Result<(), ExecError> {
        if source == target {
            return Ok(());
        }
        check_not_inside("mv", source, target)?;
        let meta = self.fs.stat(source).await?;
        if meta.is_dir() {
            self.copy_tree(source, target).await?;
        } else {
            let data = self.fs.read(source).await?;
            self.fs.write(target, &data).await?;
        }
        self.fs.delete(source).await?;
        Ok(())
    }

    /// Copy a directory tree, hidden entries included.
    async fn copy_tree(&self, source: &str, target: &str) -> Result<(), ExecError> {
        let mut pending = vec![(source.to_string(), target.to_string())];
        while let Some((from, to)) = pending.pop() {
            if !self.is_dir(&to).await? {
                self.fs.create_dir(&to, false).await?;
            }
            for child in self.children(&from, true).await? {
                let dest = path::join(&to, path::file_name(&child));
                if self.fs.stat(&child).await?.is_dir() {
                    pending.push((child, dest));
                } else {
                    let data = self.fs.read(&child).await?;
                    self.fs.write(&dest, &data).await?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Transfer {
    Copy { recursive: bool },
    Move,
}

impl Transfer {
    fn command(self) -> &'static str {
        match self {
            Transfer::Copy { .. } => "cp",
            Transfer::Move => "mv",
        }
    }
}

/// Reject copying or moving a directory into itself.
fn check_not_inside(command: &'static str, source: &str, target: &str) -> Result<(), ExecError> {
    if source == target || path::is_descendant(target, source) {
        return Err(ExecError::InvalidOperand {
            command,
            value: format!("cannot {command} '{source}' into itself"),
        });
    }
    Ok(())
}
