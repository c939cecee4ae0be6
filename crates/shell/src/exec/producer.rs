// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline stages that produce records: `ls`, `cat`, `head`, `tail`,
//! `pwd`.

use super::expand::PathStream;
use super::transform::{head, number_lines, tail};
use super::{ExecError, Executor, Record, RecordStream};
use crate::compiler::CompileError;
use crate::ir::Step;
use crate::span::Span;
use fsh_fs::path::{self, escape_pattern};
use fsh_fs::Metadata;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde_json::json;

impl Executor {
    /// Build one non-terminal stage on top of `upstream`.
    ///
    /// `upstream` is `None` for the first command when nothing feeds it.
    pub(super) async fn stage<'a>(
        &'a self,
        step: Step,
        upstream: Option<RecordStream<'a>>,
        span: Span,
        depth: usize,
    ) -> Result<RecordStream<'a>, ExecError> {
        let take_upstream = || upstream.unwrap_or_else(|| stream::empty().boxed());
        match step {
            Step::List { paths, long, all } => {
                Ok(self.list(self.expand_paths(paths, depth), long, all))
            }
            Step::Concat { paths, number } if paths.is_empty() => {
                Ok(self.concat_upstream(take_upstream(), number))
            }
            Step::Concat { paths, number } => {
                Ok(self.concat_files(self.expand_paths(paths, depth), number))
            }
            Step::Head { count } => {
                let n = self.count(count, "head", depth).await?;
                Ok(head(take_upstream(), n))
            }
            Step::Tail { count } => {
                let n = self.count(count, "tail", depth).await?;
                Ok(tail(take_upstream(), n))
            }
            Step::PrintWorkingDir => {
                let cwd = Record::text(self.fs.current_dir());
                Ok(stream::once(async move { Ok::<_, ExecError>(cwd) }).boxed())
            }
            Step::Copy { .. }
            | Step::Move { .. }
            | Step::Remove { .. }
            | Step::Touch { .. }
            | Step::MakeDir { .. } => Err(CompileError::NotLastInPipeline {
                command: step.command(),
                span,
            }
            .into()),
        }
    }

    /// Lines of a file, tagged with their origin.
    pub(super) fn file_lines(&self, path: String) -> RecordStream<'_> {
        self.fs
            .read_lines(&path)
            .enumerate()
            .map(move |(i, line)| {
                line.map(|text| Record::line(text, path.as_str(), i + 1))
                    .map_err(ExecError::from)
            })
            .boxed()
    }

    /// Lines of each file in turn.
    pub(super) fn concat_files<'a>(&'a self, paths: PathStream<'a>, number: bool) -> RecordStream<'a> {
        let lines = paths
            .map(move |path| match path {
                Ok(path) => self.file_lines(path),
                Err(e) => stream::iter([Err(e)]).boxed(),
            })
            .flatten()
            .boxed();
        if number {
            number_lines(lines)
        } else {
            lines
        }
    }

    /// Downstream `cat`: file records become their lines, everything else
    /// passes through.
    fn concat_upstream<'a>(&'a self, upstream: RecordStream<'a>, number: bool) -> RecordStream<'a> {
        let lines = upstream
            .map(move |item| match item {
                Ok(Record::File { path, .. }) => self.file_lines(path),
                other => stream::iter([other]).boxed(),
            })
            .flatten()
            .boxed();
        if number {
            number_lines(lines)
        } else {
            lines
        }
    }

    /// Entries of each path: a file lists itself, a directory its children.
    /// Operands that expand to nothing list the current directory.
    fn list<'a>(&'a self, paths: PathStream<'a>, long: bool, all: bool) -> RecordStream<'a> {
        let cwd = self.fs.current_dir();
        stream::once(paths.into_future())
            .map(move |(first, rest)| match first {
                None => self.list_path(cwd.clone(), all),
                Some(first) => stream::iter([first])
                    .chain(rest)
                    .map(move |path| match path {
                        Ok(path) => self.list_path(path, all),
                        Err(e) => stream::iter([Err(e)]).boxed(),
                    })
                    .flatten()
                    .boxed(),
            })
            .flatten()
            .and_then(move |entry| async move {
                let meta = self.fs.stat(&entry).await?;
                Ok::<_, ExecError>(entry_record(entry, meta, long))
            })
            .boxed()
    }

    fn list_path(&self, path: String, all: bool) -> PathStream<'_> {
        stream::once(async move {
            let meta = self.fs.stat(&path).await?;
            if meta.is_dir() {
                self.children(&path, all).await
            } else {
                Ok(vec![path])
            }
        })
        .map(|result| match result {
            Ok(paths) => stream::iter(paths.into_iter().map(Ok)).left_stream(),
            Err(e) => stream::iter(vec![Err(e)]).right_stream(),
        })
        .flatten()
        .boxed()
    }

    /// Direct children of a directory, sorted. Dot entries only with
    /// `hidden`.
    pub(super) async fn children(&self, dir: &str, hidden: bool) -> Result<Vec<String>, ExecError> {
        let base = escape_pattern(dir);
        let mut entries: Vec<String> = self.fs.list(&path::join(&base, "*")).try_collect().await?;
        if hidden {
            let dotted: Vec<String> = self.fs.list(&path::join(&base, ".*")).try_collect().await?;
            entries.extend(dotted);
            entries.sort();
            entries.dedup();
        }
        Ok(entries)
    }
}

fn entry_record(path: String, meta: Metadata, long: bool) -> Record {
    if !long {
        return Record::file(path, meta);
    }
    Record::Json(json!({
        "name": path::file_name(&path),
        "path": path,
        "kind": meta.kind,
        "size": meta.size,
    }))
}
