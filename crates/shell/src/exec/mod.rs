// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming executor for compiled pipelines.
//!
//! The executor turns a [`PipelineIR`] into either a lazy [`RecordStream`]
//! or an effect future, talking to storage only through a
//! [`FileSystem`] capability.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fsh_fs::MemoryFs;
//! use fsh_shell::Executor;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fs = MemoryFs::new().with_file("/log.txt", "a\nb\nc\n");
//! let executor = Executor::new(Arc::new(fs)).capture_limit(64 * 1024);
//! let lines = executor.execute_str("tail -n 2 /log.txt").await?.lines().await?;
//! assert_eq!(lines, vec!["b", "c"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Evaluation
//!
//! - Operands expand as the stream is pulled. A glob waits for its first
//!   match only; a substitution runs to completion when its word is reached.
//! - Counts, destinations and redirection targets are resolved when
//!   [`Executor::execute`] runs.
//! - Records are produced lazily as the caller pulls the stream. `tail` is
//!   the one stage that buffers (at most N + 1 records).
//! - Commands that change the filesystem consume their upstream records in
//!   order and stop at the first failure. Nothing is rolled back.
//! - A `> path` redirection turns any pipeline into an effect that writes
//!   the rendered records, one per line.

mod error;
mod expand;
mod producer;
mod record;
mod sink;
mod transform;

pub use error::ExecError;
pub use record::{Record, RecordStream};

use crate::compiler::Compiler;
use crate::ir::PipelineIR;
use crate::parser::Parser;
use fsh_fs::FileSystem;
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt, TryStreamExt};
use futures::FutureExt;
use std::sync::Arc;
use tracing::Instrument;

/// Default cap on captured command substitution output (1 MiB).
pub const DEFAULT_CAPTURE_LIMIT: usize = 1024 * 1024;

/// Summary of a completed effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion {
    /// Paths changed, or records written for a redirection.
    pub operations: usize,
}

/// What running a pipeline yields.
pub enum Execution<'a> {
    /// Records, produced as they are pulled.
    Stream(RecordStream<'a>),
    /// A side effect that runs when awaited.
    Effect(BoxFuture<'a, Result<Completion, ExecError>>),
}

impl std::fmt::Debug for Execution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Execution::Stream(_) => f.write_str("Execution::Stream(..)"),
            Execution::Effect(_) => f.write_str("Execution::Effect(..)"),
        }
    }
}

impl Execution<'_> {
    pub fn is_effect(&self) -> bool {
        matches!(self, Execution::Effect(_))
    }

    /// Drain the pipeline, keeping every record. Effects yield none.
    pub async fn records(self) -> Result<Vec<Record>, ExecError> {
        match self {
            Execution::Stream(stream) => stream.try_collect().await,
            Execution::Effect(effect) => effect.await.map(|_| Vec::new()),
        }
    }

    /// Drain the pipeline, rendering each record.
    pub async fn lines(self) -> Result<Vec<String>, ExecError> {
        let records = self.records().await?;
        Ok(records.iter().map(Record::render).collect())
    }

    /// Run to completion, discarding records.
    pub async fn complete(self) -> Result<Completion, ExecError> {
        match self {
            Execution::Stream(stream) => {
                stream
                    .try_fold(Completion::default(), |mut done, _| async move {
                        done.operations += 1;
                        Ok(done)
                    })
                    .await
            }
            Execution::Effect(effect) => effect.await,
        }
    }
}

/// Runs compiled pipelines against a filesystem capability.
///
/// Create an executor with [`Executor::new`], configure it with builder
/// methods, then call [`execute`](Executor::execute) or
/// [`execute_str`](Executor::execute_str). One executor may run any number
/// of pipelines; it holds no per-run state.
#[derive(Clone)]
pub struct Executor {
    fs: Arc<dyn FileSystem>,
    /// Compiles the bodies of command substitutions.
    compiler: Compiler,
    capture_limit: usize,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("compiler", &self.compiler)
            .field("capture_limit", &self.capture_limit)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            compiler: Compiler::new(),
            capture_limit: DEFAULT_CAPTURE_LIMIT,
        }
    }

    /// Set the maximum bytes a command substitution may capture.
    pub fn capture_limit(mut self, bytes: usize) -> Self {
        self.capture_limit = bytes;
        self
    }

    /// Set the compiler used for command substitutions and
    /// [`execute_str`](Executor::execute_str).
    pub fn compiler(mut self, compiler: Compiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn filesystem(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    /// Run a compiled pipeline.
    pub async fn execute(&self, ir: PipelineIR) -> Result<Execution<'_>, ExecError> {
        self.execute_at(ir, 0).await
    }

    /// Parse, compile and run a source string.
    pub async fn execute_str(&self, source: &str) -> Result<Execution<'_>, ExecError> {
        let program = Parser::parse(source)?;
        let ir = self.compiler.compile(&program)?;
        self.execute(ir).await
    }

    /// Run `ir` as a pipeline nested `depth` substitutions deep.
    fn execute_at(
        &self,
        ir: PipelineIR,
        depth: usize,
    ) -> BoxFuture<'_, Result<Execution<'_>, ExecError>> {
        let pipeline_span = tracing::info_span!(
            "pipeline",
            depth,
            steps = ir.steps.len(),
            command = ir.first_command.command,
        );
        async move {
            let PipelineIR {
                mut steps,
                source,
                input,
                output,
                span,
                ..
            } = ir;

            let consumer = match steps.last() {
                Some(step) if step.is_mutating() => steps.pop(),
                _ => None,
            };

            let mut upstream = match (source, input) {
                (Some(word), _) => {
                    Some(self.concat_files(self.expand_paths(vec![word], depth), false))
                }
                (None, Some(word)) => {
                    let path = self.single_path(word, depth).await?;
                    Some(self.file_lines(path))
                }
                (None, None) => None,
            };

            for step in steps {
                tracing::debug!(command = step.command(), "stage");
                upstream = Some(self.stage(step, upstream.take(), span, depth).await?);
            }

            let effect = match consumer {
                Some(step) => {
                    tracing::debug!(command = step.command(), "consumer");
                    Some(self.consume(step, upstream.take(), depth).await?)
                }
                None => None,
            };

            Ok(match (output, effect) {
                (Some(target), effect) => {
                    let path = self.single_path(target, depth).await?;
                    Execution::Effect(self.write_output(path, upstream, effect))
                }
                (None, Some(effect)) => Execution::Effect(effect),
                (None, None) => {
                    Execution::Stream(upstream.unwrap_or_else(|| stream::empty().boxed()))
                }
            })
        }
        .instrument(pipeline_span)
        .boxed()
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
