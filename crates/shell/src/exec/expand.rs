// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word expansion.
//!
//! Operands expand lazily into path streams: a glob is listed as records are
//! pulled, and only its first match is awaited to decide between the matches
//! and the literal text. Words that need all their values up front (counts,
//! destinations, redirection targets) go through [`Executor::resolve_word`],
//! which moves a pending word to its resolved state with
//! [`ExpandedWord::resolve`].

use super::{ExecError, Execution, Executor, RecordStream};
use crate::ast::Program;
use crate::ir::{ExpandedWord, Fragment, GlobWord, Resolution};
use crate::parser::MAX_SUBSTITUTION_DEPTH;
use fsh_fs::path::{self, escape_pattern};
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream};
use futures::{FutureExt, StreamExt, TryStreamExt};
use tracing::Instrument;

/// Expanded values, in order.
pub(super) type PathStream<'a> = BoxStream<'a, Result<String, ExecError>>;

impl Executor {
    /// Expand one word into a stream of its values.
    pub(super) fn expand(&self, word: ExpandedWord, depth: usize) -> PathStream<'_> {
        match word {
            ExpandedWord::Literal(value) => stream::iter([Ok(value)]).boxed(),
            ExpandedWord::Glob(Resolution::Resolved(values))
            | ExpandedWord::Substitution(Resolution::Resolved(values)) => {
                stream::iter(values.into_iter().map(Ok)).boxed()
            }
            ExpandedWord::Glob(Resolution::Pending(glob)) => self.glob(&glob.pattern, glob.text),
            pending @ ExpandedWord::Substitution(Resolution::Pending(_)) => {
                stream::once(self.substitute(pending, depth))
                    .map(move |spliced| match spliced {
                        Ok(word) => self.expand(word, depth),
                        Err(e) => stream::iter([Err(e)]).boxed(),
                    })
                    .flatten()
                    .boxed()
            }
        }
    }

    /// Expand operands and resolve each value against the current directory.
    pub(super) fn expand_paths(&self, words: Vec<ExpandedWord>, depth: usize) -> PathStream<'_> {
        let cwd = self.fs.current_dir();
        stream::iter(words)
            .map(move |word| self.expand(word, depth))
            .flatten()
            .map_ok(move |value| path::resolve(&cwd, &value))
            .boxed()
    }

    /// Fully expand a word, leaving it resolved.
    ///
    /// Boxed because substitutions recurse back into pipeline execution.
    pub(super) fn resolve_word(
        &self,
        word: ExpandedWord,
        depth: usize,
    ) -> BoxFuture<'_, Result<ExpandedWord, ExecError>> {
        async move {
            match &word {
                ExpandedWord::Glob(Resolution::Pending(glob)) => {
                    let values = self
                        .glob(&glob.pattern, glob.text.clone())
                        .try_collect()
                        .await?;
                    Ok(word.resolve(values))
                }
                ExpandedWord::Substitution(Resolution::Pending(_)) => {
                    let spliced = self.substitute(word, depth).await?;
                    self.resolve_word(spliced, depth).await
                }
                _ => Ok(word),
            }
        }
        .boxed()
    }

    /// Expand a word that must name exactly one path (redirection targets,
    /// `cp`/`mv` destinations).
    pub(super) async fn single_path(
        &self,
        word: ExpandedWord,
        depth: usize,
    ) -> Result<String, ExecError> {
        let target = word.text();
        let values = self.resolve_word(word, depth).await?.into_values();
        match values.as_slice() {
            [value] => Ok(path::resolve(&self.fs.current_dir(), value)),
            _ => Err(ExecError::AmbiguousRedirect {
                target,
                count: values.len(),
            }),
        }
    }

    /// Expand a `-n` count.
    pub(super) async fn count(
        &self,
        word: ExpandedWord,
        command: &'static str,
        depth: usize,
    ) -> Result<i64, ExecError> {
        let values = self.resolve_word(word, depth).await?.into_values();
        let value = values.join(" ");
        match values.as_slice() {
            [single] => single
                .trim()
                .parse()
                .map_err(|_| ExecError::InvalidOperand { command, value }),
            _ => Err(ExecError::InvalidOperand { command, value }),
        }
    }

    /// Stream the matches of a pattern; no match yields the un-expanded
    /// text.
    fn glob(&self, pattern: &str, text: String) -> PathStream<'_> {
        let pattern = if pattern.starts_with('/') {
            path::normalize(pattern)
        } else {
            let cwd = escape_pattern(&self.fs.current_dir());
            path::normalize(&path::join(&cwd, pattern))
        };
        let matches = self.fs.list(&pattern);
        stream::once(async move {
            let (first, rest) = matches.into_future().await;
            tracing::debug!(%pattern, matched = first.is_some(), "glob");
            match first {
                None => stream::iter([Ok::<_, ExecError>(text)]).boxed(),
                Some(first) => stream::iter([first])
                    .chain(rest)
                    .map_err(ExecError::from)
                    .boxed(),
            }
        })
        .flatten()
        .boxed()
    }

    /// Run the substitutions in a pending word and splice their output in.
    ///
    /// A word that is a single substitution resolves to one value per output
    /// line. Otherwise the lines are joined with spaces into the word; with
    /// glob parts the result is a glob still to be listed.
    async fn substitute(
        &self,
        word: ExpandedWord,
        depth: usize,
    ) -> Result<ExpandedWord, ExecError> {
        let ExpandedWord::Substitution(Resolution::Pending(sub)) = &word else {
            return Ok(word);
        };

        if let [Fragment::Command { program, .. }] = sub.fragments.as_slice() {
            let lines = self.capture(program, depth).await?;
            return Ok(word.resolve(lines));
        }

        let has_glob = sub.has_glob();
        let mut text = String::new();
        let mut pattern = String::new();
        for fragment in &sub.fragments {
            match fragment {
                Fragment::Literal(value) => {
                    pattern.push_str(&escape_pattern(value));
                    text.push_str(value);
                }
                Fragment::Glob(glob) => {
                    pattern.push_str(glob);
                    text.push_str(glob);
                }
                Fragment::Command { program, .. } => {
                    let joined = self.capture(program, depth).await?.join(" ");
                    pattern.push_str(&escape_pattern(&joined));
                    text.push_str(&joined);
                }
            }
        }

        if has_glob {
            Ok(ExpandedWord::Glob(Resolution::Pending(GlobWord {
                pattern,
                text,
            })))
        } else {
            Ok(word.resolve(vec![text]))
        }
    }

    /// Run a substitution body one level deeper and capture its output
    /// lines.
    async fn capture(&self, program: &Program, depth: usize) -> Result<Vec<String>, ExecError> {
        let depth = depth + 1;
        if depth > MAX_SUBSTITUTION_DEPTH {
            return Err(ExecError::SubstitutionDepthExceeded {
                limit: MAX_SUBSTITUTION_DEPTH,
            });
        }

        async {
            let ir = self.compiler.compile(program)?;
            let output = match self.execute_at(ir, depth).await? {
                Execution::Stream(stream) => self.collect_output(stream).await?,
                Execution::Effect(effect) => {
                    effect.await?;
                    String::new()
                }
            };
            let lines: Vec<String> = output
                .trim_end_matches('\n')
                .lines()
                .map(str::to_string)
                .collect();
            tracing::debug!(lines = lines.len(), "captured");
            Ok(lines)
        }
        .instrument(tracing::debug_span!("substitution", depth))
        .await
    }

    /// Render records into newline-separated text, bounded by the capture
    /// limit.
    async fn collect_output(&self, mut stream: RecordStream<'_>) -> Result<String, ExecError> {
        let mut output = String::new();
        while let Some(record) = stream.next().await {
            let rendered = record?.render();
            if output.len() + rendered.len() + 1 > self.capture_limit {
                return Err(ExecError::CaptureLimitExceeded {
                    limit: self.capture_limit,
                });
            }
            output.push_str(&rendered);
            output.push('\n');
        }
        Ok(output)
    }
}
