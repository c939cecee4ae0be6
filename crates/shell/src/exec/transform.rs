// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record-to-record stages.

use super::{ExecError, Record, RecordStream};
use futures::stream::{self, StreamExt};
use std::collections::VecDeque;

/// First `n` records. Non-positive counts yield nothing.
pub(crate) fn head(upstream: RecordStream<'_>, n: i64) -> RecordStream<'_> {
    match usize::try_from(n) {
        Ok(n) if n > 0 => upstream.take(n).boxed(),
        _ => stream::empty().boxed(),
    }
}

/// Last `n` records, in order.
///
/// Buffers at most `n + 1` records while draining upstream. The first
/// upstream error is yielded alone and ends the stream.
pub(crate) fn tail(upstream: RecordStream<'_>, n: i64) -> RecordStream<'_> {
    let n = match usize::try_from(n) {
        Ok(n) if n > 0 => n,
        _ => return stream::empty().boxed(),
    };

    stream::once(async move {
        let mut upstream = upstream;
        let mut buffer = VecDeque::new();
        while let Some(record) = upstream.next().await {
            buffer.push_back(record?);
            if buffer.len() > n {
                buffer.pop_front();
            }
        }
        Ok::<_, ExecError>(buffer)
    })
    .map(|result| match result {
        Ok(buffer) => stream::iter(buffer.into_iter().map(Ok)).left_stream(),
        Err(e) => stream::iter(vec![Err(e)]).right_stream(),
    })
    .flatten()
    .boxed()
}

/// `cat -n`: prefix each line with its position in the output.
pub(crate) fn number_lines(upstream: RecordStream<'_>) -> RecordStream<'_> {
    upstream
        .enumerate()
        .map(|(i, item)| item.map(|record| numbered(record, i + 1)))
        .boxed()
}

fn numbered(record: Record, n: usize) -> Record {
    match record {
        Record::Line {
            text,
            file,
            line_number,
        } => Record::Line {
            text: format!("{n:>6}\t{text}"),
            file,
            line_number,
        },
        other => Record::text(format!("{n:>6}\t{}", other.render())),
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
