// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Records flowing between pipeline stages.

use super::ExecError;
use fsh_fs::{EntryKind, Metadata};
use futures::stream::BoxStream;
use serde::Serialize;
use serde_json::Value;

/// Lazy stream of records produced by a pipeline.
pub type RecordStream<'a> = BoxStream<'a, Result<Record, ExecError>>;

/// One unit of pipeline data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Record {
    /// A filesystem entry.
    File {
        path: String,
        kind: EntryKind,
        size: u64,
    },
    /// A line of text, with its origin when it was read from a file.
    Line {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        file: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line_number: Option<usize>,
    },
    /// Structured output (`ls -l`).
    Json(Value),
}

impl Record {
    pub fn file(path: impl Into<String>, meta: Metadata) -> Self {
        Record::File {
            path: path.into(),
            kind: meta.kind,
            size: meta.size,
        }
    }

    /// A line with no file of origin.
    pub fn text(text: impl Into<String>) -> Self {
        Record::Line {
            text: text.into(),
            file: None,
            line_number: None,
        }
    }

    /// A line read from `file` at 1-based `line_number`.
    pub fn line(text: impl Into<String>, file: impl Into<String>, line_number: usize) -> Self {
        Record::Line {
            text: text.into(),
            file: Some(file.into()),
            line_number: Some(line_number),
        }
    }

    /// Textual form used for output and substitution capture.
    pub fn render(&self) -> String {
        match self {
            Record::File { path, .. } => path.clone(),
            Record::Line { text, .. } => text.clone(),
            Record::Json(value) => value.to_string(),
        }
    }

    /// The path this record names, when a consumer treats it as an operand.
    ///
    /// Lines are taken verbatim; JSON records need a string `path` field.
    pub fn path(&self) -> Option<&str> {
        match self {
            Record::File { path, .. } => Some(path),
            Record::Line { text, .. } => Some(text),
            Record::Json(value) => value.get("path").and_then(Value::as_str),
        }
    }
}
