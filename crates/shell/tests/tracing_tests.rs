// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log output of pipeline execution, captured with a test subscriber.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use fsh_fs::{MemoryFs, TracedFs};
use fsh_shell::Shell;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.logs.lock().unwrap()).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `source` against `fs` and return the captured logs with the output.
fn run_logged(fs: MemoryFs, source: &str) -> (String, Vec<String>) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let output = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(async {
                let shell = Shell::new(Arc::new(TracedFs::new(fs)));
                shell.output(source).await.unwrap()
            })
    });

    (logs.contents(), output)
}

fn assert_log(logs: &str, label: &str, expected: &str) {
    assert!(logs.contains(expected), "Should log {label}. Logs:\n{logs}");
}

// ---------------------------------------------------------------------------
// Spans and events
// ---------------------------------------------------------------------------

#[test]
fn pipeline_stages_are_logged() {
    let fs = MemoryFs::new().with_file("/log.txt", "a\nb\n");
    let (logs, output) = run_logged(fs, "cat /log.txt | tail -n 1");
    assert_eq!(output, vec!["b"]);
    assert_log(&logs, "pipeline span", "pipeline{");
    assert_log(&logs, "stage event", "stage");
    assert_log(&logs, "filesystem access", "reading lines");
}

#[test]
fn substitutions_are_logged_inside_their_span() {
    let fs = MemoryFs::new()
        .with_file("/a.txt", "hello\n")
        .with_file("/list", "/a.txt\n");
    let (logs, output) = run_logged(fs, "cat (cat /list)");
    assert_eq!(output, vec!["hello"]);
    assert_log(&logs, "substitution span", "substitution{depth=1}");
    assert_log(&logs, "captured lines", "captured");
}

#[test]
fn failed_reads_are_warned() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(async {
                let shell = Shell::new(Arc::new(TracedFs::new(MemoryFs::new())));
                assert!(shell.output("cat /missing").await.is_err());
            })
    });
    assert_log(&logs.contents(), "warning", "WARN");
}
