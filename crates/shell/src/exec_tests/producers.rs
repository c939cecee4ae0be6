// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{fixture, lines, records, run};
use crate::compiler::Compiler;
use crate::exec::{ExecError, Execution, Executor, Record};
use crate::ir::{ExpandedWord, Resolution, Step};
use crate::parser::Parser;
use async_trait::async_trait;
use fsh_fs::{EntryKind, FileSystem, FsError, MemoryFs, Metadata};
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use yare::parameterized;

fn log_lines(range: std::ops::RangeInclusive<usize>) -> Vec<String> {
    range.map(|i| format!("line {i}")).collect()
}

#[tokio::test]
async fn tail_reads_last_lines() {
    let fs = fixture();
    assert_eq!(lines(&fs, "tail -n 3 /log.txt").await, log_lines(10..=12));
}

#[tokio::test]
async fn head_defaults_to_ten() {
    let fs = fixture();
    assert_eq!(lines(&fs, "head /log.txt").await, log_lines(1..=10));
}

#[tokio::test]
async fn head_with_attached_count() {
    let fs = fixture();
    assert_eq!(lines(&fs, "head -n2 /log.txt").await, log_lines(1..=2));
}

#[tokio::test]
async fn head_source_may_be_a_glob() {
    let fs = fixture();
    assert_eq!(lines(&fs, "head -n 3 /docs/*.md").await, vec!["alpha", "beta", "gamma"]);
}

#[parameterized(
    explicit = { "ls /docs" },
    current_dir = { "ls" },
    relative = { "ls ." },
)]
#[test_macro(tokio::test)]
async fn list_directory(source: &str) {
    let fs = fixture();
    assert_eq!(
        lines(&fs, source).await,
        vec!["/docs/a.md", "/docs/b.md", "/docs/notes.txt"]
    );
}

#[tokio::test]
async fn list_all_includes_dot_entries() {
    let fs = fixture();
    assert_eq!(
        lines(&fs, "ls -a /docs").await,
        vec!["/docs/.hidden", "/docs/a.md", "/docs/b.md", "/docs/notes.txt"]
    );
}

#[tokio::test]
async fn list_file_lists_itself() {
    let fs = fixture();
    let records = records(&fs, "ls /docs/b.md").await;
    assert_eq!(
        records,
        vec![Record::File {
            path: "/docs/b.md".into(),
            kind: EntryKind::File,
            size: 6,
        }]
    );
}

#[tokio::test]
async fn long_listing_is_json() {
    let fs = fixture();
    let records = records(&fs, "ls -l /tmp").await;
    let [Record::Json(a), Record::Json(b)] = records.as_slice() else {
        panic!("expected two json records, got {records:?}");
    };
    assert_eq!(a["name"], "a");
    assert_eq!(a["kind"], "directory");
    assert_eq!(b["path"], "/tmp/b");
    assert_eq!(a["size"], 0);
}

#[tokio::test]
async fn concat_keeps_provenance() {
    let fs = fixture();
    let records = records(&fs, "cat /docs/a.md /docs/b.md").await;
    assert_eq!(
        records,
        vec![
            Record::line("alpha", "/docs/a.md", 1),
            Record::line("beta", "/docs/a.md", 2),
            Record::line("gamma", "/docs/b.md", 1),
        ]
    );
}

#[tokio::test]
async fn concat_numbers_lines() {
    let fs = fixture();
    assert_eq!(
        lines(&fs, "cat -n a.md b.md").await,
        vec!["     1\talpha", "     2\tbeta", "     3\tgamma"]
    );
}

#[tokio::test]
async fn relative_glob_resolves_against_current_dir() {
    let fs = fixture();
    assert_eq!(lines(&fs, "cat *.md").await, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn listed_files_flow_into_cat() {
    let fs = fixture();
    assert_eq!(
        lines(&fs, "ls /docs/*.md | cat | tail -n 2").await,
        vec!["beta", "gamma"]
    );
}

#[tokio::test]
async fn pwd_prints_current_dir() {
    let fs = fixture();
    assert_eq!(lines(&fs, "print-working-directory").await, vec!["/docs"]);
}

#[tokio::test]
async fn unmatched_glob_stays_literal() {
    let fs = fixture();
    assert_eq!(
        run(&fs, "ls /docs/*.zzz").await,
        Err(ExecError::Fs(FsError::NotFound("/docs/*.zzz".into())))
    );
}

#[tokio::test]
async fn quoted_glob_is_not_expanded() {
    let fs = fixture();
    assert_eq!(
        run(&fs, r#"ls "/docs/*.md""#).await,
        Err(ExecError::Fs(FsError::NotFound("/docs/*.md".into())))
    );
}

#[tokio::test]
async fn missing_file() {
    let fs = fixture();
    assert_eq!(
        run(&fs, "cat /missing").await,
        Err(ExecError::Fs(FsError::NotFound("/missing".into())))
    );
}

#[parameterized(
    word = { "tail -n x /log.txt", "tail", "x" },
    float = { "head -n 1.5 /log.txt", "head", "1.5" },
)]
#[test_macro(tokio::test)]
async fn invalid_count(source: &str, command: &'static str, value: &str) {
    let fs = fixture();
    assert_eq!(
        run(&fs, source).await,
        Err(ExecError::InvalidOperand {
            command,
            value: value.to_string(),
        })
    );
}

#[tokio::test]
async fn zero_count_yields_nothing() {
    let fs = fixture();
    assert!(lines(&fs, "tail -n 0 /log.txt").await.is_empty());
    assert!(lines(&fs, "head -n 0 /log.txt").await.is_empty());
}

#[tokio::test]
async fn dropping_a_stream_is_fine() {
    let fs = fixture();
    let executor = super::helpers::executor(&fs);
    let execution = executor.execute_str("cat /log.txt").await.unwrap();
    let Execution::Stream(mut stream) = execution else {
        panic!("expected a stream");
    };
    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first.render(), "line 1");
    drop(stream);
}

/// A filesystem whose listings yield every match and then never end.
struct EndlessListing(MemoryFs);

#[async_trait]
impl FileSystem for EndlessListing {
    async fn read(&self, path: &str) -> Result<Vec<u8>, FsError> {
        self.0.read(path).await
    }

    async fn write(&self, path: &str, data: &[u8]) -> Result<(), FsError> {
        self.0.write(path, data).await
    }

    async fn delete(&self, path: &str) -> Result<(), FsError> {
        self.0.delete(path).await
    }

    async fn exists(&self, path: &str) -> Result<bool, FsError> {
        self.0.exists(path).await
    }

    async fn stat(&self, path: &str) -> Result<Metadata, FsError> {
        self.0.stat(path).await
    }

    async fn create_dir(&self, path: &str, parents: bool) -> Result<(), FsError> {
        self.0.create_dir(path, parents).await
    }

    fn list(&self, pattern: &str) -> BoxStream<'_, Result<String, FsError>> {
        self.0.list(pattern).chain(stream::pending()).boxed()
    }

    fn current_dir(&self) -> String {
        self.0.current_dir()
    }
}

#[parameterized(
    cat = { "cat /docs/*.md", "alpha" },
    list = { "ls /docs/*.md", "/docs/a.md" },
    head_source = { "head -n 1 /docs/*.md", "alpha" },
    piped = { "cat /docs/*.md | head -n 1", "alpha" },
)]
#[test_macro(tokio::test)]
async fn glob_operands_stream_before_listing_ends(source: &str, expected: &str) {
    let executor = Executor::new(Arc::new(EndlessListing(fixture())));
    let first = tokio::time::timeout(Duration::from_secs(5), async {
        let execution = executor.execute_str(source).await.unwrap();
        let Execution::Stream(mut stream) = execution else {
            panic!("expected a stream");
        };
        stream.next().await
    })
    .await
    .expect("first record should not wait for the listing to end");
    assert_eq!(first.unwrap().unwrap().render(), expected);
}

#[tokio::test]
async fn resolved_glob_is_not_listed_again() {
    let fs = fixture();
    let executor = super::helpers::executor(&fs);
    let program = Parser::parse("cat /docs/a.md").unwrap();
    let mut ir = Compiler::new().compile(&program).unwrap();
    ir.steps[0] = Step::Concat {
        paths: vec![ExpandedWord::Glob(Resolution::Resolved(vec![
            "/docs/*.md".to_string(),
        ]))],
        number: false,
    };
    assert_eq!(
        executor.execute(ir).await.unwrap().lines().await,
        Err(ExecError::Fs(FsError::NotFound("/docs/*.md".into())))
    );
}
