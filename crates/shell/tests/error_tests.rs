// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting through the public API, layer by layer.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use fsh_fs::{FsError, MemoryFs};
use fsh_shell::{
    CompileError, DiagnosticCode, Error, ExecError, ParseError, Parser, Shell, ValidationError,
};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn shell() -> Shell {
    let fs = MemoryFs::new()
        .with_file("/a.md", "a\n")
        .with_file("/b.md", "b\n")
        .with_dir("/dir");
    Shell::new(Arc::new(fs))
}

async fn fail(source: &str) -> Error {
    match shell().output(source).await {
        Ok(lines) => panic!("{source:?} should fail, got {lines:?}"),
        Err(e) => e,
    }
}

// ---------------------------------------------------------------------------
// Syntax
// ---------------------------------------------------------------------------

#[tokio::test]
async fn syntax_errors_stop_before_execution() {
    let err = fail("rm /a.md | cat (ls").await;
    assert!(matches!(err, Error::Parse(ParseError::UnmatchedParen { .. })));
}

#[test]
fn recovery_reports_every_problem() {
    let result = Parser::parse_with_recovery("cat (ls |) 'open");
    assert_eq!(
        result.diagnostics.codes(),
        vec![DiagnosticCode::UnexpectedEof, DiagnosticCode::UnterminatedQuote]
    );
}

#[test]
fn rendered_parse_error_points_at_source() {
    let source = "ls | | pwd";
    let err = shell().compile(source).unwrap_err();
    let rendered = err.render(source);
    assert!(rendered.contains(source), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

#[test]
fn compile_errors() {
    let shell = shell();
    assert!(matches!(
        shell.compile("frobnicate /a.md"),
        Err(Error::Compile(CompileError::UnknownCommand { .. }))
    ));
    assert!(matches!(
        shell.compile("ls -z"),
        Err(Error::Compile(CompileError::UnknownFlag { .. }))
    ));
    assert!(matches!(
        shell.compile("rm"),
        Err(Error::Compile(CompileError::MissingOperand { .. }))
    ));
    assert!(matches!(
        shell.compile("rm /a.md | cat"),
        Err(Error::Compile(CompileError::NotLastInPipeline { command: "rm", .. }))
    ));
}

#[test]
fn misplaced_redirection_is_invalid() {
    let err = shell().compile("cat /a.md > /out | head").unwrap_err();
    match err {
        Error::Compile(CompileError::Invalid(errors)) => {
            assert!(matches!(errors[0], ValidationError::OutputNotLast { .. }));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn compile_error_messages() {
    let shell = shell();
    assert_eq!(
        shell.compile("rm /a.md | cat").unwrap_err().to_string(),
        "rm must be the last command in a pipeline"
    );
    assert_eq!(
        shell.compile("frobnicate").unwrap_err().to_string(),
        "unknown command: frobnicate"
    );
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_file() {
    assert_eq!(
        fail("cat /nope").await,
        Error::Exec(ExecError::Fs(FsError::NotFound("/nope".into())))
    );
}

#[tokio::test]
async fn bad_count() {
    let err = fail("head -n many /a.md").await;
    assert!(matches!(
        err,
        Error::Exec(ExecError::InvalidOperand { command: "head", .. })
    ));
}

#[tokio::test]
async fn ambiguous_redirect() {
    assert_eq!(
        fail("cat /a.md > /*.md").await,
        Error::Exec(ExecError::AmbiguousRedirect {
            target: "/*.md".into(),
            count: 2,
        })
    );
}

#[tokio::test]
async fn removing_directory_needs_recursive() {
    let err = fail("rm /dir").await;
    assert_eq!(err, Error::Exec(ExecError::IsADirectory("/dir".into())));
    assert_eq!(err.to_string(), "is a directory: /dir");
}
