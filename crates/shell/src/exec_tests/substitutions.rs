// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{executor, fixture, lines, run, run_with};
use crate::compiler::CompileError;
use crate::exec::ExecError;
use crate::parse_error::ParseError;
use crate::parser::MAX_SUBSTITUTION_DEPTH;
use yare::parameterized;

/// `ls (ls (... (pwd) ...))` with `depth` substitutions.
fn nested_ls(depth: usize) -> String {
    format!("ls {}(pwd){}", "(ls ".repeat(depth - 1), ")".repeat(depth - 1))
}

#[tokio::test]
async fn sole_substitution_yields_one_operand_per_line() {
    let fs = fixture();
    assert_eq!(
        lines(&fs, "cat (ls /docs/*.md)").await,
        vec!["alpha", "beta", "gamma"]
    );
}

#[tokio::test]
async fn mixed_word_splices_output() {
    let fs = fixture();
    assert_eq!(lines(&fs, "ls (pwd)/b.md").await, vec!["/docs/b.md"]);
}

#[tokio::test]
async fn mixed_word_joins_lines_with_spaces() {
    let fs = fixture();
    fs.insert_file("/names", "one\ntwo\n");
    assert_eq!(
        run(&fs, "cat /x-(cat /names)").await,
        Err(ExecError::Fs(fsh_fs::FsError::NotFound("/x-one two".into())))
    );
}

#[tokio::test]
async fn substituted_word_is_globbed() {
    let fs = fixture();
    assert_eq!(
        lines(&fs, "ls (pwd)/*.md").await,
        vec!["/docs/a.md", "/docs/b.md"]
    );
}

#[tokio::test]
async fn empty_output_yields_no_operands() {
    let fs = fixture();
    assert_eq!(lines(&fs, "ls (touch t.txt)").await.len(), 4);
    assert!(fs.contents("/docs/t.txt").is_some());
}

#[parameterized(
    one = { 1 },
    five = { 5 },
    limit = { MAX_SUBSTITUTION_DEPTH },
)]
#[test_macro(tokio::test)]
async fn nesting_within_limit(depth: usize) {
    let fs = fixture();
    assert_eq!(
        lines(&fs, &nested_ls(depth)).await,
        vec!["/docs/a.md", "/docs/b.md", "/docs/notes.txt"]
    );
}

#[tokio::test]
async fn nesting_past_limit() {
    let fs = fixture();
    let err = run(&fs, &nested_ls(MAX_SUBSTITUTION_DEPTH + 1))
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            ExecError::Parse(ParseError::SubstitutionDepthExceeded { limit: 10, .. })
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn capture_limit() {
    let fs = fixture();
    let executor = executor(&fs).capture_limit(8);
    assert_eq!(
        run_with(&executor, "cat (cat /log.txt)").await,
        Err(ExecError::CaptureLimitExceeded { limit: 8 })
    );
    // Small output still fits.
    assert_eq!(
        run_with(&executor, "ls (pwd)/b.md").await,
        Ok(vec!["/docs/b.md".to_string()])
    );
}

#[tokio::test]
async fn unknown_command_inside_substitution() {
    let fs = fixture();
    let err = run(&fs, "ls (frobnicate)").await.unwrap_err();
    assert!(matches!(
        err,
        ExecError::Compile(CompileError::UnknownCommand { ref name, .. }) if name == "frobnicate"
    ));
}

#[tokio::test]
async fn substitution_errors_propagate() {
    let fs = fixture();
    assert!(matches!(
        run(&fs, "cat (cat /missing)").await,
        Err(ExecError::Fs(_))
    ));
}

#[tokio::test]
async fn captured_lines_keep_leading_whitespace() {
    let fs = fixture();
    assert_eq!(
        run(&fs, "cat (cat -n /docs/a.md)").await,
        Err(ExecError::Fs(fsh_fs::FsError::NotFound(
            "/docs/     1\talpha".into()
        )))
    );
}
