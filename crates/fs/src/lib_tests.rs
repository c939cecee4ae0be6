// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use futures::TryStreamExt;

#[yare::parameterized(
    empty             = { "", &[] },
    single_no_newline = { "a", &["a"] },
    trailing_newline  = { "a\nb\n", &["a", "b"] },
    crlf              = { "a\r\nb", &["a", "b"] },
    blank_line_kept   = { "a\n\nb", &["a", "", "b"] },
)]
fn split_lines_cases(input: &str, expected: &[&str]) {
    assert_eq!(split_lines(input.as_bytes()), expected);
}

#[tokio::test]
async fn default_read_lines_streams_file_lines() {
    let fs = MemoryFs::new().with_file("/f.txt", "one\ntwo\n");
    let lines: Vec<String> = fs.read_lines("/f.txt").try_collect().await.unwrap();
    assert_eq!(lines, vec!["one", "two"]);
}

#[tokio::test]
async fn default_read_lines_propagates_not_found() {
    let fs = MemoryFs::new();
    let result: Result<Vec<String>, FsError> = fs.read_lines("/missing").try_collect().await;
    assert_eq!(result, Err(FsError::NotFound("/missing".to_string())));
}
