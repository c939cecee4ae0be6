//! End-to-end execution specs.

use crate::prelude::{fixture, nested_substitutions, output, run};
use fsh_fs::FsError;
use fsh_shell::{Error, ExecError, ParseError, MAX_SUBSTITUTION_DEPTH};
use yare::parameterized;

#[tokio::test]
async fn trailing_lines_of_a_file() {
    let fs = fixture();
    assert_eq!(
        output(&fs, "show-trailing-lines -n 3 /log.txt").await,
        vec!["line 10", "line 11", "line 12"]
    );
}

#[parameterized(
    zero = { 0, 0 },
    fewer = { 3, 3 },
    exact = { 12, 12 },
    more = { 50, 12 },
)]
#[test_macro(tokio::test)]
async fn tail_keeps_last_records(n: usize, expected: usize) {
    let fs = fixture();
    let lines = output(&fs, &format!("cat /log.txt | tail -n {n}")).await;
    let all: Vec<String> = (1..=12).map(|i| format!("line {i}")).collect();
    assert_eq!(lines, all[12 - expected..].to_vec());
}

#[tokio::test]
async fn unmatched_glob_is_literal() {
    let fs = fixture();
    assert_eq!(
        run(&fs, "cat /tmp/*.none").await,
        Err(Error::Exec(ExecError::Fs(FsError::NotFound(
            "/tmp/*.none".into()
        ))))
    );
    output(&fs, "touch /work/*.new").await;
    assert_eq!(fs.contents("/work/*.new").as_deref(), Some(""));
}

#[tokio::test]
async fn nested_substitutions_run_to_the_limit() {
    let fs = fixture();
    assert_eq!(
        output(&fs, &nested_substitutions(MAX_SUBSTITUTION_DEPTH)).await,
        Vec::<String>::new()
    );
    assert!(matches!(
        run(&fs, &nested_substitutions(MAX_SUBSTITUTION_DEPTH + 1)).await,
        Err(Error::Parse(ParseError::SubstitutionDepthExceeded { .. }))
    ));
}

#[tokio::test]
async fn recursive_remove_of_two_trees() {
    let fs = fixture();
    output(&fs, "remove -r /tmp/a /tmp/b").await;
    assert!(!fs.is_dir("/tmp/a"));
    assert!(!fs.is_dir("/tmp/b"));
    assert!(fs.is_dir("/tmp"));
}
