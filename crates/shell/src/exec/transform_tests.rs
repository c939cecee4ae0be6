// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exec::ExecError;
use fsh_fs::FsError;
use futures::executor::block_on;
use futures::TryStreamExt;
use proptest::prelude::*;
use yare::parameterized;

fn records(count: usize) -> RecordStream<'static> {
    stream::iter((1..=count).map(|i| Ok(Record::text(i.to_string())))).boxed()
}

fn drain(stream: RecordStream<'_>) -> Result<Vec<String>, ExecError> {
    block_on(stream.map_ok(|r| r.render()).try_collect())
}

fn numbers(range: std::ops::RangeInclusive<usize>) -> Vec<String> {
    range.map(|i| i.to_string()).collect()
}

#[parameterized(
    fewer_than_count = { 3, 5, 1..=3 },
    exact = { 4, 4, 1..=4 },
    more_than_count = { 12, 3, 1..=3 },
)]
fn head_keeps_first(total: usize, n: i64, expected: std::ops::RangeInclusive<usize>) {
    assert_eq!(drain(head(records(total), n)).unwrap(), numbers(expected));
}

#[parameterized(
    zero = { 0 },
    negative = { -4 },
)]
fn non_positive_counts_yield_nothing(n: i64) {
    assert!(drain(head(records(5), n)).unwrap().is_empty());
    assert!(drain(tail(records(5), n)).unwrap().is_empty());
}

#[test]
fn tail_keeps_last_in_order() {
    assert_eq!(drain(tail(records(12), 3)).unwrap(), numbers(10..=12));
}

#[test]
fn tail_propagates_upstream_error() {
    let upstream = stream::iter(vec![
        Ok(Record::text("a")),
        Err(ExecError::Fs(FsError::NotFound("/x".into()))),
        Ok(Record::text("b")),
    ])
    .boxed();
    assert_eq!(
        drain(tail(upstream, 10)),
        Err(ExecError::Fs(FsError::NotFound("/x".into())))
    );
}

#[test]
fn head_is_lazy() {
    // An endless upstream still terminates.
    let endless = stream::repeat_with(|| Ok(Record::text("y"))).boxed();
    assert_eq!(drain(head(endless, 2)).unwrap(), vec!["y", "y"]);
}

#[test]
fn number_lines_pads_and_counts_across_records() {
    let upstream = stream::iter(vec![
        Ok(Record::line("alpha", "/a", 1)),
        Ok(Record::line("beta", "/b", 1)),
    ])
    .boxed();
    let lines = drain(number_lines(upstream)).unwrap();
    assert_eq!(lines, vec!["     1\talpha", "     2\tbeta"]);
}

proptest! {
    #[test]
    fn tail_yields_last_min_n_k(total in 0usize..40, n in 0i64..50) {
        let got = drain(tail(records(total), n)).unwrap();
        let keep = usize::try_from(n).unwrap().min(total);
        let expected: Vec<String> = ((total - keep + 1)..=total).map(|i| i.to_string()).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn head_then_tail_agree_on_length(total in 0usize..40, n in 0i64..50) {
        let h = drain(head(records(total), n)).unwrap();
        let t = drain(tail(records(total), n)).unwrap();
        prop_assert_eq!(h.len(), t.len());
    }
}
