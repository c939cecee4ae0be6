// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn bump_tracks_line_and_column() {
    let mut cursor = Cursor::new("ab\ncd", Position::START);
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.position(), Position::new(2, 1, 3));
    cursor.bump();
    assert_eq!(cursor.position(), Position::new(3, 2, 1));
}

#[test]
fn multibyte_chars_advance_by_utf8_length() {
    let mut cursor = Cursor::new("é!", Position::START);
    assert_eq!(cursor.bump(), Some('é'));
    assert_eq!(cursor.position().offset, 2);
    assert_eq!(cursor.position().column, 2);
    assert_eq!(cursor.peek(), Some('!'));
}

#[test]
fn mark_and_reset_backtrack_once() {
    let mut cursor = Cursor::new("hello", Position::START);
    cursor.bump();
    cursor.mark();
    cursor.bump();
    cursor.bump();
    cursor.reset();
    assert_eq!(cursor.position().offset, 1);
    // The mark is consumed by reset.
    cursor.bump();
    cursor.reset();
    assert_eq!(cursor.position().offset, 2);
}

#[test]
fn origin_offsets_are_absolute() {
    let origin = Position::new(10, 2, 5);
    let mut cursor = Cursor::new("xy", origin);
    let start = cursor.position();
    cursor.bump();
    assert_eq!(cursor.position(), Position::new(11, 2, 6));
    assert_eq!(cursor.slice_from(start), "x");
    cursor.rewind();
    assert_eq!(cursor.position(), origin);
}

#[test]
fn peek_nth_and_eof() {
    let mut cursor = Cursor::new("ab", Position::START);
    assert_eq!(cursor.peek_nth(1), Some('b'));
    assert_eq!(cursor.peek_nth(2), None);
    cursor.bump();
    cursor.bump();
    assert!(cursor.is_eof());
    assert_eq!(cursor.bump(), None);
}
