// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::span::Position;
use yare::parameterized;

fn at(line: usize, column: usize) -> Span {
    Span::empty(Position::new(0, line, column))
}

#[test]
fn display_format() {
    let diag = Diagnostic::error(
        DiagnosticCode::UnexpectedToken,
        "unexpected token '|', expected command",
        at(1, 9),
    );
    assert_eq!(
        diag.to_string(),
        "error[E002] at 1:9: unexpected token '|', expected command"
    );
}

#[parameterized(
    eof = { DiagnosticCode::UnexpectedEof, "E001" },
    token = { DiagnosticCode::UnexpectedToken, "E002" },
    paren = { DiagnosticCode::UnmatchedParen, "E003" },
    quote = { DiagnosticCode::UnterminatedQuote, "E004" },
    depth = { DiagnosticCode::SubstitutionDepthExceeded, "E005" },
)]
fn codes_are_stable(code: DiagnosticCode, expected: &str) {
    assert_eq!(code.as_str(), expected);
}

#[test]
fn collector_keeps_order() {
    let mut diags = Diagnostics::new();
    assert!(diags.is_empty());
    assert!(!diags.has_errors());

    diags.push(Diagnostic::error(DiagnosticCode::UnterminatedQuote, "a", at(1, 1)));
    diags.push(Diagnostic::error(DiagnosticCode::UnmatchedParen, "b", at(1, 2)));

    assert_eq!(diags.len(), 2);
    assert!(diags.has_errors());
    assert_eq!(
        diags.codes(),
        vec![DiagnosticCode::UnterminatedQuote, DiagnosticCode::UnmatchedParen]
    );
    let messages: Vec<_> = (&diags).into_iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["a", "b"]);
}

#[test]
fn warnings_are_not_errors() {
    let mut diags = Diagnostics::new();
    diags.push(Diagnostic {
        severity: Severity::Warning,
        code: DiagnosticCode::UnexpectedToken,
        message: "odd".into(),
        span: at(2, 1),
    });
    assert!(!diags.has_errors());
    assert_eq!(diags.iter().next().map(|d| d.to_string()), Some("warning[E002] at 2:1: odd".into()));
}
