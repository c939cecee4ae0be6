// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;
use yare::parameterized;

#[parameterized(
    trailing_pipe = { "ls |", "E001" },
    dangling_redirect = { "cat /a >", "E001" },
    double_pipe = { "ls | | pwd", "E002" },
    leading_pipe = { "| ls", "E002" },
    redirect_to_pipe = { "cat > | ls", "E002" },
    redirect_first = { "> /out", "E002" },
    stray_close = { "ls )", "E003" },
    open_substitution = { "cat (ls", "E003" },
    open_single_quote = { "cat 'abc", "E004" },
    open_double_quote = { "cat \"abc", "E004" },
)]
fn error_codes(source: &str, code: &str) {
    let err = Parser::parse(source).unwrap_err();
    assert_eq!(err.code().as_str(), code, "{err}");
}

#[test]
fn unexpected_token_details() {
    let err = Parser::parse("ls | | pwd").unwrap_err();
    match err {
        ParseError::UnexpectedToken {
            found,
            expected,
            span,
        } => {
            assert_eq!(found, TokenKind::Pipe);
            assert_eq!(expected, "command");
            assert_eq!(span.start.offset, 5);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn second_line_is_rejected() {
    let err = Parser::parse("ls\npwd").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Name,
            ..
        }
    ));
}

#[test]
fn error_inside_substitution_has_absolute_span() {
    let source = "cat (ls | | x)";
    let err = Parser::parse(source).unwrap_err();
    assert_eq!(err.span().slice(source), "|");
    assert_eq!(err.span().start.offset, 10);
}

#[test]
fn context_points_at_error() {
    let source = "ls | | pwd";
    let err = Parser::parse(source).unwrap_err();
    assert_eq!(err.context(source, 3), " | | pw\n   ^");
    assert!(err.diagnostic(source).contains("line 1, column 6"));
}

#[test]
fn diagnostic_rendering() {
    let err = Parser::parse("ls |").unwrap_err();
    assert_eq!(
        err.to_diagnostic().to_string(),
        "error[E001] at 1:5: unexpected end of input, expected command"
    );
}
