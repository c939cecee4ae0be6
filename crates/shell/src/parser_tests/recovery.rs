// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::ast::WordPart;
use crate::diagnostics::DiagnosticCode;
use crate::parser::Parser;

#[test]
fn clean_input_has_no_diagnostics() {
    let result = Parser::parse_with_recovery("ls /logs | head");
    assert!(result.is_clean());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn broken_substitutions_are_all_reported() {
    let result = Parser::parse_with_recovery("cat (ls |) (pwd");
    let program = result.program.as_ref().unwrap();
    assert_eq!(
        result.diagnostics.codes(),
        vec![DiagnosticCode::UnexpectedEof, DiagnosticCode::UnmatchedParen]
    );
    assert!(!result.is_clean());

    let args = &program.pipeline.commands[0].args;
    assert_eq!(args.len(), 2);
    // The unparseable body is kept as text.
    assert_eq!(args[0].parts, vec![WordPart::quoted("(ls |)")]);
    // The unclosed one still had a valid body.
    assert!(args[1].has_substitution());
}

#[test]
fn unterminated_quote_is_reported_and_kept() {
    let result = Parser::parse_with_recovery("cat 'abc");
    assert_eq!(
        result.diagnostics.codes(),
        vec![DiagnosticCode::UnterminatedQuote]
    );
    let program = result.program.unwrap();
    assert_eq!(
        program.pipeline.commands[0].args[0].literal_value().as_deref(),
        Some("abc")
    );
}

#[test]
fn nested_errors_share_the_collector() {
    let result = Parser::parse_with_recovery("cat (cat (ls | |)) (|)");
    assert_eq!(
        result.diagnostics.codes(),
        vec![
            DiagnosticCode::UnexpectedToken,
            DiagnosticCode::UnexpectedToken
        ]
    );
    assert!(result.program.is_some());
}

#[test]
fn structural_errors_leave_no_program() {
    let result = Parser::parse_with_recovery("ls | | pwd");
    assert!(result.program.is_none());
    assert_eq!(
        result.diagnostics.codes(),
        vec![DiagnosticCode::UnexpectedToken]
    );
}
