// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Parser;

fn validate_str(input: &str) -> Result<(), Vec<ValidationError>> {
    let ast = Parser::parse(input).expect("parse failed");
    validate(&ast)
}

fn validate_str_with_config(
    input: &str,
    config: ValidatorConfig,
) -> Result<(), Vec<ValidationError>> {
    let ast = Parser::parse(input).expect("parse failed");
    validate_with_config(&ast, config)
}

// =============================================================================
// Valid Cases
// =============================================================================

#[test]
fn valid_simple_command() {
    assert!(validate_str("ls /tmp").is_ok());
}

#[test]
fn valid_pipeline_with_redirections_at_ends() {
    assert!(validate_str("cat < /in | head -n 2 | tail > /out").is_ok());
}

#[test]
fn valid_single_command_with_both_redirections() {
    assert!(validate_str("head < /in > /out").is_ok());
}

#[test]
fn valid_empty_input() {
    assert!(validate_str("").is_ok());
}

#[test]
fn valid_substitution() {
    assert!(validate_str("cat (ls /logs | head -n 1)").is_ok());
}

// =============================================================================
// Redirection Placement
// =============================================================================

#[test]
fn output_redirect_before_pipe() {
    let errors = validate_str("cat /a > /b | tail").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ValidationError::OutputNotLast { .. }));
}

#[test]
fn input_redirect_after_pipe() {
    let errors = validate_str("ls | cat < /in").unwrap_err();
    assert!(matches!(errors[0], ValidationError::InputNotFirst { .. }));
}

#[test]
fn duplicate_output_redirect() {
    let source = "cat /a > /b > /c";
    let errors = validate_str(source).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ValidationError::DuplicateRedirect { symbol, span } => {
            assert_eq!(*symbol, ">");
            assert_eq!(span.slice(source), "> /c");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn placement_is_checked_inside_substitutions() {
    let errors = validate_str("cat (ls > /x | head)").unwrap_err();
    assert!(matches!(errors[0], ValidationError::OutputNotLast { .. }));
}

#[test]
fn empty_redirect_target() {
    let errors = validate_str("cat /a > ''").unwrap_err();
    assert!(matches!(errors[0], ValidationError::EmptyRedirectTarget { .. }));
}

#[test]
fn all_errors_are_collected() {
    let errors = validate_str("cat /a > /b | cat < /c | tail").unwrap_err();
    assert_eq!(errors.len(), 2);
}

// =============================================================================
// Substitutions
// =============================================================================

#[test]
fn empty_substitution_rejected_by_default() {
    let errors = validate_str("cat ()").unwrap_err();
    assert!(matches!(errors[0], ValidationError::EmptySubstitution { .. }));
}

#[test]
fn empty_substitution_allowed_by_config() {
    let config = ValidatorConfig {
        allow_empty_substitutions: true,
        ..ValidatorConfig::default()
    };
    assert!(validate_str_with_config("cat ()", config).is_ok());
}

#[test]
fn nesting_limit_from_config() {
    let config = ValidatorConfig {
        max_substitution_depth: 1,
        ..ValidatorConfig::default()
    };
    assert!(validate_str_with_config("cat (pwd)", config.clone()).is_ok());
    let errors = validate_str_with_config("cat (cat (pwd))", config).unwrap_err();
    assert_eq!(
        errors[0],
        ValidationError::ExcessiveNesting {
            depth: 2,
            max: 1,
            span: errors[0].span(),
        }
    );
}
