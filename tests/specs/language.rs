//! Lexing and parsing specs.

use crate::prelude::nested_substitutions;
use fsh_shell::{Lexer, ParseError, Parser, MAX_SUBSTITUTION_DEPTH};
use yare::parameterized;

#[parameterized(
    plain = { "ls /tmp" },
    pipeline = { "cat /log.txt | tail -n 3" },
    quoted = { r#"cat "a b" 'c d' e\ f"# },
    globs = { "ls /logs/*.txt /logs/[ab]?" },
    substitution = { "cat (ls (pwd)/*.md) > out" },
    unterminated = { "cat 'open" },
)]
fn relexing_is_deterministic(source: &str) {
    assert_eq!(Lexer::tokenize(source), Lexer::tokenize(source));
}

#[test]
fn pipeline_commands_in_order() {
    let program = Parser::parse("a | b | c").unwrap();
    let names: Vec<_> = program
        .pipeline
        .commands
        .iter()
        .map(|c| c.literal_name().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn adjacent_quoted_and_bare_text_is_one_word() {
    let program = Parser::parse(r#"cat "foo"bar"#).unwrap();
    let args = &program.pipeline.commands[0].args;
    assert_eq!(args.len(), 1);
    assert_eq!(args[0].literal_value().as_deref(), Some("foobar"));
}

#[test]
fn substitution_nesting_limit() {
    assert!(Parser::parse(&nested_substitutions(MAX_SUBSTITUTION_DEPTH)).is_ok());
    let err = Parser::parse(&nested_substitutions(MAX_SUBSTITUTION_DEPTH + 1)).unwrap_err();
    assert!(
        matches!(err, ParseError::SubstitutionDepthExceeded { limit: 10, .. }),
        "{err:?}"
    );
}
