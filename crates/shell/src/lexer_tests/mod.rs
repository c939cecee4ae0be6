// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::token::{Segment, TokenFlags};
use proptest::prelude::*;
use yare::parameterized;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source).iter().map(|t| t.kind).collect()
}

fn words(source: &str) -> Vec<String> {
    Lexer::tokenize(source)
        .into_iter()
        .filter(|t| t.kind.is_word())
        .map(|t| t.text)
        .collect()
}

fn single_word(source: &str) -> Token {
    let tokens = Lexer::tokenize(source);
    assert_eq!(tokens.len(), 2, "expected one word and EOF in {tokens:?}");
    tokens.into_iter().next().unwrap()
}

fn literal(value: &str, quoted: bool) -> Segment {
    Segment::Literal {
        value: value.to_string(),
        quoted,
    }
}

// =============================================================================
// Operators and Structure
// =============================================================================

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \t "), vec![TokenKind::Eof]);
}

#[test]
fn pipeline_tokens() {
    assert_eq!(
        kinds("cat a.txt | tail -n 3 > out"),
        vec![
            TokenKind::Name,
            TokenKind::Word,
            TokenKind::Pipe,
            TokenKind::Name,
            TokenKind::Word,
            TokenKind::Number,
            TokenKind::Greater,
            TokenKind::Name,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn operators_need_no_whitespace() {
    assert_eq!(words("cat<in|head>out"), vec!["cat", "in", "head", "out"]);
    assert_eq!(
        kinds("a|b"),
        vec![TokenKind::Name, TokenKind::Pipe, TokenKind::Name, TokenKind::Eof]
    );
}

#[test]
fn stray_close_paren_is_its_own_token() {
    assert_eq!(
        kinds("ls )"),
        vec![TokenKind::Name, TokenKind::RParen, TokenKind::Eof]
    );
}

#[test]
fn newlines_and_comments() {
    assert_eq!(
        kinds("ls # list\npwd"),
        vec![
            TokenKind::Name,
            TokenKind::Comment,
            TokenKind::Newline,
            TokenKind::Name,
            TokenKind::Eof,
        ]
    );
    let tokens = Lexer::tokenize("# only a comment");
    assert_eq!(tokens[0].text, "# only a comment");
}

#[test]
fn hash_inside_word_is_literal() {
    let token = single_word("a#b");
    assert_eq!(token.segments, vec![literal("a#b", false)]);
}

#[test]
fn line_continuation_is_blank() {
    assert_eq!(words("ls \\\n /tmp"), vec!["ls", "/tmp"]);
}

#[parameterized(
    digits = { "42", TokenKind::Number },
    name = { "head", TokenKind::Name },
    underscore = { "_x1", TokenKind::Name },
    path = { "/tmp/a", TokenKind::Word },
    dashed = { "show-trailing-lines", TokenKind::Word },
    flag = { "-n", TokenKind::Word },
)]
fn classifies_plain_words(source: &str, expected: TokenKind) {
    assert_eq!(single_word(source).kind, expected);
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_track_offsets_and_columns() {
    let tokens = Lexer::tokenize("ls /tmp\ncat x");
    let cat = &tokens[3];
    assert_eq!(cat.text, "cat");
    assert_eq!(cat.span.start, Position::new(8, 2, 1));
    assert_eq!(cat.span.end, Position::new(11, 2, 4));
}

#[test]
fn origin_offsets_fragment_spans() {
    let origin = Position::new(10, 1, 11);
    let tokens = Lexer::with_origin("pwd", origin).tokenize_all();
    assert_eq!(tokens[0].span.start, origin);
    assert_eq!(tokens[0].span.end.offset, 13);
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new("ls");
    lexer.next_token();
    assert!(lexer.next_token().is_eof());
    assert!(lexer.next_token().is_eof());
}

#[test]
fn tokenize_all_rescans_from_start() {
    let mut lexer = Lexer::new("ls | pwd");
    lexer.next_token();
    let all = lexer.tokenize_all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].text, "ls");
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn single_quotes_are_verbatim() {
    let token = single_word("'a b|c*'");
    assert_eq!(token.kind, TokenKind::Word);
    assert_eq!(token.text, "'a b|c*'");
    assert_eq!(token.segments, vec![literal("a b|c*", true)]);
    assert!(token.flags.quoted);
    assert!(!token.flags.has_glob);
}

#[test]
fn double_quotes_allow_limited_escapes() {
    let token = single_word(r#""say \"hi\" \n""#);
    assert_eq!(token.segments, vec![literal(r#"say "hi" \n"#, true)]);
}

#[test]
fn mixed_quoting_splits_segments() {
    let token = single_word("pre'mid'post");
    assert_eq!(
        token.segments,
        vec![
            literal("pre", false),
            literal("mid", true),
            literal("post", false)
        ]
    );
}

#[test]
fn empty_quotes_make_an_empty_argument() {
    let token = single_word("''");
    assert_eq!(token.segments, vec![literal("", true)]);
}

#[test]
fn backslash_escapes_outside_quotes() {
    let token = single_word(r"a\ b\*");
    assert_eq!(
        token.segments,
        vec![
            literal("a", false),
            literal(" ", true),
            literal("b", false),
            literal("*", true)
        ]
    );
    assert!(!token.flags.has_glob);
}

#[test]
fn trailing_backslash_is_literal() {
    let token = single_word("a\\");
    assert_eq!(token.segments, vec![literal("a\\", false)]);
}

#[test]
fn unterminated_quote_is_flagged_not_fatal() {
    let token = single_word("'abc");
    assert!(token.flags.unterminated_quote);
    assert!(token.flags.is_incomplete());
    assert_eq!(token.segments, vec![literal("abc", true)]);
}

// =============================================================================
// Globs
// =============================================================================

#[test]
fn glob_segments() {
    let token = single_word("/logs/*.txt");
    assert!(token.flags.has_glob);
    assert_eq!(
        token.segments,
        vec![
            literal("/logs/", false),
            Segment::Glob("*".into()),
            literal(".txt", false)
        ]
    );
}

#[parameterized(
    plain = { "[abc]", "[abc]" },
    negated_bang = { "[!a-z]", "[!a-z]" },
    negated_caret = { "[^a-z]", "[!a-z]" },
    leading_bracket = { "[]x]", "[]x]" },
)]
fn bracket_classes(source: &str, expected: &str) {
    let token = single_word(source);
    assert_eq!(token.segments, vec![Segment::Glob(expected.into())]);
}

#[test]
fn unclosed_bracket_is_literal() {
    let token = single_word("a[b");
    assert!(!token.flags.has_glob);
    assert_eq!(token.segments, vec![literal("a[b", false)]);
}

#[test]
fn quoted_glob_chars_stay_literal() {
    let token = single_word("\"*.txt\"");
    assert!(!token.flags.has_glob);
    assert_eq!(token.segments, vec![literal("*.txt", true)]);
}

// =============================================================================
// Substitutions
// =============================================================================

#[test]
fn substitution_body_is_captured() {
    let token = single_word("(cat /list)");
    assert!(token.flags.has_substitution);
    match &token.segments[..] {
        [Segment::Substitution { source, span }] => {
            assert_eq!(source, "cat /list");
            assert_eq!(span.start.offset, 1);
            assert_eq!(span.end.offset, 10);
        }
        other => panic!("unexpected segments {other:?}"),
    }
}

#[test]
fn nested_substitution_stays_in_one_segment() {
    let token = single_word("(cat (pwd))");
    match &token.segments[..] {
        [Segment::Substitution { source, span }] => {
            assert_eq!(source, "cat (pwd)");
            assert_eq!((span.start.offset, span.end.offset), (1, 10));
        }
        other => panic!("unexpected segments {other:?}"),
    }
}

#[test]
fn quoted_parens_do_not_count() {
    let token = single_word("(cat ')')");
    match &token.segments[..] {
        [Segment::Substitution { source, .. }] => assert_eq!(source, "cat ')'"),
        other => panic!("unexpected segments {other:?}"),
    }
    assert!(!token.flags.unbalanced_paren);
}

#[test]
fn substitution_inside_word() {
    let token = single_word("/dir/(pwd).bak");
    assert_eq!(token.segments.len(), 3);
    assert_eq!(token.segments[0], literal("/dir/", false));
    assert_eq!(token.segments[2], literal(".bak", false));
}

#[test]
fn substitution_with_pipe_inside() {
    assert_eq!(
        kinds("cat (ls | head -n 1)"),
        vec![TokenKind::Name, TokenKind::Word, TokenKind::Eof]
    );
}

#[test]
fn unbalanced_paren_is_flagged() {
    let token = single_word("(cat a");
    assert!(token.flags.unbalanced_paren);
    assert_eq!(
        token.flags,
        TokenFlags {
            has_substitution: true,
            unbalanced_paren: true,
            ..TokenFlags::default()
        }
    );
}

#[test]
fn unbalanced_paren_with_open_quote() {
    let token = single_word("(cat 'a");
    assert!(token.flags.unbalanced_paren);
    assert!(token.flags.unterminated_quote);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn lexing_is_deterministic_and_terminates(source in "[ a-z|<>()'\"*?\\[\\]#\\\\\n-]{0,40}") {
        let first = Lexer::tokenize(&source);
        let second = Lexer::tokenize(&source);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.last().is_some_and(|t| t.is_eof()));
    }

    #[test]
    fn token_spans_are_ordered(source in "[ a-z|<>()'*\n]{0,40}") {
        let tokens = Lexer::tokenize(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end.offset <= pair[1].span.start.offset);
        }
        for token in &tokens {
            prop_assert_eq!(token.span.slice(&source), token.text.as_str());
        }
    }
}
