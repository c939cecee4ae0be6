// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::parser::Parser;
use proptest::prelude::*;
use yare::parameterized;

fn render(source: &str) -> String {
    to_source(&Parser::parse(source).unwrap())
}

#[parameterized(
    spacing = { "ls    /tmp|head", "ls /tmp | head" },
    quoted_space = { "cat   'my file'", "cat 'my file'" },
    needless_quotes = { "cat \"plain\"", "cat plain" },
    joined = { "cat \"foo\"bar", "cat foobar" },
    glob = { "ls /logs/*.txt", "ls /logs/*.txt" },
    quoted_glob = { "rm \"*\"", "rm '*'" },
    bracket = { "ls [^ab]x", "ls [!ab]x" },
    redirects = { "head -n 2 </in >/out", "head -n 2 < /in > /out" },
    substitution = { "cat ( ls  /a )", "cat (ls /a)" },
    nested = { "cat (cat (pwd))", "cat (cat (pwd))" },
    empty = { "touch ''", "touch ''" },
    apostrophe = { "cat \"it's\"", "cat it\\'s" },
    comment = { "ls # listing", "ls" },
)]
fn canonical_rendering(source: &str, expected: &str) {
    assert_eq!(render(source), expected);
}

#[test]
fn renders_single_word() {
    let program = Parser::parse("cat 'a b'c").unwrap();
    let word = &program.pipeline.commands[0].args[0];
    assert_eq!(word_to_source(word), "'a b'c");
}

proptest! {
    #[test]
    fn rendering_is_a_fixed_point(
        words in prop::collection::vec("[a-z*/. '\"]{1,6}", 1..4),
        pipe in any::<bool>(),
    ) {
        let mut source = String::from("cat");
        for w in &words {
            // Balance quotes so every generated word lexes cleanly.
            let w = w.replace(['\'', '"'], "");
            if w.is_empty() {
                continue;
            }
            source.push_str(" '");
            source.push_str(&w);
            source.push('\'');
        }
        if pipe {
            source.push_str(" | tail");
        }
        let once = render(&source);
        let twice = render(&once);
        prop_assert_eq!(once, twice);
    }
}
