// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lowering of AST words to [`ExpandedWord`]s.

use crate::ast::{Word, WordPart};
use crate::ir::{ExpandedWord, Fragment, GlobWord, Resolution, SubstitutionWord};
use fsh_fs::path::escape_pattern;

/// Convert a word, deferring every expansion.
///
/// Literal words are final. Words with globs become pending patterns whose
/// literal parts are escaped, so `"*"x*` only matches names starting with a
/// star followed by `x`. Words with substitutions keep their fragments.
pub(crate) fn lower_word(word: &Word) -> ExpandedWord {
    if let Some(value) = word.literal_value() {
        return ExpandedWord::Literal(value);
    }

    let text = word.text();
    if word.has_substitution() {
        let fragments = word.parts.iter().map(fragment).collect();
        return ExpandedWord::Substitution(Resolution::Pending(SubstitutionWord {
            fragments,
            text,
        }));
    }

    ExpandedWord::Glob(Resolution::Pending(GlobWord {
        pattern: glob_pattern(&word.parts),
        text,
    }))
}

fn fragment(part: &WordPart) -> Fragment {
    match part {
        WordPart::Literal { value, .. } => Fragment::Literal(value.clone()),
        WordPart::Glob { pattern } => Fragment::Glob(pattern.clone()),
        WordPart::CommandSub {
            program,
            source,
            span,
        } => Fragment::Command {
            program: program.clone(),
            source: source.clone(),
            span: *span,
        },
    }
}

fn glob_pattern(parts: &[WordPart]) -> String {
    parts
        .iter()
        .map(|part| match part {
            WordPart::Literal { value, .. } => escape_pattern(value),
            WordPart::Glob { pattern } => pattern.clone(),
            WordPart::CommandSub { source, .. } => escape_pattern(&format!("({source})")),
        })
        .collect()
}
