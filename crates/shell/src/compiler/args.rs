// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag and operand classification for command arguments.

use super::error::CompileError;
use crate::ir::ExpandedWord;
use crate::span::Span;

/// A short flag a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub short: char,
    /// Whether the flag consumes a value (`-n 5` or `-n5`).
    pub takes_value: bool,
}

impl FlagSpec {
    pub const fn switch(short: char) -> Self {
        Self {
            short,
            takes_value: false,
        }
    }

    pub const fn valued(short: char) -> Self {
        Self {
            short,
            takes_value: true,
        }
    }
}

/// A positional argument with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub word: ExpandedWord,
    pub span: Span,
}

/// Arguments split into flags and operands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Flags in order of appearance, with their value if they take one.
    pub flags: Vec<(char, Option<ExpandedWord>)>,
    pub operands: Vec<Operand>,
}

impl ParsedArgs {
    /// Whether any of the given flags is present.
    pub fn has(&self, names: &[char]) -> bool {
        self.flags.iter().any(|(c, _)| names.contains(c))
    }

    /// Value of the last occurrence of a valued flag.
    pub fn value(&self, name: char) -> Option<&ExpandedWord> {
        self.flags
            .iter()
            .rev()
            .find(|(c, _)| *c == name)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn operand_words(self) -> Vec<ExpandedWord> {
        self.operands.into_iter().map(|o| o.word).collect()
    }
}

/// Split a command's arguments into flags and operands.
///
/// Follows the usual short-option conventions:
/// - `-x` or `-abc`: one or more switches
/// - `-n 5` / `-n5`: a flag with a value (the value may be any word)
/// - `--`: ends flag parsing; everything after is an operand
/// - `-` alone: an operand
///
/// Only literal words can be flags. A word whose value is still pending (a
/// glob or a substitution) is always an operand, even if it would expand to
/// something starting with `-`.
pub fn classify(
    command: &'static str,
    args: Vec<(ExpandedWord, Span)>,
    specs: &[FlagSpec],
) -> Result<ParsedArgs, CompileError> {
    let mut parsed = ParsedArgs::default();
    let mut flags_done = false;
    let mut iter = args.into_iter();

    while let Some((word, span)) = iter.next() {
        let flag_text = match word.as_literal() {
            Some(s) if !flags_done && s.len() > 1 && s.starts_with('-') => Some(s.to_string()),
            _ => None,
        };
        let Some(text) = flag_text else {
            parsed.operands.push(Operand { word, span });
            continue;
        };

        if text == "--" {
            flags_done = true;
            continue;
        }
        if text.starts_with("--") {
            return Err(CompileError::UnknownFlag {
                command,
                flag: text,
                span,
            });
        }

        let cluster = &text[1..];
        for (i, c) in cluster.char_indices() {
            let Some(spec) = specs.iter().find(|s| s.short == c) else {
                return Err(CompileError::UnknownFlag {
                    command,
                    flag: format!("-{c}"),
                    span,
                });
            };
            if !spec.takes_value {
                parsed.flags.push((c, None));
                continue;
            }

            let rest = &cluster[i + c.len_utf8()..];
            let value = if !rest.is_empty() {
                ExpandedWord::literal(rest)
            } else {
                match iter.next() {
                    Some((value, _)) => value,
                    None => {
                        return Err(CompileError::MissingFlagValue {
                            command,
                            flag: c,
                            span,
                        })
                    }
                }
            };
            parsed.flags.push((c, Some(value)));
            break;
        }
    }

    Ok(parsed)
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
