// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod errors;
mod pipelines;
mod recovery;
mod substitutions;
mod words;

pub(super) mod helpers {
    use crate::ast::{Program, SimpleCommand, Word};
    use crate::parser::Parser;

    pub fn parse(source: &str) -> Program {
        match Parser::parse(source) {
            Ok(program) => program,
            Err(e) => panic!("parse of {source:?} failed: {e}"),
        }
    }

    pub fn only_command(program: &Program) -> &SimpleCommand {
        assert_eq!(program.pipeline.commands.len(), 1, "expected one command");
        &program.pipeline.commands[0]
    }

    pub fn cmd_name(cmd: &SimpleCommand) -> String {
        cmd.literal_name().unwrap_or_default()
    }

    pub fn assert_literal(word: &Word, expected: &str) {
        assert_eq!(word.literal_value().as_deref(), Some(expected));
    }

    /// `cat (cat (... pwd ...))` with `depth` substitutions.
    pub fn nested(depth: usize) -> String {
        format!("cat {}pwd{}", "(cat ".repeat(depth), ")".repeat(depth))
    }
}
