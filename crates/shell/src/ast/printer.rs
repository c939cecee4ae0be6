// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical re-rendering of an AST as source text.
//!
//! Output uses single spaces between words, ` | ` between commands and
//! quotes literals only when they would not lex back to the same value.
//! Rendering a program, parsing it and rendering again is a fixed point.

use super::{AstVisitor, Pipeline, Program, Redirection, SimpleCommand, Word, WordPart};

/// Render a program as canonical source text.
///
/// # Examples
///
/// ```ignore
/// use fsh_shell::{ast::printer::to_source, Parser};
///
/// let ast = Parser::parse("cat   'my file'|tail  -n 3")?;
/// assert_eq!(to_source(&ast), "cat 'my file' | tail -n 3");
/// # Ok::<(), fsh_shell::ParseError>(())
/// ```
pub fn to_source(program: &Program) -> String {
    let mut printer = Printer::default();
    printer.visit_program(program);
    printer.out
}

/// Render a single word.
pub fn word_to_source(word: &Word) -> String {
    let mut printer = Printer::default();
    printer.visit_word(word);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl AstVisitor for Printer {
    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        for (i, cmd) in pipeline.commands.iter().enumerate() {
            if i > 0 {
                self.out.push_str(" | ");
            }
            self.visit_simple_command(cmd);
        }
    }

    fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
        self.visit_word(&cmd.name);
        for arg in &cmd.args {
            self.out.push(' ');
            self.visit_word(arg);
        }
        for redir in &cmd.redirections {
            self.out.push(' ');
            self.visit_redirection(redir);
        }
    }

    fn visit_redirection(&mut self, redir: &Redirection) {
        self.out.push_str(redir.kind.symbol());
        self.out.push(' ');
        self.walk_redirection(redir);
    }

    fn visit_word(&mut self, word: &Word) {
        if word.parts.is_empty() {
            self.out.push_str("''");
            return;
        }
        self.walk_word(word);
    }

    fn visit_word_part(&mut self, part: &WordPart) {
        match part {
            WordPart::Literal { value, .. } => push_literal(&mut self.out, value),
            WordPart::Glob { pattern } => self.out.push_str(pattern),
            WordPart::CommandSub { program, .. } => {
                self.out.push('(');
                self.visit_program(program);
                self.out.push(')');
            }
        }
    }
}

fn needs_quoting(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '|' | '<' | '>' | '(' | ')' | '"' | '\'' | '\\' | '*' | '?' | '[' | '#'
        )
}

fn push_literal(out: &mut String, value: &str) {
    if value.is_empty() {
        out.push_str("''");
    } else if !value.chars().any(needs_quoting) {
        out.push_str(value);
    } else if !value.contains('\'') && !value.contains('\n') {
        out.push('\'');
        out.push_str(value);
        out.push('\'');
    } else {
        for c in value.chars() {
            if c == '\n' {
                out.push_str("'\n'");
            } else {
                if needs_quoting(c) {
                    out.push('\\');
                }
                out.push(c);
            }
        }
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
