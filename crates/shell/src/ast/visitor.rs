// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only traversal over [`Program`] trees.

use super::{Pipeline, Program, Redirection, SimpleCommand, Word, WordPart};

/// Per-node hooks over a parsed program.
///
/// The defaults descend everywhere, substitution bodies included. A
/// `visit_*` override that skips its `walk_*` call prunes that subtree.
///
/// # Example
///
/// ```ignore
/// use fsh_shell::{AstVisitor, Parser, SimpleCommand};
///
/// struct CommandFinder(Vec<String>);
///
/// impl AstVisitor for CommandFinder {
///     fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
///         if let Some(name) = cmd.literal_name() {
///             self.0.push(name);
///         }
///         self.walk_simple_command(cmd);
///     }
/// }
///
/// let ast = Parser::parse("cat (ls /logs) | tail")?;
/// let mut finder = CommandFinder(Vec::new());
/// finder.visit_program(&ast);
/// assert_eq!(finder.0, vec!["cat", "ls", "tail"]);
/// # Ok::<(), fsh_shell::ParseError>(())
/// ```
pub trait AstVisitor {
    fn visit_program(&mut self, program: &Program) {
        self.walk_program(program);
    }

    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        self.walk_pipeline(pipeline);
    }

    fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
        self.walk_simple_command(cmd);
    }

    fn visit_word(&mut self, word: &Word) {
        self.walk_word(word);
    }

    fn visit_word_part(&mut self, part: &WordPart) {
        self.walk_word_part(part);
    }

    fn visit_redirection(&mut self, redirection: &Redirection) {
        self.walk_redirection(redirection);
    }

    fn walk_program(&mut self, program: &Program) {
        self.visit_pipeline(&program.pipeline);
    }

    fn walk_pipeline(&mut self, pipeline: &Pipeline) {
        for command in &pipeline.commands {
            self.visit_simple_command(command);
        }
    }

    /// Name first, then arguments, then redirection targets.
    fn walk_simple_command(&mut self, cmd: &SimpleCommand) {
        self.visit_word(&cmd.name);
        for arg in &cmd.args {
            self.visit_word(arg);
        }
        for redir in &cmd.redirections {
            self.visit_redirection(redir);
        }
    }

    fn walk_word(&mut self, word: &Word) {
        for part in &word.parts {
            self.visit_word_part(part);
        }
    }

    /// Only substitutions have children.
    fn walk_word_part(&mut self, part: &WordPart) {
        if let WordPart::CommandSub { program, .. } = part {
            self.visit_program(program);
        }
    }

    fn walk_redirection(&mut self, redirection: &Redirection) {
        self.visit_word(&redirection.target);
    }
}
