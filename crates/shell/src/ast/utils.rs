// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying and analyzing AST nodes.

use super::{AstVisitor, Program, SimpleCommand, WordPart};

impl Program {
    /// Parse input string into a program.
    ///
    /// This is a convenience wrapper around [`Parser::parse`].
    ///
    /// [`Parser::parse`]: crate::Parser::parse
    pub fn parse(input: &str) -> Result<Self, crate::parse_error::ParseError> {
        crate::parser::Parser::parse(input)
    }

    /// Count the total number of simple commands in the AST, including
    /// commands inside command substitutions.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use fsh_shell::Parser;
    ///
    /// let ast = Parser::parse("cat /a | head -n 2")?;
    /// assert_eq!(ast.count_commands(), 2);
    ///
    /// // Commands in substitutions are counted too
    /// let ast = Parser::parse("cat (ls /logs)")?;
    /// assert_eq!(ast.count_commands(), 2);
    /// # Ok::<(), fsh_shell::ParseError>(())
    /// ```
    pub fn count_commands(&self) -> usize {
        struct Counter(usize);
        impl AstVisitor for Counter {
            fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
                self.0 += 1;
                self.walk_simple_command(cmd);
            }
        }
        let mut counter = Counter(0);
        counter.visit_program(self);
        counter.0
    }

    /// Deepest nesting of command substitutions. A program without any
    /// substitutions has depth 0.
    pub fn max_substitution_depth(&self) -> usize {
        struct DepthTracker {
            current: usize,
            max: usize,
        }
        impl AstVisitor for DepthTracker {
            fn visit_word_part(&mut self, part: &WordPart) {
                if matches!(part, WordPart::CommandSub { .. }) {
                    self.current += 1;
                    self.max = self.max.max(self.current);
                    self.walk_word_part(part);
                    self.current -= 1;
                } else {
                    self.walk_word_part(part);
                }
            }
        }
        let mut tracker = DepthTracker { current: 0, max: 0 };
        tracker.visit_program(self);
        tracker.max
    }

    /// Whether any word anywhere (substitution bodies included) has a glob.
    pub fn has_globs(&self) -> bool {
        struct Finder(bool);
        impl AstVisitor for Finder {
            fn visit_word_part(&mut self, part: &WordPart) {
                if matches!(part, WordPart::Glob { .. }) {
                    self.0 = true;
                }
                self.walk_word_part(part);
            }
        }
        let mut finder = Finder(false);
        finder.visit_program(self);
        finder.0
    }

    /// Literal command names in visit order, substitution bodies included.
    pub fn command_names(&self) -> Vec<String> {
        struct Names(Vec<String>);
        impl AstVisitor for Names {
            fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
                if let Some(name) = cmd.literal_name() {
                    self.0.push(name);
                }
                self.walk_simple_command(cmd);
            }
        }
        let mut names = Names(Vec::new());
        names.visit_program(self);
        names.0
    }
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
