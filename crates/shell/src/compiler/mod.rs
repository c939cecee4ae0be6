// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler from [`Program`] to [`PipelineIR`].
//!
//! Compilation is pure: it validates the program, resolves every command
//! name (canonical or descriptive alias) and turns each command's arguments
//! into a typed [`Step`]. Globs and substitutions stay pending for the
//! executor.

mod args;
mod error;
mod handlers;
mod words;

pub use args::{classify, FlagSpec, Operand, ParsedArgs};
pub use error::CompileError;

use crate::ast::{Program, RedirectKind, SimpleCommand};
use crate::ir::{ExpandedWord, PipelineIR, RedirectionIR, SimpleCommandIR, Step};
use crate::span::Span;
use crate::validator::{validate_with_config, ValidatorConfig};
use handlers::{CommandSpec, HandlerContext, COMMANDS};
use std::collections::BTreeMap;
use std::sync::Arc;
use words::lower_word;

/// Resolves command names and lowers programs to IR.
///
/// Cheap to clone; the registry is shared.
#[derive(Clone)]
pub struct Compiler {
    registry: Arc<BTreeMap<String, &'static CommandSpec>>,
    validator: ValidatorConfig,
}

impl std::fmt::Debug for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("names", &self.registry.keys().collect::<Vec<_>>())
            .field("validator", &self.validator)
            .finish()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// A compiler knowing every built-in command under its short and
    /// descriptive names.
    pub fn new() -> Self {
        let mut registry = BTreeMap::new();
        for spec in COMMANDS {
            registry.insert(spec.name.to_string(), spec);
            registry.insert(spec.alias.to_string(), spec);
        }
        Self {
            registry: Arc::new(registry),
            validator: ValidatorConfig::default(),
        }
    }

    /// A copy of this compiler that also accepts `alias` for `command`.
    ///
    /// `command` may itself be any name this compiler already resolves.
    pub fn with_alias(&self, alias: &str, command: &str) -> Result<Compiler, CompileError> {
        let spec = self.lookup(command).ok_or_else(|| CompileError::UnknownCommand {
            name: command.to_string(),
            span: Span::default(),
        })?;
        let mut registry = (*self.registry).clone();
        registry.insert(alias.to_string(), spec);
        Ok(Compiler {
            registry: Arc::new(registry),
            validator: self.validator.clone(),
        })
    }

    /// Replace the validation settings.
    pub fn validator_config(mut self, config: ValidatorConfig) -> Self {
        self.validator = config;
        self
    }

    /// Canonical command name for `name`, if it is known.
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        self.lookup(name).map(|spec| spec.name)
    }

    /// Every accepted name, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    fn lookup(&self, name: &str) -> Option<&'static CommandSpec> {
        self.registry.get(name).copied()
    }

    /// Lower a parsed program.
    pub fn compile(&self, program: &Program) -> Result<PipelineIR, CompileError> {
        validate_with_config(program, self.validator.clone()).map_err(CompileError::Invalid)?;

        let commands = &program.pipeline.commands;
        let Some(first) = commands.first() else {
            return Err(CompileError::EmptyPipeline { span: program.span });
        };
        let last_index = commands.len() - 1;

        let mut steps = Vec::with_capacity(commands.len());
        let mut source = None;
        let input = redirect_target(first, RedirectKind::In);
        let output = commands
            .last()
            .and_then(|cmd| redirect_target(cmd, RedirectKind::Out));
        let mut first_command = None;

        for (i, cmd) in commands.iter().enumerate() {
            let (lowered, spec) = self.lower_command(cmd)?;
            if i == 0 {
                first_command = Some(lowered.clone());
            }
            if spec.mutating && i != last_index {
                return Err(CompileError::NotLastInPipeline {
                    command: spec.name,
                    span: cmd.span,
                });
            }

            let spanned = lowered
                .args
                .into_iter()
                .zip(cmd.args.iter().map(|w| w.span))
                .collect();
            let parsed = classify(spec.name, spanned, spec.flags)?;
            let leading = parsed.operands.first().map(|o| o.word.clone());

            let ctx = HandlerContext {
                command: spec.name,
                first: i == 0,
                has_input: i == 0 && input.is_some(),
                span: cmd.span,
            };
            let step = (spec.handler)(parsed, &ctx)?;
            if i == 0 && matches!(step, Step::Head { .. } | Step::Tail { .. }) {
                source = leading;
            }
            tracing::debug!(command = spec.name, index = i, ?step, "compiled command");
            steps.push(step);
        }

        let Some(first_command) = first_command else {
            return Err(CompileError::EmptyPipeline { span: program.span });
        };
        Ok(PipelineIR {
            steps,
            source,
            first_command,
            input,
            output,
            span: program.span,
        })
    }

    /// Lower names, arguments and redirections without interpreting them,
    /// along with the command the name resolves to.
    fn lower_command(
        &self,
        cmd: &SimpleCommand,
    ) -> Result<(SimpleCommandIR, &'static CommandSpec), CompileError> {
        let Some(name) = cmd.literal_name() else {
            return Err(CompileError::DynamicCommandName { span: cmd.name.span });
        };
        let spec = self
            .lookup(&name)
            .ok_or_else(|| CompileError::UnknownCommand {
                name: name.clone(),
                span: cmd.name.span,
            })?;

        let lowered = SimpleCommandIR {
            name: ExpandedWord::Literal(name),
            command: spec.name,
            args: cmd.args.iter().map(lower_word).collect(),
            redirections: cmd
                .redirections
                .iter()
                .map(|r| RedirectionIR {
                    kind: r.kind,
                    target: lower_word(&r.target),
                    span: r.span,
                })
                .collect(),
            span: cmd.span,
        };
        Ok((lowered, spec))
    }
}

fn redirect_target(cmd: &SimpleCommand, kind: RedirectKind) -> Option<ExpandedWord> {
    cmd.redirections
        .iter()
        .find(|r| r.kind == kind)
        .map(|r| lower_word(&r.target))
}

#[cfg(test)]
#[path = "../compiler_tests/mod.rs"]
mod tests;
