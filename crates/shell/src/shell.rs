// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-call facade over parse, compile and execute.

use crate::compiler::Compiler;
use crate::error::Error;
use crate::exec::{Execution, Executor};
use crate::ir::PipelineIR;
use crate::parser::Parser;
use fsh_fs::FileSystem;
use std::sync::Arc;

/// Runs source text against a filesystem capability.
///
/// ```ignore
/// use std::sync::Arc;
/// use fsh_fs::MemoryFs;
/// use fsh_shell::Shell;
///
/// # async fn example() -> Result<(), fsh_shell::Error> {
/// let fs = MemoryFs::new().with_file("/log.txt", "a\nb\n");
/// let shell = Shell::new(Arc::new(fs));
/// assert_eq!(shell.output("show-trailing-lines -n 1 /log.txt").await?, vec!["b"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Shell {
    compiler: Compiler,
    executor: Executor,
}

impl Shell {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            compiler: Compiler::new(),
            executor: Executor::new(fs),
        }
    }

    /// Use `compiler` for the program and its substitutions.
    pub fn compiler(mut self, compiler: Compiler) -> Self {
        self.executor = self.executor.compiler(compiler.clone());
        self.compiler = compiler;
        self
    }

    /// Set the maximum bytes a command substitution may capture.
    pub fn capture_limit(mut self, bytes: usize) -> Self {
        self.executor = self.executor.capture_limit(bytes);
        self
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Parse and compile without running anything.
    pub fn compile(&self, source: &str) -> Result<PipelineIR, Error> {
        let program = Parser::parse(source)?;
        Ok(self.compiler.compile(&program)?)
    }

    /// Compile and start a pipeline.
    pub async fn run(&self, source: &str) -> Result<Execution<'_>, Error> {
        let ir = self.compile(source)?;
        tracing::debug!(source, steps = ir.steps.len(), "running");
        Ok(self.executor.execute(ir).await?)
    }

    /// Run to completion and return the rendered records.
    pub async fn output(&self, source: &str) -> Result<Vec<String>, Error> {
        Ok(self.run(source).await?.lines().await?)
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
