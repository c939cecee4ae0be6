// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod consumers;
mod producers;
mod redirects;
mod substitutions;

pub(super) mod helpers {
    use crate::exec::{Completion, ExecError, Executor, Record};
    use fsh_fs::MemoryFs;
    use std::sync::Arc;

    /// A small tree with `/docs` as the current directory.
    pub fn fixture() -> MemoryFs {
        let log: String = (1..=12).map(|i| format!("line {i}\n")).collect();
        MemoryFs::new()
            .with_file("/log.txt", log)
            .with_file("/docs/a.md", "alpha\nbeta\n")
            .with_file("/docs/b.md", "gamma\n")
            .with_file("/docs/notes.txt", "n1\n")
            .with_file("/docs/.hidden", "h\n")
            .with_file("/tmp/a/x.txt", "x\n")
            .with_dir("/tmp/b")
            .with_current_dir("/docs")
    }

    pub fn executor(fs: &MemoryFs) -> Executor {
        Executor::new(Arc::new(fs.clone()))
    }

    pub async fn run_with(executor: &Executor, source: &str) -> Result<Vec<String>, ExecError> {
        executor.execute_str(source).await?.lines().await
    }

    pub async fn run(fs: &MemoryFs, source: &str) -> Result<Vec<String>, ExecError> {
        run_with(&executor(fs), source).await
    }

    pub async fn records(fs: &MemoryFs, source: &str) -> Vec<Record> {
        let executor = executor(fs);
        let execution = match executor.execute_str(source).await {
            Ok(execution) => execution,
            Err(e) => panic!("{source:?} failed: {e}"),
        };
        match execution.records().await {
            Ok(records) => records,
            Err(e) => panic!("{source:?} failed: {e}"),
        }
    }

    pub async fn lines(fs: &MemoryFs, source: &str) -> Vec<String> {
        match run(fs, source).await {
            Ok(lines) => lines,
            Err(e) => panic!("{source:?} failed: {e}"),
        }
    }

    pub async fn effect(fs: &MemoryFs, source: &str) -> Result<Completion, ExecError> {
        let executor = executor(fs);
        let execution = executor.execute_str(source).await?;
        assert!(execution.is_effect(), "{source:?} should be an effect");
        execution.complete().await
    }
}
