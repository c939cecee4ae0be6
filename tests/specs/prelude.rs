//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use fsh_fs::MemoryFs;
use fsh_shell::{Error, Shell};
use std::sync::Arc;

/// `/log.txt` with twelve numbered lines, plus a few directories.
pub fn fixture() -> MemoryFs {
    let log: String = (1..=12).map(|i| format!("line {i}\n")).collect();
    MemoryFs::new()
        .with_file("/log.txt", log)
        .with_file("/tmp/a/one.txt", "1\n")
        .with_file("/tmp/b/two.txt", "2\n")
        .with_dir("/work")
        .with_current_dir("/work")
}

pub fn shell(fs: &MemoryFs) -> Shell {
    Shell::new(Arc::new(fs.clone()))
}

pub async fn run(fs: &MemoryFs, source: &str) -> Result<Vec<String>, Error> {
    shell(fs).output(source).await
}

/// Run `source` and return its rendered output, failing with a diagnostic.
pub async fn output(fs: &MemoryFs, source: &str) -> Vec<String> {
    match run(fs, source).await {
        Ok(lines) => lines,
        Err(e) => panic!("{source:?} failed:\n{}", e.render(source)),
    }
}

/// `ls (ls (... (pwd) ...))` with `depth` substitutions.
pub fn nested_substitutions(depth: usize) -> String {
    format!("ls {}(pwd){}", "(ls ".repeat(depth - 1), ")".repeat(depth - 1))
}
