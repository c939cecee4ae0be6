// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end tests: source text through the public [`Shell`] facade against
//! an in-memory filesystem.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use fsh_fs::{MemoryFs, TracedFs};
use fsh_shell::{Compiler, Record, Shell};
use serde_json::json;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn project() -> MemoryFs {
    MemoryFs::new()
        .with_file("/project/README.md", "# project\nsecond\n")
        .with_file("/project/src/main.rs", "fn main() {}\n")
        .with_file("/project/src/lib.rs", "pub mod a;\npub mod b;\n")
        .with_file("/project/manifest", "/project/src/main.rs\n/project/src/lib.rs\n")
        .with_dir("/project/build")
        .with_current_dir("/project")
}

fn shell(fs: &MemoryFs) -> Shell {
    Shell::new(Arc::new(TracedFs::new(fs.clone())))
}

async fn output(fs: &MemoryFs, source: &str) -> Vec<String> {
    match shell(fs).output(source).await {
        Ok(lines) => lines,
        Err(e) => panic!("{source:?} failed:\n{}", e.render(source)),
    }
}

async fn complete(fs: &MemoryFs, source: &str) -> usize {
    let shell = shell(fs);
    let execution = shell.run(source).await.unwrap();
    assert!(execution.is_effect(), "{source:?} should be an effect");
    execution.complete().await.unwrap().operations
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_then_read() {
    let fs = project();
    assert_eq!(
        output(&fs, "ls src/*.rs | cat").await,
        vec!["pub mod a;", "pub mod b;", "fn main() {}"]
    );
}

#[tokio::test]
async fn descriptive_names_mix_with_short_names() {
    let fs = project();
    assert_eq!(
        output(&fs, "concatenate-and-print README.md | show-trailing-lines -n 1").await,
        vec!["second"]
    );
}

#[tokio::test]
async fn input_redirect_feeds_first_command() {
    let fs = project();
    assert_eq!(output(&fs, "head -n 1 < README.md").await, vec!["# project"]);
}

#[tokio::test]
async fn long_listing_is_json() {
    let fs = project();
    let shell = shell(&fs);
    let records = shell
        .run("ls -l /project/src")
        .await
        .unwrap()
        .records()
        .await
        .unwrap();
    assert_eq!(
        records[0],
        Record::Json(json!({
            "name": "lib.rs",
            "path": "/project/src/lib.rs",
            "kind": "file",
            "size": 22,
        }))
    );
}

// ---------------------------------------------------------------------------
// Substitutions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn substitution_reads_manifest() {
    let fs = project();
    assert_eq!(
        output(&fs, "cat (cat manifest) | head -n 2").await,
        vec!["fn main() {}", "pub mod a;"]
    );
}

#[tokio::test]
async fn nested_substitution() {
    let fs = project();
    assert_eq!(
        output(&fs, "cat (ls (pwd)/src/main.rs)").await,
        vec!["fn main() {}"]
    );
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn copy_globbed_sources_into_directory() {
    let fs = project();
    assert_eq!(complete(&fs, "cp src/*.rs build").await, 2);
    assert_eq!(
        fs.contents("/project/build/main.rs").as_deref(),
        Some("fn main() {}\n")
    );
    assert!(fs.contents("/project/src/lib.rs").is_some());
}

#[tokio::test]
async fn piped_paths_are_removed() {
    let fs = project();
    assert_eq!(complete(&fs, "ls src/*.rs | rm").await, 2);
    assert!(fs.contents("/project/src/main.rs").is_none());
    assert!(fs.is_dir("/project/src"));
}

#[tokio::test]
async fn move_then_list() {
    let fs = project();
    complete(&fs, "move README.md build/README.md").await;
    assert_eq!(output(&fs, "ls build").await, vec!["/project/build/README.md"]);
}

#[tokio::test]
async fn make_parents_then_touch() {
    let fs = project();
    complete(&fs, "mkdir -p out/deep/er").await;
    complete(&fs, "touch out/deep/er/done").await;
    assert_eq!(fs.contents("/project/out/deep/er/done").as_deref(), Some(""));
}

#[tokio::test]
async fn output_redirect_writes_file() {
    let fs = project();
    complete(&fs, "cat -n README.md > numbered").await;
    assert_eq!(
        fs.contents("/project/numbered").as_deref(),
        Some("     1\t# project\n     2\tsecond\n")
    );
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn aliases_work_in_pipelines_and_substitutions() {
    let fs = project();
    let compiler = Compiler::new()
        .with_alias("show", "cat")
        .unwrap()
        .with_alias("first", "head")
        .unwrap();
    let shell = shell(&fs).compiler(compiler);
    assert_eq!(
        shell.output("show (show manifest) | first -n 1").await.unwrap(),
        vec!["fn main() {}"]
    );
}
