// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exec::ExecError;
use crate::parse_error::ParseError;
use crate::compiler::CompileError;
use fsh_fs::MemoryFs;

fn shell(fs: &MemoryFs) -> Shell {
    Shell::new(Arc::new(fs.clone()))
}

#[tokio::test]
async fn output_of_a_pipeline() {
    let fs = MemoryFs::new().with_file("/log.txt", "a\nb\nc\n");
    let out = shell(&fs).output("cat /log.txt | tail -n 2").await.unwrap();
    assert_eq!(out, vec!["b", "c"]);
}

#[tokio::test]
async fn errors_keep_their_layer() {
    let fs = MemoryFs::new();
    let shell = shell(&fs);
    assert!(matches!(
        shell.output("cat 'open").await,
        Err(Error::Parse(ParseError::UnterminatedQuote { .. }))
    ));
    assert!(matches!(
        shell.output("frobnicate").await,
        Err(Error::Compile(CompileError::UnknownCommand { .. }))
    ));
    assert!(matches!(
        shell.output("cat /missing").await,
        Err(Error::Exec(ExecError::Fs(_)))
    ));
}

#[tokio::test]
async fn custom_compiler_applies_to_substitutions() {
    let fs = MemoryFs::new()
        .with_file("/a.txt", "hello\n")
        .with_file("/list", "/a.txt\n");
    let compiler = Compiler::new().with_alias("show", "cat").unwrap();
    let shell = shell(&fs).compiler(compiler);
    assert_eq!(shell.output("show (show /list)").await.unwrap(), vec!["hello"]);
}

#[tokio::test]
async fn capture_limit_is_forwarded() {
    let fs = MemoryFs::new().with_file("/big", "0123456789\n");
    let shell = shell(&fs).capture_limit(4);
    assert_eq!(
        shell.output("ls (cat /big)").await,
        Err(Error::Exec(ExecError::CaptureLimitExceeded { limit: 4 }))
    );
}

#[test]
fn compile_only() {
    let shell = shell(&MemoryFs::new());
    let ir = shell.compile("show-leading-lines -n 5 /log").unwrap();
    assert_eq!(ir.steps.len(), 1);
    assert_eq!(ir.steps[0].command(), "head");
}

#[test]
fn parse_error_renders_with_context() {
    let shell = shell(&MemoryFs::new());
    let source = "cat (pwd";
    let err = shell.compile(source).unwrap_err();
    let rendered = err.render(source);
    assert!(rendered.contains("cat (pwd"), "{rendered}");
}
