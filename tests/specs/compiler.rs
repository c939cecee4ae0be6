//! Command resolution and argument validation specs.

use fsh_shell::{CompileError, Compiler, ExpandedWord, Parser, Step};
use yare::parameterized;

fn compile(source: &str) -> Result<fsh_shell::PipelineIR, CompileError> {
    Compiler::new().compile(&Parser::parse(source).unwrap())
}

#[parameterized(
    one = { "pwd", &["pwd"] },
    two = { "ls /tmp | cat", &["ls", "cat"] },
    four = { "cat /log.txt | cat -n | head | tail -n 2", &["cat", "cat", "head", "tail"] },
    descriptive = { "list-directory | concatenate-and-print | remove", &["ls", "cat", "rm"] },
)]
fn one_step_per_command(source: &str, expected: &[&str]) {
    let ir = compile(source).unwrap();
    let commands: Vec<_> = ir.steps.iter().map(Step::command).collect();
    assert_eq!(commands, expected.to_vec());
}

#[test]
fn remove_arguments() {
    let ir = compile("remove -r /tmp/a /tmp/b").unwrap();
    assert_eq!(
        ir.steps,
        vec![Step::Remove {
            paths: vec![
                ExpandedWord::literal("/tmp/a"),
                ExpandedWord::literal("/tmp/b"),
            ],
            recursive: true,
            force: false,
        }]
    );
}

#[test]
fn remove_without_operands() {
    assert!(matches!(
        compile("remove"),
        Err(CompileError::MissingOperand { command: "rm", .. })
    ));
}
