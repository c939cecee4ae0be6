// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod errors;
mod pipelines;
mod words;

pub(super) mod helpers {
    use crate::compiler::{CompileError, Compiler};
    use crate::ir::PipelineIR;
    use crate::parser::Parser;

    pub fn compile(source: &str) -> Result<PipelineIR, CompileError> {
        let program = match Parser::parse(source) {
            Ok(program) => program,
            Err(e) => panic!("parse of {source:?} failed: {e}"),
        };
        Compiler::new().compile(&program)
    }

    pub fn compiled(source: &str) -> PipelineIR {
        match compile(source) {
            Ok(ir) => ir,
            Err(e) => panic!("compile of {source:?} failed: {e}"),
        }
    }
}
