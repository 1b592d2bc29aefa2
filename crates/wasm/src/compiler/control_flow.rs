/*
 * Copyright (c) 2026. Mikhail Kulik.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Structured control flow lowering.

use crate::instr::{BlockType, Instruction};
use crate::type_checker::typed_ast::{TypedExpr, TypedStmt};

use super::Compiler;

impl Compiler {
    /// `if` statements map directly onto the structured `if`/`else`/`end`
    /// block form. Statement bodies leave nothing on the stack, so the
    /// block type is empty.
    pub(super) fn compile_if(
        &mut self,
        test: &TypedExpr,
        body: &[TypedStmt],
        else_body: Option<&[TypedStmt]>,
    ) {
        self.compile_expr(test);
        self.ctx().emit(Instruction::If(BlockType::Empty));
        for stmt in body {
            self.compile_stmt(stmt);
        }
        if let Some(else_body) = else_body {
            self.ctx().emit(Instruction::Else);
            for stmt in else_body {
                self.compile_stmt(stmt);
            }
        }
        self.ctx().emit(Instruction::End);
    }
}
