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

//! Code generation: the third pipeline stage.
//!
//! Translates a checked [`TypedModule`] into per-function instruction
//! sequences. The input is fully annotated, so generation is total — no
//! code path here produces a user-facing error. Expression compilation
//! is a post-order walk that leaves exactly one `i32` on the operand
//! stack per expression.

mod control_flow;
mod op;

use crate::functions::FunctionContext;
use crate::instr::Instruction;
use crate::type_checker::typed_ast::{
    TypedExpr, TypedExprKind, TypedFunction, TypedModule, TypedStmt,
};
use crate::types::Type;

/// One compiled function, ready for the emitter.
#[derive(Debug, Clone)]
pub struct CompiledFunction {
    pub name: String,
    pub param_types: Vec<Type>,
    pub return_type: Type,
    /// Locals beyond the parameters, all `i32`.
    pub local_count: u32,
    pub instructions: Vec<Instruction>,
}

#[derive(Default)]
pub struct Compiler {
    current_context: Option<FunctionContext>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every function, in module order.
    pub fn compile_module(mut self, module: &TypedModule) -> Vec<CompiledFunction> {
        module
            .functions
            .iter()
            .map(|func| self.compile_function(func))
            .collect()
    }

    fn compile_function(&mut self, func: &TypedFunction) -> CompiledFunction {
        let param_names: Vec<String> =
            func.params.iter().map(|(name, _)| name.clone()).collect();
        let param_types: Vec<Type> = func.params.iter().map(|(_, ty)| *ty).collect();

        let mut ctx = FunctionContext::new(&param_names);
        // Register every local up front, in first-assignment program
        // order, so slot numbering does not depend on which branch gets
        // compiled first.
        collect_locals(&func.body, &mut ctx);
        self.current_context = Some(ctx);

        for stmt in &func.body {
            self.compile_stmt(stmt);
        }

        let ctx = self
            .current_context
            .take()
            .expect("function context dropped mid-function");
        let local_count = ctx.extra_local_count();
        let instructions = ctx.into_instructions();

        tracing::debug!(
            function = %func.name,
            instructions = instructions.len(),
            locals = local_count,
            "function compiled"
        );
        CompiledFunction {
            name: func.name.clone(),
            param_types,
            return_type: func.return_type,
            local_count,
            instructions,
        }
    }

    fn ctx(&mut self) -> &mut FunctionContext {
        self.current_context
            .as_mut()
            .expect("no active function context")
    }

    fn compile_stmt(&mut self, stmt: &TypedStmt) {
        match stmt {
            TypedStmt::Expr(expr) => {
                self.compile_expr(expr);
                // The value is unused; keep the stack balanced.
                self.ctx().emit(Instruction::Drop);
            }

            TypedStmt::Assign { name, value } => {
                self.compile_expr(value);
                let slot = self.ctx().slot(name);
                self.ctx().emit(Instruction::LocalSet(slot));
            }

            TypedStmt::Return(expr) => {
                self.compile_expr(expr);
                self.ctx().emit(Instruction::Return);
            }

            TypedStmt::If {
                test,
                body,
                else_body,
            } => self.compile_if(test, body, else_body.as_deref()),
        }
    }

    fn compile_expr(&mut self, expr: &TypedExpr) {
        match &expr.kind {
            TypedExprKind::Int(value) => self.ctx().emit(Instruction::I32Const(*value)),
            TypedExprKind::Bool(value) => {
                self.ctx().emit(Instruction::I32Const(i32::from(*value)));
            }

            TypedExprKind::Name(name) => {
                let slot = self.ctx().slot(name);
                self.ctx().emit(Instruction::LocalGet(slot));
            }

            TypedExprKind::Unary { op, operand } => self.compile_unary_op(*op, operand),

            TypedExprKind::Binary { left, op, right } => self.compile_bin_op(left, *op, right),

            TypedExprKind::Call { callee, args } => {
                // Arguments are pushed left to right, matching the
                // callee's parameter slots.
                for arg in args {
                    self.compile_expr(arg);
                }
                self.ctx().emit(Instruction::Call(callee.clone()));
            }
        }
    }
}

/// Pre-pass that assigns a slot to every assigned name, walking the body
/// in program order and descending into both arms of each `if`.
fn collect_locals(stmts: &[TypedStmt], ctx: &mut FunctionContext) {
    for stmt in stmts {
        match stmt {
            TypedStmt::Assign { name, .. } => {
                ctx.declare_local(name);
            }
            TypedStmt::If {
                body, else_body, ..
            } => {
                collect_locals(body, ctx);
                if let Some(else_body) = else_body {
                    collect_locals(else_body, ctx);
                }
            }
            TypedStmt::Expr(_) | TypedStmt::Return(_) => {}
        }
    }
}
