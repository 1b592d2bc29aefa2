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

//! Operator lowering.

use ast::op::{BinOp, UnaryOp};

use crate::instr::{BlockType, Instruction};
use crate::type_checker::typed_ast::TypedExpr;

use super::Compiler;

impl Compiler {
    pub(super) fn compile_unary_op(&mut self, op: UnaryOp, operand: &TypedExpr) {
        match op {
            UnaryOp::Neg => {
                // There is no i32.neg; multiply by -1 instead.
                self.compile_expr(operand);
                self.ctx().emit(Instruction::I32Const(-1));
                self.ctx().emit(Instruction::I32Mul);
            }
            UnaryOp::Not => {
                // Operands are canonical 0/1, so eqz is exact negation.
                self.compile_expr(operand);
                self.ctx().emit(Instruction::I32Eqz);
            }
        }
    }

    pub(super) fn compile_bin_op(&mut self, left: &TypedExpr, op: BinOp, right: &TypedExpr) {
        if op.is_logical() {
            self.compile_logical(left, op, right);
            return;
        }

        self.compile_expr(left);
        self.compile_expr(right);
        let instr = match op {
            BinOp::Add => Instruction::I32Add,
            BinOp::Sub => Instruction::I32Sub,
            BinOp::Mul => Instruction::I32Mul,
            BinOp::Div => Instruction::I32DivS,
            BinOp::Eq => Instruction::I32Eq,
            BinOp::NotEq => Instruction::I32Ne,
            BinOp::Lt => Instruction::I32LtS,
            BinOp::LtE => Instruction::I32LeS,
            BinOp::Gt => Instruction::I32GtS,
            BinOp::GtE => Instruction::I32GeS,
            BinOp::And | BinOp::Or => unreachable!("logical ops handled above"),
        };
        self.ctx().emit(instr);
    }

    /// `and` / `or` short-circuit: the right operand sits inside an
    /// `if (result i32)` arm and only runs when the left operand does
    /// not already decide the result.
    ///
    /// `a and b` → `a; if (result i32) { b } else { 0 }`
    /// `a or b`  → `a; if (result i32) { 1 } else { b }`
    fn compile_logical(&mut self, left: &TypedExpr, op: BinOp, right: &TypedExpr) {
        self.compile_expr(left);
        self.ctx().emit(Instruction::If(BlockType::I32));
        match op {
            BinOp::And => {
                self.compile_expr(right);
                self.ctx().emit(Instruction::Else);
                self.ctx().emit(Instruction::I32Const(0));
            }
            BinOp::Or => {
                self.ctx().emit(Instruction::I32Const(1));
                self.ctx().emit(Instruction::Else);
                self.compile_expr(right);
            }
            _ => unreachable!("not a logical operator"),
        }
        self.ctx().emit(Instruction::End);
    }
}
