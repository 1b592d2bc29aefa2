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

use std::fmt;

/// Result arity of a structured block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Empty,
    /// Block leaves one `i32` on the stack.
    I32,
}

/// The instruction vocabulary the code generator emits. This is the
/// textual subset the language needs: constants, local traffic, `i32`
/// arithmetic and comparison, structured control flow, direct calls and
/// returns. Call targets stay symbolic — index resolution is the
/// toolchain's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    I32Const(i32),
    LocalGet(u32),
    LocalSet(u32),
    I32Add,
    I32Sub,
    I32Mul,
    I32DivS,
    I32Eq,
    I32Ne,
    I32LtS,
    I32LeS,
    I32GtS,
    I32GeS,
    I32Eqz,
    If(BlockType),
    Else,
    End,
    Call(String),
    Drop,
    Return,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::I32Const(value) => write!(f, "i32.const {}", value),
            Instruction::LocalGet(slot) => write!(f, "local.get {}", slot),
            Instruction::LocalSet(slot) => write!(f, "local.set {}", slot),
            Instruction::I32Add => write!(f, "i32.add"),
            Instruction::I32Sub => write!(f, "i32.sub"),
            Instruction::I32Mul => write!(f, "i32.mul"),
            Instruction::I32DivS => write!(f, "i32.div_s"),
            Instruction::I32Eq => write!(f, "i32.eq"),
            Instruction::I32Ne => write!(f, "i32.ne"),
            Instruction::I32LtS => write!(f, "i32.lt_s"),
            Instruction::I32LeS => write!(f, "i32.le_s"),
            Instruction::I32GtS => write!(f, "i32.gt_s"),
            Instruction::I32GeS => write!(f, "i32.ge_s"),
            Instruction::I32Eqz => write!(f, "i32.eqz"),
            Instruction::If(BlockType::Empty) => write!(f, "if"),
            Instruction::If(BlockType::I32) => write!(f, "if (result i32)"),
            Instruction::Else => write!(f, "else"),
            Instruction::End => write!(f, "end"),
            Instruction::Call(name) => write!(f, "call ${}", name),
            Instruction::Drop => write!(f, "drop"),
            Instruction::Return => write!(f, "return"),
        }
    }
}
