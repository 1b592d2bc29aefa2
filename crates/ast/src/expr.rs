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

use crate::op::*;
use crate::Spanned;

#[derive(Debug, Clone)]
pub enum Expr {
    /// Integer literal: `42`
    Int(i32),

    /// Boolean literal: `true` / `false`
    Bool(bool),

    /// An identifier/name reference: `foo`
    Name(String),

    /// Unary operation: `!x`, `-x`
    UnaryOp {
        op: UnaryOp,
        operand: Box<Spanned<Expr>>,
    },

    /// Binary operation: `x + y`, `x < y`, `x and y`, etc.
    BinOp {
        left: Box<Spanned<Expr>>,
        op: BinOp,
        right: Box<Spanned<Expr>>,
    },

    /// Direct function call: `f(a, b)`. Callees are names, not values —
    /// the language has no first-class functions.
    Call {
        callee: String,
        args: Vec<Spanned<Expr>>,
    },
}
