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

//! The annotated tree the checker hands to the code generator.
//!
//! This is a fresh, immutable structure rather than an annotation pass
//! over the input AST: the generator owns it exclusively, and every
//! expression node carries its resolved type by construction — the
//! generator never needs to ask "was this checked?".

use ast::op::{BinOp, UnaryOp};
use ast::Span;

use crate::types::Type;

#[derive(Debug, Clone)]
pub struct TypedModule {
    pub functions: Vec<TypedFunction>,
}

#[derive(Debug, Clone)]
pub struct TypedFunction {
    pub name: String,
    /// Parameter names and types, in declaration order.
    pub params: Vec<(String, Type)>,
    pub return_type: Type,
    pub body: Vec<TypedStmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypedStmt {
    Expr(TypedExpr),
    Assign { name: String, value: TypedExpr },
    Return(TypedExpr),
    If {
        test: TypedExpr,
        body: Vec<TypedStmt>,
        else_body: Option<Vec<TypedStmt>>,
    },
}

/// An expression with its resolved type.
#[derive(Debug, Clone)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypedExprKind {
    Int(i32),
    Bool(bool),
    Name(String),
    Unary {
        op: UnaryOp,
        operand: Box<TypedExpr>,
    },
    Binary {
        left: Box<TypedExpr>,
        op: BinOp,
        right: Box<TypedExpr>,
    },
    Call {
        callee: String,
        args: Vec<TypedExpr>,
    },
}
