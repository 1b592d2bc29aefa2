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

//! Static type checker: the second pipeline stage.
//!
//! Walks each function body against the symbol table and a per-function
//! variable scope, and produces a [`TypedModule`] in which every
//! expression carries its resolved type. The first violation aborts the
//! traversal — there is no error collection and no partial output.

pub mod typed_ast;

use std::collections::HashMap;

use ast::expr::Expr;
use ast::op::{BinOp, UnaryOp};
use ast::stmt::Stmt;
use ast::{FuncDecl, Module, Span, Spanned};

use crate::error::{CompileError, ErrorKind};
use crate::symbols::SymbolTable;
use crate::types::Type;

use typed_ast::{TypedExpr, TypedExprKind, TypedFunction, TypedModule, TypedStmt};

/// One flat variable frame per function body. The language has no
/// nested block scoping and no closures, so a name assigned anywhere in
/// the body is visible everywhere after its first assignment.
#[derive(Debug, Default)]
struct Scope {
    variables: HashMap<String, Type>,
}

impl Scope {
    fn declare(&mut self, name: &str, ty: Type) {
        self.variables.insert(name.to_string(), ty);
    }

    fn lookup(&self, name: &str) -> Option<Type> {
        self.variables.get(name).copied()
    }
}

pub struct TypeChecker<'a> {
    symbols: &'a SymbolTable,
    scope: Scope,
    /// Declared return type of the function currently being checked.
    current_return_type: Type,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self {
            symbols,
            scope: Scope::default(),
            current_return_type: Type::Int,
        }
    }

    /// Check every function body against the (already built) symbol
    /// table. Returns the fully annotated tree, or the first error.
    pub fn check_module(mut self, module: &Module) -> Result<TypedModule, CompileError> {
        let mut functions = Vec::with_capacity(module.functions.len());
        for func in &module.functions {
            functions.push(self.check_function(func)?);
        }
        Ok(TypedModule { functions })
    }

    fn check_function(
        &mut self,
        func: &Spanned<FuncDecl>,
    ) -> Result<TypedFunction, CompileError> {
        let decl = &func.node;
        // The builder already validated every annotation.
        let sig = self
            .symbols
            .lookup(&decl.name)
            .expect("function missing from symbol table");
        let params: Vec<(String, Type)> = decl
            .params
            .iter()
            .zip(sig.param_types.iter())
            .map(|(param, &ty)| (param.name.clone(), ty))
            .collect();

        self.scope = Scope::default();
        for (name, ty) in &params {
            self.scope.declare(name, *ty);
        }
        self.current_return_type = sig.return_type;
        let return_type = sig.return_type;

        let body = self.check_block(&decl.body)?;

        if !always_returns(&body) {
            return Err(CompileError::new(
                ErrorKind::MissingReturn {
                    name: decl.name.clone(),
                },
                func.span,
            ));
        }

        tracing::debug!(function = %decl.name, "function type-checked");
        Ok(TypedFunction {
            name: decl.name.clone(),
            params,
            return_type,
            body,
            span: func.span,
        })
    }

    fn check_block(&mut self, stmts: &[Spanned<Stmt>]) -> Result<Vec<TypedStmt>, CompileError> {
        stmts.iter().map(|stmt| self.check_stmt(stmt)).collect()
    }

    fn check_stmt(&mut self, stmt: &Spanned<Stmt>) -> Result<TypedStmt, CompileError> {
        match &stmt.node {
            Stmt::Expr(expr) => Ok(TypedStmt::Expr(self.infer_expr(expr)?)),

            Stmt::Assign { name, value } => {
                let value = self.infer_expr(value)?;
                match self.scope.lookup(name) {
                    // First assignment establishes the type.
                    None => self.scope.declare(name, value.ty),
                    Some(existing) if existing == value.ty => {}
                    Some(existing) => {
                        return Err(CompileError::new(
                            ErrorKind::TypeMismatch {
                                expected: existing,
                                found: value.ty,
                            },
                            value.span,
                        ));
                    }
                }
                Ok(TypedStmt::Assign {
                    name: name.clone(),
                    value,
                })
            }

            Stmt::Return(expr) => {
                let value = self.infer_expr(expr)?;
                if value.ty != self.current_return_type {
                    return Err(CompileError::new(
                        ErrorKind::TypeMismatch {
                            expected: self.current_return_type,
                            found: value.ty,
                        },
                        expr.span,
                    ));
                }
                Ok(TypedStmt::Return(value))
            }

            Stmt::If {
                test,
                body,
                else_body,
            } => {
                let test = self.expect_expr(test, Type::Bool)?;
                let body = self.check_block(body)?;
                let else_body = match else_body {
                    Some(stmts) => Some(self.check_block(stmts)?),
                    None => None,
                };
                Ok(TypedStmt::If {
                    test,
                    body,
                    else_body,
                })
            }
        }
    }

    /// Infer an expression and require it to have `expected` type.
    fn expect_expr(
        &mut self,
        expr: &Spanned<Expr>,
        expected: Type,
    ) -> Result<TypedExpr, CompileError> {
        let typed = self.infer_expr(expr)?;
        if typed.ty != expected {
            return Err(CompileError::new(
                ErrorKind::TypeMismatch {
                    expected,
                    found: typed.ty,
                },
                typed.span,
            ));
        }
        Ok(typed)
    }

    fn infer_expr(&mut self, expr: &Spanned<Expr>) -> Result<TypedExpr, CompileError> {
        let span = expr.span;
        match &expr.node {
            Expr::Int(value) => Ok(typed(TypedExprKind::Int(*value), Type::Int, span)),
            Expr::Bool(value) => Ok(typed(TypedExprKind::Bool(*value), Type::Bool, span)),

            Expr::Name(name) => match self.scope.lookup(name) {
                Some(ty) => Ok(typed(TypedExprKind::Name(name.clone()), ty, span)),
                None => Err(CompileError::new(
                    ErrorKind::UndefinedSymbol { name: name.clone() },
                    span,
                )),
            },

            Expr::UnaryOp { op, operand } => {
                let operand_type = match op {
                    UnaryOp::Neg => Type::Int,
                    UnaryOp::Not => Type::Bool,
                };
                let operand = self.expect_expr(operand, operand_type)?;
                Ok(typed(
                    TypedExprKind::Unary {
                        op: *op,
                        operand: Box::new(operand),
                    },
                    operand_type,
                    span,
                ))
            }

            Expr::BinOp { left, op, right } => self.infer_binop(left, *op, right, span),

            Expr::Call { callee, args } => self.infer_call(callee, args, span),
        }
    }

    fn infer_binop(
        &mut self,
        left: &Spanned<Expr>,
        op: BinOp,
        right: &Spanned<Expr>,
        span: Span,
    ) -> Result<TypedExpr, CompileError> {
        let (left, right, result_type) = if op.is_arithmetic() {
            // `+ - * /`: integers in, integer out.
            let left = self.expect_expr(left, Type::Int)?;
            let right = self.expect_expr(right, Type::Int)?;
            (left, right, Type::Int)
        } else if op.is_logical() {
            // `and` / `or`: booleans in, boolean out.
            let left = self.expect_expr(left, Type::Bool)?;
            let right = self.expect_expr(right, Type::Bool)?;
            (left, right, Type::Bool)
        } else {
            // Comparisons: operands must agree, result is boolean.
            debug_assert!(op.is_comparison());
            let left = self.infer_expr(left)?;
            let right = self.expect_expr(right, left.ty)?;
            (left, right, Type::Bool)
        };

        Ok(typed(
            TypedExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            result_type,
            span,
        ))
    }

    fn infer_call(
        &mut self,
        callee: &str,
        args: &[Spanned<Expr>],
        span: Span,
    ) -> Result<TypedExpr, CompileError> {
        let sig = match self.symbols.lookup(callee) {
            Some(sig) => sig.clone(),
            None => {
                return Err(CompileError::new(
                    ErrorKind::UndefinedSymbol {
                        name: callee.to_string(),
                    },
                    span,
                ));
            }
        };

        if args.len() != sig.param_types.len() {
            return Err(CompileError::new(
                ErrorKind::ArgumentMismatch {
                    name: callee.to_string(),
                    expected: format!("{} arguments", sig.param_types.len()),
                    received: format!("{}", args.len()),
                },
                span,
            ));
        }

        let mut typed_args = Vec::with_capacity(args.len());
        for (position, (arg, &expected)) in args.iter().zip(sig.param_types.iter()).enumerate() {
            let arg = self.infer_expr(arg)?;
            if arg.ty != expected {
                return Err(CompileError::new(
                    ErrorKind::ArgumentMismatch {
                        name: callee.to_string(),
                        expected: format!("{} at position {}", expected, position),
                        received: arg.ty.to_string(),
                    },
                    arg.span,
                ));
            }
            typed_args.push(arg);
        }

        Ok(typed(
            TypedExprKind::Call {
                callee: callee.to_string(),
                args: typed_args,
            },
            sig.return_type,
            span,
        ))
    }
}

fn typed(kind: TypedExprKind, ty: Type, span: Span) -> TypedExpr {
    TypedExpr { kind, ty, span }
}

/// Structural reachability: does every control path through `stmts` end
/// in a `return`? A statement list is satisfied as soon as one of its
/// statements always returns (anything after it is unreachable); an
/// `if` only always returns when both branches do.
fn always_returns(stmts: &[TypedStmt]) -> bool {
    stmts.iter().any(|stmt| match stmt {
        TypedStmt::Return(_) => true,
        TypedStmt::If {
            body,
            else_body: Some(else_body),
            ..
        } => always_returns(body) && always_returns(else_body),
        _ => false,
    })
}
