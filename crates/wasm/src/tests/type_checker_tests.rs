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

use ast::expr::Expr;
use ast::op::*;
use ast::stmt::Stmt;
use ast::types::TypeHint;
use ast::{FuncDecl, Module, Param, Span, Spanned};

use crate::error::{CompileError, ErrorKind};
use crate::symbols::SymbolTable;
use crate::type_checker::typed_ast::{TypedModule, TypedStmt};
use crate::type_checker::TypeChecker;
use crate::types::Type;

// ─── Helper builders ──────────────────────────────────────────────────────────

fn sp<T>(node: T) -> Spanned<T> {
    Spanned::new(node, Span::new(1, 1))
}

fn at<T>(node: T, line: u32, column: u32) -> Spanned<T> {
    Spanned::new(node, Span::new(line, column))
}

fn int_lit(n: i32) -> Spanned<Expr> {
    sp(Expr::Int(n))
}

fn bool_lit(b: bool) -> Spanned<Expr> {
    sp(Expr::Bool(b))
}

fn name(n: &str) -> Spanned<Expr> {
    sp(Expr::Name(n.to_string()))
}

fn unary(op: UnaryOp, operand: Spanned<Expr>) -> Spanned<Expr> {
    sp(Expr::UnaryOp {
        op,
        operand: Box::new(operand),
    })
}

fn binop(left: Spanned<Expr>, op: BinOp, right: Spanned<Expr>) -> Spanned<Expr> {
    sp(Expr::BinOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    })
}

fn call(callee: &str, args: Vec<Spanned<Expr>>) -> Spanned<Expr> {
    sp(Expr::Call {
        callee: callee.to_string(),
        args,
    })
}

fn assign(target: &str, value: Spanned<Expr>) -> Spanned<Stmt> {
    sp(Stmt::Assign {
        name: target.to_string(),
        value,
    })
}

fn ret(expr: Spanned<Expr>) -> Spanned<Stmt> {
    sp(Stmt::Return(expr))
}

fn if_stmt(
    test: Spanned<Expr>,
    body: Vec<Spanned<Stmt>>,
    else_body: Option<Vec<Spanned<Stmt>>>,
) -> Spanned<Stmt> {
    sp(Stmt::If {
        test,
        body,
        else_body,
    })
}

fn func(
    fname: &str,
    params: Vec<(&str, TypeHint)>,
    return_hint: TypeHint,
    body: Vec<Spanned<Stmt>>,
) -> Spanned<FuncDecl> {
    let params = params
        .into_iter()
        .map(|(name, hint)| Param {
            name: name.to_string(),
            type_hint: sp(hint),
        })
        .collect();
    sp(FuncDecl {
        name: fname.to_string(),
        params,
        return_type: sp(return_hint),
        body,
    })
}

fn module(functions: Vec<Spanned<FuncDecl>>) -> Module {
    Module { functions }
}

fn check(m: &Module) -> Result<TypedModule, CompileError> {
    let symbols = SymbolTable::build(m)?;
    TypeChecker::new(&symbols).check_module(m)
}

fn check_err(m: &Module) -> CompileError {
    check(m).expect_err("module should be rejected")
}

// ─── Success cases ────────────────────────────────────────────────────────────

#[test]
fn test_add_function_checks() {
    let m = module(vec![func(
        "add",
        vec![("a", TypeHint::Int), ("b", TypeHint::Int)],
        TypeHint::Int,
        vec![ret(binop(name("a"), BinOp::Add, name("b")))],
    )]);
    assert!(check(&m).is_ok());
}

#[test]
fn test_comparison_yields_bool() {
    let m = module(vec![func(
        "is_neg",
        vec![("x", TypeHint::Int)],
        TypeHint::Bool,
        vec![ret(binop(name("x"), BinOp::Lt, int_lit(0)))],
    )]);
    let typed = check(&m).expect("module should check");
    match &typed.functions[0].body[0] {
        TypedStmt::Return(expr) => assert_eq!(expr.ty, Type::Bool),
        other => panic!("expected return statement, got {:?}", other),
    }
}

#[test]
fn test_local_type_established_by_first_assignment() {
    let m = module(vec![func(
        "f",
        vec![],
        TypeHint::Int,
        vec![
            assign("flag", bool_lit(true)),
            assign("n", int_lit(7)),
            ret(name("n")),
        ],
    )]);
    let typed = check(&m).expect("module should check");
    match &typed.functions[0].body[0] {
        TypedStmt::Assign { value, .. } => assert_eq!(value.ty, Type::Bool),
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_forward_reference_and_recursion() {
    // `even` calls `odd`, declared after it; `odd` calls back.
    let m = module(vec![
        func(
            "even",
            vec![("n", TypeHint::Int)],
            TypeHint::Bool,
            vec![ret(call("odd", vec![binop(name("n"), BinOp::Sub, int_lit(1))]))],
        ),
        func(
            "odd",
            vec![("n", TypeHint::Int)],
            TypeHint::Bool,
            vec![ret(call("even", vec![binop(name("n"), BinOp::Sub, int_lit(1))]))],
        ),
    ]);
    assert!(check(&m).is_ok());
}

// ─── Declarations and annotations ─────────────────────────────────────────────

#[test]
fn test_duplicate_function_rejected() {
    let first = func("f", vec![], TypeHint::Int, vec![ret(int_lit(1))]);
    let mut second = func("f", vec![], TypeHint::Int, vec![ret(int_lit(2))]);
    second.span = Span::new(9, 1);
    let err = {
        let m = module(vec![first, second]);
        check_err(&m)
    };
    assert_eq!(
        err.kind,
        ErrorKind::DuplicateDeclaration {
            name: "f".to_string()
        }
    );
    // The error points at the second declaration.
    assert_eq!(err.span, Some(Span::new(9, 1)));
}

#[test]
fn test_unknown_param_annotation_rejected() {
    let m = module(vec![func(
        "f",
        vec![("x", TypeHint::Custom("f64".to_string()))],
        TypeHint::Int,
        vec![ret(int_lit(0))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::UnknownType {
            annotation: "f64".to_string()
        }
    );
}

#[test]
fn test_unknown_return_annotation_rejected() {
    let m = module(vec![func(
        "f",
        vec![],
        TypeHint::Custom("str".to_string()),
        vec![ret(int_lit(0))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::UnknownType {
            annotation: "str".to_string()
        }
    );
}

// ─── Expression typing ────────────────────────────────────────────────────────

#[test]
fn test_bool_and_int_do_not_mix() {
    // `x and 1`: both operands of a logical operator must be bool, even
    // though both types share the same runtime representation.
    let m = module(vec![func(
        "f",
        vec![("x", TypeHint::Bool)],
        TypeHint::Bool,
        vec![ret(binop(name("x"), BinOp::And, int_lit(1)))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Bool,
            found: Type::Int,
        }
    );
}

#[test]
fn test_arithmetic_rejects_bool_operand() {
    let m = module(vec![func(
        "f",
        vec![("x", TypeHint::Bool)],
        TypeHint::Int,
        vec![ret(binop(int_lit(1), BinOp::Add, name("x")))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Int,
            found: Type::Bool,
        }
    );
}

#[test]
fn test_comparison_operands_must_agree() {
    let m = module(vec![func(
        "f",
        vec![("x", TypeHint::Int), ("y", TypeHint::Bool)],
        TypeHint::Bool,
        vec![ret(binop(name("x"), BinOp::Eq, name("y")))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Int,
            found: Type::Bool,
        }
    );
}

#[test]
fn test_negation_requires_int() {
    let m = module(vec![func(
        "f",
        vec![("x", TypeHint::Bool)],
        TypeHint::Int,
        vec![ret(unary(UnaryOp::Neg, name("x")))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Int,
            found: Type::Bool,
        }
    );
}

#[test]
fn test_not_requires_bool() {
    let m = module(vec![func(
        "f",
        vec![("x", TypeHint::Int)],
        TypeHint::Bool,
        vec![ret(unary(UnaryOp::Not, name("x")))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Bool,
            found: Type::Int,
        }
    );
}

#[test]
fn test_undefined_variable_rejected() {
    let m = module(vec![func(
        "f",
        vec![],
        TypeHint::Int,
        vec![ret(name("y"))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::UndefinedSymbol {
            name: "y".to_string()
        }
    );
}

// ─── Calls ────────────────────────────────────────────────────────────────────

#[test]
fn test_undefined_callee_rejected_at_call_site() {
    let m = module(vec![func(
        "f",
        vec![],
        TypeHint::Int,
        vec![ret(at(
            Expr::Call {
                callee: "missing".to_string(),
                args: vec![],
            },
            3,
            12,
        ))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::UndefinedSymbol {
            name: "missing".to_string()
        }
    );
    assert_eq!(err.span, Some(Span::new(3, 12)));
}

#[test]
fn test_call_arity_mismatch() {
    let m = module(vec![
        func(
            "g",
            vec![("a", TypeHint::Int), ("b", TypeHint::Int)],
            TypeHint::Int,
            vec![ret(name("a"))],
        ),
        func(
            "f",
            vec![],
            TypeHint::Int,
            vec![ret(call("g", vec![int_lit(1)]))],
        ),
    ]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::ArgumentMismatch {
            name: "g".to_string(),
            expected: "2 arguments".to_string(),
            received: "1".to_string(),
        }
    );
}

#[test]
fn test_call_argument_type_mismatch() {
    let m = module(vec![
        func(
            "g",
            vec![("a", TypeHint::Int), ("flag", TypeHint::Bool)],
            TypeHint::Int,
            vec![ret(name("a"))],
        ),
        func(
            "f",
            vec![],
            TypeHint::Int,
            vec![ret(call("g", vec![int_lit(1), int_lit(2)]))],
        ),
    ]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::ArgumentMismatch {
            name: "g".to_string(),
            expected: "bool at position 1".to_string(),
            received: "i32".to_string(),
        }
    );
}

// ─── Statements ───────────────────────────────────────────────────────────────

#[test]
fn test_if_condition_must_be_bool() {
    let m = module(vec![func(
        "f",
        vec![("n", TypeHint::Int)],
        TypeHint::Int,
        vec![
            if_stmt(name("n"), vec![ret(int_lit(1))], None),
            ret(int_lit(0)),
        ],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Bool,
            found: Type::Int,
        }
    );
}

#[test]
fn test_return_type_mismatch() {
    let m = module(vec![func(
        "f",
        vec![],
        TypeHint::Bool,
        vec![ret(int_lit(1))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Bool,
            found: Type::Int,
        }
    );
}

#[test]
fn test_assignment_cannot_change_type() {
    let m = module(vec![func(
        "f",
        vec![],
        TypeHint::Int,
        vec![
            assign("x", int_lit(1)),
            assign("x", bool_lit(true)),
            ret(int_lit(0)),
        ],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Int,
            found: Type::Bool,
        }
    );
}

#[test]
fn test_parameter_cannot_be_reassigned_to_other_type() {
    let m = module(vec![func(
        "f",
        vec![("x", TypeHint::Int)],
        TypeHint::Int,
        vec![assign("x", bool_lit(false)), ret(name("x"))],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Int,
            found: Type::Bool,
        }
    );
}

// ─── Return-path analysis ─────────────────────────────────────────────────────

#[test]
fn test_if_without_else_is_not_a_return_path() {
    let m = module(vec![func(
        "f",
        vec![("b", TypeHint::Bool)],
        TypeHint::Int,
        vec![if_stmt(name("b"), vec![ret(int_lit(1))], None)],
    )]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::MissingReturn {
            name: "f".to_string()
        }
    );
}

#[test]
fn test_if_with_both_branches_returning_suffices() {
    let m = module(vec![func(
        "f",
        vec![("b", TypeHint::Bool)],
        TypeHint::Int,
        vec![if_stmt(
            name("b"),
            vec![ret(int_lit(1))],
            Some(vec![ret(int_lit(0))]),
        )],
    )]);
    assert!(check(&m).is_ok());
}

#[test]
fn test_return_after_partial_if_suffices() {
    let m = module(vec![func(
        "f",
        vec![("b", TypeHint::Bool)],
        TypeHint::Int,
        vec![
            if_stmt(name("b"), vec![ret(int_lit(1))], None),
            ret(int_lit(0)),
        ],
    )]);
    assert!(check(&m).is_ok());
}

#[test]
fn test_empty_body_has_no_return_path() {
    let m = module(vec![func("f", vec![], TypeHint::Int, vec![])]);
    let err = check_err(&m);
    assert_eq!(
        err.kind,
        ErrorKind::MissingReturn {
            name: "f".to_string()
        }
    );
}
