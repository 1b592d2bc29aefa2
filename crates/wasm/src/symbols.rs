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

//! Symbol table construction: the first pipeline stage.
//!
//! All top-level function signatures are registered before any body is
//! type-checked or compiled, so forward references and recursion
//! resolve by plain name lookup.

use std::collections::HashMap;

use ast::{Module, Param};

use crate::error::{CompileError, ErrorKind};
use crate::types::Type;

/// The resolved signature of a function.
#[derive(Debug, Clone)]
pub struct FuncSig {
    pub param_types: Vec<Type>,
    pub return_type: Type,
}

/// Function name → signature, built once per compilation unit and
/// read-only afterwards.
#[derive(Debug)]
pub struct SymbolTable {
    sigs: HashMap<String, FuncSig>,
}

impl SymbolTable {
    /// Scan all top-level declarations and produce the table. Pure
    /// function of the declaration list; fails on the first duplicate
    /// name or unsupported annotation.
    pub fn build(module: &Module) -> Result<SymbolTable, CompileError> {
        let mut table = SymbolTable {
            sigs: HashMap::with_capacity(module.functions.len()),
        };

        for func in &module.functions {
            let decl = &func.node;
            if table.sigs.contains_key(&decl.name) {
                return Err(CompileError::new(
                    ErrorKind::DuplicateDeclaration {
                        name: decl.name.clone(),
                    },
                    func.span,
                ));
            }

            let param_types = decl
                .params
                .iter()
                .map(resolve_param)
                .collect::<Result<Vec<Type>, CompileError>>()?;

            let return_type = Type::from_type_hint(&decl.return_type.node).ok_or_else(|| {
                CompileError::new(
                    ErrorKind::UnknownType {
                        annotation: decl.return_type.node.to_string(),
                    },
                    decl.return_type.span,
                )
            })?;

            table.sigs.insert(
                decl.name.clone(),
                FuncSig {
                    param_types,
                    return_type,
                },
            );
        }

        tracing::debug!(functions = table.sigs.len(), "symbol table built");
        Ok(table)
    }

    pub fn lookup(&self, name: &str) -> Option<&FuncSig> {
        self.sigs.get(name)
    }
}

fn resolve_param(param: &Param) -> Result<Type, CompileError> {
    Type::from_type_hint(&param.type_hint.node).ok_or_else(|| {
        CompileError::new(
            ErrorKind::UnknownType {
                annotation: param.type_hint.node.to_string(),
            },
            param.type_hint.span,
        )
    })
}
