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

use ast::types::TypeHint;
use std::fmt;

/// A resolved static type. The language has exactly two: integers and
/// booleans. Both occupy an `i32` slot in the emitted module (booleans
/// as 0/1); the distinction exists only in the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// `i32` → WASM `i32`
    Int,
    /// `bool` → WASM `i32` (0 or 1)
    Bool,
}

impl Type {
    /// Resolve a source annotation to a supported type.
    /// Returns `None` for annotations outside the supported set.
    pub fn from_type_hint(hint: &TypeHint) -> Option<Type> {
        match hint {
            TypeHint::Int => Some(Type::Int),
            TypeHint::Bool => Some(Type::Bool),
            TypeHint::Custom(_) => None,
        }
    }

    /// The value-type keyword this type occupies in the module text.
    pub fn wat_name(self) -> &'static str {
        match self {
            Type::Int | Type::Bool => "i32",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "i32"),
            Type::Bool => write!(f, "bool"),
        }
    }
}
