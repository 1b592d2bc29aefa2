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

/// A type annotation as written in the source. The parser passes
/// annotations through verbatim; whether they name a supported type is
/// decided during symbol table construction, so unrecognized spellings
/// survive as `Custom` until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeHint {
    /// `i32`
    Int,
    /// `bool`
    Bool,
    /// Anything else the parser accepted syntactically.
    Custom(String),
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHint::Int => write!(f, "i32"),
            TypeHint::Bool => write!(f, "bool"),
            TypeHint::Custom(name) => write!(f, "{}", name),
        }
    }
}
