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

use ast::Span;
use thiserror::Error;

use crate::types::Type;

/// Everything that can terminate a compilation. All kinds are fatal:
/// the pipeline stops at the first one and produces no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("duplicate declaration of function '{name}'")]
    DuplicateDeclaration { name: String },

    #[error("unknown type '{annotation}'")]
    UnknownType { annotation: String },

    #[error("undefined symbol '{name}'")]
    UndefinedSymbol { name: String },

    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch { expected: Type, found: Type },

    #[error("call to '{name}': expected {expected}, received {received}")]
    ArgumentMismatch {
        name: String,
        expected: String,
        received: String,
    },

    #[error("not every path through function '{name}' returns a value")]
    MissingReturn { name: String },

    /// The external toolchain rejected the module text. This is a
    /// lowering defect, not a user-program error; the backend's
    /// diagnostic is passed through unmodified.
    #[error("module text rejected by toolchain: {message}")]
    ToolchainValidation { message: String },
}

/// A terminal compilation error, carrying the offending node's source
/// location when one exists (toolchain failures have none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub span: Option<Span>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            span: Some(span),
        }
    }

    pub fn toolchain(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ToolchainValidation {
                message: message.into(),
            },
            span: None,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} [error] {}", span, self.kind),
            None => write!(f, "[error] {}", self.kind),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
