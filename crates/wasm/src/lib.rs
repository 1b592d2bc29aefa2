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

//! Type checking and WebAssembly text generation for `ast` modules.
//!
//! The pipeline runs in four stages, each consuming the previous one's
//! output:
//!
//! 1. [`SymbolTable::build`] registers every function signature;
//! 2. [`TypeChecker`](type_checker::TypeChecker) annotates each
//!    expression with its type, rejecting ill-typed programs;
//! 3. [`Compiler`](compiler::Compiler) lowers the typed tree to
//!    per-function instruction sequences;
//! 4. [`emitter`] renders those into `(module ...)` text.
//!
//! [`compile`] wires the stages together. [`compile_to_binary`] also
//! pushes the text through the external assembler and validator
//! ([`toolchain`]); it is the integration path the tests use.

pub mod compiler;
pub mod emitter;
pub mod error;
pub mod functions;
pub mod instr;
pub mod symbols;
pub mod toolchain;
pub mod type_checker;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{CompileError, ErrorKind};
pub use symbols::SymbolTable;
pub use types::Type;

use ast::Module;

/// Run the full pipeline: symbols, type check, code generation, text
/// emission. Returns the module in WebAssembly text format, or the
/// first error encountered.
pub fn compile(module: &Module) -> Result<String, CompileError> {
    let symbols = SymbolTable::build(module)?;
    let typed = type_checker::TypeChecker::new(&symbols).check_module(module)?;
    let compiled = compiler::Compiler::new().compile_module(&typed);
    let text = emitter::emit_module(&compiled);

    tracing::debug!(
        functions = compiled.len(),
        text_bytes = text.len(),
        "module compiled to text"
    );
    Ok(text)
}

/// [`compile`], then assemble and validate the text with the external
/// toolchain under the given feature set.
pub fn compile_to_binary(
    module: &Module,
    features: wasmparser::WasmFeatures,
) -> Result<Vec<u8>, CompileError> {
    let text = compile(module)?;
    toolchain::assemble(&text, features)
}
