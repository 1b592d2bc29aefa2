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

//! Text-to-binary assembly and validation.
//!
//! The pipeline itself stops at text output; turning that text into a
//! binary module and checking it against the WebAssembly spec is
//! delegated to `wat` and `wasmparser`. Failures here indicate a bug in
//! the code generator or emitter, surfaced as
//! [`ErrorKind::ToolchainValidation`](crate::ErrorKind::ToolchainValidation).

use wasmparser::{Validator, WasmFeatures};

use crate::error::CompileError;

/// Assemble WebAssembly text into a validated binary module.
pub fn assemble(wat_text: &str, features: WasmFeatures) -> Result<Vec<u8>, CompileError> {
    let binary =
        wat::parse_str(wat_text).map_err(|err| CompileError::toolchain(err.to_string()))?;

    let mut validator = Validator::new_with_features(features);
    validator
        .validate_all(&binary)
        .map_err(|err| CompileError::toolchain(err.to_string()))?;

    tracing::debug!(bytes = binary.len(), "module assembled and validated");
    Ok(binary)
}

/// [`assemble`] with the default feature set.
pub fn assemble_default(wat_text: &str) -> Result<Vec<u8>, CompileError> {
    assemble(wat_text, WasmFeatures::default())
}
