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

//! Text-format module assembly: the final pipeline stage.
//!
//! Renders compiled functions into a single `(module ...)` s-expression.
//! Every function is exported under its source name. Rendering is a
//! pure function of its input, so identical compiled modules produce
//! byte-identical text.

use std::fmt::Write;

use crate::compiler::CompiledFunction;
use crate::instr::Instruction;

const INDENT: &str = "  ";

/// Render the whole module as WebAssembly text.
pub fn emit_module(functions: &[CompiledFunction]) -> String {
    let mut out = String::new();
    out.push_str("(module\n");
    for func in functions {
        emit_function(&mut out, func);
    }
    out.push_str(")\n");
    out
}

fn emit_function(out: &mut String, func: &CompiledFunction) {
    let _ = write!(out, "{}(func ${} (export \"{}\")", INDENT, func.name, func.name);
    for ty in &func.param_types {
        let _ = write!(out, " (param {})", ty.wat_name());
    }
    let _ = write!(out, " (result {})", func.return_type.wat_name());
    out.push('\n');

    for _ in 0..func.local_count {
        let _ = writeln!(out, "{}(local i32)", INDENT.repeat(2));
    }

    // Instructions indent with block structure. `depth` counts open
    // `if` blocks; it must return to zero at the end of the body.
    let mut depth: usize = 0;
    for instr in &func.instructions {
        match instr {
            Instruction::Else => {
                assert!(depth > 0, "else outside a block in ${}", func.name);
                let _ = writeln!(out, "{}{}", INDENT.repeat(depth + 1), instr);
            }
            Instruction::End => {
                assert!(depth > 0, "unbalanced end in ${}", func.name);
                depth -= 1;
                let _ = writeln!(out, "{}{}", INDENT.repeat(depth + 2), instr);
            }
            Instruction::If(_) => {
                let _ = writeln!(out, "{}{}", INDENT.repeat(depth + 2), instr);
                depth += 1;
            }
            _ => {
                let _ = writeln!(out, "{}{}", INDENT.repeat(depth + 2), instr);
            }
        }
    }
    assert!(depth == 0, "unclosed block in ${}", func.name);

    let _ = writeln!(out, "{})", INDENT);
}
