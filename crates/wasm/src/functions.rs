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

use std::collections::HashMap;

use crate::instr::Instruction;

/// Context for compiling a single function body: the local slot table
/// plus the instruction buffer.
///
/// Parameters occupy slots `0..k-1` in declaration order. Local
/// variables are registered by a pre-pass over the body in
/// first-assignment program order, so a slot is stable no matter where
/// in the body (branch arms included) the assignment sits. The table is
/// discarded once the function's instructions have been handed off.
pub struct FunctionContext {
    /// Variable name → slot index
    slots: HashMap<String, u32>,
    param_count: u32,
    /// The next free slot index (starts after parameters)
    next_slot: u32,
    instructions: Vec<Instruction>,
}

impl FunctionContext {
    /// Create a context with the parameters pre-registered at 0..N.
    pub fn new(param_names: &[String]) -> Self {
        let mut slots = HashMap::new();
        for (i, name) in param_names.iter().enumerate() {
            slots.insert(name.clone(), i as u32);
        }
        let param_count = param_names.len() as u32;

        Self {
            slots,
            param_count,
            next_slot: param_count,
            instructions: Vec::new(),
        }
    }

    /// Register a local variable and return its slot. Re-registering an
    /// existing name (or a parameter) returns the slot it already has.
    pub fn declare_local(&mut self, name: &str) -> u32 {
        if let Some(&slot) = self.slots.get(name) {
            return slot;
        }
        let slot = self.next_slot;
        self.slots.insert(name.to_string(), slot);
        self.next_slot += 1;
        slot
    }

    /// Slot of a name. The checker guarantees every name the generator
    /// sees was assigned first, so a miss is a checker defect.
    pub fn slot(&self, name: &str) -> u32 {
        *self
            .slots
            .get(name)
            .expect("name not in slot table; type checker should have rejected this")
    }

    /// Number of declared locals beyond the parameters.
    pub fn extra_local_count(&self) -> u32 {
        self.next_slot - self.param_count
    }

    /// Append an instruction to the function body.
    pub fn emit(&mut self, instr: Instruction) {
        self.instructions.push(instr);
    }

    /// Hand off the finished instruction sequence.
    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}
