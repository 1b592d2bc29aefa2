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

use crate::expr::Expr;
use crate::Spanned;

#[derive(Debug, Clone)]
pub enum Stmt {
    /// Expression used as a statement (e.g. a call evaluated for effect)
    Expr(Spanned<Expr>),

    /// `x = expr;` — the first assignment to a name fixes its type for
    /// the rest of the function body.
    Assign {
        name: String,
        value: Spanned<Expr>,
    },

    /// `return expr;` — every function returns a value.
    Return(Spanned<Expr>),

    /// Conditional with an optional `else` branch.
    If {
        test: Spanned<Expr>,
        body: Vec<Spanned<Stmt>>,
        else_body: Option<Vec<Spanned<Stmt>>>,
    },
}
