//! # essql - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for essql, a restricted
//! SQL-like `WHERE` clause language that compiles to elasticsearch filter
//! queries.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Value expressions (strings, numbers, function calls)
//! - **[operators]** - Comparison and conjunction operators
//! - **[conditions]** - Comparison and conjunction nodes forming the condition tree
//! - **[statements]** - The complete `SELECT` statement
//!
//! ## Quick Start
//!
//! ```text
//! SELECT * FROM oilers WHERE pos = "C" AND (goals >= 50 OR jersey < 10)
//! ```
//!
//! This targets the `oilers` index and produces a single condition tree:
//!
//! ```text
//! (pos = "C" AND (goals >= 50 OR jersey < 10))
//! ```
//!
//! ## Core Concepts
//!
//! ### Comparisons
//!
//! A comparison is always `identifier operator value`. Identifiers may carry
//! dotted qualifiers (`t1.field`), values are string literals, numbers or
//! function calls.
//!
//! ### Conjunctions
//!
//! `AND` and `OR` combine exactly two conditions. Chains associate to the
//! right, so `a = 1 AND b = 2 AND c = 3` is `(a = 1 AND (b = 2 AND c = 3))`.
//! Parentheses group explicitly.
//!
//! ### Ownership
//!
//! Every node owns its children. Trees are built once by the parser, never
//! mutated afterwards and never shared.
pub mod conditions;
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod tokens;

pub use conditions::{Cond, CondComp, CondConj};
pub use expressions::{Expr, FuncCall};
pub use operators::{CompOp, ConjOp};
pub use statements::SelectStatement;
pub use tokens::{Token, TokenKind};
