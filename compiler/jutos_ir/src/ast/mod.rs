//! Tree-shaped AST produced by the parser.
//!
//! Nodes own their children (`Box`/`Vec`). Function definitions are shared
//! through `Rc` because runtime closures keep a handle on their body.
//!
//! # Module Structure
//!
//! - `expr`: expression nodes, member properties, assignment targets
//! - `stmt`: statements, blocks, function definitions, `Program`
//! - `operators`: binary, logical and unary operators
//! - `teardown`: non-recursive drop for `Program` and `FunctionDef`

mod expr;
mod operators;
mod stmt;
mod teardown;

pub use expr::{AssignTarget, Expr, ExprKind, Property, RecordEntry};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{Block, FunctionDef, Program, Stmt, StmtKind};

#[cfg(test)]
mod tests;
