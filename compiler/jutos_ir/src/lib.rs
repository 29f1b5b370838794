//! Jutos IR - shared syntax types
//!
//! This crate holds the data structures every other stage agrees on:
//! - [`Span`], [`Position`] and [`LineIndex`] for source locations
//! - [`Token`] and its vocabulary ([`TokenKind`], [`Keyword`])
//! - the AST ([`ast`]), the parser's output and the evaluator's input
//! - [`format_number`], the one spelling of numbers every stage agrees on
//!
//! With the `serde` feature, spans and AST nodes implement `Serialize`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod number;
mod span;
pub mod token;

pub use ast::{
    AssignTarget, BinaryOp, Block, Expr, ExprKind, FunctionDef, LogicalOp, Program, Property,
    RecordEntry, Stmt, StmtKind, UnaryOp,
};
pub use number::format_number;
pub use span::{LineIndex, Position, Span};
pub use token::{Keyword, Token, TokenCategory, TokenKind};

static_assert_size!(Span, 8);
static_assert_size!(Position, 8);
