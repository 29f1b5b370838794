//! Expression nodes.

use std::rc::Rc;

use super::{BinaryOp, FunctionDef, LogicalOp, UnaryOp};
use crate::Span;

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExprKind {
    /// `42`, `2.5`, `0xff`
    Number(f64),
    /// `"text"` or `'text'`, escapes already resolved
    Str(String),
    /// `true` / `false`
    Bool(bool),
    /// `null`
    Null,
    /// Variable reference.
    Ident(String),

    /// `left op right` for arithmetic and comparison.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `left && right`, `left || right`
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `-x`, `!x`
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `target = value`, or `target op= value` when `op` is set.
    Assign {
        target: AssignTarget,
        op: Option<BinaryOp>,
        value: Box<Expr>,
    },

    /// `callee(args...)`
    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// `object.name` or `object[expr]`
    Member {
        object: Box<Expr>,
        property: Property,
    },

    /// `fn (params) { body }`, optionally named.
    Function(Rc<FunctionDef>),

    /// `{ key: value, ... }`
    Record(Vec<RecordEntry>),

    /// `[a, b, c]`
    Sequence(Vec<Expr>),
}

/// Property part of a member expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Property {
    /// Dot access: `object.name`
    Named(String),
    /// Bracket access: `object[expr]`
    Computed(Box<Expr>),
}

impl Property {
    /// `true` for bracket access.
    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(self, Property::Computed(_))
    }
}

/// Left-hand side of an assignment.
///
/// The parser only builds assignments whose target is a plain identifier or
/// a member expression, so no other shape is representable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AssignTarget {
    Ident(String),
    Member {
        object: Box<Expr>,
        property: Property,
    },
}

/// `key: value` inside a record literal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RecordEntry {
    pub key: String,
    pub value: Expr,
    pub span: Span,
}
