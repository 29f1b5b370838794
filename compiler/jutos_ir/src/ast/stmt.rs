//! Statement nodes.

use std::rc::Rc;

use super::{teardown, Expr};
use crate::Span;

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StmtKind {
    /// `let name = init;` or `const name = init;`
    VariableDeclaration {
        name: String,
        mutable: bool,
        init: Expr,
    },
    /// `fn name(params) { body }`
    FunctionDeclaration(Rc<FunctionDef>),
    /// `if (condition) { ... } else ...`
    ///
    /// `else_branch` is either a `Block` or another `If` statement.
    If {
        condition: Expr,
        then_branch: Block,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (condition) { ... }`
    While { condition: Expr, body: Block },
    /// `for (init; condition; update) { ... }`
    For {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        update: Option<Expr>,
        body: Block,
    },
    /// `return;` or `return value;`
    Return(Option<Expr>),
    /// `break;`
    Break,
    /// `continue;`
    Continue,
    /// `{ ... }`
    Block(Block),
    /// `expr;`
    Expression(Expr),
}

/// Brace-delimited statement list; opens its own scope when evaluated.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }
}

/// Function definition shared by declarations and function expressions.
///
/// Held behind `Rc` so runtime function values can keep their body alive
/// independently of the program that defined them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionDef {
    pub name: Option<String>,
    /// Parameter names, unique within the list.
    pub params: Vec<String>,
    pub body: Block,
    pub span: Span,
}

impl Drop for FunctionDef {
    fn drop(&mut self) {
        teardown::dismantle(std::mem::take(&mut self.body.stmts));
    }
}

/// Root of a parsed source file.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn new(body: Vec<Stmt>, span: Span) -> Self {
        Program { body, span }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        teardown::dismantle(std::mem::take(&mut self.body));
    }
}
