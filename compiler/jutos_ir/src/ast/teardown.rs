//! Iterative teardown of syntax trees.
//!
//! The generated drop of a `Box<Expr>` chain recurses once per level.
//! `Program` and `FunctionDef` hand their statements to [`dismantle`]
//! instead, which moves every child onto a work list before the parent is
//! released.

use std::rc::Rc;

use super::{AssignTarget, Block, Expr, ExprKind, FunctionDef, Property, Stmt, StmtKind};

enum Node {
    Stmt(Stmt),
    Expr(Expr),
}

pub(super) fn dismantle(stmts: Vec<Stmt>) {
    let mut work: Vec<Node> = stmts.into_iter().map(Node::Stmt).collect();
    while let Some(node) = work.pop() {
        match node {
            Node::Stmt(stmt) => push_stmt(stmt.kind, &mut work),
            Node::Expr(expr) => push_expr(expr.kind, &mut work),
        }
    }
}

fn push_block(block: Block, work: &mut Vec<Node>) {
    work.extend(block.stmts.into_iter().map(Node::Stmt));
}

/// Only the last handle to a definition gives up its body; closures that
/// still share it keep it intact.
fn push_def(def: Rc<FunctionDef>, work: &mut Vec<Node>) {
    if let Ok(mut def) = Rc::try_unwrap(def) {
        let stmts = std::mem::take(&mut def.body.stmts);
        work.extend(stmts.into_iter().map(Node::Stmt));
    }
}

fn push_property(property: Property, work: &mut Vec<Node>) {
    if let Property::Computed(index) = property {
        work.push(Node::Expr(*index));
    }
}

fn push_stmt(kind: StmtKind, work: &mut Vec<Node>) {
    match kind {
        StmtKind::VariableDeclaration { init, .. } => work.push(Node::Expr(init)),
        StmtKind::FunctionDeclaration(def) => push_def(def, work),
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            work.push(Node::Expr(condition));
            push_block(then_branch, work);
            if let Some(else_branch) = else_branch {
                work.push(Node::Stmt(*else_branch));
            }
        }
        StmtKind::While { condition, body } => {
            work.push(Node::Expr(condition));
            push_block(body, work);
        }
        StmtKind::For {
            init,
            condition,
            update,
            body,
        } => {
            if let Some(init) = init {
                work.push(Node::Stmt(*init));
            }
            work.extend(condition.into_iter().chain(update).map(Node::Expr));
            push_block(body, work);
        }
        StmtKind::Return(value) => work.extend(value.map(Node::Expr)),
        StmtKind::Block(block) => push_block(block, work),
        StmtKind::Expression(expr) => work.push(Node::Expr(expr)),
        StmtKind::Break | StmtKind::Continue => {}
    }
}

fn push_expr(kind: ExprKind, work: &mut Vec<Node>) {
    match kind {
        ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
            work.push(Node::Expr(*left));
            work.push(Node::Expr(*right));
        }
        ExprKind::Unary { operand, .. } => work.push(Node::Expr(*operand)),
        ExprKind::Assign { target, value, .. } => {
            if let AssignTarget::Member { object, property } = target {
                work.push(Node::Expr(*object));
                push_property(property, work);
            }
            work.push(Node::Expr(*value));
        }
        ExprKind::Call { callee, args } => {
            work.push(Node::Expr(*callee));
            work.extend(args.into_iter().map(Node::Expr));
        }
        ExprKind::Member { object, property } => {
            work.push(Node::Expr(*object));
            push_property(property, work);
        }
        ExprKind::Function(def) => push_def(def, work),
        ExprKind::Record(entries) => {
            work.extend(entries.into_iter().map(|entry| Node::Expr(entry.value)));
        }
        ExprKind::Sequence(items) => work.extend(items.into_iter().map(Node::Expr)),
        ExprKind::Number(_)
        | ExprKind::Str(_)
        | ExprKind::Bool(_)
        | ExprKind::Null
        | ExprKind::Ident(_) => {}
    }
}
