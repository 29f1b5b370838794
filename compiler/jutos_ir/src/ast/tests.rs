use super::*;
use crate::Span;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn num(value: f64) -> Expr {
    Expr::new(ExprKind::Number(value), Span::DUMMY)
}

#[test]
fn precedence_orders_levels() {
    assert!(LogicalOp::Or.precedence() < LogicalOp::And.precedence());
    assert!(LogicalOp::And.precedence() < BinaryOp::Eq.precedence());
    assert!(BinaryOp::Eq.precedence() < BinaryOp::Lt.precedence());
    assert!(BinaryOp::Lt.precedence() < BinaryOp::Add.precedence());
    assert!(BinaryOp::Add.precedence() < BinaryOp::Mul.precedence());
    assert_eq!(BinaryOp::Mod.precedence(), BinaryOp::Div.precedence());
    assert_eq!(BinaryOp::NotEq.precedence(), BinaryOp::Eq.precedence());
}

#[test]
fn operator_symbols() {
    assert_eq!(BinaryOp::GtEq.to_string(), ">=");
    assert_eq!(BinaryOp::Mod.to_string(), "%");
    assert_eq!(LogicalOp::Or.to_string(), "||");
    assert_eq!(UnaryOp::Not.to_string(), "!");
    assert!(BinaryOp::LtEq.is_comparison());
    assert!(!BinaryOp::Eq.is_comparison());
}

#[test]
fn function_defs_share_structure() {
    let def = Rc::new(FunctionDef {
        name: Some("id".to_string()),
        params: vec!["x".to_string()],
        body: Block::default(),
        span: Span::new(0, 10),
    });
    let decl = Stmt::new(StmtKind::FunctionDeclaration(Rc::clone(&def)), def.span);
    let expr = Expr::new(ExprKind::Function(Rc::clone(&def)), def.span);
    match (&decl.kind, &expr.kind) {
        (StmtKind::FunctionDeclaration(a), ExprKind::Function(b)) => assert!(Rc::ptr_eq(a, b)),
        other => panic!("unexpected nodes: {other:?}"),
    }
}

#[test]
fn structural_equality_ignores_identity() {
    let a = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: Box::new(num(1.0)),
            right: Box::new(num(2.0)),
        },
        Span::new(0, 5),
    );
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn property_kinds() {
    assert!(!Property::Named("a".to_string()).is_computed());
    assert!(Property::Computed(Box::new(num(0.0))).is_computed());
}

#[test]
fn empty_program() {
    assert!(Program::default().is_empty());
    let program = Program::new(
        vec![Stmt::new(StmtKind::Break, Span::DUMMY)],
        Span::DUMMY,
    );
    assert!(!program.is_empty());
}

fn negation_chain(depth: usize) -> Expr {
    let mut expr = num(1.0);
    for _ in 0..depth {
        expr = Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(expr),
            },
            Span::DUMMY,
        );
    }
    expr
}

#[test]
fn deep_program_drops() {
    let stmt = Stmt::new(StmtKind::Expression(negation_chain(1_000_000)), Span::DUMMY);
    drop(Program::new(vec![stmt], Span::DUMMY));
}

#[test]
fn deep_function_body_drops_with_last_handle() {
    let def = Rc::new(FunctionDef {
        name: None,
        params: Vec::new(),
        body: Block::new(
            vec![Stmt::new(
                StmtKind::Return(Some(negation_chain(1_000_000))),
                Span::DUMMY,
            )],
            Span::DUMMY,
        ),
        span: Span::DUMMY,
    });
    let stmt = Stmt::new(StmtKind::FunctionDeclaration(Rc::clone(&def)), Span::DUMMY);
    drop(Program::new(vec![stmt], Span::DUMMY));
    assert_eq!(def.body.stmts.len(), 1);
    drop(def);
}
