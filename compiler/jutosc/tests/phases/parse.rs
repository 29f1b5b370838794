//! Front-end behavior observed through the facade.

use jutosc::ir::{ExprKind, StmtKind};
use jutosc::{produce_ast, ParseErrorKind, Problem};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::problem;

#[test]
fn produces_statements_in_order() {
    let program = produce_ast("let a = 5; let b = 3; print(a + b);").unwrap();
    assert_eq!(program.body.len(), 3);
    assert!(matches!(
        &program.body[0].kind,
        StmtKind::VariableDeclaration { name, mutable: true, .. } if name == "a"
    ));
    let StmtKind::Expression(call) = &program.body[2].kind else {
        panic!("expected expression statement");
    };
    assert!(matches!(call.kind, ExprKind::Call { .. }));
}

#[test]
fn parse_errors_carry_positions() {
    let err = produce_ast("let x = 1;\nlet = 2;").unwrap_err();
    assert_eq!(err.code(), "E2001");
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.column, 5);
}

#[test]
fn lexical_errors_surface_as_parse_errors() {
    let err = produce_ast("let s = \"open;").unwrap_err();
    assert_eq!(err.code(), "E1002");
    assert_eq!(problem("let x = 1 # 2;").code(), "E1001");
}

#[test]
fn reserved_keywords_are_rejected() {
    for source in ["class A {}", "let x = new Thing();", "throw 1;", "import x;"] {
        let err = produce_ast(source).unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::Unsupported { .. }),
            "{source}: {err}"
        );
    }
}

#[test]
fn parse_problems_stop_before_evaluation() {
    let outcome = crate::common::run("print(1); let = ;");
    assert!(matches!(outcome.result, Err(Problem::Parse(_))));
    assert!(outcome.output.is_empty());
}

proptest! {
    #[test]
    fn parsing_is_deterministic(a in -1000i32..1000, b in 1i32..1000, name in "[a-z][a-z0-9_]{0,6}") {
        prop_assume!(jutosc::ir::Keyword::from_ident(&name).is_none());
        let source = format!("let {name} = {a} * ({b} + 1); if ({name} > 0) {{ print({name}); }}");
        prop_assert_eq!(produce_ast(&source), produce_ast(&source));
    }
}
