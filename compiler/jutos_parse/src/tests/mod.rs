//! Parser tests.
//!
//! Expression shapes are compared through a compact S-expression rendering
//! so the assertions stay readable and span-independent.

mod errors;
mod expr;

use crate::{produce_ast, ParseError};
use jutos_ir::{format_number, AssignTarget, Expr, ExprKind, Program, Property, StmtKind};

pub(crate) fn parse(source: &str) -> Program {
    match produce_ast(source) {
        Ok(program) => program,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

pub(crate) fn parse_err(source: &str) -> ParseError {
    match produce_ast(source) {
        Ok(program) => panic!("expected {source:?} to fail, got {program:?}"),
        Err(err) => err,
    }
}

/// Parse `source;` and return its single expression.
pub(crate) fn parse_expr(source: &str) -> Expr {
    let mut program = parse(&format!("{source};"));
    assert_eq!(program.body.len(), 1, "expected one statement");
    match program.body.remove(0).kind {
        StmtKind::Expression(expr) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

pub(crate) fn sexp_of(source: &str) -> String {
    sexp(&parse_expr(source))
}

pub(crate) fn sexp(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Number(value) => format_number(*value),
        ExprKind::Str(value) => format!("{value:?}"),
        ExprKind::Bool(value) => value.to_string(),
        ExprKind::Null => "null".to_string(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Binary { op, left, right } => format!("({op} {} {})", sexp(left), sexp(right)),
        ExprKind::Logical { op, left, right } => {
            format!("({op} {} {})", sexp(left), sexp(right))
        }
        ExprKind::Unary { op, operand } => format!("({op} {})", sexp(operand)),
        ExprKind::Assign { target, op, value } => {
            let target = match target {
                AssignTarget::Ident(name) => name.clone(),
                AssignTarget::Member { object, property } => member(object, property),
            };
            let op = op.map_or(String::new(), |op| op.to_string());
            format!("({op}= {target} {})", sexp(value))
        }
        ExprKind::Call { callee, args } => {
            let mut parts = vec!["call".to_string(), sexp(callee)];
            parts.extend(args.iter().map(sexp));
            format!("({})", parts.join(" "))
        }
        ExprKind::Member { object, property } => member(object, property),
        ExprKind::Function(def) => format!(
            "(fn {}({}) {{{}}})",
            def.name.as_deref().unwrap_or(""),
            def.params.join(" "),
            def.body.stmts.len()
        ),
        ExprKind::Record(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|entry| format!("{}: {}", entry.key, sexp(&entry.value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        ExprKind::Sequence(elements) => {
            let elements: Vec<String> = elements.iter().map(sexp).collect();
            format!("[{}]", elements.join(" "))
        }
    }
}

fn member(object: &Expr, property: &Property) -> String {
    match property {
        Property::Named(name) => format!("(. {} {name})", sexp(object)),
        Property::Computed(index) => format!("([] {} {})", sexp(object), sexp(index)),
    }
}
