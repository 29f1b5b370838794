use super::parse_err;
use crate::{produce_ast, ParseErrorKind};
use jutos_ir::{Keyword, Position, Span};
use jutos_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

fn unexpected(expected: &str, found: &str) -> ParseErrorKind {
    ParseErrorKind::UnexpectedToken {
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

#[test]
fn missing_semicolon() {
    let err = parse_err("let a = 1");
    assert_eq!(err.kind, unexpected("`;`", "end of input"));
    assert_eq!(err.position, Position::new(1, 10));
    assert_eq!(err.to_string(), "expected `;`, found end of input at 1:10");
    assert_eq!(err.code(), "E2001");
}

#[test]
fn unexpected_token_reports_lexeme() {
    let err = parse_err("let a = 1 2;");
    assert_eq!(err.kind, unexpected("`;`", "`2`"));
    assert_eq!(err.span, Span::new(10, 11));
}

#[test]
fn invalid_assignment_targets() {
    for source in ["1 = 2;", "a + b = c;", "f() = 1;", "-a = 1;", "[a] = 1;"] {
        let err = parse_err(source);
        assert_eq!(err.kind, ParseErrorKind::InvalidAssignmentTarget, "{source}");
    }
    let err = parse_err("x + y += 1;");
    assert_eq!(err.span, Span::new(0, 5));
}

#[test]
fn duplicate_parameters() {
    let err = parse_err("fn f(a, b, a) {}");
    assert_eq!(
        err.kind,
        ParseErrorKind::DuplicateParameter {
            name: "a".to_string()
        }
    );
    assert_eq!(err.span, Span::new(11, 12));

    let err = parse_err("let g = fn (x, x) {};");
    assert_eq!(err.code(), "E2003");
}

#[test]
fn declarations_require_initializers() {
    let err = parse_err("let x;");
    assert_eq!(
        err.kind,
        ParseErrorKind::MissingInitializer {
            name: "x".to_string()
        }
    );
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(
        parse_err("const y").kind,
        ParseErrorKind::MissingInitializer {
            name: "y".to_string()
        }
    );
}

#[test]
fn reserved_keywords_are_unsupported() {
    let cases = [
        ("class Foo {}", Keyword::Class),
        ("let a = new B();", Keyword::New),
        ("try { x; }", Keyword::Try),
        ("throw 1;", Keyword::Throw),
        ("import x;", Keyword::Import),
        ("print(this);", Keyword::This),
    ];
    for (source, keyword) in cases {
        let err = parse_err(source);
        assert_eq!(err.kind, ParseErrorKind::Unsupported { keyword }, "{source}");
    }
    assert_eq!(
        parse_err("export fn f() {}").to_string(),
        "`export` is reserved but not supported at 1:1"
    );
}

#[test]
fn loop_control_outside_loops() {
    let err = parse_err("break;");
    assert_eq!(
        err.kind,
        ParseErrorKind::ControlOutsideLoop {
            keyword: Keyword::Break
        }
    );
    assert_eq!(err.code(), "E2006");

    // function bodies do not see enclosing loops
    let err = parse_err("while (x) { fn f() { continue; } }");
    assert_eq!(
        err.kind,
        ParseErrorKind::ControlOutsideLoop {
            keyword: Keyword::Continue
        }
    );

    assert!(produce_ast("for (;;) { { if (a) { break; } } continue; }").is_ok());
}

#[test]
fn unclosed_block() {
    let err = parse_err("{ let a = 1;");
    assert_eq!(err.kind, unexpected("`}`", "end of input"));
}

#[test]
fn else_without_if() {
    let err = parse_err("else {}");
    assert_eq!(err.kind, unexpected("expression", "`else`"));
}

#[test]
fn conditions_need_parentheses() {
    let err = parse_err("if x { }");
    assert_eq!(err.kind, unexpected("`(`", "`x`"));
}

#[test]
fn bad_record_key() {
    let err = parse_err("let r = {[1]: 2};");
    assert_eq!(err.kind, unexpected("record key", "`[`"));
}

#[test]
fn lexical_errors_surface() {
    let err = parse_err("let a = @;");
    assert_eq!(
        err.kind,
        ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter { found: '@' })
    );
    assert_eq!(err.position, Position::new(1, 9));
    assert_eq!(err.code(), "E1001");

    let err = parse_err("print('open");
    assert_eq!(err.kind, ParseErrorKind::Lex(LexErrorKind::UnterminatedString));
}

#[test]
fn lexical_error_seen_through_lookahead() {
    let err = parse_err("fn @");
    assert_eq!(
        err.kind,
        ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter { found: '@' })
    );
}

#[test]
fn earlier_syntax_error_wins() {
    let err = parse_err("let = 1; @");
    assert_eq!(err.kind, unexpected("identifier", "`=`"));
}

#[test]
fn lexical_error_after_complete_statements() {
    let err = parse_err("let a = 1; #");
    assert_eq!(
        err.kind,
        ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter { found: '#' })
    );
}

mod properties {
    use crate::produce_ast;
    use proptest::prelude::*;

    fn arithmetic() -> impl Strategy<Value = String> {
        let leaf = prop_oneof![
            (0u32..100).prop_map(|n| n.to_string()),
            "[a-z]{1,3}".prop_filter("reserved word", |s| {
                jutos_ir::Keyword::from_ident(s).is_none()
            }),
        ];
        leaf.prop_recursive(4, 32, 2, |inner| {
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "%", "<", "==", "&&", "||"]),
                inner,
            )
                .prop_map(|(l, op, r)| format!("({l} {op} {r})"))
        })
    }

    proptest! {
        #[test]
        fn parsing_never_panics(source in "\\PC{0,48}") {
            let _ = produce_ast(&source);
        }

        #[test]
        fn parsing_is_deterministic(expr in arithmetic()) {
            let source = format!("let v = {expr};");
            let first = produce_ast(&source);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first, produce_ast(&source));
        }
    }
}
