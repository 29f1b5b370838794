use super::{parse, parse_expr, sexp_of};
use jutos_ir::{ExprKind, Span};
use pretty_assertions::assert_eq;

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(sexp_of("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(sexp_of("1 * 2 + 3 % 4"), "(+ (* 1 2) (% 3 4))");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(sexp_of("a - b - c"), "(- (- a b) c)");
    assert_eq!(sexp_of("a / b * c"), "(* (/ a b) c)");
    assert_eq!(sexp_of("a == b != c"), "(!= (== a b) c)");
    assert_eq!(sexp_of("a || b || c"), "(|| (|| a b) c)");
}

#[test]
fn full_precedence_ladder() {
    assert_eq!(
        sexp_of("a || b && c == d < e + f * g"),
        "(|| a (&& b (== c (< d (+ e (* f g))))))"
    );
    assert_eq!(
        sexp_of("a * b + c <= d != e && f || g"),
        "(|| (&& (!= (<= (+ (* a b) c) d) e) f) g)"
    );
}

#[test]
fn unary_operators() {
    assert_eq!(sexp_of("-a * !b"), "(* (- a) (! b))");
    assert_eq!(sexp_of("--x"), "(- (- x))");
    assert_eq!(sexp_of("!f(1)"), "(! (call f 1))");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(sexp_of("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(sexp_of("((a))"), "a");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(sexp_of("a = b = 1"), "(= a (= b 1))");
    assert_eq!(sexp_of("x = y || z"), "(= x (|| y z))");
}

#[test]
fn compound_assignment() {
    assert_eq!(sexp_of("n += 1"), "(+= n 1)");
    assert_eq!(sexp_of("o.count -= 2"), "(-= (. o count) 2)");
    assert_eq!(sexp_of("xs[i] *= 3"), "(*= ([] xs i) 3)");
    assert_eq!(sexp_of("a /= b %= c"), "(/= a (%= b c))");
}

#[test]
fn parenthesized_identifier_is_assignable() {
    assert_eq!(sexp_of("(a) = 1"), "(= a 1)");
}

#[test]
fn postfix_chains() {
    assert_eq!(sexp_of("f(1)(2).x[0]"), "([] (. (call (call f 1) 2) x) 0)");
    assert_eq!(sexp_of("a.b.c"), "(. (. a b) c)");
    assert_eq!(sexp_of("f()"), "(call f)");
    assert_eq!(sexp_of("f(a, b + 1,)"), "(call f a (+ b 1))");
}

#[test]
fn reserved_words_are_valid_property_names() {
    assert_eq!(sexp_of("o.new"), "(. o new)");
    assert_eq!(sexp_of("o.if.class"), "(. (. o if) class)");
}

#[test]
fn literals() {
    assert_eq!(
        sexp_of(r#"[1, 2.5, "a", 'b', true, false, null,]"#),
        r#"[1 2.5 "a" "b" true false null]"#
    );
    assert_eq!(sexp_of("[]"), "[]");
    assert_eq!(sexp_of("0x10 + .5"), "(+ 16 0.5)");
}

#[test]
fn record_literals() {
    // parenthesized: a leading `{` starts a block statement
    assert_eq!(sexp_of("({})"), "{}");
    assert_eq!(
        sexp_of(r#"({a: 1, "b c": 2, 3: x, name, if: 0,})"#),
        "{a: 1, b c: 2, 3: x, name: name, if: 0}"
    );
    assert_eq!(sexp_of("({1.0: a, 0x1f: b})"), "{1: a, 31: b}");
    assert_eq!(sexp_of("f({a: {b: [1]}})"), "(call f {a: {b: [1]}})");
}

#[test]
fn function_expressions() {
    assert_eq!(sexp_of("fn (a, b,) { return a; }"), "(fn (a b) {1})");
    assert_eq!(sexp_of("fn fact(n) {}"), "(fn fact(n) {0})");
    assert_eq!(sexp_of("fn () {}()"), "(call (fn () {0}))");
}

#[test]
fn spans_cover_the_whole_expression() {
    assert_eq!(parse_expr("a + bc").span, Span::new(0, 6));
    assert_eq!(parse_expr("f(x)[0]").span, Span::new(0, 7));
    assert_eq!(parse_expr("-x").span, Span::new(0, 2));
    assert_eq!(parse_expr("o.k = 1").span, Span::new(0, 7));
}

#[test]
fn string_escapes_are_resolved() {
    match parse_expr(r#""a\nb""#).kind {
        ExprKind::Str(value) => assert_eq!(value, "a\nb"),
        other => panic!("expected a string literal, got {other:?}"),
    }
}

#[test]
fn parsing_is_deterministic() {
    let source = "let f = fn (x) { return x * 2 + 1; }; print(f(3), {a: [1, 2]});";
    assert_eq!(parse(source), parse(source));
}
