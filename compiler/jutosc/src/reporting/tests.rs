use super::*;
use crate::{produce_ast, run_source, silent_handler, InterpreterBuilder};
use pretty_assertions::assert_eq;

fn runtime_problem(source: &str) -> Problem {
    let interpreter = InterpreterBuilder::new()
        .print_handler(silent_handler())
        .build();
    run_source(source, &interpreter, &crate::create_global_environment()).unwrap_err()
}

#[test]
fn char_range_counts_characters() {
    let source = "'é' + x";
    assert_eq!(char_range(source, Span::new(7, 8)), 6..7);
    assert_eq!(char_range(source, Span::new(0, 4)), 0..3);
}

#[test]
fn char_range_clamps_past_end() {
    assert_eq!(char_range("ab", Span::new(2, 9)), 2..2);
}

#[test]
fn summary_for_parse_error() {
    let problem: Problem = produce_ast("let x = ;").unwrap_err().into();
    assert_eq!(
        summary(&problem, "demo.jt", "let x = ;"),
        "error[E2001]: expected expression, found `;` --> demo.jt:1:9"
    );
}

#[test]
fn summary_for_runtime_error() {
    let source = "const x = 1;\nx = 2;";
    let problem = runtime_problem(source);
    assert_eq!(
        summary(&problem, "demo.jt", source),
        "error[E3002]: cannot assign to constant `x` --> demo.jt:2:1"
    );
}

#[test]
fn rendered_report_names_code_message_and_location() {
    let source = "const x = 1; x = 2;";
    let problem = runtime_problem(source);
    let text = render(&problem, "script.jt", source, false);
    assert!(text.contains("E3002"), "{text}");
    assert!(text.contains("cannot assign to constant `x`"), "{text}");
    assert!(text.contains("script.jt:1:14"), "{text}");
    assert!(text.contains("runtime error"), "{text}");
}

#[test]
fn report_without_span_still_renders() {
    let problem = Problem::Eval(jutos_eval::EvalError::stack_exhausted(8));
    let text = render(&problem, "host", "", false);
    assert!(text.contains("maximum call depth of 8 exceeded"), "{text}");
    assert_eq!(
        summary(&problem, "host", ""),
        "error[E3009]: maximum call depth of 8 exceeded --> host"
    );
}
