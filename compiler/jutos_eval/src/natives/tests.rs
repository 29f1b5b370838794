use super::*;
use crate::{buffer_handler, EvalErrorKind, InterpreterBuilder};
use pretty_assertions::assert_eq;

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

fn call(name: &str, args: &[Value]) -> EvalResult {
    let native = NATIVES.iter().find(|n| n.name == name).unwrap();
    (native.func)(&interpreter(), args)
}

#[test]
fn registers_every_native_as_constant() {
    let env = Environment::new();
    register_natives(&env).unwrap();
    assert_eq!(
        env.local_names(),
        vec!["len", "print", "push", "str", "time", "type_of"]
    );
    let err = env.assign("print", Value::Null).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ImmutableAssignment { .. }));
}

#[test]
fn print_joins_with_spaces() {
    let interpreter = interpreter();
    print(
        &interpreter,
        &[
            Value::from("a"),
            Value::Number(1.0),
            Value::sequence(vec![Value::from("b")]),
        ],
    )
    .unwrap();
    print(&interpreter, &[]).unwrap();
    assert_eq!(interpreter.print_handler().output(), "a 1 [\"b\"]\n\n");
}

#[test]
fn time_never_goes_backwards() {
    let Value::Number(first) = call("time", &[]).unwrap() else {
        panic!("time() must return a number");
    };
    let Value::Number(second) = call("time", &[]).unwrap() else {
        panic!("time() must return a number");
    };
    assert!(second >= first);
}

#[test]
fn len_counts() {
    assert_eq!(call("len", &[Value::from("héllo")]).unwrap().to_string(), "5");
    let seq = Value::sequence(vec![Value::Null, Value::Null]);
    assert_eq!(call("len", &[seq]).unwrap().to_string(), "2");
}

#[test]
fn len_rejects_numbers() {
    let err = call("len", &[Value::Number(3.0)]).unwrap_err();
    assert_eq!(
        err.message(),
        "len() expects a string, sequence or record, got number"
    );
    let err = call("len", &[]).unwrap_err();
    assert_eq!(
        err.message(),
        "len() expects a string, sequence or record, got no argument"
    );
}

#[test]
fn push_appends_in_place() {
    let seq = Value::sequence(vec![Value::Number(1.0)]);
    let len = call("push", &[seq.clone(), Value::Number(2.0), Value::Number(3.0)]).unwrap();
    assert_eq!(len.to_string(), "3");
    assert_eq!(seq.to_string(), "[1, 2, 3]");
    assert_eq!(call("push", &[Value::Null]).unwrap_err().code(), "E3004");
}

#[test]
fn str_and_type_of() {
    assert_eq!(
        call("str", &[Value::Number(2.5)]).unwrap().display_value(),
        "2.5"
    );
    assert_eq!(
        call("type_of", &[Value::Bool(true)]).unwrap().display_value(),
        "boolean"
    );
    let native = Value::Native(NATIVES[0]);
    assert_eq!(call("type_of", &[native.clone()]).unwrap().display_value(), "function");
    assert_eq!(native.display_value(), "<native fn print>");
}
