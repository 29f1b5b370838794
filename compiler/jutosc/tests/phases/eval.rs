//! Whole programs, observed through what they print.

use jutosc::{EvalErrorKind, Problem};
use pretty_assertions::assert_eq;

use crate::common::{output, problem, run};

fn runtime_kind(source: &str) -> EvalErrorKind {
    match problem(source) {
        Problem::Eval(err) => err.kind,
        Problem::Parse(err) => panic!("expected runtime error, got {err}"),
    }
}

#[test]
fn prints_sum() {
    assert_eq!(output("let a = 5; let b = 3; print(a + b);"), vec!["8"]);
}

#[test]
fn constant_reassignment_is_rejected() {
    assert_eq!(
        runtime_kind("const x = 1; x = 2;"),
        EvalErrorKind::ImmutableAssignment {
            name: "x".to_string()
        }
    );
}

#[test]
fn recursive_factorial() {
    let source = "fn f(n) { if (n <= 1) { return 1; } return n * f(n - 1); } print(f(5));";
    assert_eq!(output(source), vec!["120"]);
}

#[test]
fn missing_record_key_reads_null() {
    assert_eq!(output("let o = {a: 1}; print(o.b);"), vec!["null"]);
    assert_eq!(output("let o = {a: 1}; print(o['b']);"), vec!["null"]);
}

#[test]
fn out_of_bounds_index() {
    assert_eq!(
        runtime_kind("let arr = [1,2,3]; arr[5];"),
        EvalErrorKind::IndexOutOfBounds {
            index: "5".to_string(),
            len: 3
        }
    );
}

#[test]
fn block_declarations_do_not_leak() {
    let source = "
        let x = 'outer';
        {
            let x = 'inner';
            {
                let x = 'innermost';
                x = 'changed';
            }
            print(x);
        }
        print(x);
    ";
    assert_eq!(output(source), vec!["inner", "outer"]);
    assert_eq!(
        runtime_kind("{ let hidden = 1; } print(hidden);"),
        EvalErrorKind::UndeclaredVariable {
            name: "hidden".to_string()
        }
    );
}

#[test]
fn closures_keep_their_scope() {
    let source = "
        fn make_adder(n) {
            let offset = n * 10;
            return fn(x) { return x + n + offset; };
        }
        let add2 = make_adder(2);
        let add5 = make_adder(5);
        print(add2(1), add5(1));
    ";
    assert_eq!(output(source), vec!["23 56"]);
}

#[test]
fn truthiness() {
    let source = "
        fn check(v) { if (v) { return 'T'; } return 'F'; }
        print(check(0), check(''), check(null), check(false));
        print(check(1), check('a'), check([]), check({}), check(check));
    ";
    assert_eq!(output(source), vec!["F F F F", "T T T T T"]);
}

#[test]
fn reruns_are_deterministic() {
    let source = "
        let data = {name: 'jutos', tags: ['a', 'b'], n: 1 / 3};
        data.count = len(data.tags);
        print(data);
        print(str(data.n * 3) + '!');
    ";
    let first = run(source);
    let second = run(source);
    assert!(first.result.is_ok() && second.result.is_ok());
    assert_eq!(first.output, second.output);
    assert_eq!(
        first.output,
        vec![
            "{count: 2, n: 0.3333333333333333, name: \"jutos\", tags: [\"a\", \"b\"]}",
            "1!"
        ]
    );
}

#[test]
fn fizzbuzz() {
    let source = "
        for (let i = 1; i <= 15; i += 1) {
            if (i % 15 == 0) { print('FizzBuzz'); }
            else if (i % 3 == 0) { print('Fizz'); }
            else if (i % 5 == 0) { print('Buzz'); }
            else { print(i); }
        }
    ";
    let lines = output(source);
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[2], "Fizz");
    assert_eq!(lines[4], "Buzz");
    assert_eq!(lines[14], "FizzBuzz");
    assert_eq!(lines[6], "7");
}

#[test]
fn sorting_in_place() {
    let source = "
        fn sort(items) {
            let n = len(items);
            for (let i = 0; i < n; i += 1) {
                for (let j = 0; j < n - i - 1; j += 1) {
                    if (items[j] > items[j + 1]) {
                        const tmp = items[j];
                        items[j] = items[j + 1];
                        items[j + 1] = tmp;
                    }
                }
            }
            return items;
        }
        let data = [5, 3, 9, 1, 4];
        sort(data);
        print(data);
    ";
    assert_eq!(output(source), vec!["[1, 3, 4, 5, 9]"]);
}

#[test]
fn records_as_objects() {
    let source = "
        fn make_account(balance) {
            let account = {balance};
            account.deposit = fn(amount) { account.balance += amount; return account.balance; };
            return account;
        }
        let acct = make_account(10);
        acct.deposit(5);
        print(acct.deposit(7), acct['balance']);
    ";
    assert_eq!(output(source), vec!["22 22"]);
}

#[test]
fn runtime_errors_stop_the_program() {
    let outcome = run("print('before'); missing(); print('after');");
    assert_eq!(outcome.output, vec!["before"]);
    let Err(Problem::Eval(err)) = outcome.result else {
        panic!("expected runtime error");
    };
    assert_eq!(err.code(), "E3001");
    assert_eq!(err.span.map(|s| s.start), Some(17));
}

#[test]
fn type_errors() {
    assert!(matches!(
        runtime_kind("let x = {} * 2;"),
        EvalErrorKind::TypeMismatch(_)
    ));
    assert_eq!(
        runtime_kind("let f = 1; f(2);"),
        EvalErrorKind::NotCallable {
            type_name: "number"
        }
    );
}

#[test]
fn runaway_recursion_is_reported() {
    assert_eq!(
        runtime_kind("fn loop_forever(n) { return loop_forever(n + 1); } loop_forever(0);"),
        EvalErrorKind::StackExhausted {
            limit: jutosc::DEFAULT_MAX_CALL_DEPTH
        }
    );
}

#[test]
fn deeply_nested_sequence_prints_and_drops() {
    let source = "let a = []; let i = 0; while (i < 20000) { a = [a]; i += 1; } print(a);";
    let printed = output(source);
    assert_eq!(printed.len(), 1);
    assert_eq!(printed[0].len(), 2 * 20_001);

    let outcome = run("let a = []; let i = 0; while (i < 200000) { a = [a]; i += 1; }");
    assert!(outcome.result.is_ok());
    drop(outcome);
}
