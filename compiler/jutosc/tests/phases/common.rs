//! Shared helpers for phase tests.

use jutosc::{
    buffer_handler, create_global_environment, run_source, InterpreterBuilder, Problem, Value,
};

/// Result and printed lines of one program run.
pub struct Outcome {
    pub result: Result<Value, Problem>,
    pub output: Vec<String>,
}

/// Run `source` in a fresh global environment, capturing `print` output.
pub fn run(source: &str) -> Outcome {
    let handler = buffer_handler();
    let interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let result = run_source(source, &interpreter, &create_global_environment());
    Outcome {
        result,
        output: handler.lines(),
    }
}

/// Printed lines of a program that must succeed.
pub fn output(source: &str) -> Vec<String> {
    let outcome = run(source);
    if let Err(problem) = outcome.result {
        panic!("program failed with {}: {problem}", problem.code());
    }
    outcome.output
}

/// The problem a failing program stops with.
pub fn problem(source: &str) -> Problem {
    match run(source).result {
        Ok(value) => panic!("program should fail, produced {value}"),
        Err(problem) => problem,
    }
}
