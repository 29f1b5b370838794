//! `run` and `eval`: evaluate a program against a fresh global environment.

use jutos_eval::{create_global_environment, stdout_handler, InterpreterBuilder, Value};
use tracing::debug;

use super::read_file;
use crate::reporting::report;
use crate::{run_source, Problem};

/// Evaluation settings taken from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Overrides the interpreter's call depth limit.
    pub max_call_depth: Option<usize>,
}

/// Split `args` into options and positional arguments.
///
/// Recognized flags: `--max-depth=<n>`. Any other argument starting with
/// `--` is an error.
pub fn parse_run_args(args: &[String]) -> Result<(RunOptions, Vec<String>), String> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();
    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let depth = depth
                .parse::<usize>()
                .map_err(|_| format!("invalid value for --max-depth: '{depth}'"))?;
            options.max_call_depth = Some(depth);
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((options, positional))
}

/// Evaluate `source` with stdout printing, returning the program's value.
pub fn execute(source: &str, options: &RunOptions) -> Result<Value, Problem> {
    let mut builder = InterpreterBuilder::new().print_handler(stdout_handler());
    if let Some(depth) = options.max_call_depth {
        builder = builder.max_call_depth(depth);
    }
    let interpreter = builder.build();
    run_source(source, &interpreter, &create_global_environment())
}

/// Run `source`, named `name` in diagnostics. Prints a non-null final value.
fn run_named(name: &str, source: &str, options: &RunOptions) {
    debug!(name, bytes = source.len(), "run");
    match execute(source, options) {
        Ok(Value::Null) => {}
        Ok(value) => println!("{}", value.display_value()),
        Err(problem) => {
            report(&problem, name, source);
            std::process::exit(1);
        }
    }
}

/// Run a Jutos source file.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    run_named(path, &source, options);
}

/// Run source text given on the command line.
pub fn eval_inline(source: &str, options: &RunOptions) {
    run_named("<eval>", source, options);
}
