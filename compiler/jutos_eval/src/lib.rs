//! Jutos evaluator.
//!
//! Walks a parsed [`Program`] against an [`Environment`]:
//!
//! ```text
//! let program = jutos_parse::produce_ast("let a = 5; let b = 3; print(a + b);")?;
//! let env = jutos_eval::create_global_environment();
//! jutos_eval::evaluate(&program, &env)?; // prints 8
//! ```
//!
//! Evaluation is single-threaded and synchronous. Programs only observe the
//! outside world through natives (see [`natives`]).

mod environment;
mod errors;
mod interpreter;
pub mod natives;
mod print_handler;
mod value;

pub use environment::{Environment, LocalScope, Mutability, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult, TypeMismatch};
pub use interpreter::{Flow, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{FunctionValue, NativeFn, NativeFunction, RecordMap, Value};

use jutos_ir::Program;

/// A root environment holding every native function.
pub fn create_global_environment() -> Environment {
    let env = Environment::new();
    // Natives have distinct names and the scope starts empty.
    if let Err(err) = natives::register_natives(&env) {
        tracing::error!(%err, "failed to register natives");
    }
    env
}

/// Evaluate `program` in `env` with a default [`Interpreter`] (stdout, default
/// call depth). Returns the value of the last statement.
pub fn evaluate(program: &Program, env: &Environment) -> EvalResult {
    Interpreter::new().evaluate(program, env)
}
