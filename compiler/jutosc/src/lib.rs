//! Jutos: lexer, parser and tree-walking evaluator behind one facade.
//!
//! ```text
//! let program = jutosc::produce_ast("let a = 5; let b = 3; print(a + b);")?;
//! let env = jutosc::create_global_environment();
//! jutosc::evaluate(&program, &env)?;
//! ```
//!
//! The `jutos` binary built from this crate wraps the same entry points in a
//! small CLI (see [`commands`]).

pub mod commands;
pub mod problem;
pub mod reporting;

use std::sync::Once;

pub use jutos_eval::{
    buffer_handler, create_global_environment, evaluate, silent_handler, stdout_handler,
    Environment, EvalError, EvalErrorKind, Interpreter, InterpreterBuilder, SharedPrintHandler,
    TypeMismatch, Value, DEFAULT_MAX_CALL_DEPTH,
};
pub use jutos_ir as ir;
pub use jutos_lexer::{tokenize, LexError, LexErrorKind};
pub use jutos_parse::{produce_ast, ParseError, ParseErrorKind};
pub use problem::Problem;

/// Parse and evaluate `source` in `env`.
pub fn run_source(
    source: &str,
    interpreter: &Interpreter,
    env: &Environment,
) -> Result<Value, Problem> {
    let program = produce_ast(source)?;
    Ok(interpreter.evaluate(&program, env)?)
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=jutos_eval=debug`.
/// `JUTOS_LOG_TREE=1` switches to indented, span-nested output. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("JUTOS_LOG_TREE").is_ok_and(|v| v != "0") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
