//! Tree-walking interpreter.
//!
//! Evaluation dispatches on the AST node kind. Statements produce a [`Flow`]
//! so `return`, `break` and `continue` travel as ordinary values; errors
//! travel as [`EvalError`] and always abort the whole evaluation.

mod builder;
mod call;
mod expr;
mod operators;
mod stmt;

use std::cell::Cell;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use jutos_ir::Program;
use tracing::debug;

use crate::{Environment, EvalError, EvalResult, SharedPrintHandler, Value};

/// Outcome of executing a statement.
#[derive(Clone, Debug)]
pub enum Flow {
    /// Fell through; carries the statement's value.
    Normal(Value),
    /// `return` unwinding to the nearest call frame.
    Return(Value),
    /// `break` unwinding to the nearest loop.
    Break,
    /// `continue` unwinding to the nearest loop.
    Continue,
}

/// Evaluator configuration plus per-evaluation bookkeeping.
///
/// An interpreter holds no program state of its own: all bindings live in
/// the [`Environment`] passed to [`Interpreter::evaluate`].
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: Cell<usize>,
}

impl Interpreter {
    /// Interpreter printing to stdout with the default call depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Evaluate `program` in `env`, returning the value of its last statement.
    ///
    /// Declarations made by the program persist in `env`.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.body.len()))]
    pub fn evaluate(&self, program: &Program, env: &Environment) -> EvalResult {
        let mut last = Value::Null;
        for stmt in &program.body {
            match self.exec_stmt(stmt, env)? {
                Flow::Normal(value) => last = value,
                Flow::Return(_) => return Err(EvalError::return_outside_function().at(stmt.span)),
                Flow::Break => {
                    return Err(EvalError::loop_control_outside_loop("break").at(stmt.span))
                }
                Flow::Continue => {
                    return Err(EvalError::loop_control_outside_loop("continue").at(stmt.span))
                }
            }
        }
        debug!(result = %last, "program finished");
        Ok(last)
    }

    /// Call `callee` with `args` from host code.
    pub fn call_value(&self, callee: &Value, args: Vec<Value>) -> EvalResult {
        self.call(callee, args, None)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
