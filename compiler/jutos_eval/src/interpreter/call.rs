//! Function calls.

use std::cell::Cell;

use jutos_ir::Span;
use jutos_stack::ensure_sufficient_stack;
use tracing::debug;

use super::{Flow, Interpreter};
use crate::{EvalError, EvalResult, FunctionValue, Mutability, NativeFunction, Value};

/// Restores the call depth when a user call frame ends, however it ends.
struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

impl Interpreter {
    /// Call `callee` with already evaluated `args`. `span` is the call site.
    pub(crate) fn call(&self, callee: &Value, args: Vec<Value>, span: Option<Span>) -> EvalResult {
        let result = match callee {
            Value::Function(function) => self.call_function(function, args),
            Value::Native(native) => self.call_native(*native, &args),
            Value::Number(_)
            | Value::Str(_)
            | Value::Bool(_)
            | Value::Null
            | Value::Record(_)
            | Value::Sequence(_) => Err(EvalError::not_callable(callee.type_name())),
        };
        match span {
            Some(span) => result.map_err(|e| e.at(span)),
            None => result,
        }
    }

    fn call_native(&self, native: NativeFunction, args: &[Value]) -> EvalResult {
        debug!(native = native.name, args = args.len(), "native call");
        (native.func)(self, args)
    }

    /// Run a user function in a fresh child scope of its closure.
    ///
    /// Missing arguments bind to `null`; extra arguments are dropped.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = function.name().unwrap_or("<anonymous>"))
    )]
    fn call_function(&self, function: &FunctionValue, args: Vec<Value>) -> EvalResult {
        let depth = self.call_depth.get();
        if depth >= self.max_call_depth {
            return Err(EvalError::stack_exhausted(self.max_call_depth));
        }
        self.call_depth.set(depth + 1);
        let _guard = DepthGuard {
            depth: &self.call_depth,
        };

        let frame = function.closure.create_child();
        let mut args = args.into_iter();
        for param in function.params() {
            let value = args.next().unwrap_or(Value::Null);
            frame.declare(param, value, Mutability::Mutable)?;
        }

        let flow = ensure_sufficient_stack(|| self.exec_stmts(&function.def.body.stmts, &frame))?;
        match flow {
            Flow::Normal(_) => Ok(Value::Null),
            Flow::Return(value) => Ok(value),
            Flow::Break => Err(EvalError::loop_control_outside_loop("break")),
            Flow::Continue => Err(EvalError::loop_control_outside_loop("continue")),
        }
    }
}
