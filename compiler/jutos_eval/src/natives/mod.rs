//! Host functions available to every program.
//!
//! | name | behavior |
//! |------|----------|
//! | `print(...values)` | writes the values separated by spaces, returns `null` |
//! | `time()` | milliseconds since the first call to `time` in this process |
//! | `len(x)` | character count, element count or key count |
//! | `push(seq, ...values)` | appends to `seq`, returns its new length |
//! | `str(x)` | rendering of `x` as a string |
//! | `type_of(x)` | name of the kind of `x` |

use std::sync::OnceLock;
use std::time::Instant;

use tracing::debug;

use crate::{
    Environment, EvalError, EvalResult, Interpreter, Mutability, NativeFunction, TypeMismatch,
    Value,
};

/// Every native, in registration order.
pub const NATIVES: &[NativeFunction] = &[
    NativeFunction::new("print", print),
    NativeFunction::new("time", time),
    NativeFunction::new("len", len),
    NativeFunction::new("push", push),
    NativeFunction::new("str", render),
    NativeFunction::new("type_of", type_of),
];

/// Bind every native in `env` as a constant.
pub fn register_natives(env: &Environment) -> Result<(), EvalError> {
    for native in NATIVES {
        env.declare(native.name, Value::Native(*native), Mutability::Immutable)?;
    }
    debug!(count = NATIVES.len(), "registered natives");
    Ok(())
}

#[cold]
fn bad_argument(function: &'static str, expected: &'static str, got: Option<&Value>) -> EvalError {
    EvalError::type_mismatch(TypeMismatch::NativeArgument {
        function,
        expected,
        got: got.map_or("no argument", Value::type_name),
    })
}

#[allow(clippy::cast_precision_loss)]
fn count(n: usize) -> Value {
    Value::Number(n as f64)
}

fn print(interpreter: &Interpreter, args: &[Value]) -> EvalResult {
    let line = args
        .iter()
        .map(Value::display_value)
        .collect::<Vec<_>>()
        .join(" ");
    interpreter.print_handler().println(&line);
    Ok(Value::Null)
}

fn time(_: &Interpreter, _: &[Value]) -> EvalResult {
    static START: OnceLock<Instant> = OnceLock::new();
    let start = START.get_or_init(Instant::now);
    Ok(Value::Number(start.elapsed().as_secs_f64() * 1000.0))
}

fn len(_: &Interpreter, args: &[Value]) -> EvalResult {
    match args.first() {
        Some(Value::Str(s)) => Ok(count(s.chars().count())),
        Some(Value::Sequence(items)) => Ok(count(items.borrow().len())),
        Some(Value::Record(entries)) => Ok(count(entries.borrow().len())),
        other => Err(bad_argument("len", "a string, sequence or record", other)),
    }
}

fn push(_: &Interpreter, args: &[Value]) -> EvalResult {
    match args.split_first() {
        Some((Value::Sequence(items), values)) => {
            let mut items = items.borrow_mut();
            items.extend_from_slice(values);
            Ok(count(items.len()))
        }
        other => Err(bad_argument("push", "a sequence", other.map(|(first, _)| first))),
    }
}

fn render(_: &Interpreter, args: &[Value]) -> EvalResult {
    match args.first() {
        Some(value) => Ok(Value::string(value.display_value())),
        None => Err(bad_argument("str", "one argument", None)),
    }
}

fn type_of(_: &Interpreter, args: &[Value]) -> EvalResult {
    match args.first() {
        Some(value) => Ok(Value::string(value.type_name())),
        None => Err(bad_argument("type_of", "one argument", None)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
