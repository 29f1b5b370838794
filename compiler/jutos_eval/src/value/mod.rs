//! Runtime values.
//!
//! Scalars (numbers, strings, booleans, `null`) are immutable and copied by
//! value. Records and sequences are shared, mutable containers: copying a
//! `Value` copies the handle, so every holder observes in-place mutation.
//! Functions carry the environment they were created in.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use jutos_ir::{format_number, FunctionDef};
use jutos_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use crate::{Environment, EvalResult, Interpreter};

/// Record storage. Keys stay sorted so rendering is deterministic.
pub type RecordMap = BTreeMap<String, Value>;

/// Signature of a host-provided function.
pub type NativeFn = fn(&Interpreter, &[Value]) -> EvalResult;

#[derive(Clone)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Null,
    Record(Rc<RefCell<RecordMap>>),
    Sequence(Rc<RefCell<Vec<Value>>>),
    Function(Rc<FunctionValue>),
    Native(NativeFunction),
}

/// A user-defined function closed over its defining environment.
pub struct FunctionValue {
    pub def: Rc<FunctionDef>,
    pub closure: Environment,
}

impl FunctionValue {
    pub fn name(&self) -> Option<&str> {
        self.def.name.as_deref()
    }

    pub fn params(&self) -> &[String] {
        &self.def.params
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.def.name)
            .field("params", &self.def.params)
            .finish_non_exhaustive()
    }
}

/// A host function exposed to programs under `name`.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        NativeFunction { name, func }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn record(entries: RecordMap) -> Self {
        Value::Record(Rc::new(RefCell::new(entries)))
    }

    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Rc::new(RefCell::new(items)))
    }

    /// `false`, `null`, `0`, `-0` and `""` are falsy. Everything else,
    /// including `NaN` and empty containers, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Null => false,
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Record(_) | Value::Sequence(_) | Value::Function(_) | Value::Native(_) => true,
        }
    }

    /// Name of the value's kind, as used in diagnostics and by `type_of`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Record(_) => "record",
            Value::Sequence(_) => "sequence",
            Value::Function(_) | Value::Native(_) => "function",
        }
    }

    /// Strict equality.
    ///
    /// Scalars compare by value (`NaN` is unequal to itself), containers and
    /// functions by identity. Values of different kinds are never equal.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match self {
            Value::Number(a) => matches!(other, Value::Number(b) if a == b),
            Value::Str(a) => matches!(other, Value::Str(b) if a == b),
            Value::Bool(a) => matches!(other, Value::Bool(b) if a == b),
            Value::Null => matches!(other, Value::Null),
            Value::Record(a) => matches!(other, Value::Record(b) if Rc::ptr_eq(a, b)),
            Value::Sequence(a) => matches!(other, Value::Sequence(b) if Rc::ptr_eq(a, b)),
            Value::Function(a) => matches!(other, Value::Function(b) if Rc::ptr_eq(a, b)),
            Value::Native(a) => matches!(other, Value::Native(b) if a.name == b.name),
        }
    }

    /// Rendering used by `print` and `str`: top-level strings appear without
    /// quotes, everything else as [`Display`](fmt::Display).
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            _ => self.to_string(),
        }
    }

    /// Key a computed property resolves to on a record.
    pub fn to_property_key(&self) -> String {
        match self {
            Value::Number(n) => format_number(*n),
            _ => self.display_value(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        render(self, &mut out, &mut FxHashSet::default());
        f.write_str(&out)
    }
}

/// Containers are torn down iteratively so dropping a deeply nested value
/// does not recurse once per level.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut value) = pending.pop() {
            take_children(&mut value, &mut pending);
        }
    }
}

/// Move the elements of a container out into `pending` when `value` holds
/// the last handle to it.
fn take_children(value: &mut Value, pending: &mut Vec<Value>) {
    match value {
        Value::Sequence(items) if Rc::strong_count(items) == 1 => {
            if let Ok(mut items) = items.try_borrow_mut() {
                pending.append(&mut items);
            }
        }
        Value::Record(entries) if Rc::strong_count(entries) == 1 => {
            if let Ok(mut entries) = entries.try_borrow_mut() {
                pending.extend(std::mem::take(&mut *entries).into_values());
            }
        }
        _ => {}
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.type_name())
    }
}

/// Render `value` into `out`. `open` holds the containers currently being
/// rendered so a container that reaches itself prints as `[...]` / `{...}`.
fn render(value: &Value, out: &mut String, open: &mut FxHashSet<*const ()>) {
    match value {
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::Str(s) => {
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\t' => out.push_str("\\t"),
                    '\r' => out.push_str("\\r"),
                    _ => out.push(c),
                }
            }
            out.push('"');
        }
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Sequence(items) => {
            let id = Rc::as_ptr(items).cast::<()>();
            if !open.insert(id) {
                out.push_str("[...]");
                return;
            }
            out.push('[');
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                ensure_sufficient_stack(|| render(item, out, open));
            }
            out.push(']');
            open.remove(&id);
        }
        Value::Record(entries) => {
            let id = Rc::as_ptr(entries).cast::<()>();
            if open.contains(&id) {
                out.push_str("{...}");
                return;
            }
            let entries = entries.borrow();
            if entries.is_empty() {
                out.push_str("{}");
                return;
            }
            open.insert(id);
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                ensure_sufficient_stack(|| render(item, out, open));
            }
            out.push('}');
            open.remove(&id);
        }
        Value::Function(func) => match func.name() {
            Some(name) => {
                out.push_str("<fn ");
                out.push_str(name);
                out.push('>');
            }
            None => out.push_str("<fn>"),
        },
        Value::Native(native) => {
            out.push_str("<native fn ");
            out.push_str(native.name);
            out.push('>');
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}
