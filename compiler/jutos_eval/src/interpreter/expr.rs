//! Expression evaluation and property access.

use std::rc::Rc;

use jutos_ir::{AssignTarget, BinaryOp, Expr, ExprKind, FunctionDef, LogicalOp, Property, Span};
use jutos_stack::ensure_sufficient_stack;

use super::operators::{binary, unary};
use super::Interpreter;
use crate::{
    Environment, EvalError, EvalResult, FunctionValue, Mutability, RecordMap, TypeMismatch, Value,
};

/// A property reference after its key has been evaluated.
enum Key {
    Name(String),
    Value(Value),
}

impl Key {
    fn describe(&self) -> String {
        match self {
            Key::Name(name) => name.clone(),
            Key::Value(value) => value.to_property_key(),
        }
    }
}

impl Interpreter {
    pub(crate) fn eval_expr(&self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Ident(name) => env.lookup(name).map_err(|e| e.at(expr.span)),

            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                binary(*op, &left, &right).map_err(|e| e.at(expr.span))
            }
            ExprKind::Logical { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let decided = match op {
                    LogicalOp::And => !left.is_truthy(),
                    LogicalOp::Or => left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.eval_expr(right, env)
                }
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand, env)?;
                unary(*op, &operand).map_err(|e| e.at(expr.span))
            }

            ExprKind::Assign { target, op, value } => {
                self.eval_assign(target, *op, value, env, expr.span)
            }

            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee, env)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call(&callee, args, Some(expr.span))
            }

            ExprKind::Member { object, property } => {
                let object = self.eval_expr(object, env)?;
                let key = self.eval_key(property, env)?;
                get_member(&object, &key).map_err(|e| e.at(expr.span))
            }

            ExprKind::Function(def) => make_closure(def, env).map_err(|e| e.at(expr.span)),

            ExprKind::Record(entries) => {
                let mut record = RecordMap::new();
                for entry in entries {
                    let value = self.eval_expr(&entry.value, env)?;
                    record.insert(entry.key.clone(), value);
                }
                Ok(Value::record(record))
            }
            ExprKind::Sequence(items) => {
                let items = items
                    .iter()
                    .map(|item| self.eval_expr(item, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::sequence(items))
            }
        }
    }

    fn eval_key(&self, property: &Property, env: &Environment) -> Result<Key, EvalError> {
        Ok(match property {
            Property::Named(name) => Key::Name(name.clone()),
            Property::Computed(index) => Key::Value(self.eval_expr(index, env)?),
        })
    }

    /// `target = value` and `target op= value`.
    ///
    /// The target's object and key are evaluated once, before the right-hand
    /// side. Compound forms read the current value before the right-hand side
    /// too.
    fn eval_assign(
        &self,
        target: &AssignTarget,
        op: Option<BinaryOp>,
        value: &Expr,
        env: &Environment,
        span: Span,
    ) -> EvalResult {
        match target {
            AssignTarget::Ident(name) => {
                let current = match op {
                    Some(_) => Some(env.lookup(name).map_err(|e| e.at(span))?),
                    None => None,
                };
                let rhs = self.eval_expr(value, env)?;
                let new_value = combine(op, current, rhs).map_err(|e| e.at(span))?;
                env.assign(name, new_value.clone())
                    .map_err(|e| e.at(span))?;
                Ok(new_value)
            }
            AssignTarget::Member { object, property } => {
                let object = self.eval_expr(object, env)?;
                let key = self.eval_key(property, env)?;
                let current = match op {
                    Some(_) => Some(get_member(&object, &key).map_err(|e| e.at(span))?),
                    None => None,
                };
                let rhs = self.eval_expr(value, env)?;
                let new_value = combine(op, current, rhs).map_err(|e| e.at(span))?;
                set_member(&object, &key, new_value.clone()).map_err(|e| e.at(span))?;
                Ok(new_value)
            }
        }
    }
}

fn combine(op: Option<BinaryOp>, current: Option<Value>, rhs: Value) -> EvalResult {
    match (op, current) {
        (Some(op), Some(current)) => binary(op, &current, &rhs),
        _ => Ok(rhs),
    }
}

/// Function value for `def` closed over `env`.
///
/// A named function expression sees its own name inside its body through
/// an extra scope between the body and `env`.
fn make_closure(def: &Rc<FunctionDef>, env: &Environment) -> EvalResult {
    let Some(name) = def.name.as_deref() else {
        return Ok(Value::Function(Rc::new(FunctionValue {
            def: Rc::clone(def),
            closure: env.clone(),
        })));
    };
    let scope = env.create_child();
    let function = Value::Function(Rc::new(FunctionValue {
        def: Rc::clone(def),
        closure: scope.clone(),
    }));
    scope.declare(name, function.clone(), Mutability::Immutable)?;
    Ok(function)
}

/// Convert `index` to a position in `[0, len)`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range and integrality are checked first"
)]
fn checked_index(index: f64, len: usize) -> Result<usize, EvalError> {
    if index.fract() == 0.0 && index >= 0.0 && index < len as f64 {
        Ok(index as usize)
    } else {
        Err(EvalError::index_out_of_bounds(index, len))
    }
}

fn get_member(object: &Value, key: &Key) -> EvalResult {
    match (object, key) {
        (Value::Record(record), key) => Ok(record
            .borrow()
            .get(&key.describe())
            .cloned()
            .unwrap_or(Value::Null)),

        (Value::Sequence(items), Key::Value(Value::Number(index))) => {
            let items = items.borrow();
            let index = checked_index(*index, items.len())?;
            Ok(items[index].clone())
        }
        (Value::Str(s), Key::Value(Value::Number(index))) => {
            let len = s.chars().count();
            let index = checked_index(*index, len)?;
            Ok(s.chars()
                .nth(index)
                .map_or(Value::Null, |c| Value::string(c.to_string())))
        }
        (Value::Sequence(_) | Value::Str(_), Key::Value(Value::Str(name))) => {
            get_member(object, &Key::Name(name.to_string()))
        }
        (Value::Sequence(_) | Value::Str(_), Key::Value(index)) => {
            Err(EvalError::type_mismatch(TypeMismatch::IndexType {
                target: object.type_name(),
                index: index.type_name(),
            }))
        }
        (Value::Sequence(items), Key::Name(name)) => Ok(if name == "length" {
            length(items.borrow().len())
        } else {
            Value::Null
        }),
        (Value::Str(s), Key::Name(name)) => Ok(if name == "length" {
            length(s.chars().count())
        } else {
            Value::Null
        }),

        (
            Value::Number(_) | Value::Bool(_) | Value::Null | Value::Function(_) | Value::Native(_),
            key,
        ) => Err(EvalError::type_mismatch(TypeMismatch::PropertyAccess {
            property: key.describe(),
            target: object.type_name(),
        })),
    }
}

fn set_member(object: &Value, key: &Key, value: Value) -> Result<(), EvalError> {
    match (object, key) {
        (Value::Record(record), key) => {
            record.borrow_mut().insert(key.describe(), value);
            Ok(())
        }
        (Value::Sequence(items), Key::Value(Value::Number(index))) => {
            let mut items = items.borrow_mut();
            let index = checked_index(*index, items.len())?;
            items[index] = value;
            Ok(())
        }
        (Value::Sequence(_), Key::Value(index)) => {
            Err(EvalError::type_mismatch(TypeMismatch::IndexType {
                target: object.type_name(),
                index: index.type_name(),
            }))
        }
        (
            Value::Sequence(_)
            | Value::Number(_)
            | Value::Str(_)
            | Value::Bool(_)
            | Value::Null
            | Value::Function(_)
            | Value::Native(_),
            key,
        ) => Err(EvalError::type_mismatch(TypeMismatch::PropertyAssignment {
            property: key.describe(),
            target: object.type_name(),
        })),
    }
}

#[allow(clippy::cast_precision_loss)]
fn length(len: usize) -> Value {
    Value::Number(len as f64)
}
