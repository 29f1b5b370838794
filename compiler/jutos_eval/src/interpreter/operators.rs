//! Binary and unary operator semantics.
//!
//! Dispatch is a direct match over `(operator, operand kinds)`. Arithmetic
//! follows IEEE-754: dividing by zero gives an infinity or `NaN`, never an
//! error.

use jutos_ir::{format_number, BinaryOp, UnaryOp};

use crate::{EvalError, EvalResult, TypeMismatch, Value};

#[cold]
fn operand_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::type_mismatch(TypeMismatch::BinaryOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

pub(super) fn binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Eq => Ok(Value::Bool(left.strict_equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.strict_equals(right))),
        BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(operand_mismatch(op, left, right));
            };
            Ok(numeric(op, *a, *b))
        }
    }
}

/// `+` adds numbers and concatenates strings. A number next to a string is
/// rendered and concatenated.
fn add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::string(format!("{a}{b}"))),
        (Value::Str(a), Value::Number(b)) => Ok(Value::string(format!("{a}{}", format_number(*b)))),
        (Value::Number(a), Value::Str(b)) => Ok(Value::string(format!("{}{b}", format_number(*a)))),
        _ => Err(operand_mismatch(BinaryOp::Add, left, right)),
    }
}

fn numeric(op: BinaryOp, a: f64, b: f64) -> Value {
    match op {
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Mod => Value::Number(a % b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
    }
}

pub(super) fn unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(EvalError::type_mismatch(TypeMismatch::UnaryOperand {
                op,
                operand: operand.type_name(),
            })),
        },
    }
}
