//! Runtime error types.
//!
//! Every runtime failure is an [`EvalError`]: a structured [`EvalErrorKind`]
//! plus the span of the node that raised it. Errors abort the evaluation and
//! propagate to the host unchanged; the language has no way to catch them.
//!
//! Control flow (`return`, `break`, `continue`) is *not* an error; it travels
//! as [`Flow`](crate::Flow) through statement evaluation instead.

use jutos_ir::{format_number, BinaryOp, Span, UnaryOp};

use crate::Value;

/// Result of evaluating an expression or calling a function.
pub type EvalResult = Result<Value, EvalError>;

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("`{name}` is not declared")]
    UndeclaredVariable { name: String },

    #[error("cannot assign to constant `{name}`")]
    ImmutableAssignment { name: String },

    #[error("`{name}` is already declared in this scope")]
    DeclarationConflict { name: String },

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: String, len: usize },

    #[error("`return` outside of a function")]
    ReturnOutsideFunction,

    /// The parser rejects stray `break`/`continue`, so only trees built by
    /// hand reach this.
    #[error("`{keyword}` outside of a loop")]
    LoopControlOutsideLoop { keyword: &'static str },

    #[error("maximum call depth of {limit} exceeded")]
    StackExhausted { limit: usize },
}

impl EvalErrorKind {
    /// Stable diagnostic code.
    pub const fn code(&self) -> &'static str {
        match self {
            EvalErrorKind::UndeclaredVariable { .. } => "E3001",
            EvalErrorKind::ImmutableAssignment { .. } => "E3002",
            EvalErrorKind::DeclarationConflict { .. } => "E3003",
            EvalErrorKind::TypeMismatch(_) => "E3004",
            EvalErrorKind::NotCallable { .. } => "E3005",
            EvalErrorKind::IndexOutOfBounds { .. } => "E3006",
            EvalErrorKind::ReturnOutsideFunction => "E3007",
            EvalErrorKind::LoopControlOutsideLoop { .. } => "E3008",
            EvalErrorKind::StackExhausted { .. } => "E3009",
        }
    }
}

/// The ways an operation can receive a value of the wrong kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeMismatch {
    #[error("cannot apply `{op}` to {left} and {right}")]
    BinaryOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("cannot apply `{op}` to {operand}")]
    UnaryOperand { op: UnaryOp, operand: &'static str },

    #[error("cannot read property `{property}` of {target}")]
    PropertyAccess {
        property: String,
        target: &'static str,
    },

    #[error("cannot set property `{property}` on {target}")]
    PropertyAssignment {
        property: String,
        target: &'static str,
    },

    #[error("{target} cannot be indexed by {index}")]
    IndexType {
        target: &'static str,
        index: &'static str,
    },

    #[error("{function}() expects {expected}, got {got}")]
    NativeArgument {
        function: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

/// A runtime error and where it happened.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Span of the innermost node that raised the error, when known.
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[cold]
    pub fn undeclared(name: &str) -> Self {
        Self::new(EvalErrorKind::UndeclaredVariable {
            name: name.to_string(),
        })
    }

    #[cold]
    pub fn immutable(name: &str) -> Self {
        Self::new(EvalErrorKind::ImmutableAssignment {
            name: name.to_string(),
        })
    }

    #[cold]
    pub fn declaration_conflict(name: &str) -> Self {
        Self::new(EvalErrorKind::DeclarationConflict {
            name: name.to_string(),
        })
    }

    #[cold]
    pub fn type_mismatch(mismatch: TypeMismatch) -> Self {
        Self::new(EvalErrorKind::TypeMismatch(mismatch))
    }

    #[cold]
    pub fn not_callable(type_name: &'static str) -> Self {
        Self::new(EvalErrorKind::NotCallable { type_name })
    }

    #[cold]
    pub fn index_out_of_bounds(index: f64, len: usize) -> Self {
        Self::new(EvalErrorKind::IndexOutOfBounds {
            index: format_number(index),
            len,
        })
    }

    #[cold]
    pub fn return_outside_function() -> Self {
        Self::new(EvalErrorKind::ReturnOutsideFunction)
    }

    #[cold]
    pub fn loop_control_outside_loop(keyword: &'static str) -> Self {
        Self::new(EvalErrorKind::LoopControlOutsideLoop { keyword })
    }

    #[cold]
    pub fn stack_exhausted(limit: usize) -> Self {
        Self::new(EvalErrorKind::StackExhausted { limit })
    }
}

impl From<TypeMismatch> for EvalError {
    fn from(mismatch: TypeMismatch) -> Self {
        EvalError::type_mismatch(mismatch)
    }
}
