//! Parse error types.
//!
//! Parsing stops at the first error. A [`ParseError`] names what went wrong
//! ([`ParseErrorKind`]), the offending span, and the 1-based position of the
//! span's start. Lexical errors surface through the parser unchanged, wrapped
//! in [`ParseErrorKind::Lex`].

use jutos_ir::{Keyword, Position, Span};
use jutos_lexer::{LexError, LexErrorKind};

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, position: Position) -> Self {
        ParseError {
            kind,
            span,
            position,
        }
    }

    /// The human-readable message, without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            kind: ParseErrorKind::Lex(err.kind),
            span: err.span,
            position: err.position,
        }
    }
}

/// What kind of syntax error occurred.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The token at this position cannot continue the construct.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// `=` (or a compound assignment) whose left side is not a variable or
    /// member expression.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    /// A parameter name repeated within one parameter list.
    #[error("duplicate parameter `{name}`")]
    DuplicateParameter { name: String },

    /// `let x;` / `const x;`
    #[error("missing initializer in declaration of `{name}`")]
    MissingInitializer { name: String },

    /// A reserved word without a grammar production.
    #[error("`{keyword}` is reserved but not supported")]
    Unsupported { keyword: Keyword },

    /// `break` or `continue` with no enclosing loop in the same function.
    #[error("`{keyword}` outside of a loop")]
    ControlOutsideLoop { keyword: Keyword },

    #[error(transparent)]
    Lex(LexErrorKind),
}

impl ParseErrorKind {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => "E2001",
            ParseErrorKind::InvalidAssignmentTarget => "E2002",
            ParseErrorKind::DuplicateParameter { .. } => "E2003",
            ParseErrorKind::MissingInitializer { .. } => "E2004",
            ParseErrorKind::Unsupported { .. } => "E2005",
            ParseErrorKind::ControlOutsideLoop { .. } => "E2006",
            ParseErrorKind::Lex(kind) => kind.code(),
        }
    }
}
