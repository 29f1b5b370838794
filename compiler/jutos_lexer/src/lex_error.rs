//! Lexer error types.

use jutos_ir::{Position, Span};

/// A lexical error: what went wrong and where.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Bytes consumed by the offending token up to the point of failure.
    pub span: Span,
    /// Start of the offending token.
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, position: Position) -> Self {
        LexError {
            kind,
            span,
            position,
        }
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character no token can start with (`#`, `@`, a lone `&`, ...).
    #[error("unexpected character `{found}`")]
    UnexpectedCharacter { found: char },

    /// A string literal missing its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// `/*` without a matching `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// A backslash escape the language does not define.
    #[error("invalid escape sequence `\\{escape}` in string literal")]
    InvalidEscape { escape: char },
}

impl LexErrorKind {
    /// Stable diagnostic code.
    pub const fn code(&self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter { .. } => "E1001",
            LexErrorKind::UnterminatedString => "E1002",
            LexErrorKind::UnterminatedComment => "E1003",
            LexErrorKind::InvalidEscape { .. } => "E1004",
        }
    }
}
