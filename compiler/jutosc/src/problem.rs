//! Everything that can stop a program, in one type.
//!
//! A [`Problem`] is either a front-end failure (lexing or parsing, no code
//! ran) or a runtime failure. Rendering lives in [`crate::reporting`].

use jutos_eval::EvalError;
use jutos_ir::Span;
use jutos_parse::ParseError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Problem {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Problem {
    pub fn code(&self) -> &'static str {
        match self {
            Problem::Parse(err) => err.code(),
            Problem::Eval(err) => err.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Problem::Parse(err) => err.message(),
            Problem::Eval(err) => err.message(),
        }
    }

    /// Source range the problem points at, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Problem::Parse(err) => Some(err.span),
            Problem::Eval(err) => err.span,
        }
    }

    /// Short label for the failing phase.
    pub fn phase(&self) -> &'static str {
        match self {
            Problem::Parse(_) => "syntax error",
            Problem::Eval(_) => "runtime error",
        }
    }
}
