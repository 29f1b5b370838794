//! Tokens produced by the lexer and consumed by the parser.

mod keyword;
mod kind;

pub use keyword::Keyword;
pub use kind::{TokenCategory, TokenKind};

use crate::{Position, Span};

/// A lexical unit borrowed from the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Exact source text of the token (empty for `Eof`).
    pub lexeme: &'src str,
    pub span: Span,
    pub position: Position,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span, position: Position) -> Self {
        Token {
            kind,
            lexeme,
            span,
            position,
        }
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Describe the token for "found X" diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.lexeme),
        }
    }
}
