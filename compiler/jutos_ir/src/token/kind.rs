//! Token kinds.

use std::fmt;

use super::Keyword;

/// Coarse classification of a token, as seen by tools such as highlighters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenCategory {
    Identifier,
    Keyword,
    Number,
    String,
    Operator,
    Punctuation,
    EndOfInput,
}

impl TokenCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Identifier => "identifier",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Number => "number",
            TokenCategory::String => "string",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::EndOfInput => "eof",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds.
///
/// Literal payloads are already decoded: numbers are parsed and string
/// escapes are resolved. Identifier text is the token's lexeme.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Ident,
    Keyword(Keyword),
    Number(f64),
    Str(String),

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Dot,
    Colon,

    // Operators
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    AmpAmp,
    PipePipe,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,

    Eof,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Ident => TokenCategory::Identifier,
            TokenKind::Keyword(_) => TokenCategory::Keyword,
            TokenKind::Number(_) => TokenCategory::Number,
            TokenKind::Str(_) => TokenCategory::String,
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Dot
            | TokenKind::Colon => TokenCategory::Punctuation,
            TokenKind::Eq
            | TokenKind::EqEq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::Gt
            | TokenKind::GtEq
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Bang
            | TokenKind::AmpAmp
            | TokenKind::PipePipe
            | TokenKind::PlusEq
            | TokenKind::MinusEq
            | TokenKind::StarEq
            | TokenKind::SlashEq
            | TokenKind::PercentEq => TokenCategory::Operator,
            TokenKind::Eof => TokenCategory::EndOfInput,
        }
    }

    /// Fixed spelling for punctuation, operators and keywords.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::Ident | TokenKind::Number(_) | TokenKind::Str(_) | TokenKind::Eof => {
                return None
            }
        };
        Some(symbol)
    }

    /// Short description used in "expected X" diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident => "identifier".to_string(),
            TokenKind::Number(_) => "number".to_string(),
            TokenKind::Str(_) => "string".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.symbol().unwrap_or_default()),
        }
    }

    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(kw) if *kw == keyword)
    }
}
