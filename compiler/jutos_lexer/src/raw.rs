//! Logos token definitions.
//!
//! `RawToken` is the DFA-level vocabulary. Literal payloads are decoded in
//! callbacks; keywords are split from identifiers afterwards so the reserved
//! set lives in one place (`jutos_ir::Keyword`).

use logos::{FilterResult, Logos};

use crate::escape::{self, StringError};

/// Error produced inside the logos state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ScanError {
    /// No token matches at this position.
    #[default]
    Unrecognized,
    UnterminatedString,
    UnterminatedComment,
    InvalidEscape(char),
}

impl From<StringError> for ScanError {
    fn from(err: StringError) -> Self {
        match err {
            StringError::Unterminated => ScanError::UnterminatedString,
            StringError::InvalidEscape(c) => ScanError::InvalidEscape(c),
        }
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = ScanError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    /// Never emitted: the callback skips the comment or fails.
    #[token("/*", block_comment)]
    BlockComment,

    // === Literals ===
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", decimal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", decimal)]
    #[regex(r"0[xX][0-9a-fA-F]+", hexadecimal)]
    Number(f64),

    #[token("\"", |lex| string(lex, '"'))]
    #[token("'", |lex| string(lex, '\''))]
    Str(String),

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,

    // === Operators ===
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
}

fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> FilterResult<(), ScanError> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(ScanError::UnterminatedComment)
        }
    }
}

fn decimal(lex: &mut logos::Lexer<'_, RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn hexadecimal(lex: &mut logos::Lexer<'_, RawToken>) -> f64 {
    // folded as f64 so literals wider than 64 bits lose precision, not validity
    lex.slice()[2..]
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0, |acc, digit| acc * 16.0 + f64::from(digit))
}

fn string(lex: &mut logos::Lexer<'_, RawToken>, quote: char) -> Result<String, ScanError> {
    match escape::scan_string(lex.remainder(), quote) {
        Ok((value, consumed)) => {
            lex.bump(consumed);
            Ok(value)
        }
        Err((err, consumed)) => {
            lex.bump(consumed);
            Err(err.into())
        }
    }
}
