//! The public token stream.

use jutos_ir::{Keyword, LineIndex, Span, Token, TokenKind};
use logos::Logos;
use tracing::trace;

use crate::raw::{RawToken, ScanError};
use crate::{LexError, LexErrorKind};

/// Lazy, single-pass token stream over a source string.
///
/// Yields `Ok(token)` for every token, then exactly one `Eof` token, then
/// `None`. The first error is yielded as `Err` and ends the stream.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    lines: LineIndex<'src>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            lines: LineIndex::new(source),
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Line index of the source being lexed.
    pub fn line_index(&self) -> &LineIndex<'src> {
        &self.lines
    }

    fn eof(&self) -> Token<'src> {
        let span = Span::from_range(self.source.len()..self.source.len());
        Token::new(TokenKind::Eof, "", span, self.lines.position(span.start))
    }

    fn error(&self, err: ScanError, span: Span) -> LexError {
        let kind = match err {
            ScanError::Unrecognized => LexErrorKind::UnexpectedCharacter {
                found: self
                    .source
                    .get(span.start as usize..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            },
            ScanError::UnterminatedString => LexErrorKind::UnterminatedString,
            ScanError::UnterminatedComment => LexErrorKind::UnterminatedComment,
            ScanError::InvalidEscape(escape) => LexErrorKind::InvalidEscape { escape },
        };
        LexError::new(kind, span, self.lines.position(span.start))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(result) = self.raw.next() else {
            self.finished = true;
            return Some(Ok(self.eof()));
        };

        let span = Span::from_range(self.raw.span());
        match result {
            Ok(raw) => {
                let lexeme = self.raw.slice();
                let kind = convert(raw, lexeme);
                trace!(?kind, %span, "token");
                Some(Ok(Token::new(
                    kind,
                    lexeme,
                    span,
                    self.lines.position(span.start),
                )))
            }
            Err(err) => {
                self.finished = true;
                let err = self.error(err, span);
                trace!(error = %err, "lex error");
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

fn convert(raw: RawToken, lexeme: &str) -> TokenKind {
    match raw {
        RawToken::Number(value) => TokenKind::Number(value),
        RawToken::Str(value) => TokenKind::Str(value),
        RawToken::Ident => Keyword::from_ident(lexeme).map_or(TokenKind::Ident, TokenKind::Keyword),

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Colon => TokenKind::Colon,

        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::PercentEq => TokenKind::PercentEq,

        // skipped by its callback, so logos never yields it
        RawToken::BlockComment => TokenKind::Eof,
    }
}
