//! Token cursor over the lazy lexer stream.
//!
//! Tokens are pulled from the lexer on demand and buffered only as far as the
//! grammar looks ahead (at most two tokens). The final `Eof` token is never
//! consumed, so `current()` is always valid.
//!
//! A lexical error ends the token stream: the cursor records it and stands in
//! an `Eof` at the error location, letting the grammar fail naturally there.
//! [`Parser::parse_program`](crate::Parser::parse_program) then reports
//! whichever of the two errors comes first in the source.

use std::collections::VecDeque;

use jutos_ir::{Keyword, Span, Token, TokenKind};
use jutos_lexer::{LexError, Lexer};

use crate::{ParseError, ParseErrorKind};

pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    lookahead: VecDeque<Token<'src>>,
    /// Returned by `current()` if the stream produced nothing at all.
    end: Token<'src>,
    previous_span: Span,
    lex_error: Option<LexError>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        let lexer = Lexer::new(source);
        let end_span = Span::from_range(source.len()..source.len());
        let end = Token::new(
            TokenKind::Eof,
            "",
            end_span,
            lexer.line_index().position(end_span.start),
        );
        let mut cursor = Cursor {
            lexer,
            lookahead: VecDeque::with_capacity(2),
            end,
            previous_span: Span::DUMMY,
            lex_error: None,
        };
        cursor.fill(1);
        cursor
    }

    fn fill(&mut self, count: usize) {
        while self.lookahead.len() < count {
            if self.lookahead.back().is_some_and(Token::is_eof) {
                return;
            }
            match self.lexer.next() {
                Some(Ok(token)) => self.lookahead.push_back(token),
                Some(Err(err)) => {
                    let stand_in =
                        Token::new(TokenKind::Eof, "", Span::point(err.span.start), err.position);
                    self.lex_error = Some(err);
                    self.lookahead.push_back(stand_in);
                }
                None => return,
            }
        }
    }

    #[inline]
    pub fn current(&self) -> &Token<'src> {
        self.lookahead.front().unwrap_or(&self.end)
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.previous_span
    }

    /// Kind of the token `offset` positions ahead (`0` is the current one).
    /// Past the end this is `Eof`.
    pub fn peek_kind(&mut self, offset: usize) -> &TokenKind {
        self.fill(offset + 1);
        let token = self
            .lookahead
            .get(offset)
            .or_else(|| self.lookahead.back())
            .unwrap_or(&self.end);
        &token.kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Compare the current token's kind, ignoring literal payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    #[inline]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current_kind().is_keyword(keyword)
    }

    /// Consume and return the current token. At `Eof` the token is returned
    /// but stays current.
    pub fn advance(&mut self) -> Token<'src> {
        let token = if self.is_at_end() {
            self.current().clone()
        } else {
            self.lookahead.pop_front().unwrap_or_else(|| self.end.clone())
        };
        self.previous_span = token.span;
        self.fill(1);
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token<'src>, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token<'src>, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(format!("`{keyword}`")))
        }
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self) -> Result<(String, Span), ParseError> {
        if self.check(&TokenKind::Ident) {
            let token = self.advance();
            Ok((token.lexeme.to_string(), token.span))
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// "expected X, found <current token>" at the current token.
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let found = self.current();
        self.error(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.describe(),
            },
            found.span,
        )
    }

    pub fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, span, self.lexer.line_index().position(span.start))
    }

    pub fn take_lex_error(&mut self) -> Option<LexError> {
        self.lex_error.take()
    }
}
