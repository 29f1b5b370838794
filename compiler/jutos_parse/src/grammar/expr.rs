//! Expression parsing: precedence climbing, postfix chains, literals.

use jutos_ir::{
    format_number, AssignTarget, BinaryOp, Expr, ExprKind, Keyword, LogicalOp, Property,
    RecordEntry, TokenKind, UnaryOp,
};
use jutos_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

/// An infix operator: arithmetic/comparison or short-circuiting.
#[derive(Copy, Clone)]
enum Infix {
    Binary(BinaryOp),
    Logical(LogicalOp),
}

impl Infix {
    fn from_token(kind: &TokenKind) -> Option<Infix> {
        let op = match kind {
            TokenKind::PipePipe => Infix::Logical(LogicalOp::Or),
            TokenKind::AmpAmp => Infix::Logical(LogicalOp::And),
            TokenKind::EqEq => Infix::Binary(BinaryOp::Eq),
            TokenKind::NotEq => Infix::Binary(BinaryOp::NotEq),
            TokenKind::Lt => Infix::Binary(BinaryOp::Lt),
            TokenKind::LtEq => Infix::Binary(BinaryOp::LtEq),
            TokenKind::Gt => Infix::Binary(BinaryOp::Gt),
            TokenKind::GtEq => Infix::Binary(BinaryOp::GtEq),
            TokenKind::Plus => Infix::Binary(BinaryOp::Add),
            TokenKind::Minus => Infix::Binary(BinaryOp::Sub),
            TokenKind::Star => Infix::Binary(BinaryOp::Mul),
            TokenKind::Slash => Infix::Binary(BinaryOp::Div),
            TokenKind::Percent => Infix::Binary(BinaryOp::Mod),
            _ => return None,
        };
        Some(op)
    }

    fn precedence(self) -> u8 {
        match self {
            Infix::Binary(op) => op.precedence(),
            Infix::Logical(op) => op.precedence(),
        }
    }
}

/// `=` maps to `Some(None)`, `op=` to `Some(Some(op))`.
fn assignment_op(kind: &TokenKind) -> Option<Option<BinaryOp>> {
    let op = match kind {
        TokenKind::Eq => None,
        TokenKind::PlusEq => Some(BinaryOp::Add),
        TokenKind::MinusEq => Some(BinaryOp::Sub),
        TokenKind::StarEq => Some(BinaryOp::Mul),
        TokenKind::SlashEq => Some(BinaryOp::Div),
        TokenKind::PercentEq => Some(BinaryOp::Mod),
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    /// Parse any expression.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Assignment is right-associative and only accepts identifier or
    /// member targets.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.binary(LogicalOp::Or.precedence())?;
        let Some(op) = assignment_op(self.cursor.current_kind()) else {
            return Ok(target);
        };

        let target_span = target.span;
        let target = match target.kind {
            ExprKind::Ident(name) => AssignTarget::Ident(name),
            ExprKind::Member { object, property } => AssignTarget::Member { object, property },
            _ => {
                return Err(self
                    .cursor
                    .error(ParseErrorKind::InvalidAssignmentTarget, target_span))
            }
        };
        self.cursor.advance();
        let value = self.expression()?;
        let span = target_span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assign {
                target,
                op,
                value: Box::new(value),
            },
            span,
        ))
    }

    /// Precedence climbing over the left-associative binary levels.
    fn binary(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;

        while let Some(op) = Infix::from_token(self.cursor.current_kind()) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.cursor.advance();
            let right = self.binary(precedence + 1)?;

            let span = left.span.merge(right.span);
            let left_box = Box::new(left);
            let right_box = Box::new(right);
            let kind = match op {
                Infix::Binary(op) => ExprKind::Binary {
                    op,
                    left: left_box,
                    right: right_box,
                },
                Infix::Logical(op) => ExprKind::Logical {
                    op,
                    left: left_box,
                    right: right_box,
                },
            };
            left = Expr::new(kind, span);
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.postfix(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.unary())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Calls, dot access and bracket access, applied left to right.
    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            let start = expr.span;
            let kind = match self.cursor.current_kind() {
                TokenKind::LParen => {
                    self.cursor.advance();
                    let args = self.comma_list(&TokenKind::RParen, Self::expression)?;
                    ExprKind::Call {
                        callee: Box::new(expr),
                        args,
                    }
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let name = self.property_name()?;
                    ExprKind::Member {
                        object: Box::new(expr),
                        property: Property::Named(name),
                    }
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let index = self.expression()?;
                    self.cursor.expect(&TokenKind::RBracket)?;
                    ExprKind::Member {
                        object: Box::new(expr),
                        property: Property::Computed(Box::new(index)),
                    }
                }
                _ => break,
            };
            expr = Expr::new(kind, start.merge(self.cursor.previous_span()));
        }

        Ok(expr)
    }

    /// Name after `.`; reserved words are allowed (`o.new`).
    fn property_name(&mut self) -> Result<String, ParseError> {
        if matches!(
            self.cursor.current_kind(),
            TokenKind::Ident | TokenKind::Keyword(_)
        ) {
            Ok(self.cursor.advance().lexeme.to_string())
        } else {
            Err(self.cursor.unexpected("property name"))
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let simple = match &token.kind {
            TokenKind::Number(value) => Some(ExprKind::Number(*value)),
            TokenKind::Str(value) => Some(ExprKind::Str(value.clone())),
            TokenKind::Ident => Some(ExprKind::Ident(token.lexeme.to_string())),
            TokenKind::Keyword(Keyword::True) => Some(ExprKind::Bool(true)),
            TokenKind::Keyword(Keyword::False) => Some(ExprKind::Bool(false)),
            TokenKind::Keyword(Keyword::Null) => Some(ExprKind::Null),
            _ => None,
        };
        if let Some(kind) = simple {
            let span = self.cursor.advance().span;
            return Ok(Expr::new(kind, span));
        }

        match self.cursor.current_kind() {
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::LBracket => {
                let start = self.cursor.advance().span;
                let elements = self.comma_list(&TokenKind::RBracket, Self::expression)?;
                Ok(Expr::new(
                    ExprKind::Sequence(elements),
                    start.merge(self.cursor.previous_span()),
                ))
            }
            TokenKind::LBrace => {
                let start = self.cursor.advance().span;
                let entries = self.comma_list(&TokenKind::RBrace, Self::record_entry)?;
                Ok(Expr::new(
                    ExprKind::Record(entries),
                    start.merge(self.cursor.previous_span()),
                ))
            }
            TokenKind::Keyword(Keyword::Fn) => {
                let def = self.function(false)?;
                let span = def.span;
                Ok(Expr::new(ExprKind::Function(def), span))
            }
            TokenKind::Keyword(keyword) if keyword.is_unsupported() => {
                let keyword = *keyword;
                Err(self.cursor.error(
                    ParseErrorKind::Unsupported { keyword },
                    self.cursor.current_span(),
                ))
            }
            _ => Err(self.cursor.unexpected("expression")),
        }
    }

    /// `key: value`, or the shorthand `name` for `name: name`.
    ///
    /// Keys may be identifiers, reserved words, strings or numbers; numeric
    /// keys are normalized to their printed form (`{1.0: x}` has key `"1"`).
    fn record_entry(&mut self) -> Result<RecordEntry, ParseError> {
        let token = self.cursor.current();
        let start = token.span;
        let (key, shorthand) = match &token.kind {
            TokenKind::Ident => (token.lexeme.to_string(), true),
            TokenKind::Keyword(_) => (token.lexeme.to_string(), false),
            TokenKind::Str(value) => (value.clone(), false),
            TokenKind::Number(value) => (format_number(*value), false),
            _ => return Err(self.cursor.unexpected("record key")),
        };
        self.cursor.advance();

        let value = if shorthand && !self.cursor.check(&TokenKind::Colon) {
            Expr::new(ExprKind::Ident(key.clone()), start)
        } else {
            self.cursor.expect(&TokenKind::Colon)?;
            self.expression()?
        };
        let span = start.merge(value.span);
        Ok(RecordEntry { key, value, span })
    }
}
