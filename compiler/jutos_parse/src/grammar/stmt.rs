//! Statements, blocks and function definitions.

use std::rc::Rc;

use jutos_ir::{Block, Expr, FunctionDef, Keyword, Span, Stmt, StmtKind, TokenKind};
use jutos_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse one statement. Empty statements (`;`) yield `None`.
    pub(crate) fn statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<Option<Stmt>, ParseError> {
        let start = self.cursor.current_span();
        trace!(token = ?self.cursor.current_kind(), %start, "statement");

        if self.cursor.eat(&TokenKind::Semicolon) {
            return Ok(None);
        }
        if self.cursor.check(&TokenKind::LBrace) {
            let block = self.block()?;
            let span = block.span;
            return Ok(Some(Stmt::new(StmtKind::Block(block), span)));
        }

        let keyword = match self.cursor.current_kind() {
            TokenKind::Keyword(keyword) => Some(*keyword),
            _ => None,
        };
        let kind = match keyword {
            Some(Keyword::Let | Keyword::Const) => {
                let declaration = self.variable_declaration()?;
                self.cursor.expect(&TokenKind::Semicolon)?;
                declaration
            }
            Some(Keyword::Fn) if matches!(self.cursor.peek_kind(1), TokenKind::Ident) => {
                StmtKind::FunctionDeclaration(self.function(true)?)
            }
            Some(Keyword::If) => self.if_statement()?,
            Some(Keyword::While) => self.while_statement()?,
            Some(Keyword::For) => self.for_statement()?,
            Some(Keyword::Return) => self.return_statement()?,
            Some(keyword @ (Keyword::Break | Keyword::Continue)) => self.loop_control(keyword)?,
            _ => {
                let expr = self.expression()?;
                self.cursor.expect(&TokenKind::Semicolon)?;
                StmtKind::Expression(expr)
            }
        };
        Ok(Some(Stmt::new(kind, start.merge(self.cursor.previous_span()))))
    }

    /// `let name = init` / `const name = init`, without the trailing `;`.
    fn variable_declaration(&mut self) -> Result<StmtKind, ParseError> {
        let mutable = self.cursor.advance().kind.is_keyword(Keyword::Let);
        let (name, name_span) = self.cursor.expect_ident()?;
        if self.cursor.check(&TokenKind::Semicolon) || self.cursor.is_at_end() {
            return Err(self
                .cursor
                .error(ParseErrorKind::MissingInitializer { name }, name_span));
        }
        self.cursor.expect(&TokenKind::Eq)?;
        let init = self.expression()?;
        Ok(StmtKind::VariableDeclaration {
            name,
            mutable,
            init,
        })
    }

    /// `fn name? (params) { body }`
    pub(crate) fn function(&mut self, name_required: bool) -> Result<Rc<FunctionDef>, ParseError> {
        let start = self.cursor.expect_keyword(Keyword::Fn)?.span;
        let name = if name_required || self.cursor.check(&TokenKind::Ident) {
            Some(self.cursor.expect_ident()?.0)
        } else {
            None
        };

        self.cursor.expect(&TokenKind::LParen)?;
        let params = self.comma_list(&TokenKind::RParen, |p| p.cursor.expect_ident())?;
        let mut names: Vec<String> = Vec::with_capacity(params.len());
        for (param, span) in params {
            if names.contains(&param) {
                return Err(self
                    .cursor
                    .error(ParseErrorKind::DuplicateParameter { name: param }, span));
            }
            names.push(param);
        }

        let body = self.in_function(Self::block)?;
        Ok(Rc::new(FunctionDef {
            name,
            params: names,
            span: start.merge(body.span),
            body,
        }))
    }

    pub(crate) fn block(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.expect(&TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected("`}`"));
            }
            if let Some(stmt) = self.statement()? {
                stmts.push(stmt);
            }
        }
        let end = self.cursor.advance().span;
        Ok(Block::new(stmts, start.merge(end)))
    }

    /// `( expr )` around a statement's condition.
    fn condition(&mut self) -> Result<Expr, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let condition = self.expression()?;
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(condition)
    }

    fn if_statement(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect_keyword(Keyword::If)?;
        let condition = self.condition()?;
        let then_branch = self.block()?;

        let else_branch = if self.cursor.check_keyword(Keyword::Else) {
            self.cursor.advance();
            let start = self.cursor.current_span();
            let kind = if self.cursor.check_keyword(Keyword::If) {
                ensure_sufficient_stack(|| self.if_statement())?
            } else {
                StmtKind::Block(self.block()?)
            };
            let span = start.merge(self.cursor.previous_span());
            Some(Box::new(Stmt::new(kind, span)))
        } else {
            None
        };

        Ok(StmtKind::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let condition = self.condition()?;
        let body = self.in_loop(Self::block)?;
        Ok(StmtKind::While { condition, body })
    }

    /// `for (init?; condition?; update?) { body }`
    fn for_statement(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect(&TokenKind::LParen)?;

        let init = if self.cursor.eat(&TokenKind::Semicolon) {
            None
        } else {
            let start = self.cursor.current_span();
            let kind = if self.cursor.check_keyword(Keyword::Let)
                || self.cursor.check_keyword(Keyword::Const)
            {
                self.variable_declaration()?
            } else {
                StmtKind::Expression(self.expression()?)
            };
            let init = Stmt::new(kind, start.merge(self.cursor.previous_span()));
            self.cursor.expect(&TokenKind::Semicolon)?;
            Some(Box::new(init))
        };

        let condition = if self.cursor.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor.expect(&TokenKind::Semicolon)?;

        let update = if self.cursor.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor.expect(&TokenKind::RParen)?;

        let body = self.in_loop(Self::block)?;
        Ok(StmtKind::For {
            init,
            condition,
            update,
            body,
        })
    }

    fn return_statement(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let value = if self.cursor.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(StmtKind::Return(value))
    }

    fn loop_control(&mut self, keyword: Keyword) -> Result<StmtKind, ParseError> {
        let span: Span = self.cursor.advance().span;
        if self.loop_depth == 0 {
            return Err(self
                .cursor
                .error(ParseErrorKind::ControlOutsideLoop { keyword }, span));
        }
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(if keyword == Keyword::Break {
            StmtKind::Break
        } else {
            StmtKind::Continue
        })
    }
}
