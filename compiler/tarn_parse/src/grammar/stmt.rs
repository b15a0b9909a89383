//! Statement parsing.

use tarn_diagnostic::ErrorCode;
use tarn_ir::{Block, Expr, ExprKind, Literal, Span, Stmt, StmtKind, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::For => self.parse_for(),
            TokenKind::If => self.parse_if(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Return => self.parse_return(),
            TokenKind::While => self.parse_while(),
            TokenKind::LBrace => {
                let block = self.parse_block("expected `{`")?;
                let span = block.span;
                Ok(Stmt::new(StmtKind::Block(block), span))
            }
            _ => self.parse_expression_stmt(),
        }
    }

    /// Parse `{ declaration* }`.
    ///
    /// `open_message` is reported when the opening brace is missing.
    pub(crate) fn parse_block(&mut self, open_message: &str) -> Result<Block, ParseError> {
        let open = self.expect(&TokenKind::LBrace, open_message)?.span;

        self.block_depth += 1;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            if let Some(stmt) = self.parse_declaration() {
                stmts.push(stmt);
            }
        }
        self.block_depth -= 1;

        let close = self
            .expect_closing(&TokenKind::RBrace, open, "expected `}` after block")?
            .span;
        Ok(Block::new(stmts, open.merge(close)))
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let value = self.parse_expr()?;
        let end = self
            .expect(&TokenKind::Semicolon, "expected `;` after value")?
            .span;
        Ok(Stmt::new(StmtKind::Print(value), start.merge(end)))
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.advance().span;
        if self.function_depth == 0 {
            self.report(
                ParseError::new(
                    ErrorCode::E1009,
                    "cannot return from top-level code",
                    keyword,
                )
                .with_context("not inside a function"),
            );
        }

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let end = self
            .expect(&TokenKind::Semicolon, "expected `;` after return value")?
            .span;
        Ok(Stmt::new(
            StmtKind::Return { keyword, value },
            keyword.merge(end),
        ))
    }

    /// Parse `if cond { } (else { } | else if ...)?`.
    ///
    /// `else if` becomes an else block holding the nested `if`.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let condition = self.parse_expr()?;
        let then_branch = self.parse_block("expected `{` after if condition")?;

        let else_branch = if self.check(&TokenKind::Else) {
            self.advance();
            if self.check(&TokenKind::If) {
                let nested = self.parse_if()?;
                let span = nested.span;
                Some(Block::new(vec![nested], span))
            } else {
                Some(self.parse_block("expected `{` after `else`")?)
            }
        } else {
            None
        };

        let end = else_branch.as_ref().map_or(then_branch.span, |b| b.span);
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            start.merge(end),
        ))
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let condition = self.parse_expr()?;
        let body = self.parse_block("expected `{` after while condition")?;
        let span = start.merge(body.span);
        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    /// Parse a `for` loop, lowering it to a block around a `while`.
    ///
    /// `for init; cond; incr { body }` becomes
    /// `{ init; while cond { { body } incr; } }`, with a missing condition
    /// read as `true`.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;

        let initializer = match self.current_kind() {
            TokenKind::Semicolon => {
                self.advance();
                None
            }
            TokenKind::Var => Some(self.parse_var_decl()?),
            _ => Some(self.parse_expression_stmt()?),
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let condition_end = self
            .expect(&TokenKind::Semicolon, "expected `;` after loop condition")?
            .span;

        let increment = if self.check(&TokenKind::LBrace) {
            None
        } else {
            Some(self.parse_expr()?)
        };

        let body = self.parse_block("expected `{` after for clauses")?;
        let span = start.merge(body.span);
        trace!(
            has_initializer = initializer.is_some(),
            has_condition = condition.is_some(),
            has_increment = increment.is_some(),
            "desugaring for loop"
        );

        let mut inner_span = body.span;
        let mut inner = vec![Stmt::new(StmtKind::Block(body), inner_span)];
        if let Some(increment) = increment {
            inner_span = inner_span.merge(increment.span);
            let increment_span = increment.span;
            inner.push(Stmt::new(StmtKind::Expression(increment), increment_span));
        }
        let inner = Block::new(inner, inner_span);

        let condition = condition.unwrap_or_else(|| {
            Expr::new(
                ExprKind::Literal(Literal::Bool(true)),
                Span::point(condition_end.start),
            )
        });
        let while_stmt = Stmt::new(
            StmtKind::While {
                condition,
                body: inner,
            },
            span,
        );

        let mut outer = Vec::with_capacity(2);
        if let Some(initializer) = initializer {
            outer.push(initializer);
        }
        outer.push(while_stmt);
        Ok(Stmt::new(StmtKind::Block(Block::new(outer, span)), span))
    }

    fn parse_expression_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        let end = self
            .expect(&TokenKind::Semicolon, "expected `;` after expression")?
            .span;
        let span = expr.span.merge(end);
        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }
}
