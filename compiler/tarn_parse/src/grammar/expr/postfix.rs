//! Postfix expression parsing.
//!
//! Calls chain left to right: `f(1)(2)` calls the result of `f(1)`.

use tarn_diagnostic::ErrorCode;
use tarn_ir::{Expr, ExprKind, Span, TokenKind};

use crate::grammar::MAX_ARITY;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a primary followed by any number of call suffixes.
    pub(crate) fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        while self.check(&TokenKind::LParen) {
            let open = self.advance().span;
            expr = self.finish_call(expr, open)?;
        }

        Ok(expr)
    }

    /// Parse the argument list after the `(` at `open`, and the closing `)`.
    fn finish_call(&mut self, callee: Expr, open: Span) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                if args.len() == MAX_ARITY {
                    let error = self.cursor.error_here(
                        ErrorCode::E1007,
                        &format!("can't have more than {MAX_ARITY} arguments"),
                    );
                    self.report(error);
                }
                args.push(self.parse_expr()?);

                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }

        let paren = self
            .expect_closing(&TokenKind::RParen, open, "expected `)` after arguments")?
            .span;
        let span = callee.span.merge(paren);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                paren,
                args,
            },
            span,
        ))
    }
}
