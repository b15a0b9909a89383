//! Primary expression parsing.

use tarn_diagnostic::ErrorCode;
use tarn_ir::{Expr, ExprKind, Literal, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a literal, variable, or parenthesized expression.
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let literal = match token.kind {
            TokenKind::False => Literal::Bool(false),
            TokenKind::True => Literal::Bool(true),
            TokenKind::Nil => Literal::Nil,
            TokenKind::Number(bits) => Literal::Number(f64::from_bits(bits)),
            TokenKind::String(name) => Literal::Str(name),
            TokenKind::Ident(name) => {
                self.advance();
                return Ok(Expr::new(ExprKind::Variable(name), token.span));
            }
            TokenKind::LParen => return self.parse_grouping(),
            _ => {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::E1002, "expected expression"));
            }
        };
        self.advance();
        Ok(Expr::new(ExprKind::Literal(literal), token.span))
    }

    fn parse_grouping(&mut self) -> Result<Expr, ParseError> {
        let open = self.advance().span;
        let inner = self.parse_expr()?;
        let close = self
            .expect_closing(&TokenKind::RParen, open, "expected `)` after expression")?
            .span;
        Ok(Expr::new(
            ExprKind::Grouping(Box::new(inner)),
            open.merge(close),
        ))
    }
}
