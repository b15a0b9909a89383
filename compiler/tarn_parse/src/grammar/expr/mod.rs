//! Expression parsing.
//!
//! This module extends Parser with methods for parsing expressions,
//! from assignment down through the binary precedence chain.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`), assignment, logical and binary levels
//! - `operators.rs`: Precedence levels and operator lookup
//! - `postfix.rs`: Call suffixes
//! - `primary.rs`: Literals, identifiers, groupings

mod operators;
mod postfix;
mod primary;

use operators::{unary_op, Precedence};

use tarn_diagnostic::ErrorCode;
use tarn_ir::{BinaryOp, Expr, ExprKind, LogicalOp, Span, TokenKind};
use tarn_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// Parse `name = value` (right-associative) or fall through to `or`.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_logical_or()?;

        if !self.check(&TokenKind::Eq) {
            return Ok(target);
        }
        let eq_span = self.advance().span;
        let value = self.parse_expr()?;

        if let ExprKind::Variable(name) = target.kind {
            let span = target.span.merge(value.span);
            return Ok(Expr::new(
                ExprKind::Assign {
                    name,
                    name_span: target.span,
                    value: Box::new(value),
                },
                span,
            ));
        }

        self.report(
            ParseError::new(ErrorCode::E1005, "invalid assignment target", eq_span)
                .with_context("only a variable can be assigned to"),
        );
        Ok(value)
    }

    /// Parse `or` (lowest precedence binary).
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.check(&TokenKind::Or) {
            let op_span = self.advance().span;
            let right = self.parse_logical_and()?;
            left = logical(left, LogicalOp::Or, op_span, right);
        }

        Ok(left)
    }

    /// Parse `and`.
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_binary(Precedence::Equality)?;

        while self.check(&TokenKind::And) {
            let op_span = self.advance().span;
            let right = self.parse_binary(Precedence::Equality)?;
            left = logical(left, LogicalOp::And, op_span, right);
        }

        Ok(left)
    }

    /// Parse one left-associative binary level and everything tighter.
    fn parse_binary(&mut self, level: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_operand(level)?;

        while let Some(op) = level.binary_op(self.current_kind()) {
            let op_span = self.advance().span;
            let right = self.parse_operand(level)?;
            left = binary(left, op, op_span, right);
        }

        Ok(left)
    }

    /// Parse an operand of `level`: the next tighter level, or a unary.
    fn parse_operand(&mut self, level: Precedence) -> Result<Expr, ParseError> {
        match level.tighter() {
            Some(next) => self.parse_binary(next),
            None => self.parse_unary(),
        }
    }

    /// Parse prefix `!` and `-`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = unary_op(self.current_kind()) else {
            return self.parse_call();
        };
        let op_span = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = op_span.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                op_span,
                operand: Box::new(operand),
            },
            span,
        ))
    }
}

fn binary(left: Expr, op: BinaryOp, op_span: Span, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            op_span,
            right: Box::new(right),
        },
        span,
    )
}

fn logical(left: Expr, op: LogicalOp, op_span: Span, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Logical {
            left: Box::new(left),
            op,
            op_span,
            right: Box::new(right),
        },
        span,
    )
}
