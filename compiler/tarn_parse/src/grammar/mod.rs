//! Grammar Modules
//!
//! Parsing implementations for Tarn syntax constructs.
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`expr`]: Expression parsing (operators, calls, primaries)
//! - [`stmt`]: Statements and blocks, including `for` desugaring
//!
//! Declarations (`fun`, `var`) live here, at the entry point of each
//! recovery unit.

mod expr;
mod stmt;

use std::rc::Rc;

use tarn_diagnostic::ErrorCode;
use tarn_ir::{FunctionDecl, Param, Stmt, StmtKind, TokenKind};
use tarn_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::recovery::{synchronize, BLOCK_RECOVERY, DECLARATION_START};
use crate::{ParseError, Parser};

/// Most parameters a function may declare, and most arguments a call may pass.
pub(crate) const MAX_ARITY: usize = 255;

impl Parser<'_> {
    /// Parse one declaration, recovering on failure.
    ///
    /// Returns `None` when the declaration failed; its error has been recorded
    /// and the cursor sits at the next recovery point.
    pub(crate) fn parse_declaration(&mut self) -> Option<Stmt> {
        let start = self.cursor.position();
        let result = ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::Fun => self.parse_function(),
            TokenKind::Var => self.parse_var_decl(),
            _ => self.parse_statement(),
        });

        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                debug!(code = %error.code, span = %error.span, "recovering from parse error");
                self.errors.push(error);
                let recovery = if self.block_depth > 0 {
                    BLOCK_RECOVERY
                } else {
                    DECLARATION_START
                };
                synchronize(&mut self.cursor, recovery, start);
                None
            }
        }
    }

    /// Parse `fun name(params) { body }`.
    fn parse_function(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let (name, name_span) = self.expect_ident("expected function name")?;
        let open = self
            .expect(&TokenKind::LParen, "expected `(` after function name")?
            .span;

        let mut params: Vec<Param> = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                if params.len() == MAX_ARITY {
                    let error = self.cursor.error_here(
                        ErrorCode::E1006,
                        &format!("can't have more than {MAX_ARITY} parameters"),
                    );
                    self.report(error);
                }
                let (param, span) = self.expect_ident("expected parameter name")?;
                if params.iter().any(|p| p.name == param) {
                    let message = format!("duplicate parameter `{}`", self.interner().lookup(param));
                    self.report(
                        ParseError::new(ErrorCode::E1008, message, span)
                            .with_context("already declared in this parameter list"),
                    );
                }
                params.push(Param { name: param, span });

                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }
        self.expect_closing(&TokenKind::RParen, open, "expected `)` after parameters")?;

        self.function_depth += 1;
        let body = self.parse_block("expected `{` before function body");
        self.function_depth -= 1;
        let body = body?;

        let span = start.merge(body.span);
        Ok(Stmt::new(
            StmtKind::Function(Rc::new(FunctionDecl {
                name,
                name_span,
                params,
                body,
            })),
            span,
        ))
    }

    /// Parse `var name (= initializer)? ;`.
    pub(crate) fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let (name, name_span) = self.expect_ident("expected variable name")?;

        let initializer = if self.check(&TokenKind::Eq) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };

        let end = self
            .expect(&TokenKind::Semicolon, "expected `;` after variable declaration")?
            .span;
        Ok(Stmt::new(
            StmtKind::Var {
                name,
                name_span,
                initializer,
            },
            start.merge(end),
        ))
    }
}
