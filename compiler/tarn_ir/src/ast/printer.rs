//! S-expression rendering of the AST.
//!
//! Fully parenthesized output makes precedence and desugaring visible, so
//! it backs both `tarn parse` and the interpreter's debug tracing.

use std::fmt::{self, Display, Formatter};

use super::{Block, Expr, ExprKind, Literal, Stmt, StmtKind};
use crate::StringInterner;

/// Display adapter printing an expression as an S-expression.
///
/// `1 + 2 * 3` prints as `(+ 1 (* 2 3))`.
pub struct SExpr<'a> {
    expr: &'a Expr,
    interner: &'a StringInterner,
}

impl<'a> SExpr<'a> {
    pub fn new(expr: &'a Expr, interner: &'a StringInterner) -> Self {
        SExpr { expr, interner }
    }

    fn child(&self, expr: &'a Expr) -> SExpr<'a> {
        SExpr::new(expr, self.interner)
    }
}

impl Display for SExpr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.expr.kind {
            ExprKind::Assign { name, value, .. } => {
                write!(
                    f,
                    "(= {} {})",
                    self.interner.lookup(*name),
                    self.child(value)
                )
            }
            ExprKind::Binary {
                left, op, right, ..
            } => write!(
                f,
                "({} {} {})",
                op.as_symbol(),
                self.child(left),
                self.child(right)
            ),
            ExprKind::Call { callee, args, .. } => {
                write!(f, "(call {}", self.child(callee))?;
                for arg in args {
                    write!(f, " {}", self.child(arg))?;
                }
                write!(f, ")")
            }
            ExprKind::Grouping(inner) => write!(f, "(group {})", self.child(inner)),
            ExprKind::Literal(lit) => match lit {
                Literal::Nil => write!(f, "nil"),
                Literal::Bool(b) => write!(f, "{b}"),
                Literal::Number(n) => write!(f, "{n}"),
                Literal::Str(s) => write!(f, "{:?}", self.interner.lookup(*s)),
            },
            ExprKind::Logical {
                left, op, right, ..
            } => write!(
                f,
                "({} {} {})",
                op.as_symbol(),
                self.child(left),
                self.child(right)
            ),
            ExprKind::Unary { op, operand, .. } => {
                write!(f, "({} {})", op.as_symbol(), self.child(operand))
            }
            ExprKind::Variable(name) => write!(f, "{}", self.interner.lookup(*name)),
        }
    }
}

/// Display adapter printing a statement as an S-expression.
pub struct SStmt<'a> {
    stmt: &'a Stmt,
    interner: &'a StringInterner,
}

impl<'a> SStmt<'a> {
    pub fn new(stmt: &'a Stmt, interner: &'a StringInterner) -> Self {
        SStmt { stmt, interner }
    }

    fn expr(&self, expr: &'a Expr) -> SExpr<'a> {
        SExpr::new(expr, self.interner)
    }

    fn block(&self, f: &mut Formatter<'_>, block: &Block) -> fmt::Result {
        write!(f, "(block")?;
        for stmt in &block.stmts {
            write!(f, " {}", SStmt::new(stmt, self.interner))?;
        }
        write!(f, ")")
    }
}

impl Display for SStmt<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.stmt.kind {
            StmtKind::Block(block) => self.block(f, block),
            StmtKind::Expression(expr) => write!(f, "(expr {})", self.expr(expr)),
            StmtKind::Function(decl) => {
                write!(f, "(fun {} (", self.interner.lookup(decl.name))?;
                for (i, param) in decl.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", self.interner.lookup(param.name))?;
                }
                write!(f, ") ")?;
                self.block(f, &decl.body)?;
                write!(f, ")")
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "(if {} ", self.expr(condition))?;
                self.block(f, then_branch)?;
                if let Some(else_branch) = else_branch {
                    write!(f, " ")?;
                    self.block(f, else_branch)?;
                }
                write!(f, ")")
            }
            StmtKind::Print(expr) => write!(f, "(print {})", self.expr(expr)),
            StmtKind::Return { value: Some(v), .. } => write!(f, "(return {})", self.expr(v)),
            StmtKind::Return { value: None, .. } => write!(f, "(return)"),
            StmtKind::While { condition, body } => {
                write!(f, "(while {} ", self.expr(condition))?;
                self.block(f, body)?;
                write!(f, ")")
            }
            StmtKind::Var {
                name, initializer, ..
            } => match initializer {
                Some(init) => write!(
                    f,
                    "(var {} {})",
                    self.interner.lookup(*name),
                    self.expr(init)
                ),
                None => write!(f, "(var {})", self.interner.lookup(*name)),
            },
        }
    }
}
