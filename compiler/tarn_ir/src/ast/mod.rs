//! Abstract syntax tree.
//!
//! Expressions and statements are plain owned trees: every child is boxed
//! inside its parent and nothing points back up. The one shared node is
//! [`FunctionDecl`], held by `Rc` so a runtime function value can keep its
//! body alive after the submission that declared it has been dropped.

mod operators;
mod printer;

use std::rc::Rc;

use crate::{Name, Span};

pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use printer::{SExpr, SStmt};

/// Literal values as written in source.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    /// String contents without the quotes (interned).
    Str(Name),
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// `name = value`
    Assign {
        name: Name,
        name_span: Span,
        value: Box<Expr>,
    },
    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        op_span: Span,
        right: Box<Expr>,
    },
    /// `callee(args...)`
    ///
    /// `paren` is the closing parenthesis; call-site errors point there.
    Call {
        callee: Box<Expr>,
        paren: Span,
        args: Vec<Expr>,
    },
    /// `(inner)`
    Grouping(Box<Expr>),
    Literal(Literal),
    /// `left and right`, `left or right`
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        op_span: Span,
        right: Box<Expr>,
    },
    /// `op operand`
    Unary {
        op: UnaryOp,
        op_span: Span,
        operand: Box<Expr>,
    },
    Variable(Name),
}

/// A braced sequence of declarations.
#[derive(Clone, PartialEq, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }
}

/// Function parameter.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}

/// `fun name(params) { body }`
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: Name,
    pub name_span: Span,
    pub params: Vec<Param>,
    pub body: Block,
}

impl FunctionDecl {
    /// Number of parameters the function takes.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement variants.
///
/// There is no `For`: the parser lowers `for` loops to a `Block` holding
/// the initializer and a `While`.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    Block(Block),
    /// Expression evaluated for its side effects.
    Expression(Expr),
    Function(Rc<FunctionDecl>),
    If {
        condition: Expr,
        then_branch: Block,
        else_branch: Option<Block>,
    },
    Print(Expr),
    Return {
        keyword: Span,
        value: Option<Expr>,
    },
    While {
        condition: Expr,
        body: Block,
    },
    Var {
        name: Name,
        name_span: Span,
        initializer: Option<Expr>,
    },
}
