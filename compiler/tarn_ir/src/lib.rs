//! Tarn IR - shared front-end types
//!
//! This crate contains the data structures every Tarn phase agrees on:
//! - Spans for source locations
//! - Names for interned identifiers and string literals
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`) and their operators
//! - An S-expression printer for inspecting expressions
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: identifier text maps to `Name(u32)`, so two
//!   tokens spelled the same way always name the same binding.
//! - **Owned trees**: AST children are boxed and owned by their parent.
//!   Function declarations are the one shared node; runtime function values
//!   keep them alive after the statement list that declared them is dropped.
//!
//! Types that contain floats store them as u64 bits where `Eq`/`Hash` is needed.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, FunctionDecl, Literal, LogicalOp, Param, SExpr, SStmt, Stmt,
    StmtKind, UnaryOp,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
