//! Binary precedence levels and operator lookup.

use tarn_ir::{BinaryOp, TokenKind, UnaryOp};

/// Left-associative binary levels below `and`, loosest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Precedence {
    Equality,
    Comparison,
    Term,
    Factor,
}

impl Precedence {
    /// The next tighter level; `None` after `Factor`, where unary begins.
    pub(super) fn tighter(self) -> Option<Precedence> {
        match self {
            Precedence::Equality => Some(Precedence::Comparison),
            Precedence::Comparison => Some(Precedence::Term),
            Precedence::Term => Some(Precedence::Factor),
            Precedence::Factor => None,
        }
    }

    /// The operator `kind` spells at this level, if any.
    pub(super) fn binary_op(self, kind: TokenKind) -> Option<BinaryOp> {
        let op = match (self, kind) {
            (Precedence::Equality, TokenKind::EqEq) => BinaryOp::Eq,
            (Precedence::Equality, TokenKind::BangEq) => BinaryOp::NotEq,
            (Precedence::Comparison, TokenKind::Lt) => BinaryOp::Lt,
            (Precedence::Comparison, TokenKind::LtEq) => BinaryOp::LtEq,
            (Precedence::Comparison, TokenKind::Gt) => BinaryOp::Gt,
            (Precedence::Comparison, TokenKind::GtEq) => BinaryOp::GtEq,
            (Precedence::Term, TokenKind::Plus) => BinaryOp::Add,
            (Precedence::Term, TokenKind::Minus) => BinaryOp::Sub,
            (Precedence::Factor, TokenKind::Star) => BinaryOp::Mul,
            (Precedence::Factor, TokenKind::Slash) => BinaryOp::Div,
            _ => return None,
        };
        Some(op)
    }
}

/// Prefix operator spelled by `kind`.
pub(super) fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        _ => None,
    }
}
