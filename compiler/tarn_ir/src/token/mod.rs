//! Token types for the Tarn lexer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token with its span in the source.
///
/// The lexeme is never stored; slice the source with the span instead.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }

    /// The source text this token was scanned from.
    #[inline]
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

// Token is stored once per lexeme; keep it compact.
// TokenKind (16 bytes) + Span (8 bytes) = 24 bytes
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(Token, 24);
    crate::static_assert_size!(TokenKind, 16);
}

#[cfg(test)]
mod tests;
