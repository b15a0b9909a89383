//! Token kinds for Tarn.

use std::fmt;

use crate::Name;

/// Token kinds for Tarn.
///
/// Number literals store f64 bits as u64 so the enum can derive `Eq` and
/// `Hash`. String and identifier payloads are interned.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One- or two-character operators
    Bang,
    BangEq,
    Eq,
    EqEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    /// Identifier (interned)
    Ident(Name),
    /// String literal contents without the quotes (interned)
    String(Name),
    /// Number literal: 42, 3.5 (stored as bits for Eq/Hash)
    Number(u64),

    // Keywords
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Number of distinct token kinds.
    pub const COUNT: usize = 39;

    /// Build a number token from its value.
    #[inline]
    pub fn number(value: f64) -> Self {
        TokenKind::Number(value.to_bits())
    }

    /// The value of a number token, if this is one.
    #[inline]
    pub fn number_value(&self) -> Option<f64> {
        match self {
            TokenKind::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Get a stable index for this kind, ignoring any payload.
    ///
    /// Used for O(1) bitset membership testing in the parser's `TokenSet`.
    #[inline]
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            Self::LParen => 0,
            Self::RParen => 1,
            Self::LBrace => 2,
            Self::RBrace => 3,
            Self::Comma => 4,
            Self::Dot => 5,
            Self::Minus => 6,
            Self::Plus => 7,
            Self::Semicolon => 8,
            Self::Slash => 9,
            Self::Star => 10,
            Self::Bang => 11,
            Self::BangEq => 12,
            Self::Eq => 13,
            Self::EqEq => 14,
            Self::Gt => 15,
            Self::GtEq => 16,
            Self::Lt => 17,
            Self::LtEq => 18,
            Self::Ident(_) => 19,
            Self::String(_) => 20,
            Self::Number(_) => 21,
            Self::And => 22,
            Self::Class => 23,
            Self::Else => 24,
            Self::False => 25,
            Self::For => 26,
            Self::Fun => 27,
            Self::If => 28,
            Self::Nil => 29,
            Self::Or => 30,
            Self::Print => 31,
            Self::Return => 32,
            Self::Super => 33,
            Self::This => 34,
            Self::True => 35,
            Self::Var => 36,
            Self::While => 37,
            Self::Eof => 38,
        }
    }

    /// Check if this token is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Get a human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEq => "!=",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Ident(_) => "identifier",
            TokenKind::String(_) => "string",
            TokenKind::Number(_) => "number",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Fun => "fun",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            TokenKind::String(name) => write!(f, "String({name:?})"),
            TokenKind::Ident(name) => write!(f, "Ident({name:?})"),
            TokenKind::Eof => write!(f, "Eof"),
            _ => write!(f, "{}", self.display_name()),
        }
    }
}
