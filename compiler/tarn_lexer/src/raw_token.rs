//! Raw token from logos (before interning).

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // Keywords
    #[token("and")]
    And,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    // Operators
    #[token("!=")]
    BangEq,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,

    // Integer-valued number; a `.` without a following digit is left alone
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Integer(f64),

    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Decimal(f64),

    // String literal; no escapes, may span lines
    #[regex(r#""[^"]*""#)]
    String,

    // Opening quote with no closing quote before end of input
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
