use super::*;
use crate::Name;
use pretty_assertions::assert_eq;

#[test]
fn test_token_debug_format() {
    let token = Token::new(TokenKind::Plus, Span::new(4, 5));
    assert_eq!(format!("{token:?}"), "+ @ 4..5");

    let number = Token::new(TokenKind::number(3.5), Span::new(0, 3));
    assert_eq!(format!("{number:?}"), "Number(3.5) @ 0..3");
}

#[test]
fn test_lexeme_slices_source() {
    let source = "var count = 10;";
    let token = Token::new(TokenKind::Ident(Name::from_raw(1)), Span::new(4, 9));
    assert_eq!(token.lexeme(source), "count");
}

#[test]
fn test_number_round_trip() {
    let kind = TokenKind::number(0.1);
    assert_eq!(kind.number_value(), Some(0.1));
    assert_eq!(TokenKind::Plus.number_value(), None);
}

#[test]
fn test_discriminant_ignores_payload() {
    let a = TokenKind::Ident(Name::from_raw(1));
    let b = TokenKind::Ident(Name::from_raw(2));
    assert_ne!(a, b);
    assert_eq!(a.discriminant_index(), b.discriminant_index());
}

#[test]
fn test_discriminants_are_dense() {
    let kinds = [
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Semicolon,
        TokenKind::Slash,
        TokenKind::Star,
        TokenKind::Bang,
        TokenKind::BangEq,
        TokenKind::Eq,
        TokenKind::EqEq,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::Ident(Name::EMPTY),
        TokenKind::String(Name::EMPTY),
        TokenKind::Number(0),
        TokenKind::And,
        TokenKind::Class,
        TokenKind::Else,
        TokenKind::False,
        TokenKind::For,
        TokenKind::Fun,
        TokenKind::If,
        TokenKind::Nil,
        TokenKind::Or,
        TokenKind::Print,
        TokenKind::Return,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::True,
        TokenKind::Var,
        TokenKind::While,
        TokenKind::Eof,
    ];
    assert_eq!(kinds.len(), TokenKind::COUNT);
    for (expected, kind) in kinds.iter().enumerate() {
        assert_eq!(usize::from(kind.discriminant_index()), expected);
    }
}

#[test]
fn test_keyword_classification() {
    assert!(TokenKind::While.is_keyword());
    assert!(TokenKind::Class.is_keyword());
    assert!(!TokenKind::Ident(Name::EMPTY).is_keyword());
    assert!(!TokenKind::Eof.is_keyword());
}

#[test]
fn test_token_list_basics() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::dummy(TokenKind::Nil));
    list.push(Token::new(TokenKind::Eof, Span::point(3)));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].kind, TokenKind::Nil);
    assert!(matches!(list.last(), Some(t) if t.kind == TokenKind::Eof));
}
