//! Property-based tests for the Tarn parser.
//!
//! Arbitrary token sequences must never panic the parser, and every parse
//! must terminate with errors that point inside the source.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tarn_ir::{StringInterner, Token, TokenKind, TokenList};
use tarn_lexer::lex;
use tarn_parse::parse;

const FRAGMENTS: &[&str] = &[
    "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "this",
    "true", "var", "while", "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "/", "!", "!=", "=",
    "==", "<", "<=", ">", ">=", "x", "y", "f", "1", "2.5", "\"s\"",
];

fn kind_strategy() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(vec![
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Eq,
        TokenKind::EqEq,
        TokenKind::Number(1.0f64.to_bits()),
        TokenKind::Nil,
        TokenKind::Fun,
        TokenKind::Var,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Print,
        TokenKind::Return,
        TokenKind::Class,
        TokenKind::Eof,
    ])
}

proptest! {
    #[test]
    fn parsing_fragment_soup_terminates(parts in prop::collection::vec(prop::sample::select(FRAGMENTS), 0..60)) {
        let source = parts.join(" ");
        let interner = StringInterner::new();
        let lexed = lex(&source, &interner);
        let result = parse(&lexed.tokens, &interner);

        for error in &result.errors {
            prop_assert!(error.span.end as usize <= source.len());
        }
        for stmt in &result.statements {
            prop_assert!(stmt.span.end as usize <= source.len());
        }
    }

    #[test]
    fn parsing_raw_tokens_never_panics(kinds in prop::collection::vec(kind_strategy(), 0..80)) {
        let interner = StringInterner::new();
        let tokens: TokenList = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let start = u32::try_from(i).unwrap();
                Token::new(kind, tarn_ir::Span::new(start, start + 1))
            })
            .collect();

        let result = parse(&tokens, &interner);
        prop_assert!(result.statements.len() <= tokens.len());
    }

    #[test]
    fn well_formed_prints_parse_cleanly(values in prop::collection::vec(0u32..1000, 1..20)) {
        let source: String = values.iter().map(|v| format!("print {v} + 1;\n")).collect();
        let interner = StringInterner::new();
        let lexed = lex(&source, &interner);
        let result = parse(&lexed.tokens, &interner);

        prop_assert!(!result.has_errors());
        prop_assert_eq!(result.statements.len(), values.len());
    }
}
