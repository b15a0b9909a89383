//! Property-based tests for the Tarn lexer.
//!
//! Generated inputs check that lexing is total (always terminates with a
//! single `Eof`, never panics), deterministic, and lossless for source built
//! from valid tokens.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tarn_ir::{StringInterner, TokenKind};
use tarn_lexer::lex;

const KEYWORDS: &[&str] = &[
    "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "super",
    "this", "true", "var", "while",
];

const SYMBOLS: &[&str] = &[
    "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "/", "!", "!=", "=", "==", "<", "<=", ">",
    ">=",
];

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,10}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !KEYWORDS.contains(&s.as_str()))
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,5}(\\.[0-9]{1,3})?").expect("valid regex")
}

fn string_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\"[a-z0-9 ]{0,8}\"").expect("valid regex")
}

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(KEYWORDS).prop_map(|s| s.to_string()),
        prop::sample::select(SYMBOLS).prop_map(|s| s.to_string()),
        identifier_strategy(),
        number_strategy(),
        string_strategy(),
    ]
}

proptest! {
    #[test]
    fn lexing_is_total(source in ".{0,200}") {
        let interner = StringInterner::new();
        let output = lex(&source, &interner);

        let last = output.tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Eof);
        prop_assert_eq!(last.span.start as usize, source.len());
        prop_assert_eq!(
            output.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
        for token in &output.tokens {
            prop_assert!(source.get(token.span.to_range()).is_some());
        }
        for error in &output.errors {
            prop_assert!(error.span.end as usize <= source.len());
            prop_assert!(!error.span.is_empty());
        }
    }

    #[test]
    fn lexing_is_deterministic(source in ".{0,200}") {
        let interner = StringInterner::new();
        let first = lex(&source, &interner);
        let second = lex(&source, &interner);
        prop_assert_eq!(first.tokens, second.tokens);
        prop_assert_eq!(first.errors, second.errors);
    }

    #[test]
    fn lexemes_reproduce_valid_tokens(parts in prop::collection::vec(token_strategy(), 0..30)) {
        let source = parts.join(" ");
        let interner = StringInterner::new();
        let output = lex(&source, &interner);

        prop_assert!(!output.has_errors());
        let lexemes: Vec<&str> = output
            .tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.lexeme(&source))
            .collect();
        prop_assert_eq!(lexemes, parts.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    }
}
