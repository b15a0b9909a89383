use super::*;
use pretty_assertions::assert_eq;
use tarn_diagnostic::ErrorCode;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_var_declaration() {
    let interner = StringInterner::new();
    let output = lex("var x = 42;", &interner);

    assert!(!output.has_errors());
    let tokens = &output.tokens;
    assert_eq!(tokens.len(), 6); // var, x, =, 42, ;, EOF
    assert!(matches!(tokens[0].kind, TokenKind::Var));
    assert!(matches!(tokens[1].kind, TokenKind::Ident(name) if interner.lookup(name) == "x"));
    assert!(matches!(tokens[2].kind, TokenKind::Eq));
    assert_eq!(tokens[3].kind.number_value(), Some(42.0));
    assert!(matches!(tokens[4].kind, TokenKind::Semicolon));
    assert!(matches!(tokens[5].kind, TokenKind::Eof));
    assert_eq!(tokens[5].span, Span::point(11));
}

#[test]
fn test_lex_operators_prefer_two_chars() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("! != = == < <= > >=", &interner),
        vec![
            TokenKind::Bang,
            TokenKind::BangEq,
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_punctuation() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("(){},.-+;*/", &interner),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_maximal_munch() {
    let interner = StringInterner::new();
    let tokens = lex("or orchid fun funny while", &interner).tokens;

    assert!(matches!(tokens[0].kind, TokenKind::Or));
    assert!(matches!(tokens[1].kind, TokenKind::Ident(n) if interner.lookup(n) == "orchid"));
    assert!(matches!(tokens[2].kind, TokenKind::Fun));
    assert!(matches!(tokens[3].kind, TokenKind::Ident(n) if interner.lookup(n) == "funny"));
    assert!(matches!(tokens[4].kind, TokenKind::While));
}

#[test]
fn test_reserved_words_are_keywords() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("class this super", &interner),
        vec![
            TokenKind::Class,
            TokenKind::This,
            TokenKind::Super,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_lex_numbers() {
    let interner = StringInterner::new();
    let tokens = lex("3 3.5 10.25", &interner).tokens;
    assert_eq!(tokens[0].kind.number_value(), Some(3.0));
    assert_eq!(tokens[1].kind.number_value(), Some(3.5));
    assert_eq!(tokens[2].kind.number_value(), Some(10.25));
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    let interner = StringInterner::new();
    let tokens = lex("1.;", &interner).tokens;

    assert_eq!(tokens[0].kind.number_value(), Some(1.0));
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert!(matches!(tokens[1].kind, TokenKind::Dot));
    assert!(matches!(tokens[2].kind, TokenKind::Semicolon));
}

#[test]
fn test_string_contents_exclude_quotes() {
    let interner = StringInterner::new();
    let source = "print \"hi there\";";
    let tokens = lex(source, &interner).tokens;

    let TokenKind::String(name) = tokens[1].kind else {
        panic!("expected string token, got {:?}", tokens[1].kind);
    };
    assert_eq!(interner.lookup(name), "hi there");
    assert_eq!(tokens[1].lexeme(source), "\"hi there\"");
}

#[test]
fn test_string_may_span_lines() {
    let interner = StringInterner::new();
    let output = lex("\"one\ntwo\"", &interner);

    assert!(!output.has_errors());
    assert!(matches!(output.tokens[0].kind, TokenKind::String(n) if interner.lookup(n) == "one\ntwo"));
}

#[test]
fn test_comments_are_skipped() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("// leading\nnil // trailing", &interner),
        vec![TokenKind::Nil, TokenKind::Eof]
    );
}

#[test]
fn test_unterminated_string() {
    let interner = StringInterner::new();
    let source = "print \"oops";
    let output = lex(source, &interner);

    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!(error.span, Span::new(6, 11));
    assert_eq!(error.code(), tarn_diagnostic::ErrorCode::E0001);

    // No string token; lexing resumes at end of input
    assert!(matches!(output.tokens[0].kind, TokenKind::Print));
    assert!(matches!(output.tokens[1].kind, TokenKind::Eof));
    assert_eq!(output.tokens.len(), 2);
}

#[test]
fn test_unexpected_characters_are_reported_and_skipped() {
    let interner = StringInterner::new();
    let output = lex("1 # 2 @", &interner);

    assert_eq!(
        output.errors,
        vec![
            LexError::new(LexErrorKind::UnexpectedChar('#'), Span::new(2, 3)),
            LexError::new(LexErrorKind::UnexpectedChar('@'), Span::new(6, 7)),
        ]
    );
    let numbers: Vec<_> = output
        .tokens
        .iter()
        .filter_map(|t| t.kind.number_value())
        .collect();
    assert_eq!(numbers, vec![1.0, 2.0]);
}

#[test]
fn test_unexpected_multibyte_character() {
    let interner = StringInterner::new();
    let output = lex("é", &interner);

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].span, Span::new(0, 2));
    assert_eq!(output.tokens.len(), 1);
}

#[test]
fn test_lex_error_diagnostic() {
    let error = LexError::new(LexErrorKind::UnexpectedChar('#'), Span::new(4, 5));
    let diag = error.to_diagnostic();

    assert_eq!(diag.message, "unexpected character `#`");
    assert_eq!(diag.offset(), 4);
    assert_eq!(diag.length(), 1);
}

#[test]
fn test_lazy_iterator_stops_after_eof() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("nil", &interner);

    assert!(matches!(lexer.next(), Some(t) if t.kind == TokenKind::Nil));
    assert!(matches!(lexer.next(), Some(t) if t.kind == TokenKind::Eof));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
    assert!(lexer.errors().is_empty());
}

#[test]
fn test_empty_source() {
    let interner = StringInterner::new();
    let output = lex("", &interner);
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].span, Span::point(0));
}

#[test]
fn test_oversized_source_is_rejected_without_scanning() {
    assert_eq!(source_too_large(u32::MAX as usize), None);

    let len = u32::MAX as usize + 1;
    let Some(error) = source_too_large(len) else {
        panic!("expected an oversized-source error");
    };
    assert_eq!(error.kind, LexErrorKind::SourceTooLarge { len });
    assert_eq!(error.code(), ErrorCode::E0003);

    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.offset(), 0);
    assert!(diagnostic.message.starts_with(&format!("source is {len} bytes")));
}
