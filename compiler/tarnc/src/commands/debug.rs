//! Debug commands: `lex` and `parse` for inspecting the front end.

use tarn_ir::{SStmt, SharedInterner};

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let interner = SharedInterner::new();
    let output = tarn_lexer::lex(&content, &interner);

    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for token in output.tokens.iter() {
        println!("  {token:?}  {}", token.lexeme(&content));
    }

    if output.has_errors() {
        println!();
        println!("Errors:");
        for error in &output.errors {
            println!("  {}: {}", error.span, error.message());
        }
    }
}

/// Parse a file and display each statement as an S-expression.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let interner = SharedInterner::new();
    let lexed = tarn_lexer::lex(&content, &interner);
    let parsed = tarn_parse::parse(&lexed.tokens, &interner);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", parsed.statements.len());
    println!("  Errors: {}", lexed.errors.len() + parsed.errors.len());

    if !parsed.statements.is_empty() {
        println!();
        for stmt in &parsed.statements {
            println!("{}", SStmt::new(stmt, &interner));
        }
    }

    if lexed.has_errors() || parsed.has_errors() {
        println!();
        println!("Errors:");
        for error in &lexed.errors {
            println!("  {}: {}", error.span, error.message());
        }
        for error in &parsed.errors {
            println!("  {}: {}", error.span, error.message);
        }
    }
}
