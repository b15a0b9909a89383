//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `expressions`: precedence, associativity, calls, and spans
//! - `statements`: declarations, control flow, and `for`/`else if` lowering
//! - `recovery`: error reporting and panic-mode recovery

mod recovery;

use tarn_diagnostic::ErrorCode;
use tarn_ir::{SStmt, StringInterner};

use crate::{parse, ParseResult};

fn parse_source(source: &str, interner: &StringInterner) -> ParseResult {
    let lexed = tarn_lexer::lex(source, interner);
    assert!(!lexed.has_errors(), "lex errors in {source:?}");
    parse(&lexed.tokens, interner)
}

/// Parse `source`, asserting no errors, and render each statement.
fn render(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    let result = parse_source(source, &interner);
    assert!(
        !result.has_errors(),
        "unexpected errors in {source:?}: {:?}",
        result.errors
    );
    result
        .statements
        .iter()
        .map(|stmt| SStmt::new(stmt, &interner).to_string())
        .collect()
}

/// Parse `source`, returning rendered statements and error codes.
fn render_with_errors(source: &str) -> (Vec<String>, Vec<ErrorCode>) {
    let interner = StringInterner::new();
    let result = parse_source(source, &interner);
    let statements = result
        .statements
        .iter()
        .map(|stmt| SStmt::new(stmt, &interner).to_string())
        .collect();
    let codes = result.errors.iter().map(|e| e.code).collect();
    (statements, codes)
}
