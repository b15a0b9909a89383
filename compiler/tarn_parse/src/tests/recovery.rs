//! Error reporting and recovery tests.

use pretty_assertions::assert_eq;
use tarn_diagnostic::ErrorCode;
use tarn_ir::{Span, StmtKind, StringInterner};

use super::{parse_source, render_with_errors};

#[test]
fn test_missing_expression() {
    let interner = StringInterner::new();
    let result = parse_source("print ;", &interner);

    assert!(result.statements.is_empty());
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.code, ErrorCode::E1002);
    assert_eq!(error.message, "expected expression");
    assert_eq!(error.span, Span::new(6, 7));
    assert_eq!(error.context.as_deref(), Some("found `;`"));
}

#[test]
fn test_each_malformed_statement_reports_once() {
    let (statements, codes) = render_with_errors("print ;\nvar = 2;\nprint 3;");
    assert_eq!(statements, vec!["(print 3)"]);
    assert_eq!(codes, vec![ErrorCode::E1002, ErrorCode::E1004]);
}

#[test]
fn test_statements_around_failure_are_kept() {
    let (statements, codes) = render_with_errors("print 1;\nprint (;\nprint 2;");
    assert_eq!(statements, vec!["(print 1)", "(print 2)"]);
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn test_missing_semicolon_stops_before_keyword() {
    let interner = StringInterner::new();
    let result = parse_source("var x = 1\nprint x;", &interner);

    assert_eq!(result.statements.len(), 1);
    assert!(matches!(result.statements[0].kind, StmtKind::Print(_)));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1001);
    assert_eq!(
        result.errors[0].message,
        "expected `;` after variable declaration"
    );
    assert_eq!(result.errors[0].span, Span::new(10, 15));
}

#[test]
fn test_reserved_keyword_is_skipped() {
    let (statements, codes) = render_with_errors("class Foo {}\nprint 1;");
    assert_eq!(statements, vec!["(print 1)"]);
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn test_recovery_inside_block() {
    let (statements, codes) = render_with_errors("{ print ; print 2; }");
    assert_eq!(statements, vec!["(block (print 2))"]);
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn test_recovery_stops_at_closing_brace() {
    let (statements, codes) = render_with_errors("{ print }\nprint 1;");
    assert_eq!(statements, vec!["(block)", "(print 1)"]);
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn test_unterminated_block() {
    let interner = StringInterner::new();
    let result = parse_source("{ print 1;", &interner);

    assert!(result.statements.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1003);
    assert_eq!(result.errors[0].message, "expected `}` after block");
    assert_eq!(result.errors[0].context.as_deref(), Some("found end of file"));
    assert_eq!(result.errors[0].span, Span::new(9, 10));
    assert_eq!(
        result.errors[0].related,
        Some((Span::new(0, 1), "unclosed `{` opened here".to_string()))
    );
}

#[test]
fn test_unclosed_paren_points_at_opener() {
    let interner = StringInterner::new();
    let result = parse_source("print (1;", &interner);

    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.code, ErrorCode::E1003);
    assert_eq!(error.span, Span::new(8, 9));

    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.offset(), 8);
    assert_eq!(diagnostic.labels.len(), 2);
    assert!(!diagnostic.labels[1].is_primary);
    assert_eq!(diagnostic.labels[1].span, Span::new(6, 7));

    let result = parse_source("f(1, 2;", &interner);
    assert_eq!(result.errors[0].message, "expected `)` after arguments");
    assert!(matches!(&result.errors[0].related, Some((span, _)) if *span == Span::new(1, 2)));
}

#[test]
fn test_missing_brace_after_condition() {
    let (statements, codes) = render_with_errors("if x print 1;");
    assert_eq!(statements, vec!["(print 1)"]);
    assert_eq!(codes, vec![ErrorCode::E1001]);
}

#[test]
fn test_missing_loop_condition_semicolon() {
    let interner = StringInterner::new();
    let result = parse_source("for var i = 0; i < 3 { }", &interner);

    assert!(result.statements.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "expected `;` after loop condition");
}

#[test]
fn test_function_header_errors() {
    let (_, codes) = render_with_errors("fun (a) {}");
    assert_eq!(codes.first(), Some(&ErrorCode::E1004));

    let interner = StringInterner::new();
    let result = parse_source("fun f {}", &interner);
    assert_eq!(result.errors[0].message, "expected `(` after function name");

    let result = parse_source("fun f(a b) {}", &interner);
    assert_eq!(result.errors[0].message, "expected `)` after parameters");

    let result = parse_source("fun f() print 1;", &interner);
    assert_eq!(result.errors[0].message, "expected `{` before function body");
    assert_eq!(result.statements.len(), 1);
}

#[test]
fn test_invalid_assignment_target_is_not_fatal() {
    let interner = StringInterner::new();
    let result = parse_source("1 = 2;", &interner);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1005);
    assert_eq!(result.errors[0].message, "invalid assignment target");
    assert_eq!(result.errors[0].span, Span::new(2, 3));

    let (statements, codes) = render_with_errors("a + b = c;\n(a) = 1;");
    assert_eq!(statements, vec!["(expr c)", "(expr 1)"]);
    assert_eq!(codes, vec![ErrorCode::E1005, ErrorCode::E1005]);
}

#[test]
fn test_top_level_return() {
    let (statements, codes) = render_with_errors("return 1;\n{ return; }");
    assert_eq!(statements, vec!["(return 1)", "(block (return))"]);
    assert_eq!(codes, vec![ErrorCode::E1009, ErrorCode::E1009]);

    let (_, codes) = render_with_errors("fun f() { { return 1; } }\nreturn;");
    assert_eq!(codes, vec![ErrorCode::E1009]);
}

#[test]
fn test_duplicate_parameter() {
    let interner = StringInterner::new();
    let result = parse_source("fun f(a, a) {}", &interner);

    assert_eq!(result.statements.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1008);
    assert_eq!(result.errors[0].message, "duplicate parameter `a`");
    assert_eq!(result.errors[0].span, Span::new(9, 10));
}

#[test]
fn test_parameter_limit() {
    let params = |n: usize| (0..n).map(|i| format!("p{i}")).collect::<Vec<_>>().join(", ");

    let (_, codes) = render_with_errors(&format!("fun f({}) {{}}", params(255)));
    assert!(codes.is_empty());

    let interner = StringInterner::new();
    let result = parse_source(&format!("fun f({}) {{}}", params(256)), &interner);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1006);
    assert_eq!(result.errors[0].message, "can't have more than 255 parameters");
    assert!(matches!(
        &result.statements[0].kind,
        StmtKind::Function(decl) if decl.arity() == 256
    ));
}

#[test]
fn test_argument_limit() {
    let args = |n: usize| vec!["1"; n].join(", ");

    let (_, codes) = render_with_errors(&format!("f({});", args(255)));
    assert!(codes.is_empty());

    let (statements, codes) = render_with_errors(&format!("f({});", args(300)));
    assert_eq!(statements.len(), 1);
    assert_eq!(codes, vec![ErrorCode::E1007]);
}

#[test]
fn test_error_converts_to_diagnostic() {
    let interner = StringInterner::new();
    let result = parse_source("var x = 1", &interner);

    let diagnostic = result.errors[0].to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E1001);
    assert_eq!(diagnostic.message, "expected `;` after variable declaration");
    assert_eq!(diagnostic.offset(), 8);
    assert_eq!(diagnostic.length(), 1);
    assert_eq!(diagnostic.labels[0].message, "found end of file");
}
