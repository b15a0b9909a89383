//! Evaluator tests.
//!
//! - `operators_tests`: binary and unary operators on values
//! - `control_tests`: statements, scoping, and fail-fast errors
//! - `function_tests`: calls, closures, recursion, and natives


use tarn_ir::{SharedInterner, Stmt};

use crate::{buffer_handler, EvalError, Interpreter, InterpreterBuilder};

/// Lex and parse `source`, asserting it is free of compile errors.
pub(crate) fn compile(source: &str, interner: &SharedInterner) -> Vec<Stmt> {
    let lexed = tarn_lexer::lex(source, interner);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    let parsed = tarn_parse::parse(&lexed.tokens, interner);
    assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
    parsed.statements
}

/// Interpreter printing into a buffer.
pub(crate) fn buffered(interner: &SharedInterner) -> Interpreter {
    InterpreterBuilder::new(interner.clone())
        .print_handler(buffer_handler())
        .build()
}

/// Run `source` in a fresh interpreter, returning printed output and the result.
pub(crate) fn run(source: &str) -> (String, Result<(), EvalError>) {
    let interner = SharedInterner::new();
    let mut interpreter = buffered(&interner);
    let statements = compile(source, &interner);
    let result = interpreter.interpret(&statements);
    (interpreter.print_handler().get_output(), result)
}

/// Run `source`, asserting success, and return printed output.
pub(crate) fn run_ok(source: &str) -> String {
    let (output, result) = run(source);
    assert_eq!(result, Ok(()), "output so far: {output:?}");
    output
}

/// Run `source`, asserting failure, and return the error with any output.
pub(crate) fn run_err(source: &str) -> (String, EvalError) {
    match run(source) {
        (output, Err(error)) => (output, error),
        (output, Ok(())) => panic!("expected a runtime error, got output {output:?}"),
    }
}
