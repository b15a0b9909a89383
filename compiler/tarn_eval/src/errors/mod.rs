//! Centralized error constructors for the evaluator.
//!
//! Every runtime failure is an [`EvalError`] built by one of the factory
//! functions below, so messages live in one place. The interpreter attaches
//! the span with [`EvalError::with_span`] at the point where it knows which
//! token to blame.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::Span;

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Structured runtime error category.
///
/// `Display` produces the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined identifier `{name}`")]
    UndefinedIdentifier { name: String },

    #[error("operand of `{op}` must be a number")]
    OperandNotNumber { op: &'static str },

    #[error("operands of `{op}` must be numbers")]
    OperandsNotNumbers { op: &'static str },

    #[error("operands of `+` must be two numbers or two strings")]
    InvalidAddOperands,

    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("can only call functions, found `{type_name}`")]
    NotCallable { type_name: &'static str },

    #[error("`{name}` expects {}, got {got}", count_arguments(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("maximum call depth exceeded (limit: {limit})")]
    CallDepthExceeded { limit: usize },

    #[error("native function `{name}` failed: {message}")]
    NativeFailure { name: String, message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes fields by reference"
)]
fn count_arguments(count: &usize) -> String {
    if *count == 1 {
        "1 argument".to_string()
    } else {
        format!("{count} arguments")
    }
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
    /// Source location where the error occurred.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UndefinedIdentifier { .. } => ErrorCode::E6001,
            EvalErrorKind::OperandNotNumber { .. }
            | EvalErrorKind::OperandsNotNumbers { .. }
            | EvalErrorKind::InvalidAddOperands => ErrorCode::E6002,
            EvalErrorKind::DivisionByZero => ErrorCode::E6003,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6004,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::CallDepthExceeded { .. } => ErrorCode::E6006,
            EvalErrorKind::NativeFailure { .. } => ErrorCode::E6007,
            EvalErrorKind::Internal { .. } => ErrorCode::E9001,
        }
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(&self.message);
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.label());
        }
        if let EvalErrorKind::CallDepthExceeded { .. } = self.kind {
            diag = diag.with_note("this usually means a function recurses without a base case");
        }
        diag
    }

    fn label(&self) -> &'static str {
        match self.kind {
            EvalErrorKind::UndefinedIdentifier { .. } => "not found in this scope",
            EvalErrorKind::OperandNotNumber { .. }
            | EvalErrorKind::OperandsNotNumbers { .. }
            | EvalErrorKind::InvalidAddOperands => "invalid operand types",
            EvalErrorKind::DivisionByZero => "division by zero here",
            EvalErrorKind::NotCallable { .. } => "not a function",
            EvalErrorKind::ArityMismatch { .. } => "wrong number of arguments",
            EvalErrorKind::CallDepthExceeded { .. } => "call exceeds the depth limit",
            EvalErrorKind::NativeFailure { .. } => "native call failed here",
            EvalErrorKind::Internal { .. } => "here",
        }
    }
}

/// Name not bound in any enclosing scope.
#[cold]
pub fn undefined_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedIdentifier {
        name: name.to_string(),
    })
}

/// Unary operator applied to a non-number.
#[cold]
pub fn operand_not_number(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandNotNumber { op })
}

/// Arithmetic or comparison operator applied to non-numbers.
#[cold]
pub fn operands_not_numbers(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandsNotNumbers { op })
}

/// `+` applied to anything but two numbers or two strings.
#[cold]
pub fn invalid_add_operands() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAddOperands)
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Call on a value that is not a function.
#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

/// Wrong number of arguments in a call.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { limit })
}

/// A host function reported failure.
#[cold]
pub fn native_failure(name: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NativeFailure {
        name: name.to_string(),
        message: message.into(),
    })
}

/// An interpreter invariant was violated.
#[cold]
pub fn internal(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Internal {
        message: message.into(),
    })
}
