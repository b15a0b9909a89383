//! Lexer error types.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::Span;

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"`; the span runs from the opening quote to end of input.
    UnterminatedString,
    /// A character that starts no token.
    UnexpectedChar(char),
    /// The whole source is longer than `u32::MAX` bytes and was not scanned.
    SourceTooLarge { len: usize },
}

/// A lexer error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0002,
            LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0003,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match self.kind {
            LexErrorKind::UnterminatedString => "unterminated string".to_string(),
            LexErrorKind::UnexpectedChar(c) => format!("unexpected character `{}`", c.escape_debug()),
            LexErrorKind::SourceTooLarge { len } => {
                format!("source is {len} bytes; the limit is {} bytes", u32::MAX)
            }
        }
    }

    /// Convert to a diagnostic for error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.message());
        match self.kind {
            LexErrorKind::UnterminatedString => diag
                .with_label(self.span, "string starts here and never ends")
                .with_help("add a closing `\"`"),
            LexErrorKind::UnexpectedChar(_) => {
                diag.with_label(self.span, "not part of any token")
            }
            LexErrorKind::SourceTooLarge { .. } => diag
                .with_label(self.span, "nothing was lexed")
                .with_help("split the program into smaller submissions"),
        }
    }
}
