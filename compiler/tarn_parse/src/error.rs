//! Syntax errors.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::Span;

/// A syntax error found while parsing.
///
/// Rendered with [`ParseError::to_diagnostic`]: the message heads the
/// diagnostic, `context` labels `span`, and `related` becomes a secondary
/// label pointing back at code the error depends on.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    /// What the parser expected, e.g. "expected `;` after value".
    pub message: String,
    pub span: Span,
    /// What was there instead, e.g. "found `}`".
    pub context: Option<String>,
    /// Earlier location involved in the error, such as an unclosed `(`.
    pub related: Option<(Span, String)>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            related: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = self.context.as_deref().unwrap_or("here");
        let diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label);
        match &self.related {
            Some((span, message)) => diag.with_secondary_label(*span, message),
            None => diag,
        }
    }
}
