//! Diagnostic system for located error reporting.
//!
//! Every phase (lexer, parser, interpreter) reports problems as a
//! [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and help (how to fix it)
//!
//! Hosts receive diagnostics through a [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, Phase};
