//! Diagnostic Emitters
//!
//! A host receives diagnostics through the [`DiagnosticEmitter`] trait:
//! - [`TerminalEmitter`]: colored, human-readable output with source snippets
//! - `Vec<Diagnostic>`: collects diagnostics for inspection by tests and tools

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }

    fn flush(&mut self) {}

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}
