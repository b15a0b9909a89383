//! Compile-and-run sessions.

use tarn_diagnostic::emitter::DiagnosticEmitter;
use tarn_diagnostic::Diagnostic;
use tarn_eval::{Interpreter, InterpreterBuilder, SharedPrintHandler, DEFAULT_MAX_CALL_DEPTH};
use tarn_ir::{SharedInterner, Stmt};
use tarn_lexer::LexError;
use tarn_parse::ParseError;
use tracing::{debug, instrument};

/// Statements and diagnostics from one compile pass.
#[derive(Debug)]
pub struct CompileOutput {
    /// Every statement the parser recovered, in source order.
    pub statements: Vec<Stmt>,
    /// Lexical diagnostics followed by syntax diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    /// Check if the pass produced any diagnostics.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// How a submission ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Compiled and ran to completion.
    Ok,
    /// Lexical or syntax errors; nothing was executed.
    CompileError { errors: usize },
    /// Execution stopped at a runtime error.
    RuntimeError,
}

impl RunOutcome {
    /// Process exit status for this outcome (sysexits `EX_DATAERR` and
    /// `EX_SOFTWARE` for the two failure kinds).
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Ok => 0,
            RunOutcome::CompileError { .. } => 65,
            RunOutcome::RuntimeError => 70,
        }
    }
}

/// A persistent Tarn session.
///
/// Owns the interner and the interpreter's global scope. Not `Send`; drive
/// it from one thread.
pub struct Session {
    interner: SharedInterner,
    interpreter: Interpreter,
}

impl Session {
    /// Create a session that prints to stdout.
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    /// Start configuring a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The interner shared by every submission of this session.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// The interpreter holding this session's globals.
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Lex and parse `source` without running it.
    pub fn compile(&self, source: &str) -> CompileOutput {
        let lexed = tarn_lexer::lex(source, &self.interner);
        let mut diagnostics: Vec<Diagnostic> =
            lexed.errors.iter().map(LexError::to_diagnostic).collect();

        let parsed = tarn_parse::parse(&lexed.tokens, &self.interner);
        diagnostics.extend(parsed.errors.iter().map(ParseError::to_diagnostic));

        CompileOutput {
            statements: parsed.statements,
            diagnostics,
        }
    }

    /// Compile `source` and, if it is free of errors, run it.
    ///
    /// Every compile diagnostic goes to `emitter`; a runtime error is emitted
    /// as one diagnostic. Globals defined before a runtime error persist.
    #[instrument(level = "debug", skip_all, fields(source = source_name))]
    pub fn run(
        &mut self,
        source_name: &str,
        source: &str,
        emitter: &mut dyn DiagnosticEmitter,
    ) -> RunOutcome {
        let output = self.compile(source);
        if output.has_errors() {
            let errors = output.diagnostics.len();
            debug!(errors, "compile failed; not running");
            emitter.emit_all(&output.diagnostics);
            emitter.flush();
            return RunOutcome::CompileError { errors };
        }

        debug!(statements = output.statements.len(), "running");
        match self.interpreter.interpret(&output.statements) {
            Ok(()) => RunOutcome::Ok,
            Err(error) => {
                emitter.emit(&error.to_diagnostic());
                emitter.flush();
                RunOutcome::RuntimeError
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl SessionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        SessionBuilder {
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `print` writes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the limit on nested user function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Session {
        let interner = SharedInterner::new();
        let mut builder =
            InterpreterBuilder::new(interner.clone()).max_call_depth(self.max_call_depth);
        if let Some(handler) = self.print_handler {
            builder = builder.print_handler(handler);
        }
        Session {
            interner,
            interpreter: builder.build(),
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
