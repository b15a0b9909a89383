//! The `run` command: compile and evaluate a Tarn source file.

use std::io::IsTerminal;

use tarn_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use super::read_file;
use crate::{RunOutcome, Session};

/// Run a Tarn source file.
///
/// All lexical and syntax errors are reported before exiting with status 65.
/// A runtime error exits with status 70.
pub fn run_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), color, is_tty)
        .with_source(content.as_str())
        .with_file_path(path);

    let mut session = Session::new();
    let outcome = session.run(path, &content, &mut emitter);
    if let RunOutcome::CompileError { errors } = outcome {
        emitter.emit_summary(errors, 0);
    }

    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
}
