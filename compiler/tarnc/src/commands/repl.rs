//! The interactive REPL.

use std::io::{self, BufRead, IsTerminal, Write};

use tarn_diagnostic::emitter::{ColorMode, TerminalEmitter};

use crate::Session;

/// Characters of context shown either side of an error in a REPL line.
const CONTEXT_PADDING: usize = 30;

/// Read lines from stdin and run each one as a submission.
///
/// Every line shares one session, so definitions carry over. Errors are
/// reported and the loop continues; end of input exits.
pub fn run_repl(color: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(io::stderr(), color, is_tty)
        .with_file_path("stdin")
        .with_context_padding(CONTEXT_PADDING);
    let mut session = Session::new();

    println!("Tarn {}", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    if let Err(e) = repl_loop(stdin.lock(), io::stdout(), &mut session, &mut emitter) {
        eprintln!("error: {e}");
    }
}

/// Prompt on `prompt`, read a line from `input`, run it; repeat until end of
/// input. Terminal I/O failures end the loop and are returned.
fn repl_loop<W: Write>(
    mut input: impl BufRead,
    mut prompt: impl Write,
    session: &mut Session,
    emitter: &mut TerminalEmitter<W>,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(prompt, "> ")?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(prompt)?;
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim().is_empty() {
            continue;
        }
        emitter.set_source(source);
        session.run("stdin", source, emitter);
    }
}
