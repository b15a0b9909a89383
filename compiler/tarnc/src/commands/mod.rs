//! Command handlers for the `tarn` CLI.
//!
//! Each submodule implements one command. Shared utilities like `read_file`
//! live here in the module root.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::run_repl;
pub use run::run_file;

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(66);
        }
    }
}
