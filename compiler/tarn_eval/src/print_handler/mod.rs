//! Destinations for `print` output.
//!
//! The interpreter never touches stdout directly. Each `print` statement
//! hands its stringified value to a [`PrintHandlerImpl`], which the host
//! picks when building the interpreter: the `tarn` binary prints to stdout,
//! tests capture into a buffer, and benchmarks can discard output.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Where `print` output goes.
pub enum PrintHandlerImpl {
    /// Line-flushed stdout, so program output and stderr diagnostics
    /// interleave in the order they happened.
    Stdout,
    /// In-memory capture, one `\n`-terminated line per `print`.
    Buffer(Mutex<String>),
    /// Drop everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Write one printed value followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // Nothing to report a closed stdout to.
                let _ = writeln!(out, "{line}").and_then(|()| out.flush());
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Non-capturing handlers report `""`.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Return the captured output and empty the buffer.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(buf) => std::mem::take(&mut *buf.lock()),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Discard captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }
}

/// Handle shared between the host and the interpreter.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Print to stdout. The interpreter's default.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Capture output in memory; read it back with [`PrintHandlerImpl::get_output`].
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
