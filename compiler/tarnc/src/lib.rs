//! Tarn driver.
//!
//! A [`Session`] owns one interner and one interpreter, so globals declared
//! in one submission are visible to the next. The `tarn` binary is a thin
//! shell over sessions and the handlers in [`commands`].

pub mod commands;
mod session;
pub mod tracing_setup;

pub use session::{CompileOutput, RunOutcome, Session, SessionBuilder};
