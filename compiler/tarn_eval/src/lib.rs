//! Tarn Eval - tree-walking interpreter for Tarn.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a global scope plus the current scope, linked through
//!   shared `LocalScope` handles
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Value` and `Callable`: closed sums matched exhaustively
//! - `PrintHandlerImpl`: where `print` output goes
//!
//! An `Interpreter` is single-threaded (`Rc` scopes) and keeps its global
//! scope across calls to `interpret`.

mod environment;
pub mod errors;
pub mod interpreter;
mod natives;
mod operators;
mod print_handler;
mod value;

pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{
    ControlFlow, ExecResult, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH,
};
pub use natives::CLOCK;
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{Callable, FunctionValue, NativeFn, NativeFunction, Value};

#[cfg(test)]
mod tests;
