//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use tarn_ir::SharedInterner;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::environment::Environment;
use crate::natives;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances with various configurations.
pub struct InterpreterBuilder {
    interner: SharedInterner,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
    natives: bool,
}

impl InterpreterBuilder {
    /// Create a new builder with default settings.
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            natives: true,
        }
    }

    /// Set the print handler for `print` statements.
    ///
    /// Default is stdout.
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

    /// Start with an empty global scope instead of the standard natives.
    #[must_use]
    pub fn without_natives(mut self) -> Self {
        self.natives = false;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let mut interpreter = Interpreter {
            interner: self.interner,
            env: Environment::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        };
        if self.natives {
            for native in natives::standard() {
                interpreter.define_native(native);
            }
        }
        interpreter
    }
}
