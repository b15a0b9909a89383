//! Function calls.

use tarn_ir::{Expr, Span};
use tracing::instrument;

use super::{ControlFlow, Interpreter};
use crate::environment::{LocalScope, Scope};
use crate::errors::{arity_mismatch, call_depth_exceeded, not_callable};
use crate::{Callable, EvalResult, FunctionValue, Value};

impl Interpreter {
    /// Evaluate `callee(args...)`.
    ///
    /// The callee and then the arguments are evaluated left to right before
    /// the callee is checked. Call errors point at the closing parenthesis.
    pub(super) fn eval_call(&mut self, callee: &Expr, paren: Span, args: &[Expr]) -> EvalResult {
        let callee = self.evaluate(callee)?;
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate(arg)?);
        }

        let callable = match callee {
            Value::Callable(callable) => callable,
            other => return Err(not_callable(other.type_name()).with_span(paren)),
        };
        if values.len() != callable.arity() {
            return Err(
                arity_mismatch(callable.name(), callable.arity(), values.len()).with_span(paren),
            );
        }

        match callable {
            Callable::Function(function) => self.call_function(&function, values, paren),
            Callable::Native(native) => native.call(&values).map_err(|e| e.with_span(paren)),
        }
    }

    /// Call a user function with already-checked arguments.
    ///
    /// Parameters are bound in a new scope whose parent is the closure; the
    /// body runs directly in that scope.
    #[instrument(level = "debug", skip_all, fields(function = function.name()))]
    fn call_function(
        &mut self,
        function: &FunctionValue,
        args: Vec<Value>,
        call_site: Span,
    ) -> EvalResult {
        if self.call_depth >= self.max_call_depth {
            return Err(call_depth_exceeded(self.max_call_depth).with_span(call_site));
        }

        let scope = LocalScope::new(Scope::with_parent(function.closure().clone()));
        {
            let mut frame = scope.borrow_mut();
            for (param, arg) in function.decl().params.iter().zip(args) {
                frame.define(param.name, arg);
            }
        }

        self.call_depth += 1;
        let result = self.execute_block(&function.decl().body.stmts, scope);
        self.call_depth -= 1;

        match result? {
            ControlFlow::Return(value) => Ok(value),
            ControlFlow::Normal => Ok(Value::Nil),
        }
    }
}
