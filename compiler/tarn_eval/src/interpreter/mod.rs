//! Tree-walking interpreter for Tarn.
//!
//! Statements execute to an [`ExecResult`]; `return` travels up as
//! [`ControlFlow::Return`] on the `Ok` side until a call boundary catches
//! it. Errors are fail-fast: the first one aborts the submission, but
//! anything already defined in the global scope stays defined.
//!
//! - `builder.rs`: `InterpreterBuilder`
//! - `call.rs`: calls, argument binding, call depth

mod builder;
mod call;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use tarn_ir::{
    Block, Expr, ExprKind, Literal, LogicalOp, SExpr, SharedInterner, Stmt, StmtKind,
};
use tarn_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::environment::{AssignError, Environment, LocalScope, Scope};
use crate::errors::{internal, undefined_identifier, EvalError};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::print_handler::SharedPrintHandler;
use crate::{EvalResult, FunctionValue, NativeFunction, Value};

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    /// Ran to completion; continue with the next statement.
    Normal,
    /// A `return` is unwinding to the nearest call.
    Return(Value),
}

/// Result of executing a statement.
pub type ExecResult = Result<ControlFlow, EvalError>;

/// Default limit on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Tree-walking interpreter.
///
/// Holds the global scope for its whole life, so successive calls to
/// [`Interpreter::interpret`] see each other's definitions.
pub struct Interpreter {
    interner: SharedInterner,
    env: Environment,
    print_handler: SharedPrintHandler,
    call_depth: usize,
    max_call_depth: usize,
}

impl Interpreter {
    /// Create an interpreter with default settings and the standard natives.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Execute top-level statements against the global scope.
    ///
    /// Stops at the first runtime error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            if let StmtKind::Expression(expr) | StmtKind::Print(expr) = &stmt.kind {
                debug!(expr = %SExpr::new(expr, &self.interner), "evaluating");
            }
            let flow = self.execute(stmt).inspect_err(|e| {
                debug!(code = %e.code(), message = %e.message, "runtime error");
            })?;
            if let ControlFlow::Return(_) = flow {
                return Err(internal("`return` reached top-level code").with_span(stmt.span));
            }
        }
        Ok(())
    }

    /// Define a host function in the global scope.
    pub fn define_native(&mut self, native: NativeFunction) {
        let name = self.interner.intern(native.name());
        self.env.define_global(name, Value::native(native));
    }

    /// Look up a global by spelling.
    pub fn global(&self, name: &str) -> Option<Value> {
        let name = self.interner.intern(name);
        self.env.global().borrow().lookup(name)
    }

    /// The handler `print` writes to.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        trace!(span = %stmt.span, "execute");
        match &stmt.kind {
            StmtKind::Block(block) => self.execute_scoped(block),
            StmtKind::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(ControlFlow::Normal)
            }
            StmtKind::Function(decl) => {
                let name = self.interner.lookup(decl.name);
                let function =
                    FunctionValue::new(Rc::clone(decl), self.env.current().clone(), name);
                self.env.define(decl.name, Value::function(function));
                Ok(ControlFlow::Normal)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute_scoped(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_scoped(else_branch)
                } else {
                    Ok(ControlFlow::Normal)
                }
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(ControlFlow::Normal)
            }
            StmtKind::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(ControlFlow::Return(value))
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let flow @ ControlFlow::Return(_) = self.execute_scoped(body)? {
                        return Ok(flow);
                    }
                }
                Ok(ControlFlow::Normal)
            }
            StmtKind::Var {
                name, initializer, ..
            } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.define(*name, value);
                Ok(ControlFlow::Normal)
            }
        }
    }

    /// Run a block in a fresh child of the current scope.
    fn execute_scoped(&mut self, block: &Block) -> ExecResult {
        let scope = self.env.child_scope();
        self.execute_block(&block.stmts, scope)
    }

    /// Run `stmts` with `scope` as the current scope.
    ///
    /// The previous scope is restored whether or not execution succeeds.
    fn execute_block(&mut self, stmts: &[Stmt], scope: LocalScope<Scope>) -> ExecResult {
        let previous = self.env.enter(scope);
        let result = ensure_sufficient_stack(|| self.execute_all(stmts));
        self.env.restore(previous);
        result
    }

    fn execute_all(&mut self, stmts: &[Stmt]) -> ExecResult {
        for stmt in stmts {
            if let flow @ ControlFlow::Return(_) = self.execute(stmt)? {
                return Ok(flow);
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Assign {
                name,
                name_span,
                value,
            } => {
                let value = self.evaluate(value)?;
                match self.env.assign(*name, value.clone()) {
                    Ok(()) => Ok(value),
                    Err(AssignError::Undefined) => Err(undefined_identifier(
                        self.interner.lookup(*name),
                    )
                    .with_span(*name_span)),
                }
            }
            ExprKind::Binary {
                left,
                op,
                op_span,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(*op, &left, &right).map_err(|e| e.with_span(*op_span))
            }
            ExprKind::Call {
                callee,
                paren,
                args,
            } => self.eval_call(callee, *paren, args),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Literal(literal) => Ok(match *literal {
                Literal::Nil => Value::Nil,
                Literal::Bool(b) => Value::Bool(b),
                Literal::Number(n) => Value::Number(n),
                Literal::Str(s) => Value::string(self.interner.lookup(s)),
            }),
            ExprKind::Logical {
                left, op, right, ..
            } => {
                let left = self.evaluate(left)?;
                match op {
                    LogicalOp::Or if left.is_truthy() => Ok(left),
                    LogicalOp::And if !left.is_truthy() => Ok(left),
                    LogicalOp::Or | LogicalOp::And => self.evaluate(right),
                }
            }
            ExprKind::Unary {
                op,
                op_span,
                operand,
            } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(*op, &operand).map_err(|e| e.with_span(*op_span))
            }
            ExprKind::Variable(name) => self.env.lookup(*name).ok_or_else(|| {
                undefined_identifier(self.interner.lookup(*name)).with_span(expr.span)
            }),
        }
    }
}
