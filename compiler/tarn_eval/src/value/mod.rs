//! Runtime values.
//!
//! Values are cheap to clone: strings and callables are reference-counted,
//! everything else is `Copy`-sized.

use std::fmt;
use std::rc::Rc;

use tarn_ir::FunctionDecl;

use crate::environment::{LocalScope, Scope};
use crate::EvalResult;

/// Host function signature for natives.
pub type NativeFn = fn(&[Value]) -> EvalResult;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Callable(Callable),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Wrap a user function.
    pub fn function(function: FunctionValue) -> Self {
        Value::Callable(Callable::Function(Rc::new(function)))
    }

    /// Wrap a native function.
    pub fn native(native: NativeFunction) -> Self {
        Value::Callable(Callable::Native(Rc::new(native)))
    }

    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Callable(_) => "function",
        }
    }

    /// The number inside, if this is a number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Structural equality.
///
/// Values of different types are never equal. Callables are equal only to
/// themselves.
impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "number equality is IEEE equality")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a.same_as(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Callable(c) => write!(f, "{c}"),
        }
    }
}

/// Something that can be called.
#[derive(Clone, Debug)]
pub enum Callable {
    Function(Rc<FunctionValue>),
    Native(Rc<NativeFunction>),
}

impl Callable {
    /// Number of arguments the callable takes.
    pub fn arity(&self) -> usize {
        match self {
            Callable::Function(f) => f.arity(),
            Callable::Native(n) => n.arity(),
        }
    }

    /// Declared name.
    pub fn name(&self) -> &'static str {
        match self {
            Callable::Function(f) => f.name(),
            Callable::Native(n) => n.name(),
        }
    }

    /// Identity comparison.
    pub fn same_as(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::Function(a), Callable::Function(b)) => Rc::ptr_eq(a, b),
            (Callable::Native(a), Callable::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Function(func) => write!(f, "<fn {}>", func.name()),
            Callable::Native(native) => write!(f, "<native fn {}>", native.name()),
        }
    }
}

/// A user-defined function: its declaration plus the scope it closes over.
pub struct FunctionValue {
    decl: Rc<FunctionDecl>,
    closure: LocalScope<Scope>,
    name: &'static str,
}

impl FunctionValue {
    /// `name` is the resolved spelling of `decl.name`.
    pub fn new(decl: Rc<FunctionDecl>, closure: LocalScope<Scope>, name: &'static str) -> Self {
        FunctionValue {
            decl,
            closure,
            name,
        }
    }

    pub fn decl(&self) -> &FunctionDecl {
        &self.decl
    }

    /// The scope in effect when the function was declared.
    pub fn closure(&self) -> &LocalScope<Scope> {
        &self.closure
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.arity()
    }
}

// The closure scope usually contains this function, so it is left out.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

/// A function implemented by the host.
pub struct NativeFunction {
    name: &'static str,
    arity: usize,
    function: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, arity: usize, function: NativeFn) -> Self {
        NativeFunction {
            name,
            arity,
            function,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Run the host function. Arity has already been checked.
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.function)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
