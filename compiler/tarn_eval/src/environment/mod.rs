//! Environment for variable scoping in the interpreter.
//!
//! Scopes form a parent chain through shared `LocalScope` handles. Blocks
//! and calls swap the current scope with [`Environment::enter`] and put the
//! old one back with [`Environment::restore`]; closures keep their defining
//! scope alive by holding a handle to it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tarn_ir::Name;

use crate::Value;

/// Assignment found no binding anywhere up the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    Undefined,
}

/// Shared, mutable handle to a scope.
///
/// Blocks, calls, and closures each hold one. A closure's handle is what
/// keeps its defining scope alive after the block that made it has exited.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    /// Enclosing scope; `None` only for the global scope.
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new scope with a parent.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Define a variable in this scope, replacing any existing binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable, searching outward through parents.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Assign to the nearest enclosing binding of `name`.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(AssignError::Undefined)
    }
}

/// Environment for the interpreter: the global scope plus the current one.
pub struct Environment {
    /// Global scope (root of every chain).
    global: LocalScope<Scope>,
    /// Innermost scope of the running code.
    current: LocalScope<Scope>,
}

impl Environment {
    /// Create a new environment whose current scope is the global scope.
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            current: global.clone(),
            global,
        }
    }

    /// Handle to the global scope.
    pub fn global(&self) -> &LocalScope<Scope> {
        &self.global
    }

    /// Handle to the current scope.
    pub fn current(&self) -> &LocalScope<Scope> {
        &self.current
    }

    /// Create a fresh scope whose parent is the current scope.
    pub fn child_scope(&self) -> LocalScope<Scope> {
        LocalScope::new(Scope::with_parent(self.current.clone()))
    }

    /// Make `scope` current, returning the scope it replaces.
    ///
    /// Pair every call with [`Environment::restore`].
    #[must_use = "the previous scope must be restored"]
    pub fn enter(&mut self, scope: LocalScope<Scope>) -> LocalScope<Scope> {
        std::mem::replace(&mut self.current, scope)
    }

    /// Put back the scope returned by [`Environment::enter`].
    pub fn restore(&mut self, previous: LocalScope<Scope>) {
        self.current = previous;
    }

    /// Define a variable in the current scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current.borrow_mut().define(name, value);
    }

    /// Define a variable in the global scope.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    /// Look up a variable from the current scope outward.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current.borrow().lookup(name)
    }

    /// Assign to the nearest binding visible from the current scope.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        self.current.borrow_mut().assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
