//! Lexical scopes.
//!
//! An [`Environment`] is a handle to one scope in a parent-linked chain.
//! Handles are cheap to clone and share the scope they point at: a closure
//! holding a handle observes later declarations and assignments made through
//! any other handle to the same scope. Parents are referenced, never copied.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{EvalError, Value};

/// Shared, interior-mutable scope storage.
///
/// Evaluation is single-threaded, so `Rc<RefCell<_>>` is all the sharing
/// a scope chain needs.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Whether a binding may be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `let`, parameters.
    Mutable,
    /// `const`, function declarations, natives.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

impl From<bool> for Mutability {
    fn from(mutable: bool) -> Self {
        if mutable {
            Mutability::Mutable
        } else {
            Mutability::Immutable
        }
    }
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// One scope: its own bindings plus a link to the enclosing scope.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<LocalScope<Scope>>,
}

/// Handle to a scope chain.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// An empty root scope. See [`create_global_environment`](crate::create_global_environment)
    /// for one seeded with natives.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A new empty scope whose parent is `self`.
    pub fn create_child(&self) -> Environment {
        debug!(depth = self.depth() + 1, "create scope");
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(self.scope.clone()),
            }),
        }
    }

    /// A sibling of `self` holding copies of its bindings.
    ///
    /// `for` loops move to a fresh copy of their loop scope on every
    /// iteration, so closures created in one iteration keep that iteration's
    /// bindings. Values are copied as values: containers stay shared.
    pub(crate) fn copy_for_iteration(&self) -> Environment {
        let scope = self.scope.borrow().clone();
        Environment {
            scope: LocalScope::new(scope),
        }
    }

    /// Bind `name` in this scope.
    ///
    /// Fails with `DeclarationConflict` if this scope already binds `name`.
    /// Shadowing a binding of an enclosing scope is allowed.
    pub fn declare(
        &self,
        name: &str,
        value: Value,
        mutability: impl Into<Mutability>,
    ) -> Result<(), EvalError> {
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(EvalError::declaration_conflict(name));
        }
        scope.bindings.insert(
            name.to_string(),
            Binding {
                value,
                mutability: mutability.into(),
            },
        );
        Ok(())
    }

    /// Overwrite the nearest binding of `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), EvalError> {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let mut scope = current.borrow_mut();
                if let Some(binding) = scope.bindings.get_mut(name) {
                    if !binding.mutability.is_mutable() {
                        return Err(EvalError::immutable(name));
                    }
                    binding.value = value;
                    return Ok(());
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => current = parent,
                None => return Err(EvalError::undeclared(name)),
            }
        }
    }

    /// Value of the nearest binding of `name`.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let scope = current.borrow();
                if let Some(binding) = scope.bindings.get(name) {
                    return Ok(binding.value.clone());
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => current = parent,
                None => return Err(EvalError::undeclared(name)),
            }
        }
    }

    /// Whether this scope itself (not an ancestor) binds `name`.
    pub fn has_own(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    pub fn parent(&self) -> Option<Environment> {
        self.scope
            .borrow()
            .parent
            .clone()
            .map(|scope| Environment { scope })
    }

    /// Number of ancestors; the root has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    /// Names bound in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scope.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Whether both handles point at the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("names", &self.local_names())
            .finish()
    }
}
