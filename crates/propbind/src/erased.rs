#![forbid(unsafe_code)]

//! Type-erased unary functions.
//!
//! [`UnaryFn<A, R>`] stores any `Fn(A) -> R` callable behind a uniform
//! invocation surface, so an accessor pair can hold a getter and a setter
//! without naming their concrete closure types.
//!
//! # Invariants
//!
//! 1. A default-constructed `UnaryFn` is empty; [`call`](UnaryFn::call) on
//!    an empty wrapper panics rather than returning a default value.
//! 2. Clones share the wrapped callable and may each be invoked without
//!    affecting the other.
//! 3. The wrapper adds no side effects beyond the callable's own.

use std::rc::Rc;

/// A copyable, type-erased `Fn(A) -> R` slot with an explicit empty state.
pub struct UnaryFn<A, R> {
    f: Option<Rc<dyn Fn(A) -> R>>,
}

impl<A, R> UnaryFn<A, R> {
    /// Wrap a callable.
    pub fn new(f: impl Fn(A) -> R + 'static) -> Self
    where
        A: 'static,
        R: 'static,
    {
        Self { f: Some(Rc::new(f)) }
    }

    /// The explicit empty state. Calling it is a contract violation.
    #[must_use]
    pub const fn empty() -> Self {
        Self { f: None }
    }

    /// Whether this slot holds a callable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.f.is_none()
    }

    /// Invoke the wrapped callable.
    ///
    /// # Panics
    ///
    /// Panics if the slot is empty.
    pub fn call(&self, arg: A) -> R {
        let f = self
            .f
            .as_ref()
            .expect("contract violation: invoked an empty UnaryFn");
        f(arg)
    }
}

impl<A, R> Clone for UnaryFn<A, R> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<A, R> Default for UnaryFn<A, R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A, R> std::fmt::Debug for UnaryFn<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            f.write_str("UnaryFn(empty)")
        } else {
            f.write_str("UnaryFn(set)")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
