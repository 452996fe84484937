#![forbid(unsafe_code)]

//! The bound getter/setter unit underlying every property handle.
//!
//! # Design
//!
//! An [`AccessorPair<V>`] holds two type-erased functions — a getter invoked
//! with a dummy `()` argument, and a setter that receives a candidate value
//! and returns whatever the owner actually stored. Both close over one
//! specific owner instance, captured at bind time as a weak back-reference:
//! the pair reflects the owner's backing field, never a cached copy, and
//! never keeps the owner alive.
//!
//! # Invariants
//!
//! 1. Every read and write round-trips through the owner's accessors; the
//!    pair holds no value of its own.
//! 2. `write(v)` returns exactly what the setter returned, which is the
//!    value actually stored (the setter may clamp or reject `v`).
//! 3. Binding targets an owner *instance* (one `Rc` allocation), not a
//!    value. Re-binding re-targets the pair; nothing else does.
//!
//! # Failure Modes
//!
//! - Any operation on an unbound pair panics.
//! - Any operation after the bound owner has been dropped panics (the weak
//!   back-reference no longer upgrades).

use std::cell::RefCell;
use std::rc::Rc;

use crate::erased::UnaryFn;
use crate::step::Step;

/// A getter/setter pair bound to one owner instance.
pub struct AccessorPair<V> {
    get: UnaryFn<(), V>,
    set: UnaryFn<V, V>,
}

impl<V: 'static> AccessorPair<V> {
    /// An unbound pair. Every operation except [`bind`](Self::bind) is a
    /// contract violation until bind is called.
    #[must_use]
    pub const fn unbound() -> Self {
        Self {
            get: UnaryFn::empty(),
            set: UnaryFn::empty(),
        }
    }

    /// Attach this pair to `owner`'s accessors.
    ///
    /// The pair keeps only a weak back-reference to the owner state; the
    /// owner's lifetime is never extended. Calling `bind` again re-targets
    /// the pair — this is how a duplicated owner gets its own handles.
    pub fn bind<O: 'static>(
        &mut self,
        owner: &Rc<RefCell<O>>,
        get: impl Fn(&O) -> V + 'static,
        set: impl Fn(&mut O, V) -> V + 'static,
    ) {
        tracing::debug!(
            message = "accessor.bind",
            owner = ?Rc::as_ptr(owner),
            rebind = self.is_bound(),
        );
        let weak = Rc::downgrade(owner);
        self.get = UnaryFn::new(move |()| {
            let owner = weak
                .upgrade()
                .expect("contract violation: getter invoked after its owner was dropped");
            let state = owner.borrow();
            get(&state)
        });
        let weak = Rc::downgrade(owner);
        self.set = UnaryFn::new(move |v| {
            let owner = weak
                .upgrade()
                .expect("contract violation: setter invoked after its owner was dropped");
            let mut state = owner.borrow_mut();
            set(&mut state, v)
        });
    }

    /// Whether [`bind`](Self::bind) has been called.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.get.is_empty()
    }

    /// Invoke the getter. No side effects beyond the getter's own.
    ///
    /// # Panics
    ///
    /// Panics if unbound, or if the bound owner has been dropped.
    pub fn read(&self) -> V {
        assert!(
            self.is_bound(),
            "contract violation: read through an unbound accessor pair"
        );
        self.get.call(())
    }

    /// Invoke the setter with `v`.
    ///
    /// Returns the value the setter actually stored — not necessarily `v`;
    /// rejection and clamping are the owner's policy.
    ///
    /// # Panics
    ///
    /// Panics if unbound, or if the bound owner has been dropped.
    pub fn write(&self, v: V) -> V {
        assert!(
            self.is_bound(),
            "contract violation: write through an unbound accessor pair"
        );
        tracing::trace!(message = "accessor.write");
        self.set.call(v)
    }

    /// Read, transform, write. Every compound update funnels through here,
    /// so the owner's setter sees every candidate value.
    pub fn apply(&self, f: impl FnOnce(V) -> V) -> V {
        self.write(f(self.read()))
    }
}

impl<V: Step + 'static> AccessorPair<V> {
    /// Step forward by one unit, returning the stored (post-update) value.
    pub fn pre_increment(&self) -> V {
        self.apply(Step::forward)
    }

    /// Step backward by one unit, returning the stored (post-update) value.
    pub fn pre_decrement(&self) -> V {
        self.apply(Step::backward)
    }
}

impl<V: Step + Clone + 'static> AccessorPair<V> {
    /// Step forward by one unit, returning the value *before* the update.
    pub fn post_increment(&self) -> V {
        let old = self.read();
        self.write(old.clone().forward());
        old
    }

    /// Step backward by one unit, returning the value *before* the update.
    pub fn post_decrement(&self) -> V {
        let old = self.read();
        self.write(old.clone().backward());
        old
    }
}

impl<V: 'static> Default for AccessorPair<V> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<V> std::fmt::Debug for AccessorPair<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessorPair")
            .field("bound", &!self.get.is_empty())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
