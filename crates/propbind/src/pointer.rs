#![forbid(unsafe_code)]

//! Reference properties: the handle variant for fields holding a link to
//! another entity.
//!
//! # Design
//!
//! A reference-valued backing field is modeled as [`Link<T>`], an optional
//! shared handle (`Option<Rc<T>>`) — `None` is the null link.
//! [`RefProperty<T>`] shares the accessor-pair core with [`Property`] but
//! exposes a disjoint operation set: indirection ([`target`]) and member
//! forwarding ([`with`]) instead of arithmetic. Assigning a link is a
//! pointer-identity operation; the pointee is shared, never copied.
//!
//! There is no increment/decrement here: a shared handle has no size-model
//! stepping the way a raw pointer does.
//!
//! Like [`Property`], this type is not `Clone` — a copied handle would
//! still be wired to the source owner's accessors.
//!
//! [`Property`]: crate::Property
//! [`target`]: RefProperty::target
//! [`with`]: RefProperty::with

use std::cell::RefCell;
use std::rc::Rc;

use crate::accessor::AccessorPair;

/// An optional shared reference to an entity; `None` is the null link.
pub type Link<T> = Option<Rc<T>>;

/// A handle for a reference-valued property.
pub struct RefProperty<T> {
    pair: AccessorPair<Link<T>>,
}

impl<T: 'static> RefProperty<T> {
    /// An unbound handle; every access panics until
    /// [`bind`](Self::bind) is called.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pair: AccessorPair::unbound(),
        }
    }

    /// Attach the handle to `owner`'s accessors. See
    /// [`AccessorPair::bind`].
    pub fn bind<O: 'static>(
        &mut self,
        owner: &Rc<RefCell<O>>,
        get: impl Fn(&O) -> Link<T> + 'static,
        set: impl Fn(&mut O, Link<T>) -> Link<T> + 'static,
    ) {
        self.pair.bind(owner, get, set);
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.pair.is_bound()
    }

    /// The stored link (pointer-identity clone; the pointee is shared).
    #[must_use]
    pub fn get(&self) -> Link<T> {
        self.pair.read()
    }

    /// Offer `link` to the owner's setter; returns the link actually
    /// stored.
    pub fn set(&self, link: Link<T>) -> Link<T> {
        self.pair.write(link)
    }

    /// Store the null link.
    pub fn clear(&self) -> Link<T> {
        self.set(None)
    }

    /// Whether the stored link is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.get().is_none()
    }

    /// Dereference the stored link.
    ///
    /// # Panics
    ///
    /// Panics if the stored link is null.
    #[must_use]
    pub fn target(&self) -> Rc<T> {
        self.get()
            .expect("contract violation: dereferenced a null reference property")
    }

    /// Member forwarding: run `f` against the target.
    ///
    /// # Panics
    ///
    /// Panics if the stored link is null.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.target())
    }

    /// Pointer-identity test against `other`.
    #[must_use]
    pub fn points_to(&self, other: &Rc<T>) -> bool {
        match self.get() {
            Some(link) => Rc::ptr_eq(&link, other),
            None => false,
        }
    }
}

impl<T: 'static> Default for RefProperty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> std::fmt::Debug for RefProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_bound() {
            return f.write_str("RefProperty(unbound)");
        }
        match self.get() {
            Some(link) => write!(f, "RefProperty({:p})", Rc::as_ptr(&link)),
            None => f.write_str("RefProperty(null)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
