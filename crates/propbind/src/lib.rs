#![forbid(unsafe_code)]

//! Bound accessor properties for owner types.
//!
//! This crate provides value-like handles that route every read and write
//! of a field through user-supplied getter/setter functions, giving the
//! owner a single funnel for validation while callers work with something
//! that behaves like a plain value slot:
//!
//! - [`Property<V>`]: the value handle — `get`/`set`, pre/post
//!   increment/decrement, compound updates with `+=`-style operator sugar.
//! - [`RefProperty<T>`]: the reference handle — stores a [`Link<T>`]
//!   (`Option<Rc<T>>`), adds indirection and member forwarding, drops the
//!   arithmetic.
//! - [`AccessorPair<V>`]: the bound getter+setter unit both handles are
//!   built on.
//! - [`UnaryFn<A, R>`]: the type-erased callable the pair stores its two
//!   accessors in.
//!
//! # Architecture
//!
//! Owner state lives in an `Rc<RefCell<State>>`; each handle is bound to
//! that state plus two closures. The bound closures hold only a `Weak`
//! back-reference, so a handle never extends its owner's lifetime. Handles
//! cache nothing: every access round-trips through the owner's accessors,
//! and `set` returns whatever the setter actually stored (which is how
//! chained assignment propagates a clamped or rejected value).
//!
//! # Binding discipline
//!
//! A handle starts unbound and must be bound exactly once before use, while
//! the owner's state allocation exists. Handles are deliberately not
//! `Clone`: duplicating an owner means building fresh handles, binding them
//! to the new state, and then copying the raw state across. Reads or writes
//! through an unbound handle, or after the owner is gone, panic.
//!
//! ```
//! use propbind::{bind_field, Property};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Default, Clone)]
//! struct GaugeState {
//!     value: i32,
//! }
//!
//! struct Gauge {
//!     state: Rc<RefCell<GaugeState>>,
//!     value: Property<i32>,
//! }
//!
//! impl Gauge {
//!     fn new() -> Self {
//!         let state = Rc::new(RefCell::new(GaugeState::default()));
//!         let mut value = Property::new();
//!         bind_field!(value, &state, GaugeState, value);
//!         Gauge { state, value }
//!     }
//!
//!     // Duplication protocol: fresh handles bound to fresh state, then a
//!     // raw copy of the backing fields.
//!     fn duplicate(&self) -> Self {
//!         let copy = Gauge::new();
//!         *copy.state.borrow_mut() = self.state.borrow().clone();
//!         copy
//!     }
//! }
//!
//! let a = Gauge::new();
//! assert_eq!(a.value.get(), 0);
//! a.value.set(4);
//!
//! let b = a.duplicate();
//! assert_eq!(b.value.get(), 4);
//! b.value.set(10);
//! assert_eq!(a.value.get(), 4); // backing fields are independent
//! ```

pub mod accessor;
pub mod erased;
mod macros;
pub mod pointer;
pub mod step;
pub mod value;

pub use accessor::AccessorPair;
pub use erased::UnaryFn;
pub use pointer::{Link, RefProperty};
pub use step::Step;
pub use value::Property;
