#![forbid(unsafe_code)]

//! Value properties: the handle type for non-reference fields.
//!
//! # Design
//!
//! [`Property<V>`] is a thin façade over an exclusively-owned
//! [`AccessorPair<V>`]. It adds the operation surface that makes sense for
//! plain values — read, write, pre/post increment and decrement, and the
//! compound updates — and nothing else. Every operation round-trips through
//! the owner's accessors; the handle holds no value of its own.
//!
//! Each compound update carries its own `std::ops` bound, so an operation
//! the value type cannot support (`&` on a float, say) simply does not
//! exist for that instantiation; the mismatch is a type error, not a
//! runtime one. The
//! corresponding assign operators (`+=`, `<<=`, ...) forward to the named
//! methods and discard the returned value, since Rust's assign operators
//! return `()`.
//!
//! # The copy trap
//!
//! `Property` is deliberately **not** `Clone`. A verbatim copy of a handle
//! would still invoke the *source* owner's accessors — the classic stale
//! binding. Duplicating an owner means constructing fresh handles and
//! binding them to the new instance; see the crate docs for the pattern.

use std::cell::RefCell;
use std::ops;
use std::rc::Rc;

use crate::accessor::AccessorPair;
use crate::step::Step;

/// A value-like handle routing all access through one owner's getter and
/// setter.
pub struct Property<V> {
    pair: AccessorPair<V>,
}

impl<V: 'static> Property<V> {
    /// An unbound handle. Reads and writes panic until
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
        get: impl Fn(&O) -> V + 'static,
        set: impl Fn(&mut O, V) -> V + 'static,
    ) {
        self.pair.bind(owner, get, set);
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.pair.is_bound()
    }

    /// Current value of the backing field, via the owner's getter.
    #[must_use]
    pub fn get(&self) -> V {
        self.pair.read()
    }

    /// Offer `v` to the owner's setter.
    ///
    /// Returns what was actually stored. Chained assignment propagates the
    /// validated value right-to-left: `a.set(b.set(x))` hands `a` whatever
    /// `b`'s setter kept, not the original `x`.
    pub fn set(&self, v: V) -> V {
        self.pair.write(v)
    }
}

impl<V: Step + 'static> Property<V> {
    /// `++p`: returns the stored post-update value.
    pub fn pre_increment(&self) -> V {
        self.pair.pre_increment()
    }

    /// `--p`: returns the stored post-update value.
    pub fn pre_decrement(&self) -> V {
        self.pair.pre_decrement()
    }
}

impl<V: Step + Clone + 'static> Property<V> {
    /// `p++`: returns the value from *before* the update.
    pub fn post_increment(&self) -> V {
        self.pair.post_increment()
    }

    /// `p--`: returns the value from *before* the update.
    pub fn post_decrement(&self) -> V {
        self.pair.post_decrement()
    }
}

/// Compound updates. Each reads, applies the operation, writes the result
/// through the setter, and returns what the setter stored.
impl<V: 'static> Property<V> {
    pub fn add<T>(&self, rhs: T) -> V
    where
        V: ops::Add<T, Output = V>,
    {
        self.pair.apply(|v| v + rhs)
    }

    pub fn sub<T>(&self, rhs: T) -> V
    where
        V: ops::Sub<T, Output = V>,
    {
        self.pair.apply(|v| v - rhs)
    }

    pub fn mul<T>(&self, rhs: T) -> V
    where
        V: ops::Mul<T, Output = V>,
    {
        self.pair.apply(|v| v * rhs)
    }

    pub fn div<T>(&self, rhs: T) -> V
    where
        V: ops::Div<T, Output = V>,
    {
        self.pair.apply(|v| v / rhs)
    }

    pub fn rem<T>(&self, rhs: T) -> V
    where
        V: ops::Rem<T, Output = V>,
    {
        self.pair.apply(|v| v % rhs)
    }

    pub fn bitand<T>(&self, rhs: T) -> V
    where
        V: ops::BitAnd<T, Output = V>,
    {
        self.pair.apply(|v| v & rhs)
    }

    pub fn bitor<T>(&self, rhs: T) -> V
    where
        V: ops::BitOr<T, Output = V>,
    {
        self.pair.apply(|v| v | rhs)
    }

    pub fn bitxor<T>(&self, rhs: T) -> V
    where
        V: ops::BitXor<T, Output = V>,
    {
        self.pair.apply(|v| v ^ rhs)
    }

    pub fn shl<T>(&self, rhs: T) -> V
    where
        V: ops::Shl<T, Output = V>,
    {
        self.pair.apply(|v| v << rhs)
    }

    pub fn shr<T>(&self, rhs: T) -> V
    where
        V: ops::Shr<T, Output = V>,
    {
        self.pair.apply(|v| v >> rhs)
    }
}

// The bound trait is the non-assign counterpart of the assign trait being
// implemented; spelled out per operator since macro_rules cannot derive it.
macro_rules! assign_sugar {
    ($(($assign:ident, $assign_fn:ident, $bound:ident, $named:ident)),* $(,)?) => {
        $(
            impl<V, T> ops::$assign<T> for Property<V>
            where
                V: ops::$bound<T, Output = V> + 'static,
            {
                fn $assign_fn(&mut self, rhs: T) {
                    let _ = Property::$named(self, rhs);
                }
            }
        )*
    };
}

assign_sugar!(
    (AddAssign, add_assign, Add, add),
    (SubAssign, sub_assign, Sub, sub),
    (MulAssign, mul_assign, Mul, mul),
    (DivAssign, div_assign, Div, div),
    (RemAssign, rem_assign, Rem, rem),
    (BitAndAssign, bitand_assign, BitAnd, bitand),
    (BitOrAssign, bitor_assign, BitOr, bitor),
    (BitXorAssign, bitxor_assign, BitXor, bitxor),
    (ShlAssign, shl_assign, Shl, shl),
    (ShrAssign, shr_assign, Shr, shr),
);

impl<V: 'static> Default for Property<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq + 'static> PartialEq<V> for Property<V> {
    fn eq(&self, other: &V) -> bool {
        self.get() == *other
    }
}

impl<V: PartialEq + 'static> PartialEq for Property<V> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<V: std::fmt::Debug + 'static> std::fmt::Debug for Property<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_bound() {
            write!(f, "Property({:?})", self.get())
        } else {
            f.write_str("Property(unbound)")
        }
    }
}

impl<V: std::fmt::Display + 'static> std::fmt::Display for Property<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_bound() {
            self.get().fmt(f)
        } else {
            f.write_str("<unbound>")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
