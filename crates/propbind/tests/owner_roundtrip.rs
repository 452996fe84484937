//! End-to-end owner scenarios: a four-property owner driven through
//! construction, writes, rejected writes, chained assignment, duplication,
//! and reference-property indirection.

use propbind::{bind_field, getter, Link, Property, RefProperty};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Clone)]
struct ProbeState {
    n: i32,
    m: f32,
    d: f64,
    o: Link<Probe>,
}

/// An owner with three numeric properties and one reference property.
/// `d`'s setter only accepts non-negative values.
struct Probe {
    state: Rc<RefCell<ProbeState>>,
    n: Property<i32>,
    m: Property<f32>,
    d: Property<f64>,
    o: RefProperty<Probe>,
}

impl Probe {
    fn new() -> Self {
        let state = Rc::new(RefCell::new(ProbeState::default()));

        let mut n = Property::new();
        bind_field!(n, &state, ProbeState, n);

        let mut m = Property::new();
        bind_field!(m, &state, ProbeState, m);

        let mut d = Property::new();
        d.bind(&state, getter!(ProbeState, d), |s: &mut ProbeState, v: f64| {
            if v >= 0.0 {
                s.d = v;
            }
            s.d
        });

        let mut o = RefProperty::new();
        bind_field!(o, &state, ProbeState, o);

        Probe { state, n, m, d, o }
    }

    /// Duplication protocol: fresh state and freshly bound handles via
    /// `new()`, then a raw copy of the backing fields. Reference fields
    /// copy shallowly — both owners share the pointee.
    fn duplicate(&self) -> Self {
        let copy = Probe::new();
        *copy.state.borrow_mut() = self.state.borrow().clone();
        copy
    }
}

#[test]
fn fresh_owner_is_all_zero() {
    let a = Probe::new();
    assert_eq!(a.n.get(), 0);
    assert_eq!(a.m.get(), 0.0);
    assert_eq!(a.d.get(), 0.0);
    assert!(a.o.is_null());
}

#[test]
fn writes_are_independent_per_property() {
    let a = Probe::new();
    a.n.set(1);
    a.m.set(2.0);
    assert_eq!(a.n.get(), 1);
    assert_eq!(a.m.get(), 2.0);

    a.n.set(4);
    assert_eq!(a.n.get(), 4);
    assert_eq!(a.m.get(), 2.0);

    a.m.set(5.0);
    assert_eq!(a.n.get(), 4);
    assert_eq!(a.m.get(), 5.0);
}

#[test]
fn cross_property_assignment() {
    let a = Probe::new();
    a.m.set(2.0);
    a.n.set(a.m.get() as i32);
    assert_eq!(a.n.get(), 2);
    assert_eq!(a.m.get(), 2.0);

    // d = n + m
    a.n.set(4);
    a.m.set(5.0);
    a.d.set(f64::from(a.n.get()) + f64::from(a.m.get()));
    assert_eq!(a.d.get(), 9.0);
}

#[test]
fn chained_assignment_flows_right_to_left() {
    let a = Probe::new();
    // n = m = 3: n receives what m's setter stored.
    a.n.set(a.m.set(3.0) as i32);
    assert_eq!(a.n.get(), 3);
    assert_eq!(a.m.get(), 3.0);
}

#[test]
fn validating_setter_keeps_previous_value() {
    let a = Probe::new();
    a.d.set(9.0);
    a.d.set(-1.0);
    assert_eq!(a.d.get(), 9.0);
}

#[test]
fn duplication_copies_values_and_rebinds() {
    let a = Probe::new();
    a.n.set(4);
    a.m.set(5.0);
    a.d.set(9.0);

    let b = a.duplicate();
    assert_eq!(b.n.get(), 4);
    assert_eq!(b.m.get(), 5.0);
    assert_eq!(b.d.get(), 9.0);

    // The copy's handles must target the copy's state, not the source's.
    b.n.set(10);
    assert_eq!(b.n.get(), 10);
    assert_eq!(a.n.get(), 4);
    a.m.set(6.0);
    assert_eq!(b.m.get(), 5.0);
}

#[test]
fn reference_property_indirection() {
    let a = Probe::new();
    a.n.set(4);

    let pointee = Rc::new(Probe::new());
    a.o.set(Some(Rc::clone(&pointee)));
    assert!(a.o.points_to(&pointee));

    // Fresh pointee reads all zero through the reference.
    a.o.with(|p| {
        assert_eq!(p.n.get(), 0);
        assert!(p.o.is_null());
    });

    // Mutating the pointee through indirection leaves the holder alone.
    a.o.target().n.set(10);
    assert_eq!(a.n.get(), 4);
    assert_eq!(a.o.target().n.get(), 10);

    // Identity is stable until reassigned or cleared.
    assert!(a.o.points_to(&pointee));
    a.o.clear();
    assert!(a.o.is_null());
}

#[test]
fn duplicating_the_pointee_detaches_it() {
    let a = Probe::new();
    let pointee = Rc::new(Probe::new());
    pointee.n.set(10);
    a.o.set(Some(Rc::clone(&pointee)));

    let c = a.o.target().duplicate();
    assert_eq!(c.n.get(), 10);

    c.n.set(11);
    assert_eq!(c.n.get(), 11);
    assert_eq!(a.o.target().n.get(), 10);
}

#[test]
fn duplication_shares_reference_targets() {
    let a = Probe::new();
    let pointee = Rc::new(Probe::new());
    a.o.set(Some(Rc::clone(&pointee)));

    // Shallow link copy: both owners point at the same target.
    let b = a.duplicate();
    assert!(b.o.points_to(&pointee));
    b.o.target().n.set(21);
    assert_eq!(a.o.target().n.get(), 21);
}

#[test]
fn negation_and_equality_through_reads() {
    let a = Probe::new();
    a.n.set(4);
    a.n.set(-a.n.get());
    assert_eq!(a.n.get(), -4);

    a.n.set(12);
    a.m.set(12.0);
    assert_eq!(f64::from(a.n.get()), f64::from(a.m.get()));
}

#[test]
fn increment_decrement_walkthrough() {
    let a = Probe::new();
    a.n.set(12);

    a.n.pre_increment();
    assert_eq!(a.n.get(), 13);
    a.n.post_increment();
    assert_eq!(a.n.get(), 14);
    a.n.pre_decrement();
    assert_eq!(a.n.get(), 13);
    a.n.post_decrement();
    assert_eq!(a.n.get(), 12);

    a.n.set(0);
    let v = a.n.post_increment();
    assert_eq!((v, a.n.get()), (0, 1));
    let v = a.n.pre_increment();
    assert_eq!((v, a.n.get()), (2, 2));
    let v = a.n.post_decrement();
    assert_eq!((v, a.n.get()), (2, 1));
    let v = a.n.pre_decrement();
    assert_eq!((v, a.n.get()), (0, 0));
}
