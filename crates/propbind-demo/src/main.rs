#![forbid(unsafe_code)]

//! Walk-through of the property system: an owner with an unrestricted
//! integer, a float that only accepts strictly positive values, and a
//! reference property, driven through writes, a rejected write, chained
//! assignment, indirection, and clearing to null.
//!
//! Run with `RUST_LOG=propbind=debug` to see the bind/write events.

use propbind::{bind_field, getter, Link, Property, RefProperty};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct SampleState {
    i: i32,
    f: f32,
    p: Link<RefCell<i32>>,
}

struct Sample {
    /// Never read after construction, but the handles only hold weak
    /// back-references; the owner must keep the state alive.
    _state: Rc<RefCell<SampleState>>,
    i: Property<i32>,
    f: Property<f32>,
    p: RefProperty<RefCell<i32>>,
}

impl Sample {
    fn new() -> Self {
        let state = Rc::new(RefCell::new(SampleState::default()));

        let mut i = Property::new();
        bind_field!(i, &state, SampleState, i);

        let mut f = Property::new();
        f.bind(&state, getter!(SampleState, f), |s: &mut SampleState, v: f32| {
            if v > 0.0 {
                s.f = v;
            }
            s.f
        });

        let mut p = RefProperty::new();
        bind_field!(p, &state, SampleState, p);

        Sample {
            _state: state,
            i,
            f,
            p,
        }
    }

    fn print(&self) {
        let p = match self.p.get() {
            Some(cell) => format!("{:p} ({})", Rc::as_ptr(&cell), cell.borrow()),
            None => String::from("null (0)"),
        };
        println!("i: {}; f: {}; p: {p}", self.i, self.f);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    tracing::info!(message = "demo.start");

    let e = Sample::new();
    e.print(); // all zero / null

    e.i.set(14);
    e.f.set(2.3);
    e.p.set(Some(Rc::new(RefCell::new(0))));
    *e.p.target().borrow_mut() = 5;
    e.print(); // assigned values

    e.f.set(-1.0);
    e.print(); // f unchanged: the setter rejected the write

    e.i.set(e.f.get() as i32);
    e.print(); // i is the integer part of f

    e.f.set(5.5);
    e.print(); // only f changed

    // Chained assignment: i receives what f's setter actually stored.
    e.i.set(e.f.set(9.3) as i32);
    e.print(); // i: 9; f: 9.3

    e.i.set(*e.p.target().borrow());
    e.print(); // i equals the value behind p

    e.p.clear();
    e.print(); // p is null again
}
