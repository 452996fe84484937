#![forbid(unsafe_code)]

//! Accessor synthesis macros.
//!
//! Most properties are plain passthroughs: the getter returns the backing
//! field, the setter stores the candidate unconditionally and reports the
//! field back. These macros spell that wiring once. An owner that wants a
//! validating setter writes that closure by hand and pairs it with
//! [`getter!`].

/// A passthrough getter closure for `field` on `State`.
#[macro_export]
macro_rules! getter {
    ($State:ty, $field:ident) => {
        |state: &$State| state.$field.clone()
    };
}

/// A passthrough setter closure for `field` on `State`: stores the
/// candidate and returns the field afterwards.
#[macro_export]
macro_rules! setter {
    ($State:ty, $field:ident) => {
        |state: &mut $State, value| {
            state.$field = value;
            state.$field.clone()
        }
    };
}

/// Bind `prop` to `field` on `State` with passthrough accessors in one
/// step.
#[macro_export]
macro_rules! bind_field {
    ($prop:expr, $owner:expr, $State:ty, $field:ident) => {
        $prop.bind($owner, $crate::getter!($State, $field), $crate::setter!($State, $field))
    };
}
