#![forbid(unsafe_code)]

//! Unit stepping for increment/decrement support.
//!
//! A property only exposes `++`/`--` when its value type knows how to move
//! one unit in either direction. Keeping this a trait bound (rather than a
//! runtime check) means types without a unit step simply never grow the
//! operations.

/// Move a value one unit forward or backward.
pub trait Step: Sized {
    fn forward(self) -> Self;
    fn backward(self) -> Self;
}

macro_rules! int_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline]
                fn forward(self) -> Self {
                    self + 1
                }

                #[inline]
                fn backward(self) -> Self {
                    self - 1
                }
            }
        )*
    };
}

macro_rules! float_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline]
                fn forward(self) -> Self {
                    self + 1.0
                }

                #[inline]
                fn backward(self) -> Self {
                    self - 1.0
                }
            }
        )*
    };
}

int_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_step!(f32, f64);
