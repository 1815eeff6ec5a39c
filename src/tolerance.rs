use std::fmt;
use std::ops::{Add, Sub};

/// Operand types that support margin-bearing approximate comparison.
/// Implemented for `f32` and `f64`; everything else compares exactly.
pub trait Tolerance:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + fmt::Display
{
    fn magnitude(self) -> Self;
}

macro_rules! impl_tolerance {
    ($($t:ty),*) => {$(
        impl Tolerance for $t {
            fn magnitude(self) -> Self {
                self.abs()
            }
        }
    )*};
}

impl_tolerance!(f32, f64);

/// `|lhs - rhs| <= margin`, boundary inclusive.
pub(crate) fn equal_within<F: Tolerance>(lhs: F, rhs: F, margin: F) -> bool {
    (lhs - rhs).magnitude() <= margin
}

/// `|lhs - rhs| > margin`.
pub(crate) fn not_equal_within<F: Tolerance>(lhs: F, rhs: F, margin: F) -> bool {
    (lhs - rhs).magnitude() > margin
}

// The four ordering forms widen the boundary outward by |margin|: the margin
// makes the requirement stricter, the opposite of equal_within. Callers see
// this documented on the Tester methods.

pub(crate) fn greater_than_within<F: Tolerance>(lhs: F, rhs: F, margin: F) -> bool {
    lhs > rhs + margin.magnitude()
}

pub(crate) fn greater_or_equal_within<F: Tolerance>(lhs: F, rhs: F, margin: F) -> bool {
    lhs >= rhs + margin.magnitude()
}

pub(crate) fn less_than_within<F: Tolerance>(lhs: F, rhs: F, margin: F) -> bool {
    lhs < rhs - margin.magnitude()
}

pub(crate) fn less_or_equal_within<F: Tolerance>(lhs: F, rhs: F, margin: F) -> bool {
    lhs <= rhs - margin.magnitude()
}
