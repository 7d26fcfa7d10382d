/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality for floats and nested collections of floats.
//!
//! When a comparison fails, the error names the position of the offending
//! scalar (e.g. `[3][1]` for the y component of the fourth vector), which
//! matters when comparing whole columns of frame vectors.

use std::fmt;

/// Default relative tolerance.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Default absolute tolerance.
///
/// Orthonormal frames are full of components that are zero in exact
/// arithmetic, and a purely relative comparison against zero never passes.
pub const DEFAULT_ZERO_TOL: f64 = 1e-12;

/// Assert that two values are approximately equal.
///
/// ```
/// # #[macro_use] extern crate magframe_assert_close;
/// # fn main() {
/// assert_close!(1.0, 1.0 + 1e-12);
/// assert_close!(abs=1e-8, 0.0, 1e-9);
/// assert_close!(rel=1e-3, abs=0.0, 1000.0, 1000.5, "value #{}", 3);
/// # }
/// ```
#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{ $crate::Tolerances { rel: $rel, abs: $abs }, $($rest)+ }
    };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{ $crate::Tolerances { rel: $rel, abs: $abs }, $($rest)+ }
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{ $crate::Tolerances::default().rel($rel), $($rest)+ }
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_with!{ $crate::Tolerances::default().abs($abs), $($rest)+ }
    };
    ($($rest:tt)+) => {
        $crate::__assert_close_with!{ $crate::Tolerances::default(), $($rest)+ }
    };
}

/// `assert_close!` in debug builds only.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_close!{$($t)*}
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_with {
    ($tol:expr, $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close_with!{ $tol, $a, $b, "values are not close" }
    };
    ($tol:expr, $a:expr, $b:expr, $($fmt:tt)+) => {
        match (&$a, &$b, $tol) {
            (a, b, tol) => {
                if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
                    panic!("{}: {}\n left: {:?}\nright: {:?}", format!($($fmt)+), e, a, b);
                }
            },
        }
    };
}

/// Tolerances for a comparison.  Two floats are close when their difference
/// is within `abs`, or within `rel` times the larger magnitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { abs: DEFAULT_ZERO_TOL, rel: DEFAULT_NONZERO_TOL } }
}

impl Tolerances {
    pub fn abs(self, abs: f64) -> Self
    { Tolerances { abs, ..self } }

    pub fn rel(self, rel: f64) -> Self
    { Tolerances { rel, ..self } }

    /// Whether `a` and `b` are close.  NaN is never close to anything.
    pub fn admits(&self, a: f64, b: f64) -> bool {
        assert!(self.abs >= 0.0 && self.rel >= 0.0, "negative tolerance: {:?}", self);

        // equal infinities
        if a == b {
            return true;
        }
        if !(a.is_finite() && b.is_finite()) {
            return false;
        }
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * f64::max(a.abs(), b.abs())
    }
}

/// The first pair of scalars that were not close.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Indices leading to the scalar, outermost first.
    pub path: Vec<usize>,
    pub left: f64,
    pub right: f64,
    pub tol: Tolerances,
}

impl Mismatch {
    fn at(mut self, index: usize) -> Self {
        self.path.insert(0, index);
        self
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at ")?;
        if self.path.is_empty() {
            write!(f, "top level")?;
        }
        for index in &self.path {
            write!(f, "[{}]", index)?;
        }
        write!(
            f, ", {:e} vs {:e} (tolerances: abs={:e}, rel={:e})",
            self.left, self.right, self.tol.abs, self.tol.rel,
        )
    }
}

impl std::error::Error for Mismatch {}

pub trait CheckClose<Rhs: ?Sized = Self> {
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), Mismatch>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), Mismatch> {
        match tol.admits(*self, *other) {
            true => Ok(()),
            false => Err(Mismatch { path: vec![], left: *self, right: *other, tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), Mismatch>
    { (**self).check_close(*other, tol) }
}

// A length mismatch is a bug in the test, not a precision problem.
impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), Mismatch> {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at(i))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), Mismatch>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), Mismatch>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), Mismatch>
    { self[..].check_close(&other[..], tol) }
}

impl<A: CheckClose, B: CheckClose> CheckClose for (A, B) {
    fn check_close(&self, other: &(A, B), tol: Tolerances) -> Result<(), Mismatch> {
        self.0.check_close(&other.0, tol).map_err(|e| e.at(0))?;
        self.1.check_close(&other.1, tol).map_err(|e| e.at(1))
    }
}

impl<A: CheckClose, B: CheckClose, C: CheckClose> CheckClose for (A, B, C) {
    fn check_close(&self, other: &(A, B, C), tol: Tolerances) -> Result<(), Mismatch> {
        self.0.check_close(&other.0, tol).map_err(|e| e.at(0))?;
        self.1.check_close(&other.1, tol).map_err(|e| e.at(1))?;
        self.2.check_close(&other.2, tol).map_err(|e| e.at(2))
    }
}
