/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::ops::{Add, Sub, Mul, Neg};
use std::str::FromStr;

use num_traits::{Zero, One};

use magframe_array_types::V3;
use magframe_exact::Surd;

/// Absolute tolerance below which a floating point component counts as zero
/// when testing for the degenerate `moment ∥ x̂` case.
pub const DEFAULT_ZERO_TOL: f64 = 1e-10;

/// An arithmetic backend for the frame builder.
///
/// The backend decides three things: the scalar type (ring operations come
/// from its `std::ops` impls), how values are simplified between steps, and
/// what counts as zero for the purpose of the degenerate-axis fallback.
/// Square roots and division live here rather than on the scalar because
/// they can fail.
pub trait Arithmetic {
    type Scalar: Clone + fmt::Debug + fmt::Display + PartialEq
        + Add<Output=Self::Scalar>
        + Sub<Output=Self::Scalar>
        + Mul<Output=Self::Scalar>
        + Neg<Output=Self::Scalar>
        + Zero + One;

    /// Short human-readable name, for logging.
    fn name(&self) -> &'static str;

    /// Bring a value to canonical form before it is inspected or reused.
    fn simplify(&self, x: Self::Scalar) -> Self::Scalar;

    /// The degeneracy predicate.
    fn is_negligible(&self, x: &Self::Scalar) -> bool;

    /// Non-negative square root, if one is representable.
    fn sqrt(&self, x: &Self::Scalar) -> Option<Self::Scalar>;

    /// `a / b`, or `None` if `b` is exactly zero.
    fn div(&self, a: &Self::Scalar, b: &Self::Scalar) -> Option<Self::Scalar>;

    /// Euclidean norm, if one is representable.
    fn norm(&self, v: &V3<Self::Scalar>) -> Option<Self::Scalar>
    { self.sqrt(&self.simplify(v.sqnorm())) }

    /// Whether a magnitude can be divided by and still give a unit vector.
    fn is_finite(&self, x: &Self::Scalar) -> bool
    { let _ = x; true }
}

/// IEEE double precision, with an absolute tolerance for zero tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Numeric {
    pub zero_tol: f64,
}

impl Default for Numeric {
    fn default() -> Self
    { Numeric { zero_tol: DEFAULT_ZERO_TOL } }
}

impl Arithmetic for Numeric {
    type Scalar = f64;

    fn name(&self) -> &'static str { "numeric" }

    #[inline]
    fn simplify(&self, x: f64) -> f64 { x }

    #[inline]
    fn is_negligible(&self, x: &f64) -> bool
    { x.abs() <= self.zero_tol }

    #[inline]
    fn sqrt(&self, x: &f64) -> Option<f64> {
        match *x < 0.0 {
            true => None,
            false => Some(x.sqrt()),
        }
    }

    #[inline]
    fn div(&self, a: &f64, b: &f64) -> Option<f64> {
        match *b == 0.0 {
            true => None,
            false => Some(a / b),
        }
    }

    // Scaled by the largest component first, so that moments whose squared
    // norm overflows (or underflows) still get a finite magnitude.
    fn norm(&self, v: &V3) -> Option<f64> {
        if !v.iter().all(|x| x.is_finite()) {
            return Some(::std::f64::NAN);
        }
        let scale = v.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()));
        match scale == 0.0 {
            true => Some(0.0),
            false => Some(scale * (v / scale).norm()),
        }
    }

    #[inline]
    fn is_finite(&self, x: &f64) -> bool
    { x.is_finite() }
}

/// Exact closed-form arithmetic on [`Surd`]s.
///
/// Zero tests are exact, so a moment is only treated as parallel to x̂ when
/// it really is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Exact;

impl Arithmetic for Exact {
    type Scalar = Surd;

    fn name(&self) -> &'static str { "exact" }

    // Surd operations already return canonical forms.
    #[inline]
    fn simplify(&self, x: Surd) -> Surd { x }

    #[inline]
    fn is_negligible(&self, x: &Surd) -> bool
    { x.is_zero() }

    fn sqrt(&self, x: &Surd) -> Option<Surd>
    { x.sqrt() }

    fn div(&self, a: &Surd, b: &Surd) -> Option<Surd>
    { a.checked_div(b) }
}

/// Runtime choice between [`Exact`] and [`Numeric`].
///
/// The algorithms take the backend as a type parameter; this enum is for
/// callers that learn the mode from their input and dispatch once.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
pub enum Mode {
    #[cfg_attr(feature = "serde-support", serde(alias = "symbolic"))]
    Exact,
    Numeric,
}

impl Default for Mode {
    fn default() -> Self { Mode::Numeric }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Mode, String> {
        match s {
            "exact" | "symbolic" => Ok(Mode::Exact),
            "numeric" => Ok(Mode::Numeric),
            _ => Err(format!("invalid mode {:?} (expected 'exact' or 'numeric')", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Exact => write!(f, "exact"),
            Mode::Numeric => write!(f, "numeric"),
        }
    }
}

// ---------------------------------------------------------------------------
// vector helpers

pub(crate) fn simplify_v<A: Arithmetic>(arith: &A, v: V3<A::Scalar>) -> V3<A::Scalar>
{ v.map(|x| arith.simplify(x)) }

pub(crate) fn div_v<A: Arithmetic>(arith: &A, v: &V3<A::Scalar>, s: &A::Scalar) -> Option<V3<A::Scalar>>
{ V3::try_from_fn(|k| arith.div(&v[k], s).ok_or(())).ok() }

pub(crate) fn is_negligible_v<A: Arithmetic>(arith: &A, v: &V3<A::Scalar>) -> bool
{ v.iter().all(|x| arith.is_negligible(x)) }
