/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Mul, Div};

use num_traits::{Zero, One};

use super::types::V3;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X> V3<X> {
    /// Get a zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    where X: Zero,
    { V3([X::zero(), X::zero(), X::zero()]) }

    /// Construct a vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize) -> X,
    { V3([f(0), f(1), f(2)]) }

    /// Construct a vector from a fallible function on indices, with short-circuiting.
    #[inline(always)]
    pub fn try_from_fn<E, F>(mut f: F) -> Result<Self, E>
    where F: FnMut(usize) -> Result<X, E>,
    { Ok(V3([f(0)?, f(1)?, f(2)?])) }

    /// Get a basis vector.
    #[inline]
    pub fn axis_unit(i: usize) -> Self
    where X: Zero + One,
    {
        let mut v = Self::zero();
        *v.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for 3d vector: {}", i)) = X::one();
        v
    }

    /// Test whether every element is zero.
    #[inline]
    pub fn is_zero(&self) -> bool
    where X: Zero,
    { self.iter().all(Zero::is_zero) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> V3<B>
    where F: FnMut(X) -> B,
    {
        let V3([a, b, c]) = self;
        V3([f(a), f(b), f(c)])
    }

    /// Apply a fallible function to each element, with short-circuiting.
    #[inline]
    pub fn try_map<E, B, F>(self, mut f: F) -> Result<V3<B>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let V3([a, b, c]) = self;
        Ok(V3([f(a)?, f(b)?, f(c)?]))
    }

    /// Apply a function to each element by reference.
    #[inline]
    pub fn map_ref<B, F>(&self, mut f: F) -> V3<B>
    where F: FnMut(&X) -> B,
    { V3([f(&self[0]), f(&self[1]), f(&self[2])]) }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline]
    pub fn dot(&self, other: &Self) -> X
    where X: Clone + Add<Output=X> + Mul<Output=X>,
    {
        let [a0, a1, a2] = self.0.clone();
        let [b0, b1, b2] = other.0.clone();
        a0 * b0 + a1 * b1 + a2 * b2
    }

    /// Get the vector's squared magnitude.
    #[inline]
    pub fn sqnorm(&self) -> X
    where X: Clone + Add<Output=X> + Mul<Output=X>,
    { self.dot(self) }

    /// Cross-product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self
    where X: Clone + Sub<Output=X> + Mul<Output=X>,
    {
        let a = |i: usize| self[i].clone();
        let b = |i: usize| other[i].clone();
        V3([
            a(1) * b(2) - a(2) * b(1),
            a(2) * b(0) - a(0) * b(2),
            a(0) * b(1) - a(1) * b(0),
        ])
    }

    /// Perform elementwise multiplication, or multiplication of a vector by a diagonal
    /// matrix.
    #[inline]
    pub fn mul_diag(&self, other: &Self) -> Self
    where X: Clone + Mul<Output=X>,
    { V3::from_fn(|i| self[i].clone() * other[i].clone()) }

    /// Perform elementwise division, the inverse of `mul_diag`.
    #[inline]
    pub fn div_diag(&self, other: &Self) -> Self
    where X: Clone + Div<Output=X>,
    { V3::from_fn(|i| self[i].clone() / other[i].clone()) }
}

impl V3<f64> {
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }

    /// Normalize the vector.
    #[inline(always)]
    pub fn unit(&self) -> Self
    { self / self.norm() }

    /// Get the shortest angle (as a value in `[0, pi]`) between this vector and another.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> f64
    {
        let arg = dot(self, other) / f64::sqrt(self.sqnorm() * other.sqnorm());
        f64::acos(arg.min(1.0).max(-1.0))
    }
}

/// Inner product of vectors.
///
/// This is basically just `V3::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<X>(a: &V3<X>, b: &V3<X>) -> X
where X: Clone + Add<Output=X> + Mul<Output=X>,
{ a.dot(b) }

// -------------------------- END PUBLIC API ---------------------------------

impl<X: Zero> Zero for V3<X> {
    #[inline]
    fn zero() -> Self
    { V3::zero() }

    #[inline]
    fn is_zero(&self) -> bool
    { V3::is_zero(self) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_right_handed() {
        let x = V3::<i64>::axis_unit(0);
        let y = V3::<i64>::axis_unit(1);
        let z = V3::<i64>::axis_unit(2);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), V3([0, 0, -1]));
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = V3([1i64, -2, 7]);
        let b = V3([4i64, 5, -3]);
        let c = a.cross(&b);
        assert_eq!(dot(&a, &c), 0);
        assert_eq!(dot(&b, &c), 0);
    }

    #[test]
    fn float_helpers() {
        let v = V3([3.0, 0.0, 4.0]);
        assert_eq!(v.norm(), 5.0);
        assert_close!(v.unit(), V3([0.6, 0.0, 0.8]));
        assert_close!(V3([1.0, 0.0, 0.0]).angle_to(&V3([0.0, 2.0, 0.0])), ::std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn diag() {
        let v = V3([0.5, 1.5, 0.0]);
        let n = V3([2.0, 1.0, 3.0]);
        assert_eq!(v.mul_diag(&n), V3([1.0, 1.5, 0.0]));
        assert_eq!(v.mul_diag(&n).div_diag(&n), v);
    }

    #[test]
    fn try_map_short_circuits() {
        let mut calls = 0;
        let out = V3([1, -1, 2]).try_map(|x| {
            calls += 1;
            if x < 0 { Err(x) } else { Ok(x * 2) }
        });
        assert_eq!(out, Err(-1));
        assert_eq!(calls, 2);
    }
}
