/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Neg, Mul, Div};
use std::ops::{AddAssign, SubAssign};

use super::types::V3;

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
//       Exact scalars are not Copy, so the by-reference forms clone.
macro_rules! impl_v_add_sub {
    ($Op:ident :: $op:ident) => {
        impl<X: $Op<Output=X>> $Op<V3<X>> for V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $op(self, other: V3<X>) -> Self::Output {
                let V3([a0, a1, a2]) = self;
                let V3([b0, b1, b2]) = other;
                V3([a0.$op(b0), a1.$op(b1), a2.$op(b2)])
            }
        }

        impl<'b, X: Clone + $Op<Output=X>> $Op<&'b V3<X>> for V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $op(self, other: &'b V3<X>) -> Self::Output
            { self.$op(other.clone()) }
        }

        impl<'a, X: Clone + $Op<Output=X>> $Op<V3<X>> for &'a V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $op(self, other: V3<X>) -> Self::Output
            { self.clone().$op(other) }
        }

        impl<'a, 'b, X: Clone + $Op<Output=X>> $Op<&'b V3<X>> for &'a V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $op(self, other: &'b V3<X>) -> Self::Output
            { self.clone().$op(other.clone()) }
        }
    };
}

impl_v_add_sub!(Add::add);
impl_v_add_sub!(Sub::sub);

impl<X: Clone + Add<Output=X>> AddAssign<V3<X>> for V3<X> {
    #[inline]
    fn add_assign(&mut self, other: V3<X>)
    { *self = self.clone() + other; }
}

impl<X: Clone + Sub<Output=X>> SubAssign<V3<X>> for V3<X> {
    #[inline]
    fn sub_assign(&mut self, other: V3<X>)
    { *self = self.clone() - other; }
}

// ---------------------------------------------------------------------------
// vector unary ops

impl<X: Neg<Output=X>> Neg for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn neg(self) -> Self::Output
    { self.map(|x| -x) }
}

impl<'a, X: Clone + Neg<Output=X>> Neg for &'a V3<X> {
    type Output = V3<X>;

    #[inline]
    fn neg(self) -> Self::Output
    { -self.clone() }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// vector `op` scalar
macro_rules! impl_v_scalar_op {
    ($Op:ident :: $op:ident) => {
        impl<X: Clone + $Op<Output=X>> $Op<X> for V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $op(self, scalar: X) -> Self::Output
            { self.map(|x| x.$op(scalar.clone())) }
        }

        impl<'a, X: Clone + $Op<Output=X>> $Op<X> for &'a V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $op(self, scalar: X) -> Self::Output
            { self.clone().$op(scalar) }
        }

        impl<'a, 'b, X: Clone + $Op<Output=X>> $Op<&'b X> for &'a V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $op(self, scalar: &'b X) -> Self::Output
            { self.clone().$op(scalar.clone()) }
        }
    };
}

impl_v_scalar_op!(Mul::mul);
impl_v_scalar_op!(Div::div);

// scalar * vector, for the primitive floats only. (coherence forbids the generic version)
impl Mul<V3<f64>> for f64 {
    type Output = V3<f64>;

    #[inline]
    fn mul(self, vector: V3<f64>) -> Self::Output
    { vector * self }
}

impl<'a> Mul<&'a V3<f64>> for f64 {
    type Output = V3<f64>;

    #[inline]
    fn mul(self, vector: &'a V3<f64>) -> Self::Output
    { vector * self }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn by_value_and_by_ref_agree() {
        let a = V3([1i64, 2, 3]);
        let b = V3([10i64, -20, 30]);

        assert_eq!(a + b, V3([11, -18, 33]));
        assert_eq!(&a + &b, a + b);
        assert_eq!(&a - b, V3([-9, 22, -27]));
        assert_eq!(a - &b, &a - &b);
        assert_eq!(-&a, V3([-1, -2, -3]));
    }

    #[test]
    fn scalar_ops() {
        let a = V3([1.0, -2.0, 4.0]);
        assert_eq!(&a * 2.0, V3([2.0, -4.0, 8.0]));
        assert_eq!(2.0 * &a, &a * &2.0);
        assert_eq!(&a / 4.0, V3([0.25, -0.5, 1.0]));
    }

    #[test]
    fn assign_ops() {
        let mut a = V3([1, 1, 1]);
        a += V3([1, 2, 3]);
        assert_eq!(a, V3([2, 3, 4]));
        a -= V3([2, 2, 2]);
        assert_eq!(a, V3([0, 1, 2]));
    }
}
