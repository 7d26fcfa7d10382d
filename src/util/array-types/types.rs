/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

use magframe_assert_close::{CheckClose, Mismatch, Tolerances};

/// A 3-dimensional vector with operations for linear algebra.
///
/// The layout is identical to `[X; 3]`, which is what makes the zero-cost
/// conversions in `Envee` and `Unvee` possible.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(transparent))]
#[repr(transparent)]
pub struct V3<X=f64>(pub [X; 3]);

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

impl<X> Deref for V3<X> {
    type Target = [X; 3];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X> DerefMut for V3<X> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, X> IntoIterator for &'a V3<X> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, X> IntoIterator for &'a mut V3<X> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<X> From<[X; 3]> for V3<X> {
    #[inline(always)]
    fn from(arr: [X; 3]) -> Self
    { V3(arr) }
}

// forward the debug impl without a surrounding "V3(...)", so that debug
// output of a list of vectors is valid JSON (or python) when X is a float.
impl<X: fmt::Debug> fmt::Debug for V3<X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<X: fmt::Display> fmt::Display for V3<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

impl<T: CheckClose> CheckClose for V3<T> {
    fn check_close(&self, other: &V3<T>, tol: Tolerances) -> Result<(), Mismatch>
    { self.0.check_close(&other.0, tol) }
}
