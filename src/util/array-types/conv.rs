/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use super::types::V3;

/// Transformations from sequences of arrays into sequences of `V3`.
pub trait Envee {
    type En;

    /// Casts a sequence of arrays into `V3`s.
    fn envee(self) -> Self::En;
}

/// Transformations from sequences of `V3` into sequences of arrays.
pub trait Unvee {
    type Un;

    /// Casts a sequence of `V3`s into arrays.
    fn unvee(self) -> Self::Un;
}

// `V3` is `repr(transparent)` over `[X; 3]`, so these pointer casts are sound.
impl<'a, X> Envee for &'a [[X; 3]] {
    type En = &'a [V3<X>];

    #[inline(always)]
    fn envee(self) -> Self::En
    { unsafe { std::slice::from_raw_parts(self.as_ptr() as *const V3<X>, self.len()) } }
}

impl<'a, X> Unvee for &'a [V3<X>] {
    type Un = &'a [[X; 3]];

    #[inline(always)]
    fn unvee(self) -> Self::Un
    { unsafe { std::slice::from_raw_parts(self.as_ptr() as *const [X; 3], self.len()) } }
}

// These go through an iterator; collecting into a Vec of the same layout
// reuses the allocation.
impl<X> Envee for Vec<[X; 3]> {
    type En = Vec<V3<X>>;

    #[inline]
    fn envee(self) -> Self::En
    { self.into_iter().map(V3).collect() }
}

impl<X> Unvee for Vec<V3<X>> {
    type Un = Vec<[X; 3]>;

    #[inline]
    fn unvee(self) -> Self::Un
    { self.into_iter().map(|V3(arr)| arr).collect() }
}
