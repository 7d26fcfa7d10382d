/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use magframe_array_types::V3;

use crate::{Error, Result};
use crate::arith::{Arithmetic, simplify_v, div_v, is_negligible_v};

/// Local frames for a set of moments, column-aligned with the moments.
///
/// For each column `i`, `(e1[i], e2[i], e3[i])` is orthonormal and
/// right-handed (`e1 × e2 = e3`), and `e3[i]` points along moment `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frames<X = f64> {
    pub e1: Vec<V3<X>>,
    pub e2: Vec<V3<X>>,
    pub e3: Vec<V3<X>>,
    /// Magnitude of each moment.
    pub magnitudes: Vec<X>,
}

/// One column of [`Frames`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameRef<'a, X> {
    pub e1: &'a V3<X>,
    pub e2: &'a V3<X>,
    pub e3: &'a V3<X>,
    pub magnitude: &'a X,
}

impl<X> Frames<X> {
    fn with_capacity(n: usize) -> Self {
        Frames {
            e1: Vec::with_capacity(n),
            e2: Vec::with_capacity(n),
            e3: Vec::with_capacity(n),
            magnitudes: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize { self.e3.len() }
    pub fn is_empty(&self) -> bool { self.e3.is_empty() }

    pub fn get(&self, i: usize) -> Option<FrameRef<'_, X>> {
        Some(FrameRef {
            e1: self.e1.get(i)?,
            e2: self.e2.get(i)?,
            e3: self.e3.get(i)?,
            magnitude: self.magnitudes.get(i)?,
        })
    }

    /// Convert every scalar, e.g. from exact values to floats for output.
    pub fn map_scalars<B, F>(self, mut f: F) -> Frames<B>
    where F: FnMut(X) -> B,
    {
        let Frames { e1, e2, e3, magnitudes } = self;
        let mut map_vs = |vs: Vec<V3<X>>| vs.into_iter().map(|v| v.map(&mut f)).collect::<Vec<_>>();
        let e1 = map_vs(e1);
        let e2 = map_vs(e2);
        let e3 = map_vs(e3);
        let magnitudes = magnitudes.into_iter().map(&mut f).collect();
        Frames { e1, e2, e3, magnitudes }
    }
}

/// Compute the local frame of every moment.
///
/// Per moment `m`:
///
/// * `e3 = m / |m|`
/// * `e2 = normalize(e3 × x̂)`, or `ẑ` if `e3 × x̂` is zero according to the
///   backend (which happens exactly when `m ∥ x̂`)
/// * `e1 = e2 × e3`
///
/// An empty input gives empty frames.
///
/// # Errors
///
/// * [`Error::DivisionByZero`] if a moment is exactly zero.
/// * [`Error::NonFinite`] (floating point only) if a moment has a NaN or
///   infinite component, or a magnitude too large for an `f64`.
/// * [`Error::NotRepresentable`] (exact arithmetic only) if a magnitude has
///   no closed form.
pub fn build_frames<A: Arithmetic>(arith: &A, moments: &[V3<A::Scalar>]) -> Result<Frames<A::Scalar>> {
    let mut frames = Frames::with_capacity(moments.len());
    let mut num_degenerate = 0;

    for (index, moment) in moments.iter().enumerate() {
        let LocalFrame { e1, e2, e3, magnitude, degenerate } = local_frame(arith, index, moment)?;
        if degenerate {
            trace!("moment #{} is parallel to x; e2 falls back to z", index);
            num_degenerate += 1;
        }
        frames.e1.push(e1);
        frames.e2.push(e2);
        frames.e3.push(e3);
        frames.magnitudes.push(magnitude);
    }

    debug!(
        "built {} local frames with {} arithmetic ({} parallel to x)",
        frames.len(), arith.name(), num_degenerate,
    );
    Ok(frames)
}

struct LocalFrame<X> {
    e1: V3<X>,
    e2: V3<X>,
    e3: V3<X>,
    magnitude: X,
    degenerate: bool,
}

fn local_frame<A: Arithmetic>(arith: &A, index: usize, moment: &V3<A::Scalar>) -> Result<LocalFrame<A::Scalar>> {
    let moment = simplify_v(arith, moment.clone());

    let magnitude = norm(arith, index, &moment)?;
    if !arith.is_finite(&magnitude) {
        return Err(Error::NonFinite { index });
    }
    let e3 = div_v(arith, &moment, &magnitude).ok_or(Error::DivisionByZero { index })?;
    let e3 = simplify_v(arith, e3);

    // e3 × x̂ = (0, e3.z, -e3.y)
    let e2 = simplify_v(arith, e3.cross(&V3::axis_unit(0)));
    let degenerate = is_negligible_v(arith, &e2);
    let e2 = match degenerate {
        true => V3::axis_unit(2),
        false => e2,
    };
    // never zero here; either e3 had a y or z component, or e2 is ẑ.
    let e2_norm = norm(arith, index, &e2)?;
    let e2 = div_v(arith, &e2, &e2_norm).ok_or(Error::DivisionByZero { index })?;
    let e2 = simplify_v(arith, e2);

    let e1 = simplify_v(arith, e2.cross(&e3));

    Ok(LocalFrame { e1, e2, e3, magnitude, degenerate })
}

fn norm<A: Arithmetic>(arith: &A, index: usize, v: &V3<A::Scalar>) -> Result<A::Scalar> {
    match arith.norm(v) {
        Some(norm) => Ok(arith.simplify(norm)),
        None => {
            let sqnorm = arith.simplify(v.sqnorm());
            Err(Error::NotRepresentable { index, value: sqnorm.to_string() })
        },
    }
}
