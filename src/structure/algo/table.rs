/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use magframe_array_types::{V3, Unvee};
use slice_of_array::prelude::*;

use crate::{Error, Result, Arithmetic, UnitCellAtom, ExtensionFactors, AtomIndex};
use crate::algo::frames::{build_frames, Frames, FrameRef};
use crate::algo::supercell::expand_positions;

/// Moments with their local frames, and the supercell positions of the
/// atoms they sit on.
///
/// Moment columns and replica columns line up one-to-one (moment `i` sits
/// on replica `i`), except in a table with no moments, where there are no
/// replicas and `atom` is [`AtomIndex::NoMagneticAtoms`].
#[derive(Debug, Clone, PartialEq)]
pub struct MagTable<X = f64> {
    pub moments: Vec<V3<X>>,
    pub frames: Frames<X>,
    /// Replica positions in fractional units of the unit cell.
    pub positions: Vec<V3>,
    pub atom: AtomIndex,
}

/// A moment together with its local frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MomentColumn<'a, X> {
    pub moment: &'a V3<X>,
    pub frame: FrameRef<'a, X>,
}

/// Build frames for `moments` and the supercell expansion of `atoms`.
///
/// `moments` must either be empty or contain one moment per supercell atom,
/// in the same column order as [`expand_positions`].
///
/// # Errors
///
/// * [`Error::ShapeMismatch`] if there are moments, but not one per
///   supercell atom.  This is checked before any frame is built.
/// * [`Error::SupercellTooLarge`] if the number of supercell atoms does not
///   fit in a `usize`.
/// * Any error from [`build_frames`].
pub fn assemble<A: Arithmetic>(
    arith: &A,
    moments: &[V3<A::Scalar>],
    atoms: &[UnitCellAtom],
    ext: &ExtensionFactors,
) -> Result<MagTable<A::Scalar>> {
    if moments.is_empty() {
        debug!("no magnetic moments; table has no replicas");
        return Ok(MagTable {
            moments: vec![],
            frames: build_frames(arith, &[])?,
            positions: vec![],
            atom: AtomIndex::NoMagneticAtoms,
        });
    }

    let expected = ext.num_columns(atoms.len()).ok_or(Error::SupercellTooLarge {
        periods: ext.periods(),
        num_atoms: atoms.len(),
    })?;
    if moments.len() != expected {
        return Err(Error::ShapeMismatch { moments: moments.len(), expected });
    }

    let frames = build_frames(arith, moments)?;
    let (expansion, _) = expand_positions(atoms, ext);
    let (positions, atom) = expansion.into_parts();

    Ok(MagTable {
        moments: moments.to_vec(),
        frames,
        positions,
        atom: AtomIndex::Columns(atom),
    })
}

impl<X> MagTable<X> {
    /// Number of moments.
    pub fn len(&self) -> usize { self.moments.len() }
    pub fn is_empty(&self) -> bool { self.moments.is_empty() }

    /// Number of replica columns.
    pub fn num_replicas(&self) -> usize { self.positions.len() }

    pub fn column(&self, i: usize) -> Option<MomentColumn<'_, X>> {
        Some(MomentColumn {
            moment: self.moments.get(i)?,
            frame: self.frames.get(i)?,
        })
    }

    /// Position and source atom index of a replica.
    pub fn replica(&self, k: usize) -> Option<(&V3, usize)>
    { Some((self.positions.get(k)?, self.atom.get(k)?)) }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` slice.
    pub fn flat_positions(&self) -> &[f64]
    { (&self.positions[..]).unvee().flat() }

    /// Convert every moment and frame scalar.  Positions are always `f64`.
    pub fn map_scalars<B, F>(self, mut f: F) -> MagTable<B>
    where F: FnMut(X) -> B,
    {
        let MagTable { moments, frames, positions, atom } = self;
        let moments = moments.into_iter().map(|v| v.map(&mut f)).collect();
        let frames = frames.map_scalars(&mut f);
        MagTable { moments, frames, positions, atom }
    }
}
