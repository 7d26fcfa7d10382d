/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use magframe_array_types::V3;

use crate::{Error, Result};

/// A magnetic atom of the crystallographic unit cell.
///
/// `index` is whatever stable identifier the lattice model uses for the
/// site; it is copied verbatim into every replica, so that per-site data
/// (labels, species) can be looked up downstream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitCellAtom {
    /// Fractional position in the unit cell.
    pub frac: V3,
    pub index: usize,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub label: Option<String>,
}

impl UnitCellAtom {
    pub fn new(frac: V3, index: usize) -> Self
    { UnitCellAtom { frac, index, label: None } }

    pub fn with_label(mut self, label: impl Into<String>) -> Self
    { self.label = Some(label.into()); self }
}

/// Multiplicity of the magnetic supercell along each lattice vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionFactors([u32; 3]);

impl ExtensionFactors {
    pub fn new(periods: [u32; 3]) -> Result<Self> {
        if let Some(axis) = periods.iter().position(|&n| n == 0) {
            return Err(Error::ZeroExtension { axis });
        }
        let ext = ExtensionFactors(periods);
        match ext.num_columns(1) {
            Some(_) => Ok(ext),
            None => Err(Error::SupercellTooLarge { periods, num_atoms: 1 }),
        }
    }

    /// The 1x1x1 supercell.
    pub fn unit() -> Self
    { ExtensionFactors([1, 1, 1]) }

    pub fn periods(&self) -> [u32; 3]
    { self.0 }

    /// Number of unit cells in the supercell.
    ///
    /// Cannot overflow; `new` rejects supercells whose cell count does not
    /// fit in a `usize`.
    pub fn num_cells(&self) -> usize
    { self.num_columns(1).unwrap_or(usize::MAX) }

    /// Number of supercell columns for `num_atoms` atoms per cell, or `None`
    /// if that does not fit in a `usize`.
    pub fn num_columns(&self, num_atoms: usize) -> Option<usize> {
        self.0.iter().try_fold(num_atoms, |acc, &n| acc.checked_mul(n as usize))
    }

    pub(crate) fn as_v3(&self) -> V3
    { V3::from_fn(|k| self.0[k] as f64) }
}

/// Maps each replicated position back to a unit-cell atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomIndex {
    /// `indices[k]` is the `UnitCellAtom::index` of replica `k`.
    Columns(Vec<usize>),
    /// Placeholder stored by a table with no moments at all.  This is the
    /// value that empty-structure handling downstream expects, and it is
    /// deliberately different from `Columns(vec![])`.
    NoMagneticAtoms,
}

impl AtomIndex {
    /// Number of replicas described.  The sentinel describes none.
    pub fn len(&self) -> usize
    { self.as_slice().len() }

    pub fn is_empty(&self) -> bool
    { self.len() == 0 }

    pub fn get(&self, replica: usize) -> Option<usize>
    { self.as_slice().get(replica).cloned() }

    pub fn as_slice(&self) -> &[usize] {
        match self {
            AtomIndex::Columns(indices) => &indices[..],
            AtomIndex::NoMagneticAtoms => &[],
        }
    }

    pub fn is_sentinel(&self) -> bool
    { *self == AtomIndex::NoMagneticAtoms }
}
