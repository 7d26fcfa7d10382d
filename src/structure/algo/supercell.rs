/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use magframe_array_types::V3;

use crate::{UnitCellAtom, ExtensionFactors};

/// Unit-cell atoms replicated over a diagonal supercell.
///
/// Columns are ordered with the atom index varying fastest: column
/// `cell * num_atoms + slot` is atom `slot` translated by the `cell`'th
/// lattice translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// Replica positions, in fractional units of the *unit* cell.
    pub positions: Vec<V3>,
    /// `atom[k]` is the `UnitCellAtom::index` of the source of column `k`.
    pub atom: Vec<usize>,
    ext: ExtensionFactors,
}

impl Expansion {
    pub fn len(&self) -> usize { self.positions.len() }
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Replica positions in fractional units of the supercell (each
    /// coordinate in `[0, 1)` if the unit-cell positions were reduced).
    pub fn supercell_fracs(&self) -> Vec<V3> {
        let periods = self.ext.as_v3();
        self.positions.iter().map(|v| v.div_diag(&periods)).collect()
    }

    pub(crate) fn into_parts(self) -> (Vec<V3>, Vec<usize>)
    { (self.positions, self.atom) }
}

/// Replicate `atoms` across the supercell described by `ext`.
///
/// Lattice translations `t = (a, b, c)` are enumerated with `a` fastest,
/// and each replica sits at `frac + t`.  No atoms gives an empty expansion.
pub fn expand_positions(atoms: &[UnitCellAtom], ext: &ExtensionFactors) -> (Expansion, SupercellToken) {
    let token = SupercellToken::new(ext, atoms.len());

    let translations = token.translations();
    let final_size = translations.len() * atoms.len();

    let mut positions = Vec::with_capacity(final_size);
    let mut atom = Vec::with_capacity(final_size);
    for t in &translations {
        for a in atoms {
            positions.push(&a.frac + t);
            atom.push(a.index);
        }
    }
    trace!(
        "expanded {} atoms over {:?} cells into {} replicas",
        atoms.len(), token.periods(), positions.len(),
    );

    let expansion = Expansion { positions, atom, ext: *ext };
    (expansion, token)
}

/// Contains enough information to relate supercell columns back to the unit cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SupercellToken {
    ext: ExtensionFactors,
    num_atoms: usize,
}

impl SupercellToken {
    /// The token for a unit cell of `num_atoms` atoms, without expanding
    /// anything.  Useful for replicating per-atom data on its own.
    pub fn new(ext: &ExtensionFactors, num_atoms: usize) -> Self
    { SupercellToken { ext: *ext, num_atoms } }

    pub fn periods(&self) -> [u32; 3] { self.ext.periods() }

    pub fn num_cells(&self) -> usize { self.ext.num_cells() }

    /// Number of atoms in the unit cell the token was made from.
    pub fn num_atoms(&self) -> usize { self.num_atoms }

    /// Number of columns in the supercell.  Saturates at `usize::MAX`
    /// (which [`assemble`](crate::assemble) reports as an error).
    pub fn num_columns(&self) -> usize
    { self.ext.num_columns(self.num_atoms).unwrap_or(usize::MAX) }

    /// The unit-cell atom slot (its position in the input list, *not* its
    /// `index`) and the lattice translation of a supercell column.
    pub fn translation(&self, column: usize) -> Option<(usize, [u32; 3])> {
        if column >= self.num_columns() {
            return None;
        }
        let slot = column % self.num_atoms;
        let mut cell = column / self.num_atoms;

        let periods = self.periods();
        let mut t = [0; 3];
        for k in 0..3 {
            t[k] = (cell % periods[k] as usize) as u32;
            cell /= periods[k] as usize;
        }
        Some((slot, t))
    }

    /// Takes data for each atom of the unit cell and expands it to the
    /// size of the supercell, in the same column order as the positions.
    ///
    /// # Panics
    ///
    /// Panics if `vec` does not have one element per unit-cell atom.
    pub fn replicate<M>(&self, vec: &[M]) -> Vec<M>
    where M: Clone,
    {
        assert_eq!(vec.len(), self.num_atoms, "replicate: wrong number of atoms");
        let mut out = Vec::with_capacity(self.num_columns());
        for _ in 0..self.num_cells() {
            out.extend_from_slice(vec);
        }
        out
    }

    // lattice translations in the library's preferred order
    fn translations(&self) -> Vec<V3> {
        let [na, nb, nc] = self.periods();
        iproduct!(0..nc, 0..nb, 0..na)
            .map(|(c, b, a)| V3([a as f64, b as f64, c as f64]))
            .collect()
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn ext(periods: [u32; 3]) -> ExtensionFactors
    { ExtensionFactors::new(periods).unwrap() }

    fn two_atoms() -> Vec<UnitCellAtom> {
        vec![
            UnitCellAtom::new(V3([0.0, 0.0, 0.0]), 1),
            UnitCellAtom::new(V3([0.5, 0.5, 0.0]), 2),
        ]
    }

    #[test]
    fn doubled_along_a() {
        let (expansion, token) = expand_positions(&two_atoms(), &ext([2, 1, 1]));
        assert_eq!(expansion.atom, vec![1, 2, 1, 2]);
        assert_eq!(expansion.positions, vec![
            V3([0.0, 0.0, 0.0]),
            V3([0.5, 0.5, 0.0]),
            V3([1.0, 0.0, 0.0]),
            V3([1.5, 0.5, 0.0]),
        ]);
        assert_eq!(expansion.supercell_fracs(), vec![
            V3([0.0, 0.0, 0.0]),
            V3([0.25, 0.5, 0.0]),
            V3([0.5, 0.0, 0.0]),
            V3([0.75, 0.5, 0.0]),
        ]);
        assert_eq!(token.num_cells(), 2);
        assert_eq!(token.num_columns(), 4);
    }

    #[test]
    fn translation_order_is_a_fastest() {
        let atoms = vec![UnitCellAtom::new(V3([0.0, 0.0, 0.0]), 0)];
        let (expansion, token) = expand_positions(&atoms, &ext([2, 3, 2]));
        assert_eq!(expansion.len(), 12);
        assert_eq!(&expansion.positions[..4], &[
            V3([0.0, 0.0, 0.0]),
            V3([1.0, 0.0, 0.0]),
            V3([0.0, 1.0, 0.0]),
            V3([1.0, 1.0, 0.0]),
        ][..]);
        assert_eq!(expansion.positions[6], V3([0.0, 0.0, 1.0]));
        assert_eq!(expansion.positions[11], V3([1.0, 2.0, 1.0]));

        for (column, pos) in expansion.positions.iter().enumerate() {
            let (slot, t) = token.translation(column).unwrap();
            assert_eq!(slot, 0);
            assert_eq!(*pos, V3::from_fn(|k| t[k] as f64));
        }
        assert_eq!(token.translation(12), None);
    }

    #[test]
    fn translation_recovers_slot() {
        let atoms = two_atoms();
        let (expansion, token) = expand_positions(&atoms, &ext([3, 2, 1]));
        for column in 0..expansion.len() {
            let (slot, t) = token.translation(column).unwrap();
            assert_eq!(expansion.atom[column], atoms[slot].index);
            let t = V3::from_fn(|k| t[k] as f64);
            assert_close!(expansion.positions[column], &atoms[slot].frac + &t);
        }
    }

    #[test]
    fn replicate_matches_column_order() {
        let atoms = vec![
            UnitCellAtom::new(V3([0.0, 0.0, 0.0]), 7).with_label("Fe1"),
            UnitCellAtom::new(V3([0.5, 0.0, 0.0]), 3).with_label("Fe2"),
        ];
        let (expansion, token) = expand_positions(&atoms, &ext([1, 1, 3]));
        assert_eq!(token, SupercellToken::new(&ext([1, 1, 3]), 2));
        let labels: Vec<_> = atoms.iter().map(|a| a.label.clone()).collect();
        let indices: Vec<_> = atoms.iter().map(|a| a.index).collect();

        assert_eq!(token.replicate(&indices), expansion.atom);
        let labels = token.replicate(&labels);
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[4].as_ref().map(|s| &s[..]), Some("Fe1"));
        assert_eq!(labels[5].as_ref().map(|s| &s[..]), Some("Fe2"));
    }

    #[test]
    #[should_panic(expected = "wrong number of atoms")]
    fn replicate_checks_length() {
        let (_, token) = expand_positions(&two_atoms(), &ext([2, 2, 2]));
        token.replicate(&[1]);
    }

    #[test]
    fn no_atoms() {
        let (expansion, token) = expand_positions(&[], &ext([4, 4, 4]));
        assert!(expansion.is_empty());
        assert!(expansion.atom.is_empty());
        assert!(expansion.supercell_fracs().is_empty());
        assert_eq!(token.num_cells(), 64);
        assert_eq!(token.num_columns(), 0);
        assert_eq!(token.translation(0), None);
    }
}
