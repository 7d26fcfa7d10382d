/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The input document.
//!
//! ```yaml
//! mode: exact
//! extension: [2, 1, 1]
//! atoms:
//!   - { frac: [0.0, 0.0, 0.0], index: 1, label: Cu1 }
//!   - { frac: [0.5, 0.5, 0.0], index: 2 }
//! moments:
//!   - [0, 0, 3]
//!   - ["sqrt(3)/2", "1/2", 0]
//!   - [0, 0, -3]
//!   - ["-sqrt(3)/2", "-1/2", 0]
//! ```

use magframe_array_types::V3;
use magframe_exact::Surd;
use magframe_structure::{Mode, UnitCellAtom};

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Input {
    /// `exact` or `numeric`.
    #[serde(default)]
    pub mode: Mode,

    /// Absolute tolerance for zero tests in numeric mode.
    ///
    /// Ignored (with a warning) in exact mode, where zero tests are exact.
    #[serde(default)]
    pub zero_tol: Option<f64>,

    /// Supercell multiplicity along each lattice vector.
    #[serde(default="_input__extension")]
    pub extension: [u32; 3],

    /// Magnetic atoms of the unit cell, in fractional coordinates.
    #[serde(default)]
    pub atoms: Vec<UnitCellAtom>,

    /// One moment per supercell atom, or none at all.
    ///
    /// Components are numbers or exact expressions like `"sqrt(3)/2"`.
    /// Decimal numbers are read exactly as written.
    #[serde(default)]
    pub moments: Vec<V3<Surd>>,
}
fn _input__extension() -> [u32; 3] { [1, 1, 1] }
