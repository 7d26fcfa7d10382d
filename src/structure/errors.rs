/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Errors from building frames or assembling a table.
///
/// Every variant is a precondition violation; the computation is
/// deterministic, so retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("moment #{index} has zero magnitude, so it has no local frame")]
    DivisionByZero { index: usize },

    #[error("got {moments} moments, but the supercell contains {expected} magnetic atoms")]
    ShapeMismatch { moments: usize, expected: usize },

    #[error("moment #{index} has a magnitude that is not a finite number")]
    NonFinite { index: usize },

    #[error("extension factor along axis {axis} must be positive")]
    ZeroExtension { axis: usize },

    #[error("supercell {periods:?} with {num_atoms} atom(s) per cell has too many columns to index")]
    SupercellTooLarge { periods: [u32; 3], num_atoms: usize },

    #[error("moment #{index}: sqrt({value}) has no exact closed form")]
    NotRepresentable { index: usize, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
