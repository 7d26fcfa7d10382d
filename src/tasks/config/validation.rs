/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks performed after parsing, turning an [`Input`] into the types the
//! core expects.

use magframe_array_types::V3;
use magframe_exact::Surd;
use magframe_structure::{Mode, UnitCellAtom, ExtensionFactors, DEFAULT_ZERO_TOL};

use crate::Input;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid extension factors")]
    Extension(#[source] magframe_structure::Error),

    #[error("zero-tol must be finite and non-negative, got {0}")]
    BadTolerance(f64),

    #[error("atom #{slot} (index {index}) has a non-finite position")]
    NonFinitePosition { slot: usize, index: usize },
}

/// An [`Input`] whose fields have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub mode: Mode,
    pub zero_tol: f64,
    pub extension: ExtensionFactors,
    pub atoms: Vec<UnitCellAtom>,
    pub moments: Vec<V3<Surd>>,
}

impl Input {
    pub fn validate(self) -> Result<ValidatedInput, ValidationError> {
        let Input { mode, zero_tol, extension, atoms, moments } = self;

        let extension = ExtensionFactors::new(extension).map_err(ValidationError::Extension)?;

        if let (Mode::Exact, Some(_)) = (mode, zero_tol) {
            warn!("zero-tol has no effect in exact mode");
        }
        let zero_tol = zero_tol.unwrap_or(DEFAULT_ZERO_TOL);
        if !(zero_tol.is_finite() && zero_tol >= 0.0) {
            return Err(ValidationError::BadTolerance(zero_tol));
        }

        for (slot, atom) in atoms.iter().enumerate() {
            if !atom.frac.iter().all(|x| x.is_finite()) {
                return Err(ValidationError::NonFinitePosition { slot, index: atom.index });
            }
        }

        Ok(ValidatedInput { mode, zero_tol, extension, atoms, moments })
    }
}
