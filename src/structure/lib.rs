/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Local coordinate frames for magnetic moments, and the positions of the
//! magnetic atoms they belong to across a magnetic supercell.
//!
//! The three pieces are:
//!
//! * [`build_frames`]: an orthonormal right-handed triad `(e1, e2, e3)` per
//!   moment, with `e3` along the moment.
//! * [`supercell::expand_positions`]: unit-cell atoms replicated over the
//!   supercell, each replica tagged with the index of its source atom.
//! * [`assemble`]: both of the above, packaged with the moments into a
//!   [`MagTable`].
//!
//! Everything is generic over an [`Arithmetic`] backend, so the same code
//! runs in floating point ([`Numeric`]) or in exact closed form ([`Exact`]).

#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[cfg(test)] #[macro_use] extern crate magframe_assert_close;

pub use crate::errors::{Error, Result};
mod errors;

pub use crate::arith::{Arithmetic, Numeric, Exact, Mode, DEFAULT_ZERO_TOL};
mod arith;

pub use crate::model::{UnitCellAtom, ExtensionFactors, AtomIndex};
mod model;

pub use crate::algo::frames::{build_frames, Frames, FrameRef};
pub use crate::algo::table::{assemble, MagTable, MomentColumn};

pub mod supercell {
    pub use crate::algo::supercell::{
        expand_positions,
        Expansion,
        SupercellToken,
    };
}

mod algo;

// re-exported so that callers can name the scalar types without
// depending on the leaf crates directly.
pub use magframe_array_types::V3;
pub use magframe_exact::Surd;
