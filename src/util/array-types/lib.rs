/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The `V3` type used throughout magframe.
//!
//! This is a stripped-down cousin of the usual "fixed-size vector with
//! linear algebra" crates, with one important difference: the element type
//! is not restricted to primitive floats.  The frame builder runs the same
//! algorithm over `f64` and over exact surds, so every operation here is
//! written against `std::ops` bounds instead of a sealed float trait.

#[cfg(test)]
#[macro_use]
extern crate magframe_assert_close;

pub use self::types::V3;
mod types;

pub use self::methods_v::dot;
mod methods_v;

mod ops;

pub use self::conv::{Envee, Unvee};
mod conv;
