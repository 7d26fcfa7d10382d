/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Exact arithmetic with square roots.
//!
//! [`Surd`] represents numbers like `1/2`, `√3/2` or `1 + √2` exactly, with
//! a canonical form so that equality (and in particular, equality with zero)
//! is decided without rounding.

#[macro_use]
extern crate log;

pub use crate::surd::Surd;
mod surd;

pub use crate::parse::{ParseSurdError, MAX_EXPONENT};
mod parse;

mod radical;

#[cfg(feature = "serde-support")]
mod serde_impls;
