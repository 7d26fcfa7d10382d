/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Surds are serialized as strings in the `Display` syntax.
//!
//! Deserialization also accepts plain numbers, so that hand-written input
//! files can say `0.5` or `"sqrt(3)/2"` interchangeably.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Surd;

impl Serialize for Surd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_str(self) }
}

impl<'de> Deserialize<'de> for Surd {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>
    { deserializer.deserialize_any(SurdVisitor) }
}

struct SurdVisitor;

impl<'de> de::Visitor<'de> for SurdVisitor {
    type Value = Surd;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "a number, or a string like \"sqrt(3)/2\"") }

    fn visit_i64<E: de::Error>(self, x: i64) -> Result<Surd, E>
    { Ok(Surd::from_integer(x)) }

    fn visit_u64<E: de::Error>(self, x: u64) -> Result<Surd, E> {
        use num_bigint::BigInt;
        use num_rational::BigRational;
        Ok(Surd::from_rational(BigRational::from_integer(BigInt::from(x))))
    }

    fn visit_f64<E: de::Error>(self, x: f64) -> Result<Surd, E>
    { Surd::from_f64_decimal(x).map_err(E::custom) }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Surd, E>
    { s.parse().map_err(E::custom) }
}
