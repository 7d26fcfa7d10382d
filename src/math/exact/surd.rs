/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Sub, Mul, Div, Neg};

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Zero, Signed, ToPrimitive};

use crate::radical::{square_free_split, smallest_prime_factor, refine_factor, mul_square_free};

/// An exact real number of the form `c₁√r₁ + c₂√r₂ + ...`.
///
/// The `cₖ` are rationals and the `rₖ` are distinct square-free positive
/// integers.  These numbers form a field (the rationals extended by the
/// square roots of every prime), so sums, products and quotients of surds
/// are again surds, and equality is decided exactly.
///
/// The representation is canonical: zero coefficients are never stored, and
/// radicands are always square-free.  Since square roots of distinct
/// square-free integers are linearly independent over the rationals, two
/// surds are equal if and only if their representations are equal, which is
/// what the derived `PartialEq` compares.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Surd {
    // radicand -> coefficient
    terms: BTreeMap<BigUint, BigRational>,
}

impl Surd {
    pub fn from_rational(q: BigRational) -> Self {
        let mut terms = BTreeMap::new();
        if !q.is_zero() {
            terms.insert(BigUint::one(), q);
        }
        Surd { terms }
    }

    pub fn from_integer(n: i64) -> Self
    { Surd::from_rational(BigRational::from_integer(BigInt::from(n))) }

    /// `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    pub fn from_ratio(numer: i64, denom: i64) -> Self
    { Surd::from_rational(BigRational::new(BigInt::from(numer), BigInt::from(denom))) }

    /// `coeff * √radicand`, simplified.
    ///
    /// The radicand may be any non-negative rational.  Returns `None` for
    /// negative radicands.
    pub fn scaled_sqrt(coeff: BigRational, radicand: &BigRational) -> Option<Self> {
        if radicand.is_negative() {
            return None;
        }
        // √(a/b) = √(ab) / b
        let numer = radicand.numer().magnitude();
        let denom = radicand.denom().magnitude();
        let (square_part, free_part) = square_free_split(&(numer * denom));
        let scale = BigRational::new(
            BigInt::from_biguint(Sign::Plus, square_part),
            BigInt::from_biguint(Sign::Plus, denom.clone()),
        );
        Some(Surd::from_term(coeff * scale, free_part))
    }

    /// The square root of a non-negative rational.
    pub fn sqrt_of_rational(radicand: &BigRational) -> Option<Self>
    { Surd::scaled_sqrt(BigRational::one(), radicand) }

    // A single term. `radicand` must already be square-free.
    fn from_term(coeff: BigRational, radicand: BigUint) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() && !radicand.is_zero() {
            terms.insert(radicand, coeff);
        }
        Surd { terms }
    }
}

// inspection
impl Surd {
    pub fn is_rational(&self) -> bool
    { self.terms.keys().all(|r| r.is_one()) }

    pub fn to_rational(&self) -> Option<BigRational> {
        match self.is_rational() {
            true => Some(self.rational_part()),
            false => None,
        }
    }

    /// The coefficient of `√1`.
    pub fn rational_part(&self) -> BigRational {
        self.terms.get(&BigUint::one()).cloned()
            .unwrap_or_else(BigRational::zero)
    }

    /// Number of stored terms.  Zero has none.
    pub fn num_terms(&self) -> usize
    { self.terms.len() }

    /// `(radicand, coefficient)` pairs in increasing order of radicand.
    pub fn terms(&self) -> impl Iterator<Item=(&BigUint, &BigRational)>
    { self.terms.iter() }

    /// Nearest-ish `f64`.  Each term is rounded separately, so cancellation
    /// between large terms can lose precision.
    pub fn to_f64(&self) -> f64 {
        self.terms.iter()
            .map(|(r, c)| {
                let c = c.to_f64().unwrap_or(::std::f64::NAN);
                match r.is_one() {
                    true => c,
                    false => c * r.to_f64().unwrap_or(::std::f64::NAN).sqrt(),
                }
            })
            .sum()
    }
}

// field operations that can fail
impl Surd {
    /// Multiplicative inverse, or `None` for zero.
    ///
    /// The denominator is rationalized one prime at a time: if `d = a + b√p`
    /// where `a` and `b` do not involve `√p`, then `d (a - b√p) = a² - p b²`
    /// no longer involves `√p`, and no new primes are introduced.  (A large
    /// cofactor that trial division could not split is treated the same way.)
    pub fn recip(&self) -> Option<Surd> {
        if self.is_zero() {
            return None;
        }

        let mut numer = Surd::one();
        let mut denom = self.clone();
        while let Some(p) = denom.some_irrational_prime() {
            trace!("rationalizing over sqrt({}): {}", p, denom);
            let conj = denom.conjugate_at(&p);
            numer = numer * &conj;
            denom = denom * &conj;
        }

        // nonzero because conjugation is an automorphism
        let denom = denom.rational_part();
        Some(numer.scale(&denom.recip()))
    }

    /// Division, or `None` when `other` is zero.
    pub fn checked_div(&self, other: &Surd) -> Option<Surd>
    { other.recip().map(|inv| self * &inv) }

    /// The non-negative square root, when it can be written as a surd.
    ///
    /// This covers non-negative rationals, and numbers `a + b√r` whose root
    /// denests as `√x ± √y` for rationals `x, y`.  Other inputs (negative
    /// numbers, single irrational terms, deeper nestings) give `None`.
    pub fn sqrt(&self) -> Option<Surd> {
        if let Some(q) = self.to_rational() {
            return Surd::sqrt_of_rational(&q);
        }
        let out = self.denested_sqrt()?;
        // the denesting formula is only a candidate; verify it.
        match &(&out * &out) == self {
            true => Some(out),
            false => None,
        }
    }

    // √(a + b√r) = √x + sgn(b) √y,  x,y = (a ± √(a² - b² r)) / 2
    fn denested_sqrt(&self) -> Option<Surd> {
        if self.terms.len() != 2 {
            return None;
        }
        let a = self.rational_part();
        let (r, b) = self.terms.iter().find(|(r, _)| !r.is_one())?;
        let r = BigRational::from_integer(BigInt::from_biguint(Sign::Plus, r.clone()));

        let disc = &a * &a - b * b * &r;
        let d = Surd::sqrt_of_rational(&disc)?.to_rational()?;
        let two = BigRational::from_integer(BigInt::from(2));
        let x = (&a + &d) / &two;
        let y = (&a - &d) / &two;
        if x.is_negative() || y.is_negative() {
            return None;
        }
        let sqrt_x = Surd::sqrt_of_rational(&x)?;
        let sqrt_y = Surd::sqrt_of_rational(&y)?;
        match b.is_positive() {
            true => Some(sqrt_x + sqrt_y),
            false => Some(sqrt_x - sqrt_y),
        }
    }
}

// helpers
impl Surd {
    /// Multiply by a rational.
    pub fn scale(&self, q: &BigRational) -> Surd {
        if q.is_zero() {
            return Surd::zero();
        }
        let terms = self.terms.iter()
            .map(|(r, c)| (r.clone(), c * q))
            .collect();
        Surd { terms }
    }

    // A factor of some radicand that every radicand is either a multiple of
    // or coprime to.  In practice this is a prime.
    fn some_irrational_prime(&self) -> Option<BigUint> {
        let factor = self.terms.keys()
            .find(|r| !r.is_one())
            .and_then(smallest_prime_factor)?;
        Some(refine_factor(factor, self.terms.keys()))
    }

    // The image under √p -> -√p.
    fn conjugate_at(&self, p: &BigUint) -> Surd {
        let terms = self.terms.iter()
            .map(|(r, c)| match (r % p).is_zero() {
                true => (r.clone(), -c),
                false => (r.clone(), c.clone()),
            })
            .collect();
        Surd { terms }
    }

    fn add_term(&mut self, radicand: BigUint, coeff: BigRational) {
        if coeff.is_zero() {
            return;
        }
        let entry = self.terms.entry(radicand.clone()).or_insert_with(BigRational::zero);
        *entry += coeff;
        if entry.is_zero() {
            self.terms.remove(&radicand);
        }
    }
}

// ---------------------------------------------------------------------------
// operators

impl<'a, 'b> Add<&'b Surd> for &'a Surd {
    type Output = Surd;

    fn add(self, other: &'b Surd) -> Surd {
        let mut out = self.clone();
        for (r, c) in &other.terms {
            out.add_term(r.clone(), c.clone());
        }
        out
    }
}

impl<'a> Neg for &'a Surd {
    type Output = Surd;

    fn neg(self) -> Surd {
        let terms = self.terms.iter().map(|(r, c)| (r.clone(), -c)).collect();
        Surd { terms }
    }
}

impl<'a, 'b> Sub<&'b Surd> for &'a Surd {
    type Output = Surd;

    fn sub(self, other: &'b Surd) -> Surd
    { self + &(-other) }
}

impl<'a, 'b> Mul<&'b Surd> for &'a Surd {
    type Output = Surd;

    fn mul(self, other: &'b Surd) -> Surd {
        let mut out = Surd::zero();
        for (ra, ca) in &self.terms {
            for (rb, cb) in &other.terms {
                let (square_part, free_part) = mul_square_free(ra, rb);
                let square_part = BigRational::from_integer(BigInt::from_biguint(Sign::Plus, square_part));
                out.add_term(free_part, ca * cb * square_part);
            }
        }
        out
    }
}

impl<'a, 'b> Div<&'b Surd> for &'a Surd {
    type Output = Surd;

    /// # Panics
    ///
    /// Panics on division by zero, like the other exact number types.
    /// Use `checked_div` to get an `Option` instead.
    fn div(self, other: &'b Surd) -> Surd {
        self.checked_div(other)
            .unwrap_or_else(|| panic!("attempted to divide {} by zero", self))
    }
}

// by-value forms forward to the by-reference ones
macro_rules! forward_binop {
    ($Op:ident :: $op:ident) => {
        impl $Op<Surd> for Surd {
            type Output = Surd;

            #[inline]
            fn $op(self, other: Surd) -> Surd
            { (&self).$op(&other) }
        }

        impl<'b> $Op<&'b Surd> for Surd {
            type Output = Surd;

            #[inline]
            fn $op(self, other: &'b Surd) -> Surd
            { (&self).$op(other) }
        }

        impl<'a> $Op<Surd> for &'a Surd {
            type Output = Surd;

            #[inline]
            fn $op(self, other: Surd) -> Surd
            { self.$op(&other) }
        }
    };
}

forward_binop!(Add::add);
forward_binop!(Sub::sub);
forward_binop!(Mul::mul);
forward_binop!(Div::div);

impl Neg for Surd {
    type Output = Surd;

    #[inline]
    fn neg(self) -> Surd
    { -&self }
}

impl Zero for Surd {
    fn zero() -> Self
    { Surd { terms: BTreeMap::new() } }

    fn is_zero(&self) -> bool
    { self.terms.is_empty() }
}

impl One for Surd {
    fn one() -> Self
    { Surd::from_integer(1) }
}

impl From<i64> for Surd {
    fn from(n: i64) -> Self
    { Surd::from_integer(n) }
}

impl From<BigRational> for Surd {
    fn from(q: BigRational) -> Self
    { Surd::from_rational(q) }
}

// ---------------------------------------------------------------------------
// printing
//
// The output is accepted by `FromStr`: "0", "-3/4", "sqrt(3)/2",
// "1/2 - 3*sqrt(2)/7".

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (r, c)) in self.terms.iter().enumerate() {
            let negative = c.is_negative();
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {},
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            let numer = c.numer().magnitude();
            let denom = c.denom().magnitude();
            match (r.is_one(), numer.is_one()) {
                (true, _) => write!(f, "{}", numer)?,
                (false, true) => write!(f, "sqrt({})", r)?,
                (false, false) => write!(f, "{}*sqrt({})", numer, r)?,
            }
            if !denom.is_one() {
                write!(f, "/{}", denom)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "Surd({})", self) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> BigRational
    { BigRational::new(BigInt::from(n), BigInt::from(d)) }

    fn sqrt(n: i64) -> Surd
    { Surd::sqrt_of_rational(&q(n, 1)).unwrap() }

    #[test]
    fn sqrt_simplifies() {
        assert_eq!(sqrt(4), Surd::from_integer(2));
        assert_eq!(sqrt(12), Surd::from_integer(2) * sqrt(3));
        assert_eq!(sqrt(0), Surd::zero());
        assert_eq!(Surd::sqrt_of_rational(&q(1, 4)).unwrap(), Surd::from_ratio(1, 2));
        // √(1/2) = √2 / 2
        assert_eq!(Surd::sqrt_of_rational(&q(1, 2)).unwrap(), sqrt(2) * Surd::from_ratio(1, 2));
        assert_eq!(Surd::sqrt_of_rational(&q(-1, 1)), None);
    }

    #[test]
    fn products_of_roots() {
        assert_eq!(sqrt(2) * sqrt(2), Surd::from_integer(2));
        assert_eq!(sqrt(6) * sqrt(10), Surd::from_integer(2) * sqrt(15));
        assert!((sqrt(2) * sqrt(3)).num_terms() == 1);
    }

    #[test]
    fn sums_cancel_exactly() {
        let x = sqrt(2) + Surd::from_ratio(1, 3);
        let y = x.clone() - sqrt(2);
        assert_eq!(y, Surd::from_ratio(1, 3));
        assert!(y.is_rational());
        assert!((&x - &x).is_zero());
    }

    #[test]
    fn reciprocals() {
        // 1 / (1 + √2) = √2 - 1
        let d = Surd::one() + sqrt(2);
        assert_eq!(d.recip().unwrap(), sqrt(2) - Surd::one());

        // several primes at once
        let d = sqrt(2) + sqrt(3) + sqrt(5) + Surd::from_integer(7);
        assert_eq!(&d * &d.recip().unwrap(), Surd::one());

        // radicands with no small factors, sharing one large prime
        let (p, q, r) = (1_000_000_007, 998_244_353, 1_000_000_009);
        let d = Surd::one() + sqrt(p * q) + sqrt(p * r);
        assert_eq!(&d * &d.recip().unwrap(), Surd::one());

        assert_eq!(Surd::zero().recip(), None);
        assert_eq!(Surd::one().checked_div(&Surd::zero()), None);
    }

    #[test]
    fn square_roots() {
        // √(3 + 2√2) = 1 + √2
        let x = Surd::from_integer(3) + Surd::from_integer(2) * sqrt(2);
        assert_eq!(x.sqrt().unwrap(), Surd::one() + sqrt(2));

        // √(3 - 2√2) = √2 - 1
        let x = Surd::from_integer(3) - Surd::from_integer(2) * sqrt(2);
        assert_eq!(x.sqrt().unwrap(), sqrt(2) - Surd::one());

        // no denesting exists
        assert_eq!(sqrt(2).sqrt(), None);
        assert_eq!((Surd::one() + sqrt(2)).sqrt(), None);
        assert_eq!(Surd::from_integer(-4).sqrt(), None);
    }

    #[test]
    fn floats() {
        let x = Surd::from_ratio(1, 2) - sqrt(3) * Surd::from_ratio(1, 2);
        assert!((x.to_f64() - (0.5 - 0.75f64.sqrt())).abs() < 1e-15);
        assert_eq!(Surd::zero().to_f64(), 0.0);
    }

    #[test]
    fn display() {
        assert_eq!(Surd::zero().to_string(), "0");
        assert_eq!(Surd::from_ratio(-3, 4).to_string(), "-3/4");
        assert_eq!((sqrt(3) * Surd::from_ratio(1, 2)).to_string(), "sqrt(3)/2");
        assert_eq!((sqrt(3) * Surd::from_ratio(-1, 2)).to_string(), "-sqrt(3)/2");
        let x = Surd::from_ratio(1, 2) - sqrt(2) * Surd::from_ratio(3, 7);
        assert_eq!(x.to_string(), "1/2 - 3*sqrt(2)/7");
    }
}
