/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Integer helpers for keeping radicands square-free.
//!
//! Factoring is trial division up to [`TRIAL_LIMIT`], followed by a perfect
//! square test on whatever is left.  Exact decimal input easily produces
//! radicands like `10^24 + 1` whose largest prime factor is far out of reach
//! of trial division, so the search has to stop somewhere.
//!
//! The only thing this can miss is a repeated prime above the limit that
//! does not make up the whole cofactor (`p² q` with `p, q > TRIAL_LIMIT`),
//! which needs a cofactor of at least `TRIAL_LIMIT³`.  Such a radicand is
//! kept as is; values stay correct, but two equal surds could then compare
//! unequal.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Trial division stops at this divisor.
pub(crate) const TRIAL_LIMIT: u32 = 1 << 16;

/// Split `n` into `(s, r)` with `n == s * s * r` and `r` square-free.
///
/// `n == 0` gives `(0, 1)`.
pub(crate) fn square_free_split(n: &BigUint) -> (BigUint, BigUint) {
    if n.is_zero() {
        return (BigUint::zero(), BigUint::one());
    }

    let mut rest = n.clone();
    let mut square_part = BigUint::one();
    let mut free_part = BigUint::one();

    let mut d = 2u32;
    let mut changed = true;
    loop {
        if changed {
            if let Some(root) = exact_sqrt(&rest) {
                square_part *= root;
                return (square_part, free_part);
            }
            changed = false;
        }
        let d_big = BigUint::from(d);
        if &d_big * &d_big > rest {
            // 1 or a prime
            break;
        }
        if d >= TRIAL_LIMIT {
            if rest.bits() >= 3 * 16 {
                debug!("radicand cofactor {} is only partially factored", rest);
            }
            break;
        }

        let d_sq = &d_big * &d_big;
        while (&rest % &d_sq).is_zero() {
            rest /= &d_sq;
            square_part *= d;
            changed = true;
        }
        if (&rest % &d_big).is_zero() {
            rest /= &d_big;
            free_part *= d;
            changed = true;
        }
        d = next_trial_divisor(d);
    }
    free_part *= rest;
    (square_part, free_part)
}

/// A factor of `n > 1` that behaves like a prime with respect to trial
/// division: either a small prime, or a cofactor with no prime factor below
/// [`TRIAL_LIMIT`].  `None` for `n <= 1`.
pub(crate) fn smallest_prime_factor(n: &BigUint) -> Option<BigUint> {
    if n <= &BigUint::one() {
        return None;
    }
    let mut d = 2u32;
    while d < TRIAL_LIMIT {
        let d_big = BigUint::from(d);
        if &d_big * &d_big > *n {
            break;
        }
        if n.is_multiple_of(&d_big) {
            return Some(d_big);
        }
        d = next_trial_divisor(d);
    }
    Some(n.clone())
}

/// Refine `factor` until every one of `others` is either a multiple of it
/// or coprime to it.
///
/// For square-free radicands, negating `√r` for exactly the radicands
/// divisible by such a factor is a field automorphism, even when the factor
/// is not known to be prime.
pub(crate) fn refine_factor<'a>(mut factor: BigUint, others: impl Iterator<Item=&'a BigUint> + Clone) -> BigUint {
    loop {
        let split = others.clone()
            .map(|r| factor.gcd(r))
            .find(|g| !g.is_one() && g != &factor);
        match split {
            Some(g) => factor = g,
            None => return factor,
        }
    }
}

/// Product of two square-free integers, as `(s, r)` with `a * b == s * s * r`.
///
/// No factorization needed: the common factor of two square-free numbers is
/// exactly the part that becomes a square.
pub(crate) fn mul_square_free(a: &BigUint, b: &BigUint) -> (BigUint, BigUint) {
    let g = a.gcd(b);
    let r = (a / &g) * (b / &g);
    (g, r)
}

// 2, then odd numbers
fn next_trial_divisor(d: u32) -> u32 {
    match d {
        2 => 3,
        _ => d + 2,
    }
}

fn exact_sqrt(n: &BigUint) -> Option<BigUint> {
    let root = n.sqrt();
    match &root * &root == *n {
        true => Some(root),
        false => None,
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn big(x: u64) -> BigUint { BigUint::from(x) }

    #[test]
    fn split() {
        let check = |n: u64, s: u64, r: u64| {
            assert_eq!(square_free_split(&big(n)), (big(s), big(r)), "n = {}", n);
        };
        check(0, 0, 1);
        check(1, 1, 1);
        check(2, 1, 2);
        check(4, 2, 1);
        check(12, 2, 3);
        check(72, 6, 2);
        check(1000, 10, 10);
        check(97, 1, 97);
        check(2 * 2 * 3 * 3 * 3 * 5, 6, 15);
    }

    #[test]
    fn split_large() {
        // 10^24 + 1 = 17 * 5882353 * 9999999900000001
        let n: BigUint = "1000000000000000000000001".parse().unwrap();
        assert_eq!(square_free_split(&n), (big(1), n.clone()));

        // a square of a prime far above the trial limit
        let p = big(1_000_000_007);
        assert_eq!(square_free_split(&(&p * &p * big(12))), (&p * big(2), big(3)));
    }

    #[test]
    fn prime_factor() {
        assert_eq!(smallest_prime_factor(&big(0)), None);
        assert_eq!(smallest_prime_factor(&big(1)), None);
        assert_eq!(smallest_prime_factor(&big(2)), Some(big(2)));
        assert_eq!(smallest_prime_factor(&big(15)), Some(big(3)));
        assert_eq!(smallest_prime_factor(&big(49)), Some(big(7)));
        assert_eq!(smallest_prime_factor(&big(101)), Some(big(101)));

        // no factor below the limit
        let n = big(1_000_000_007) * big(998_244_353);
        assert_eq!(smallest_prime_factor(&n), Some(n));
    }

    #[test]
    fn refine() {
        let p = big(1_000_000_007);
        let q = big(998_244_353);
        let pq = &p * &q;
        let others = vec![&pq * big(2), p.clone() * big(3), big(5)];
        assert_eq!(refine_factor(pq.clone(), others.iter()), p);
        assert_eq!(refine_factor(pq.clone(), vec![big(5), &pq * big(7)].iter()), pq);
    }

    #[test]
    fn product() {
        assert_eq!(mul_square_free(&big(6), &big(10)), (big(2), big(15)));
        assert_eq!(mul_square_free(&big(3), &big(3)), (big(3), big(1)));
        assert_eq!(mul_square_free(&big(1), &big(7)), (big(1), big(7)));
    }
}
