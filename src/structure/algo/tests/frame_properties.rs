/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Randomized checks of the frame invariants, in both arithmetic modes.

use rand::Rng;
use num_traits::{Zero, One};

use crate::{build_frames, Frames, Exact, Numeric, Surd, V3};
use crate::arith::{Arithmetic, is_negligible_v};

const NUM_TRIALS: usize = 200;

fn random_moment() -> V3 {
    let mut rng = rand::thread_rng();
    V3::from_fn(|_| rng.gen_range(-10.0, 10.0))
}

fn random_integer_moment() -> V3<Surd> {
    let mut rng = rand::thread_rng();
    loop {
        let v = V3::from_fn(|_| Surd::from_integer(rng.gen_range(-4, 5)));
        if !v.is_zero() {
            return v;
        }
    }
}

fn surds(v: [&str; 3]) -> V3<Surd>
{ V3::from_fn(|k| v[k].parse().unwrap()) }

fn check_numeric_frame(frames: &Frames, moments: &[V3]) {
    for (i, m) in moments.iter().enumerate() {
        let (e1, e2, e3) = (&frames.e1[i], &frames.e2[i], &frames.e3[i]);

        assert_close!(*e3, m / m.norm());
        assert_close!(frames.magnitudes[i], m.norm());
        assert_close!(abs=1e-12, e1.dot(e2), 0.0);
        assert_close!(abs=1e-12, e1.dot(e3), 0.0);
        assert_close!(abs=1e-12, e2.dot(e3), 0.0);
        assert_close!(e1.norm(), 1.0);
        assert_close!(e2.norm(), 1.0);
        assert_close!(e3.norm(), 1.0);
        assert_close!(e1.cross(e2), *e3);
    }
}

#[test]
fn numeric_frames_are_orthonormal() {
    let moments: Vec<_> = (0..NUM_TRIALS).map(|_| random_moment()).collect();
    let frames = build_frames(&Numeric::default(), &moments).unwrap();
    check_numeric_frame(&frames, &moments);
}

#[test]
fn numeric_is_idempotent() {
    let moments: Vec<_> = (0..NUM_TRIALS).map(|_| random_moment()).collect();
    let first = build_frames(&Numeric::default(), &moments).unwrap();
    let second = build_frames(&Numeric::default(), &moments).unwrap();
    // bit-identical, not merely close
    assert_eq!(first, second);
}

#[test]
fn exact_frames_are_orthonormal() {
    let moments: Vec<_> = (0..NUM_TRIALS / 4).map(|_| random_integer_moment()).collect();
    let frames = build_frames(&Exact, &moments).unwrap();

    for (i, m) in moments.iter().enumerate() {
        let (e1, e2, e3) = (&frames.e1[i], &frames.e2[i], &frames.e3[i]);

        assert_eq!(e1.dot(e2), Surd::zero());
        assert_eq!(e1.dot(e3), Surd::zero());
        assert_eq!(e2.dot(e3), Surd::zero());
        assert_eq!(e1.sqnorm(), Surd::one());
        assert_eq!(e2.sqnorm(), Surd::one());
        assert_eq!(e3.sqnorm(), Surd::one());
        assert_eq!(&e1.cross(e2), e3);

        // e3 has the direction of m, and not its opposite
        assert_eq!(m.map_ref(|x| x * &frames.magnitudes[i].recip().unwrap()), *e3);
        assert!(frames.magnitudes[i].to_f64() > 0.0);
    }

    let again = build_frames(&Exact, &moments).unwrap();
    assert_eq!(frames, again);
}

#[test]
fn exact_agrees_with_numeric() {
    let moments: Vec<_> = (0..NUM_TRIALS / 4).map(|_| random_integer_moment()).collect();
    let exact = build_frames(&Exact, &moments).unwrap().map_scalars(|x| x.to_f64());

    let float_moments: Vec<_> = moments.iter().map(|v| v.map_ref(Surd::to_f64)).collect();
    let numeric = build_frames(&Numeric::default(), &float_moments).unwrap();

    assert_close!(exact.e1, numeric.e1);
    assert_close!(exact.e2, numeric.e2);
    assert_close!(exact.e3, numeric.e3);
    assert_close!(exact.magnitudes, numeric.magnitudes);
}

// In exact mode the fallback must trigger for precisely the moments whose
// cross product with x̂ is the zero vector.
#[test]
fn exact_degeneracy_is_the_zero_vector_test() {
    let x_hat = V3::axis_unit(0);
    let z_hat: V3<Surd> = V3::axis_unit(2);
    let moments = vec![
        surds(["5", "0", "0"]),
        surds(["-sqrt(2)", "0", "0"]),
        surds(["3/7", "0", "0"]),
        surds(["1", "1e-12", "0"]),
        surds(["1", "0", "-1e-30"]),
        surds(["sqrt(2)", "sqrt(2) - 2/sqrt(2)", "0"]),
    ];
    let frames = build_frames(&Exact, &moments).unwrap();

    let mut num_fallbacks = 0;
    for (i, m) in moments.iter().enumerate() {
        let direct = m.cross(&x_hat).is_zero();
        assert_eq!(is_negligible_v(&Exact, &frames.e3[i].cross(&x_hat)), direct);
        if direct {
            num_fallbacks += 1;
            assert_eq!(frames.e2[i], z_hat);
        } else {
            assert_ne!(frames.e2[i], z_hat);
        }
    }
    // the last moment is (√2, 0, 0) in disguise
    assert_eq!(num_fallbacks, 4);
}

#[test]
fn numeric_degeneracy_uses_tolerance() {
    let moments = vec![
        V3([1.0, 1e-12, 0.0]),
        V3([1.0, 0.0, -1e-30]),
        V3([-3.0, 0.0, 0.0]),
    ];
    let arith = Numeric::default();
    let frames = build_frames(&arith, &moments).unwrap();
    for (i, e2) in frames.e2.iter().enumerate() {
        assert!(is_negligible_v(&arith, &frames.e3[i].cross(&V3::axis_unit(0))));
        assert_eq!(*e2, V3([0.0, 0.0, 1.0]));
    }
    check_numeric_frame(&frames, &moments);
    assert_eq!(arith.name(), "numeric");
}
