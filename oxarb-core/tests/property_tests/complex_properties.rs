//! Property-based tests for complex ball arithmetic
//!
//! Complex values are generated from pairs of exact rationals, so every
//! expected result is computable exactly with `BigRational` and checked
//! through the exact containment predicates.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use oxarb_core::{ComplexBall, RealBall};
use proptest::prelude::*;

fn rational_strategy() -> impl Strategy<Value = BigRational> {
    (-99i64..100i64, 1i64..100i64)
        .prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

fn prec_strategy() -> impl Strategy<Value = u32> {
    20u32..150u32
}

fn cball(re: &BigRational, im: &BigRational, p: u32) -> ComplexBall {
    ComplexBall::from_parts(RealBall::from_rational(re, p), RealBall::from_rational(im, p))
}

fn contains_q(z: &ComplexBall, re: &BigRational, im: &BigRational) -> bool {
    z.re().contains_rational(re) && z.im().contains_rational(im)
}

#[cfg(test)]
mod multiplication_properties {
    use super::*;

    proptest! {
        /// Both multiplication variants enclose the exact product and
        /// each other's enclosure
        #[test]
        fn mul_variants_enclose_exact_product(
            a1 in rational_strategy(), a2 in rational_strategy(),
            b1 in rational_strategy(), b2 in rational_strategy(),
            p in prec_strategy()
        ) {
            let z = cball(&a1, &a2, p);
            let w = cball(&b1, &b2, p);
            let pre = &a1 * &b1 - &a2 * &b2;
            let pim = &a1 * &b2 + &a2 * &b1;
            let fused = z.mul(&w, p);
            let naive = z.mul_naive(&w, p);
            prop_assert!(contains_q(&fused, &pre, &pim));
            prop_assert!(contains_q(&naive, &pre, &pim));
            prop_assert!(fused.overlaps(&naive));
        }

        /// Conjugation distributes over the product, bit for bit
        #[test]
        fn conj_commutes_with_mul(
            a1 in rational_strategy(), a2 in rational_strategy(),
            b1 in rational_strategy(), b2 in rational_strategy(),
            p in prec_strategy()
        ) {
            let z = cball(&a1, &a2, p);
            let w = cball(&b1, &b2, p);
            prop_assert_eq!(z.mul(&w, p).conj(), z.conj().mul(&w.conj(), p));
        }

        /// The in-place i-rotation matches the allocating one, and four
        /// rotations are the identity
        #[test]
        fn mul_i_variants_agree(
            a1 in rational_strategy(), a2 in rational_strategy(),
            p in prec_strategy()
        ) {
            let z = cball(&a1, &a2, p);
            let mut m = z.clone();
            m.mul_i_mut();
            prop_assert_eq!(&m, &z.mul_i());
            m.mul_i_mut();
            m.mul_i_mut();
            m.mul_i_mut();
            prop_assert_eq!(&m, &z);
        }

        /// Fused accumulation encloses c + a*b
        #[test]
        fn addmul_contains_exact_value(
            a1 in rational_strategy(), a2 in rational_strategy(),
            b1 in rational_strategy(), b2 in rational_strategy(),
            c1 in rational_strategy(), c2 in rational_strategy(),
            p in prec_strategy()
        ) {
            let x = cball(&a1, &a2, p);
            let y = cball(&b1, &b2, p);
            let mut acc = cball(&c1, &c2, p);
            acc.addmul(&x, &y, p);
            let ere = &c1 + (&a1 * &b1 - &a2 * &b2);
            let eim = &c2 + (&a1 * &b2 + &a2 * &b1);
            prop_assert!(contains_q(&acc, &ere, &eim));
        }

        /// Integer powers enclose the exact rational power
        #[test]
        fn pow_contains_exact_power(
            a1 in rational_strategy(), a2 in rational_strategy(),
            k in 0u64..6u64,
            p in prec_strategy()
        ) {
            let z = cball(&a1, &a2, p);
            let mut ere = BigRational::one();
            let mut eim = BigRational::zero();
            for _ in 0..k {
                let nre = &ere * &a1 - &eim * &a2;
                let nim = &ere * &a2 + &eim * &a1;
                ere = nre;
                eim = nim;
            }
            prop_assert!(contains_q(&z.pow_u64(k, p), &ere, &eim));
        }
    }
}

#[cfg(test)]
mod division_properties {
    use super::*;

    proptest! {
        /// z / w encloses the exact quotient when w excludes zero
        #[test]
        fn div_contains_exact_quotient(
            a1 in rational_strategy(), a2 in rational_strategy(),
            b1 in rational_strategy(), b2 in rational_strategy(),
            p in prec_strategy()
        ) {
            prop_assume!(!b1.is_zero() || !b2.is_zero());
            let z = cball(&a1, &a2, p);
            let w = cball(&b1, &b2, p);
            prop_assume!(!w.contains_zero());
            let den = &b1 * &b1 + &b2 * &b2;
            let qre = (&a1 * &b1 + &a2 * &b2) / &den;
            let qim = (&a2 * &b1 - &a1 * &b2) / &den;
            prop_assert!(contains_q(&z.div(&w, p), &qre, &qim));
        }

        /// Inversion agrees with dividing one
        #[test]
        fn inv_contains_exact_reciprocal(
            b1 in rational_strategy(), b2 in rational_strategy(),
            p in prec_strategy()
        ) {
            prop_assume!(!b1.is_zero() || !b2.is_zero());
            let w = cball(&b1, &b2, p);
            prop_assume!(!w.contains_zero());
            let den = &b1 * &b1 + &b2 * &b2;
            let qre = &b1 / &den;
            let qim = -(&b2 / &den);
            prop_assert!(contains_q(&w.inv(p), &qre, &qim));
        }

        /// Division by a box straddling zero is indeterminate
        #[test]
        fn div_by_zero_box(
            a1 in rational_strategy(), a2 in rational_strategy(),
            p in prec_strategy()
        ) {
            let z = cball(&a1, &a2, p);
            let zero_box = ComplexBall::from_parts(
                RealBall::from_mid_rad(oxarb_core::Float::zero(), oxarb_core::Magnitude::one()),
                RealBall::from_mid_rad(oxarb_core::Float::zero(), oxarb_core::Magnitude::one()),
            );
            prop_assert!(z.div(&zero_box, p).is_indeterminate());
        }
    }
}

#[cfg(test)]
mod modulus_properties {
    use super::*;

    proptest! {
        /// The modulus enclosure squares back onto |z|^2
        #[test]
        fn abs_squared_contains_modulus_squared(
            a1 in rational_strategy(), a2 in rational_strategy(),
            p in prec_strategy()
        ) {
            let z = cball(&a1, &a2, p);
            let m = z.abs(p);
            let exact = &a1 * &a1 + &a2 * &a2;
            prop_assert!(m.mul(&m, p).contains_rational(&exact));
        }

        /// Magnitude bounds are ordered and dominate the radii
        #[test]
        fn bounds_are_ordered(
            a1 in rational_strategy(), a2 in rational_strategy(),
            p in prec_strategy()
        ) {
            let z = cball(&a1, &a2, p);
            let lo = z.abs_lbound(p);
            let hi = z.abs_ubound(p);
            prop_assert!(lo.cmp_value(&hi).unwrap().is_le());
            let r = z.rad_ubound();
            prop_assert!(z.re().rad().cmp(&r).is_le());
            prop_assert!(z.im().rad().cmp(&r).is_le());
        }

        /// exp(z + w) and exp(z)exp(w) enclose a common point
        #[test]
        fn exp_additivity_overlap(
            a1 in rational_strategy(), a2 in rational_strategy(),
            b1 in rational_strategy(), b2 in rational_strategy(),
            p in 30u32..120u32
        ) {
            let z = cball(&a1, &a2, p);
            let w = cball(&b1, &b2, p);
            let lhs = z.add(&w, p).exp(p);
            let rhs = z.exp(p).mul(&w.exp(p), p);
            prop_assert!(lhs.overlaps(&rhs));
        }
    }
}
