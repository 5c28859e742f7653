//! Property-based tests for real ball arithmetic
//!
//! The central contract is enclosure soundness: whenever the inputs
//! enclose exact rationals, the output must enclose the exact rational
//! result. Rationals keep every check decidable; `contains_rational`
//! itself is exact, so there are no false passes.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use oxarb_core::{Float, Magnitude, RealBall};
use proptest::prelude::*;

/// Strategy for small exact rationals
fn rational_strategy() -> impl Strategy<Value = BigRational> {
    (-999i64..1000i64, 1i64..1000i64)
        .prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

/// Strategy for working precisions
fn prec_strategy() -> impl Strategy<Value = u32> {
    20u32..200u32
}

#[cfg(test)]
mod enclosure_soundness {
    use super::*;

    proptest! {
        /// Construction encloses the rational it was built from
        #[test]
        fn from_rational_contains_input(a in rational_strategy(), p in prec_strategy()) {
            let x = RealBall::from_rational(&a, p);
            prop_assert!(x.contains_rational(&a));
        }

        /// x + y encloses the exact sum
        #[test]
        fn add_contains_exact_sum(
            a in rational_strategy(),
            b in rational_strategy(),
            pa in prec_strategy(),
            pb in prec_strategy(),
            pr in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, pa);
            let y = RealBall::from_rational(&b, pb);
            prop_assert!(x.add(&y, pr).contains_rational(&(a + b)));
        }

        /// x - y encloses the exact difference
        #[test]
        fn sub_contains_exact_difference(
            a in rational_strategy(),
            b in rational_strategy(),
            pa in prec_strategy(),
            pb in prec_strategy(),
            pr in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, pa);
            let y = RealBall::from_rational(&b, pb);
            prop_assert!(x.sub(&y, pr).contains_rational(&(a - b)));
        }

        /// x * y encloses the exact product
        #[test]
        fn mul_contains_exact_product(
            a in rational_strategy(),
            b in rational_strategy(),
            pa in prec_strategy(),
            pb in prec_strategy(),
            pr in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, pa);
            let y = RealBall::from_rational(&b, pb);
            prop_assert!(x.mul(&y, pr).contains_rational(&(a * b)));
        }

        /// x / y encloses the exact quotient, and multiplying back
        /// recovers the dividend
        #[test]
        fn div_contains_exact_quotient(
            a in rational_strategy(),
            b in rational_strategy(),
            pa in prec_strategy(),
            pb in prec_strategy(),
            pr in prec_strategy()
        ) {
            prop_assume!(!b.is_zero());
            let x = RealBall::from_rational(&a, pa);
            let y = RealBall::from_rational(&b, pb);
            prop_assume!(y.is_nonzero());
            let q = x.div(&y, pr);
            prop_assert!(q.contains_rational(&(&a / &b)));
            prop_assert!(q.mul(&y, pr).contains_rational(&a));
        }

        /// Fused accumulation encloses c + a*b
        #[test]
        fn addmul_contains_exact_value(
            a in rational_strategy(),
            b in rational_strategy(),
            c in rational_strategy(),
            p in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, p);
            let y = RealBall::from_rational(&b, p);
            let mut acc = RealBall::from_rational(&c, p);
            acc.addmul(&x, &y, p);
            prop_assert!(acc.contains_rational(&(&c + &a * &b)));
            let mut acc = RealBall::from_rational(&c, p);
            acc.submul(&x, &y, p);
            prop_assert!(acc.contains_rational(&(&c - &a * &b)));
        }

        /// Exact operations are exact
        #[test]
        fn neg_abs_and_scaling_are_exact(
            a in rational_strategy(),
            p in prec_strategy(),
            e in 0u32..40u32
        ) {
            let x = RealBall::from_rational(&a, p);
            prop_assert!(x.neg().contains_rational(&(-a.clone())));
            prop_assert!(x.abs().contains_rational(&a.abs()));
            let neg = x.neg();
            prop_assert_eq!(neg.rad(), x.rad());
            let scale = BigRational::new(BigInt::from(1) << e, BigInt::one());
            prop_assert!(x.mul_2exp(e as i64).contains_rational(&(&a * &scale)));
            prop_assert!(x.mul_2exp(-(e as i64)).contains_rational(&(&a / &scale)));
        }

        /// Scalar convenience wrappers agree with the ball operation
        #[test]
        fn scalar_wrappers_match_ball_ops(
            a in rational_strategy(),
            n in -999i64..1000i64,
            p in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, p);
            let nb = RealBall::from_i64(n);
            prop_assert_eq!(x.add_i64(n, p), x.add(&nb, p));
            prop_assert_eq!(x.sub_i64(n, p), x.sub(&nb, p));
            prop_assert_eq!(x.mul_i64(n, p), x.mul(&nb, p));
            if n != 0 {
                prop_assert_eq!(x.div_i64(n, p), x.div(&nb, p));
            }
        }
    }
}

#[cfg(test)]
mod maintenance_soundness {
    use super::*;

    proptest! {
        /// Widening the radius keeps both membership and ball containment
        #[test]
        fn widening_preserves_membership(
            a in rational_strategy(),
            p in prec_strategy(),
            e in -60i64..0i64
        ) {
            let x = RealBall::from_rational(&a, p);
            let mut w = x.clone();
            w.add_error(&Magnitude::pow2(e));
            prop_assert!(w.contains(&x));
            prop_assert!(w.contains_rational(&a));
            prop_assert!(w.overlaps(&x) && x.overlaps(&w));
        }

        /// Re-rounding to any precision keeps the enclosure
        #[test]
        fn set_round_preserves_enclosure(
            a in rational_strategy(),
            p1 in prec_strategy(),
            p2 in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, p1);
            prop_assert!(x.set_round(p2).contains_rational(&a));
        }

        /// Trimming never loses the enclosed value
        #[test]
        fn trim_preserves_enclosure(
            a in rational_strategy(),
            p in prec_strategy(),
            e in -40i64..0i64
        ) {
            let mut x = RealBall::from_rational(&a, p);
            x.add_error(&Magnitude::pow2(e));
            prop_assert!(x.trim().contains_rational(&a));
        }

        /// overlaps is symmetric
        #[test]
        fn overlaps_is_symmetric(
            a in rational_strategy(),
            b in rational_strategy(),
            pa in prec_strategy(),
            pb in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, pa);
            let y = RealBall::from_rational(&b, pb);
            prop_assert_eq!(x.overlaps(&y), y.overlaps(&x));
        }
    }
}

#[cfg(test)]
mod domain_edges {
    use super::*;

    proptest! {
        /// Division by a ball straddling zero is indeterminate
        #[test]
        fn div_by_zero_straddling_ball(n in -5i64..6i64, p in prec_strategy()) {
            let y = RealBall::from_mid_rad(Float::from_i64(n), Magnitude::from_u64(10));
            let q = RealBall::one().div(&y, p);
            prop_assert!(q.is_indeterminate());
        }

        /// Square root of a definitely negative ball is indeterminate
        #[test]
        fn sqrt_of_negative(n in 1i64..1000i64, p in prec_strategy()) {
            let x = RealBall::from_i64(-n);
            prop_assert!(x.sqrt(p).is_indeterminate());
        }

        /// sqrtpos of a square recovers the absolute value
        #[test]
        fn sqrtpos_of_square_contains_abs(a in rational_strategy(), p in prec_strategy()) {
            let x = RealBall::from_rational(&a, p);
            let sq = x.mul(&x, p);
            prop_assert!(sq.sqrtpos(p).contains_rational(&a.abs()));
        }
    }
}

#[cfg(test)]
mod elementary_soundness {
    use super::*;

    proptest! {
        /// exp(x + y) and exp(x)exp(y) both enclose the same point
        #[test]
        fn exp_additivity_overlap(
            a in rational_strategy(),
            b in rational_strategy(),
            p in 30u32..150u32
        ) {
            let x = RealBall::from_rational(&a, p);
            let y = RealBall::from_rational(&b, p);
            let lhs = x.add(&y, p).exp(p);
            let rhs = x.exp(p).mul(&y.exp(p), p);
            prop_assert!(lhs.overlaps(&rhs));
        }

        /// sin^2 + cos^2 always encloses one
        #[test]
        fn sin_cos_pythagorean(a in rational_strategy(), p in 30u32..150u32) {
            let x = RealBall::from_rational(&a, p);
            let (s, c) = x.sin_cos(p);
            let sum = s.mul(&s, p).add(&c.mul(&c, p), p);
            prop_assert!(sum.contains_rational(&BigRational::one()));
        }

        /// cosh^2 - sinh^2 always encloses one
        #[test]
        fn hyperbolic_identity(a in rational_strategy(), p in 30u32..150u32) {
            let x = RealBall::from_rational(&a, p);
            let (sh, ch) = x.sinh_cosh(p);
            let diff = ch.mul(&ch, p).sub(&sh.mul(&sh, p), p);
            prop_assert!(diff.contains_rational(&BigRational::one()));
        }

        /// Integer powers enclose the exact rational power
        #[test]
        fn pow_contains_exact_power(
            a in rational_strategy(),
            k in 0u64..8u64,
            p in prec_strategy()
        ) {
            let x = RealBall::from_rational(&a, p);
            let mut exact = BigRational::one();
            for _ in 0..k {
                exact *= &a;
            }
            prop_assert!(x.pow_u64(k, p).contains_rational(&exact));
        }
    }
}
