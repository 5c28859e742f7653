//! Laws of the dense polynomial engine.

use num_bigint::BigInt;
use num_rational::BigRational;
use oxarb_ring::{PolyRing, Rationals, Ring};
use proptest::prelude::*;

fn rational_strategy() -> impl Strategy<Value = BigRational> {
    (-99i64..100, 1i64..100).prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

fn coeffs_strategy(max_len: usize) -> impl Strategy<Value = Vec<BigRational>> {
    prop::collection::vec(rational_strategy(), 0..max_len)
}

fn qq() -> PolyRing<Rationals> {
    PolyRing::new(Rationals)
}

mod division_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_divrem_reconstructs_dividend(ac in coeffs_strategy(14), bc in coeffs_strategy(6)) {
            let rx = qq();
            let a = rx.poly(ac);
            let b = rx.poly(bc);
            prop_assume!(!b.is_empty());
            let (q, r) = rx.divrem(&a, &b).unwrap();
            prop_assert!(r.len() < b.len());
            prop_assert_eq!(rx.add(&rx.mul(&b, &q), &r), a);
        }

        #[test]
        fn prop_self_division_is_one(ac in coeffs_strategy(10)) {
            let rx = qq();
            let a = rx.poly(ac);
            prop_assume!(!a.is_empty());
            let (q, r) = rx.divrem(&a, &a).unwrap();
            prop_assert_eq!(q, rx.one());
            prop_assert!(r.is_empty());
        }

        #[test]
        fn prop_short_dividend_short_circuits(ac in coeffs_strategy(5), bc in coeffs_strategy(10)) {
            let rx = qq();
            let a = rx.poly(ac);
            let b = rx.poly(bc);
            prop_assume!(a.len() < b.len());
            let (q, r) = rx.divrem(&a, &b).unwrap();
            prop_assert!(q.is_empty());
            prop_assert_eq!(r, a);
        }

        #[test]
        fn prop_newton_matches_basecase(ac in coeffs_strategy(40), bc in coeffs_strategy(8)) {
            let rx = qq();
            let a = rx.poly(ac);
            let b = rx.poly(bc);
            prop_assume!(!b.is_empty());
            let base = rx.divrem_basecase(&a, &b).unwrap();
            let newton = rx.divrem_newton(&a, &b).unwrap();
            prop_assert_eq!(base, newton);
        }
    }
}

mod series_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_inverse_series_multiplies_to_one(
            c0 in 1i64..60,
            rest in coeffs_strategy(8),
            n in 1usize..20,
        ) {
            let rx = qq();
            let mut coeffs = vec![rx.base().from_i64(c0)];
            coeffs.extend(rest);
            let f = rx.poly(coeffs);
            let g = rx.inv_series(&f, n).unwrap();
            prop_assert_eq!(rx.mullow(&f, &g, n), rx.one());
        }

        #[test]
        fn prop_mullow_is_truncated_mul(
            ac in coeffs_strategy(9),
            bc in coeffs_strategy(9),
            n in 0usize..16,
        ) {
            let rx = qq();
            let a = rx.poly(ac);
            let b = rx.poly(bc);
            prop_assert_eq!(rx.mullow(&a, &b, n), rx.truncate(&rx.mul(&a, &b), n));
        }
    }
}

mod gcd_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_gcd_divides_both_inputs(
            ac in coeffs_strategy(8),
            bc in coeffs_strategy(8),
            cc in coeffs_strategy(4),
        ) {
            let rx = qq();
            let c = rx.poly(cc);
            let a = rx.mul(&rx.poly(ac), &c);
            let b = rx.mul(&rx.poly(bc), &c);
            let g = rx.gcd(&a, &b).unwrap();
            if g.is_empty() {
                prop_assert!(a.is_empty() && b.is_empty());
            } else {
                prop_assert!(rx.base().is_one(g.leading().unwrap()).is_true());
                prop_assert!(rx.rem(&a, &g).unwrap().is_empty());
                prop_assert!(rx.rem(&b, &g).unwrap().is_empty());
                // the planted common factor divides the gcd
                prop_assert!(rx.rem(&g, &c).unwrap().is_empty());
            }
        }

        #[test]
        fn prop_xgcd_bezout_identity(ac in coeffs_strategy(8), bc in coeffs_strategy(8)) {
            let rx = qq();
            let a = rx.poly(ac);
            let b = rx.poly(bc);
            let (g, s, t) = rx.xgcd(&a, &b).unwrap();
            let lhs = rx.add(&rx.mul(&s, &a), &rx.mul(&t, &b));
            prop_assert_eq!(lhs, g.clone());
            prop_assert_eq!(g, rx.gcd(&a, &b).unwrap());
        }

        #[test]
        fn prop_squarefree_reassembly(
            ac in coeffs_strategy(6),
            bc in coeffs_strategy(4),
            m in 1u64..4,
        ) {
            let rx = qq();
            let f = rx.mul(&rx.poly(ac), &rx.pow_u64(&rx.poly(bc), m));
            prop_assume!(!f.is_empty());
            let (content, factors) = rx.factor_squarefree(&f).unwrap();
            let mut acc = rx.constant(content);
            for (p, k) in &factors {
                prop_assert!(rx.base().is_one(p.leading().unwrap()).is_true());
                // every reported factor is squarefree
                let d = rx.gcd(p, &rx.derivative(p)).unwrap();
                prop_assert_eq!(d, rx.one());
                acc = rx.mul(&acc, &rx.pow_u64(p, *k));
            }
            prop_assert_eq!(acc, f);
        }
    }
}

mod structure_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_evaluation_is_a_homomorphism(
            ac in coeffs_strategy(8),
            bc in coeffs_strategy(8),
            x in rational_strategy(),
        ) {
            let rx = qq();
            let a = rx.poly(ac);
            let b = rx.poly(bc);
            let sum = rx.evaluate(&rx.add(&a, &b), &x);
            prop_assert_eq!(sum, rx.evaluate(&a, &x) + rx.evaluate(&b, &x));
            let prod = rx.evaluate(&rx.mul(&a, &b), &x);
            prop_assert_eq!(prod, rx.evaluate(&a, &x) * rx.evaluate(&b, &x));
        }

        #[test]
        fn prop_derivative_product_rule(ac in coeffs_strategy(7), bc in coeffs_strategy(7)) {
            let rx = qq();
            let a = rx.poly(ac);
            let b = rx.poly(bc);
            let lhs = rx.derivative(&rx.mul(&a, &b));
            let rhs = rx.add(
                &rx.mul(&rx.derivative(&a), &b),
                &rx.mul(&a, &rx.derivative(&b)),
            );
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn prop_reverse_is_an_involution_on_proper_windows(ac in coeffs_strategy(9)) {
            let rx = qq();
            let a = rx.poly(ac);
            prop_assume!(!a.is_empty());
            prop_assume!(!rx.base().is_zero(&a.coeffs()[0]).is_true());
            // with a nonzero constant term no length is lost either way
            let n = a.len();
            prop_assert_eq!(rx.reverse(&rx.reverse(&a, n), n), a);
        }
    }
}

mod unable_propagation {
    use super::*;
    use oxarb_core::{Float, Magnitude, RealBall};
    use oxarb_ring::{RealBallField, RingError};

    fn fuzzy_zero() -> RealBall {
        RealBall::from_mid_rad(Float::zero(), Magnitude::pow2(-30))
    }

    proptest! {
        #[test]
        fn prop_fuzzy_leading_divisor_is_refused(head in prop::collection::vec(-20i64..20, 1..5)) {
            let bx = PolyRing::new(RealBallField::new(53));
            let mut coeffs: Vec<RealBall> = head.iter().map(|&n| RealBall::from_i64(n)).collect();
            coeffs.push(fuzzy_zero());
            let b = bx.poly(coeffs);
            let a = bx.poly((1i64..8).map(RealBall::from_i64).collect());
            // refusing is the only sound answer: guessing a degree for b
            // could return a quotient that is silently wrong
            prop_assert_eq!(bx.divrem(&a, &b), Err(RingError::Unable));
        }

        #[test]
        fn prop_ball_division_never_proves_a_false_identity(
            ac in prop::collection::vec(-50i64..50, 0..10),
            bc in prop::collection::vec(-50i64..50, 0..5),
        ) {
            let bx = PolyRing::new(RealBallField::new(64));
            let a = bx.poly(ac.iter().map(|&n| RealBall::from_i64(n)).collect());
            let b = bx.poly(bc.iter().map(|&n| RealBall::from_i64(n)).collect());
            prop_assume!(!b.is_empty());
            let (q, r) = bx.divrem(&a, &b).unwrap();
            // the computed enclosures contain the exact quotient and
            // remainder, so b·q + r can never be provably unequal to a
            let back = bx.add(&bx.mul(&b, &q), &r);
            prop_assert!(!bx.check_equal(&a, &back).is_false());
        }
    }
}
