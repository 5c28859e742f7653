//! Laws of the base contexts: ℤ, ℚ, ℤ/pℤ and ball fields.

use num_bigint::BigInt;
use num_rational::BigRational;
use oxarb_core::{Float, Magnitude, RealBall};
use oxarb_ring::{Integers, ModularRing, Rationals, RealBallField, Ring, RingError};
use proptest::prelude::*;

fn rational_strategy() -> impl Strategy<Value = BigRational> {
    (-999i64..1000, 1i64..1000)
        .prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

const P: i64 = 10007; // prime

fn fp() -> ModularRing {
    ModularRing::new(BigInt::from(P)).unwrap()
}

mod integer_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_exact_division_round_trips(a in -4000i64..4000, b in 1i64..4000) {
            let zz = Integers;
            let x = zz.from_i64(a);
            let y = zz.from_i64(b);
            let p = zz.mul(&x, &y);
            prop_assert_eq!(zz.div(&p, &y), Ok(x));
        }

        #[test]
        fn prop_inexact_division_is_domain_error(a in -4000i64..4000, b in 2i64..4000) {
            let zz = Integers;
            // a·b + 1 is never divisible by b when b >= 2
            let n = zz.add(&zz.mul(&zz.from_i64(a), &zz.from_i64(b)), &zz.one());
            prop_assert_eq!(zz.div(&n, &zz.from_i64(b)), Err(RingError::Domain));
        }

        #[test]
        fn prop_units_are_plus_minus_one(a in -4000i64..4000) {
            let zz = Integers;
            let x = zz.from_i64(a);
            match a {
                1 | -1 => prop_assert_eq!(zz.inv(&x), Ok(x.clone())),
                _ => prop_assert_eq!(zz.inv(&x), Err(RingError::Domain)),
            }
        }
    }
}

mod rational_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_field_inverse(q in rational_strategy()) {
            let qq = Rationals;
            if qq.is_zero(&q).is_true() {
                prop_assert_eq!(qq.inv(&q), Err(RingError::Domain));
            } else {
                let qi = qq.inv(&q).unwrap();
                prop_assert!(qq.is_one(&qq.mul(&q, &qi)).is_true());
            }
        }

        #[test]
        fn prop_distributivity_and_additive_inverse(
            a in rational_strategy(),
            b in rational_strategy(),
            c in rational_strategy(),
        ) {
            let qq = Rationals;
            let lhs = qq.mul(&a, &qq.add(&b, &c));
            let rhs = qq.add(&qq.mul(&a, &b), &qq.mul(&a, &c));
            prop_assert!(qq.equal(&lhs, &rhs).is_true());
            prop_assert!(qq.is_zero(&qq.add(&a, &qq.neg(&a))).is_true());
        }

        #[test]
        fn prop_pow_is_repeated_multiplication(q in rational_strategy(), e in 0u64..10) {
            let qq = Rationals;
            let mut expected = qq.one();
            for _ in 0..e {
                expected = qq.mul(&expected, &q);
            }
            prop_assert!(qq.equal(&qq.pow_u64(&q, e), &expected).is_true());
        }
    }
}

mod modular_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_inverse_mod_prime(a in 1i64..P) {
            let zp = fp();
            let x = zp.from_i64(a);
            let xi = zp.inv(&x).unwrap();
            prop_assert!(zp.is_one(&zp.mul(&x, &xi)).is_true());
        }

        #[test]
        fn prop_representatives_are_canonical(a in i64::MIN / 2..i64::MAX / 2) {
            let zp = fp();
            let x = zp.from_i64(a);
            prop_assert!(x >= BigInt::from(0));
            prop_assert!(x < BigInt::from(P));
        }

        #[test]
        fn prop_fermat_little_theorem(a in 1i64..P) {
            let zp = fp();
            let x = zp.from_i64(a);
            prop_assert!(zp.is_one(&zp.pow_u64(&x, (P - 1) as u64)).is_true());
        }
    }
}

mod ball_field_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_exact_zero_test_is_decided(a in -999i64..1000) {
            let bf = RealBallField::new(53);
            let x = bf.from_i64(a);
            if a == 0 {
                prop_assert!(bf.is_zero(&x).is_true());
            } else {
                prop_assert!(bf.is_zero(&x).is_false());
            }
        }

        #[test]
        fn prop_straddling_ball_cannot_be_inverted(n in -5i64..6) {
            let bf = RealBallField::new(53);
            // the enclosure contains zero without being zero, so the
            // context refuses rather than returning garbage
            let x = RealBall::from_mid_rad(Float::from_i64(n), Magnitude::from_u64(10));
            prop_assert_eq!(bf.inv(&x), Err(RingError::Unable));
        }

        #[test]
        fn prop_inexact_self_equality_is_unknown(a in rational_strategy(), prec in 20u32..120) {
            let bf = RealBallField::new(prec);
            let x = RealBall::from_rational(&a, prec);
            if x.is_exact() {
                prop_assert!(bf.equal(&x, &x).is_true());
            } else {
                prop_assert!(bf.equal(&x, &x).is_unknown());
            }
        }

        #[test]
        fn prop_division_by_provably_nonzero_ball_succeeds(
            a in rational_strategy(),
            n in 1i64..1000,
            prec in 30u32..120,
        ) {
            let bf = RealBallField::new(prec);
            let x = RealBall::from_rational(&a, prec);
            let y = bf.from_i64(n);
            let q = bf.div(&x, &y).unwrap();
            let exact = &a / BigRational::from(BigInt::from(n));
            prop_assert!(q.contains_rational(&exact));
        }
    }
}
