//! Property-based tests for batched slice operations
//!
//! The slice routines promise exact equivalence with the scalar loop, so
//! most checks here are structural equalities; the power table adds a
//! soundness check against exact rational powers.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use oxarb_core::{vec as ballvec, ComplexBall, RealBall};
use proptest::prelude::*;

fn rationals(len: usize) -> impl Strategy<Value = Vec<BigRational>> {
    proptest::collection::vec(
        (-99i64..100i64, 1i64..100i64)
            .prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d))),
        len,
    )
}

fn balls(qs: &[BigRational], p: u32) -> Vec<RealBall> {
    qs.iter().map(|q| RealBall::from_rational(q, p)).collect()
}

#[cfg(test)]
mod slice_equivalence {
    use super::*;

    proptest! {
        /// Elementwise routines equal the scalar loop, entry by entry
        #[test]
        fn elementwise_ops_match_scalar_calls(
            qa in rationals(6),
            qb in rationals(6),
            p in 20u32..120u32
        ) {
            let a = balls(&qa, p);
            let b = balls(&qb, p);
            let mut sum = vec![RealBall::zero(); 6];
            let mut diff = vec![RealBall::zero(); 6];
            let mut neg = vec![RealBall::zero(); 6];
            ballvec::real::add(&mut sum, &a, &b, p);
            ballvec::real::sub(&mut diff, &a, &b, p);
            ballvec::real::neg(&mut neg, &a);
            for i in 0..6 {
                prop_assert_eq!(&sum[i], &a[i].add(&b[i], p));
                prop_assert_eq!(&diff[i], &a[i].sub(&b[i], p));
                prop_assert_eq!(&neg[i], &a[i].neg());
            }
        }

        /// Scalar multiply and accumulate match the per-entry calls
        #[test]
        fn scalar_routines_match(
            qa in rationals(5),
            qc in rationals(1),
            p in 20u32..120u32
        ) {
            let a = balls(&qa, p);
            let c = RealBall::from_rational(&qc[0], p);
            let mut out = vec![RealBall::zero(); 5];
            ballvec::real::scalar_mul(&mut out, &a, &c, p);
            for i in 0..5 {
                prop_assert_eq!(&out[i], &a[i].mul(&c, p));
            }
            let mut acc = balls(&qa, p);
            ballvec::real::scalar_addmul(&mut acc, &a, &c, p);
            for i in 0..5 {
                let mut want = a[i].clone();
                want.addmul(&a[i], &c, p);
                prop_assert_eq!(&acc[i], &want);
            }
        }

        /// bits is the maximum over the entries
        #[test]
        fn bits_is_max(qa in rationals(4), p in 20u32..120u32) {
            let a = balls(&qa, p);
            let expect = a.iter().map(RealBall::bits).max().unwrap_or(0);
            prop_assert_eq!(ballvec::real::bits(&a), expect);
        }
    }
}

#[cfg(test)]
mod power_table {
    use super::*;

    proptest! {
        /// The power table reproduces the square-and-multiply chain bit
        /// for bit and encloses every exact rational power
        #[test]
        fn set_powers_matches_chain(
            qa in rationals(1),
            n in 2usize..12usize,
            p in 20u32..120u32
        ) {
            let q = &qa[0];
            let x = RealBall::from_rational(q, p);
            let mut table = vec![RealBall::zero(); n];
            ballvec::real::set_powers(&mut table, &x, p);

            let mut chain = vec![RealBall::zero(); n];
            for k in 0..n {
                chain[k] = if k == 0 {
                    RealBall::one()
                } else if k == 1 {
                    x.set_round(p)
                } else if k % 2 == 0 {
                    chain[k / 2].mul(&chain[k / 2], p)
                } else {
                    chain[k - 1].mul(&x, p)
                };
            }
            for k in 0..n {
                prop_assert_eq!(&table[k], &chain[k]);
            }

            let mut exact = BigRational::one();
            for k in 0..n {
                prop_assert!(table[k].contains_rational(&exact));
                exact *= q;
            }
        }

        /// Powers of a real-valued complex ball stay real and match the
        /// real table in the real part
        #[test]
        fn complex_powers_of_real_input_stay_real(
            qa in rationals(1),
            n in 2usize..10usize,
            p in 20u32..120u32
        ) {
            let x = RealBall::from_rational(&qa[0], p);
            let z = ComplexBall::from_real(x.clone());
            let mut rt = vec![RealBall::zero(); n];
            let mut ct = vec![ComplexBall::zero(); n];
            ballvec::real::set_powers(&mut rt, &x, p);
            ballvec::complex::set_powers(&mut ct, &z, p);
            for k in 0..n {
                prop_assert!(ct[k].im().is_zero());
                prop_assert_eq!(ct[k].re(), &rt[k]);
            }
        }
    }
}
