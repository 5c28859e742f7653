//! Laws of quotient ring contexts: finite fields and number fields.

use num_bigint::BigInt;
use num_rational::BigRational;
use oxarb_ring::{
    ExtensionField, ModularRing, NumberField, PolyRing, QuotientRing, Rationals, Ring, RingError,
};
use proptest::prelude::*;

/// 𝔽_25 as 𝔽_5[x]/(x^2 + 2); x^2 + 2 is irreducible since 3 is not a
/// square mod 5.
fn f25() -> ExtensionField {
    let fp = ModularRing::new(BigInt::from(5)).unwrap();
    let px = PolyRing::new(fp.clone());
    QuotientRing::new(fp, px.poly_i64(&[2, 0, 1])).unwrap()
}

fn sqrt2_field() -> NumberField {
    let px = PolyRing::new(Rationals);
    QuotientRing::new(Rationals, px.poly_i64(&[-2, 0, 1])).unwrap()
}

fn rational_strategy() -> impl Strategy<Value = BigRational> {
    (-99i64..100, 1i64..100).prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

mod extension_field_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_nonzero_elements_invert(a in 0i64..5, b in 0i64..5) {
            prop_assume!(a != 0 || b != 0);
            let k = f25();
            let u = k.element_i64(&[a, b]);
            let ui = k.inv(&u).unwrap();
            prop_assert!(k.is_one(&k.mul(&u, &ui)).is_true());
        }

        #[test]
        fn prop_frobenius_power_fixes_every_element(a in 0i64..5, b in 0i64..5) {
            let k = f25();
            let u = k.element_i64(&[a, b]);
            // x^(p^2) = x throughout 𝔽_{p^2}
            prop_assert!(k.equal(&k.pow_u64(&u, 25), &u).is_true());
        }

        #[test]
        fn prop_reduction_is_canonical(coeffs in prop::collection::vec(0i64..5, 0..7)) {
            let k = f25();
            let p = k.poly_ring().poly_i64(&coeffs);
            let r = k.reduce(&p);
            prop_assert!(r.len() <= 2);
            prop_assert_eq!(k.reduce(&r), r.clone());
            // p and its representative differ by a multiple of the modulus
            let diff = k.poly_ring().sub(&p, &r);
            prop_assert!(k.poly_ring().rem(&diff, k.modulus()).unwrap().is_empty());
        }
    }
}

mod number_field_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_conjugate_product_is_rational(a in rational_strategy(), b in rational_strategy()) {
            let k = sqrt2_field();
            let u = k.reduce(&k.poly_ring().poly(vec![a.clone(), b.clone()]));
            let v = k.reduce(&k.poly_ring().poly(vec![a.clone(), -b.clone()]));
            let n = k.mul(&u, &v);
            // the norm a^2 - 2 b^2 has no √2 component
            prop_assert!(n.len() <= 1);
            let expected = &a * &a - BigRational::from(BigInt::from(2)) * &b * &b;
            prop_assert!(k.equal(&n, &k.poly_ring().poly(vec![expected])).is_true());
        }

        #[test]
        fn prop_field_inversion(a in rational_strategy(), b in rational_strategy()) {
            let k = sqrt2_field();
            let u = k.reduce(&k.poly_ring().poly(vec![a, b]));
            if k.is_zero(&u).is_true() {
                prop_assert_eq!(k.inv(&u), Err(RingError::Domain));
            } else {
                let ui = k.inv(&u).unwrap();
                prop_assert!(k.is_one(&k.mul(&u, &ui)).is_true());
            }
        }

        #[test]
        fn prop_even_powers_of_sqrt2_are_integers(e in 1u64..12) {
            let k = sqrt2_field();
            let r = k.gen();
            let p = k.pow_u64(&r, 2 * e);
            prop_assert!(k.equal(&p, &k.from_i64(1i64 << e)).is_true());
        }

        #[test]
        fn prop_division_undoes_multiplication(
            a in rational_strategy(),
            b in rational_strategy(),
            c in rational_strategy(),
            d in rational_strategy(),
        ) {
            let k = sqrt2_field();
            let u = k.reduce(&k.poly_ring().poly(vec![a, b]));
            let v = k.reduce(&k.poly_ring().poly(vec![c, d]));
            prop_assume!(!k.is_zero(&v).is_true());
            let w = k.mul(&u, &v);
            prop_assert!(k.equal(&k.div(&w, &v).unwrap(), &u).is_true());
        }
    }
}
