//! The ring of integers over `BigInt`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::ring::Ring;
use crate::status::{RingError, RingResult, Truth};

/// ℤ. Every predicate is decidable; `inv` succeeds only at ±1 and `div`
/// is exact-or-`Domain`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Integers;

impl Ring for Integers {
    type Elem = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn from_i64(&self, n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a - b
    }

    fn neg(&self, a: &BigInt) -> BigInt {
        -a
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn is_zero(&self, a: &BigInt) -> Truth {
        Truth::from_bool(a.is_zero())
    }

    fn is_one(&self, a: &BigInt) -> Truth {
        Truth::from_bool(a.is_one())
    }

    fn equal(&self, a: &BigInt, b: &BigInt) -> Truth {
        Truth::from_bool(a == b)
    }

    fn inv(&self, a: &BigInt) -> RingResult<BigInt> {
        if a.abs().is_one() {
            Ok(a.clone())
        } else {
            Err(RingError::Domain)
        }
    }

    fn div(&self, a: &BigInt, b: &BigInt) -> RingResult<BigInt> {
        if b.is_zero() {
            return Err(RingError::Domain);
        }
        let (q, r) = a.div_rem(b);
        if r.is_zero() {
            Ok(q)
        } else {
            Err(RingError::Domain)
        }
    }
}
