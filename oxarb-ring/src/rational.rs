//! The field of rationals over `BigRational`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::ring::Ring;
use crate::status::{RingError, RingResult, Truth};

/// ℚ. An exact field: everything is decidable and only division by zero
/// fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rationals;

impl Ring for Rationals {
    type Elem = BigRational;

    fn zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn one(&self) -> BigRational {
        BigRational::one()
    }

    fn from_i64(&self, n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn add(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn sub(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a - b
    }

    fn neg(&self, a: &BigRational) -> BigRational {
        -a
    }

    fn mul(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a * b
    }

    fn is_zero(&self, a: &BigRational) -> Truth {
        Truth::from_bool(a.is_zero())
    }

    fn is_one(&self, a: &BigRational) -> Truth {
        Truth::from_bool(a.is_one())
    }

    fn equal(&self, a: &BigRational, b: &BigRational) -> Truth {
        Truth::from_bool(a == b)
    }

    fn inv(&self, a: &BigRational) -> RingResult<BigRational> {
        if a.is_zero() {
            Err(RingError::Domain)
        } else {
            Ok(a.recip())
        }
    }

    fn div(&self, a: &BigRational, b: &BigRational) -> RingResult<BigRational> {
        if b.is_zero() {
            Err(RingError::Domain)
        } else {
            Ok(a / b)
        }
    }
}
