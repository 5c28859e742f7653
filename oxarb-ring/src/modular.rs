//! Modular arithmetic over `BigInt` residues.
//!
//! Elements are canonical residues in `[0, n)`; every operation reduces
//! its result back into that range, so equality is plain `BigInt`
//! equality. Inverses come from the extended GCD; when `n` is prime the
//! ring is the finite field 𝔽_n.

use num_bigint::BigInt;
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Signed, Zero};

use crate::ring::Ring;
use crate::status::{RingError, RingResult, Truth};

/// ℤ/nℤ with canonical residues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModularRing {
    modulus: BigInt,
}

impl ModularRing {
    /// Build the ring ℤ/nℤ. The modulus must be at least 2.
    pub fn new(modulus: BigInt) -> RingResult<Self> {
        if modulus < BigInt::from(2) {
            return Err(RingError::Domain);
        }
        Ok(ModularRing { modulus })
    }

    /// The modulus n.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// The canonical residue of an arbitrary integer.
    pub fn reduce(&self, a: BigInt) -> BigInt {
        let r = a % &self.modulus;
        if r.is_negative() {
            r + &self.modulus
        } else {
            r
        }
    }
}

impl Ring for ModularRing {
    type Elem = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn from_i64(&self, n: i64) -> BigInt {
        self.reduce(BigInt::from(n))
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(a + b)
    }

    fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(a - b)
    }

    fn neg(&self, a: &BigInt) -> BigInt {
        self.reduce(-a)
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(a * b)
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
        let ExtendedGcd { gcd, x, .. } = a.extended_gcd(&self.modulus);
        if gcd.is_one() {
            Ok(self.reduce(x))
        } else {
            Err(RingError::Domain)
        }
    }

    fn div(&self, a: &BigInt, b: &BigInt) -> RingResult<BigInt> {
        let binv = self.inv(b)?;
        Ok(self.mul(a, &binv))
    }
}
