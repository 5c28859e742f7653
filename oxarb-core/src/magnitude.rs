//! Non-negative upper bounds at fixed low precision.
//!
//! A [`Magnitude`] is a one-sided bound: operations round **up** so results
//! stay valid upper bounds, and the mantissa is limited to
//! [`MAG_PRECISION`] bits so radius bookkeeping stays cheap next to the
//! midpoints it protects. NaN inputs are absorbed into infinity, the
//! conservative bound. A few lower-bound helpers round down instead; their
//! names say so.

use core::cmp::Ordering;

use crate::float::{Float, Round};

/// Mantissa bits carried by a [`Magnitude`].
pub const MAG_PRECISION: u32 = 30;

/// A non-negative upper bound: zero, a positive finite value, or infinity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Magnitude(Float);

impl Magnitude {
    /// The zero bound (only the exact zero satisfies it).
    #[inline]
    pub fn zero() -> Self {
        Magnitude(Float::zero())
    }

    /// The infinite bound (satisfied by everything).
    #[inline]
    pub fn inf() -> Self {
        Magnitude(Float::pos_inf())
    }

    /// The bound `1`.
    #[inline]
    pub fn one() -> Self {
        Magnitude(Float::one())
    }

    /// The exact power of two `2^e`.
    pub fn pow2(e: i64) -> Self {
        Magnitude(Float::pow2(e))
    }

    /// Upper bound for a machine integer.
    pub fn from_u64(n: u64) -> Self {
        if n == 0 {
            return Magnitude::zero();
        }
        let f = Float::from_bigint(&num_bigint::BigInt::from(n));
        Magnitude(f.round(MAG_PRECISION, Round::Up).0)
    }

    /// Upper bound for `|x|`, rounding up. NaN becomes infinity.
    pub fn from_float(x: &Float) -> Self {
        if x.is_nan() {
            return Magnitude::inf();
        }
        if x.is_zero() {
            return Magnitude::zero();
        }
        Magnitude(x.abs().round(MAG_PRECISION, Round::Up).0)
    }

    /// Lower bound for `|x|`, rounding down. NaN becomes zero (the only
    /// universally valid lower bound).
    pub fn from_float_lower(x: &Float) -> Self {
        if x.is_nan() {
            return Magnitude::zero();
        }
        if x.is_zero() {
            return Magnitude::zero();
        }
        Magnitude(x.abs().round(MAG_PRECISION, Round::Down).0)
    }

    /// The bound as a float (exact).
    #[inline]
    pub fn as_float(&self) -> &Float {
        &self.0
    }

    /// True for the zero bound.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True for the infinite bound.
    #[inline]
    pub fn is_inf(&self) -> bool {
        self.0.is_inf()
    }

    /// True when the bound is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Upper bound for the sum.
    pub fn add(&self, rhs: &Self) -> Self {
        Magnitude(self.0.add(&rhs.0, MAG_PRECISION, Round::Up).0)
    }

    /// Upper bound for the product. `0 * inf` is zero: a value bounded by
    /// zero is zero, whatever the other factor allows.
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Magnitude::zero();
        }
        if self.is_inf() || rhs.is_inf() {
            return Magnitude::inf();
        }
        Magnitude(self.0.mul(&rhs.0, MAG_PRECISION, Round::Up).0)
    }

    /// Upper bound for the quotient by an exact positive integer.
    pub fn div_u64(&self, n: u64) -> Self {
        debug_assert!(n > 0);
        if self.is_zero() || self.is_inf() {
            return self.clone();
        }
        let d = Float::from_bigint(&num_bigint::BigInt::from(n));
        Magnitude(self.0.div(&d, MAG_PRECISION, Round::Up).0)
    }

    /// Exact scaling by `2^e`.
    pub fn mul_2exp(&self, e: i64) -> Self {
        Magnitude(self.0.mul_2exp(e))
    }

    /// Upper bound for the power; `x^0` is one.
    pub fn pow_u64(&self, mut e: u64) -> Self {
        let mut result = Magnitude::one();
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Lower bound for `max(self - rhs, 0)`, rounding down.
    pub fn sub_lower(&self, rhs: &Self) -> Self {
        if rhs.is_inf() || self.is_zero() {
            return Magnitude::zero();
        }
        if self.is_inf() {
            return Magnitude::inf();
        }
        let d = self.0.sub(&rhs.0, MAG_PRECISION, Round::Down).0;
        if d.sgn() <= 0 {
            Magnitude::zero()
        } else {
            Magnitude(d)
        }
    }

    /// The larger of the two bounds.
    pub fn max(&self, rhs: &Self) -> Self {
        if self.cmp(rhs) == Ordering::Less {
            rhs.clone()
        } else {
            self.clone()
        }
    }

    /// Total order on bounds (no NaN by construction).
    pub fn cmp(&self, rhs: &Self) -> Ordering {
        self.0.cmp_value(&rhs.0).unwrap_or(Ordering::Equal)
    }

    /// Upper bound on the rounding error of a `prec`-bit result with value
    /// `x`: one unit in the last place.
    pub fn ulp_of(x: &Float, prec: u32) -> Self {
        Magnitude::from_float(&x.ulp(prec))
    }
}
