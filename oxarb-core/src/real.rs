//! Real numbers as rigorous midpoint-radius enclosures.
//!
//! A [`RealBall`] `[mid +/- rad]` asserts that the represented real number
//! lies within `rad` of `mid`. Arithmetic computes the midpoint rounded
//! toward zero at the caller's precision and grows the radius by the
//! propagated input radii plus one ulp whenever the midpoint was rounded,
//! so the enclosure property is preserved unconditionally:
//!
//! - a zero radius means the value is exactly the midpoint;
//! - an infinite radius means the value is unknown;
//! - a NaN midpoint is the indeterminate element, which every operation
//!   propagates and which contains everything.
//!
//! Domain violations (dividing by a ball containing zero, square roots of
//! possibly negative balls) yield indeterminate results instead of errors;
//! the generic ring layer above turns those into reportable statuses.
//!
//! Membership and comparison predicates (`contains`, `overlaps`,
//! `contains_rational`, ...) are evaluated in exact arithmetic and never
//! return a false positive.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::float::{Float, Round, PREC_EXACT};
use crate::magnitude::{Magnitude, MAG_PRECISION};

/// A real number represented as a midpoint with an error radius.
///
/// Structural equality (`==`) is equality of representations, not of the
/// underlying number sets; use [`RealBall::contains`] and
/// [`RealBall::overlaps`] for semantic questions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealBall {
    mid: Float,
    rad: Magnitude,
}

impl RealBall {
    /// The exact zero.
    #[inline]
    pub fn zero() -> Self {
        RealBall {
            mid: Float::zero(),
            rad: Magnitude::zero(),
        }
    }

    /// The exact one.
    #[inline]
    pub fn one() -> Self {
        RealBall {
            mid: Float::one(),
            rad: Magnitude::zero(),
        }
    }

    /// The indeterminate element: it contains everything and poisons every
    /// computation it enters.
    pub fn indeterminate() -> Self {
        RealBall {
            mid: Float::nan(),
            rad: Magnitude::inf(),
        }
    }

    /// Exact conversion from a machine integer.
    pub fn from_i64(n: i64) -> Self {
        RealBall {
            mid: Float::from_i64(n),
            rad: Magnitude::zero(),
        }
    }

    /// Exact conversion from a big integer.
    pub fn from_bigint(n: &BigInt) -> Self {
        RealBall {
            mid: Float::from_bigint(n),
            rad: Magnitude::zero(),
        }
    }

    /// Exact conversion from a float.
    pub fn from_float(x: Float) -> Self {
        if x.is_nan() {
            return Self::indeterminate();
        }
        RealBall {
            mid: x,
            rad: Magnitude::zero(),
        }
    }

    /// Exact conversion from a double (every finite `f64` is dyadic).
    pub fn from_f64(x: f64) -> Self {
        Self::from_float(Float::from_f64(x))
    }

    /// Enclosure of a rational number at `prec` bits (exact whenever the
    /// denominator is a power of two).
    pub fn from_rational(q: &BigRational, prec: u32) -> Self {
        let num = Float::from_bigint(q.numer());
        let den = Float::from_bigint(q.denom());
        let (mid, inexact) = num.div(&den, prec, Round::Down);
        let rad = if inexact {
            Magnitude::ulp_of(&mid, prec)
        } else {
            Magnitude::zero()
        };
        RealBall { mid, rad }
    }

    /// Ball with the given midpoint and radius.
    pub fn from_mid_rad(mid: Float, rad: Magnitude) -> Self {
        if mid.is_nan() {
            return Self::indeterminate();
        }
        RealBall { mid, rad }
    }

    /// Ball covering the interval `[lo, hi]` (endpoints may be infinite).
    pub fn from_interval(lo: &Float, hi: &Float, prec: u32) -> Self {
        if lo.is_nan() || hi.is_nan() {
            return Self::indeterminate();
        }
        debug_assert!(lo.cmp_value(hi) != Some(Ordering::Greater));
        let (mid, _) = lo.add(hi, prec, Round::Down);
        let mid = mid.mul_2exp(-1);
        if mid.is_nan() {
            // opposite infinities: the whole line
            return RealBall {
                mid: Float::zero(),
                rad: Magnitude::inf(),
            };
        }
        let up = Magnitude::from_float(&hi.sub(&mid, MAG_PRECISION, Round::Ceil).0);
        let down = Magnitude::from_float(&mid.sub(lo, MAG_PRECISION, Round::Ceil).0);
        RealBall {
            mid,
            rad: up.max(&down),
        }
    }

    /// The midpoint.
    #[inline]
    pub fn mid(&self) -> &Float {
        &self.mid
    }

    /// The radius.
    #[inline]
    pub fn rad(&self) -> &Magnitude {
        &self.rad
    }

    /// True for the exact zero.
    pub fn is_zero(&self) -> bool {
        self.mid.is_zero() && self.rad.is_zero()
    }

    /// True for the exact one.
    pub fn is_one(&self) -> bool {
        self.mid.is_one() && self.rad.is_zero()
    }

    /// True when the radius is zero.
    pub fn is_exact(&self) -> bool {
        self.rad.is_zero()
    }

    /// True when both midpoint and radius are finite.
    pub fn is_finite(&self) -> bool {
        self.mid.is_finite() && self.rad.is_finite()
    }

    /// True for the indeterminate element.
    pub fn is_indeterminate(&self) -> bool {
        self.mid.is_nan()
    }

    /// True when the ball contains zero (always true for indeterminate).
    pub fn contains_zero(&self) -> bool {
        match self.mid.cmp_abs(self.rad.as_float()) {
            None => true,
            Some(ord) => ord != Ordering::Greater,
        }
    }

    /// True when every point of the ball is nonzero.
    pub fn is_nonzero(&self) -> bool {
        !self.contains_zero()
    }

    /// True when every point of the ball is strictly positive.
    pub fn is_positive(&self) -> bool {
        matches!(
            self.mid.cmp_value(self.rad.as_float()),
            Some(Ordering::Greater)
        )
    }

    /// True when every point of the ball is nonnegative.
    pub fn is_nonnegative(&self) -> bool {
        matches!(
            self.mid.cmp_value(self.rad.as_float()),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// True when every point of the ball is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.mid.is_negative()
            && matches!(
                self.mid.cmp_abs(self.rad.as_float()),
                Some(Ordering::Greater)
            )
    }

    /// True when the two balls have at least one point in common.
    /// Computed exactly.
    pub fn overlaps(&self, rhs: &Self) -> bool {
        if self.mid.is_nan() || rhs.mid.is_nan() {
            return true;
        }
        if self.mid.is_inf() || rhs.mid.is_inf() {
            if self.mid == rhs.mid {
                return true;
            }
            return self.rad.is_inf() || rhs.rad.is_inf();
        }
        let d = self.mid.sub(&rhs.mid, PREC_EXACT, Round::Down).0.abs();
        let r = self
            .rad
            .as_float()
            .add(rhs.rad.as_float(), PREC_EXACT, Round::Down)
            .0;
        d.cmp_value(&r) != Some(Ordering::Greater)
    }

    /// True when `rhs` is entirely inside this ball. Computed exactly.
    pub fn contains(&self, rhs: &Self) -> bool {
        if self.mid.is_nan() {
            return true;
        }
        if rhs.mid.is_nan() {
            return false;
        }
        if self.rad.is_inf() {
            return true;
        }
        if self.mid.is_inf() {
            // a finite-radius infinite midpoint is the point infinity
            return self.mid == rhs.mid;
        }
        let d = rhs.mid.sub(&self.mid, PREC_EXACT, Round::Down).0.abs();
        let t = d.add(rhs.rad.as_float(), PREC_EXACT, Round::Down).0;
        t.cmp_value(self.rad.as_float()) != Some(Ordering::Greater)
    }

    /// True when the exact value `x` lies in this ball. Computed exactly.
    pub fn contains_float(&self, x: &Float) -> bool {
        if self.mid.is_nan() {
            return true;
        }
        if x.is_nan() {
            return false;
        }
        if self.rad.is_inf() {
            return true;
        }
        if x.is_inf() {
            return self.mid == *x;
        }
        if self.mid.is_inf() {
            return false;
        }
        let d = x.sub(&self.mid, PREC_EXACT, Round::Down).0.abs();
        d.cmp_value(self.rad.as_float()) != Some(Ordering::Greater)
    }

    /// True when the integer `n` lies in this ball. Computed exactly.
    pub fn contains_bigint(&self, n: &BigInt) -> bool {
        self.contains_float(&Float::from_bigint(n))
    }

    /// True when the rational `q` lies in this ball. Computed exactly
    /// (scaled through the denominator, so no rounding occurs).
    pub fn contains_rational(&self, q: &BigRational) -> bool {
        if self.mid.is_nan() {
            return true;
        }
        if self.rad.is_inf() {
            return true;
        }
        if self.mid.is_inf() {
            return false;
        }
        // |q - m| <= r  <=>  |num - den*m| <= den*r   (den > 0)
        let den = Float::from_bigint(q.denom());
        let num = Float::from_bigint(q.numer());
        let dm = den.mul(&self.mid, PREC_EXACT, Round::Down).0;
        let d = num.sub(&dm, PREC_EXACT, Round::Down).0.abs();
        let rr = den.mul(self.rad.as_float(), PREC_EXACT, Round::Down).0;
        d.cmp_value(&rr) != Some(Ordering::Greater)
    }

    /// Negation (exact).
    pub fn neg(&self) -> Self {
        RealBall {
            mid: self.mid.neg(),
            rad: self.rad.clone(),
        }
    }

    /// Absolute value: `|[m +/- r]| = [|m| +/- r]`, which encloses `|x|`
    /// for every `x` in the input.
    pub fn abs(&self) -> Self {
        RealBall {
            mid: self.mid.abs(),
            rad: self.rad.clone(),
        }
    }

    /// Exact scaling by `2^e`.
    pub fn mul_2exp(&self, e: i64) -> Self {
        RealBall {
            mid: self.mid.mul_2exp(e),
            rad: self.rad.mul_2exp(e),
        }
    }

    fn finish(mid: Float, inexact: bool, rad: Magnitude, prec: u32) -> Self {
        if mid.is_nan() {
            return Self::indeterminate();
        }
        let rad = if inexact {
            rad.add(&Magnitude::ulp_of(&mid, prec))
        } else {
            rad
        };
        RealBall { mid, rad }
    }

    /// Addition at `prec` bits.
    pub fn add(&self, rhs: &Self, prec: u32) -> Self {
        let (mid, inexact) = self.mid.add(&rhs.mid, prec, Round::Down);
        Self::finish(mid, inexact, self.rad.add(&rhs.rad), prec)
    }

    /// Subtraction at `prec` bits.
    pub fn sub(&self, rhs: &Self, prec: u32) -> Self {
        let (mid, inexact) = self.mid.sub(&rhs.mid, prec, Round::Down);
        Self::finish(mid, inexact, self.rad.add(&rhs.rad), prec)
    }

    /// Multiplication at `prec` bits.
    ///
    /// The radius grows by `|mx|*ry + |my|*rx + rx*ry`, each term rounded
    /// up, plus one ulp when the midpoint product was rounded.
    pub fn mul(&self, rhs: &Self, prec: u32) -> Self {
        let (mid, inexact) = self.mid.mul(&rhs.mid, prec, Round::Down);
        let rad = Self::mul_rad(&self.mid, &self.rad, &rhs.mid, &rhs.rad);
        Self::finish(mid, inexact, rad, prec)
    }

    fn mul_rad(xm: &Float, xr: &Magnitude, ym: &Float, yr: &Magnitude) -> Magnitude {
        let mx = Magnitude::from_float(xm);
        let my = Magnitude::from_float(ym);
        mx.mul(yr).add(&my.mul(xr)).add(&xr.mul(yr))
    }

    /// In-place fused multiply-add: `self += x * y`, with the product formed
    /// exactly and folded into the midpoint with a single rounding.
    pub fn addmul(&mut self, x: &Self, y: &Self, prec: u32) {
        let p = x.mid.mul(&y.mid, PREC_EXACT, Round::Down).0;
        let (mid, inexact) = self.mid.add(&p, prec, Round::Down);
        let rad = self.rad.add(&Self::mul_rad(&x.mid, &x.rad, &y.mid, &y.rad));
        *self = Self::finish(mid, inexact, rad, prec);
    }

    /// In-place fused multiply-subtract: `self -= x * y`.
    pub fn submul(&mut self, x: &Self, y: &Self, prec: u32) {
        let p = x.mid.mul(&y.mid, PREC_EXACT, Round::Down).0;
        let (mid, inexact) = self.mid.sub(&p, prec, Round::Down);
        let rad = self.rad.add(&Self::mul_rad(&x.mid, &x.rad, &y.mid, &y.rad));
        *self = Self::finish(mid, inexact, rad, prec);
    }

    /// Division at `prec` bits.
    ///
    /// A divisor containing zero (including the exact zero) yields the
    /// indeterminate ball; there is no error channel at this layer.
    pub fn div(&self, rhs: &Self, prec: u32) -> Self {
        if self.mid.is_nan() || rhs.mid.is_nan() {
            return Self::indeterminate();
        }
        if rhs.contains_zero() {
            return Self::indeterminate();
        }
        let (mid, inexact) = self.mid.div(&rhs.mid, prec, Round::Down);

        // |x/y - mx/my| <= (rx*|my| + ry*|mx|) / (|my| * (|my| - ry))
        let ym_abs = rhs.mid.abs();
        let low = ym_abs
            .sub(rhs.rad.as_float(), MAG_PRECISION + 8, Round::Floor)
            .0;
        let den = low.mul(&ym_abs, MAG_PRECISION + 8, Round::Down).0;
        let num = self
            .rad
            .mul(&Magnitude::from_float(&ym_abs))
            .add(&rhs.rad.mul(&Magnitude::from_float(&self.mid)));
        let rad_f = num.as_float().div(&den, MAG_PRECISION, Round::Up).0;
        Self::finish(mid, inexact, Magnitude::from_float(&rad_f), prec)
    }

    /// Reciprocal at `prec` bits.
    pub fn inv(&self, prec: u32) -> Self {
        Self::one().div(self, prec)
    }

    /// Addition of an exact machine integer.
    pub fn add_i64(&self, n: i64, prec: u32) -> Self {
        self.add(&Self::from_i64(n), prec)
    }

    /// Subtraction of an exact machine integer.
    pub fn sub_i64(&self, n: i64, prec: u32) -> Self {
        self.sub(&Self::from_i64(n), prec)
    }

    /// Multiplication by an exact machine integer.
    pub fn mul_i64(&self, n: i64, prec: u32) -> Self {
        self.mul(&Self::from_i64(n), prec)
    }

    /// Division by an exact machine integer.
    pub fn div_i64(&self, n: i64, prec: u32) -> Self {
        self.div(&Self::from_i64(n), prec)
    }

    /// Addition of an exact big integer.
    pub fn add_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.add(&Self::from_bigint(n), prec)
    }

    /// Subtraction of an exact big integer.
    pub fn sub_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.sub(&Self::from_bigint(n), prec)
    }

    /// Multiplication by an exact big integer.
    pub fn mul_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.mul(&Self::from_bigint(n), prec)
    }

    /// Division by an exact big integer.
    pub fn div_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.div(&Self::from_bigint(n), prec)
    }

    /// Re-round the midpoint at `prec` bits, transferring the rounding
    /// error into the radius.
    pub fn set_round(&self, prec: u32) -> Self {
        let (mid, inexact) = self.mid.round(prec, Round::Down);
        Self::finish(mid, inexact, self.rad.clone(), prec)
    }

    /// Drop midpoint bits that carry no information next to the radius.
    ///
    /// The result contains the input and keeps roughly
    /// `log2(mid/rad) + MAG_PRECISION` significant midpoint bits.
    pub fn trim(&self) -> Self {
        if self.rad.is_zero() || self.rad.is_inf() || self.mid.is_special() {
            return self.clone();
        }
        let (Some(mid_top), Some(rad_top)) = (
            self.mid.exponent_top(),
            self.rad.as_float().exponent_top(),
        ) else {
            return self.clone();
        };
        let keep = (mid_top - rad_top + (MAG_PRECISION as i64 + 2))
            .clamp(BigInt::from(2), BigInt::from(u32::MAX));
        if keep >= BigInt::from(self.mid.bits()) {
            return self.clone();
        }
        let keep = keep.to_u32().expect("clamped precision fits in u32");
        self.set_round(keep)
    }

    /// Add `err` to the radius.
    pub fn add_error(&mut self, err: &Magnitude) {
        self.rad = self.rad.add(err);
    }

    /// Add `|err|` to the radius.
    pub fn add_error_float(&mut self, err: &Float) {
        self.rad = self.rad.add(&Magnitude::from_float(err));
    }

    /// Mantissa bits of the midpoint.
    pub fn bits(&self) -> u64 {
        self.mid.bits()
    }

    /// Upper bound for `|x|` over the ball, rounded up at `prec` bits.
    pub fn abs_ubound(&self, prec: u32) -> Float {
        if self.mid.is_nan() {
            return Float::pos_inf();
        }
        self.mid
            .abs()
            .add(self.rad.as_float(), prec, Round::Up)
            .0
    }

    /// Lower bound for `|x|` over the ball, rounded down at `prec` bits
    /// (zero when the ball contains zero).
    pub fn abs_lbound(&self, prec: u32) -> Float {
        if self.contains_zero() {
            return Float::zero();
        }
        self.mid
            .abs()
            .sub(self.rad.as_float(), prec, Round::Down)
            .0
    }

    /// Lower endpoint `mid - rad`, rounded toward negative infinity.
    pub fn lower_bound_float(&self, prec: u32) -> Float {
        self.mid.sub(self.rad.as_float(), prec, Round::Floor).0
    }

    /// Upper endpoint `mid + rad`, rounded toward positive infinity.
    pub fn upper_bound_float(&self, prec: u32) -> Float {
        self.mid.add(self.rad.as_float(), prec, Round::Ceil).0
    }
}
