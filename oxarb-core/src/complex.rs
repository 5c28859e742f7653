//! Complex numbers as rectangular pairs of real balls.
//!
//! A [`ComplexBall`] is a real ball for each of the real and imaginary
//! parts; the represented complex number lies in the axis-aligned box the
//! two balls span. All enclosure guarantees of [`RealBall`] carry over
//! componentwise. The multiplication entry points differ in how they round:
//! [`ComplexBall::mul`] accumulates each cross term from exact dyadic
//! products with one rounding per step, while [`ComplexBall::mul_naive`]
//! rounds all four real products independently. Both are sound; their
//! radii differ.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::float::{working_prec, Float, Round};
use crate::magnitude::{Magnitude, MAG_PRECISION};
use crate::real::RealBall;

/// A complex number enclosed by a real-part ball and an imaginary-part ball.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexBall {
    re: RealBall,
    im: RealBall,
}

impl ComplexBall {
    /// The exact zero.
    #[inline]
    pub fn zero() -> Self {
        ComplexBall {
            re: RealBall::zero(),
            im: RealBall::zero(),
        }
    }

    /// The exact one.
    #[inline]
    pub fn one() -> Self {
        ComplexBall {
            re: RealBall::one(),
            im: RealBall::zero(),
        }
    }

    /// The imaginary unit.
    #[inline]
    pub fn i() -> Self {
        ComplexBall {
            re: RealBall::zero(),
            im: RealBall::one(),
        }
    }

    /// Both components indeterminate.
    pub fn indeterminate() -> Self {
        ComplexBall {
            re: RealBall::indeterminate(),
            im: RealBall::indeterminate(),
        }
    }

    /// A real number viewed as a complex ball.
    pub fn from_real(re: RealBall) -> Self {
        ComplexBall {
            re,
            im: RealBall::zero(),
        }
    }

    /// Ball from explicit real and imaginary parts.
    pub fn from_parts(re: RealBall, im: RealBall) -> Self {
        ComplexBall { re, im }
    }

    /// Exact conversion from a machine integer.
    pub fn from_i64(n: i64) -> Self {
        Self::from_real(RealBall::from_i64(n))
    }

    /// Exact conversion from a big integer.
    pub fn from_bigint(n: &BigInt) -> Self {
        Self::from_real(RealBall::from_bigint(n))
    }

    /// The real part.
    #[inline]
    pub fn re(&self) -> &RealBall {
        &self.re
    }

    /// The imaginary part.
    #[inline]
    pub fn im(&self) -> &RealBall {
        &self.im
    }

    /// True for the exact zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// True for the exact one.
    pub fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }

    /// True when both radii are zero.
    pub fn is_exact(&self) -> bool {
        self.re.is_exact() && self.im.is_exact()
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when either component is indeterminate.
    pub fn is_indeterminate(&self) -> bool {
        self.re.is_indeterminate() || self.im.is_indeterminate()
    }

    /// True when the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// True when the box contains zero.
    pub fn contains_zero(&self) -> bool {
        self.re.contains_zero() && self.im.contains_zero()
    }

    /// True when every point of `rhs` lies in this box. Computed exactly.
    pub fn contains(&self, rhs: &Self) -> bool {
        self.re.contains(&rhs.re) && self.im.contains(&rhs.im)
    }

    /// True when the boxes share a point. Computed exactly.
    pub fn overlaps(&self, rhs: &Self) -> bool {
        self.re.overlaps(&rhs.re) && self.im.overlaps(&rhs.im)
    }

    /// True when the integer `n` lies in this box.
    pub fn contains_bigint(&self, n: &BigInt) -> bool {
        self.re.contains_bigint(n) && self.im.contains_zero()
    }

    /// True when the rational `q` lies in this box.
    pub fn contains_rational(&self, q: &BigRational) -> bool {
        self.re.contains_rational(q) && self.im.contains_zero()
    }

    /// Mantissa bits of the wider midpoint.
    pub fn bits(&self) -> u64 {
        self.re.bits().max(self.im.bits())
    }

    /// Negation (exact).
    pub fn neg(&self) -> Self {
        ComplexBall {
            re: self.re.neg(),
            im: self.im.neg(),
        }
    }

    /// Complex conjugate (exact).
    pub fn conj(&self) -> Self {
        ComplexBall {
            re: self.re.clone(),
            im: self.im.neg(),
        }
    }

    /// Exact scaling by `2^e`.
    pub fn mul_2exp(&self, e: i64) -> Self {
        ComplexBall {
            re: self.re.mul_2exp(e),
            im: self.im.mul_2exp(e),
        }
    }

    /// Componentwise addition.
    pub fn add(&self, rhs: &Self, prec: u32) -> Self {
        ComplexBall {
            re: self.re.add(&rhs.re, prec),
            im: self.im.add(&rhs.im, prec),
        }
    }

    /// Componentwise subtraction.
    pub fn sub(&self, rhs: &Self, prec: u32) -> Self {
        ComplexBall {
            re: self.re.sub(&rhs.re, prec),
            im: self.im.sub(&rhs.im, prec),
        }
    }

    /// Multiplication with zero-component short circuits and fused cross
    /// terms (`ac - bd`, `ad + bc`, each accumulated from exact products).
    pub fn mul(&self, rhs: &Self, prec: u32) -> Self {
        if self.im.is_zero() {
            return ComplexBall {
                re: self.re.mul(&rhs.re, prec),
                im: self.re.mul(&rhs.im, prec),
            };
        }
        if self.re.is_zero() {
            return ComplexBall {
                re: self.im.mul(&rhs.im, prec).neg(),
                im: self.im.mul(&rhs.re, prec),
            };
        }
        if rhs.im.is_zero() {
            return ComplexBall {
                re: self.re.mul(&rhs.re, prec),
                im: self.im.mul(&rhs.re, prec),
            };
        }
        if rhs.re.is_zero() {
            return ComplexBall {
                re: self.im.mul(&rhs.im, prec).neg(),
                im: self.re.mul(&rhs.im, prec),
            };
        }
        let mut re = RealBall::zero();
        re.addmul(&self.re, &rhs.re, prec);
        re.submul(&self.im, &rhs.im, prec);
        let mut im = RealBall::zero();
        im.addmul(&self.re, &rhs.im, prec);
        im.addmul(&self.im, &rhs.re, prec);
        ComplexBall { re, im }
    }

    /// Multiplication with four independently rounded real products. Kept
    /// public as a cross-check against [`ComplexBall::mul`]: enclosures
    /// must agree, radii need not.
    pub fn mul_naive(&self, rhs: &Self, prec: u32) -> Self {
        let ac = self.re.mul(&rhs.re, prec);
        let bd = self.im.mul(&rhs.im, prec);
        let ad = self.re.mul(&rhs.im, prec);
        let bc = self.im.mul(&rhs.re, prec);
        ComplexBall {
            re: ac.sub(&bd, prec),
            im: ad.add(&bc, prec),
        }
    }

    /// Multiplication by the imaginary unit, owned form (exact).
    pub fn mul_i(&self) -> Self {
        ComplexBall {
            re: self.im.neg(),
            im: self.re.clone(),
        }
    }

    /// Multiplication by the imaginary unit in place (exact). The swap must
    /// precede the negation for the self-aliased update to be correct.
    pub fn mul_i_mut(&mut self) {
        core::mem::swap(&mut self.re, &mut self.im);
        self.re = self.re.neg();
    }

    /// In-place fused multiply-add `self += x * y`, skipping the imaginary
    /// cross terms when an operand is real.
    pub fn addmul(&mut self, x: &Self, y: &Self, prec: u32) {
        if y.im.is_zero() {
            self.re.addmul(&x.re, &y.re, prec);
            self.im.addmul(&x.im, &y.re, prec);
            return;
        }
        if x.im.is_zero() {
            self.re.addmul(&x.re, &y.re, prec);
            self.im.addmul(&x.re, &y.im, prec);
            return;
        }
        self.re.addmul(&x.re, &y.re, prec);
        self.re.submul(&x.im, &y.im, prec);
        self.im.addmul(&x.re, &y.im, prec);
        self.im.addmul(&x.im, &y.re, prec);
    }

    /// In-place fused multiply-subtract `self -= x * y`.
    pub fn submul(&mut self, x: &Self, y: &Self, prec: u32) {
        if y.im.is_zero() {
            self.re.submul(&x.re, &y.re, prec);
            self.im.submul(&x.im, &y.re, prec);
            return;
        }
        if x.im.is_zero() {
            self.re.submul(&x.re, &y.re, prec);
            self.im.submul(&x.re, &y.im, prec);
            return;
        }
        self.re.submul(&x.re, &y.re, prec);
        self.re.addmul(&x.im, &y.im, prec);
        self.im.submul(&x.re, &y.im, prec);
        self.im.submul(&x.im, &y.re, prec);
    }

    /// Reciprocal via `conj(z) / |z|^2`; a squared modulus containing zero
    /// yields the indeterminate ball.
    pub fn inv(&self, prec: u32) -> Self {
        let wp = working_prec(prec, 8);
        let t = self
            .re
            .mul(&self.re, wp)
            .add(&self.im.mul(&self.im, wp), wp);
        if t.contains_zero() {
            return Self::indeterminate();
        }
        ComplexBall {
            re: self.re.div(&t, prec),
            im: self.im.neg().div(&t, prec),
        }
    }

    /// Division `self * conj(rhs) / |rhs|^2`.
    pub fn div(&self, rhs: &Self, prec: u32) -> Self {
        let wp = working_prec(prec, 8);
        let t = rhs.re.mul(&rhs.re, wp).add(&rhs.im.mul(&rhs.im, wp), wp);
        if t.contains_zero() {
            return Self::indeterminate();
        }
        let mut nre = RealBall::zero();
        nre.addmul(&self.re, &rhs.re, wp);
        nre.addmul(&self.im, &rhs.im, wp);
        let mut nim = RealBall::zero();
        nim.addmul(&self.im, &rhs.re, wp);
        nim.submul(&self.re, &rhs.im, wp);
        ComplexBall {
            re: nre.div(&t, prec),
            im: nim.div(&t, prec),
        }
    }

    /// Addition of a real ball (imaginary part untouched).
    pub fn add_real(&self, x: &RealBall, prec: u32) -> Self {
        ComplexBall {
            re: self.re.add(x, prec),
            im: self.im.clone(),
        }
    }

    /// Subtraction of a real ball.
    pub fn sub_real(&self, x: &RealBall, prec: u32) -> Self {
        ComplexBall {
            re: self.re.sub(x, prec),
            im: self.im.clone(),
        }
    }

    /// Componentwise multiplication by a real ball.
    pub fn mul_real(&self, x: &RealBall, prec: u32) -> Self {
        ComplexBall {
            re: self.re.mul(x, prec),
            im: self.im.mul(x, prec),
        }
    }

    /// Componentwise division by a real ball.
    pub fn div_real(&self, x: &RealBall, prec: u32) -> Self {
        ComplexBall {
            re: self.re.div(x, prec),
            im: self.im.div(x, prec),
        }
    }

    /// Addition of an exact machine integer.
    pub fn add_i64(&self, n: i64, prec: u32) -> Self {
        self.add_real(&RealBall::from_i64(n), prec)
    }

    /// Subtraction of an exact machine integer.
    pub fn sub_i64(&self, n: i64, prec: u32) -> Self {
        self.sub_real(&RealBall::from_i64(n), prec)
    }

    /// Multiplication by an exact machine integer.
    pub fn mul_i64(&self, n: i64, prec: u32) -> Self {
        self.mul_real(&RealBall::from_i64(n), prec)
    }

    /// Division by an exact machine integer.
    pub fn div_i64(&self, n: i64, prec: u32) -> Self {
        self.div_real(&RealBall::from_i64(n), prec)
    }

    /// Addition of an exact big integer.
    pub fn add_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.add_real(&RealBall::from_bigint(n), prec)
    }

    /// Subtraction of an exact big integer.
    pub fn sub_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.sub_real(&RealBall::from_bigint(n), prec)
    }

    /// Multiplication by an exact big integer.
    pub fn mul_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.mul_real(&RealBall::from_bigint(n), prec)
    }

    /// Division by an exact big integer.
    pub fn div_bigint(&self, n: &BigInt, prec: u32) -> Self {
        self.div_real(&RealBall::from_bigint(n), prec)
    }

    /// Re-round both midpoints, transferring errors into the radii.
    pub fn set_round(&self, prec: u32) -> Self {
        ComplexBall {
            re: self.re.set_round(prec),
            im: self.im.set_round(prec),
        }
    }

    /// Componentwise [`RealBall::trim`].
    pub fn trim(&self) -> Self {
        ComplexBall {
            re: self.re.trim(),
            im: self.im.trim(),
        }
    }

    /// Add `err` to both component radii.
    pub fn add_error(&mut self, err: &Magnitude) {
        self.re.add_error(err);
        self.im.add_error(err);
    }

    /// Modulus `sqrt(re^2 + im^2)` as a real ball.
    pub fn abs(&self, prec: u32) -> RealBall {
        self.re.hypot(&self.im, prec)
    }

    /// Upper bound for the modulus over the box, rounded up.
    pub fn abs_ubound(&self, prec: u32) -> Float {
        if self.im.is_zero() {
            return self.re.abs_ubound(prec);
        }
        if self.re.is_zero() {
            return self.im.abs_ubound(prec);
        }
        let a = self.re.abs_ubound(MAG_PRECISION);
        let b = self.im.abs_ubound(MAG_PRECISION);
        let s = a
            .mul(&a, MAG_PRECISION, Round::Up)
            .0
            .add(&b.mul(&b, MAG_PRECISION, Round::Up).0, MAG_PRECISION, Round::Up)
            .0;
        s.sqrt(prec, Round::Up).0
    }

    /// Lower bound for the modulus over the box, rounded down (zero when
    /// the box contains zero).
    pub fn abs_lbound(&self, prec: u32) -> Float {
        if self.im.is_zero() {
            return self.re.abs_lbound(prec);
        }
        if self.re.is_zero() {
            return self.im.abs_lbound(prec);
        }
        let a = self.re.abs_lbound(MAG_PRECISION);
        let b = self.im.abs_lbound(MAG_PRECISION);
        let s = a
            .mul(&a, MAG_PRECISION, Round::Down)
            .0
            .add(&b.mul(&b, MAG_PRECISION, Round::Down).0, MAG_PRECISION, Round::Down)
            .0;
        s.sqrt(prec, Round::Down).0
    }

    /// Crude upper bound for the box diagonal: `2 max(rad re, rad im)`
    /// dominates `sqrt(rad re^2 + rad im^2)`.
    pub fn rad_ubound(&self) -> Magnitude {
        self.re.rad().max(self.im.rad()).mul_2exp(1)
    }

    /// Enclosure of pi as a complex ball.
    pub fn const_pi(prec: u32) -> Self {
        Self::from_real(RealBall::const_pi(prec))
    }

    /// Complex exponential `e^a (cos b + i sin b)`.
    pub fn exp(&self, prec: u32) -> Self {
        let wp = working_prec(prec, 8);
        let ea = self.re.exp(wp);
        let (s, c) = self.im.sin_cos(wp);
        ComplexBall {
            re: ea.mul(&c, prec),
            im: ea.mul(&s, prec),
        }
    }

    /// Complex sine and cosine, sharing the real kernels.
    pub fn sin_cos(&self, prec: u32) -> (Self, Self) {
        let wp = working_prec(prec, 8);
        let (sa, ca) = self.re.sin_cos(wp);
        if self.im.is_zero() {
            return (
                Self::from_real(sa.set_round(prec)),
                Self::from_real(ca.set_round(prec)),
            );
        }
        let (shb, chb) = self.im.sinh_cosh(wp);
        let sin = ComplexBall {
            re: sa.mul(&chb, prec),
            im: ca.mul(&shb, prec),
        };
        let cos = ComplexBall {
            re: ca.mul(&chb, prec),
            im: sa.mul(&shb, prec).neg(),
        };
        (sin, cos)
    }

    /// Complex sine.
    pub fn sin(&self, prec: u32) -> Self {
        self.sin_cos(prec).0
    }

    /// Complex cosine.
    pub fn cos(&self, prec: u32) -> Self {
        self.sin_cos(prec).1
    }

    /// Complex tangent.
    pub fn tan(&self, prec: u32) -> Self {
        let wp = working_prec(prec, 8);
        let (s, c) = self.sin_cos(wp);
        s.div(&c, prec)
    }

    /// Integer power by binary exponentiation.
    pub fn pow_u64(&self, e: u64, prec: u32) -> Self {
        if e == 0 {
            return Self::one();
        }
        if e == 1 {
            return self.set_round(prec);
        }
        let wp = working_prec(prec, 68 - e.leading_zeros());
        let mut acc = self.clone();
        let mut bit = 1u64 << (62 - e.leading_zeros());
        while bit != 0 {
            acc = acc.mul(&acc, wp);
            if e & bit != 0 {
                acc = acc.mul(self, wp);
            }
            bit >>= 1;
        }
        acc.set_round(prec)
    }
}
