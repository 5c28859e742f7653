//! Elementary functions on real balls.
//!
//! Every routine returns a rigorous enclosure: a truncated series is always
//! paired with an explicit tail bound added to the radius, and input radii
//! are propagated through a derivative bound or by monotone endpoint
//! evaluation. Domain violations (square roots of possibly negative balls,
//! trigonometry at infinity) produce indeterminate results; this layer never
//! errors.
//!
//! ## Algorithms
//!
//! - `const_pi`: Machin's formula `pi/4 = 4 atan(1/5) - atan(1/239)` summed
//!   in scaled integer arithmetic; the radius covers both the alternating
//!   truncation and one floor error per term.
//! - `exp`: argument halving to `|r| <= 2^-8`, Taylor series with a
//!   geometric tail bound, then repeated squaring. Wide balls use monotone
//!   endpoint evaluation instead of the derivative bound.
//! - `sin_cos`: halving to `|y| <= 1/8`, alternating series for both
//!   kernels, then the double-angle recurrence `sin 2t = 2 sin t cos t`,
//!   `cos 2t = 1 - 2 sin^2 t`. There is no 2*pi reduction: arguments with
//!   more than 40 magnitude bits collapse to the trivial enclosure
//!   `[0 +/- 1]`. Input radii enter through the Lipschitz bound
//!   `|sin(a) - sin(b)| <= |a - b|`.
//! - `sqrt`/`sqrtpos`: monotone endpoint square roots with outward-directed
//!   float rounding.
//!
//! ## References
//!
//! - Brent & Zimmermann: "Modern Computer Arithmetic" (2010), ch. 4
//! - Muller: "Elementary Functions" (2016)

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use crate::float::{working_prec as working, Float, Round};
use crate::magnitude::{Magnitude, MAG_PRECISION};
use crate::real::RealBall;

/// The trivial enclosure `[0 +/- 1]` of any sine or cosine value.
fn unit_ball() -> RealBall {
    RealBall::from_mid_rad(Float::zero(), Magnitude::one())
}

/// Replace a blown-up sine/cosine enclosure by `[0 +/- 1]`. Only valid for
/// quantities whose true value lies in `[-1, 1]`.
fn clamp_unit(z: RealBall) -> RealBall {
    if !z.is_finite() || z.rad().cmp(&Magnitude::one()) == Ordering::Greater {
        unit_ball()
    } else {
        z
    }
}

/// Alternating series for `2^w * atan(1/q)` in floor arithmetic.
///
/// Returns the scaled sum and the number of terms; each term carries at
/// most one unit of floor error and the truncation error is below one unit,
/// so the total scaled error is at most `terms + 2`.
fn atan_inv_scaled(q: u32, w: u64) -> (BigInt, u64) {
    let q2 = BigUint::from(q) * BigUint::from(q);
    let mut t = (BigUint::one() << w) / BigUint::from(q);
    let mut sum = BigInt::zero();
    let mut k = 0u64;
    while !t.is_zero() {
        let term = &t / BigUint::from(2 * k + 1);
        if k % 2 == 0 {
            sum += BigInt::from(term);
        } else {
            sum -= BigInt::from(term);
        }
        t /= &q2;
        k += 1;
    }
    (sum, k)
}

/// Point exponential with guards for special and extreme arguments.
fn exp_float(x: &Float, prec: u32) -> RealBall {
    if x.is_nan() {
        return RealBall::indeterminate();
    }
    if x.is_pos_inf() {
        return RealBall::from_float(Float::pos_inf());
    }
    if x.is_neg_inf() {
        return RealBall::zero();
    }
    if x.is_zero() {
        return RealBall::one();
    }
    let top = x
        .exponent_top()
        .expect("finite nonzero value has a top exponent");
    if top > BigInt::from(62) {
        // |x| >= 2^62: e^x over- or underflows any reasonable working
        // window; fall back to a one-sided enclosure
        return if x.is_negative() {
            RealBall::from_mid_rad(Float::pow2(-61), Magnitude::pow2(-61))
        } else {
            RealBall::from_mid_rad(Float::pos_inf(), Magnitude::inf())
        };
    }
    let top = top.to_i64().expect("top exponent fits after the range guard");

    // halve until |r| <= 2^-8, square back afterwards
    let k = (top + 8).max(0) as u32;
    let w = working(prec, 2 * k + 16);
    if k > 0 {
        trace!(halvings = k, w, "exp argument reduction");
    }
    let r = RealBall::from_float(x.mul_2exp(-(k as i64)));

    let mut sum = RealBall::one();
    let mut term = RealBall::one();
    let mut j = 1i64;
    loop {
        term = term.mul(&r, w).div_i64(j, w);
        sum = sum.add(&term, w);
        let ub = Magnitude::from_float(&term.abs_ubound(MAG_PRECISION));
        if ub.cmp(&Magnitude::pow2(-(w as i64) - 4)) == Ordering::Less {
            // remaining tail: |t| * 2^-8 / (1 - 2^-8) < |t| * 2^-7
            sum.add_error(&ub.mul_2exp(-6));
            break;
        }
        j += 1;
    }

    for _ in 0..k {
        sum = sum.mul(&sum, w);
    }
    sum.set_round(prec)
}

/// Point sine and cosine with halving and double-angle reconstruction.
fn sin_cos_float(x: &Float, prec: u32) -> (RealBall, RealBall) {
    if x.is_nan() || x.is_inf() {
        return (RealBall::indeterminate(), RealBall::indeterminate());
    }
    if x.is_zero() {
        return (RealBall::zero(), RealBall::one());
    }
    let top = x
        .exponent_top()
        .expect("finite nonzero value has a top exponent");
    if top > BigInt::from(40) {
        return (unit_ball(), unit_ball());
    }
    let top = top.to_i64().expect("top exponent fits after the range guard");

    let k = (top + 3).max(0) as u32;
    let w = working(prec, 2 * k + 16);
    if k > 0 {
        trace!(halvings = k, w, "sin_cos argument halving");
    }
    let y = RealBall::from_float(x.mul_2exp(-(k as i64)));
    let y2 = y.mul(&y, w);
    let tail_stop = Magnitude::pow2(-(w as i64) - 4);

    // sin: y - y^3/3! + y^5/5! - ...
    let mut s = y.clone();
    let mut term = y;
    let mut j = 1i64;
    loop {
        term = term.mul(&y2, w).div_i64((j + 1) * (j + 2), w).neg();
        j += 2;
        s = s.add(&term, w);
        let ub = Magnitude::from_float(&term.abs_ubound(MAG_PRECISION));
        if ub.cmp(&tail_stop) == Ordering::Less {
            // |y^2| <= 1/64, so the tail is below the last term
            s.add_error(&ub);
            break;
        }
    }

    // cos: 1 - y^2/2! + y^4/4! - ...
    let mut c = RealBall::one();
    let mut term = RealBall::one();
    let mut j = 0i64;
    loop {
        term = term.mul(&y2, w).div_i64((j + 1) * (j + 2), w).neg();
        j += 2;
        c = c.add(&term, w);
        let ub = Magnitude::from_float(&term.abs_ubound(MAG_PRECISION));
        if ub.cmp(&tail_stop) == Ordering::Less {
            c.add_error(&ub);
            break;
        }
    }

    for _ in 0..k {
        let s2 = s.mul(&c, w).mul_2exp(1);
        let c2 = RealBall::one().sub(&s.mul(&s, w).mul_2exp(1), w);
        s = s2;
        c = c2;
    }
    (clamp_unit(s.set_round(prec)), clamp_unit(c.set_round(prec)))
}

fn sqrt_interval(lo: &Float, hi: &Float, prec: u32, wp: u32) -> RealBall {
    let slo = lo.sqrt(wp, Round::Floor).0;
    let shi = hi.sqrt(wp, Round::Ceil).0;
    RealBall::from_interval(&slo, &shi, prec)
}

impl RealBall {
    /// Enclosure of pi.
    pub fn const_pi(prec: u32) -> Self {
        let w = prec as u64 + 32;
        let (a5, k5) = atan_inv_scaled(5, w);
        let (a239, _) = atan_inv_scaled(239, w);
        let scaled = a5 * 16 - a239 * 4;
        let approx = Float::from_bigint(&scaled).mul_2exp(-(w as i64));
        let (mid, inexact) = approx.round(prec, Round::Down);
        // 16 (k5 + 2) + 4 (k239 + 2) <= 20 (k5 + 2) scaled error units
        let mut rad = Magnitude::from_u64(20 * (k5 + 2)).mul_2exp(-(w as i64));
        if inexact {
            rad = rad.add(&Magnitude::ulp_of(&mid, prec));
        }
        RealBall::from_mid_rad(mid, rad)
    }

    /// Exponential function.
    pub fn exp(&self, prec: u32) -> Self {
        if self.mid().is_nan() {
            return Self::indeterminate();
        }
        let wp = working(prec, 8);
        if self.rad().cmp(&Magnitude::one()) != Ordering::Greater {
            let mut z = exp_float(self.mid(), wp);
            if !self.rad().is_zero() {
                // |e^(m+d) - e^m| <= e^m (e^r - 1) <= e^m (r + r^2), r <= 1
                let growth = self.rad().add(&self.rad().mul(self.rad()));
                let scale = Magnitude::from_float(&z.abs_ubound(MAG_PRECISION));
                z.add_error(&scale.mul(&growth));
            }
            z.set_round(prec)
        } else {
            // exp is increasing: the image of a wide ball is the image of
            // its endpoints
            let lo = exp_float(&self.lower_bound_float(wp), wp);
            let hi = exp_float(&self.upper_bound_float(wp), wp);
            RealBall::from_interval(
                &lo.lower_bound_float(wp),
                &hi.upper_bound_float(wp),
                prec,
            )
        }
    }

    /// Sine and cosine, sharing the argument reduction.
    pub fn sin_cos(&self, prec: u32) -> (Self, Self) {
        if self.mid().is_nan() {
            return (Self::indeterminate(), Self::indeterminate());
        }
        let (mut s, mut c) = sin_cos_float(self.mid(), prec);
        if !self.rad().is_zero() {
            s.add_error(self.rad());
            c.add_error(self.rad());
            s = clamp_unit(s);
            c = clamp_unit(c);
        }
        (s, c)
    }

    /// Sine.
    pub fn sin(&self, prec: u32) -> Self {
        self.sin_cos(prec).0
    }

    /// Cosine.
    pub fn cos(&self, prec: u32) -> Self {
        self.sin_cos(prec).1
    }

    /// Tangent (indeterminate when the cosine enclosure contains zero).
    pub fn tan(&self, prec: u32) -> Self {
        let wp = working(prec, 8);
        let (s, c) = self.sin_cos(wp);
        s.div(&c, prec)
    }

    /// Hyperbolic sine and cosine from two exponentials.
    pub fn sinh_cosh(&self, prec: u32) -> (Self, Self) {
        let wp = working(prec, 8);
        let e = self.exp(wp);
        let en = self.neg().exp(wp);
        let sh = e.sub(&en, wp).mul_2exp(-1).set_round(prec);
        let ch = e.add(&en, wp).mul_2exp(-1).set_round(prec);
        (sh, ch)
    }

    /// Hyperbolic sine.
    pub fn sinh(&self, prec: u32) -> Self {
        self.sinh_cosh(prec).0
    }

    /// Hyperbolic cosine.
    pub fn cosh(&self, prec: u32) -> Self {
        self.sinh_cosh(prec).1
    }

    /// Square root; indeterminate unless the ball is provably nonnegative.
    pub fn sqrt(&self, prec: u32) -> Self {
        if self.mid().is_nan() || !self.is_nonnegative() {
            return Self::indeterminate();
        }
        let wp = working(prec, 8);
        let lo = self.lower_bound_float(wp);
        let hi = self.upper_bound_float(wp);
        sqrt_interval(&lo, &hi, prec, wp)
    }

    /// Square root of the nonnegative part: negative points of the ball are
    /// clamped to zero. Intended for provably-nonnegative quantities (sums
    /// of squares) whose enclosures dip below zero by rounding.
    pub fn sqrtpos(&self, prec: u32) -> Self {
        if self.mid().is_nan() {
            return Self::indeterminate();
        }
        let wp = working(prec, 8);
        let hi = self.upper_bound_float(wp);
        if hi.sgn() < 0 {
            return Self::zero();
        }
        let lo = self.lower_bound_float(wp);
        let lo = if lo.sgn() < 0 { Float::zero() } else { lo };
        sqrt_interval(&lo, &hi, prec, wp)
    }

    /// `sqrt(self^2 + rhs^2)` with exact shortcuts when either side is
    /// exactly zero.
    pub fn hypot(&self, rhs: &Self, prec: u32) -> Self {
        if self.mid().is_nan() || rhs.mid().is_nan() {
            return Self::indeterminate();
        }
        if self.is_zero() {
            return rhs.abs().set_round(prec);
        }
        if rhs.is_zero() {
            return self.abs().set_round(prec);
        }
        let wp = working(prec, 8);
        let s = self.mul(self, wp).add(&rhs.mul(rhs, wp), wp);
        s.sqrtpos(prec)
    }

    /// Integer power by binary exponentiation.
    pub fn pow_u64(&self, e: u64, prec: u32) -> Self {
        if e == 0 {
            return Self::one();
        }
        if e == 1 {
            return self.set_round(prec);
        }
        let wp = working(prec, 68 - e.leading_zeros());
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
