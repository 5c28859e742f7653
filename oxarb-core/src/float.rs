//! Arbitrary-precision binary floating point with explicit rounding.
//!
//! A [`Float`] stores `sign * mantissa * 2^exponent` with an odd arbitrary
//! size mantissa and an unbounded (big integer) exponent, so no operation can
//! overflow the exponent range. Special values are zero, two infinities and
//! NaN. The representation is canonical: trailing zero bits of the mantissa
//! are folded into the exponent, which makes structural equality coincide
//! with "equal as representations" (NaN equals NaN).
//!
//! Arithmetic takes the target precision and a [`Round`] mode per call and
//! reports whether the result was rounded. Callers that need rigorous error
//! tracking (the ball layer) turn the inexact flag into a one-ulp radius
//! contribution via [`Float::ulp`].
//!
//! ## References
//!
//! - IEEE 754-2019 (rounding-direction attributes)
//! - Muller et al.: "Handbook of Floating-Point Arithmetic" (2018)

use core::cmp::Ordering;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// Precision sentinel requesting an exact (never rounded) result.
///
/// Supported by addition, subtraction and multiplication, whose exact results
/// are always representable. Division and square root require a finite
/// precision.
pub const PREC_EXACT: u32 = u32::MAX;

/// Widened working precision, saturating below the exact sentinel.
pub(crate) fn working_prec(prec: u32, extra: u32) -> u32 {
    prec.saturating_add(extra).min(PREC_EXACT - 1)
}

/// Rounding direction for inexact operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    /// Toward zero.
    Down,
    /// Away from zero.
    Up,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// To nearest, ties to even.
    Nearest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Repr {
    Zero,
    /// `sign * man * 2^exp` with `man` odd and nonzero.
    Finite { neg: bool, man: BigUint, exp: BigInt },
    Inf { neg: bool },
    Nan,
}

/// An arbitrary-precision binary floating-point number.
///
/// Values are immutable; arithmetic returns fresh floats together with an
/// inexact flag. There is no signed zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Float {
    repr: Repr,
}

#[inline]
fn sign_of(neg: bool) -> Sign {
    if neg {
        Sign::Minus
    } else {
        Sign::Plus
    }
}

/// Round a finite nonzero `(neg, man, exp)` to `prec` bits.
///
/// `sticky` records extra nonzero magnitude strictly below the lowest
/// mantissa bit, in the direction away from zero. Directed modes are correct
/// for any sticky magnitude; `Nearest` additionally requires the sticky
/// magnitude to lie below half an ulp of the result, which every caller in
/// this module guarantees by providing at least `prec + 2` mantissa bits
/// whenever it sets the flag.
fn round_finite(
    neg: bool,
    mut man: BigUint,
    mut exp: BigInt,
    sticky: bool,
    prec: u32,
    rnd: Round,
) -> (Float, bool) {
    debug_assert!(!man.is_zero());
    let bits = man.bits();
    let excess = bits.saturating_sub(prec as u64);

    let inexact;
    if excess > 0 {
        let round_bit = man.bit(excess - 1);
        let below = match man.trailing_zeros() {
            Some(tz) => tz < excess - 1,
            None => false,
        };
        man >>= excess;
        exp += excess;
        inexact = round_bit || below || sticky;
        let inc = match rnd {
            Round::Down => false,
            Round::Up => inexact,
            Round::Floor => inexact && neg,
            Round::Ceil => inexact && !neg,
            Round::Nearest => round_bit && (below || sticky || man.bit(0)),
        };
        if inc {
            man += 1u32;
        }
    } else if sticky {
        inexact = true;
        let inc = match rnd {
            Round::Down | Round::Nearest => false,
            Round::Up => true,
            Round::Floor => neg,
            Round::Ceil => !neg,
        };
        if inc {
            // widen to the full working precision so the increment is one
            // ulp of the result, not one unit of the short mantissa
            let widen = (prec as u64) - bits;
            man <<= widen;
            exp -= widen;
            man += 1u32;
        }
    } else {
        inexact = false;
    }

    // restore canonical odd mantissa
    if let Some(tz) = man.trailing_zeros() {
        if tz > 0 {
            man >>= tz;
            exp += tz;
        }
    }
    (
        Float {
            repr: Repr::Finite { neg, man, exp },
        },
        inexact,
    )
}

impl Float {
    /// The exact zero.
    #[inline]
    pub fn zero() -> Self {
        Float { repr: Repr::Zero }
    }

    /// The exact one.
    #[inline]
    pub fn one() -> Self {
        Float::from_i64(1)
    }

    /// Positive infinity.
    #[inline]
    pub fn pos_inf() -> Self {
        Float {
            repr: Repr::Inf { neg: false },
        }
    }

    /// Negative infinity.
    #[inline]
    pub fn neg_inf() -> Self {
        Float {
            repr: Repr::Inf { neg: true },
        }
    }

    /// Not-a-number.
    #[inline]
    pub fn nan() -> Self {
        Float { repr: Repr::Nan }
    }

    /// The exact power of two `2^e`.
    pub fn pow2(e: i64) -> Self {
        Float {
            repr: Repr::Finite {
                neg: false,
                man: BigUint::one(),
                exp: BigInt::from(e),
            },
        }
    }

    fn from_parts(neg: bool, man: BigUint, mut exp: BigInt) -> Self {
        if man.is_zero() {
            return Float::zero();
        }
        let mut man = man;
        if let Some(tz) = man.trailing_zeros() {
            if tz > 0 {
                man >>= tz;
                exp += tz;
            }
        }
        Float {
            repr: Repr::Finite { neg, man, exp },
        }
    }

    /// Exact conversion from a machine integer.
    pub fn from_i64(n: i64) -> Self {
        if n == 0 {
            return Float::zero();
        }
        Float::from_parts(n < 0, BigUint::from(n.unsigned_abs()), BigInt::zero())
    }

    /// Exact conversion from a big integer.
    pub fn from_bigint(n: &BigInt) -> Self {
        if n.is_zero() {
            return Float::zero();
        }
        Float::from_parts(n.sign() == Sign::Minus, n.magnitude().clone(), BigInt::zero())
    }

    /// Exact conversion from a double (every finite `f64` is dyadic).
    pub fn from_f64(x: f64) -> Self {
        if x.is_nan() {
            return Float::nan();
        }
        if x.is_infinite() {
            return if x < 0.0 {
                Float::neg_inf()
            } else {
                Float::pos_inf()
            };
        }
        if x == 0.0 {
            return Float::zero();
        }
        let bits = x.abs().to_bits();
        let raw_exp = (bits >> 52) & 0x7ff;
        let frac = bits & ((1u64 << 52) - 1);
        let (man, exp) = if raw_exp == 0 {
            (frac, -1074i64)
        } else {
            (frac | (1u64 << 52), raw_exp as i64 - 1075)
        };
        Float::from_parts(x < 0.0, BigUint::from(man), BigInt::from(exp))
    }

    /// Nearest double, saturating to infinity outside the `f64` range.
    pub fn to_f64(&self) -> f64 {
        match &self.repr {
            Repr::Zero => 0.0,
            Repr::Nan => f64::NAN,
            Repr::Inf { neg } => {
                if *neg {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            Repr::Finite { .. } => {
                let (r, _) = self.round(53, Round::Nearest);
                let Repr::Finite { neg, man, exp } = &r.repr else {
                    return f64::NAN;
                };
                let top = exp.clone() + man.bits();
                if top > BigInt::from(1100) {
                    return if *neg { f64::NEG_INFINITY } else { f64::INFINITY };
                }
                if top < BigInt::from(-1100) {
                    return 0.0;
                }
                let m = man.to_u64().unwrap_or(u64::MAX) as f64;
                let e = exp.to_i64().unwrap_or(0) as i32;
                let v = m * 2f64.powi(e);
                if *neg {
                    -v
                } else {
                    v
                }
            }
        }
    }

    /// True for the exact zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Zero)
    }

    /// True for the exact one.
    pub fn is_one(&self) -> bool {
        match &self.repr {
            Repr::Finite { neg: false, man, exp } => exp.is_zero() && man.is_one(),
            _ => false,
        }
    }

    /// True for NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::Nan)
    }

    /// True for either infinity.
    #[inline]
    pub fn is_inf(&self) -> bool {
        matches!(self.repr, Repr::Inf { .. })
    }

    /// True for positive infinity.
    #[inline]
    pub fn is_pos_inf(&self) -> bool {
        matches!(self.repr, Repr::Inf { neg: false })
    }

    /// True for negative infinity.
    #[inline]
    pub fn is_neg_inf(&self) -> bool {
        matches!(self.repr, Repr::Inf { neg: true })
    }

    /// True for zero or a finite nonzero value.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self.repr, Repr::Zero | Repr::Finite { .. })
    }

    /// True for zero, infinity or NaN.
    #[inline]
    pub fn is_special(&self) -> bool {
        !matches!(self.repr, Repr::Finite { .. })
    }

    /// True when the sign bit is set (negative finite values and `-inf`).
    pub fn is_negative(&self) -> bool {
        matches!(
            self.repr,
            Repr::Finite { neg: true, .. } | Repr::Inf { neg: true }
        )
    }

    /// Sign of the value: `-1`, `0` or `1`, with `0` for NaN.
    pub fn sgn(&self) -> i32 {
        match &self.repr {
            Repr::Zero | Repr::Nan => 0,
            Repr::Finite { neg, .. } | Repr::Inf { neg } => {
                if *neg {
                    -1
                } else {
                    1
                }
            }
        }
    }

    /// Number of bits in the mantissa (zero for special values).
    pub fn bits(&self) -> u64 {
        match &self.repr {
            Repr::Finite { man, .. } => man.bits(),
            _ => 0,
        }
    }

    /// Position of the most significant bit: `|x|` lies in
    /// `[2^(t-1), 2^t)`. `None` for special values.
    pub fn exponent_top(&self) -> Option<BigInt> {
        match &self.repr {
            Repr::Finite { man, exp, .. } => Some(exp.clone() + man.bits()),
            _ => None,
        }
    }

    pub(crate) fn raw_parts(&self) -> Option<(bool, &BigUint, &BigInt)> {
        match &self.repr {
            Repr::Finite { neg, man, exp } => Some((*neg, man, exp)),
            _ => None,
        }
    }

    /// Negation (exact).
    pub fn neg(&self) -> Self {
        match &self.repr {
            Repr::Zero => Float::zero(),
            Repr::Nan => Float::nan(),
            Repr::Inf { neg } => Float {
                repr: Repr::Inf { neg: !neg },
            },
            Repr::Finite { neg, man, exp } => Float {
                repr: Repr::Finite {
                    neg: !neg,
                    man: man.clone(),
                    exp: exp.clone(),
                },
            },
        }
    }

    /// Absolute value (exact).
    pub fn abs(&self) -> Self {
        match &self.repr {
            Repr::Finite { neg: true, man, exp } => Float {
                repr: Repr::Finite {
                    neg: false,
                    man: man.clone(),
                    exp: exp.clone(),
                },
            },
            Repr::Inf { .. } => Float::pos_inf(),
            _ => self.clone(),
        }
    }

    /// Multiplication by `2^e` (exact).
    pub fn mul_2exp(&self, e: i64) -> Self {
        match &self.repr {
            Repr::Finite { neg, man, exp } => Float {
                repr: Repr::Finite {
                    neg: *neg,
                    man: man.clone(),
                    exp: exp.clone() + e,
                },
            },
            _ => self.clone(),
        }
    }

    /// Re-round to `prec` bits.
    pub fn round(&self, prec: u32, rnd: Round) -> (Self, bool) {
        let prec = prec.max(2);
        match &self.repr {
            Repr::Finite { neg, man, exp } => {
                round_finite(*neg, man.clone(), exp.clone(), false, prec, rnd)
            }
            _ => (self.clone(), false),
        }
    }

    /// Upper bound on the rounding error of a `prec`-bit result with this
    /// value: one unit in the last place, `2^(top - prec)`.
    pub fn ulp(&self, prec: u32) -> Self {
        match &self.repr {
            Repr::Finite { man, exp, .. } => {
                let e = exp.clone() + man.bits() - BigInt::from(prec);
                Float {
                    repr: Repr::Finite {
                        neg: false,
                        man: BigUint::one(),
                        exp: e,
                    },
                }
            }
            Repr::Zero => Float::zero(),
            _ => Float::pos_inf(),
        }
    }

    /// Addition rounded to `prec` bits; the flag reports an inexact result.
    pub fn add(&self, rhs: &Self, prec: u32, rnd: Round) -> (Self, bool) {
        let prec = prec.max(2);
        match (&self.repr, &rhs.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => (Float::nan(), false),
            (Repr::Inf { neg: a }, Repr::Inf { neg: b }) => {
                if a == b {
                    (self.clone(), false)
                } else {
                    (Float::nan(), false)
                }
            }
            (Repr::Inf { .. }, _) => (self.clone(), false),
            (_, Repr::Inf { .. }) => (rhs.clone(), false),
            (Repr::Zero, _) => rhs.round(prec, rnd),
            (_, Repr::Zero) => self.round(prec, rnd),
            (Repr::Finite { .. }, Repr::Finite { .. }) => self.add_finite(rhs, prec, rnd),
        }
    }

    /// Subtraction rounded to `prec` bits.
    pub fn sub(&self, rhs: &Self, prec: u32, rnd: Round) -> (Self, bool) {
        self.add(&rhs.neg(), prec, rnd)
    }

    fn add_finite(&self, rhs: &Self, prec: u32, rnd: Round) -> (Self, bool) {
        let Repr::Finite { neg: xn, man: xm, exp: xe } = &self.repr else {
            unreachable!("add_finite called on a special value");
        };
        let Repr::Finite { neg: yn, man: ym, exp: ye } = &rhs.repr else {
            unreachable!("add_finite called on a special value");
        };

        let xt = xe.clone() + xm.bits();
        let yt = ye.clone() + ym.bits();

        // order by magnitude window: l = larger top
        let (ln, lm, le, lt, sn, st) = if xt >= yt {
            (*xn, xm, xe, &xt, *yn, &yt)
        } else {
            (*yn, ym, ye, &yt, *xn, &xt)
        };

        // when the smaller operand lies entirely below both the larger
        // operand's mantissa and the rounding window, it only acts as a
        // sticky nudge; this keeps huge exponent gaps cheap
        if prec != PREC_EXACT {
            let gap_big = lt.clone() - st > BigInt::from(prec as u64 + 4);
            let disjoint = *st < *le;
            if gap_big && disjoint {
                let k = 1u64.max((prec as u64 + 5).saturating_sub(lm.bits()));
                let mut man = lm.clone() << k;
                if ln != sn {
                    // the true value sits just below the larger operand
                    man -= 1u32;
                }
                return round_finite(ln, man, le.clone() - k, true, prec, rnd);
            }
        }

        let ce = xe.min(ye).clone();
        let sx = (xe - &ce)
            .to_u64()
            .expect("alignment shift is bounded when the gap shortcut does not apply");
        let sy = (ye - &ce)
            .to_u64()
            .expect("alignment shift is bounded when the gap shortcut does not apply");
        let vx = BigInt::from_biguint(sign_of(*xn), xm.clone() << sx);
        let vy = BigInt::from_biguint(sign_of(*yn), ym.clone() << sy);
        let sum = vx + vy;
        if sum.is_zero() {
            return (Float::zero(), false);
        }
        let (s, mag) = sum.into_parts();
        round_finite(s == Sign::Minus, mag, ce, false, prec, rnd)
    }

    /// Multiplication rounded to `prec` bits.
    pub fn mul(&self, rhs: &Self, prec: u32, rnd: Round) -> (Self, bool) {
        let prec = prec.max(2);
        match (&self.repr, &rhs.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => (Float::nan(), false),
            (Repr::Zero, Repr::Inf { .. }) | (Repr::Inf { .. }, Repr::Zero) => {
                (Float::nan(), false)
            }
            (Repr::Inf { neg: a }, Repr::Inf { neg: b }) => (
                Float {
                    repr: Repr::Inf { neg: a != b },
                },
                false,
            ),
            (Repr::Inf { neg: a }, Repr::Finite { neg: b, .. })
            | (Repr::Finite { neg: b, .. }, Repr::Inf { neg: a }) => (
                Float {
                    repr: Repr::Inf { neg: a != b },
                },
                false,
            ),
            (Repr::Zero, _) | (_, Repr::Zero) => (Float::zero(), false),
            (
                Repr::Finite { neg: xn, man: xm, exp: xe },
                Repr::Finite { neg: yn, man: ym, exp: ye },
            ) => round_finite(xn != yn, xm * ym, xe + ye, false, prec, rnd),
        }
    }

    /// Division rounded to `prec` bits.
    ///
    /// Division by zero (and `inf/inf`, `0/0`) yields NaN; `x/inf` yields
    /// zero. Requires a finite precision.
    pub fn div(&self, rhs: &Self, prec: u32, rnd: Round) -> (Self, bool) {
        debug_assert!(prec != PREC_EXACT, "division requires a finite precision");
        let prec = prec.max(2);
        match (&self.repr, &rhs.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => (Float::nan(), false),
            (_, Repr::Zero) => (Float::nan(), false),
            (Repr::Inf { .. }, Repr::Inf { .. }) => (Float::nan(), false),
            (Repr::Zero, _) => (Float::zero(), false),
            (Repr::Inf { neg: a }, Repr::Finite { neg: b, .. }) => (
                Float {
                    repr: Repr::Inf { neg: a != b },
                },
                false,
            ),
            (Repr::Finite { .. }, Repr::Inf { .. }) => (Float::zero(), false),
            (
                Repr::Finite { neg: xn, man: xm, exp: xe },
                Repr::Finite { neg: yn, man: ym, exp: ye },
            ) => {
                let shift = prec as u64 + 2 + ym.bits();
                let num = xm.clone() << shift;
                let (q, r) = num.div_rem(ym);
                round_finite(
                    xn != yn,
                    q,
                    xe - ye - BigInt::from(shift),
                    !r.is_zero(),
                    prec,
                    rnd,
                )
            }
        }
    }

    /// Square root rounded to `prec` bits.
    ///
    /// NaN for negative values (including `-inf`). Requires a finite
    /// precision.
    pub fn sqrt(&self, prec: u32, rnd: Round) -> (Self, bool) {
        debug_assert!(prec != PREC_EXACT, "square root requires a finite precision");
        let prec = prec.max(2);
        match &self.repr {
            Repr::Nan => (Float::nan(), false),
            Repr::Zero => (Float::zero(), false),
            Repr::Inf { neg: false } => (Float::pos_inf(), false),
            Repr::Inf { neg: true } => (Float::nan(), false),
            Repr::Finite { neg: true, .. } => (Float::nan(), false),
            Repr::Finite { neg: false, man, exp } => {
                let b = man.bits();
                let mut shift = (2 * (prec as u64 + 2)).saturating_sub(b);
                if (exp.clone() - BigInt::from(shift)).is_odd() {
                    shift += 1;
                }
                let scaled = man.clone() << shift;
                let e2 = (exp.clone() - BigInt::from(shift)) / BigInt::from(2);
                let q = scaled.sqrt();
                let sticky = &q * &q != scaled;
                round_finite(false, q, e2, sticky, prec, rnd)
            }
        }
    }

    /// Value comparison; `None` when either operand is NaN.
    pub fn cmp_value(&self, rhs: &Self) -> Option<Ordering> {
        if self.is_nan() || rhs.is_nan() {
            return None;
        }
        let cx = self.order_class();
        let cy = rhs.order_class();
        if cx != cy {
            return Some(cx.cmp(&cy));
        }
        match (&self.repr, &rhs.repr) {
            (Repr::Finite { neg, .. }, Repr::Finite { .. }) => {
                let abs_ord = self.cmp_abs_finite(rhs);
                Some(if *neg { abs_ord.reverse() } else { abs_ord })
            }
            _ => Some(Ordering::Equal),
        }
    }

    /// Comparison of absolute values; `None` when either operand is NaN.
    pub fn cmp_abs(&self, rhs: &Self) -> Option<Ordering> {
        match (&self.repr, &rhs.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => None,
            (Repr::Inf { .. }, Repr::Inf { .. }) => Some(Ordering::Equal),
            (Repr::Inf { .. }, _) => Some(Ordering::Greater),
            (_, Repr::Inf { .. }) => Some(Ordering::Less),
            (Repr::Zero, Repr::Zero) => Some(Ordering::Equal),
            (Repr::Zero, _) => Some(Ordering::Less),
            (_, Repr::Zero) => Some(Ordering::Greater),
            (Repr::Finite { .. }, Repr::Finite { .. }) => Some(self.cmp_abs_finite(rhs)),
        }
    }

    fn order_class(&self) -> i32 {
        match &self.repr {
            Repr::Inf { neg: true } => -2,
            Repr::Finite { neg: true, .. } => -1,
            Repr::Zero => 0,
            Repr::Finite { neg: false, .. } => 1,
            Repr::Inf { neg: false } => 2,
            Repr::Nan => unreachable!("NaN has no order class"),
        }
    }

    fn cmp_abs_finite(&self, rhs: &Self) -> Ordering {
        let Repr::Finite { man: xm, exp: xe, .. } = &self.repr else {
            unreachable!("cmp_abs_finite called on a special value");
        };
        let Repr::Finite { man: ym, exp: ye, .. } = &rhs.repr else {
            unreachable!("cmp_abs_finite called on a special value");
        };
        let xt = xe.clone() + xm.bits();
        let yt = ye.clone() + ym.bits();
        match xt.cmp(&yt) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => {
                // equal tops: the exponent gap equals the bit-length gap
                let xb = xm.bits();
                let yb = ym.bits();
                if xb >= yb {
                    xm.cmp(&(ym.clone() << (xb - yb)))
                } else {
                    (xm.clone() << (yb - xb)).cmp(ym)
                }
            }
        }
    }
}
