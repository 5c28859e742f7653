//! Decimal rendering.
//!
//! Balls print as `[mid +/- rad]`, exact balls as a bare number and the
//! indeterminate ball as `nan`. Midpoints are rounded to nearest with a
//! fixed count of significant digits; radii are rounded upward to two
//! digits, so the printed radius never understates the true one.
//!
//! ## Algorithms
//!
//! Digits are extracted by scaling the odd mantissa with exact powers of
//! two and ten and performing a single big-integer division, so there is
//! no double rounding. The decimal exponent is estimated from the binary
//! exponent and corrected by re-scaling when the digit count comes out
//! one off. Values whose binary exponent is astronomically large render
//! in the raw `mantissa * 2^exponent` form instead; such numbers have no
//! readable decimal form anyway.

use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

use crate::complex::ComplexBall;
use crate::float::Float;
use crate::magnitude::Magnitude;
use crate::real::RealBall;
use crate::tunables;

/// Largest |binary exponent| still converted to decimal (about 10^6 decimal
/// digits of shifting). Beyond it the raw form is used.
const MAX_DECIMAL_TOP: i64 = 3_400_000;

fn pow10(e: u64) -> BigUint {
    BigUint::from(10u32).pow(e as u32)
}

/// `man * 2^exp * 10^s` as an exact fraction.
fn scaled(man: &BigUint, exp: &BigInt, s: i64) -> Option<(BigUint, BigUint)> {
    let mut num = man.clone();
    let mut den = BigUint::from(1u32);
    if s >= 0 {
        num *= pow10(s as u64);
    } else {
        den *= pow10((-s) as u64);
    }
    let e = exp.to_i64()?;
    if e >= 0 {
        num <<= e as u64;
    } else {
        den <<= (-e) as u64;
    }
    Some((num, den))
}

/// The first `d` significant decimal digits of `man * 2^exp` and the
/// decimal exponent `k` of the leading digit, so the value is read as
/// `0.<digits> * 10^(k+1)` with the point after the first digit.
///
/// Rounds to nearest by default, upward when `up` is set. `None` when the
/// binary exponent is out of the decimal range.
fn decimal_digits(man: &BigUint, exp: &BigInt, d: u32, up: bool) -> Option<(String, i64)> {
    let top = (exp.clone() + man.bits()).to_i64()?;
    if top.abs() > MAX_DECIMAL_TOP {
        return None;
    }
    // floor(top * log10(2)) estimates k; the loop repairs an off-by-one,
    // including the 999.. -> 1000.. carry.
    let mut k = top * 30_103 / 100_000;
    loop {
        let s = d as i64 - 1 - k;
        let (num, den) = scaled(man, exp, s)?;
        let q = if up {
            (&num + &den - 1u32) / &den
        } else {
            (num * 2u32 + &den) / (den * 2u32)
        };
        let digits = q.to_string();
        let len = digits.len() as i64;
        if len == d as i64 {
            return Some((digits, k));
        }
        k += len - d as i64;
    }
}

fn raw_pow2(neg: bool, man: &BigUint, exp: &BigInt) -> String {
    format!("{}{} * 2^{}", if neg { "-" } else { "" }, man, exp)
}

/// Exact decimal form of a dyadic value, or `None` when it would exceed
/// `max_len` characters (the fraction always terminates, but 2^-400 has
/// four hundred of them).
fn exact_decimal(x: &Float, max_len: usize) -> Option<String> {
    let (neg, man, exp) = x.raw_parts()?;
    let e = exp.to_i64()?;
    if e.unsigned_abs() > 512 {
        return None;
    }
    let sign = if neg { "-" } else { "" };
    let s = if e >= 0 {
        (man.clone() << e as u64).to_string()
    } else {
        // man * 2^-f = (man * 5^f) / 10^f; man is odd, so the digit string
        // ends in 5 and never needs trailing-zero cleanup
        let f = (-e) as usize;
        let digits = (man.clone() * BigUint::from(5u32).pow(f as u32)).to_string();
        if digits.len() <= f {
            format!("0.{}{}", "0".repeat(f - digits.len()), digits)
        } else {
            let split = digits.len() - f;
            format!("{}.{}", &digits[..split], &digits[split..])
        }
    };
    (s.len() <= max_len).then(|| format!("{sign}{s}"))
}

/// Lay out a digit string: positional for moderate exponents, scientific
/// otherwise.
fn positional_or_sci(neg: bool, digits: &str, k: i64, d: u32) -> String {
    let sign = if neg { "-" } else { "" };
    if (0..d as i64 + 4).contains(&k) {
        let point = (k + 1) as usize;
        if point >= digits.len() {
            format!("{sign}{digits}{}", "0".repeat(point - digits.len()))
        } else {
            format!("{sign}{}.{}", &digits[..point], &digits[point..])
        }
    } else if (-4..0).contains(&k) {
        format!("{sign}0.{}{}", "0".repeat((-k - 1) as usize), digits)
    } else if digits.len() == 1 {
        format!("{sign}{digits}e{k}")
    } else {
        format!("{sign}{}.{}e{}", &digits[..1], &digits[1..], k)
    }
}

/// `digits`-digit decimal of a finite nonzero value, rounded to nearest.
fn approx_decimal(x: &Float, digits: u32, up: bool) -> String {
    let (neg, man, exp) = x
        .raw_parts()
        .expect("approx_decimal takes finite nonzero input");
    match decimal_digits(man, exp, digits, up) {
        Some((s, k)) => positional_or_sci(neg, &s, k, digits),
        None => raw_pow2(neg, man, exp),
    }
}

/// Decimal form of a float: exact when short, rounded otherwise.
pub(crate) fn float_decimal(x: &Float, digits: u32) -> String {
    if x.is_nan() {
        return "nan".into();
    }
    if x.is_zero() {
        return "0".into();
    }
    if x.is_inf() {
        return if x.is_negative() { "-inf" } else { "inf" }.into();
    }
    let digits = digits.max(2);
    exact_decimal(x, digits as usize + 6).unwrap_or_else(|| approx_decimal(x, digits, false))
}

/// Two upward-rounded digits of a radius, always in scientific form.
fn radius_decimal(r: &Magnitude) -> String {
    if r.is_zero() {
        return "0".into();
    }
    if r.is_inf() {
        return "inf".into();
    }
    let (_, man, exp) = r
        .as_float()
        .raw_parts()
        .expect("finite nonzero magnitude has parts");
    match decimal_digits(man, exp, 2, true) {
        Some((s, k)) => format!("{}.{}e{}", &s[..1], &s[1..], k),
        None => raw_pow2(false, man, exp),
    }
}

impl RealBall {
    /// Decimal rendering with `digits` significant midpoint digits.
    ///
    /// Exact balls render as a bare number, the indeterminate ball as
    /// `nan`, everything else as `[mid +/- rad]`. The midpoint is rounded
    /// to nearest, the radius upward to two digits.
    pub fn to_decimal(&self, digits: u32) -> String {
        if self.is_indeterminate() {
            return "nan".into();
        }
        let digits = digits.max(2);
        if self.is_exact() {
            return float_decimal(self.mid(), digits);
        }
        format!(
            "[{} +/- {}]",
            float_decimal(self.mid(), digits),
            radius_decimal(self.rad())
        )
    }
}

impl ComplexBall {
    /// Decimal rendering of both parts, as `(re, im)`.
    pub fn to_decimal(&self, digits: u32) -> String {
        format!("({}, {})", self.re().to_decimal(digits), self.im().to_decimal(digits))
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&float_decimal(self, tunables::display_digits()))
    }
}

impl fmt::Display for RealBall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal(tunables::display_digits()))
    }
}

impl fmt::Display for ComplexBall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal(tunables::display_digits()))
    }
}
