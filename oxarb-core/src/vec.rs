//! Batched operations on slices of balls.
//!
//! Each routine is elementwise and equivalent to the scalar loop at the
//! same precision; there is no cross-element interaction, so callers are
//! free to shard slices across threads (the library itself never spawns
//! any). The only routine with internal structure is `set_powers`, whose
//! square-and-multiply chain is part of its contract: entry `k` is
//! bit-for-bit the value that chain produces.

/// Operations on `[RealBall]`.
pub mod real {
    use crate::magnitude::Magnitude;
    use crate::real::RealBall;

    /// Fill with exact zeros.
    pub fn zero(dst: &mut [RealBall]) {
        dst.fill_with(RealBall::zero);
    }

    /// Fill with indeterminate balls.
    pub fn indeterminate(dst: &mut [RealBall]) {
        dst.fill_with(RealBall::indeterminate);
    }

    /// True when every entry is the exact zero.
    pub fn is_zero(v: &[RealBall]) -> bool {
        v.iter().all(RealBall::is_zero)
    }

    /// Copy `src` into `dst`.
    pub fn set(dst: &mut [RealBall], src: &[RealBall]) {
        dst.clone_from_slice(src);
    }

    /// Elementwise negation.
    pub fn neg(dst: &mut [RealBall], src: &[RealBall]) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.neg();
        }
    }

    /// Elementwise addition.
    pub fn add(dst: &mut [RealBall], a: &[RealBall], b: &[RealBall], prec: u32) {
        debug_assert_eq!(dst.len(), a.len());
        debug_assert_eq!(dst.len(), b.len());
        for (d, (x, y)) in dst.iter_mut().zip(a.iter().zip(b)) {
            *d = x.add(y, prec);
        }
    }

    /// Elementwise subtraction.
    pub fn sub(dst: &mut [RealBall], a: &[RealBall], b: &[RealBall], prec: u32) {
        debug_assert_eq!(dst.len(), a.len());
        debug_assert_eq!(dst.len(), b.len());
        for (d, (x, y)) in dst.iter_mut().zip(a.iter().zip(b)) {
            *d = x.sub(y, prec);
        }
    }

    /// Multiply every entry of `src` by `c`.
    pub fn scalar_mul(dst: &mut [RealBall], src: &[RealBall], c: &RealBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.mul(c, prec);
        }
    }

    /// Divide every entry of `src` by `c`.
    pub fn scalar_div(dst: &mut [RealBall], src: &[RealBall], c: &RealBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.div(c, prec);
        }
    }

    /// Accumulate `dst[k] += src[k] * c`.
    pub fn scalar_addmul(dst: &mut [RealBall], src: &[RealBall], c: &RealBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            d.addmul(s, c, prec);
        }
    }

    /// Accumulate `dst[k] -= src[k] * c`.
    pub fn scalar_submul(dst: &mut [RealBall], src: &[RealBall], c: &RealBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            d.submul(s, c, prec);
        }
    }

    /// Scale every entry by `2^e` (exact).
    pub fn scalar_mul_2exp(dst: &mut [RealBall], src: &[RealBall], e: i64) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.mul_2exp(e);
        }
    }

    /// Add `err` to every radius.
    pub fn add_error(dst: &mut [RealBall], err: &Magnitude) {
        for d in dst {
            d.add_error(err);
        }
    }

    /// Trim every entry in place.
    pub fn trim(dst: &mut [RealBall]) {
        for d in dst.iter_mut() {
            *d = d.trim();
        }
    }

    /// Largest midpoint mantissa width in the slice.
    pub fn bits(v: &[RealBall]) -> u64 {
        v.iter().map(RealBall::bits).max().unwrap_or(0)
    }

    /// Fill `dst` with `x^0, x^1, ..., x^(len-1)`.
    ///
    /// Entry 0 is the exact one and entry 1 the rounded base; even entries
    /// square the half-index entry, odd entries multiply the predecessor by
    /// the unrounded base. The chain itself is the contract: callers may
    /// rely on entry `k` reproducing it bit for bit.
    pub fn set_powers(dst: &mut [RealBall], x: &RealBall, prec: u32) {
        for k in 0..dst.len() {
            let v = if k == 0 {
                RealBall::one()
            } else if k == 1 {
                x.set_round(prec)
            } else if k % 2 == 0 {
                dst[k / 2].mul(&dst[k / 2], prec)
            } else {
                dst[k - 1].mul(x, prec)
            };
            dst[k] = v;
        }
    }
}

/// Operations on `[ComplexBall]`.
pub mod complex {
    use crate::complex::ComplexBall;
    use crate::magnitude::Magnitude;

    /// Fill with exact zeros.
    pub fn zero(dst: &mut [ComplexBall]) {
        dst.fill_with(ComplexBall::zero);
    }

    /// Fill with indeterminate balls.
    pub fn indeterminate(dst: &mut [ComplexBall]) {
        dst.fill_with(ComplexBall::indeterminate);
    }

    /// True when every entry is the exact zero.
    pub fn is_zero(v: &[ComplexBall]) -> bool {
        v.iter().all(ComplexBall::is_zero)
    }

    /// Copy `src` into `dst`.
    pub fn set(dst: &mut [ComplexBall], src: &[ComplexBall]) {
        dst.clone_from_slice(src);
    }

    /// Elementwise negation.
    pub fn neg(dst: &mut [ComplexBall], src: &[ComplexBall]) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.neg();
        }
    }

    /// Elementwise addition.
    pub fn add(dst: &mut [ComplexBall], a: &[ComplexBall], b: &[ComplexBall], prec: u32) {
        debug_assert_eq!(dst.len(), a.len());
        debug_assert_eq!(dst.len(), b.len());
        for (d, (x, y)) in dst.iter_mut().zip(a.iter().zip(b)) {
            *d = x.add(y, prec);
        }
    }

    /// Elementwise subtraction.
    pub fn sub(dst: &mut [ComplexBall], a: &[ComplexBall], b: &[ComplexBall], prec: u32) {
        debug_assert_eq!(dst.len(), a.len());
        debug_assert_eq!(dst.len(), b.len());
        for (d, (x, y)) in dst.iter_mut().zip(a.iter().zip(b)) {
            *d = x.sub(y, prec);
        }
    }

    /// Multiply every entry of `src` by `c`.
    pub fn scalar_mul(dst: &mut [ComplexBall], src: &[ComplexBall], c: &ComplexBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.mul(c, prec);
        }
    }

    /// Divide every entry of `src` by `c`.
    pub fn scalar_div(dst: &mut [ComplexBall], src: &[ComplexBall], c: &ComplexBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.div(c, prec);
        }
    }

    /// Accumulate `dst[k] += src[k] * c`.
    pub fn scalar_addmul(dst: &mut [ComplexBall], src: &[ComplexBall], c: &ComplexBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            d.addmul(s, c, prec);
        }
    }

    /// Accumulate `dst[k] -= src[k] * c`.
    pub fn scalar_submul(dst: &mut [ComplexBall], src: &[ComplexBall], c: &ComplexBall, prec: u32) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            d.submul(s, c, prec);
        }
    }

    /// Scale every entry by `2^e` (exact).
    pub fn scalar_mul_2exp(dst: &mut [ComplexBall], src: &[ComplexBall], e: i64) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.mul_2exp(e);
        }
    }

    /// Add `err` to every component radius.
    pub fn add_error(dst: &mut [ComplexBall], err: &Magnitude) {
        for d in dst {
            d.add_error(err);
        }
    }

    /// Trim every entry in place.
    pub fn trim(dst: &mut [ComplexBall]) {
        for d in dst.iter_mut() {
            *d = d.trim();
        }
    }

    /// Largest midpoint mantissa width in the slice.
    pub fn bits(v: &[ComplexBall]) -> u64 {
        v.iter().map(ComplexBall::bits).max().unwrap_or(0)
    }

    /// Fill `dst` with `x^0, x^1, ..., x^(len-1)` by the same chain as the
    /// real variant.
    pub fn set_powers(dst: &mut [ComplexBall], x: &ComplexBall, prec: u32) {
        for k in 0..dst.len() {
            let v = if k == 0 {
                ComplexBall::one()
            } else if k == 1 {
                x.set_round(prec)
            } else if k % 2 == 0 {
                dst[k / 2].mul(&dst[k / 2], prec)
            } else {
                dst[k - 1].mul(x, prec)
            };
            dst[k] = v;
        }
    }
}
