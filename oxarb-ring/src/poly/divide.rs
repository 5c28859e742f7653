//! Polynomial division with remainder.
//!
//! ## Algorithms
//!
//! The basecase routine is schoolbook long division driven by a
//! precomputed inverse of the divisor's leading coefficient, O(lenQ ·
//! lenB) base operations. The Newton routine reverses both operands,
//! divides the reversed power series to `lenQ` terms and reverses back,
//! which turns division into truncated multiplication. `divrem` picks
//! between them by operand size.
//!
//! Division requires the divisor's leading coefficient to be provably
//! nonzero and invertible. A divisor whose leading coefficient cannot
//! be decided yields `Unable`: choosing a degree for it could produce a
//! quotient that is silently wrong.

use crate::ring::Ring;
use crate::status::{RingError, RingResult};
use tracing::debug;

use super::{PolyRing, Polynomial};

/// Quotient length at which `divrem` switches to Newton division.
pub const DIVREM_NEWTON_CUTOFF: usize = 24;

impl<R: Ring> PolyRing<R> {
    /// Long division against a divisor with known invertible leading
    /// coefficient. Total: callers have already validated the divisor.
    pub(crate) fn divrem_basecase_with_inv(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
        inv_lead: &R::Elem,
    ) -> (Polynomial<R::Elem>, Polynomial<R::Elem>) {
        let la = a.len();
        let lb = b.len();
        debug_assert!(lb >= 1);
        if la < lb {
            return (Polynomial::zero(), a.clone());
        }
        let mut rem = a.coeffs().to_vec();
        let lq = la - lb + 1;
        let mut q = vec![self.base().zero(); lq];
        for i in (0..lq).rev() {
            let qi = self.base().mul(&rem[i + lb - 1], inv_lead);
            for (j, bj) in b.coeffs().iter().enumerate() {
                let t = self.base().mul(&qi, bj);
                rem[i + j] = self.base().sub(&rem[i + j], &t);
            }
            q[i] = qi;
        }
        rem.truncate(lb - 1);
        (self.poly(q), self.poly(rem))
    }

    /// Schoolbook division with remainder.
    pub fn divrem_basecase(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<(Polynomial<R::Elem>, Polynomial<R::Elem>)> {
        let Some(lead) = b.leading() else {
            return Err(RingError::Domain);
        };
        if !self.base().is_zero(lead).is_false() {
            return Err(RingError::Unable);
        }
        if a.len() < b.len() {
            return Ok((Polynomial::zero(), a.clone()));
        }
        let inv = self.base().inv(lead)?;
        Ok(self.divrem_basecase_with_inv(a, b, &inv))
    }

    /// Quotient by Newton iteration on the reversed operands.
    pub fn div_newton(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<Polynomial<R::Elem>> {
        let Some(lead) = b.leading() else {
            return Err(RingError::Domain);
        };
        if !self.base().is_zero(lead).is_false() {
            return Err(RingError::Unable);
        }
        let (la, lb) = (a.len(), b.len());
        if la < lb {
            return Ok(Polynomial::zero());
        }
        let lq = la - lb + 1;
        // only the top lq coefficients of either operand influence Q
        let arev = self.reversed_top(a, lq);
        let brev = self.reversed_top(b, lb.min(lq));
        let qrev = self.div_series(&arev, &brev, lq)?;
        Ok(self.reverse(&qrev, lq))
    }

    /// Newton division with the remainder recovered by one truncated
    /// multiplication.
    pub fn divrem_newton(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<(Polynomial<R::Elem>, Polynomial<R::Elem>)> {
        let q = self.div_newton(a, b)?;
        let n = b.len().saturating_sub(1);
        let r = self.sub(&self.truncate(a, n), &self.mullow(b, &q, n));
        Ok((q, r))
    }

    /// Division with remainder: `a = b·q + r` with `r` shorter than `b`.
    ///
    /// `Domain` for a zero divisor, `Unable` when the divisor's leading
    /// coefficient cannot be proven nonzero. A dividend shorter than
    /// the divisor short-circuits to a zero quotient before any
    /// coefficient inversion is attempted.
    pub fn divrem(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<(Polynomial<R::Elem>, Polynomial<R::Elem>)> {
        let Some(lead) = b.leading() else {
            return Err(RingError::Domain);
        };
        if !self.base().is_zero(lead).is_false() {
            return Err(RingError::Unable);
        }
        if a.len() < b.len() {
            return Ok((Polynomial::zero(), a.clone()));
        }
        let lq = a.len() - b.len() + 1;
        if lq.min(b.len()) < DIVREM_NEWTON_CUTOFF {
            debug!(len_a = a.len(), len_b = b.len(), strategy = "basecase", "divrem");
            self.divrem_basecase(a, b)
        } else {
            debug!(len_a = a.len(), len_b = b.len(), strategy = "newton", "divrem");
            self.divrem_newton(a, b)
        }
    }

    /// The quotient alone. Unlike [`Ring::div`] this is Euclidean
    /// division: the remainder is discarded, not required to vanish.
    pub fn div(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<Polynomial<R::Elem>> {
        Ok(self.divrem(a, b)?.0)
    }

    /// The remainder alone.
    pub fn rem(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<Polynomial<R::Elem>> {
        Ok(self.divrem(a, b)?.1)
    }

    /// Reversal of the top `n` coefficients into a window of `n`.
    fn reversed_top(&self, p: &Polynomial<R::Elem>, n: usize) -> Polynomial<R::Elem> {
        let skip = p.len() - n;
        let mut c = vec![self.base().zero(); n];
        for (j, v) in p.coeffs()[skip..].iter().enumerate() {
            c[n - 1 - j] = v.clone();
        }
        self.poly(c)
    }
}
