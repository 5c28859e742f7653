//! Truncated power series inversion and division.
//!
//! ## Algorithms
//!
//! Newton's iteration doubles the number of correct coefficients per
//! step: from g ≡ f⁻¹ mod x^m it forms g·(2 − f·g) mod x^min(2m, n).
//! Every multiplication is truncated, so a full inverse to n terms
//! costs a constant number of length-n multiplications.

use crate::ring::Ring;
use crate::status::{RingError, RingResult, Truth};
use tracing::trace;

use super::{PolyRing, Polynomial};

impl<R: Ring> PolyRing<R> {
    /// Power series inverse of `f` modulo `x^n`.
    ///
    /// `Domain` when the constant term is zero or missing, `Unable`
    /// when its zero test is inconclusive.
    pub fn inv_series(&self, f: &Polynomial<R::Elem>, n: usize) -> RingResult<Polynomial<R::Elem>> {
        if n == 0 {
            return Ok(Polynomial::zero());
        }
        let Some(c0) = f.coeff(0) else {
            return Err(RingError::Domain);
        };
        match self.base().is_zero(c0) {
            Truth::True => return Err(RingError::Domain),
            Truth::Unknown => return Err(RingError::Unable),
            Truth::False => {}
        }
        let mut g = self.constant(self.base().inv(c0)?);
        let two = self.from_i64(2);
        let mut m = 1;
        while m < n {
            let m2 = (2 * m).min(n);
            let t = self.sub(&two, &self.mullow(f, &g, m2));
            g = self.mullow(&g, &t, m2);
            trace!(terms = m2, "inverse series doubling step");
            m = m2;
        }
        Ok(g)
    }

    /// Power series quotient `a / f` modulo `x^n`.
    pub fn div_series(
        &self,
        a: &Polynomial<R::Elem>,
        f: &Polynomial<R::Elem>,
        n: usize,
    ) -> RingResult<Polynomial<R::Elem>> {
        let inv = self.inv_series(f, n)?;
        Ok(self.mullow(a, &inv, n))
    }
}
