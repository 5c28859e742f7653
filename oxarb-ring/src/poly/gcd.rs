//! Greatest common divisors over a field.
//!
//! The remainder chain needs invertible leading coefficients at every
//! step, so these routines are intended for field coefficients. Results
//! are normalized monic; gcd(0, 0) is the zero polynomial.

use crate::ring::Ring;
use crate::status::RingResult;

use super::{PolyRing, Polynomial};

impl<R: Ring> PolyRing<R> {
    /// Monic greatest common divisor by the Euclidean algorithm.
    pub fn gcd(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<Polynomial<R::Elem>> {
        let mut u = a.clone();
        let mut v = b.clone();
        while !v.is_empty() {
            let r = self.rem(&u, &v)?;
            u = std::mem::replace(&mut v, r);
        }
        if u.is_empty() {
            Ok(u)
        } else {
            self.make_monic(&u)
        }
    }

    /// Extended Euclidean algorithm: returns `(g, s, t)` with
    /// `s·a + t·b = g` and `g` monic.
    pub fn xgcd(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
    ) -> RingResult<(Polynomial<R::Elem>, Polynomial<R::Elem>, Polynomial<R::Elem>)> {
        let mut r0 = a.clone();
        let mut s0 = self.one();
        let mut t0 = self.zero();
        let mut r1 = b.clone();
        let mut s1 = self.zero();
        let mut t1 = self.one();
        while !r1.is_empty() {
            let (q, r) = self.divrem(&r0, &r1)?;
            let s = self.sub(&s0, &self.mul(&q, &s1));
            let t = self.sub(&t0, &self.mul(&q, &t1));
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
            t0 = std::mem::replace(&mut t1, t);
        }
        let Some(lead) = r0.leading() else {
            // both inputs zero
            return Ok((r0, s0, t0));
        };
        let c = self.base().inv(lead)?;
        Ok((
            self.scalar_mul(&r0, &c),
            self.scalar_mul(&s0, &c),
            self.scalar_mul(&t0, &c),
        ))
    }
}
