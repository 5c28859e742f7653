//! Quotient rings `R[x]/(m)` with canonical remainder representatives.
//!
//! The modulus is validated once at construction and the inverse of its
//! leading coefficient is cached, so reduction never has to re-derive
//! or re-check anything on the hot path. Elements are polynomials of
//! degree below the modulus; every multiplicative operation reduces its
//! result back to that window.
//!
//! Two aliases cover the common instantiations: [`ExtensionField`] for
//! 𝔽_p[x]/(m) and [`NumberField`] for ℚ[x]/(m).

use crate::modular::ModularRing;
use crate::poly::{PolyRing, Polynomial};
use crate::rational::Rationals;
use crate::ring::Ring;
use crate::status::{RingError, RingResult, Truth};

/// The ring `R[x]/(m)` for a fixed modulus of degree at least one.
#[derive(Clone, Debug)]
pub struct QuotientRing<R: Ring> {
    poly_ring: PolyRing<R>,
    modulus: Polynomial<R::Elem>,
    inv_leading: R::Elem,
}

/// A finite field extension 𝔽_p[x]/(m).
pub type ExtensionField = QuotientRing<ModularRing>;

/// An algebraic number field ℚ[x]/(m).
pub type NumberField = QuotientRing<Rationals>;

impl<R: Ring> QuotientRing<R> {
    /// Build `R[x]/(m)`.
    ///
    /// `Domain` when the modulus normalizes to degree below one,
    /// `Unable` when its leading coefficient cannot be proven nonzero.
    /// The leading coefficient must also be invertible in the base.
    pub fn new(base: R, modulus: Polynomial<R::Elem>) -> RingResult<Self> {
        let poly_ring = PolyRing::new(base);
        let mut m = modulus;
        poly_ring.normalize(&mut m);
        if m.len() < 2 {
            return Err(RingError::Domain);
        }
        let Some(lead) = m.leading() else {
            return Err(RingError::Domain);
        };
        if !poly_ring.base().is_zero(lead).is_false() {
            return Err(RingError::Unable);
        }
        let inv_leading = poly_ring.base().inv(lead)?;
        Ok(QuotientRing {
            poly_ring,
            modulus: m,
            inv_leading,
        })
    }

    /// The base coefficient context.
    pub fn base(&self) -> &R {
        self.poly_ring.base()
    }

    /// The underlying polynomial ring.
    pub fn poly_ring(&self) -> &PolyRing<R> {
        &self.poly_ring
    }

    /// The defining modulus, normalized.
    pub fn modulus(&self) -> &Polynomial<R::Elem> {
        &self.modulus
    }

    /// Canonical representative: the remainder of `p` modulo the
    /// modulus. Total thanks to the cached leading inverse.
    pub fn reduce(&self, p: &Polynomial<R::Elem>) -> Polynomial<R::Elem> {
        self.poly_ring
            .divrem_basecase_with_inv(p, &self.modulus, &self.inv_leading)
            .1
    }

    /// The residue class of the generator x.
    pub fn gen(&self) -> Polynomial<R::Elem> {
        self.reduce(&self.poly_ring.gen())
    }

    /// The residue class of a polynomial given by machine-integer
    /// coefficients, lowest degree first.
    pub fn element_i64(&self, coeffs: &[i64]) -> Polynomial<R::Elem> {
        self.reduce(&self.poly_ring.poly_i64(coeffs))
    }
}

impl<R: Ring> Ring for QuotientRing<R> {
    type Elem = Polynomial<R::Elem>;

    fn zero(&self) -> Self::Elem {
        Polynomial::zero()
    }

    fn one(&self) -> Self::Elem {
        // the modulus has degree >= 1, so constants are already reduced
        self.poly_ring.one()
    }

    fn from_i64(&self, n: i64) -> Self::Elem {
        self.reduce(&self.poly_ring.from_i64(n))
    }

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.poly_ring.add(a, b)
    }

    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.poly_ring.sub(a, b)
    }

    fn neg(&self, a: &Self::Elem) -> Self::Elem {
        self.poly_ring.neg(a)
    }

    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.reduce(&self.poly_ring.mul(a, b))
    }

    fn is_zero(&self, a: &Self::Elem) -> Truth {
        self.poly_ring.is_zero(a)
    }

    fn equal(&self, a: &Self::Elem, b: &Self::Elem) -> Truth {
        self.poly_ring.check_equal(a, b)
    }

    /// Inversion through the extended GCD with the modulus: from
    /// `s·a + t·m = 1` the cofactor `s` is the inverse. A nontrivial
    /// common factor means `a` is a zero divisor.
    fn inv(&self, a: &Self::Elem) -> RingResult<Self::Elem> {
        let (g, s, _) = self.poly_ring.xgcd(a, &self.modulus)?;
        if g.len() == 1 {
            Ok(self.reduce(&s))
        } else {
            Err(RingError::Domain)
        }
    }

    fn div(&self, a: &Self::Elem, b: &Self::Elem) -> RingResult<Self::Elem> {
        let inv = self.inv(b)?;
        Ok(self.mul(a, &inv))
    }
}
