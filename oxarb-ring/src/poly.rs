//! Dense univariate polynomials over a generic ring.
//!
//! Coefficients are stored lowest degree first; the logical length is
//! the vector length. Normalization trims only provably zero leading
//! coefficients, so a coefficient whose zero test answers `Unknown` is
//! retained and the polynomial keeps its conservative length. All
//! algorithms live on [`PolyRing`], which packages the base context and
//! implements each algorithm once for every ring; `PolyRing` also
//! implements [`Ring`] itself, so polynomial rings nest and quotient
//! rings can be built over them.
//!
//! ## References
//!
//! - von zur Gathen & Gerhard: "Modern Computer Algebra" (3rd ed.),
//!   chapters 2 and 9 (classical and Newton division)

use crate::ring::Ring;
use crate::status::{RingError, RingResult, Truth};

pub mod divide;
pub mod factor;
pub mod gcd;
pub mod series;

/// A dense univariate polynomial, lowest degree first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T> Polynomial<T> {
    /// The zero polynomial (no coefficients).
    pub fn zero() -> Self {
        Polynomial { coeffs: Vec::new() }
    }

    /// Wrap raw coefficients without normalizing. Ring operations
    /// normalize their results; build through [`PolyRing::poly`] when
    /// eager normalization is wanted.
    pub fn from_coeffs(coeffs: Vec<T>) -> Self {
        Polynomial { coeffs }
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// True for the zero polynomial.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// The coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// The coefficient of `x^i`, if stored.
    pub fn coeff(&self, i: usize) -> Option<&T> {
        self.coeffs.get(i)
    }

    /// The leading coefficient, if any.
    pub fn leading(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Take the coefficients out.
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Polynomial::zero()
    }
}

/// A univariate polynomial ring over a base context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolyRing<R: Ring> {
    base: R,
}

impl<R: Ring> PolyRing<R> {
    /// Wrap a base context.
    pub fn new(base: R) -> Self {
        PolyRing { base }
    }

    /// The base context.
    pub fn base(&self) -> &R {
        &self.base
    }

    /// Normalized polynomial from raw coefficients, lowest degree first.
    pub fn poly(&self, coeffs: Vec<R::Elem>) -> Polynomial<R::Elem> {
        let mut p = Polynomial::from_coeffs(coeffs);
        self.normalize(&mut p);
        p
    }

    /// Constant polynomial.
    pub fn constant(&self, c: R::Elem) -> Polynomial<R::Elem> {
        self.poly(vec![c])
    }

    /// The generator x.
    pub fn gen(&self) -> Polynomial<R::Elem> {
        self.poly(vec![self.base.zero(), self.base.one()])
    }

    /// Polynomial with machine-integer coefficients, lowest degree first.
    pub fn poly_i64(&self, coeffs: &[i64]) -> Polynomial<R::Elem> {
        self.poly(coeffs.iter().map(|&n| self.base.from_i64(n)).collect())
    }

    /// Pop leading coefficients that are provably zero.
    pub(crate) fn normalize(&self, p: &mut Polynomial<R::Elem>) {
        while let Some(lead) = p.coeffs.last() {
            if self.base.is_zero(lead).is_true() {
                p.coeffs.pop();
            } else {
                break;
            }
        }
    }

    /// Multiply every coefficient by `c`.
    pub fn scalar_mul(&self, p: &Polynomial<R::Elem>, c: &R::Elem) -> Polynomial<R::Elem> {
        self.poly(p.coeffs.iter().map(|v| self.base.mul(v, c)).collect())
    }

    /// The product truncated to `n` low-order coefficients.
    pub fn mullow(
        &self,
        a: &Polynomial<R::Elem>,
        b: &Polynomial<R::Elem>,
        n: usize,
    ) -> Polynomial<R::Elem> {
        if a.is_empty() || b.is_empty() || n == 0 {
            return Polynomial::zero();
        }
        let len = n.min(a.len() + b.len() - 1);
        let mut c = vec![self.base.zero(); len];
        for (i, x) in a.coeffs.iter().enumerate().take(len) {
            for (j, y) in b.coeffs.iter().enumerate().take(len - i) {
                c[i + j] = self.base.add(&c[i + j], &self.base.mul(x, y));
            }
        }
        self.poly(c)
    }

    /// The polynomial modulo `x^n`.
    pub fn truncate(&self, p: &Polynomial<R::Elem>, n: usize) -> Polynomial<R::Elem> {
        self.poly(p.coeffs[..p.len().min(n)].to_vec())
    }

    /// Horner evaluation at `x`.
    pub fn evaluate(&self, p: &Polynomial<R::Elem>, x: &R::Elem) -> R::Elem {
        let mut acc = self.base.zero();
        for c in p.coeffs.iter().rev() {
            acc = self.base.add(&self.base.mul(&acc, x), c);
        }
        acc
    }

    /// Formal derivative.
    pub fn derivative(&self, p: &Polynomial<R::Elem>) -> Polynomial<R::Elem> {
        if p.len() < 2 {
            return Polynomial::zero();
        }
        let c = p
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, v)| self.base.mul(v, &self.base.from_i64(i as i64)))
            .collect();
        self.poly(c)
    }

    /// Antiderivative with zero constant term. `Domain` when some
    /// coefficient is not divisible by its new index (e.g. over ℤ).
    pub fn integral(&self, p: &Polynomial<R::Elem>) -> RingResult<Polynomial<R::Elem>> {
        if p.is_empty() {
            return Ok(Polynomial::zero());
        }
        let mut c = Vec::with_capacity(p.len() + 1);
        c.push(self.base.zero());
        for (i, v) in p.coeffs.iter().enumerate() {
            c.push(self.base.div(v, &self.base.from_i64((i + 1) as i64))?);
        }
        Ok(self.poly(c))
    }

    /// Reversal into a window of `n` coefficients: coefficient `j` moves
    /// to position `n - 1 - j`, missing positions are filled with zeros.
    pub fn reverse(&self, p: &Polynomial<R::Elem>, n: usize) -> Polynomial<R::Elem> {
        let mut c = vec![self.base.zero(); n];
        for (j, v) in p.coeffs.iter().take(n).enumerate() {
            c[n - 1 - j] = v.clone();
        }
        self.poly(c)
    }

    /// Multiplication by `x^k`.
    pub fn shift_left(&self, p: &Polynomial<R::Elem>, k: usize) -> Polynomial<R::Elem> {
        if p.is_empty() {
            return Polynomial::zero();
        }
        let mut c = vec![self.base.zero(); k];
        c.extend(p.coeffs.iter().cloned());
        self.poly(c)
    }

    /// Semi-decidable equality with the longer-tail-must-be-zero rule.
    pub fn check_equal(&self, a: &Polynomial<R::Elem>, b: &Polynomial<R::Elem>) -> Truth {
        let min = a.len().min(b.len());
        let mut t = Truth::True;
        for i in 0..min {
            t = t.and(self.base.equal(&a.coeffs[i], &b.coeffs[i]));
            if t.is_false() {
                return Truth::False;
            }
        }
        let tail = if a.len() > min {
            &a.coeffs[min..]
        } else {
            &b.coeffs[min..]
        };
        for c in tail {
            t = t.and(self.base.is_zero(c));
            if t.is_false() {
                return Truth::False;
            }
        }
        t
    }

    /// True when the leading coefficient is provably nonzero; the zero
    /// polynomial counts as proper.
    pub fn is_proper(&self, p: &Polynomial<R::Elem>) -> bool {
        match p.leading() {
            None => true,
            Some(lead) => self.base.is_zero(lead).is_false(),
        }
    }

    /// Scale so the leading coefficient becomes one. `Domain` for the
    /// zero polynomial or a non-unit leading coefficient.
    pub fn make_monic(&self, p: &Polynomial<R::Elem>) -> RingResult<Polynomial<R::Elem>> {
        let Some(lead) = p.leading() else {
            return Err(RingError::Domain);
        };
        if self.base.is_one(lead).is_true() {
            return Ok(p.clone());
        }
        let inv = self.base.inv(lead)?;
        Ok(self.scalar_mul(p, &inv))
    }
}

impl<R: Ring> Ring for PolyRing<R> {
    type Elem = Polynomial<R::Elem>;

    fn zero(&self) -> Self::Elem {
        Polynomial::zero()
    }

    fn one(&self) -> Self::Elem {
        self.constant(self.base.one())
    }

    fn from_i64(&self, n: i64) -> Self::Elem {
        self.constant(self.base.from_i64(n))
    }

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let min = a.len().min(b.len());
        let mut c = Vec::with_capacity(a.len().max(b.len()));
        for i in 0..min {
            c.push(self.base.add(&a.coeffs[i], &b.coeffs[i]));
        }
        c.extend(a.coeffs[min..].iter().cloned());
        c.extend(b.coeffs[min..].iter().cloned());
        self.poly(c)
    }

    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let min = a.len().min(b.len());
        let mut c = Vec::with_capacity(a.len().max(b.len()));
        for i in 0..min {
            c.push(self.base.sub(&a.coeffs[i], &b.coeffs[i]));
        }
        c.extend(a.coeffs[min..].iter().cloned());
        c.extend(b.coeffs[min..].iter().map(|v| self.base.neg(v)));
        self.poly(c)
    }

    fn neg(&self, a: &Self::Elem) -> Self::Elem {
        self.poly(a.coeffs.iter().map(|v| self.base.neg(v)).collect())
    }

    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        if a.is_empty() || b.is_empty() {
            return Polynomial::zero();
        }
        let mut c = vec![self.base.zero(); a.len() + b.len() - 1];
        for (i, x) in a.coeffs.iter().enumerate() {
            for (j, y) in b.coeffs.iter().enumerate() {
                c[i + j] = self.base.add(&c[i + j], &self.base.mul(x, y));
            }
        }
        self.poly(c)
    }

    fn is_zero(&self, p: &Self::Elem) -> Truth {
        let mut t = Truth::True;
        for c in &p.coeffs {
            t = t.and(self.base.is_zero(c));
            if t.is_false() {
                return Truth::False;
            }
        }
        t
    }

    fn equal(&self, a: &Self::Elem, b: &Self::Elem) -> Truth {
        self.check_equal(a, b)
    }

    /// Inverts constants; anything of higher degree is not a unit.
    fn inv(&self, p: &Self::Elem) -> RingResult<Self::Elem> {
        match p.len() {
            0 => Err(RingError::Domain),
            1 => Ok(self.constant(self.base.inv(&p.coeffs[0])?)),
            _ => match p.leading() {
                // definite degree >= 1: provably not a unit
                Some(lead) if self.base.is_zero(lead).is_false() => Err(RingError::Domain),
                // the true degree itself is unknown
                _ => Err(RingError::Unable),
            },
        }
    }

    /// Exact division: the remainder must be provably zero.
    fn div(&self, a: &Self::Elem, b: &Self::Elem) -> RingResult<Self::Elem> {
        let (q, r) = self.divrem(a, b)?;
        match self.is_zero(&r) {
            Truth::True => Ok(q),
            Truth::False => Err(RingError::Domain),
            Truth::Unknown => Err(RingError::Unable),
        }
    }
}
