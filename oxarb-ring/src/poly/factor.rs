//! Squarefree factorization by Yun's algorithm.
//!
//! ## Algorithms
//!
//! Over a field of characteristic zero every nonzero f splits as
//! c·∏ fᵢ^i with the fᵢ monic, squarefree and pairwise coprime. Yun's
//! algorithm peels the fᵢ off with one gcd of f and f' up front and one
//! gcd per factor after that, which is cheaper than repeated full
//! gcd-and-divide rounds.
//!
//! ## References
//!
//! - Yun: "On square-free decomposition algorithms" (SYMSAC 1976)

use crate::ring::Ring;
use crate::status::{RingError, RingResult};

use super::{PolyRing, Polynomial};

impl<R: Ring> PolyRing<R> {
    /// Squarefree decomposition `f = c · ∏ fᵢ^{mᵢ}` with monic fᵢ and
    /// strictly increasing multiplicities. `Domain` for the zero
    /// polynomial. Assumes field coefficients of characteristic zero.
    #[allow(clippy::type_complexity)]
    pub fn factor_squarefree(
        &self,
        f: &Polynomial<R::Elem>,
    ) -> RingResult<(R::Elem, Vec<(Polynomial<R::Elem>, u64)>)> {
        let Some(lead) = f.leading() else {
            return Err(RingError::Domain);
        };
        let content = lead.clone();
        if f.len() == 1 {
            return Ok((content, Vec::new()));
        }
        let monic = self.make_monic(f)?;
        let deriv = self.derivative(&monic);
        let d = self.gcd(&monic, &deriv)?;
        if d.len() <= 1 {
            return Ok((content, vec![(monic, 1)]));
        }
        let mut w = self.div(&monic, &d)?;
        let mut y = self.div(&deriv, &d)?;
        let mut z = self.sub(&y, &self.derivative(&w));
        let mut factors = Vec::new();
        let mut multiplicity: u64 = 1;
        while w.len() > 1 {
            let g = self.gcd(&w, &z)?;
            if g.len() > 1 {
                factors.push((g.clone(), multiplicity));
            }
            w = self.div(&w, &g)?;
            y = self.div(&z, &g)?;
            z = self.sub(&y, &self.derivative(&w));
            multiplicity += 1;
        }
        Ok((content, factors))
    }
}
