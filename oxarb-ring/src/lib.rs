//! OxArb Ring - Generic Ring Contexts and Polynomials
//!
//! This crate layers exact and semi-exact algebraic structures on top of
//! the ball arithmetic in `oxarb-core`:
//! - [`Ring`]: the context trait every generic algorithm is written
//!   against, with three-valued predicates ([`Truth`]) and fallible
//!   inversion ([`RingResult`])
//! - [`Integers`], [`Rationals`], [`ModularRing`]: exact base contexts
//! - [`RealBallField`], [`ComplexBallField`]: ball coefficients at a
//!   fixed working precision, where predicates may answer `Unknown`
//! - [`PolyRing`] / [`Polynomial`]: dense univariate polynomials with
//!   basecase and Newton division, power series inversion, GCDs and
//!   squarefree factorization
//! - [`QuotientRing`]: `R[x]/(m)` with cached reduction data, including
//!   the [`ExtensionField`] and [`NumberField`] instantiations
//!
//! The design rule throughout: operations never guess. A predicate that
//! cannot be decided at the current precision answers `Unknown`, and an
//! operation that would have to guess returns `Unable` instead of a
//! possibly wrong result.
//!
//! # Examples
//!
//! ## Polynomial division over ℚ
//!
//! ```
//! use oxarb_ring::{PolyRing, Rationals};
//!
//! let rx = PolyRing::new(Rationals);
//! let a = rx.poly_i64(&[-1, 0, 0, 1]); // x^3 - 1
//! let b = rx.poly_i64(&[-1, 1]); // x - 1
//!
//! let (q, r) = rx.divrem(&a, &b).unwrap();
//! assert_eq!(q, rx.poly_i64(&[1, 1, 1]));
//! assert!(r.is_empty());
//! ```
//!
//! ## Ball coefficients stay honest
//!
//! ```
//! use oxarb_core::RealBall;
//! use oxarb_ring::{PolyRing, RealBallField, Ring};
//!
//! let bx = PolyRing::new(RealBallField::new(53));
//! let third = RealBall::from_i64(1).div(&RealBall::from_i64(3), 53);
//! let p = bx.poly(vec![third, RealBall::one()]);
//! let q = bx.mul(&p, &p);
//!
//! // enclosures of 1/3 are inexact, so equality cannot be decided
//! assert!(bx.equal(&q, &q).is_unknown());
//! ```
//!
//! ## Arithmetic in ℚ(√2)
//!
//! ```
//! use oxarb_ring::{NumberField, PolyRing, QuotientRing, Rationals, Ring};
//!
//! let px = PolyRing::new(Rationals);
//! let k: NumberField = QuotientRing::new(Rationals, px.poly_i64(&[-2, 0, 1])).unwrap();
//! let sqrt2 = k.gen();
//!
//! assert!(k.equal(&k.mul(&sqrt2, &sqrt2), &k.from_i64(2)).is_true());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ball;
pub mod integer;
pub mod modular;
pub mod poly;
pub mod quotient;
pub mod rational;
pub mod ring;
pub mod status;

pub use ball::{ComplexBallField, RealBallField};
pub use integer::Integers;
pub use modular::ModularRing;
pub use poly::{PolyRing, Polynomial};
pub use quotient::{ExtensionField, NumberField, QuotientRing};
pub use rational::Rationals;
pub use ring::Ring;
pub use status::{RingError, RingResult, Truth};
