//! OxArb Core - Rigorous Ball Arithmetic over Arbitrary Precision
//!
//! This crate provides the numeric foundation for the OxArb computer algebra
//! workspace:
//! - [`Float`]: arbitrary-precision binary floating point with explicit
//!   rounding modes and unbounded exponents
//! - [`Magnitude`]: low-precision non-negative upper bounds used as radii
//! - [`RealBall`]: real numbers as midpoint-radius enclosures
//! - [`ComplexBall`]: complex numbers as pairs of real balls
//! - [`vec`]: batched operations over slices of balls
//! - Elementary functions (`exp`, `sin`/`cos`, `sqrt`, `hypot`, pi) with
//!   proven error bounds
//!
//! Every operation takes the working precision as an explicit argument and
//! returns an enclosure that is guaranteed to contain the exact mathematical
//! result for any points inside the input enclosures. Domain violations
//! (division by a ball containing zero, square root of a possibly negative
//! ball) produce indeterminate enclosures rather than errors.
//!
//! # Examples
//!
//! ## Ball arithmetic keeps the exact answer inside
//!
//! ```
//! use oxarb_core::RealBall;
//! use num_bigint::BigInt;
//!
//! let x = RealBall::from_i64(2);
//! let y = RealBall::from_i64(3);
//! let z = x.mul(&y, 53);
//!
//! assert!(z.contains_bigint(&BigInt::from(6)));
//! assert!(z.is_exact());
//! ```
//!
//! ## Uncertain inputs propagate their radius
//!
//! ```
//! use oxarb_core::{Float, Magnitude, RealBall};
//!
//! // x = [2 +/- 0.25], y = [3 +/- 0.25]
//! let x = RealBall::from_mid_rad(Float::from_i64(2), Magnitude::pow2(-2));
//! let y = RealBall::from_mid_rad(Float::from_i64(3), Magnitude::pow2(-2));
//! let z = x.mul(&y, 53);
//!
//! // every product of representatives stays inside z
//! assert!(z.contains(&RealBall::from_i64(6)));
//! assert!(!z.is_exact());
//! ```
//!
//! ## Elementary functions enclose transcendental values
//!
//! ```
//! use oxarb_core::RealBall;
//!
//! let pi = RealBall::const_pi(64);
//! let s = pi.sin(64);
//!
//! // sin(pi) is exactly zero, and the enclosure knows it is tiny
//! assert!(s.contains_zero());
//! assert!(s.rad().cmp(&oxarb_core::Magnitude::pow2(-50)).is_le());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod complex;
pub mod float;
pub mod fmt;
pub mod magnitude;
pub mod real;
pub mod tunables;
pub mod vec;

mod elementary;

pub use complex::ComplexBall;
pub use float::{Float, Round, PREC_EXACT};
pub use magnitude::{Magnitude, MAG_PRECISION};
pub use real::RealBall;
