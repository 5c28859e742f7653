//! The generic ring interface.
//!
//! A context value describes a structure (ℤ, ℚ, ℤ/nℤ, a quotient ring, a
//! ball field at some precision) and every element is meaningless without
//! its context: generic algorithms receive the context by reference and
//! address elements only through it. Contexts are immutable for the
//! duration of any call and cheap to clone or share.
//!
//! Totality is part of each method's contract. The four arithmetic
//! operations always produce an element (ball contexts absorb domain
//! problems into indeterminate enclosures); the predicates answer in
//! three-valued [`Truth`]; inversion and division are the genuinely
//! fallible operations and return [`RingResult`].

use core::fmt;

use crate::status::{RingResult, Truth};

/// A ring context: the structure elements live in and the operations
/// they support.
pub trait Ring {
    /// The element representation for this context.
    type Elem: Clone + fmt::Debug;

    /// The additive identity.
    fn zero(&self) -> Self::Elem;

    /// The multiplicative identity.
    fn one(&self) -> Self::Elem;

    /// The canonical image of a machine integer.
    fn from_i64(&self, n: i64) -> Self::Elem;

    /// Addition (total).
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Subtraction (total).
    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Negation (total).
    fn neg(&self, a: &Self::Elem) -> Self::Elem;

    /// Multiplication (total).
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Is this element zero? Semi-decidable.
    fn is_zero(&self, a: &Self::Elem) -> Truth;

    /// Is this element one? Semi-decidable.
    fn is_one(&self, a: &Self::Elem) -> Truth {
        self.equal(a, &self.one())
    }

    /// Are the two elements equal? Semi-decidable.
    fn equal(&self, a: &Self::Elem, b: &Self::Elem) -> Truth;

    /// The multiplicative inverse. `Domain` when the element is provably
    /// not a unit, `Unable` when unit-ness cannot be decided.
    fn inv(&self, a: &Self::Elem) -> RingResult<Self::Elem>;

    /// Division. Follows the same error contract as [`Ring::inv`].
    fn div(&self, a: &Self::Elem, b: &Self::Elem) -> RingResult<Self::Elem>;

    /// `a^e` by binary powering; `a^0` is one.
    fn pow_u64(&self, a: &Self::Elem, mut e: u64) -> Self::Elem {
        let mut result = self.one();
        let mut base = a.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.mul(&base, &base);
            }
        }
        result
    }
}
