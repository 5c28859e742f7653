//! Tri-state decidability and the ring error taxonomy.
//!
//! Predicates over rings with inexact or undecidable elements cannot
//! always answer yes or no; [`Truth`] carries the honest third answer.
//! Fallible operations distinguish "provably impossible in this
//! structure" ([`RingError::Domain`]) from "cannot be decided with the
//! available information" ([`RingError::Unable`]); the latter must
//! propagate unchanged through composite operations, which is exactly
//! what `?` does with [`RingResult`].

use thiserror::Error;

/// Answer of a semi-decidable predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Truth {
    /// Provably holds.
    True,
    /// Provably fails.
    False,
    /// Cannot be decided with the available information.
    Unknown,
}

impl Truth {
    /// Lift a decided answer.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        if b {
            Truth::True
        } else {
            Truth::False
        }
    }

    /// The decided answer, if there is one.
    #[inline]
    pub fn to_bool(self) -> Option<bool> {
        match self {
            Truth::True => Some(true),
            Truth::False => Some(false),
            Truth::Unknown => None,
        }
    }

    /// True exactly for `Truth::True`.
    #[inline]
    pub fn is_true(self) -> bool {
        self == Truth::True
    }

    /// True exactly for `Truth::False`.
    #[inline]
    pub fn is_false(self) -> bool {
        self == Truth::False
    }

    /// True exactly for `Truth::Unknown`.
    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Truth::Unknown
    }

    /// Three-valued negation; `Unknown` stays `Unknown`.
    #[inline]
    pub fn not(self) -> Self {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
        }
    }

    /// Three-valued conjunction; `False` dominates `Unknown`.
    pub fn and(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::True, Truth::True) => Truth::True,
            _ => Truth::Unknown,
        }
    }

    /// Three-valued disjunction; `True` dominates `Unknown`.
    pub fn or(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Truth::True, _) | (_, Truth::True) => Truth::True,
            (Truth::False, Truth::False) => Truth::False,
            _ => Truth::Unknown,
        }
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        Truth::from_bool(b)
    }
}

/// Error type for generic ring operations
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingError {
    /// The operation is provably impossible in this structure, such as
    /// inverting zero or a non-unit.
    #[error("operation is undefined in this structure")]
    Domain,
    /// The structure cannot decide the operation with the available
    /// information, such as inverting a ball that straddles zero.
    #[error("operation could not be decided")]
    Unable,
}

/// Result type for generic ring operations
pub type RingResult<T> = Result<T, RingError>;
