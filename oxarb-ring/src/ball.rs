//! Ball fields: ℝ and ℂ at a fixed working precision.
//!
//! The context carries the precision so that generic algorithms stay
//! precision-oblivious. This is also the layer boundary for error
//! reporting: the ball types themselves absorb domain problems into
//! indeterminate enclosures, while these contexts answer with tri-state
//! statuses. A divisor that is the exact zero is a `Domain` error; a
//! divisor that merely straddles zero is `Unable`, because refining the
//! enclosure could still prove it invertible.

use oxarb_core::{ComplexBall, RealBall, PREC_EXACT};

use crate::ring::Ring;
use crate::status::{RingError, RingResult, Truth};

/// Real balls at a fixed working precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RealBallField {
    prec: u32,
}

impl RealBallField {
    /// A context working at `prec` bits (at least 2, below the exact
    /// sentinel).
    pub fn new(prec: u32) -> Self {
        RealBallField {
            prec: prec.clamp(2, PREC_EXACT - 1),
        }
    }

    /// The working precision in bits.
    pub fn prec(&self) -> u32 {
        self.prec
    }

    fn zero_status(x: &RealBall) -> Truth {
        if x.is_zero() {
            Truth::True
        } else if !x.contains_zero() {
            Truth::False
        } else {
            Truth::Unknown
        }
    }
}

impl Ring for RealBallField {
    type Elem = RealBall;

    fn zero(&self) -> RealBall {
        RealBall::zero()
    }

    fn one(&self) -> RealBall {
        RealBall::one()
    }

    fn from_i64(&self, n: i64) -> RealBall {
        RealBall::from_i64(n)
    }

    fn add(&self, a: &RealBall, b: &RealBall) -> RealBall {
        a.add(b, self.prec)
    }

    fn sub(&self, a: &RealBall, b: &RealBall) -> RealBall {
        a.sub(b, self.prec)
    }

    fn neg(&self, a: &RealBall) -> RealBall {
        a.neg()
    }

    fn mul(&self, a: &RealBall, b: &RealBall) -> RealBall {
        a.mul(b, self.prec)
    }

    fn is_zero(&self, a: &RealBall) -> Truth {
        Self::zero_status(a)
    }

    fn is_one(&self, a: &RealBall) -> Truth {
        if a.is_one() {
            return Truth::True;
        }
        Self::zero_status(&a.sub_i64(1, PREC_EXACT))
    }

    fn equal(&self, a: &RealBall, b: &RealBall) -> Truth {
        Self::zero_status(&a.sub(b, PREC_EXACT))
    }

    fn inv(&self, a: &RealBall) -> RingResult<RealBall> {
        match Self::zero_status(a) {
            Truth::True => Err(RingError::Domain),
            Truth::Unknown => Err(RingError::Unable),
            Truth::False => Ok(a.inv(self.prec)),
        }
    }

    fn div(&self, a: &RealBall, b: &RealBall) -> RingResult<RealBall> {
        match Self::zero_status(b) {
            Truth::True => Err(RingError::Domain),
            Truth::Unknown => Err(RingError::Unable),
            Truth::False => Ok(a.div(b, self.prec)),
        }
    }

    fn pow_u64(&self, a: &RealBall, e: u64) -> RealBall {
        a.pow_u64(e, self.prec)
    }
}

/// Complex balls at a fixed working precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplexBallField {
    prec: u32,
}

impl ComplexBallField {
    /// A context working at `prec` bits (at least 2, below the exact
    /// sentinel).
    pub fn new(prec: u32) -> Self {
        ComplexBallField {
            prec: prec.clamp(2, PREC_EXACT - 1),
        }
    }

    /// The working precision in bits.
    pub fn prec(&self) -> u32 {
        self.prec
    }

    fn zero_status(z: &ComplexBall) -> Truth {
        if z.is_zero() {
            Truth::True
        } else if !z.contains_zero() {
            Truth::False
        } else {
            Truth::Unknown
        }
    }
}

impl Ring for ComplexBallField {
    type Elem = ComplexBall;

    fn zero(&self) -> ComplexBall {
        ComplexBall::zero()
    }

    fn one(&self) -> ComplexBall {
        ComplexBall::one()
    }

    fn from_i64(&self, n: i64) -> ComplexBall {
        ComplexBall::from_i64(n)
    }

    fn add(&self, a: &ComplexBall, b: &ComplexBall) -> ComplexBall {
        a.add(b, self.prec)
    }

    fn sub(&self, a: &ComplexBall, b: &ComplexBall) -> ComplexBall {
        a.sub(b, self.prec)
    }

    fn neg(&self, a: &ComplexBall) -> ComplexBall {
        a.neg()
    }

    fn mul(&self, a: &ComplexBall, b: &ComplexBall) -> ComplexBall {
        a.mul(b, self.prec)
    }

    fn is_zero(&self, a: &ComplexBall) -> Truth {
        Self::zero_status(a)
    }

    fn is_one(&self, a: &ComplexBall) -> Truth {
        if a.is_one() {
            return Truth::True;
        }
        Self::zero_status(&a.sub_i64(1, PREC_EXACT))
    }

    fn equal(&self, a: &ComplexBall, b: &ComplexBall) -> Truth {
        Self::zero_status(&a.sub(b, PREC_EXACT))
    }

    fn inv(&self, a: &ComplexBall) -> RingResult<ComplexBall> {
        match Self::zero_status(a) {
            Truth::True => Err(RingError::Domain),
            Truth::Unknown => Err(RingError::Unable),
            Truth::False => Ok(a.inv(self.prec)),
        }
    }

    fn div(&self, a: &ComplexBall, b: &ComplexBall) -> RingResult<ComplexBall> {
        match Self::zero_status(b) {
            Truth::True => Err(RingError::Domain),
            Truth::Unknown => Err(RingError::Unable),
            Truth::False => Ok(a.div(b, self.prec)),
        }
    }

    fn pow_u64(&self, a: &ComplexBall, e: u64) -> ComplexBall {
        a.pow_u64(e, self.prec)
    }
}
