//! The scalar tower.
//!
//! Every atomic value is a [`Scalar`]: a character, a real number in one of
//! four representations ([`Real`]), or a [`Complex`] whose parts are reals.
//! Representations are ordered by [`Rank`]:
//!
//! ```text
//! Char < Int < BigInt < BigRat < BigFloat < Complex
//! ```
//!
//! Binary operations first [`promote`] both operands to the higher rank,
//! compute there, then [`Scalar::shrink`] the result back to the lowest rank
//! that represents it exactly.

mod arith;
mod display;
mod float;
mod promote;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use crate::context::Context;
use crate::error::{CoreError, Result};

pub use arith::{add, div, mul, neg, sub};
pub use float::BigFloat;
pub use promote::promote;

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// Position of a representation in the promotion hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Char,
    Int,
    BigInt,
    BigRat,
    BigFloat,
    Complex,
}

// ---------------------------------------------------------------------------
// Real
// ---------------------------------------------------------------------------

/// A real number in one of the four numeric representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Real {
    Int(i64),
    BigInt(BigInt),
    BigRat(BigRational),
    BigFloat(BigFloat),
}

impl Real {
    pub fn rank(&self) -> Rank {
        match self {
            Real::Int(_) => Rank::Int,
            Real::BigInt(_) => Rank::BigInt,
            Real::BigRat(_) => Rank::BigRat,
            Real::BigFloat(_) => Rank::BigFloat,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Real::Int(v) => *v == 0,
            Real::BigInt(v) => v.is_zero(),
            Real::BigRat(v) => v.is_zero(),
            Real::BigFloat(v) => v.is_zero(),
        }
    }

    /// Exact rational value. Never loses precision.
    pub fn to_rational(&self) -> BigRational {
        match self {
            Real::Int(v) => BigRational::from_integer(BigInt::from(*v)),
            Real::BigInt(v) => BigRational::from_integer(v.clone()),
            Real::BigRat(v) => v.clone(),
            Real::BigFloat(v) => v.to_rational(),
        }
    }

    /// Exact integer value, if the value is integral.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Real::Int(v) => Some(BigInt::from(*v)),
            Real::BigInt(v) => Some(v.clone()),
            Real::BigRat(v) if v.is_integer() => Some(v.to_integer()),
            Real::BigRat(_) => None,
            Real::BigFloat(v) => v.to_bigint(),
        }
    }

    /// Coerce upward to `rank`. `prec` is the float precision in bits.
    ///
    /// Returns `None` when `rank` is below this value's rank or is not a real
    /// representation.
    pub fn to_rank(&self, rank: Rank, prec: u32) -> Option<Real> {
        if rank < self.rank() {
            return None;
        }
        let r = match (self, rank) {
            (_, Rank::Char | Rank::Complex) => return None,
            (v, r) if v.rank() == r => v.clone(),
            (Real::Int(v), Rank::BigInt) => Real::BigInt(BigInt::from(*v)),
            (Real::Int(_) | Real::BigInt(_), Rank::BigRat) => Real::BigRat(self.to_rational()),
            (Real::Int(v), Rank::BigFloat) => {
                Real::BigFloat(BigFloat::from_bigint(&BigInt::from(*v), prec))
            }
            (Real::BigInt(v), Rank::BigFloat) => Real::BigFloat(BigFloat::from_bigint(v, prec)),
            (Real::BigRat(v), Rank::BigFloat) => Real::BigFloat(BigFloat::from_ratio(v, prec)),
            _ => return None,
        };
        Some(r)
    }

    /// Simplify to the lowest exact representation. Floats are kept.
    #[must_use]
    pub fn shrink(self) -> Real {
        match self {
            Real::BigInt(v) => match v.to_i64() {
                Some(i) => Real::Int(i),
                None => Real::BigInt(v),
            },
            Real::BigRat(v) if v.denom().is_one() => Real::BigInt(v.to_integer()).shrink(),
            other => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Complex
// ---------------------------------------------------------------------------

/// A complex number. Both parts are [`Real`], so complex values never nest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Complex {
    pub re: Real,
    pub im: Real,
}

impl Complex {
    pub fn new(re: Real, im: Real) -> Self {
        Self { re, im }
    }

    /// Whether the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }
}

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// An atomic value: character, real, or complex.
///
/// Structural equality (`==`) distinguishes representations; use
/// [`Scalar::value_eq`] for numeric equality across representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    Char(char),
    Real(Real),
    Complex(Box<Complex>),
}

impl Scalar {
    pub fn int(v: i64) -> Self {
        Scalar::Real(Real::Int(v))
    }

    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Scalar::Real(Real::BigInt(v.into()))
    }

    /// The rational `num/den`, kept as a rational even when integral.
    pub fn rational(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        let den = den.into();
        if den.is_zero() {
            return Err(CoreError::Arithmetic {
                reason: "zero denominator",
            });
        }
        Ok(Scalar::Real(Real::BigRat(BigRational::new(num.into(), den))))
    }

    /// A float from an `f64`, at the context precision.
    pub fn float(ctx: &Context, v: f64) -> Result<Self> {
        BigFloat::from_f64(v, ctx.float_prec())
            .map(|f| Scalar::Real(Real::BigFloat(f)))
            .ok_or(CoreError::Arithmetic {
                reason: "non-finite float",
            })
    }

    /// A complex value; it stays complex even with a zero imaginary part.
    pub fn complex(re: Real, im: Real) -> Self {
        Scalar::Complex(Box::new(Complex::new(re, im)))
    }

    pub fn rank(&self) -> Rank {
        match self {
            Scalar::Char(_) => Rank::Char,
            Scalar::Real(r) => r.rank(),
            Scalar::Complex(_) => Rank::Complex,
        }
    }

    pub fn is_char(&self) -> bool {
        matches!(self, Scalar::Char(_))
    }

    /// Numeric zero test; characters are never zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Char(_) => false,
            Scalar::Real(r) => r.is_zero(),
            Scalar::Complex(c) => c.re.is_zero() && c.im.is_zero(),
        }
    }

    /// The exact integer value of a numeric scalar, if it is integral.
    ///
    /// A complex with zero imaginary part counts as its real part.
    /// Characters have no integer value.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Scalar::Char(_) => None,
            Scalar::Real(r) => r.to_bigint(),
            Scalar::Complex(c) if c.is_real() => c.re.to_bigint(),
            Scalar::Complex(_) => None,
        }
    }

    /// [`Scalar::to_bigint`] narrowed to `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_bigint().and_then(|v| v.to_i64())
    }

    /// Coerce upward to `rank`. Characters become integers when lifted.
    pub fn to_rank(&self, rank: Rank, prec: u32) -> Result<Scalar> {
        let mismatch = CoreError::TypeMismatch {
            op: "promote",
            expected: "a representation at or above the operand's rank",
        };
        match (self, rank) {
            (Scalar::Char(_), Rank::Char) => Ok(self.clone()),
            (Scalar::Char(c), r) => Scalar::int(i64::from(u32::from(*c))).to_rank(r, prec),
            (Scalar::Complex(_), Rank::Complex) => Ok(self.clone()),
            (Scalar::Complex(_), _) => Err(mismatch),
            (Scalar::Real(re), Rank::Complex) => {
                Ok(Scalar::complex(re.clone(), Real::Int(0)))
            }
            (Scalar::Real(re), r) => re.to_rank(r, prec).map(Scalar::Real).ok_or(mismatch),
        }
    }

    /// Simplify to the lowest rank that represents the value exactly.
    ///
    /// A complex with an exactly zero imaginary part is demoted to its real
    /// part. Characters and floats are left alone.
    #[must_use]
    pub fn shrink(self) -> Scalar {
        match self {
            Scalar::Real(r) => Scalar::Real(r.shrink()),
            Scalar::Complex(c) => {
                let Complex { re, im } = *c;
                if im.is_zero() {
                    Scalar::Real(re.shrink())
                } else {
                    Scalar::complex(re.shrink(), im.shrink())
                }
            }
            other => other,
        }
    }

    /// Numeric equality across representations (total-order equality).
    pub fn value_eq(&self, ctx: &Context, other: &Scalar) -> bool {
        crate::order::ordered_compare(ctx, self, other) == 0
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::int(v)
    }
}

impl From<char> for Scalar {
    fn from(c: char) -> Self {
        Scalar::Char(c)
    }
}

impl From<BigInt> for Scalar {
    fn from(v: BigInt) -> Self {
        Scalar::Real(Real::BigInt(v))
    }
}

impl From<Real> for Scalar {
    fn from(r: Real) -> Self {
        Scalar::Real(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::default()
    }

    #[test]
    fn test_rank_order() {
        assert!(Rank::Char < Rank::Int);
        assert!(Rank::Int < Rank::BigInt);
        assert!(Rank::BigInt < Rank::BigRat);
        assert!(Rank::BigRat < Rank::BigFloat);
        assert!(Rank::BigFloat < Rank::Complex);
    }

    #[test]
    fn test_rank_of_each_kind() {
        let c = ctx();
        assert_eq!(Scalar::Char('a').rank(), Rank::Char);
        assert_eq!(Scalar::int(1).rank(), Rank::Int);
        assert_eq!(Scalar::bigint(1).rank(), Rank::BigInt);
        assert_eq!(Scalar::rational(1, 2).unwrap().rank(), Rank::BigRat);
        assert_eq!(Scalar::float(&c, 1.5).unwrap().rank(), Rank::BigFloat);
        assert_eq!(
            Scalar::complex(Real::Int(1), Real::Int(0)).rank(),
            Rank::Complex
        );
    }

    #[test]
    fn test_rational_zero_denominator() {
        let err = Scalar::rational(1, 0).unwrap_err();
        assert!(matches!(err, CoreError::Arithmetic { .. }));
    }

    #[test]
    fn test_float_non_finite() {
        assert!(Scalar::float(&ctx(), f64::NAN).is_err());
    }

    #[test]
    fn test_shrink() {
        assert_eq!(Scalar::bigint(7).shrink(), Scalar::int(7));
        assert_eq!(Scalar::rational(6, 3).unwrap().shrink(), Scalar::int(2));
        assert_eq!(
            Scalar::rational(1, 3).unwrap().shrink(),
            Scalar::rational(1, 3).unwrap()
        );
        assert_eq!(
            Scalar::complex(Real::BigInt(BigInt::from(4)), Real::Int(0)).shrink(),
            Scalar::int(4)
        );
        let big: BigInt = BigInt::from(i64::MAX) + 1;
        assert_eq!(Scalar::bigint(big.clone()).shrink(), Scalar::bigint(big));
        let f = Scalar::float(&ctx(), 2.0).unwrap();
        assert_eq!(f.clone().shrink(), f);
    }

    #[test]
    fn test_complex_stays_complex_until_shrunk() {
        let z = Scalar::complex(Real::Int(1), Real::Int(0));
        assert_eq!(z.rank(), Rank::Complex);
        assert!(z.value_eq(&ctx(), &Scalar::int(1)));
    }

    #[test]
    fn test_to_rank_chain() {
        let prec = ctx().float_prec();
        let one = Scalar::int(1);
        assert_eq!(one.to_rank(Rank::BigInt, prec).unwrap(), Scalar::bigint(1));
        assert_eq!(
            one.to_rank(Rank::BigRat, prec).unwrap(),
            Scalar::rational(1, 1).unwrap()
        );
        assert_eq!(
            one.to_rank(Rank::Complex, prec).unwrap(),
            Scalar::complex(Real::Int(1), Real::Int(0))
        );
        let f = Scalar::rational(1, 4)
            .unwrap()
            .to_rank(Rank::BigFloat, prec)
            .unwrap();
        assert_eq!(f, Scalar::float(&ctx(), 0.25).unwrap());
    }

    #[test]
    fn test_to_rank_rejects_demotion() {
        let prec = ctx().float_prec();
        assert!(Scalar::rational(1, 2).unwrap().to_rank(Rank::Int, prec).is_err());
        assert!(
            Scalar::complex(Real::Int(1), Real::Int(1))
                .to_rank(Rank::BigFloat, prec)
                .is_err()
        );
    }

    #[test]
    fn test_char_lifts_to_int() {
        let prec = ctx().float_prec();
        assert_eq!(
            Scalar::Char('A').to_rank(Rank::Int, prec).unwrap(),
            Scalar::int(65)
        );
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(Scalar::rational(8, 2).unwrap().to_i64(), Some(4));
        assert_eq!(Scalar::rational(1, 2).unwrap().to_i64(), None);
        assert_eq!(Scalar::Char('a').to_i64(), None);
        assert_eq!(
            Scalar::complex(Real::Int(3), Real::Int(0)).to_i64(),
            Some(3)
        );
    }
}
