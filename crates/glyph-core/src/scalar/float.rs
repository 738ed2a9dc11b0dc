//! Arbitrary-precision binary floating point.
//!
//! A [`BigFloat`] is `mantissa * 2^exponent`. Values are kept normalised (odd
//! mantissa, or zero with exponent 0) so structural equality is value
//! equality. Inexact operations round the mantissa to a caller-supplied
//! number of bits.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::float::FloatCore;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An arbitrary-precision binary float.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigFloat {
    mantissa: BigInt,
    exponent: i64,
}

#[allow(clippy::should_implement_trait)]
impl BigFloat {
    /// The value `0`.
    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    /// Build `mantissa * 2^exponent`, rounded to `prec` bits.
    pub fn from_parts(mantissa: BigInt, exponent: i64, prec: u32) -> Self {
        round(mantissa, exponent, prec)
    }

    /// Exact conversion of a finite `f64`, then rounded to `prec` bits.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(v: f64, prec: u32) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }
        let (mant, exp, sign) = FloatCore::integer_decode(v);
        let mut m = BigInt::from(mant);
        if sign < 0 {
            m = -m;
        }
        Some(round(m, i64::from(exp), prec))
    }

    /// Integer value rounded to `prec` bits.
    pub fn from_bigint(v: &BigInt, prec: u32) -> Self {
        round(v.clone(), 0, prec)
    }

    /// Nearest representable value to `r` with `prec` bits of mantissa.
    pub fn from_ratio(r: &BigRational, prec: u32) -> Self {
        if r.is_zero() {
            return Self::zero();
        }
        let sign = r.numer().sign();
        let n = r.numer().magnitude();
        let d = r.denom().magnitude();

        // Two guard bits beyond the target precision, plus a sticky bit.
        let k = i64::from(prec) + 2 + d.bits() as i64 - n.bits() as i64;
        let (num, den) = if k >= 0 {
            (n << (k as u64), d.clone())
        } else {
            (n.clone(), d << (k.unsigned_abs()))
        };
        let q = &num / &den;
        let (q, k) = if (&q * &den) == num {
            (q, k)
        } else {
            ((q << 1u32) | BigUint::one(), k + 1)
        };
        round(BigInt::from_biguint(sign, q), -k, prec)
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Whether the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.exponent >= 0 || self.is_zero()
    }

    /// The exact rational value.
    pub fn to_rational(&self) -> BigRational {
        if self.exponent >= 0 {
            BigRational::from_integer(&self.mantissa << (self.exponent as u64))
        } else {
            let den = BigInt::one() << self.exponent.unsigned_abs();
            BigRational::new(self.mantissa.clone(), den)
        }
    }

    /// The exact integer value, if the value is integral.
    pub fn to_bigint(&self) -> Option<BigInt> {
        if self.is_zero() {
            Some(BigInt::zero())
        } else if self.exponent >= 0 {
            Some(&self.mantissa << (self.exponent as u64))
        } else {
            None
        }
    }

    /// Nearest `f64`; overflows to infinity.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        self.to_rational().to_f64().unwrap_or(if self.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            mantissa: -&self.mantissa,
            exponent: self.exponent,
        }
    }

    #[must_use]
    pub fn add(&self, other: &Self, prec: u32) -> Self {
        let e = self.exponent.min(other.exponent);
        let a = &self.mantissa << ((self.exponent - e) as u64);
        let b = &other.mantissa << ((other.exponent - e) as u64);
        round(a + b, e, prec)
    }

    #[must_use]
    pub fn sub(&self, other: &Self, prec: u32) -> Self {
        self.add(&other.neg(), prec)
    }

    #[must_use]
    pub fn mul(&self, other: &Self, prec: u32) -> Self {
        round(
            &self.mantissa * &other.mantissa,
            self.exponent + other.exponent,
            prec,
        )
    }

    /// Quotient rounded to `prec` bits; `None` when dividing by zero.
    pub fn div(&self, other: &Self, prec: u32) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self::from_ratio(
            &(self.to_rational() / other.to_rational()),
            prec,
        ))
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.mantissa.sign(), other.mantissa.sign()) {
            (a, b) if a != b => sign_rank(a).cmp(&sign_rank(b)),
            _ if self.exponent == other.exponent => self.mantissa.cmp(&other.mantissa),
            _ => self.to_rational().cmp(&other.to_rational()),
        }
    }
}

fn sign_rank(s: Sign) -> i8 {
    match s {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_f64(self.to_f64()))
    }
}

/// Shortest decimal form, switching to exponent form for very large or very
/// small magnitudes.
pub(crate) fn format_f64(v: f64) -> String {
    let mag = v.abs();
    if v == 0.0 || (1e-6..1e21).contains(&mag) {
        format!("{v}")
    } else {
        format!("{v:e}")
    }
}

/// Round `mantissa * 2^exponent` to at most `prec` significant bits
/// (half away from zero), then strip trailing zero bits.
fn round(mantissa: BigInt, exponent: i64, prec: u32) -> BigFloat {
    if mantissa.is_zero() {
        return BigFloat::zero();
    }
    let prec = u64::from(prec.max(1));
    let (sign, mut mag) = mantissa.into_parts();
    let mut exponent = exponent;

    let bits = mag.bits();
    if bits > prec {
        let shift = bits - prec;
        let half = BigUint::one() << (shift - 1);
        let low = &mag & ((BigUint::one() << shift) - BigUint::one());
        mag >>= shift;
        if low >= half {
            mag += BigUint::one();
        }
        exponent += shift as i64;
    }

    if let Some(tz) = mag.trailing_zeros() {
        mag >>= tz;
        exponent += tz as i64;
    }

    BigFloat {
        mantissa: BigInt::from_biguint(sign, mag),
        exponent,
    }
}
