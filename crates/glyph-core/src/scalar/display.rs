//! `Display` for scalars.

use core::fmt;

use super::{Complex, Real, Scalar};

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Real::Int(v) => write!(f, "{v}"),
            Real::BigInt(v) => write!(f, "{v}"),
            Real::BigRat(v) => write!(f, "{}/{}", v.numer(), v.denom()),
            Real::BigFloat(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}j{}", self.re, self.im)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Char(c) => write!(f, "{c}"),
            Scalar::Real(r) => write!(f, "{r}"),
            Scalar::Complex(c) => write!(f, "{c}"),
        }
    }
}
