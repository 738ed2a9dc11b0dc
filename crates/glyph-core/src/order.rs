//! Total order over scalars, and its extension to nested values.
//!
//! The scalar order is numeric where it can be and type-based where it can't:
//!
//! 1. characters compare by code point;
//! 2. a character is below every number;
//! 3. complex numbers compare by real part, then imaginary part;
//! 4. a complex number with zero imaginary part compares as its real part;
//! 5. a complex number with nonzero imaginary part is above every real;
//! 6. reals compare by exact value.
//!
//! Floats are compared by converting them to exact rationals, never the
//! other way round.
//!
//! Rules 3 to 5 together are not transitive (`1j0 > 0j5 > 2 > 1j0`), so the
//! sorting operators go through [`compare_values`], which orders scalars by
//! [`sort_cmp`] instead: the same equalities, but a genuine total order.

use core::cmp::Ordering;

use crate::array::{Array, Value};
use crate::context::Context;
use crate::scalar::{Real, Scalar};

/// Compare two scalars, returning `-1`, `0`, or `1`.
pub fn ordered_compare(_ctx: &Context, u: &Scalar, v: &Scalar) -> i32 {
    scalar_cmp(u, v) as i32
}

/// [`ordered_compare`] as an [`Ordering`].
pub fn scalar_cmp(u: &Scalar, v: &Scalar) -> Ordering {
    match (u, v) {
        (Scalar::Char(a), Scalar::Char(b)) => a.cmp(b),
        (Scalar::Char(_), _) => Ordering::Less,
        (_, Scalar::Char(_)) => Ordering::Greater,
        (Scalar::Complex(a), Scalar::Complex(b)) => {
            real_cmp(&a.re, &b.re).then_with(|| real_cmp(&a.im, &b.im))
        }
        (Scalar::Complex(a), Scalar::Real(b)) if a.is_real() => real_cmp(&a.re, b),
        (Scalar::Real(a), Scalar::Complex(b)) if b.is_real() => real_cmp(a, &b.re),
        (Scalar::Complex(_), Scalar::Real(_)) => Ordering::Greater,
        (Scalar::Real(_), Scalar::Complex(_)) => Ordering::Less,
        (Scalar::Real(a), Scalar::Real(b)) => real_cmp(a, b),
    }
}

/// Transitive scalar order used for sorting and grouping.
///
/// Characters come first by code point, then every real-valued scalar (a
/// complex with zero imaginary part included) by exact value, then complex
/// numbers with nonzero imaginary part by real part, then imaginary part.
/// It reports `Equal` exactly when [`scalar_cmp`] does, and agrees with it
/// on every pair except a real-valued complex against one with a nonzero
/// imaginary part, which it always puts first.
pub fn sort_cmp(u: &Scalar, v: &Scalar) -> Ordering {
    match (sort_key(u), sort_key(v)) {
        (SortKey::Char(a), SortKey::Char(b)) => a.cmp(&b),
        (SortKey::Real(a), SortKey::Real(b)) => real_cmp(a, b),
        (SortKey::Imaginary(a, x), SortKey::Imaginary(b, y)) => {
            real_cmp(a, b).then_with(|| real_cmp(x, y))
        }
        (a, b) => a.class().cmp(&b.class()),
    }
}

enum SortKey<'a> {
    Char(char),
    Real(&'a Real),
    Imaginary(&'a Real, &'a Real),
}

impl SortKey<'_> {
    fn class(&self) -> u8 {
        match self {
            SortKey::Char(_) => 0,
            SortKey::Real(_) => 1,
            SortKey::Imaginary(..) => 2,
        }
    }
}

fn sort_key(s: &Scalar) -> SortKey<'_> {
    match s {
        Scalar::Char(c) => SortKey::Char(*c),
        Scalar::Real(r) => SortKey::Real(r),
        Scalar::Complex(z) if z.is_real() => SortKey::Real(&z.re),
        Scalar::Complex(z) => SortKey::Imaginary(&z.re, &z.im),
    }
}

/// Exact comparison of two reals in any representations.
pub fn real_cmp(a: &Real, b: &Real) -> Ordering {
    match (a, b) {
        (Real::Int(x), Real::Int(y)) => x.cmp(y),
        (Real::BigInt(x), Real::BigInt(y)) => x.cmp(y),
        (Real::BigFloat(x), Real::BigFloat(y)) => x.cmp(y),
        _ => a.to_rational().cmp(&b.to_rational()),
    }
}

/// Order over arbitrary values, used by the sorting operators.
///
/// Scalars use [`sort_cmp`] and sort before arrays. Arrays compare
/// element-wise, then by element count, then by shape.
pub fn compare_values(ctx: &Context, a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Scalar(x), Value::Scalar(y)) => sort_cmp(x, y),
        (Value::Scalar(_), Value::Array(_)) => Ordering::Less,
        (Value::Array(_), Value::Scalar(_)) => Ordering::Greater,
        (Value::Array(x), Value::Array(y)) => array_cmp(ctx, x, y),
    }
}

fn array_cmp(ctx: &Context, a: &Array, b: &Array) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| compare_values(ctx, x, y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| {
            a.numel()
                .cmp(&b.numel())
                .then_with(|| a.shape().cmp(b.shape()))
        })
}

/// Value equality: scalars by exact numeric value, arrays element-wise.
pub fn values_equal(ctx: &Context, a: &Value, b: &Value) -> bool {
    compare_values(ctx, a, b).is_eq()
}
