//! Scalar arithmetic with promotion and demotion.
//!
//! Each operation promotes its operands to a common rank, computes exactly
//! (or at the context float precision), and shrinks the result.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::context::Context;
use crate::error::{CoreError, Result};

use super::{Complex, Real, Scalar, promote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
        }
    }
}

const DIVIDE_BY_ZERO: CoreError = CoreError::Arithmetic {
    reason: "division by zero",
};

pub fn add(ctx: &Context, a: &Scalar, b: &Scalar) -> Result<Scalar> {
    binary(ctx, Op::Add, a, b)
}

pub fn sub(ctx: &Context, a: &Scalar, b: &Scalar) -> Result<Scalar> {
    binary(ctx, Op::Sub, a, b)
}

pub fn mul(ctx: &Context, a: &Scalar, b: &Scalar) -> Result<Scalar> {
    binary(ctx, Op::Mul, a, b)
}

/// Exact for integers and rationals: `1 div 3` is the rational `1/3`.
pub fn div(ctx: &Context, a: &Scalar, b: &Scalar) -> Result<Scalar> {
    binary(ctx, Op::Div, a, b)
}

/// Negation. A character negates its code point.
pub fn neg(_ctx: &Context, a: &Scalar) -> Result<Scalar> {
    let r = match a {
        Scalar::Char(c) => Scalar::Real(neg_real(&Real::Int(i64::from(u32::from(*c))))),
        Scalar::Real(r) => Scalar::Real(neg_real(r)),
        Scalar::Complex(z) => Scalar::complex(neg_real(&z.re), neg_real(&z.im)),
    };
    Ok(r.shrink())
}

fn binary(ctx: &Context, op: Op, a: &Scalar, b: &Scalar) -> Result<Scalar> {
    let prec = ctx.float_prec();
    match promote(ctx, a, b)? {
        (Scalar::Real(x), Scalar::Real(y)) => real_op(op, &x, &y, prec).map(Scalar::Real),
        (Scalar::Complex(x), Scalar::Complex(y)) => complex_op(op, &x, &y, prec),
        _ => Err(CoreError::TypeMismatch {
            op: op.name(),
            expected: "numeric operands",
        }),
    }
}

fn neg_real(r: &Real) -> Real {
    match r {
        Real::Int(v) => v
            .checked_neg()
            .map_or_else(|| Real::BigInt(-BigInt::from(*v)), Real::Int),
        Real::BigInt(v) => Real::BigInt(-v),
        Real::BigRat(v) => Real::BigRat(-v),
        Real::BigFloat(v) => Real::BigFloat(v.neg()),
    }
}

fn lift(a: &Real, b: &Real, prec: u32) -> Result<(Real, Real)> {
    let rank = a.rank().max(b.rank());
    match (a.to_rank(rank, prec), b.to_rank(rank, prec)) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(CoreError::TypeMismatch {
            op: "promote",
            expected: "real operands",
        }),
    }
}

fn ratio(num: BigInt, den: BigInt) -> Result<Real> {
    if den.is_zero() {
        return Err(DIVIDE_BY_ZERO);
    }
    Ok(Real::BigRat(BigRational::new(num, den)))
}

fn real_op(op: Op, a: &Real, b: &Real, prec: u32) -> Result<Real> {
    let r = match lift(a, b, prec)? {
        (Real::Int(x), Real::Int(y)) => {
            let exact = match op {
                Op::Add => x.checked_add(y),
                Op::Sub => x.checked_sub(y),
                Op::Mul => x.checked_mul(y),
                Op::Div => return ratio(BigInt::from(x), BigInt::from(y)).map(Real::shrink),
            };
            match exact {
                Some(v) => Real::Int(v),
                None => return real_op(op, &Real::BigInt(x.into()), &Real::BigInt(y.into()), prec),
            }
        }
        (Real::BigInt(x), Real::BigInt(y)) => match op {
            Op::Add => Real::BigInt(x + y),
            Op::Sub => Real::BigInt(x - y),
            Op::Mul => Real::BigInt(x * y),
            Op::Div => ratio(x, y)?,
        },
        (Real::BigRat(x), Real::BigRat(y)) => match op {
            Op::Add => Real::BigRat(x + y),
            Op::Sub => Real::BigRat(x - y),
            Op::Mul => Real::BigRat(x * y),
            Op::Div if y.is_zero() => return Err(DIVIDE_BY_ZERO),
            Op::Div => Real::BigRat(x / y),
        },
        (Real::BigFloat(x), Real::BigFloat(y)) => match op {
            Op::Add => Real::BigFloat(x.add(&y, prec)),
            Op::Sub => Real::BigFloat(x.sub(&y, prec)),
            Op::Mul => Real::BigFloat(x.mul(&y, prec)),
            Op::Div => Real::BigFloat(x.div(&y, prec).ok_or(DIVIDE_BY_ZERO)?),
        },
        _ => {
            return Err(CoreError::TypeMismatch {
                op: op.name(),
                expected: "real operands of one representation",
            });
        }
    };
    Ok(r.shrink())
}

fn complex_op(op: Op, a: &Complex, b: &Complex, prec: u32) -> Result<Scalar> {
    let f = |op, x: &Real, y: &Real| real_op(op, x, y, prec);
    let (re, im) = match op {
        Op::Add | Op::Sub => (f(op, &a.re, &b.re)?, f(op, &a.im, &b.im)?),
        Op::Mul => (
            f(Op::Sub, &f(Op::Mul, &a.re, &b.re)?, &f(Op::Mul, &a.im, &b.im)?)?,
            f(Op::Add, &f(Op::Mul, &a.re, &b.im)?, &f(Op::Mul, &a.im, &b.re)?)?,
        ),
        Op::Div => {
            let den = f(Op::Add, &f(Op::Mul, &b.re, &b.re)?, &f(Op::Mul, &b.im, &b.im)?)?;
            if den.is_zero() {
                return Err(DIVIDE_BY_ZERO);
            }
            let re = f(Op::Add, &f(Op::Mul, &a.re, &b.re)?, &f(Op::Mul, &a.im, &b.im)?)?;
            let im = f(Op::Sub, &f(Op::Mul, &a.im, &b.re)?, &f(Op::Mul, &a.re, &b.im)?)?;
            (f(Op::Div, &re, &den)?, f(Op::Div, &im, &den)?)
        }
    };
    Ok(Scalar::complex(re, im).shrink())
}
