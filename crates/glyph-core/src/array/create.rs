//! Index generation and boxing.

use crate::context::Context;
use crate::error::{CoreError, Result};
use crate::scalar::Scalar;

use super::{Array, Value, checked_numel};

/// Index generator.
///
/// A scalar `n` yields `origin, origin+1, …, origin+n-1`. A vector
/// `n1 n2 …` yields an array of shape `[n1, n2, …]` whose cells are boxed
/// coordinate vectors, in row-major order.
///
/// ```
/// # use glyph_core::{array::{iota, Value}, context::Context};
/// let ctx = Context::default();
/// assert_eq!(iota(&ctx, &Value::int(3)).unwrap().to_string(), "1 2 3");
/// ```
pub fn iota(ctx: &Context, n: &Value) -> Result<Value> {
    match n {
        Value::Scalar(s) => Ok(Value::Array(iota_vector(ctx, count("iota", s)?))),
        Value::Array(a) => {
            if a.ndim() > 1 {
                return Err(CoreError::TypeMismatch {
                    op: "iota",
                    expected: "a scalar or vector",
                });
            }
            let dims = counts("iota", a)?;
            match dims.as_slice() {
                [n] => Ok(Value::Array(iota_vector(ctx, *n))),
                _ => iota_grid(ctx, dims).map(Value::Array),
            }
        }
    }
}

fn iota_vector(ctx: &Context, n: usize) -> Array {
    let origin = ctx.origin();
    Array::vector((0..n).map(|i| Value::int(origin + i as i64)).collect())
}

fn iota_grid(ctx: &Context, dims: Vec<usize>) -> Result<Array> {
    let origin = ctx.origin();
    let total = numel("iota", &dims)?;
    let mut data = Vec::with_capacity(total);

    let mut index = vec![0usize; dims.len()];
    for _ in 0..total {
        let cell = index.iter().map(|&i| Value::int(origin + i as i64)).collect();
        data.push(Value::Array(Array::vector(cell)));

        // Odometer increment, last axis fastest.
        for d in (0..dims.len()).rev() {
            index[d] += 1;
            if index[d] < dims[d] {
                break;
            }
            index[d] = 0;
        }
    }

    Array::from_vec(data, dims)
}

/// Wrap any value as a single opaque element (a rank-0 array).
pub fn box_value(v: &Value) -> Value {
    Value::Array(Array::scalar(v.clone()))
}

/// A non-negative integer argument.
pub(super) fn count(op: &'static str, s: &Scalar) -> Result<usize> {
    let n = s.to_i64().ok_or(CoreError::TypeMismatch {
        op,
        expected: "an integer",
    })?;
    usize::try_from(n).map_err(|_| CoreError::Domain {
        op,
        reason: "argument must not be negative",
    })
}

/// Element count of `dims`, refusing shapes too large to address.
pub(super) fn numel(op: &'static str, dims: &[usize]) -> Result<usize> {
    checked_numel(dims).ok_or(CoreError::Domain {
        op,
        reason: "shape is too large",
    })
}

/// Every element of `a` as a non-negative integer.
pub(super) fn counts(op: &'static str, a: &Array) -> Result<Vec<usize>> {
    a.iter()
        .map(|v| match v {
            Value::Scalar(s) => count(op, s),
            Value::Array(_) => Err(CoreError::TypeMismatch {
                op,
                expected: "a vector of integers",
            }),
        })
        .collect()
}
