//! Shape queries and shape manipulation: rho, reshape, ravel, flatten, first.

use crate::error::{CoreError, Result};

use super::create::{count, counts, numel};
use super::{Array, Value};

/// The shape of `v` as a 1-D array. Scalars have the empty shape.
pub fn rho(v: &Value) -> Value {
    let dims: Vec<i64> = v.shape().iter().map(|&d| d as i64).collect();
    Value::Array(Array::ints(&dims))
}

/// Build an array of `shape` by cycling through the elements of `v` in
/// row-major order.
///
/// `shape` is a non-negative integer or a vector of them. An empty source
/// fills the result with the zero sentinel.
pub fn reshape(shape: &Value, v: &Value) -> Result<Value> {
    let dims = match shape {
        Value::Scalar(s) => vec![count("reshape", s)?],
        Value::Array(a) if a.ndim() <= 1 => counts("reshape", a)?,
        Value::Array(_) => {
            return Err(CoreError::TypeMismatch {
                op: "reshape",
                expected: "a scalar or vector shape",
            });
        }
    };
    let src = v.to_array();
    let total = numel("reshape", &dims)?;

    let data = if src.is_empty() {
        vec![Value::int(0); total]
    } else {
        src.iter().cycle().take(total).cloned().collect()
    };
    Array::from_vec(data, dims).map(Value::Array)
}

/// One level of flattening: the elements in row-major order as a vector.
/// Boxed elements stay boxed.
pub fn ravel(v: &Value) -> Value {
    match v {
        Value::Scalar(_) => Value::Array(Array::vector(vec![v.clone()])),
        Value::Array(a) if a.ndim() == 1 => v.clone(),
        Value::Array(a) => Value::Array(Array::vector(a.as_slice().to_vec())),
    }
}

/// Recursively unwrap nested arrays into one flat vector of scalars,
/// preserving encounter order.
pub fn flatten(v: &Value) -> Value {
    let mut out = Vec::new();
    flatten_into(v, &mut out);
    Value::Array(Array::vector(out))
}

fn flatten_into(v: &Value, out: &mut Vec<Value>) {
    match v {
        Value::Scalar(_) => out.push(v.clone()),
        Value::Array(a) => {
            for e in a.iter() {
                flatten_into(e, out);
            }
        }
    }
}

/// The first element in row-major order.
///
/// A scalar is its own first element; an empty array yields the integer `0`.
pub fn first(v: &Value) -> Value {
    match v {
        Value::Scalar(_) => v.clone(),
        Value::Array(a) => a.as_slice().first().cloned().unwrap_or_else(|| Value::int(0)),
    }
}
