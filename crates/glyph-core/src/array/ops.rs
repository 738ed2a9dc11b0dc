//! Element-wise arithmetic over values.
//!
//! Supported operand pairs:
//! - scalar op scalar
//! - scalar op array, array op scalar (the scalar meets every element)
//! - array op array of identical shape
//!
//! Boxed elements are recursed into with the same rules. Anything else is a
//! shape mismatch.

use std::sync::Arc;

use crate::context::Context;
use crate::error::{CoreError, Result};
use crate::scalar::{self, Scalar};

use super::{Array, Value};

type ScalarOp = fn(&Context, &Scalar, &Scalar) -> Result<Scalar>;

pub fn add(ctx: &Context, a: &Value, b: &Value) -> Result<Value> {
    zip_map(ctx, "add", a, b, scalar::add)
}

pub fn sub(ctx: &Context, a: &Value, b: &Value) -> Result<Value> {
    zip_map(ctx, "sub", a, b, scalar::sub)
}

pub fn mul(ctx: &Context, a: &Value, b: &Value) -> Result<Value> {
    zip_map(ctx, "mul", a, b, scalar::mul)
}

/// Element-wise division. Integer operands yield exact rationals.
pub fn div(ctx: &Context, a: &Value, b: &Value) -> Result<Value> {
    zip_map(ctx, "div", a, b, scalar::div)
}

/// Negate every element.
pub fn neg(ctx: &Context, a: &Value) -> Result<Value> {
    match a {
        Value::Scalar(s) => scalar::neg(ctx, s).map(Value::Scalar),
        Value::Array(arr) => {
            let data = arr
                .iter()
                .map(|e| neg(ctx, e))
                .collect::<Result<Vec<_>>>()?;
            Ok(with_shape(arr, data))
        }
    }
}

fn zip_map(
    ctx: &Context,
    op: &'static str,
    a: &Value,
    b: &Value,
    f: ScalarOp,
) -> Result<Value> {
    match (a, b) {
        (Value::Scalar(x), Value::Scalar(y)) => f(ctx, x, y).map(Value::Scalar),
        (Value::Scalar(_), Value::Array(arr)) => {
            let data = arr
                .iter()
                .map(|e| zip_map(ctx, op, a, e, f))
                .collect::<Result<Vec<_>>>()?;
            Ok(with_shape(arr, data))
        }
        (Value::Array(arr), Value::Scalar(_)) => {
            let data = arr
                .iter()
                .map(|e| zip_map(ctx, op, e, b, f))
                .collect::<Result<Vec<_>>>()?;
            Ok(with_shape(arr, data))
        }
        (Value::Array(x), Value::Array(y)) => {
            if x.shape() != y.shape() {
                return Err(CoreError::ShapeMismatch {
                    op,
                    left: x.shape().to_vec(),
                    right: y.shape().to_vec(),
                });
            }
            let data = x
                .iter()
                .zip(y.iter())
                .map(|(p, q)| zip_map(ctx, op, p, q, f))
                .collect::<Result<Vec<_>>>()?;
            Ok(with_shape(x, data))
        }
    }
}

fn with_shape(like: &Array, data: Vec<Value>) -> Value {
    Value::Array(Array {
        shape: like.shape().to_vec(),
        data: Arc::new(data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(v: &[i64]) -> Value {
        Value::from(Array::ints(v))
    }

    #[test]
    fn test_add_arrays() {
        let ctx = Context::default();
        let r = add(&ctx, &ints(&[1, 2, 3]), &ints(&[10, 20, 30])).unwrap();
        assert_eq!(r, ints(&[11, 22, 33]));
    }

    #[test]
    fn test_scalar_meets_every_element() {
        let ctx = Context::default();
        assert_eq!(
            mul(&ctx, &Value::int(2), &ints(&[1, 2, 3])).unwrap(),
            ints(&[2, 4, 6])
        );
        assert_eq!(
            sub(&ctx, &ints(&[5, 6]), &Value::int(1)).unwrap(),
            ints(&[4, 5])
        );
    }

    #[test]
    fn test_div_exact() {
        let ctx = Context::default();
        let r = div(&ctx, &ints(&[1, 4]), &Value::int(2)).unwrap();
        let expected = Value::from(Array::vector(vec![
            Value::Scalar(Scalar::rational(1, 2).unwrap()),
            Value::int(2),
        ]));
        assert_eq!(r, expected);
    }

    #[test]
    fn test_div_by_zero() {
        let ctx = Context::default();
        assert!(matches!(
            div(&ctx, &ints(&[1]), &Value::int(0)),
            Err(CoreError::Arithmetic { .. })
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let ctx = Context::default();
        let r = add(&ctx, &ints(&[1, 2]), &ints(&[1, 2, 3]));
        assert!(matches!(r, Err(CoreError::ShapeMismatch { op: "add", .. })));
    }

    #[test]
    fn test_recurses_into_boxes() {
        let ctx = Context::default();
        let nested = Value::from(Array::vector(vec![Value::int(1), ints(&[2, 3])]));
        let r = add(&ctx, &nested, &Value::int(1)).unwrap();
        let expected = Value::from(Array::vector(vec![Value::int(2), ints(&[3, 4])]));
        assert_eq!(r, expected);
    }

    #[test]
    fn test_neg_keeps_shape() {
        let ctx = Context::default();
        let m = Value::from(Array::from_vec((1..=4).map(Value::int).collect(), vec![2, 2]).unwrap());
        let r = neg(&ctx, &m).unwrap();
        assert_eq!(r.shape(), &[2, 2]);
        assert_eq!(r.as_array().unwrap().as_slice()[3], Value::int(-4));
    }

    #[test]
    fn test_inputs_untouched() {
        let ctx = Context::default();
        let a = ints(&[1, 2]);
        let _ = add(&ctx, &a, &a).unwrap();
        assert_eq!(a, ints(&[1, 2]));
    }
}
