//! Grade up / grade down: sorting permutations.
//!
//! Both return origin-based positions. The sort is stable in either
//! direction, so equal items keep their original relative order.

use core::cmp::Ordering;

use crate::context::Context;
use crate::order::compare_values;

use super::{Array, Value};

/// Positions that sort `v` ascending.
///
/// For arrays of rank 2 or more the major cells (rows) are sorted,
/// compared element by element.
pub fn up(ctx: &Context, v: &Value) -> Value {
    grade(ctx, v, false)
}

/// Positions that sort `v` descending.
pub fn down(ctx: &Context, v: &Value) -> Value {
    grade(ctx, v, true)
}

fn grade(ctx: &Context, v: &Value, descending: bool) -> Value {
    let a = v.to_array();
    let n = a.major_len();
    let cell = if n == 0 { 0 } else { a.numel() / n };
    let cells: Vec<&[Value]> = (0..n)
        .map(|i| &a.as_slice()[i * cell..(i + 1) * cell])
        .collect();

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&i, &j| {
        let o = cell_cmp(ctx, cells[i], cells[j]);
        if descending { o.reverse() } else { o }
    });

    let origin = ctx.origin();
    Value::Array(Array::vector(
        indices
            .into_iter()
            .map(|i| Value::int(origin + i as i64))
            .collect(),
    ))
}

fn cell_cmp(ctx: &Context, a: &[Value], b: &[Value]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_values(ctx, x, y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Config;
    use crate::scalar::{Real, Scalar};

    fn ints(v: &[i64]) -> Value {
        Value::from(Array::ints(v))
    }

    #[test]
    fn test_up() {
        let ctx = Context::default();
        let v = ints(&[6, 5, 8, 10, 4, 1, 2, 5, 4, 7]);
        assert_eq!(up(&ctx, &v), ints(&[6, 7, 5, 9, 2, 8, 1, 10, 3, 4]));
    }

    #[test]
    fn test_down_is_stable() {
        let ctx = Context::default();
        let v = ints(&[6, 5, 8, 10, 4, 1, 2, 5, 4, 7]);
        assert_eq!(down(&ctx, &v), ints(&[4, 3, 10, 1, 2, 8, 5, 9, 7, 6]));
    }

    #[test]
    fn test_up_origin_zero() {
        let ctx = Context::new(Config::new().with_origin(0)).unwrap();
        assert_eq!(up(&ctx, &ints(&[3, 1, 2])), ints(&[1, 2, 0]));
    }

    #[test]
    fn test_up_mixed_kinds() {
        let ctx = Context::default();
        let v = Value::from(Array::vector(vec![
            Value::Scalar(Scalar::complex(Real::Int(0), Real::Int(1))),
            Value::int(100),
            Value::from('z'),
            Value::Scalar(Scalar::rational(1, 2).unwrap()),
        ]));
        assert_eq!(up(&ctx, &v), ints(&[3, 4, 2, 1]));
    }

    #[test]
    fn test_up_mixed_complex() {
        let ctx = Context::default();
        let cx = |re, im| Value::Scalar(Scalar::complex(Real::Int(re), Real::Int(im)));
        // Reals (including 1j0) first by value, then imaginary numbers.
        let v = Value::from(Array::vector(vec![cx(1, 0), cx(0, 5), Value::int(2), cx(0, 1)]));
        assert_eq!(up(&ctx, &v), ints(&[1, 3, 4, 2]));
        assert_eq!(down(&ctx, &v), ints(&[2, 4, 3, 1]));
    }

    #[test]
    fn test_up_large_mixed_input() {
        let ctx = Context::default();
        let data: Vec<Value> = (0..500i64)
            .map(|i| match i % 4 {
                0 => Value::int(i % 7),
                1 => Value::Scalar(Scalar::complex(Real::Int(i % 5), Real::Int(0))),
                2 => Value::Scalar(Scalar::complex(Real::Int(i % 3), Real::Int(i % 6 + 1))),
                _ => Value::from(char::from(b'a' + (i % 26) as u8)),
            })
            .collect();
        let v = Value::from(Array::vector(data.clone()));
        let perm = up(&ctx, &v);
        let sorted: Vec<&Value> = perm
            .as_array()
            .unwrap()
            .iter()
            .map(|p| &data[(p.as_scalar().unwrap().to_i64().unwrap() - 1) as usize])
            .collect();
        for pair in sorted.windows(2) {
            assert!(compare_values(&ctx, pair[0], pair[1]).is_le());
        }
    }

    #[test]
    fn test_up_equal_values_across_kinds_keep_order() {
        let ctx = Context::default();
        let v = Value::from(Array::vector(vec![
            Value::Scalar(Scalar::float(&ctx, 1.0).unwrap()),
            Value::int(1),
            Value::Scalar(Scalar::bigint(1)),
        ]));
        assert_eq!(up(&ctx, &v), ints(&[1, 2, 3]));
        assert_eq!(down(&ctx, &v), ints(&[1, 2, 3]));
    }

    #[test]
    fn test_up_matrix_rows() {
        let ctx = Context::default();
        let m = Array::from_vec(
            [3, 1, 1, 2, 1, 1].into_iter().map(Value::int).collect(),
            vec![3, 2],
        )
        .unwrap();
        assert_eq!(up(&ctx, &Value::from(m)), ints(&[3, 2, 1]));
    }

    #[test]
    fn test_up_empty_and_scalar() {
        let ctx = Context::default();
        assert_eq!(up(&ctx, &ints(&[])), ints(&[]));
        assert_eq!(up(&ctx, &Value::int(5)), ints(&[1]));
    }
}
