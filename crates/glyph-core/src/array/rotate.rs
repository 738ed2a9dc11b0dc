//! Reversal and rotation along the first or last axis.
//!
//! Every function here builds fresh storage; the input array is never
//! touched, so a result can be bound elsewhere without affecting it.

use std::sync::Arc;

use crate::error::{CoreError, Result};

use super::{Array, Value};

/// Reverse along the last axis. For vectors this is plain reversal.
pub fn reverse(v: &Value) -> Value {
    map_axis(v, Axis::Last, Shift::Reverse)
}

/// Reverse along the first axis. For vectors this equals [`reverse`].
pub fn flip(v: &Value) -> Value {
    map_axis(v, Axis::First, Shift::Reverse)
}

/// Rotate left by `k` positions along the last axis; negative `k` rotates
/// right.
pub fn rotate(k: &Value, v: &Value) -> Result<Value> {
    Ok(map_axis(v, Axis::Last, Shift::By(shift_arg(k)?)))
}

/// Rotate left by `k` positions along the first axis.
pub fn rotate_first(k: &Value, v: &Value) -> Result<Value> {
    Ok(map_axis(v, Axis::First, Shift::By(shift_arg(k)?)))
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    First,
    Last,
}

#[derive(Debug, Clone, Copy)]
enum Shift {
    Reverse,
    By(i64),
}

fn shift_arg(k: &Value) -> Result<i64> {
    let s = k.as_scalar().ok_or(CoreError::TypeMismatch {
        op: "rotate",
        expected: "a scalar count",
    })?;
    s.to_i64().ok_or(CoreError::TypeMismatch {
        op: "rotate",
        expected: "an integer count",
    })
}

fn map_axis(v: &Value, axis: Axis, shift: Shift) -> Value {
    let Value::Array(a) = v else {
        return v.clone();
    };
    if a.ndim() == 0 || a.is_empty() {
        return v.clone();
    }
    let axis = match axis {
        Axis::First => 0,
        Axis::Last => a.ndim() - 1,
    };

    let shape = a.shape();
    let outer: usize = shape[..axis].iter().product();
    let len = shape[axis];
    let inner: usize = shape[axis + 1..].iter().product();
    let src = a.as_slice();

    let source_index = |j: usize| -> usize {
        match shift {
            Shift::Reverse => len - 1 - j,
            Shift::By(k) => (j as i64 + k).rem_euclid(len as i64) as usize,
        }
    };

    let mut data = Vec::with_capacity(a.numel());
    for o in 0..outer {
        let base = o * len * inner;
        for j in 0..len {
            let from = base + source_index(j) * inner;
            data.extend_from_slice(&src[from..from + inner]);
        }
    }

    Value::Array(Array {
        shape: shape.to_vec(),
        data: Arc::new(data),
    })
}
