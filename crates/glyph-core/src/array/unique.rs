//! Duplicate removal.

use crate::context::Context;
use crate::order::compare_values;
use crate::scalar::Rank;

use super::{Array, Value};

/// Remove duplicates from the elements of `v`, returning a vector.
///
/// Scalars are duplicates when they are numerically equal, whatever their
/// representations; arrays when they are element-wise equal. Groups appear
/// in order of their first occurrence, and each group is represented by its
/// lowest-rank member (the earliest, among equal ranks), so `1+0j 1 1.0`
/// collapses to the integer `1`.
pub fn unique(ctx: &Context, v: &Value) -> Value {
    let a = v.to_array();
    let elems = a.as_slice();

    // Stable sort of positions under a transitive order brings each group
    // together, first occurrence first.
    let mut order: Vec<usize> = (0..elems.len()).collect();
    order.sort_by(|&i, &j| compare_values(ctx, &elems[i], &elems[j]));

    // (first position, representative position) per group.
    let mut groups: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len()
            && compare_values(ctx, &elems[order[start]], &elems[order[end]]).is_eq()
        {
            end += 1;
        }
        let group = &order[start..end];
        let rep = group
            .iter()
            .copied()
            .min_by_key(|&i| (rank_key(&elems[i]), i))
            .unwrap_or(group[0]);
        groups.push((group[0], rep));
        start = end;
    }

    groups.sort_unstable_by_key(|&(first, _)| first);
    Value::Array(Array::vector(
        groups.into_iter().map(|(_, rep)| elems[rep].clone()).collect(),
    ))
}

fn rank_key(v: &Value) -> Rank {
    match v {
        Value::Scalar(s) => s.rank(),
        Value::Array(_) => Rank::Complex,
    }
}
