//! Shaped, nestable arrays and the [`Value`] type.
//!
//! An [`Array`] stores its elements in row-major order behind an `Arc`, so
//! cloning is cheap and no operator can observe another's writes: any
//! mutation goes through [`Array::make_mut`], which copies shared storage
//! first. An element that is itself an array is *boxed*: it is one opaque
//! element of the outer array.

mod chars;
mod create;
mod display;
mod ops;
mod reshape;
mod rotate;
mod sort;
mod unique;

use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::scalar::Scalar;

pub use chars::{char_of, code, code_rows};
pub use create::{box_value, iota};
pub use ops::{add, div, mul, neg, sub};
pub use reshape::{first, flatten, ravel, reshape, rho};
pub use rotate::{flip, reverse, rotate, rotate_first};
pub use sort::{down, up};
pub use unique::unique;

/// Any value: a scalar or an array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Scalar(Scalar),
    Array(Array),
}

/// An N-dimensional array of values.
///
/// Structural equality compares shapes and elements representation by
/// representation; see [`crate::order::values_equal`] for numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array {
    shape: Vec<usize>,
    data: Arc<Vec<Value>>,
}

impl Array {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create an array from row-major data and a shape.
    ///
    /// Returns an error if the product of `shape` does not equal `data.len()`.
    pub fn from_vec(data: Vec<Value>, shape: Vec<usize>) -> Result<Self> {
        if checked_numel(&shape) != Some(data.len()) {
            return Err(CoreError::InvalidShape {
                shape,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self {
            shape,
            data: Arc::new(data),
        })
    }

    /// A 1-D array.
    pub fn vector(data: Vec<Value>) -> Self {
        Self {
            shape: vec![data.len()],
            data: Arc::new(data),
        }
    }

    /// The empty vector.
    pub fn empty() -> Self {
        Self::vector(Vec::new())
    }

    /// A rank-0 array holding a single value.
    pub fn scalar(value: Value) -> Self {
        Self {
            shape: vec![],
            data: Arc::new(vec![value]),
        }
    }

    /// A 1-D array of integers.
    pub fn ints(values: &[i64]) -> Self {
        Self::vector(values.iter().map(|&v| Value::int(v)).collect())
    }

    /// A 1-D array of characters.
    pub fn string(s: &str) -> Self {
        Self::vector(s.chars().map(|c| Value::Scalar(Scalar::Char(c))).collect())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.data.iter()
    }

    /// Mutable access to the elements, copying them first if the storage is
    /// shared with another array.
    pub fn make_mut(&mut self) -> &mut Vec<Value> {
        Arc::make_mut(&mut self.data)
    }

    /// Whether two arrays share the same storage.
    pub fn shares_storage(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Consume the array and return its elements, copying only if shared.
    pub fn into_vec(self) -> Vec<Value> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Length of the leading axis; 1 for rank-0 arrays.
    pub fn major_len(&self) -> usize {
        self.shape.first().copied().unwrap_or(1)
    }
}

impl Value {
    pub fn int(v: i64) -> Self {
        Value::Scalar(Scalar::int(v))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            Value::Scalar(_) => None,
        }
    }

    /// The shape; scalars have the empty shape.
    pub fn shape(&self) -> &[usize] {
        match self {
            Value::Scalar(_) => &[],
            Value::Array(a) => a.shape(),
        }
    }

    /// View as an array: arrays are cloned (sharing storage), scalars become
    /// rank-0 arrays.
    pub fn to_array(&self) -> Array {
        match self {
            Value::Array(a) => a.clone(),
            Value::Scalar(_) => Array::scalar(self.clone()),
        }
    }
}

/// Number of elements a shape describes, or `None` if it overflows `usize`.
pub(crate) fn checked_numel(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::int(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Scalar(Scalar::Char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let a = Array::from_vec(
            (1..=6).map(Value::int).collect(),
            vec![2, 3],
        )
        .unwrap();
        assert_eq!(a.shape(), &[2, 3]);
        assert_eq!(a.ndim(), 2);
        assert_eq!(a.numel(), 6);
        assert_eq!(a.major_len(), 2);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let r = Array::from_vec(vec![Value::int(1)], vec![2, 3]);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_zero_length_dimension_is_empty() {
        let a = Array::from_vec(vec![], vec![3, 0]).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.shape(), &[3, 0]);
    }

    #[test]
    fn test_scalar_array() {
        let a = Array::scalar(Value::int(42));
        assert_eq!(a.ndim(), 0);
        assert_eq!(a.numel(), 1);
        assert_eq!(a.major_len(), 1);
    }

    #[test]
    fn test_copy_on_write() {
        let a = Array::ints(&[1, 2, 3]);
        let mut b = a.clone();
        assert!(a.shares_storage(&b));
        b.make_mut()[0] = Value::int(99);
        assert!(!a.shares_storage(&b));
        assert_eq!(a, Array::ints(&[1, 2, 3]));
        assert_eq!(b.as_slice()[0], Value::int(99));
    }

    #[test]
    fn test_into_vec_shared() {
        let a = Array::ints(&[1, 2]);
        let b = a.clone();
        assert_eq!(b.into_vec(), vec![Value::int(1), Value::int(2)]);
        assert_eq!(a.numel(), 2);
    }

    #[test]
    fn test_from_vec_overflowing_shape() {
        let big = 1usize << (usize::BITS / 2);
        let r = Array::from_vec(vec![], vec![big, big, 2]);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
        assert_eq!(checked_numel(&[big, big]), None);
        assert_eq!(checked_numel(&[2, 0, big]), Some(0));
        assert_eq!(checked_numel(&[]), Some(1));
    }

    #[test]
    fn test_iter_cycles() {
        let a = Array::ints(&[1, 2]);
        let taken: Vec<&Value> = a.iter().cycle().take(3).collect();
        assert_eq!(taken, vec![&Value::int(1), &Value::int(2), &Value::int(1)]);
    }

    #[test]
    fn test_value_shape() {
        assert_eq!(Value::int(1).shape(), &[] as &[usize]);
        assert_eq!(Value::from(Array::ints(&[1, 2])).shape(), &[2]);
        assert_eq!(Value::int(1).to_array().shape(), &[] as &[usize]);
    }
}
