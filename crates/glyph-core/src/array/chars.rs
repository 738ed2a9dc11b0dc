//! Conversions between characters and their Unicode code points.

use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::scalar::Scalar;

use super::{Array, Value};

/// Code points of the characters in `v`. Shape is preserved.
pub fn code(v: &Value) -> Result<Value> {
    map_scalars(v, |s| match s {
        Scalar::Char(c) => Ok(Scalar::int(i64::from(u32::from(*c)))),
        _ => Err(CoreError::TypeMismatch {
            op: "code",
            expected: "characters",
        }),
    })
}

/// Code points of several strings at once, one row per argument.
///
/// Every argument must have the same length.
pub fn code_rows(args: &[Value]) -> Result<Value> {
    let Some(head) = args.first() else {
        return Array::from_vec(Vec::new(), vec![0, 0]).map(Value::Array);
    };
    let width = head.to_array().numel();
    let mut data = Vec::with_capacity(args.len() * width);
    for arg in args {
        let row = code(&Value::Array(arg.to_array()))?;
        let row = row.to_array();
        if row.numel() != width {
            return Err(CoreError::ShapeMismatch {
                op: "code",
                left: head.shape().to_vec(),
                right: arg.shape().to_vec(),
            });
        }
        data.extend(row.into_vec());
    }
    Array::from_vec(data, vec![args.len(), width]).map(Value::Array)
}

/// Characters for the code points in `v`. Shape is preserved.
pub fn char_of(v: &Value) -> Result<Value> {
    map_scalars(v, |s| {
        let n = s.to_bigint().ok_or(CoreError::TypeMismatch {
            op: "char",
            expected: "integer code points",
        })?;
        u32::try_from(n)
            .ok()
            .and_then(char::from_u32)
            .map(Scalar::Char)
            .ok_or(CoreError::Domain {
                op: "char",
                reason: "not a valid code point",
            })
    })
}

fn map_scalars(v: &Value, f: impl Fn(&Scalar) -> Result<Scalar> + Copy) -> Result<Value> {
    match v {
        Value::Scalar(s) => f(s).map(Value::Scalar),
        Value::Array(a) => {
            let data = a
                .iter()
                .map(|e| map_scalars(e, f))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(Array {
                shape: a.shape().to_vec(),
                data: Arc::new(data),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(v: &[i64]) -> Value {
        Value::from(Array::ints(v))
    }

    #[test]
    fn test_code() {
        let v = Value::from(Array::string("hi"));
        assert_eq!(code(&v).unwrap(), ints(&[104, 105]));
        assert_eq!(code(&Value::from('A')).unwrap(), Value::int(65));
    }

    #[test]
    fn test_code_rejects_numbers() {
        assert!(matches!(
            code(&ints(&[1])),
            Err(CoreError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_char_of() {
        assert_eq!(
            char_of(&ints(&[104, 105])).unwrap(),
            Value::from(Array::string("hi"))
        );
        let sixty_five = Value::Scalar(Scalar::rational(130, 2).unwrap());
        assert_eq!(char_of(&sixty_five).unwrap(), Value::from('A'));
    }

    #[test]
    fn test_char_of_invalid() {
        assert!(matches!(
            char_of(&Value::int(-1)),
            Err(CoreError::Domain { .. })
        ));
        assert!(matches!(
            char_of(&Value::int(0xD800)),
            Err(CoreError::Domain { .. })
        ));
        assert!(matches!(
            char_of(&Value::from('a')),
            Err(CoreError::TypeMismatch { .. })
        ));
        let half = Value::Scalar(Scalar::rational(1, 2).unwrap());
        assert!(matches!(char_of(&half), Err(CoreError::TypeMismatch { .. })));
    }

    #[test]
    fn test_round_trip() {
        for word in ["hello", "world", "ünïcødé"] {
            let s = Value::from(Array::string(word));
            assert_eq!(char_of(&code(&s).unwrap()).unwrap(), s);
        }
    }

    #[test]
    fn test_code_rows() {
        let rows = code_rows(&[
            Value::from(Array::string("hello")),
            Value::from(Array::string("world")),
        ])
        .unwrap();
        let a = rows.as_array().unwrap();
        assert_eq!(a.shape(), &[2, 5]);
        assert_eq!(a.as_slice()[0], Value::int(104));
        assert_eq!(a.as_slice()[5], Value::int(119));
        assert_eq!(char_of(&rows).unwrap().shape(), &[2, 5]);
    }

    #[test]
    fn test_code_rows_unequal_lengths() {
        let r = code_rows(&[
            Value::from(Array::string("hi")),
            Value::from(Array::string("hey")),
        ]);
        assert!(matches!(r, Err(CoreError::ShapeMismatch { .. })));
    }
}
